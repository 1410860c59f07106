use web_sys::{Document, ScrollBehavior, ScrollToOptions, Window};

use crate::scroll::{SectionScroller, Viewport};
use crate::sections::{find, HEADER_OFFSET};

/// [`Viewport`] backed by the live `window` / `document`.
pub struct BrowserViewport {
    window: Window,
    document: Document,
}

impl BrowserViewport {
    /// `None` outside a browser (e.g. during SSR).
    pub fn new() -> Option<Self> {
        let window = web_sys::window()?;
        let document = window.document()?;
        Some(Self { window, document })
    }
}

impl Viewport for BrowserViewport {
    fn anchor_top(&self, id: &str) -> Option<f64> {
        self.document
            .get_element_by_id(id)
            .map(|el| el.get_bounding_client_rect().top())
    }

    fn viewport_height(&self) -> f64 {
        self.window
            .inner_height()
            .ok()
            .and_then(|h| h.as_f64())
            .unwrap_or_default()
    }

    fn scroll_y(&self) -> f64 {
        self.window.scroll_y().unwrap_or_default()
    }

    fn smooth_scroll_to(&self, y: f64) {
        let options = ScrollToOptions::new();
        options.set_top(y);
        options.set_behavior(ScrollBehavior::Smooth);
        self.window.scroll_to_with_scroll_to_options(&options);
    }
}

pub fn scroll_to_section(id: &str) {
    if find(id).is_none() {
        log::warn!("scroll requested for unknown section #{id}");
    }
    let Some(viewport) = BrowserViewport::new() else {
        return;
    };
    if let Some(y) = SectionScroller::new(HEADER_OFFSET).scroll_to(&viewport, id) {
        log::debug!("scrolling to #{id} at {y}px");
    }
}

pub fn scroll_to_top() {
    if let Some(viewport) = BrowserViewport::new() {
        SectionScroller::new(HEADER_OFFSET).scroll_to_top(&viewport);
    }
}
