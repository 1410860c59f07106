use crate::sections::Section;

/// Read access to anchor geometry plus the one side effect the scroller needs.
///
/// All values are CSS pixels. `anchor_top` is relative to the top of the viewport
/// (what `getBoundingClientRect().top` reports), so a document-relative position is
/// `anchor_top + scroll_y`.
pub trait Viewport {
    fn anchor_top(&self, id: &str) -> Option<f64>;
    fn viewport_height(&self) -> f64;
    fn scroll_y(&self) -> f64;
    fn smooth_scroll_to(&self, y: f64);
}

/// Tracks which section is closest to the header line while the page scrolls.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ActiveSectionTracker {
    sections: &'static [Section],
    offset: f64,
    active: Option<&'static str>,
}

impl ActiveSectionTracker {
    pub fn new(sections: &'static [Section], offset: f64) -> Self {
        Self {
            sections,
            offset,
            active: None,
        }
    }

    pub fn active(&self) -> Option<&'static str> {
        self.active
    }

    pub fn is_active(&self, id: &str) -> bool {
        self.active == Some(id)
    }

    /// Eligible section whose anchor top is nearest the offset line.
    ///
    /// A section is eligible once its top has reached the bottom edge of the viewport.
    /// Sections without an anchor are skipped. Ties keep the earlier section.
    pub fn closest(&self, viewport: &impl Viewport) -> Option<&'static str> {
        let viewport_height = viewport.viewport_height();
        let mut best: Option<(&'static str, f64)> = None;
        for section in self.sections {
            let Some(top) = viewport.anchor_top(section.id) else {
                continue;
            };
            if top > viewport_height {
                continue;
            }
            let distance = (top - self.offset).abs();
            match best {
                Some((_, d)) if d <= distance => {}
                _ => best = Some((section.id, distance)),
            }
        }
        best.map(|(id, _)| id)
    }

    /// Re-samples the viewport. Returns true only if the active section changed.
    pub fn recompute(&mut self, viewport: &impl Viewport) -> bool {
        match self.closest(viewport) {
            Some(id) if self.active != Some(id) => {
                self.active = Some(id);
                true
            }
            // nothing eligible keeps the previous answer
            _ => false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SectionScroller {
    offset: f64,
}

impl SectionScroller {
    /// Sub-pixel differences are treated as "already there".
    const EPSILON: f64 = 0.5;

    pub fn new(offset: f64) -> Self {
        Self { offset }
    }

    /// Document offset that puts the anchor just below the header.
    pub fn target(&self, viewport: &impl Viewport, id: &str) -> Option<f64> {
        let top = viewport.anchor_top(id)?;
        Some((top + viewport.scroll_y() - self.offset).max(0.0))
    }

    /// Smoothly scrolls to the section. Returns the requested offset, or `None` when
    /// the anchor is missing or the viewport is already in place.
    pub fn scroll_to(&self, viewport: &impl Viewport, id: &str) -> Option<f64> {
        let target = self.target(viewport, id)?;
        Self::scroll_if_needed(viewport, target)
    }

    pub fn scroll_to_top(&self, viewport: &impl Viewport) -> Option<f64> {
        Self::scroll_if_needed(viewport, 0.0)
    }

    fn scroll_if_needed(viewport: &impl Viewport, target: f64) -> Option<f64> {
        if (viewport.scroll_y() - target).abs() < Self::EPSILON {
            return None;
        }
        viewport.smooth_scroll_to(target);
        Some(target)
    }
}
