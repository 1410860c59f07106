/// A scrollable region of the landing page, addressed by the `id` attribute of its anchor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Section {
    pub id: &'static str,
    pub label: &'static str,
}

pub const HOME: &str = "home";
pub const ABOUT: &str = "about";
pub const PROJECTS: &str = "projects";
pub const SKILLS: &str = "skills";
pub const RESUME: &str = "resume";
pub const CONTACT: &str = "contact";

/// Page order, top to bottom. Also the tie-break order for the tracker.
pub static SECTIONS: [Section; 6] = [
    Section {
        id: HOME,
        label: "HOME",
    },
    Section {
        id: ABOUT,
        label: "ABOUT",
    },
    Section {
        id: PROJECTS,
        label: "PROJECTS",
    },
    Section {
        id: SKILLS,
        label: "SKILLS",
    },
    Section {
        id: RESUME,
        label: "RESUME",
    },
    Section {
        id: CONTACT,
        label: "CONTACT",
    },
];

/// Space reserved for the fixed header, in CSS pixels.
pub const HEADER_OFFSET: f64 = 100.0;

/// Header switches to its opaque style past this offset.
pub const SCROLLED_THRESHOLD: f64 = 10.0;

/// Scroll-to-top button shows past this offset.
pub const BACK_TO_TOP_THRESHOLD: f64 = 300.0;

/// Scroll sampling never cancels the scroll, so the listener is registered passive.
pub const SCROLL_LISTENER_PASSIVE: bool = true;

pub fn find(id: &str) -> Option<&'static Section> {
    SECTIONS.iter().find(|s| s.id == id)
}

pub fn is_scrolled(scroll_y: f64, threshold: f64) -> bool {
    scroll_y > threshold
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_section_ids_unique() {
        for (i, a) in SECTIONS.iter().enumerate() {
            for b in &SECTIONS[i + 1..] {
                assert_ne!(a.id, b.id);
            }
        }
    }

    #[test]
    fn test_section_order() {
        let ids = SECTIONS.iter().map(|s| s.id).collect::<Vec<_>>();
        assert_eq!(
            ids,
            vec!["home", "about", "projects", "skills", "resume", "contact"]
        );
    }

    #[test]
    fn test_find() {
        assert_eq!(find("resume").map(|s| s.label), Some("RESUME"));
        assert!(find("blog").is_none());
    }

    #[test]
    fn test_scroll_listener_is_passive() {
        assert!(SCROLL_LISTENER_PASSIVE);
    }

    #[test]
    fn test_is_scrolled_is_strict() {
        assert!(!is_scrolled(0.0, SCROLLED_THRESHOLD));
        assert!(!is_scrolled(10.0, SCROLLED_THRESHOLD));
        assert!(is_scrolled(10.5, SCROLLED_THRESHOLD));
        assert!(!is_scrolled(300.0, BACK_TO_TOP_THRESHOLD));
        assert!(is_scrolled(301.0, BACK_TO_TOP_THRESHOLD));
    }
}
