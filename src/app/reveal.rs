use leptos::{html, prelude::*};
use leptos_use::{use_intersection_observer_with_options, UseIntersectionObserverOptions};

use crate::motion::{in_view, next_visibility};

/// Fade-in flag for a section, driven by an intersection observer on its root.
///
/// With `once` the flag stays on after the first reveal.
pub fn use_reveal(target: NodeRef<html::Section>, threshold: f64, once: bool) -> Signal<bool> {
    let (visible, set_visible) = signal(false);

    use_intersection_observer_with_options(
        target,
        move |entries, _| {
            let intersecting = entries
                .iter()
                .any(|e| in_view(e.is_intersecting(), e.intersection_ratio(), threshold));
            let prev = visible.get_untracked();
            let next = next_visibility(prev, intersecting, once);
            if next != prev {
                set_visible.set(next);
            }
        },
        UseIntersectionObserverOptions::default().thresholds(vec![threshold]),
    );

    visible.into()
}

/// Class list for a revealed block.
pub fn reveal_class(visible: bool, base: &'static str) -> String {
    if visible {
        format!("{base} reveal reveal-in")
    } else {
        format!("{base} reveal")
    }
}
