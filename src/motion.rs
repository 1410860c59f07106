/// Quadratic ease-out. `t` elapsed, `b` start, `c` change, `d` duration.
pub fn ease_out_quad(t: f64, b: f64, c: f64, d: f64) -> f64 {
    let t = t / d;
    -c * t * (t - 2.0) + b
}

/// Value shown by a count-up animation after `elapsed_ms`.
pub fn count_up(target: u32, elapsed_ms: u64, duration_ms: u64) -> u32 {
    if duration_ms == 0 || elapsed_ms >= duration_ms {
        return target;
    }
    let v = ease_out_quad(elapsed_ms as f64, 0.0, target as f64, duration_ms as f64);
    (v.round() as u32).min(target)
}

/// Next state of a reveal-on-view flag. With `once` the flag latches on.
pub fn next_visibility(was_visible: bool, intersecting: bool, once: bool) -> bool {
    if once && was_visible {
        return true;
    }
    intersecting
}

/// Whether an intersection observer entry counts as "in view" for `threshold`.
pub fn in_view(intersecting: bool, ratio: f64, threshold: f64) -> bool {
    intersecting && ratio >= threshold
}

/// Prefix of `text` revealed after `elapsed_ms` when typing one char every `per_char_ms`.
pub fn typed_prefix(text: &str, elapsed_ms: u64, per_char_ms: u64) -> &str {
    let chars = if per_char_ms == 0 {
        usize::MAX
    } else {
        (elapsed_ms / per_char_ms) as usize
    };
    match text.char_indices().nth(chars) {
        Some((i, _)) => &text[..i],
        None => text,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ease_out_quad_endpoints() {
        assert_eq!(ease_out_quad(0.0, 0.0, 10.0, 2500.0), 0.0);
        assert_eq!(ease_out_quad(2500.0, 0.0, 10.0, 2500.0), 10.0);
        // halfway in time is three quarters of the way in value
        assert_eq!(ease_out_quad(1250.0, 0.0, 10.0, 2500.0), 7.5);
    }

    #[test]
    fn test_count_up_is_monotonic_and_bounded() {
        let mut prev = 0;
        for ms in (0..=3000).step_by(16) {
            let v = count_up(10, ms, 2500);
            assert!(v >= prev);
            assert!(v <= 10);
            prev = v;
        }
        assert_eq!(count_up(10, 2500, 2500), 10);
        assert_eq!(count_up(10, 99_999, 2500), 10);
        assert_eq!(count_up(2, 0, 2500), 0);
        assert_eq!(count_up(7, 10, 0), 7);
    }

    #[test]
    fn test_visibility_latch() {
        assert!(!next_visibility(false, false, true));
        assert!(next_visibility(false, true, true));
        assert!(next_visibility(true, false, true));

        assert!(next_visibility(false, true, false));
        assert!(!next_visibility(true, false, false));
    }

    #[test]
    fn test_in_view_needs_threshold() {
        assert!(!in_view(true, 0.1, 0.3));
        assert!(in_view(true, 0.3, 0.3));
        assert!(!in_view(false, 0.0, 0.0));
        assert!(in_view(true, 0.0, 0.0));
    }

    #[test]
    fn test_typed_prefix() {
        assert_eq!(typed_prefix("npm run dev", 0, 100), "");
        assert_eq!(typed_prefix("npm run dev", 350, 100), "npm");
        assert_eq!(typed_prefix("npm run dev", 1100, 100), "npm run dev");
        assert_eq!(typed_prefix("npm run dev", 5000, 100), "npm run dev");
        assert_eq!(typed_prefix("npm", 1, 0), "npm");
    }

    #[test]
    fn test_typed_prefix_multibyte() {
        assert_eq!(typed_prefix("🚀 go", 100, 100), "🚀");
        assert_eq!(typed_prefix("Pölten", 200, 100), "Pö");
    }
}
