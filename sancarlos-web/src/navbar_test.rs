//! Tests for the navbar controller's threshold logic
//!
//! Validates the scroll-offset and viewport-width decisions that drive the
//! scrolled style class and the mobile dropdown behavior.

#[cfg(test)]
mod tests {
    use crate::navbar::{MOBILE_MAX_WIDTH, SCROLL_THRESHOLD, is_mobile_width, is_scrolled};

    /// Tests the scroll threshold exactly at the boundary
    #[test]
    fn test_scroll_threshold_boundary() {
        assert!(!is_scrolled(49.0));
        assert!(!is_scrolled(50.0));
        assert!(is_scrolled(51.0));
    }

    /// Tests scroll extremes
    #[test]
    fn test_scroll_extremes() {
        assert!(!is_scrolled(0.0));
        assert!(is_scrolled(50.1));
        assert!(is_scrolled(10_000.0));
    }

    /// Tests the mobile width threshold exactly at the boundary
    #[test]
    fn test_mobile_width_boundary() {
        assert!(is_mobile_width(767.0));
        assert!(is_mobile_width(768.0));
        assert!(!is_mobile_width(769.0));
    }

    /// Tests the threshold constants the markup's CSS was written against
    #[test]
    fn test_threshold_constants() {
        assert!((SCROLL_THRESHOLD - 50.0).abs() < f64::EPSILON);
        assert!((MOBILE_MAX_WIDTH - 768.0).abs() < f64::EPSILON);
    }
}
