//! Tests for value range constants and runtime defaults

#[cfg(test)]
mod tests {
    use heatgrid::io::configuration::{
        ANIMATION_SUFFIX, DEFAULT_CELL_SIZE, DEFAULT_CLICK_VALUE, DEFAULT_FULL_VALUE_RANGE,
        DEFAULT_HEIGHT, DEFAULT_OUTPUT, DEFAULT_PIXEL_SCALE, DEFAULT_TOTAL_RANGE, DEFAULT_WIDTH,
        GIF_FRAME_DELAY_MS, MAX_PIXEL_SCALE, MAX_VALUE, MIN_VALUE, VIEWER_MIN_FRAME_DELAY_MS,
    };

    // Tests the stored value range is [0, 100]
    // Verified by widening the upper bound
    #[test]
    fn test_value_range() {
        assert_eq!(MIN_VALUE, 0);
        assert_eq!(MAX_VALUE, 100);
    }

    // Tests the demo board defaults
    // Verified by changing the default cell size
    #[test]
    fn test_default_board() {
        assert_eq!(DEFAULT_WIDTH, 100);
        assert_eq!(DEFAULT_HEIGHT, 100);
        assert!((DEFAULT_CELL_SIZE - 4.0).abs() < f64::EPSILON);
    }

    // Tests the default brush is a valid falloff with the peak at the value ceiling
    // Verified by setting equal default radii
    #[test]
    fn test_default_brush() {
        assert_eq!(DEFAULT_CLICK_VALUE, MAX_VALUE);
        assert_eq!(DEFAULT_FULL_VALUE_RANGE, 2);
        assert_eq!(DEFAULT_TOTAL_RANGE, 20);
        assert_ne!(DEFAULT_FULL_VALUE_RANGE, DEFAULT_TOTAL_RANGE);
    }

    // Tests rendering defaults stay within accepted limits
    // Verified by raising the default scale past the maximum
    #[test]
    fn test_render_defaults() {
        assert!(DEFAULT_PIXEL_SCALE >= 1);
        assert!(DEFAULT_PIXEL_SCALE <= MAX_PIXEL_SCALE);
        assert!(GIF_FRAME_DELAY_MS >= VIEWER_MIN_FRAME_DELAY_MS);
    }

    // Tests output names are filesystem safe
    // Verified by adding a path separator to the suffix
    #[test]
    fn test_output_names() {
        assert!(DEFAULT_OUTPUT.ends_with(".png"));
        for ch in ANIMATION_SUFFIX.chars() {
            assert!(
                ch.is_alphanumeric() || ch == '_' || ch == '-',
                "Animation suffix contains invalid character: {ch}"
            );
        }
    }
}
