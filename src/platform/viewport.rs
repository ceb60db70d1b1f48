//! Canvas sizing

use crate::consts::{ASPECT_HEIGHT, ASPECT_WIDTH};

/// Largest 16:9 size that fits inside `available_w` x `available_h`
///
/// Whichever dimension is the binding constraint is used in full; the other
/// is derived from it. Sizes are rounded down to whole pixels and never
/// drop below 1x1.
pub fn fit_aspect(available_w: f32, available_h: f32) -> (u32, u32) {
    let (w, h) = if available_w * ASPECT_HEIGHT > available_h * ASPECT_WIDTH {
        // Wider than 16:9, height binds
        (available_h * ASPECT_WIDTH / ASPECT_HEIGHT, available_h)
    } else {
        (available_w, available_w * ASPECT_HEIGHT / ASPECT_WIDTH)
    };
    ((w.floor() as u32).max(1), (h.floor() as u32).max(1))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_fit() {
        assert_eq!(fit_aspect(1600.0, 900.0), (1600, 900));
    }

    #[test]
    fn test_wide_viewport_binds_height() {
        assert_eq!(fit_aspect(2000.0, 450.0), (800, 450));
    }

    #[test]
    fn test_tall_viewport_binds_width() {
        assert_eq!(fit_aspect(800.0, 2000.0), (800, 450));
    }

    #[test]
    fn test_never_zero() {
        assert_eq!(fit_aspect(0.0, 0.0), (1, 1));
    }
}
