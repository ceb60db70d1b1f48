//! Procedural level layout
//!
//! A level is a full-width ground strip, a left-to-right run of floating
//! platforms at random heights, and a single goal platform near the right
//! edge. Magnitudes are tuned at the reference resolution and scaled to the
//! surface, so the same seed lays out the same level at any size.

use rand::Rng;

use super::state::Platform;
use crate::Scale;
use crate::consts::*;

/// Uniform sample from `[lo, hi)`; returns `lo` for an empty or inverted range
fn sample<R: Rng>(rng: &mut R, lo: f32, hi: f32) -> f32 {
    lo + rng.random::<f32>() * (hi - lo).max(0.0)
}

/// Generate the platforms for a `width` x `height` surface
///
/// The result always starts with the ground platform and ends with exactly
/// one goal platform.
pub fn generate<R: Rng>(width: f32, height: f32, rng: &mut R) -> Vec<Platform> {
    let scale = Scale::for_surface(width, height);
    let thickness = PLATFORM_THICKNESS * scale.y;

    let mut platforms = vec![Platform::new(0.0, height - thickness, width, thickness)];

    if width > 0.0 && height > 0.0 {
        let min_width = PLATFORM_MIN_WIDTH * scale.x;
        let max_width = PLATFORM_MAX_WIDTH * scale.x;
        let min_gap = PLATFORM_MIN_GAP * scale.x;
        let max_gap = PLATFORM_MAX_GAP * scale.x;
        let top = PLATFORM_TOP_BAND * scale.y;
        let bottom = height - PLATFORM_BOTTOM_BAND * scale.y;
        let limit = width - LEVEL_RIGHT_MARGIN * scale.x;

        let mut cursor = LEVEL_START_X * scale.x;
        while cursor < limit {
            let platform_width = sample(rng, min_width, max_width);
            let y = sample(rng, top, bottom);
            platforms.push(Platform::new(cursor, y, platform_width, thickness));

            let gap = sample(rng, min_gap, max_gap);
            cursor += (platform_width + gap).max(MIN_LEVEL_STEP);
        }
    }

    let goal_width = GOAL_WIDTH * scale.x;
    platforms.push(Platform::goal(
        width - goal_width - GOAL_RIGHT_MARGIN * scale.x,
        height - GOAL_ELEVATION * scale.y,
        goal_width,
        thickness,
    ));

    log::info!(
        "Generated level for {}x{}: {} platforms",
        width,
        height,
        platforms.len()
    );

    platforms
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::geometry::Rect;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_ground_at_reference_resolution() {
        let mut rng = Pcg32::seed_from_u64(1);
        let platforms = generate(800.0, 450.0, &mut rng);
        let ground = platforms[0];
        assert_eq!(ground.rect, Rect::new(0.0, 440.0, 800.0, 10.0));
        assert!(!ground.is_goal);
    }

    #[test]
    fn test_goal_is_last_and_unique() {
        let mut rng = Pcg32::seed_from_u64(2);
        let platforms = generate(800.0, 450.0, &mut rng);
        assert!(platforms.len() >= 3);
        assert!(platforms.last().unwrap().is_goal);
        assert_eq!(platforms.iter().filter(|p| p.is_goal).count(), 1);

        let goal = platforms.last().unwrap().rect;
        assert_eq!(goal, Rect::new(710.0, 320.0, 80.0, 10.0));
    }

    #[test]
    fn test_floating_platforms_in_band() {
        let mut rng = Pcg32::seed_from_u64(3);
        let platforms = generate(800.0, 450.0, &mut rng);
        let floating = &platforms[1..platforms.len() - 1];
        assert!(!floating.is_empty());

        let mut last_x = f32::MIN;
        for p in floating {
            assert!(p.rect.x >= 100.0 && p.rect.x < 750.0);
            assert!(p.rect.x > last_x);
            assert!(p.rect.width >= 50.0 && p.rect.width <= 120.0);
            assert!(p.rect.y >= 150.0 && p.rect.y <= 400.0);
            assert_eq!(p.rect.height, 10.0);
            last_x = p.rect.x;
        }
    }

    #[test]
    fn test_same_seed_same_level() {
        let a = generate(800.0, 450.0, &mut Pcg32::seed_from_u64(9));
        let b = generate(800.0, 450.0, &mut Pcg32::seed_from_u64(9));
        assert_eq!(a, b);
    }

    #[test]
    fn test_scales_with_surface() {
        let small = generate(800.0, 450.0, &mut Pcg32::seed_from_u64(5));
        let large = generate(1600.0, 900.0, &mut Pcg32::seed_from_u64(5));
        assert_eq!(small.len(), large.len());
        for (s, l) in small.iter().zip(&large) {
            assert!((l.rect.x - s.rect.x * 2.0).abs() < 1e-2);
            assert!((l.rect.y - s.rect.y * 2.0).abs() < 1e-2);
            assert!((l.rect.width - s.rect.width * 2.0).abs() < 1e-2);
        }
    }

    #[test]
    fn test_degenerate_surface_terminates() {
        let mut rng = Pcg32::seed_from_u64(4);
        for (w, h) in [(0.0, 0.0), (0.0, 450.0), (800.0, 0.0), (-10.0, -10.0)] {
            let platforms = generate(w, h, &mut rng);
            assert_eq!(platforms.len(), 2);
            assert!(platforms[1].is_goal);
        }
    }

    proptest! {
        #[test]
        fn prop_level_shape(seed in any::<u64>(), w in 1.0f32..4000.0, h in 1.0f32..2000.0) {
            let platforms = generate(w, h, &mut Pcg32::seed_from_u64(seed));
            prop_assert!(platforms.len() >= 2);
            let ground = platforms[0].rect;
            prop_assert_eq!(ground.x, 0.0);
            prop_assert_eq!(ground.width, w);
            prop_assert!(!platforms[0].is_goal);
            prop_assert!(platforms.last().unwrap().is_goal);
            prop_assert_eq!(platforms.iter().filter(|p| p.is_goal).count(), 1);
        }
    }
}
