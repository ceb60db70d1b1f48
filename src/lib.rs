//! Ledge Runner - A small side-scrolling platformer
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, collisions, level generation)
//! - `renderer`: WebGPU rendering pipeline
//! - `platform`: Browser input and viewport helpers
//! - `settings`: Per-session configuration from the page URL

pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use settings::{CharacterStyle, Settings};

use glam::Vec2;

/// Game configuration constants
///
/// Magnitudes are expressed per simulation tick at the reference resolution.
/// Anything that depends on the surface size goes through [`Scale`].
pub mod consts {
    /// Fixed simulation timestep (60 Hz, one tick per reference frame)
    pub const SIM_DT: f32 = 1.0 / 60.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 4;

    /// Reference resolution all magnitudes are tuned against
    pub const REFERENCE_WIDTH: f32 = 800.0;
    pub const REFERENCE_HEIGHT: f32 = 450.0;
    /// Surface aspect ratio (16:9)
    pub const ASPECT_WIDTH: f32 = 16.0;
    pub const ASPECT_HEIGHT: f32 = 9.0;

    /// Character defaults
    pub const CHARACTER_WIDTH: f32 = 40.0;
    pub const CHARACTER_HEIGHT: f32 = 60.0;
    pub const CHARACTER_START_X: f32 = 50.0;
    /// Max horizontal speed (pixels/tick)
    pub const CHARACTER_SPEED: f32 = 5.0;
    /// Horizontal velocity change per tick while a direction is held
    pub const CHARACTER_ACCEL: f32 = 1.0;
    /// Horizontal velocity multiplier per tick with no direction held
    pub const FRICTION: f32 = 0.8;
    /// Downward acceleration (pixels/tick²)
    pub const GRAVITY: f32 = 0.8;
    /// Upward velocity assigned on jump (pixels/tick)
    pub const JUMP_IMPULSE: f32 = 15.0;

    /// Level layout
    pub const PLATFORM_THICKNESS: f32 = 10.0;
    pub const LEVEL_START_X: f32 = 100.0;
    pub const LEVEL_RIGHT_MARGIN: f32 = 50.0;
    pub const PLATFORM_MIN_WIDTH: f32 = 50.0;
    pub const PLATFORM_MAX_WIDTH: f32 = 120.0;
    pub const PLATFORM_MIN_GAP: f32 = 80.0;
    pub const PLATFORM_MAX_GAP: f32 = 150.0;
    /// Highest platform top
    pub const PLATFORM_TOP_BAND: f32 = 150.0;
    /// Lowest platform top, measured up from the bottom edge
    pub const PLATFORM_BOTTOM_BAND: f32 = 50.0;

    /// Goal platform
    pub const GOAL_WIDTH: f32 = 80.0;
    pub const GOAL_RIGHT_MARGIN: f32 = 10.0;
    /// Goal top, measured up from the bottom edge
    pub const GOAL_ELEVATION: f32 = 130.0;

    /// Smallest step the level cursor may advance by
    pub const MIN_LEVEL_STEP: f32 = 1.0;
}

/// Per-axis ratio of a surface to the reference resolution
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Scale {
    pub x: f32,
    pub y: f32,
}

impl Scale {
    pub fn for_surface(width: f32, height: f32) -> Self {
        Self {
            x: width / consts::REFERENCE_WIDTH,
            y: height / consts::REFERENCE_HEIGHT,
        }
    }

    /// Scale a reference-space vector
    #[inline]
    pub fn apply(&self, v: Vec2) -> Vec2 {
        Vec2::new(v.x * self.x, v.y * self.y)
    }
}

impl Default for Scale {
    fn default() -> Self {
        Self { x: 1.0, y: 1.0 }
    }
}
