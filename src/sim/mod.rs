//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - Stable iteration order (platforms in generation order)
//! - No rendering or platform dependencies

pub mod geometry;
pub mod level;
pub mod state;
pub mod tick;

pub use geometry::{Rect, overlaps};
pub use level::generate;
pub use state::{Character, GameEvent, GamePhase, GameState, Movement, Platform, RunSummary};
pub use tick::{TickInput, tick};
