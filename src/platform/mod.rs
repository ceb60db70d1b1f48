//! Platform abstraction layer
//!
//! Browser-facing helpers that stay testable on native:
//! - Input events to held intents
//! - Viewport fitting for the canvas

pub mod input;
pub mod viewport;

pub use input::{Intent, apply_key};
pub use viewport::fit_aspect;
