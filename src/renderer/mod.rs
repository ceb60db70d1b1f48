//! WebGPU rendering module
//!
//! Shapes are built on the CPU as flat-colored triangles and drawn with a
//! single pipeline. Rendering only reads `GameState`.

pub mod pipeline;
pub mod shapes;
pub mod vertex;

pub use pipeline::{RenderState, world_to_ndc};
