//! Foundation utilities shared across the engine

pub mod color;
pub mod logging;
pub mod math;

pub use color::Color;
pub use math::{Transform, Vec3};
