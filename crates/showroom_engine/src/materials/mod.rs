//! Material subsystem
//!
//! Tagged material kinds, parameter blocks, and the assignment
//! normalization used by the styling pipeline.

pub mod material;
pub mod params;

pub use material::{Material, MaterialAssignment, MaterialKind};
pub use params::{PhysicalMaterialParams, UnlitMaterialParams};
