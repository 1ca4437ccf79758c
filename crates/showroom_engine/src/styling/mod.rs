//! Material styling subsystem
//!
//! Paint presets plus the per-category appliers that push user-selected
//! parameters onto a classified model.

pub mod appliers;
pub mod presets;

pub use appliers::{
    apply_body_pbr, apply_calipers, apply_glass, apply_interior, apply_paint_preset,
    apply_rims_custom, apply_rims_style, set_headlight_intensity, RimStyle,
};
pub use presets::{list_presets, paint_preset, PaintPreset};
