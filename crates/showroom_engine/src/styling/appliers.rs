//! Per-category material appliers
//!
//! Each applier restyles every part of one category. Appliers never
//! fail: a missing model is a no-op, an empty category list is a no-op,
//! and an incompatible material is silently replaced with a fresh
//! physical one before mutation. Numeric parameters are clamped to
//! [0,1] where that is their valid range; colors pass through as given.

use super::presets::paint_preset;
use crate::foundation::color::Color;
use crate::materials::PhysicalMaterialParams;
use crate::parts::PartCategory;
use crate::session::CarModel;
use serde::de::Deserializer;
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;

/// Named rim finish
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RimStyle {
    /// Dark woven carbon look
    Carbon,
    /// Bright machined alloy (the default finish)
    #[default]
    Silver,
}

impl RimStyle {
    /// Lowercase key as used in UI state and share URLs
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Carbon => "carbon",
            Self::Silver => "silver",
        }
    }

    /// Parse a style key; anything other than `carbon` is silver
    pub fn from_key(key: &str) -> Self {
        if key == "carbon" {
            Self::Carbon
        } else {
            Self::Silver
        }
    }
}

impl fmt::Display for RimStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for RimStyle {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for RimStyle {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Ok(Self::from_key(&s))
    }
}

fn clamp01(v: f32) -> f32 {
    v.clamp(0.0, 1.0)
}

/// Restyle every part of `category`, normalizing each material to a
/// physical one first and flagging it for re-upload.
fn style_parts(
    model: &mut CarModel,
    category: PartCategory,
    mut apply: impl FnMut(&mut PhysicalMaterialParams),
) {
    let CarModel { graph, parts, .. } = model;
    for &key in parts.get(category) {
        let Some(drawable) = graph.drawable_mut(key) else {
            continue;
        };
        let mat = drawable.material.ensure_physical();
        mat.needs_upload = true;
        if let Some(params) = mat.physical_params_mut() {
            apply(params);
        }
    }
}

/// Apply a named paint preset to the body (unknown keys fall back to
/// `red_matte`)
pub fn apply_paint_preset(car: Option<&mut CarModel>, preset_key: &str) {
    let preset = paint_preset(preset_key);
    apply_body_pbr(
        car,
        preset.color,
        preset.metalness,
        preset.roughness,
        preset.clearcoat,
        preset.clearcoat_roughness,
    );
}

/// Apply custom PBR paint parameters to the body
pub fn apply_body_pbr(
    car: Option<&mut CarModel>,
    color: Color,
    metalness: f32,
    roughness: f32,
    clearcoat: f32,
    clearcoat_roughness: f32,
) {
    let Some(car) = car else { return };
    style_parts(car, PartCategory::Body, |mat| {
        mat.base_color = color;
        mat.metallic = clamp01(metalness);
        mat.roughness = clamp01(roughness);
        mat.clearcoat = clamp01(clearcoat);
        mat.clearcoat_roughness = clamp01(clearcoat_roughness);
        mat.env_map_intensity = 1.2;
    });
}

/// Apply a named rim finish
pub fn apply_rims_style(car: Option<&mut CarModel>, style: RimStyle) {
    let Some(car) = car else { return };
    style_parts(car, PartCategory::Rims, |mat| match style {
        RimStyle::Carbon => {
            mat.base_color = Color::from_hex(0x222222);
            mat.metallic = 0.3;
            mat.roughness = 0.35;
        }
        RimStyle::Silver => {
            mat.base_color = Color::from_hex(0xc9ccd1);
            mat.metallic = 1.0;
            mat.roughness = 0.25;
        }
    });
}

/// Apply custom rim color and PBR parameters
pub fn apply_rims_custom(
    car: Option<&mut CarModel>,
    color: Color,
    metalness: f32,
    roughness: f32,
) {
    let Some(car) = car else { return };
    style_parts(car, PartCategory::Rims, |mat| {
        mat.base_color = color;
        mat.metallic = clamp01(metalness);
        mat.roughness = clamp01(roughness);
    });
}

/// Paint the brake calipers, with a faint matching glow
pub fn apply_calipers(car: Option<&mut CarModel>, color: Color) {
    let Some(car) = car else { return };
    style_parts(car, PartCategory::Calipers, |mat| {
        mat.base_color = color;
        mat.emissive = color;
        mat.emissive_intensity = 0.15;
        mat.metallic = 0.5;
        mat.roughness = 0.4;
    });
}

/// Tint the glass
///
/// `tint` is a darkness slider: the stored opacity is `1 - tint`, so a
/// higher tint means darker, less transparent glass.
pub fn apply_glass(car: Option<&mut CarModel>, color: Color, tint: f32, roughness: f32) {
    let Some(car) = car else { return };
    style_parts(car, PartCategory::Glass, |mat| {
        mat.base_color = color;
        mat.metallic = 0.0;
        mat.roughness = clamp01(roughness);
        mat.transparent = true;
        mat.opacity = clamp01(1.0 - tint);
        mat.env_map_intensity = 1.2;
        mat.reflectivity = 0.4;
    });
}

/// Recolor the interior: seats and dashboard independently, with fixed
/// surface response per group
pub fn apply_interior(car: Option<&mut CarModel>, seat_color: Color, dash_color: Color) {
    let Some(car) = car else { return };
    style_parts(car, PartCategory::Seats, |mat| {
        mat.base_color = seat_color;
        mat.metallic = 0.1;
        mat.roughness = 0.7;
    });
    style_parts(car, PartCategory::Dashboard, |mat| {
        mat.base_color = dash_color;
        mat.metallic = 0.2;
        mat.roughness = 0.6;
    });
}

/// Set headlight emission intensity; negative levels are floored to 0
pub fn set_headlight_intensity(car: Option<&mut CarModel>, level: f32) {
    let Some(car) = car else { return };
    style_parts(car, PartCategory::Lights, |mat| {
        mat.emissive = Color::WHITE;
        mat.emissive_intensity = level.max(0.0);
    });
}
