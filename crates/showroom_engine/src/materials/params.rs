//! Material parameter types for the supported material kinds

use crate::foundation::color::Color;

/// Physically-based material parameters
///
/// Covers the full set of knobs the styling appliers touch: base PBR
/// response, clearcoat layer, emission, and alpha transparency.
#[derive(Debug, Clone, PartialEq)]
pub struct PhysicalMaterialParams {
    /// Base color (albedo)
    pub base_color: Color,
    /// Metallic factor (0.0 = dielectric, 1.0 = metallic)
    pub metallic: f32,
    /// Roughness factor (0.0 = mirror, 1.0 = completely rough)
    pub roughness: f32,
    /// Clearcoat layer intensity
    pub clearcoat: f32,
    /// Roughness of the clearcoat layer
    pub clearcoat_roughness: f32,
    /// Emission color for self-illuminated surfaces
    pub emissive: Color,
    /// Emission strength multiplier
    pub emissive_intensity: f32,
    /// Alpha opacity (0.0 = fully transparent, 1.0 = opaque)
    pub opacity: f32,
    /// Whether alpha blending is enabled
    pub transparent: bool,
    /// Degree of non-metallic reflectivity
    pub reflectivity: f32,
    /// Environment map reflection intensity
    pub env_map_intensity: f32,
}

impl Default for PhysicalMaterialParams {
    /// Defaults match the replacement material substituted when a
    /// non-PBR assignment is upgraded: white base, metallic 0.6,
    /// roughness 0.4.
    fn default() -> Self {
        Self {
            base_color: Color::WHITE,
            metallic: 0.6,
            roughness: 0.4,
            clearcoat: 0.0,
            clearcoat_roughness: 0.0,
            emissive: Color::BLACK,
            emissive_intensity: 1.0,
            opacity: 1.0,
            transparent: false,
            reflectivity: 0.5,
            env_map_intensity: 1.0,
        }
    }
}

/// Unlit material parameters for simple flat shading
///
/// Not PBR-compatible; the styling appliers replace these wholesale
/// rather than mutating them.
#[derive(Debug, Clone, PartialEq)]
pub struct UnlitMaterialParams {
    /// Material color
    pub color: Color,
    /// Alpha opacity
    pub opacity: f32,
}

impl Default for UnlitMaterialParams {
    fn default() -> Self {
        Self {
            color: Color::WHITE,
            opacity: 1.0,
        }
    }
}
