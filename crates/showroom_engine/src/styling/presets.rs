//! Built-in paint presets

use crate::foundation::color::Color;

/// Body paint parameters for a named preset
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PaintPreset {
    /// Paint base color
    pub color: Color,
    /// Metallic factor
    pub metalness: f32,
    /// Surface roughness
    pub roughness: f32,
    /// Clearcoat layer intensity
    pub clearcoat: f32,
    /// Clearcoat layer roughness
    pub clearcoat_roughness: f32,
}

/// Look up a paint preset by key
///
/// Available presets:
/// - "red_matte" - flat signal red, barely any coating
/// - "blue_metallic" - deep metallic blue with a strong clearcoat
/// - "black_glossy" - near-black with a mirror clearcoat
///
/// Unknown keys fall back to `red_matte`.
pub fn paint_preset(key: &str) -> PaintPreset {
    match key {
        "blue_metallic" => PaintPreset {
            color: Color::from_hex(0x1e62ff),
            metalness: 0.9,
            roughness: 0.25,
            clearcoat: 0.8,
            clearcoat_roughness: 0.1,
        },
        "black_glossy" => PaintPreset {
            color: Color::from_hex(0x111111),
            metalness: 0.6,
            roughness: 0.15,
            clearcoat: 1.0,
            clearcoat_roughness: 0.03,
        },
        // "red_matte" and anything unrecognized
        _ => PaintPreset {
            color: Color::from_hex(0xb40000),
            metalness: 0.2,
            roughness: 0.8,
            clearcoat: 0.05,
            clearcoat_roughness: 0.1,
        },
    }
}

/// List all available preset keys
pub fn list_presets() -> Vec<&'static str> {
    vec!["red_matte", "blue_metallic", "black_glossy"]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_presets() {
        let blue = paint_preset("blue_metallic");
        assert_eq!(blue.color, Color::from_hex(0x1e62ff));
        assert!((blue.metalness - 0.9).abs() < f32::EPSILON);

        let black = paint_preset("black_glossy");
        assert!((black.clearcoat - 1.0).abs() < f32::EPSILON);
        assert!((black.clearcoat_roughness - 0.03).abs() < f32::EPSILON);
    }

    #[test]
    fn test_unknown_preset_falls_back_to_red_matte() {
        assert_eq!(paint_preset("nonexistent_key"), paint_preset("red_matte"));
    }

    #[test]
    fn test_list_presets() {
        let presets = list_presets();
        assert_eq!(presets.len(), 3);
        assert!(presets.contains(&"red_matte"));
    }
}
