//! Background environment selection
//!
//! Maps a user-facing environment selection to the HDR asset file the
//! rendering layer should load. Loading and image-based-lighting setup
//! are the renderer's business; this module only resolves names.

use std::path::PathBuf;

/// Directory holding the equirectangular HDR environment maps
pub const ENVIRONMENT_DIR: &str = "assets/textures/environment";

/// Resolve an environment selection to an HDR file name
///
/// Accepts an explicit `.hdr` file name, a keyword (`outdoor`,
/// `showroom`, possibly embedded in a longer identifier), or anything
/// else, which falls back to the showroom map.
pub fn resolve_environment(input: &str) -> String {
    let key = input.trim().to_lowercase();
    if key.is_empty() {
        return "showroom.hdr".to_string();
    }
    if key.ends_with(".hdr") {
        return key;
    }
    if key.contains("outdoor") {
        return "outdoor.hdr".to_string();
    }
    "showroom.hdr".to_string()
}

/// Resolve an environment selection to its full asset path
pub fn environment_path(input: &str) -> PathBuf {
    PathBuf::from(ENVIRONMENT_DIR).join(resolve_environment(input))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keywords() {
        assert_eq!(resolve_environment("showroom"), "showroom.hdr");
        assert_eq!(resolve_environment("outdoor"), "outdoor.hdr");
        assert_eq!(resolve_environment("sunny_outdoor_noon"), "outdoor.hdr");
    }

    #[test]
    fn test_explicit_hdr_passthrough() {
        assert_eq!(resolve_environment("Studio_Small.HDR"), "studio_small.hdr");
    }

    #[test]
    fn test_unknown_falls_back_to_showroom() {
        assert_eq!(resolve_environment(""), "showroom.hdr");
        assert_eq!(resolve_environment("underwater"), "showroom.hdr");
    }

    #[test]
    fn test_environment_path() {
        let path = environment_path("outdoor");
        assert!(path.ends_with("outdoor.hdr"));
        assert!(path.starts_with(ENVIRONMENT_DIR));
    }
}
