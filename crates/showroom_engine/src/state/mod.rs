//! User-selected configurator state
//!
//! The full set of parameters a user can tweak, externalizable as a
//! flat string-keyed mapping for embedding in a shareable URL query
//! string and restorable from one. Key names are part of the share-link
//! format and must stay stable.

use crate::foundation::color::Color;
use crate::styling::RimStyle;
use serde::{Deserialize, Serialize};

/// All user-selected style parameters plus model and environment choice
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct StyleState {
    /// Selected vehicle model identifier
    pub model: String,
    /// Selected background environment identifier
    pub bg: String,
    /// Body paint color
    pub body_color: Color,
    /// Body metallic factor
    pub body_metal: f32,
    /// Body roughness
    pub body_rough: f32,
    /// Body clearcoat intensity
    #[serde(rename = "bodyCC")]
    pub body_cc: f32,
    /// Named rim finish
    pub rims_style: RimStyle,
    /// Custom rim color
    pub rim_color: Color,
    /// Custom rim metallic factor
    pub rim_metal: f32,
    /// Custom rim roughness
    pub rim_rough: f32,
    /// Brake caliper color
    pub caliper_color: Color,
    /// Glass tint color
    pub glass_color: Color,
    /// Glass tint level (stored material opacity is `1 - tint`)
    pub glass_opacity: f32,
    /// Glass roughness
    pub glass_rough: f32,
    /// Seat color
    pub seat_color: Color,
    /// Dashboard color
    pub dash_color: Color,
    /// Ambient light level
    pub ambient_level: f32,
    /// Headlight emission level
    pub headlight_level: f32,
}

impl Default for StyleState {
    fn default() -> Self {
        Self {
            model: "mercedes_slr".to_string(),
            bg: "showroom".to_string(),
            body_color: Color::from_hex(0xb40000),
            body_metal: 0.6,
            body_rough: 0.2,
            body_cc: 0.8,
            rims_style: RimStyle::Silver,
            rim_color: Color::from_hex(0xc9ccd1),
            rim_metal: 1.0,
            rim_rough: 0.25,
            caliper_color: Color::from_hex(0xff0000),
            glass_color: Color::from_hex(0x3fa7ef),
            glass_opacity: 0.25,
            glass_rough: 0.05,
            seat_color: Color::from_hex(0xc28f5c),
            dash_color: Color::from_hex(0x222222),
            ambient_level: 0.7,
            headlight_level: 1.8,
        }
    }
}

fn fmt_num(v: f32) -> String {
    // f32 Display already renders integral values without a trailing
    // ".0", matching the original share links.
    v.to_string()
}

impl StyleState {
    /// Serialize to ordered `(key, value)` pairs suitable for a URL
    /// query string
    pub fn to_query_pairs(&self) -> Vec<(String, String)> {
        let pairs = [
            ("model", self.model.clone()),
            ("bg", self.bg.clone()),
            ("bodyColor", self.body_color.to_hex_string()),
            ("bodyMetal", fmt_num(self.body_metal)),
            ("bodyRough", fmt_num(self.body_rough)),
            ("bodyCC", fmt_num(self.body_cc)),
            ("rimsStyle", self.rims_style.to_string()),
            ("rimColor", self.rim_color.to_hex_string()),
            ("rimMetal", fmt_num(self.rim_metal)),
            ("rimRough", fmt_num(self.rim_rough)),
            ("caliperColor", self.caliper_color.to_hex_string()),
            ("glassColor", self.glass_color.to_hex_string()),
            ("glassOpacity", fmt_num(self.glass_opacity)),
            ("glassRough", fmt_num(self.glass_rough)),
            ("seatColor", self.seat_color.to_hex_string()),
            ("dashColor", self.dash_color.to_hex_string()),
            ("ambientLevel", fmt_num(self.ambient_level)),
            ("headlightLevel", fmt_num(self.headlight_level)),
        ];
        pairs
            .into_iter()
            .map(|(k, v)| (k.to_string(), v))
            .collect()
    }

    /// Restore state from query pairs
    ///
    /// Unknown keys are ignored. A value that fails to parse for its
    /// field leaves the previous value in place (with a warning) rather
    /// than aborting the whole restore.
    pub fn hydrate_query_pairs<'a, I>(&mut self, pairs: I)
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        for (key, value) in pairs {
            match key {
                "model" => self.model = value.to_string(),
                "bg" => self.bg = value.to_string(),
                "bodyColor" => Self::set_color(&mut self.body_color, key, value),
                "bodyMetal" => Self::set_num(&mut self.body_metal, key, value),
                "bodyRough" => Self::set_num(&mut self.body_rough, key, value),
                "bodyCC" => Self::set_num(&mut self.body_cc, key, value),
                "rimsStyle" => self.rims_style = RimStyle::from_key(value),
                "rimColor" => Self::set_color(&mut self.rim_color, key, value),
                "rimMetal" => Self::set_num(&mut self.rim_metal, key, value),
                "rimRough" => Self::set_num(&mut self.rim_rough, key, value),
                "caliperColor" => Self::set_color(&mut self.caliper_color, key, value),
                "glassColor" => Self::set_color(&mut self.glass_color, key, value),
                "glassOpacity" => Self::set_num(&mut self.glass_opacity, key, value),
                "glassRough" => Self::set_num(&mut self.glass_rough, key, value),
                "seatColor" => Self::set_color(&mut self.seat_color, key, value),
                "dashColor" => Self::set_color(&mut self.dash_color, key, value),
                "ambientLevel" => Self::set_num(&mut self.ambient_level, key, value),
                "headlightLevel" => Self::set_num(&mut self.headlight_level, key, value),
                _ => log::trace!("ignoring unknown state key {key:?}"),
            }
        }
    }

    fn set_num(field: &mut f32, key: &str, value: &str) {
        match value.parse::<f32>() {
            Ok(v) if v.is_finite() => *field = v,
            _ => log::warn!("ignoring non-numeric value {value:?} for {key}"),
        }
    }

    fn set_color(field: &mut Color, key: &str, value: &str) {
        match value.parse::<Color>() {
            Ok(c) => *field = c,
            Err(err) => log::warn!("ignoring bad color {value:?} for {key}: {err}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_factory_configuration() {
        let state = StyleState::default();
        assert_eq!(state.model, "mercedes_slr");
        assert_eq!(state.bg, "showroom");
        assert_eq!(state.body_color, Color::from_hex(0xb40000));
        assert_eq!(state.rims_style, RimStyle::Silver);
        assert!((state.glass_opacity - 0.25).abs() < f32::EPSILON);
        assert!((state.headlight_level - 1.8).abs() < f32::EPSILON);
    }

    #[test]
    fn test_query_pairs_round_trip() {
        let mut state = StyleState::default();
        state.body_metal = 0.9;
        state.rims_style = RimStyle::Carbon;
        state.seat_color = Color::from_hex(0x112233);

        let pairs = state.to_query_pairs();
        let mut restored = StyleState::default();
        restored.hydrate_query_pairs(pairs.iter().map(|(k, v)| (k.as_str(), v.as_str())));

        assert_eq!(restored, state);
    }

    #[test]
    fn test_query_pair_keys_are_stable() {
        let keys: Vec<String> = StyleState::default()
            .to_query_pairs()
            .into_iter()
            .map(|(k, _)| k)
            .collect();
        assert_eq!(keys[0], "model");
        assert!(keys.contains(&"bodyCC".to_string()));
        assert!(keys.contains(&"headlightLevel".to_string()));
        assert_eq!(keys.len(), 18);
    }

    #[test]
    fn test_hydrate_ignores_unknown_keys() {
        let mut state = StyleState::default();
        state.hydrate_query_pairs([("utm_source", "newsletter"), ("bodyMetal", "0.3")]);
        assert!((state.body_metal - 0.3).abs() < f32::EPSILON);
    }

    #[test]
    fn test_hydrate_keeps_previous_value_on_parse_failure() {
        let mut state = StyleState::default();
        state.hydrate_query_pairs([("bodyMetal", "not_a_number"), ("bodyColor", "#zz0000")]);
        assert!((state.body_metal - 0.6).abs() < f32::EPSILON);
        assert_eq!(state.body_color, Color::from_hex(0xb40000));
    }

    #[test]
    fn test_hydrate_unrecognized_rim_style_is_silver() {
        let mut state = StyleState::default();
        state.rims_style = RimStyle::Carbon;
        state.hydrate_query_pairs([("rimsStyle", "chrome")]);
        assert_eq!(state.rims_style, RimStyle::Silver);
    }

    #[test]
    fn test_serde_round_trip_uses_share_key_names() {
        let state = StyleState::default();
        let ron = ron::to_string(&state).expect("serialize");
        assert!(ron.contains("bodyColor"));
        assert!(ron.contains("bodyCC"));
        let back: StyleState = ron::from_str(&ron).expect("deserialize");
        assert_eq!(back, state);
    }
}
