//! Heuristic part classification
//!
//! Loaded vehicle models arrive with arbitrary naming conventions, so
//! parts are recognized by keyword matching on node and material names.
//! Rules are evaluated in a fixed priority order and the first match
//! wins; keyword sets overlap (a `glass_headlight` mesh matches both
//! glass and lights), so the rule order is part of the contract. Nothing
//! escapes classification: unmatched drawables land in `body`.

use super::{PartCategory, PartIndex};
use crate::scene::{RenderFlags, SceneGraph};

/// Environment reflection intensity applied to every loaded material
const DEFAULT_ENV_INTENSITY: f32 = 1.2;

/// A single classification rule: keyword sets for one category
#[derive(Debug, Clone, Copy)]
pub struct ClassifierRule {
    /// Category assigned when the rule matches
    pub category: PartCategory,
    /// Substrings matched against the lowercased node name
    pub name_keywords: &'static [&'static str],
    /// Substrings matched against the lowercased material name
    pub material_keywords: &'static [&'static str],
}

impl ClassifierRule {
    fn matches(&self, name: &str, material_name: &str) -> bool {
        self.name_keywords.iter().any(|kw| name.contains(kw))
            || self
                .material_keywords
                .iter()
                .any(|kw| material_name.contains(kw))
    }
}

/// Classification rules in priority order; first match wins
///
/// `body` is deliberately absent: it is the fallback for drawables no
/// rule claims.
pub const CLASSIFIER_RULES: &[ClassifierRule] = &[
    ClassifierRule {
        category: PartCategory::Glass,
        name_keywords: &["glass", "window", "windscreen"],
        material_keywords: &["glass"],
    },
    ClassifierRule {
        category: PartCategory::Lights,
        name_keywords: &["light", "headlight", "tail"],
        material_keywords: &["light", "emissive"],
    },
    ClassifierRule {
        category: PartCategory::Rims,
        name_keywords: &["rim", "wheel"],
        material_keywords: &["rim", "wheel"],
    },
    ClassifierRule {
        category: PartCategory::Tires,
        name_keywords: &["tire", "tyre"],
        material_keywords: &["tire", "rubber"],
    },
    ClassifierRule {
        category: PartCategory::Seats,
        name_keywords: &["seat", "leather", "chair"],
        material_keywords: &["leather"],
    },
    ClassifierRule {
        category: PartCategory::Dashboard,
        name_keywords: &["dashboard", "dash", "interior"],
        material_keywords: &["interior"],
    },
    ClassifierRule {
        category: PartCategory::Calipers,
        name_keywords: &["caliper", "brake"],
        material_keywords: &["caliper"],
    },
];

/// Classify a name pair without touching a graph
///
/// Exposed separately so the rule table can be audited in isolation.
pub fn classify_names(name: &str, material_name: &str) -> PartCategory {
    let name = name.to_lowercase();
    let material_name = material_name.to_lowercase();
    CLASSIFIER_RULES
        .iter()
        .find(|rule| rule.matches(&name, &material_name))
        .map_or(PartCategory::Body, |rule| rule.category)
}

/// Build the part index for a freshly loaded scene graph
///
/// Single traversal doing two things: normalizing render state on every
/// drawable (shadows on, default environment reflection on any carried
/// material, dirty flag set) and assigning each drawable to exactly one
/// category.
pub fn classify(graph: &mut SceneGraph) -> PartIndex {
    let mut index = PartIndex::new();

    for key in graph.drawables() {
        let Some(node) = graph.node_mut(key) else {
            continue;
        };
        let name = node.name.clone();
        let Some(drawable) = node.drawable.as_mut() else {
            continue;
        };

        drawable
            .flags
            .insert(RenderFlags::CAST_SHADOWS | RenderFlags::RECEIVE_SHADOWS);
        if let Some(mat) = drawable.material.first_mut() {
            if let Some(params) = mat.physical_params_mut() {
                params.env_map_intensity = DEFAULT_ENV_INTENSITY;
            }
            mat.needs_upload = true;
        }

        let category = classify_names(&name, drawable.material.material_name());
        index.insert(category, key);
    }

    for (category, nodes) in index.iter() {
        if !nodes.is_empty() {
            log::debug!("classified {} part(s) as {category}", nodes.len());
        }
    }

    index
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::materials::{
        Material, MaterialAssignment, PhysicalMaterialParams, UnlitMaterialParams,
    };

    fn mesh(graph: &mut SceneGraph, name: &str) -> crate::scene::NodeKey {
        let root = graph.root();
        graph.add_mesh(
            root,
            name,
            MaterialAssignment::Single(Material::physical(PhysicalMaterialParams::default())),
        )
    }

    fn mesh_with_material(
        graph: &mut SceneGraph,
        name: &str,
        material_name: &str,
    ) -> crate::scene::NodeKey {
        let root = graph.root();
        graph.add_mesh(
            root,
            name,
            MaterialAssignment::Single(
                Material::physical(PhysicalMaterialParams::default()).with_name(material_name),
            ),
        )
    }

    #[test]
    fn test_keyword_categories() {
        assert_eq!(classify_names("windscreen_front", ""), PartCategory::Glass);
        assert_eq!(classify_names("taillight_left", ""), PartCategory::Lights);
        assert_eq!(classify_names("front_wheel", ""), PartCategory::Rims);
        assert_eq!(classify_names("tyre_rear", ""), PartCategory::Tires);
        assert_eq!(classify_names("driver_chair", ""), PartCategory::Seats);
        assert_eq!(classify_names("dash_trim", ""), PartCategory::Dashboard);
        assert_eq!(classify_names("brake_front", ""), PartCategory::Calipers);
    }

    #[test]
    fn test_material_name_participates() {
        assert_eq!(classify_names("mesh_007", "Glass"), PartCategory::Glass);
        assert_eq!(classify_names("mesh_008", "emissive_red"), PartCategory::Lights);
        assert_eq!(classify_names("mesh_009", "rubber_black"), PartCategory::Tires);
        assert_eq!(classify_names("mesh_010", "leather_tan"), PartCategory::Seats);
    }

    #[test]
    fn test_priority_glass_before_lights() {
        assert_eq!(classify_names("glass_headlight", ""), PartCategory::Glass);
    }

    #[test]
    fn test_priority_rims_before_calipers() {
        assert_eq!(classify_names("brake_caliper_rim", ""), PartCategory::Rims);
    }

    #[test]
    fn test_fallback_is_body() {
        assert_eq!(classify_names("chassis_panel_07", ""), PartCategory::Body);
        assert_eq!(classify_names("", ""), PartCategory::Body);
    }

    #[test]
    fn test_matching_is_case_insensitive() {
        assert_eq!(classify_names("GLASS_Roof", ""), PartCategory::Glass);
        assert_eq!(classify_names("Brake_Caliper", ""), PartCategory::Calipers);
    }

    #[test]
    fn test_totality_and_exclusivity() {
        let mut graph = SceneGraph::new("Car");
        let keys = vec![
            mesh(&mut graph, "body_panel"),
            mesh(&mut graph, "windscreen"),
            mesh(&mut graph, "headlight_l"),
            mesh(&mut graph, "rim_fl"),
            mesh(&mut graph, "tire_fl"),
            mesh(&mut graph, "seat_driver"),
            mesh(&mut graph, "dashboard"),
            mesh(&mut graph, "caliper_fl"),
            mesh(&mut graph, "unnamed_blob"),
        ];

        let index = classify(&mut graph);

        assert_eq!(index.total(), keys.len());
        let mut seen = Vec::new();
        for (_, nodes) in index.iter() {
            seen.extend_from_slice(nodes);
        }
        seen.sort();
        let mut expected = keys;
        expected.sort();
        assert_eq!(seen, expected);
    }

    #[test]
    fn test_discovery_order_preserved() {
        let mut graph = SceneGraph::new("Car");
        let first = mesh(&mut graph, "rim_fl");
        let second = mesh(&mut graph, "rim_fr");
        let third = mesh(&mut graph, "rim_rl");

        let index = classify(&mut graph);
        assert_eq!(index.get(PartCategory::Rims), &[first, second, third]);
    }

    #[test]
    fn test_flags_normalized_on_every_drawable() {
        let mut graph = SceneGraph::new("Car");
        let key = mesh(&mut graph, "body_panel");

        classify(&mut graph);

        let node = graph.node(key).unwrap();
        let drawable = node.drawable.as_ref().unwrap();
        assert!(drawable.flags.contains(RenderFlags::CAST_SHADOWS));
        assert!(drawable.flags.contains(RenderFlags::RECEIVE_SHADOWS));
        let mat = drawable.material.first().unwrap();
        assert!(mat.needs_upload);
        let params = mat.physical_params().unwrap();
        assert!((params.env_map_intensity - 1.2).abs() < f32::EPSILON);
    }

    #[test]
    fn test_unlit_material_kind_is_left_alone_by_normalization() {
        let mut graph = SceneGraph::new("Car");
        let root = graph.root();
        let key = graph.add_mesh(
            root,
            "decal",
            MaterialAssignment::Single(Material::unlit(UnlitMaterialParams::default())),
        );

        classify(&mut graph);

        // The normalization pass flags the material dirty but does not
        // substitute kinds; only the styling appliers do that.
        let mat = graph
            .node(key)
            .unwrap()
            .drawable
            .as_ref()
            .unwrap()
            .material
            .first()
            .unwrap();
        assert!(!mat.is_pbr_compatible());
        assert!(mat.needs_upload);
    }

    #[test]
    fn test_material_name_tiebreak_against_body() {
        let mut graph = SceneGraph::new("Car");
        let key = mesh_with_material(&mut graph, "mesh_22", "interior_plastic");

        let index = classify(&mut graph);
        assert_eq!(index.get(PartCategory::Dashboard), &[key]);
        assert!(index.get(PartCategory::Body).is_empty());
    }
}
