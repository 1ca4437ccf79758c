//! Vehicle model manifest loader
//!
//! Models are described by RON manifests: a named node tree where leaf
//! meshes carry material declarations. The loader builds the scene graph
//! the classifier consumes; geometry payloads live with the rendering
//! backend and are opaque here.

use crate::foundation::color::Color;
use crate::foundation::math::Transform;
use crate::materials::{
    Material, MaterialAssignment, PhysicalMaterialParams, UnlitMaterialParams,
};
use crate::scene::SceneGraph;
use serde::Deserialize;
use std::path::Path;
use thiserror::Error;

/// Errors produced while loading a model manifest
#[derive(Error, Debug)]
pub enum ModelError {
    /// IO error reading the manifest file
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    /// Manifest is not valid RON
    #[error("parse error: {0}")]
    Parse(#[from] ron::error::SpannedError),
}

/// Material kind declared in a manifest
#[derive(Debug, Clone, Copy, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum MaterialKindManifest {
    /// Physically-based material
    #[default]
    Physical,
    /// Flat-shaded material
    Unlit,
}

/// Material declaration of a mesh node
#[derive(Debug, Clone, Deserialize)]
pub struct MaterialManifest {
    /// Material name, used by the part classifier
    #[serde(default)]
    pub name: String,
    /// Material kind
    #[serde(default)]
    pub kind: MaterialKindManifest,
    /// Base color as a hex string, defaults to white
    #[serde(default)]
    pub color: Option<Color>,
}

impl MaterialManifest {
    fn build(&self) -> Material {
        let color = self.color.unwrap_or(Color::WHITE);
        let material = match self.kind {
            MaterialKindManifest::Physical => Material::physical(PhysicalMaterialParams {
                base_color: color,
                ..PhysicalMaterialParams::default()
            }),
            MaterialKindManifest::Unlit => Material::unlit(UnlitMaterialParams {
                color,
                opacity: 1.0,
            }),
        };
        if self.name.is_empty() {
            material
        } else {
            material.with_name(self.name.clone())
        }
    }
}

/// A node of the manifest tree
#[derive(Debug, Clone, Deserialize)]
pub struct NodeManifest {
    /// Node name
    #[serde(default)]
    pub name: String,
    /// Whether this node carries drawable geometry
    #[serde(default)]
    pub mesh: bool,
    /// Material declarations; one entry yields a single-material
    /// assignment, several a multi-material one
    #[serde(default)]
    pub materials: Vec<MaterialManifest>,
    /// Child nodes
    #[serde(default)]
    pub children: Vec<NodeManifest>,
}

/// Top-level model manifest
#[derive(Debug, Clone, Deserialize)]
pub struct ModelManifest {
    /// Model name, becomes the scene root name
    pub name: String,
    /// Uniform scale applied to the root
    #[serde(default = "default_scale")]
    pub scale: f32,
    /// Node tree
    #[serde(default)]
    pub nodes: Vec<NodeManifest>,
}

fn default_scale() -> f32 {
    1.0
}

/// Parse a model manifest from RON text
pub fn parse_model_manifest(contents: &str) -> Result<ModelManifest, ModelError> {
    Ok(ron::from_str(contents)?)
}

/// Load a model manifest from disk
pub fn load_model_manifest(path: impl AsRef<Path>) -> Result<ModelManifest, ModelError> {
    let contents = std::fs::read_to_string(path)?;
    parse_model_manifest(&contents)
}

/// Build a scene graph from a parsed manifest
pub fn build_scene(manifest: &ModelManifest) -> SceneGraph {
    let mut graph = SceneGraph::new(manifest.name.clone());
    let root = graph.root();
    if let Some(node) = graph.node_mut(root) {
        node.transform = Transform::from_uniform_scale(manifest.scale);
    }
    for child in &manifest.nodes {
        add_manifest_node(&mut graph, root, child);
    }
    log::info!(
        "built scene for model {:?}: {} node(s)",
        manifest.name,
        graph.node_count()
    );
    graph
}

fn add_manifest_node(
    graph: &mut SceneGraph,
    parent: crate::scene::NodeKey,
    manifest: &NodeManifest,
) {
    let key = if manifest.mesh {
        let mut materials: Vec<Material> =
            manifest.materials.iter().map(MaterialManifest::build).collect();
        let assignment = match materials.len() {
            0 => MaterialAssignment::Empty,
            1 => MaterialAssignment::Single(materials.remove(0)),
            _ => MaterialAssignment::Multi(materials),
        };
        graph.add_mesh(parent, manifest.name.clone(), assignment)
    } else {
        graph.add_node(parent, manifest.name.clone())
    };
    for child in &manifest.children {
        add_manifest_node(graph, key, child);
    }
}

/// Load a model manifest and build its scene graph in one step
pub fn load_model(path: impl AsRef<Path>) -> Result<SceneGraph, ModelError> {
    let manifest = load_model_manifest(path)?;
    Ok(build_scene(&manifest))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::materials::MaterialAssignment;

    const SAMPLE: &str = r##"(
        name: "test_car",
        scale: 1.5,
        nodes: [
            (
                name: "exterior",
                children: [
                    (name: "body_panel", mesh: true, materials: [(name: "paint")]),
                    (name: "windscreen", mesh: true, materials: [(name: "glass", color: Some("#3fa7ef"))]),
                ],
            ),
            (
                name: "hud_decal",
                mesh: true,
                materials: [(name: "overlay", kind: unlit)],
            ),
            (name: "wheel_fl", mesh: true),
        ],
    )"##;

    #[test]
    fn test_parse_sample_manifest() {
        let manifest = parse_model_manifest(SAMPLE).expect("manifest should parse");
        assert_eq!(manifest.name, "test_car");
        assert!((manifest.scale - 1.5).abs() < f32::EPSILON);
        assert_eq!(manifest.nodes.len(), 3);
    }

    #[test]
    fn test_build_scene_structure() {
        let manifest = parse_model_manifest(SAMPLE).expect("manifest should parse");
        let graph = build_scene(&manifest);

        // root + exterior + 2 meshes + decal + wheel
        assert_eq!(graph.node_count(), 6);
        assert_eq!(graph.drawables().len(), 4);
        assert_eq!(graph.node(graph.root()).unwrap().name, "test_car");
        let scale = graph.node(graph.root()).unwrap().transform.scale;
        assert!((scale.x - 1.5).abs() < f32::EPSILON);
    }

    #[test]
    fn test_material_assignments() {
        let manifest = parse_model_manifest(SAMPLE).expect("manifest should parse");
        let graph = build_scene(&manifest);

        let assignments: Vec<&MaterialAssignment> = graph
            .drawables()
            .into_iter()
            .map(|k| &graph.node(k).unwrap().drawable.as_ref().unwrap().material)
            .collect();

        assert_eq!(assignments[0].material_name(), "paint");
        assert!(assignments[0].first().unwrap().is_pbr_compatible());
        assert_eq!(
            assignments[1].first().unwrap().physical_params().unwrap().base_color,
            Color::from_hex(0x3fa7ef)
        );
        assert!(!assignments[2].first().unwrap().is_pbr_compatible());
        assert!(matches!(assignments[3], MaterialAssignment::Empty));
    }

    #[test]
    fn test_parse_error_is_reported() {
        assert!(matches!(
            parse_model_manifest("(name:"),
            Err(ModelError::Parse(_))
        ));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        assert!(matches!(
            load_model("no/such/manifest.ron"),
            Err(ModelError::Io(_))
        ));
    }
}
