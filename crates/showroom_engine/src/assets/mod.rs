//! Asset loading

pub mod model_loader;

pub use model_loader::{
    build_scene, load_model, load_model_manifest, parse_model_manifest, MaterialKindManifest,
    MaterialManifest, ModelError, ModelManifest, NodeManifest,
};
