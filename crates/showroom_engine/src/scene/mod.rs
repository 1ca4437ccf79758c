//! Scene graph for loaded vehicle models

pub mod graph;

pub use graph::{Drawable, Node, NodeKey, RenderFlags, SceneGraph};
