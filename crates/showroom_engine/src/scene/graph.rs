//! Slotmap-backed scene graph
//!
//! A loaded model is a tree of named nodes; leaf geometry carries a
//! [`Drawable`] with its material assignment and render flags. Traversal
//! is depth-first in insertion order, which defines the discovery order
//! the part index preserves.

use crate::foundation::math::Transform;
use crate::materials::MaterialAssignment;
use slotmap::{new_key_type, SlotMap};

new_key_type! {
    /// Stable key identifying a node in a [`SceneGraph`]
    pub struct NodeKey;
}

bitflags::bitflags! {
    /// Rendering-relevant flags carried by every drawable
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct RenderFlags: u8 {
        /// Drawable casts shadows
        const CAST_SHADOWS = 0b01;
        /// Drawable receives shadows
        const RECEIVE_SHADOWS = 0b10;
    }
}

/// Drawable surface attached to a scene node
///
/// Geometry itself is opaque to this crate; only the material assignment
/// and render flags matter to classification and styling.
#[derive(Debug, Clone, Default)]
pub struct Drawable {
    /// Material(s) applied to the surface
    pub material: MaterialAssignment,
    /// Shadow casting/receiving flags
    pub flags: RenderFlags,
}

/// A node of the scene graph
#[derive(Debug, Clone)]
pub struct Node {
    /// Node name, inspected by the part classifier (may be empty)
    pub name: String,
    /// Local transform
    pub transform: Transform,
    /// Drawable surface, present on leaf geometry
    pub drawable: Option<Drawable>,
    children: Vec<NodeKey>,
    parent: Option<NodeKey>,
}

impl Node {
    fn new(name: impl Into<String>, parent: Option<NodeKey>) -> Self {
        Self {
            name: name.into(),
            transform: Transform::identity(),
            drawable: None,
            children: Vec::new(),
            parent,
        }
    }

    /// Child nodes in insertion order
    pub fn children(&self) -> &[NodeKey] {
        &self.children
    }

    /// Parent node, `None` for the root
    pub fn parent(&self) -> Option<NodeKey> {
        self.parent
    }
}

/// Scene graph rooted at a single node
#[derive(Debug, Clone)]
pub struct SceneGraph {
    nodes: SlotMap<NodeKey, Node>,
    root: NodeKey,
}

impl SceneGraph {
    /// Create a graph containing only a named root node
    pub fn new(root_name: impl Into<String>) -> Self {
        let mut nodes = SlotMap::with_key();
        let root = nodes.insert(Node::new(root_name, None));
        Self { nodes, root }
    }

    /// Root node key
    pub fn root(&self) -> NodeKey {
        self.root
    }

    /// Add an empty child node under `parent`
    ///
    /// Falls back to the root when `parent` is stale.
    pub fn add_node(&mut self, parent: NodeKey, name: impl Into<String>) -> NodeKey {
        let parent = if self.nodes.contains_key(parent) {
            parent
        } else {
            self.root
        };
        let key = self.nodes.insert(Node::new(name, Some(parent)));
        if let Some(node) = self.nodes.get_mut(parent) {
            node.children.push(key);
        }
        key
    }

    /// Add a drawable leaf under `parent` with the given material assignment
    pub fn add_mesh(
        &mut self,
        parent: NodeKey,
        name: impl Into<String>,
        material: MaterialAssignment,
    ) -> NodeKey {
        let key = self.add_node(parent, name);
        if let Some(node) = self.nodes.get_mut(key) {
            node.drawable = Some(Drawable {
                material,
                flags: RenderFlags::empty(),
            });
        }
        key
    }

    /// Shared access to a node
    pub fn node(&self, key: NodeKey) -> Option<&Node> {
        self.nodes.get(key)
    }

    /// Mutable access to a node
    pub fn node_mut(&mut self, key: NodeKey) -> Option<&mut Node> {
        self.nodes.get_mut(key)
    }

    /// Mutable access to a node's drawable, if it has one
    pub fn drawable_mut(&mut self, key: NodeKey) -> Option<&mut Drawable> {
        self.nodes.get_mut(key).and_then(|n| n.drawable.as_mut())
    }

    /// Number of nodes, including the root
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Keys of all nodes in depth-first preorder starting at the root
    ///
    /// Children are visited in insertion order, so repeated traversals of
    /// an unmodified graph yield identical sequences.
    pub fn traverse(&self) -> Vec<NodeKey> {
        let mut order = Vec::with_capacity(self.nodes.len());
        let mut stack = vec![self.root];
        while let Some(key) = stack.pop() {
            let Some(node) = self.nodes.get(key) else {
                continue;
            };
            order.push(key);
            // Reverse so the first child is popped first.
            stack.extend(node.children.iter().rev().copied());
        }
        order
    }

    /// Keys of all drawable nodes in traversal order
    pub fn drawables(&self) -> Vec<NodeKey> {
        self.traverse()
            .into_iter()
            .filter(|&key| self.nodes.get(key).is_some_and(|n| n.drawable.is_some()))
            .collect()
    }
}
