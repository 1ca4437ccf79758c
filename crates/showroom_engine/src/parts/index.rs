//! Categorized index of a model's drawable parts

use crate::scene::NodeKey;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The fixed semantic part categories of a vehicle model
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PartCategory {
    /// Exterior body panels (also the fallback for unmatched parts)
    Body,
    /// Wheel rims
    Rims,
    /// Tires
    Tires,
    /// Windows and windscreens
    Glass,
    /// Head- and taillights
    Lights,
    /// Seats
    Seats,
    /// Dashboard and interior trim
    Dashboard,
    /// Brake calipers
    Calipers,
}

impl PartCategory {
    /// All categories, in index order
    pub const ALL: [Self; 8] = [
        Self::Body,
        Self::Rims,
        Self::Tires,
        Self::Glass,
        Self::Lights,
        Self::Seats,
        Self::Dashboard,
        Self::Calipers,
    ];

    /// Lowercase display label
    pub fn label(self) -> &'static str {
        match self {
            Self::Body => "body",
            Self::Rims => "rims",
            Self::Tires => "tires",
            Self::Glass => "glass",
            Self::Lights => "lights",
            Self::Seats => "seats",
            Self::Dashboard => "dashboard",
            Self::Calipers => "calipers",
        }
    }

    const fn slot(self) -> usize {
        match self {
            Self::Body => 0,
            Self::Rims => 1,
            Self::Tires => 2,
            Self::Glass => 3,
            Self::Lights => 4,
            Self::Seats => 5,
            Self::Dashboard => 6,
            Self::Calipers => 7,
        }
    }
}

impl fmt::Display for PartCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Mapping from category to drawable nodes, in discovery order
///
/// Built once per model load by the classifier. Every drawable of the
/// source graph appears in exactly one list.
#[derive(Debug, Clone, Default)]
pub struct PartIndex {
    lists: [Vec<NodeKey>; 8],
}

impl PartIndex {
    /// Create an empty index
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a node to a category list, preserving discovery order
    pub fn insert(&mut self, category: PartCategory, key: NodeKey) {
        self.lists[category.slot()].push(key);
    }

    /// Nodes of a category, in discovery order
    pub fn get(&self, category: PartCategory) -> &[NodeKey] {
        &self.lists[category.slot()]
    }

    /// Number of parts in a category
    pub fn count(&self, category: PartCategory) -> usize {
        self.lists[category.slot()].len()
    }

    /// Total number of indexed parts across all categories
    pub fn total(&self) -> usize {
        self.lists.iter().map(Vec::len).sum()
    }

    /// Whether no parts are indexed at all
    pub fn is_empty(&self) -> bool {
        self.lists.iter().all(Vec::is_empty)
    }

    /// Iterate over `(category, nodes)` pairs in category order
    pub fn iter(&self) -> impl Iterator<Item = (PartCategory, &[NodeKey])> {
        PartCategory::ALL
            .into_iter()
            .map(|c| (c, self.get(c)))
    }
}
