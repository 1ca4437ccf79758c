//! # Showroom Engine
//!
//! Core library for an interactive 3D vehicle configurator.
//!
//! ## Features
//!
//! - **Part Classification**: keyword-based partitioning of a loaded
//!   scene graph into semantic part categories
//! - **Material Styling**: per-category PBR appliers with presets,
//!   clamping, and automatic material normalization
//! - **Session Management**: explicit configurator context with a
//!   generation-checked model load protocol
//! - **Shareable State**: the full style state round-trips through a
//!   flat query-string mapping
//!
//! ## Quick Start
//!
//! ```rust
//! use showroom_engine::prelude::*;
//!
//! let mut session = ConfiguratorSession::new();
//! let ticket = session.begin_load("roadster");
//!
//! // The loader (here: a trivial graph) runs out of band.
//! let mut graph = SceneGraph::new("roadster");
//! let root = graph.root();
//! graph.add_mesh(root, "body_panel", MaterialAssignment::Empty);
//!
//! session.complete_load(ticket, graph).expect("no newer load started");
//! session.set_body_preset("blue_metallic");
//! println!("share link query: {}", session.share_query_string());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names, clippy::too_many_arguments)]

pub mod assets;
pub mod config;
pub mod environment;
pub mod foundation;
pub mod materials;
pub mod parts;
pub mod scene;
pub mod session;
pub mod state;
pub mod styling;

pub use session::{CarModel, ConfiguratorSession, LoadError, LoadTicket};

/// Common imports for library users
pub mod prelude {
    pub use crate::{
        assets::{load_model, ModelError, ModelManifest},
        config::{ConfigError, ShowroomConfig},
        environment::resolve_environment,
        foundation::{Color, Transform, Vec3},
        materials::{Material, MaterialAssignment, MaterialKind, PhysicalMaterialParams},
        parts::{classify, PartCategory, PartIndex},
        scene::{Drawable, NodeKey, RenderFlags, SceneGraph},
        session::{CarModel, ConfiguratorSession, LoadError, LoadTicket},
        state::StyleState,
        styling::RimStyle,
    };
}
