//! Material type definitions and PBR upgrade logic
//!
//! Materials are a tagged variant over the supported kinds. The styling
//! appliers only ever mutate physically-based materials; anything else is
//! replaced with a fresh physical material before mutation.

use super::{PhysicalMaterialParams, UnlitMaterialParams};

/// Enumeration of supported material kinds
#[derive(Debug, Clone, PartialEq)]
pub enum MaterialKind {
    /// Physically-based material, mutable in place by the appliers
    Physical(PhysicalMaterialParams),
    /// Flat-shaded material, replaced on first styling touch
    Unlit(UnlitMaterialParams),
}

/// Material resource with kind, debug name, and upload state
#[derive(Debug, Clone, PartialEq)]
pub struct Material {
    /// Material kind and parameters
    pub kind: MaterialKind,
    /// Optional name, inspected by the part classifier
    pub name: Option<String>,
    /// Set when parameters changed and the rendering backend must
    /// re-upload this material on the next frame
    pub needs_upload: bool,
}

impl Material {
    /// Create a new physical material
    pub fn physical(params: PhysicalMaterialParams) -> Self {
        Self {
            kind: MaterialKind::Physical(params),
            name: None,
            needs_upload: false,
        }
    }

    /// Create a new unlit material
    pub fn unlit(params: UnlitMaterialParams) -> Self {
        Self {
            kind: MaterialKind::Unlit(params),
            name: None,
            needs_upload: false,
        }
    }

    /// Set the material name
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Whether this material can be mutated in place by the appliers
    pub fn is_pbr_compatible(&self) -> bool {
        matches!(self.kind, MaterialKind::Physical(_))
    }

    /// Get the physical parameters, if this is a physical material
    pub fn physical_params(&self) -> Option<&PhysicalMaterialParams> {
        match &self.kind {
            MaterialKind::Physical(params) => Some(params),
            MaterialKind::Unlit(_) => None,
        }
    }

    /// Get mutable physical parameters, if this is a physical material
    pub fn physical_params_mut(&mut self) -> Option<&mut PhysicalMaterialParams> {
        match &mut self.kind {
            MaterialKind::Physical(params) => Some(params),
            MaterialKind::Unlit(_) => None,
        }
    }
}

/// Material assignment of a drawable scene element
///
/// Multi-material assignments exist in loaded models, but the styling
/// pipeline collapses them: only the first entry is styled, the rest are
/// discarded.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum MaterialAssignment {
    /// No material assigned
    #[default]
    Empty,
    /// A single material
    Single(Material),
    /// A material per geometry group
    Multi(Vec<Material>),
}

impl MaterialAssignment {
    /// First material of the assignment, if any
    pub fn first(&self) -> Option<&Material> {
        match self {
            Self::Empty => None,
            Self::Single(mat) => Some(mat),
            Self::Multi(mats) => mats.first(),
        }
    }

    /// Mutable access to the first material of the assignment, if any
    pub fn first_mut(&mut self) -> Option<&mut Material> {
        match self {
            Self::Empty => None,
            Self::Single(mat) => Some(mat),
            Self::Multi(mats) => mats.first_mut(),
        }
    }

    /// Name of the first material, or an empty string
    pub fn material_name(&self) -> &str {
        self.first()
            .and_then(|m| m.name.as_deref())
            .unwrap_or("")
    }

    /// Normalize this assignment to a single physical material and
    /// return it for mutation
    ///
    /// A multi-material list is collapsed to its first entry. If the
    /// resulting material is not PBR-compatible (or there is none), it
    /// is replaced with a fresh default physical material. The existing
    /// material is never mutated across kinds.
    pub fn ensure_physical(&mut self) -> &mut Material {
        let normalized = match std::mem::take(self) {
            Self::Single(mat) if mat.is_pbr_compatible() => mat,
            Self::Multi(mut mats) if mats.first().is_some_and(Material::is_pbr_compatible) => {
                mats.swap_remove(0)
            }
            _ => Material::physical(PhysicalMaterialParams::default()),
        };
        *self = Self::Single(normalized);

        match self {
            Self::Single(mat) => mat,
            Self::Empty | Self::Multi(_) => unreachable!("assignment was just normalized"),
        }
    }
}
