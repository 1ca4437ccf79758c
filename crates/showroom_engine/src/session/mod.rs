//! Configurator session
//!
//! The session is the single owner of the currently presented model and
//! the user's style state. Loads go through an explicit two-phase
//! begin/complete protocol carrying a generation number: if a second
//! load is requested while the first is still in flight, completing the
//! stale one is rejected instead of letting it replace (and dispose)
//! the newer model.

use crate::parts::{classify, PartIndex};
use crate::scene::SceneGraph;
use crate::state::StyleState;
use crate::styling;
use thiserror::Error;

/// A loaded, classified vehicle model
#[derive(Debug, Clone)]
pub struct CarModel {
    /// Model identifier
    pub name: String,
    /// Scene graph produced by the loader
    pub graph: SceneGraph,
    /// Part index built at load time; rebuilt only by a new load
    pub parts: PartIndex,
}

impl CarModel {
    /// Classify a freshly loaded scene graph into a presentable model
    pub fn new(name: impl Into<String>, mut graph: SceneGraph) -> Self {
        let parts = classify(&mut graph);
        Self {
            name: name.into(),
            graph,
            parts,
        }
    }
}

/// Ticket for an in-flight model load
///
/// Returned by [`ConfiguratorSession::begin_load`] and consumed by
/// [`ConfiguratorSession::complete_load`].
#[derive(Debug)]
pub struct LoadTicket {
    model: String,
    generation: u64,
}

impl LoadTicket {
    /// Model identifier this load was started for
    pub fn model(&self) -> &str {
        &self.model
    }
}

/// Errors surfaced by the load protocol
#[derive(Error, Debug, PartialEq, Eq)]
pub enum LoadError {
    /// A newer load was started after this ticket was issued; the
    /// completed graph was dropped untouched
    #[error("load of {model:?} superseded (generation {stale}, current {current})")]
    Superseded {
        /// Model the stale load was for
        model: String,
        /// Generation of the stale ticket
        stale: u64,
        /// Generation currently active
        current: u64,
    },
}

/// Top-level configurator context
///
/// Owns the active model, the style state, and the load generation
/// counter. All styling goes through this object; there is no global
/// current-model reference anywhere.
#[derive(Debug, Default)]
pub struct ConfiguratorSession {
    current: Option<CarModel>,
    generation: u64,
    style: StyleState,
}

impl ConfiguratorSession {
    /// Create a session with factory style state and no model
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a session with a pre-hydrated style state (e.g. restored
    /// from a share link)
    pub fn with_style(style: StyleState) -> Self {
        Self {
            style,
            ..Self::default()
        }
    }

    /// Currently presented model, if any
    pub fn current(&self) -> Option<&CarModel> {
        self.current.as_ref()
    }

    /// Current style state
    pub fn style(&self) -> &StyleState {
        &self.style
    }

    /// Current load generation
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Start loading a model, invalidating any load still in flight
    pub fn begin_load(&mut self, model: &str) -> LoadTicket {
        self.generation += 1;
        self.style.model = model.to_string();
        log::info!("loading model {model:?} (generation {})", self.generation);
        LoadTicket {
            model: model.to_string(),
            generation: self.generation,
        }
    }

    /// Install a loaded scene graph for the given ticket
    ///
    /// Replaces the previous model (releasing its resources), classifies
    /// the new graph, and replays the full style state onto it. A stale
    /// ticket is rejected and the graph dropped.
    pub fn complete_load(&mut self, ticket: LoadTicket, graph: SceneGraph) -> Result<(), LoadError> {
        if ticket.generation != self.generation {
            log::warn!(
                "dropping superseded load of {:?} (generation {} < {})",
                ticket.model,
                ticket.generation,
                self.generation
            );
            return Err(LoadError::Superseded {
                model: ticket.model,
                stale: ticket.generation,
                current: self.generation,
            });
        }

        // Dropping the previous model here releases its graphics
        // resources before the new part index is built.
        self.current = Some(CarModel::new(ticket.model, graph));
        self.apply_all();
        Ok(())
    }

    /// Replay the full style state onto the current model
    pub fn apply_all(&mut self) {
        let style = self.style.clone();

        styling::apply_body_pbr(
            self.current.as_mut(),
            style.body_color,
            style.body_metal,
            style.body_rough,
            style.body_cc,
            0.1,
        );
        styling::apply_rims_style(self.current.as_mut(), style.rims_style);
        styling::apply_rims_custom(
            self.current.as_mut(),
            style.rim_color,
            style.rim_metal,
            style.rim_rough,
        );
        styling::apply_calipers(self.current.as_mut(), style.caliper_color);
        styling::apply_glass(
            self.current.as_mut(),
            style.glass_color,
            style.glass_opacity,
            style.glass_rough,
        );
        styling::apply_interior(self.current.as_mut(), style.seat_color, style.dash_color);
        styling::set_headlight_intensity(self.current.as_mut(), style.headlight_level);
    }

    /// Apply a named paint preset (does not overwrite the custom body
    /// sliders)
    pub fn set_body_preset(&mut self, preset_key: &str) {
        styling::apply_paint_preset(self.current.as_mut(), preset_key);
    }

    /// Apply custom body paint parameters
    pub fn set_body_custom(
        &mut self,
        color: crate::foundation::Color,
        metalness: f32,
        roughness: f32,
        clearcoat: f32,
    ) {
        self.style.body_color = color;
        self.style.body_metal = metalness;
        self.style.body_rough = roughness;
        self.style.body_cc = clearcoat;
        styling::apply_body_pbr(self.current.as_mut(), color, metalness, roughness, clearcoat, 0.1);
    }

    /// Select a named rim finish
    pub fn set_rims_style(&mut self, style: styling::RimStyle) {
        self.style.rims_style = style;
        styling::apply_rims_style(self.current.as_mut(), style);
    }

    /// Apply custom rim parameters
    pub fn set_rims_custom(
        &mut self,
        color: crate::foundation::Color,
        metalness: f32,
        roughness: f32,
    ) {
        self.style.rim_color = color;
        self.style.rim_metal = metalness;
        self.style.rim_rough = roughness;
        styling::apply_rims_custom(self.current.as_mut(), color, metalness, roughness);
    }

    /// Recolor the brake calipers
    pub fn set_calipers(&mut self, color: crate::foundation::Color) {
        self.style.caliper_color = color;
        styling::apply_calipers(self.current.as_mut(), color);
    }

    /// Restyle the glass
    pub fn set_glass(&mut self, color: crate::foundation::Color, tint: f32, roughness: f32) {
        self.style.glass_color = color;
        self.style.glass_opacity = tint;
        self.style.glass_rough = roughness;
        styling::apply_glass(self.current.as_mut(), color, tint, roughness);
    }

    /// Recolor the interior
    pub fn set_interior(
        &mut self,
        seat_color: crate::foundation::Color,
        dash_color: crate::foundation::Color,
    ) {
        self.style.seat_color = seat_color;
        self.style.dash_color = dash_color;
        styling::apply_interior(self.current.as_mut(), seat_color, dash_color);
    }

    /// Set headlight emission level
    pub fn set_headlights(&mut self, level: f32) {
        self.style.headlight_level = level;
        styling::set_headlight_intensity(self.current.as_mut(), level);
    }

    /// Set ambient light level (consumed by the rendering layer)
    pub fn set_ambient(&mut self, level: f32) {
        self.style.ambient_level = level;
    }

    /// Select a background environment; returns the resolved HDR file
    pub fn set_environment(&mut self, bg: &str) -> String {
        self.style.bg = bg.to_string();
        crate::environment::resolve_environment(bg)
    }

    /// Restore factory style state and replay it onto the current model
    ///
    /// Reloading the factory model is the caller's job (it owns the
    /// loader); the model field of the state is reset regardless.
    pub fn reset(&mut self) {
        self.style = StyleState::default();
        self.apply_all();
    }

    /// Restore state from share-link query pairs and replay it
    pub fn hydrate<'a>(&mut self, pairs: impl IntoIterator<Item = (&'a str, &'a str)>) {
        self.style.hydrate_query_pairs(pairs);
        self.apply_all();
    }

    /// Render the current state as a shareable query string
    pub fn share_query_string(&self) -> String {
        self.style
            .to_query_pairs()
            .into_iter()
            .map(|(k, v)| format!("{k}={}", v.replace('#', "%23").replace(' ', "%20")))
            .collect::<Vec<_>>()
            .join("&")
    }
}
