//! Angular-allocation engine factory.
//!
//! This module provides the [`AngularEngine`] trait and a builder for
//! selecting and configuring one of the two policies:
//!
//! - **Clustered**: each quadrant's parameters sit at configured angle
//!   offsets inside that quadrant's arc. The arc table is configuration
//!   data and is validated against the taxonomy when the engine is
//!   built, never at render time.
//! - **Uniform**: all parameters are spaced evenly around the full
//!   circle, each centered in its own sector.

mod clustered;
mod uniform;

use indexmap::IndexMap;

use spinweb_core::{
    geometry::AngularAssignment,
    taxonomy::{Quadrant, Taxonomy},
};

use crate::{
    config::{AngularPolicy, LayoutConfig},
    error::SpinwebError,
};

/// Trait defining the interface for angular-allocation engines.
pub trait AngularEngine {
    /// Assign an angle to every parameter of the taxonomy.
    ///
    /// The returned assignment is total: every declared parameter
    /// receives exactly one angle, in the policy's iteration order.
    fn assign(&self, taxonomy: &Taxonomy) -> AngularAssignment;
}

/// Builder for creating and configuring angular engines.
///
/// Validation of the clustered arc table happens in [`EngineBuilder::build`],
/// so an invalid configuration fails fast at startup.
pub struct EngineBuilder {
    policy: AngularPolicy,
    arcs: IndexMap<Quadrant, Vec<f32>>,
}

impl EngineBuilder {
    /// Create a new engine builder with the default policy and arc table.
    pub fn new() -> Self {
        let defaults = LayoutConfig::default();
        Self {
            policy: defaults.policy(),
            arcs: defaults.arcs().clone(),
        }
    }

    /// Create an engine builder from a layout configuration.
    pub fn from_config(config: &LayoutConfig) -> Self {
        Self {
            policy: config.policy(),
            arcs: config.arcs().clone(),
        }
    }

    /// Set the angular policy.
    pub fn with_policy(mut self, policy: AngularPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Set the clustered arc offset table.
    pub fn with_arcs(mut self, arcs: IndexMap<Quadrant, Vec<f32>>) -> Self {
        self.arcs = arcs;
        self
    }

    /// Build the engine for the configured policy.
    ///
    /// # Errors
    ///
    /// Returns [`SpinwebError::InvalidPolicyConfig`] if the clustered
    /// arc table does not cover every declared parameter exactly once,
    /// or contains duplicate offsets within a quadrant.
    pub fn build(&self, taxonomy: &Taxonomy) -> Result<Box<dyn AngularEngine>, SpinwebError> {
        match self.policy {
            AngularPolicy::Clustered => {
                let engine = clustered::Clustered::for_taxonomy(taxonomy, self.arcs.clone())?;
                Ok(Box::new(engine))
            }
            AngularPolicy::Uniform => Ok(Box::new(uniform::Uniform::new())),
        }
    }
}

impl Default for EngineBuilder {
    fn default() -> Self {
        Self::new()
    }
}
