//! Clustered-quadrant angular allocation.

use indexmap::IndexMap;
use log::debug;

use spinweb_core::{
    geometry::{AngularAssignment, AngularSlot},
    taxonomy::{Quadrant, Taxonomy},
};

use crate::{error::SpinwebError, layout::engines::AngularEngine};

/// Engine that places each quadrant's parameters at configured angle
/// offsets inside that quadrant's arc.
///
/// Offsets are assigned to parameters in declared order, so each
/// quadrant's parameters stay contiguous on the circle.
pub struct Clustered {
    arcs: IndexMap<Quadrant, Vec<f32>>,
}

impl Clustered {
    /// Create a clustered engine, validating the arc table against the
    /// taxonomy.
    ///
    /// # Errors
    ///
    /// Returns [`SpinwebError::InvalidPolicyConfig`] if any quadrant's
    /// offsets do not match its parameter count one-to-one, or if a
    /// quadrant repeats an offset.
    pub fn for_taxonomy(
        taxonomy: &Taxonomy,
        arcs: IndexMap<Quadrant, Vec<f32>>,
    ) -> Result<Self, SpinwebError> {
        for group in taxonomy.quadrants() {
            let quadrant = group.quadrant();
            let offsets = arcs.get(&quadrant).ok_or_else(|| {
                SpinwebError::InvalidPolicyConfig(format!(
                    "no arc offsets configured for quadrant `{quadrant}`"
                ))
            })?;

            if offsets.len() != group.parameters().len() {
                return Err(SpinwebError::InvalidPolicyConfig(format!(
                    "quadrant `{quadrant}` declares {} parameter(s) but has {} arc offset(s)",
                    group.parameters().len(),
                    offsets.len()
                )));
            }

            for (i, offset) in offsets.iter().enumerate() {
                if !offset.is_finite() {
                    return Err(SpinwebError::InvalidPolicyConfig(format!(
                        "quadrant `{quadrant}` has a non-finite arc offset"
                    )));
                }
                if offsets[..i].contains(offset) {
                    return Err(SpinwebError::InvalidPolicyConfig(format!(
                        "quadrant `{quadrant}` repeats arc offset {offset}"
                    )));
                }
            }
        }

        debug!(quadrants = arcs.len(); "Clustered arc table validated");
        Ok(Self { arcs })
    }

    /// Returns the configured arc span `(min, max)` for a quadrant.
    pub fn arc_span(&self, quadrant: Quadrant) -> Option<(f32, f32)> {
        let offsets = self.arcs.get(&quadrant)?;
        let min = offsets.iter().copied().fold(f32::INFINITY, f32::min);
        let max = offsets.iter().copied().fold(f32::NEG_INFINITY, f32::max);
        Some((min, max))
    }
}

impl AngularEngine for Clustered {
    fn assign(&self, taxonomy: &Taxonomy) -> AngularAssignment {
        let mut slots = Vec::with_capacity(taxonomy.parameter_count());

        for group in taxonomy.quadrants() {
            // Validated in for_taxonomy: the offsets cover the group exactly.
            let offsets = &self.arcs[&group.quadrant()];
            for (parameter, offset) in group.parameters().iter().zip(offsets) {
                slots.push(AngularSlot::new(
                    parameter.clone(),
                    group.quadrant(),
                    offset.rem_euclid(360.0),
                ));
            }
        }

        AngularAssignment::new(slots)
    }
}
