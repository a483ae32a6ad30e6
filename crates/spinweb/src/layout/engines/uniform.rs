//! Uniform angular allocation.

use spinweb_core::{
    geometry::{AngularAssignment, AngularSlot},
    taxonomy::Taxonomy,
};

use crate::layout::engines::AngularEngine;

/// Engine that spaces all parameters evenly around the full circle.
///
/// The k-th parameter (0-indexed, flattened declaration order) is
/// placed at `k * (360/N) + (360/N)/2`, centering each parameter in its
/// own sector. Quadrant identity survives only through adjacency in the
/// flattened order.
pub struct Uniform;

impl Uniform {
    /// Create a uniform engine.
    pub fn new() -> Self {
        Self
    }
}

impl Default for Uniform {
    fn default() -> Self {
        Self::new()
    }
}

impl AngularEngine for Uniform {
    fn assign(&self, taxonomy: &Taxonomy) -> AngularAssignment {
        let count = taxonomy.parameter_count();
        if count == 0 {
            return AngularAssignment::default();
        }

        let step = 360.0 / count as f32;
        let slots = taxonomy
            .parameters()
            .enumerate()
            .map(|(k, (quadrant, parameter))| {
                AngularSlot::new(parameter, quadrant, k as f32 * step + step / 2.0)
            })
            .collect();

        AngularAssignment::new(slots)
    }
}

#[cfg(test)]
mod tests {
    use float_cmp::assert_approx_eq;

    use super::*;

    #[test]
    fn test_twelve_parameters_spaced_thirty_degrees() {
        let taxonomy = Taxonomy::default();
        let assignment = Uniform::new().assign(&taxonomy);

        assert_eq!(assignment.len(), 12);
        let angles: Vec<f32> = assignment.slots().iter().map(|s| s.angle()).collect();
        assert_approx_eq!(f32, angles[0], 15.0);
        for pair in angles.windows(2) {
            assert_approx_eq!(f32, pair[1] - pair[0], 30.0, epsilon = 0.001);
        }
    }

    #[test]
    fn test_all_angles_distinct_and_in_range() {
        let taxonomy = Taxonomy::default();
        let assignment = Uniform::new().assign(&taxonomy);

        let angles: Vec<f32> = assignment.slots().iter().map(|s| s.angle()).collect();
        for (i, angle) in angles.iter().enumerate() {
            assert!(*angle >= 0.0 && *angle < 360.0);
            assert!(!angles[..i].contains(angle));
        }
    }

    #[test]
    fn test_flattened_declaration_order_preserved() {
        let taxonomy = Taxonomy::default();
        let assignment = Uniform::new().assign(&taxonomy);

        let expected: Vec<&str> = taxonomy.parameters().map(|(_, p)| p).collect();
        let actual: Vec<&str> = assignment.slots().iter().map(|s| s.parameter()).collect();
        assert_eq!(actual, expected);
    }

    #[test]
    fn test_empty_taxonomy_yields_empty_assignment() {
        let taxonomy = Taxonomy::new(Vec::new());
        let assignment = Uniform::new().assign(&taxonomy);
        assert!(assignment.is_empty());
    }
}
