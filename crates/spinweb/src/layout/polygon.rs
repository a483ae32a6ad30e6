//! Polygon construction from levels and an angular assignment.

use log::debug;

use spinweb_core::{
    geometry::{AngularAssignment, ClosedPolygon, PolarPoint, close_ring},
    level::Level,
};

use crate::{config::MissingLevelPolicy, error::SpinwebError, session::LevelSelection};

/// Build the closed data polygon from the angular assignment and the
/// current level selection.
///
/// Points come out in the assignment's iteration order, with the first
/// point repeated at the end. Radii are exactly the integer level ranks;
/// no interpolation or smoothing happens here.
///
/// # Errors
///
/// With [`MissingLevelPolicy::Block`], returns
/// [`SpinwebError::IncompleteInput`] listing every parameter without a
/// level. With [`MissingLevelPolicy::DefaultStart`] the lowest level is
/// substituted instead.
pub fn build_polygon(
    assignment: &AngularAssignment,
    selection: &LevelSelection,
    missing_policy: MissingLevelPolicy,
) -> Result<ClosedPolygon, SpinwebError> {
    let missing: Vec<String> = assignment
        .slots()
        .iter()
        .filter(|slot| selection.level_of(slot.parameter()).is_none())
        .map(|slot| slot.parameter().to_string())
        .collect();

    if !missing.is_empty() {
        match missing_policy {
            MissingLevelPolicy::Block => return Err(SpinwebError::incomplete(missing)),
            MissingLevelPolicy::DefaultStart => {
                debug!(missing_count = missing.len(); "Substituting lowest level for missing parameters");
            }
        }
    }

    let points = assignment
        .slots()
        .iter()
        .map(|slot| {
            let level = selection
                .level_of(slot.parameter())
                .unwrap_or(Level::Start);
            PolarPoint::new(slot.angle(), level.radius())
        })
        .collect();

    Ok(close_ring(points))
}


#[cfg(test)]
mod proptest_tests {
    use proptest::prelude::*;

    use spinweb_core::{
        geometry::{AngularAssignment, AngularSlot},
        level::Level,
        taxonomy::Quadrant,
    };

    use super::*;

    fn assignment_strategy() -> impl Strategy<Value = AngularAssignment> {
        prop::collection::vec(0.0f32..360.0, 1..24).prop_map(|angles| {
            let slots = angles
                .into_iter()
                .enumerate()
                .map(|(i, angle)| AngularSlot::new(format!("p{i}"), Quadrant::Mensen, angle))
                .collect();
            AngularAssignment::new(slots)
        })
    }

    fn selection_strategy(count: usize) -> impl Strategy<Value = LevelSelection> {
        prop::collection::vec(proptest::option::of(1u8..=4), count).prop_map(|ranks| {
            let mut selection = LevelSelection::new();
            for (i, rank) in ranks.into_iter().enumerate() {
                if let Some(rank) = rank {
                    selection.set(format!("p{i}"), Level::from_rank(rank).unwrap());
                }
            }
            selection
        })
    }

    proptest! {
        /// Under the defaulting policy the polygon always closes with
        /// length N+1 and every radius is an integer rank in 1..=4.
        #[test]
        fn polygon_invariants_hold(
            (assignment, selection) in assignment_strategy()
                .prop_flat_map(|a| {
                    let count = a.len();
                    (Just(a), selection_strategy(count))
                })
        ) {
            let polygon =
                build_polygon(&assignment, &selection, MissingLevelPolicy::DefaultStart).unwrap();

            prop_assert_eq!(polygon.len(), assignment.len() + 1);
            prop_assert_eq!(polygon.points()[0], *polygon.points().last().unwrap());
            for point in polygon.points() {
                let radius = point.radius();
                prop_assert!((1.0..=4.0).contains(&radius));
                prop_assert_eq!(radius.fract(), 0.0);
            }
        }

        /// The blocking policy errors exactly when a parameter has no
        /// level, and the error names every missing parameter.
        #[test]
        fn blocking_reports_all_missing(
            (assignment, selection) in assignment_strategy()
                .prop_flat_map(|a| {
                    let count = a.len();
                    (Just(a), selection_strategy(count))
                })
        ) {
            let expected_missing: Vec<String> = assignment
                .slots()
                .iter()
                .filter(|slot| selection.level_of(slot.parameter()).is_none())
                .map(|slot| slot.parameter().to_string())
                .collect();

            let result = build_polygon(&assignment, &selection, MissingLevelPolicy::Block);

            if expected_missing.is_empty() {
                prop_assert!(result.is_ok());
            } else {
                match result {
                    Err(SpinwebError::IncompleteInput { missing }) => {
                        prop_assert_eq!(missing, expected_missing);
                    }
                    other => prop_assert!(false, "expected IncompleteInput, got {:?}", other),
                }
            }
        }
    }
}
