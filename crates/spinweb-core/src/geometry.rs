//! Polar geometry for spiderweb diagrams.
//!
//! This module provides the polar value types used throughout the
//! pipeline: [`PolarPoint`], the per-parameter [`AngularAssignment`],
//! and the explicitly closed [`ClosedPolygon`]. Closure is applied by
//! the single pure function [`close_ring`] regardless of which angular
//! policy produced the points.

use crate::taxonomy::Quadrant;

/// A point in polar coordinates: angle in degrees, radius in level units.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PolarPoint {
    angle: f32,
    radius: f32,
}

impl PolarPoint {
    /// Creates a new polar point.
    pub fn new(angle: f32, radius: f32) -> Self {
        Self { angle, radius }
    }

    /// Returns the angle in degrees.
    pub fn angle(self) -> f32 {
        self.angle
    }

    /// Returns the radius in level units.
    pub fn radius(self) -> f32 {
        self.radius
    }

    /// Converts this point to cartesian pixel coordinates.
    ///
    /// Angles run counterclockwise with 0 degrees pointing east; the
    /// y-axis is flipped because screen coordinates grow downwards.
    /// `unit` is the pixel length of one radial level unit.
    pub fn to_cartesian(self, center_x: f32, center_y: f32, unit: f32) -> (f32, f32) {
        let radians = self.angle.to_radians();
        let distance = self.radius * unit;
        (
            center_x + distance * radians.cos(),
            center_y - distance * radians.sin(),
        )
    }
}

/// One entry of an angular assignment: a parameter pinned to an angle.
#[derive(Debug, Clone, PartialEq)]
pub struct AngularSlot {
    parameter: String,
    quadrant: Quadrant,
    angle: f32,
}

impl AngularSlot {
    /// Creates a new slot.
    pub fn new(parameter: impl Into<String>, quadrant: Quadrant, angle: f32) -> Self {
        Self {
            parameter: parameter.into(),
            quadrant,
            angle,
        }
    }

    /// Returns the parameter name.
    pub fn parameter(&self) -> &str {
        &self.parameter
    }

    /// Returns the quadrant the parameter belongs to.
    pub fn quadrant(&self) -> Quadrant {
        self.quadrant
    }

    /// Returns the assigned angle in degrees.
    pub fn angle(&self) -> f32 {
        self.angle
    }
}

/// A total mapping from parameters to angles.
///
/// Slots are kept in assignment order: each quadrant's parameters stay
/// contiguous and in declared order under the clustered policy, or in
/// flattened declaration order under the uniform policy. That order is
/// also the winding order of the resulting polygon.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AngularAssignment {
    slots: Vec<AngularSlot>,
}

impl AngularAssignment {
    /// Creates an assignment from ordered slots.
    pub fn new(slots: Vec<AngularSlot>) -> Self {
        Self { slots }
    }

    /// Returns the slots in assignment order.
    pub fn slots(&self) -> &[AngularSlot] {
        &self.slots
    }

    /// Returns the number of assigned parameters.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Returns true if no parameters are assigned.
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Returns the angle assigned to the named parameter, if any.
    pub fn angle_of(&self, parameter: &str) -> Option<f32> {
        self.slots
            .iter()
            .find(|slot| slot.parameter() == parameter)
            .map(AngularSlot::angle)
    }
}

/// An ordered polygon whose first point is repeated at the end.
///
/// Rendering backends draw a polyline, not an implicit closed curve, so
/// the duplicated closing point is mandatory: without it the shape shows
/// a visible gap between the last and first vertex.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ClosedPolygon {
    points: Vec<PolarPoint>,
}

impl ClosedPolygon {
    /// Returns all points including the duplicated closing point.
    pub fn points(&self) -> &[PolarPoint] {
        &self.points
    }

    /// Returns the number of points including the closing duplicate.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns true if the polygon has no points at all.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Returns the number of distinct vertices (closing point excluded).
    pub fn vertex_count(&self) -> usize {
        self.points.len().saturating_sub(1)
    }

    /// Returns the distinct vertices (closing point excluded).
    pub fn vertices(&self) -> &[PolarPoint] {
        if self.points.is_empty() {
            &self.points
        } else {
            &self.points[..self.points.len() - 1]
        }
    }
}

/// Closes an open ring of points by repeating the first point at the end.
///
/// This is the only place polygon closure happens; every angular policy
/// and every ring shares it. An empty input stays empty.
pub fn close_ring(points: Vec<PolarPoint>) -> ClosedPolygon {
    let mut points = points;
    if let Some(first) = points.first().copied() {
        points.push(first);
    }
    ClosedPolygon { points }
}
