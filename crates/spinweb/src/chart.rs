//! Chart assembly: building the full [`DiagramSpec`].
//!
//! [`compose`] takes the closed data polygon plus the angular assignment
//! it was built from and produces the complete, renderer-ready diagram
//! specification: four background rings, the data series, axis
//! configuration, annotations, and divider overlays. Composition is
//! deterministic: identical inputs yield structurally identical specs.

use log::debug;

use spinweb_core::{
    color::Color,
    draw::{Annotation, DividerLine},
    geometry::{AngularAssignment, ClosedPolygon, PolarPoint, close_ring},
    level::{ALL_LEVELS, Level},
};

use crate::{config::StyleConfig, error::SpinwebError};

/// Fixed pixel dimensions of the drawing surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CanvasSize {
    width: u32,
    height: u32,
}

impl CanvasSize {
    /// Creates a new canvas size.
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Returns the width in pixels.
    pub fn width(self) -> u32 {
        self.width
    }

    /// Returns the height in pixels.
    pub fn height(self) -> u32 {
        self.height
    }
}

/// A background reference ring at one level's radius.
///
/// Rings share the polygon's angular sequence, so their vertices align
/// with the data polygon's vertices: they are N-gons, not true circles.
/// Rings are background only: they take no pointer events and appear in
/// no legend.
#[derive(Debug, Clone, PartialEq)]
pub struct Ring {
    level: Level,
    outline: ClosedPolygon,
    fill: Color,
}

impl Ring {
    /// Returns the level this ring marks.
    pub fn level(&self) -> Level {
        self.level
    }

    /// Returns the ring outline (closed).
    pub fn outline(&self) -> &ClosedPolygon {
        &self.outline
    }

    /// Returns the translucent fill color.
    pub fn fill(&self) -> Color {
        self.fill
    }
}

/// The single data series: the user's maturity polygon.
#[derive(Debug, Clone, PartialEq)]
pub struct DataSeries {
    polygon: ClosedPolygon,
    color: Color,
    marker_size: f32,
}

impl DataSeries {
    /// Returns the closed data polygon.
    pub fn polygon(&self) -> &ClosedPolygon {
        &self.polygon
    }

    /// Returns the series color.
    pub fn color(&self) -> Color {
        self.color
    }

    /// Returns the vertex marker diameter in pixels.
    pub fn marker_size(&self) -> f32 {
        self.marker_size
    }
}

/// One angular axis tick: a parameter name at its angle.
#[derive(Debug, Clone, PartialEq)]
pub struct AngularTick {
    angle: f32,
    label: String,
}

impl AngularTick {
    /// Returns the tick angle in degrees.
    pub fn angle(&self) -> f32 {
        self.angle
    }

    /// Returns the tick label (the parameter name).
    pub fn label(&self) -> &str {
        &self.label
    }
}

/// One radial axis tick: a level rank with its display label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RadialTick {
    level: Level,
}

impl RadialTick {
    /// Returns the level this tick marks.
    pub fn level(self) -> Level {
        self.level
    }

    /// Returns the tick radius.
    pub fn radius(self) -> f32 {
        self.level.radius()
    }

    /// Returns the tick label.
    pub fn label(self) -> &'static str {
        self.level.label()
    }
}

/// The radial axis: fixed range with one labeled tick per level.
///
/// The axis is always fully visible regardless of the data: even an
/// all-Start polygon renders against all four level labels.
#[derive(Debug, Clone, PartialEq)]
pub struct RadialAxis {
    max: f32,
    ticks: Vec<RadialTick>,
}

impl RadialAxis {
    /// Returns the upper bound of the radial range (the lower is 0).
    pub fn max(&self) -> f32 {
        self.max
    }

    /// Returns the ticks in ascending rank order.
    pub fn ticks(&self) -> &[RadialTick] {
        &self.ticks
    }
}

/// The complete, renderer-ready diagram specification.
#[derive(Debug, Clone, PartialEq)]
pub struct DiagramSpec {
    title: String,
    canvas: CanvasSize,
    background: Color,
    rings: Vec<Ring>,
    series: DataSeries,
    angular_ticks: Vec<AngularTick>,
    radial_axis: RadialAxis,
    annotations: Vec<Annotation>,
    dividers: Vec<DividerLine>,
}

impl DiagramSpec {
    /// Returns the diagram title, exactly as supplied.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the canvas dimensions.
    pub fn canvas(&self) -> CanvasSize {
        self.canvas
    }

    /// Returns the background color.
    pub fn background(&self) -> Color {
        self.background
    }

    /// Returns the background rings in ascending level order.
    pub fn rings(&self) -> &[Ring] {
        &self.rings
    }

    /// Returns the data series.
    pub fn series(&self) -> &DataSeries {
        &self.series
    }

    /// Returns the angular ticks (closing point excluded).
    pub fn angular_ticks(&self) -> &[AngularTick] {
        &self.angular_ticks
    }

    /// Returns the radial axis configuration.
    pub fn radial_axis(&self) -> &RadialAxis {
        &self.radial_axis
    }

    /// Returns the paper-coordinate annotations.
    pub fn annotations(&self) -> &[Annotation] {
        &self.annotations
    }

    /// Returns the paper-coordinate divider overlays.
    pub fn dividers(&self) -> &[DividerLine] {
        &self.dividers
    }
}

/// Compose the full diagram specification.
///
/// The title is used as-is: an empty string stays empty and is never
/// replaced by a default.
///
/// # Errors
///
/// Returns [`SpinwebError::Style`] if a configured color cannot be
/// parsed.
pub fn compose(
    title: &str,
    polygon: ClosedPolygon,
    assignment: &AngularAssignment,
    style: &StyleConfig,
) -> Result<DiagramSpec, SpinwebError> {
    let ring_fill = style.ring_fill().map_err(SpinwebError::Style)?;
    let series_color = style.series_color().map_err(SpinwebError::Style)?;
    let background = style.background().map_err(SpinwebError::Style)?;
    let dividers = style.dividers().map_err(SpinwebError::Style)?;

    let rings = ALL_LEVELS
        .into_iter()
        .map(|level| {
            let outline = close_ring(
                assignment
                    .slots()
                    .iter()
                    .map(|slot| PolarPoint::new(slot.angle(), level.radius()))
                    .collect(),
            );
            Ring {
                level,
                outline,
                fill: ring_fill,
            }
        })
        .collect();

    let angular_ticks = assignment
        .slots()
        .iter()
        .map(|slot| AngularTick {
            angle: slot.angle(),
            label: slot.parameter().to_string(),
        })
        .collect();

    let radial_axis = RadialAxis {
        max: Level::Expert.radius(),
        ticks: ALL_LEVELS.into_iter().map(|level| RadialTick { level }).collect(),
    };

    let (width, height) = style.canvas();

    debug!(title, vertices = polygon.vertex_count(); "Diagram composed");

    Ok(DiagramSpec {
        title: title.to_string(),
        canvas: CanvasSize::new(width, height),
        background,
        rings,
        series: DataSeries {
            polygon,
            color: series_color,
            marker_size: style.marker_size(),
        },
        angular_ticks,
        radial_axis,
        annotations: style.annotations(),
        dividers,
    })
}
