//! Configuration types for Spinweb diagram rendering.
//!
//! This module provides the configuration structures that control how
//! diagrams are laid out, styled, and regenerated. All types implement
//! [`serde::Deserialize`] for flexible loading from external sources.
//!
//! # Overview
//!
//! - [`AppConfig`] - Top-level configuration combining layout, style, and session settings.
//! - [`LayoutConfig`] - Selects the [`AngularPolicy`] and its clustered arc table.
//! - [`StyleConfig`] - All cosmetic constants: palette, canvas, annotations, dividers.
//! - [`SessionConfig`] - Trigger mode and missing-level policy.
//!
//! # Example
//!
//! ```
//! # use spinweb::config::AppConfig;
//! let config = AppConfig::default();
//! assert!(config.style().series_color().is_ok());
//! ```

use std::{
    fmt::{self, Display},
    str::FromStr,
};

use indexmap::IndexMap;
use serde::Deserialize;

use spinweb_core::{
    color::Color,
    draw::{Annotation, DividerLine, StrokeDefinition, StrokeStyle},
    taxonomy::Quadrant,
};

/// Default color palette; the first entry colors the data series.
const DEFAULT_PALETTE: [&str; 9] = [
    "#7768bf", "#cf4aef", "#170341", "#2d0c81", "#282340", "#f8a6c3", "#cfc5ff", "#efbffa",
    "#f0eced",
];

/// Available angular-allocation policies.
///
/// The policy decides each parameter's angle on the circle. The names
/// match external configuration strings (snake_case).
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AngularPolicy {
    /// Per-quadrant clustered angles at configured arc offsets (default)
    #[default]
    Clustered,
    /// Evenly spaced angles around the full circle
    Uniform,
}

impl FromStr for AngularPolicy {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "clustered" => Ok(Self::Clustered),
            "uniform" => Ok(Self::Uniform),
            _ => Err("Unsupported angular policy"),
        }
    }
}

impl From<AngularPolicy> for &'static str {
    fn from(val: AngularPolicy) -> Self {
        match val {
            AngularPolicy::Clustered => "clustered",
            AngularPolicy::Uniform => "uniform",
        }
    }
}

impl Display for AngularPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s: &'static str = (*self).into();
        write!(f, "{s}")
    }
}

/// How the diagram is regenerated in response to input changes.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TriggerMode {
    /// Recompute only on an explicit generate action (default)
    #[default]
    Gated,
    /// Recompute on every input change
    Live,
}

/// What to do when polygon construction finds parameters without a level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MissingLevelPolicy {
    /// Refuse to build the polygon, reporting the missing parameters
    Block,
    /// Substitute the lowest level for the missing parameters
    DefaultStart,
}

/// Top-level application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Layout configuration section.
    #[serde(default)]
    layout: LayoutConfig,

    /// Style configuration section.
    #[serde(default)]
    style: StyleConfig,

    /// Session behavior section.
    #[serde(default)]
    session: SessionConfig,
}

impl AppConfig {
    /// Creates a new [`AppConfig`] from its sections.
    pub fn new(layout: LayoutConfig, style: StyleConfig, session: SessionConfig) -> Self {
        Self {
            layout,
            style,
            session,
        }
    }

    /// Returns the layout configuration.
    pub fn layout(&self) -> &LayoutConfig {
        &self.layout
    }

    /// Returns the style configuration.
    pub fn style(&self) -> &StyleConfig {
        &self.style
    }

    /// Returns the session configuration.
    pub fn session(&self) -> &SessionConfig {
        &self.session
    }
}

/// Angular-allocation configuration.
///
/// The clustered arc table maps each quadrant to its ordered angle
/// offsets; the k-th parameter of a quadrant receives the k-th offset.
/// The table is configuration data, not computed from parameter count,
/// so adding a parameter to a quadrant requires extending its offsets.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Selected [`AngularPolicy`].
    policy: AngularPolicy,

    /// Arc offset table for the clustered policy, per quadrant.
    arcs: IndexMap<Quadrant, Vec<f32>>,
}

impl LayoutConfig {
    /// Creates a new [`LayoutConfig`] with the given policy and arc table.
    pub fn new(policy: AngularPolicy, arcs: IndexMap<Quadrant, Vec<f32>>) -> Self {
        Self { policy, arcs }
    }

    /// Returns the selected [`AngularPolicy`].
    pub fn policy(&self) -> AngularPolicy {
        self.policy
    }

    /// Returns the clustered arc offset table.
    pub fn arcs(&self) -> &IndexMap<Quadrant, Vec<f32>> {
        &self.arcs
    }
}

impl Default for LayoutConfig {
    fn default() -> Self {
        let mut arcs = IndexMap::new();
        arcs.insert(Quadrant::Mensen, vec![30.0, 50.0, 70.0]);
        arcs.insert(Quadrant::Organisatie, vec![290.0, 310.0, 330.0]);
        arcs.insert(Quadrant::Partners, vec![210.0, 230.0, 250.0]);
        arcs.insert(Quadrant::Jongeren, vec![110.0, 130.0, 150.0]);

        Self {
            policy: AngularPolicy::default(),
            arcs,
        }
    }
}

/// Session behavior configuration.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Selected [`TriggerMode`].
    trigger: TriggerMode,

    /// Missing-level policy override; `None` selects the mode default.
    missing_level: Option<MissingLevelPolicy>,
}

impl SessionConfig {
    /// Creates a new [`SessionConfig`].
    pub fn new(trigger: TriggerMode, missing_level: Option<MissingLevelPolicy>) -> Self {
        Self {
            trigger,
            missing_level,
        }
    }

    /// Returns the trigger mode.
    pub fn trigger(&self) -> TriggerMode {
        self.trigger
    }

    /// Returns the effective missing-level policy.
    ///
    /// Unless overridden, gated sessions block on incomplete input (the
    /// error lists what is missing), while live sessions substitute the
    /// lowest level because selections arrive one at a time and partial
    /// state is the normal case there.
    pub fn missing_level(&self) -> MissingLevelPolicy {
        self.missing_level.unwrap_or(match self.trigger {
            TriggerMode::Gated => MissingLevelPolicy::Block,
            TriggerMode::Live => MissingLevelPolicy::DefaultStart,
        })
    }
}

/// A text annotation in normalized paper coordinates.
#[derive(Debug, Clone, Deserialize)]
pub struct AnnotationConfig {
    text: String,
    x: f32,
    y: f32,
    #[serde(default = "default_annotation_font_size")]
    font_size: f32,
}

fn default_annotation_font_size() -> f32 {
    14.0
}

impl AnnotationConfig {
    fn to_annotation(&self) -> Annotation {
        Annotation::new(self.text.clone(), self.x, self.y, self.font_size)
    }
}

/// A divider line in normalized paper coordinates.
#[derive(Debug, Clone, Deserialize)]
pub struct DividerConfig {
    x0: f32,
    y0: f32,
    x1: f32,
    y1: f32,
    #[serde(default = "default_divider_color")]
    color: String,
    #[serde(default = "default_divider_width")]
    width: f32,
}

fn default_divider_color() -> String {
    "gray".to_string()
}

fn default_divider_width() -> f32 {
    1.5
}

impl DividerConfig {
    fn to_divider(&self) -> Result<DividerLine, String> {
        let color = Color::new(&self.color)?;
        let mut stroke = StrokeDefinition::new(color, self.width);
        stroke.set_style(StrokeStyle::Dotted);
        Ok(DividerLine::new(self.x0, self.y0, self.x1, self.y1, stroke))
    }
}

/// Visual styling configuration for rendered diagrams.
///
/// Every cosmetic constant lives here: the palette, canvas dimensions,
/// ring fill, marker size, annotation positions, and divider geometry.
/// Color fields are stored as strings and parsed on read.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StyleConfig {
    /// Color palette; the first entry colors the data series.
    palette: Vec<String>,

    /// Background color for the whole canvas.
    background_color: String,

    /// Fill color of the background reference rings.
    ring_fill: String,

    /// Diameter of the vertex markers on the data series, in pixels.
    marker_size: f32,

    /// Canvas width in pixels.
    width: u32,

    /// Canvas height in pixels.
    height: u32,

    /// Quadrant and world annotations in paper coordinates.
    annotations: Vec<AnnotationConfig>,

    /// Divider lines in paper coordinates.
    dividers: Vec<DividerConfig>,
}

impl StyleConfig {
    /// Returns the parsed color for the data series.
    ///
    /// # Errors
    ///
    /// Returns an error if the palette is empty or its first entry
    /// cannot be parsed into a valid [`Color`].
    pub fn series_color(&self) -> Result<Color, String> {
        let first = self
            .palette
            .first()
            .ok_or_else(|| "palette is empty".to_string())?;
        Color::new(first)
    }

    /// Returns the parsed background [`Color`].
    pub fn background(&self) -> Result<Color, String> {
        Color::new(&self.background_color)
    }

    /// Returns the parsed ring fill [`Color`] (alpha included).
    pub fn ring_fill(&self) -> Result<Color, String> {
        Color::new(&self.ring_fill)
    }

    /// Returns the marker diameter in pixels.
    pub fn marker_size(&self) -> f32 {
        self.marker_size
    }

    /// Returns the canvas dimensions in pixels.
    pub fn canvas(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Returns the configured annotations.
    pub fn annotations(&self) -> Vec<Annotation> {
        self.annotations.iter().map(AnnotationConfig::to_annotation).collect()
    }

    /// Returns the configured divider lines.
    ///
    /// # Errors
    ///
    /// Returns an error if a divider color cannot be parsed.
    pub fn dividers(&self) -> Result<Vec<DividerLine>, String> {
        self.dividers.iter().map(DividerConfig::to_divider).collect()
    }
}

impl Default for StyleConfig {
    fn default() -> Self {
        let annotation = |text: &str, x: f32, y: f32, font_size: f32| AnnotationConfig {
            text: text.to_string(),
            x,
            y,
            font_size,
        };
        let divider = |x0: f32, y0: f32, x1: f32, y1: f32| DividerConfig {
            x0,
            y0,
            x1,
            y1,
            color: default_divider_color(),
            width: default_divider_width(),
        };

        Self {
            palette: DEFAULT_PALETTE.iter().map(|s| (*s).to_string()).collect(),
            background_color: "white".to_string(),
            ring_fill: "rgba(200, 200, 255, 0.08)".to_string(),
            marker_size: 8.0,
            width: 1200,
            height: 800,
            annotations: vec![
                annotation("Jongeren", 0.2, 0.85, 18.0),
                annotation("Mensen", 0.8, 0.85, 18.0),
                annotation("Partners", 0.2, 0.15, 18.0),
                annotation("Organisatie", 0.8, 0.15, 18.0),
                annotation("Buitenwereld", 0.06, 0.5, 14.0),
                annotation("Binnenwereld", 0.94, 0.5, 14.0),
            ],
            dividers: vec![divider(0.5, 0.2, 0.5, 0.8), divider(0.2, 0.5, 0.8, 0.5)],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_parses_all_colors() {
        let config = AppConfig::default();
        assert!(config.style().series_color().is_ok());
        assert!(config.style().background().is_ok());
        assert!(config.style().ring_fill().is_ok());
        assert!(config.style().dividers().is_ok());
    }

    #[test]
    fn test_default_canvas_and_annotations() {
        let style = StyleConfig::default();
        assert_eq!(style.canvas(), (1200, 800));
        assert_eq!(style.annotations().len(), 6);
        assert_eq!(style.dividers().unwrap().len(), 2);
        assert_eq!(style.marker_size(), 8.0);
    }

    #[test]
    fn test_default_arc_table_covers_all_quadrants() {
        let layout = LayoutConfig::default();
        assert_eq!(layout.arcs().len(), 4);
        assert_eq!(layout.arcs()[&Quadrant::Mensen], vec![30.0, 50.0, 70.0]);
        assert_eq!(
            layout.arcs()[&Quadrant::Organisatie],
            vec![290.0, 310.0, 330.0]
        );
    }

    #[test]
    fn test_missing_level_defaults_follow_trigger_mode() {
        let gated = SessionConfig::new(TriggerMode::Gated, None);
        assert_eq!(gated.missing_level(), MissingLevelPolicy::Block);

        let live = SessionConfig::new(TriggerMode::Live, None);
        assert_eq!(live.missing_level(), MissingLevelPolicy::DefaultStart);

        let forced = SessionConfig::new(TriggerMode::Live, Some(MissingLevelPolicy::Block));
        assert_eq!(forced.missing_level(), MissingLevelPolicy::Block);
    }

    #[test]
    fn test_policy_from_str() {
        use std::str::FromStr;

        assert_eq!(
            AngularPolicy::from_str("clustered").unwrap(),
            AngularPolicy::Clustered
        );
        assert_eq!(
            AngularPolicy::from_str("uniform").unwrap(),
            AngularPolicy::Uniform
        );
        assert!(AngularPolicy::from_str("spiral").is_err());
    }

    #[test]
    fn test_deserialize_partial_toml() {
        let config: AppConfig = toml::from_str(
            r#"
            [layout]
            policy = "uniform"

            [session]
            trigger = "live"
            "#,
        )
        .unwrap();

        assert_eq!(config.layout().policy(), AngularPolicy::Uniform);
        assert_eq!(config.session().trigger(), TriggerMode::Live);
        // Untouched sections keep their defaults
        assert_eq!(config.style().canvas(), (1200, 800));
    }

    #[test]
    fn test_deserialize_arc_override() {
        let config: AppConfig = toml::from_str(
            r#"
            [layout.arcs]
            mensen = [10.0, 20.0, 30.0]
            organisatie = [100.0, 110.0, 120.0]
            partners = [190.0, 200.0, 210.0]
            jongeren = [280.0, 290.0, 300.0]
            "#,
        )
        .unwrap();

        assert_eq!(
            config.layout().arcs()[&Quadrant::Mensen],
            vec![10.0, 20.0, 30.0]
        );
    }
}
