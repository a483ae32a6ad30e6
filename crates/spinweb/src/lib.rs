//! Spinweb - spiderweb (radar) maturity diagrams.
//!
//! Layout, chart assembly, and export for spiderweb maturity diagrams:
//! four thematic quadrants of assessment parameters, each scored on a
//! four-stage ordinal scale, rendered as a closed polygon over four
//! reference rings and exported as SVG and rasterized PNG.

pub mod chart;
pub mod config;
pub mod export;
pub mod layout;
pub mod session;

mod error;

pub use spinweb_core::{color, draw, geometry, level, taxonomy};

pub use error::SpinwebError;

use log::{debug, info};

use taxonomy::Taxonomy;

use chart::DiagramSpec;
use config::AppConfig;
use export::ExportArtifact;
use layout::EngineBuilder;
use session::LevelSelection;

/// Builder for composing and exporting spiderweb diagrams.
///
/// This provides a single-shot API over the pipeline: angular
/// assignment, polygon construction, chart assembly, and export. For
/// interactive use with live/gated regeneration, see
/// [`session::Session`].
///
/// # Examples
///
/// ```rust,no_run
/// use spinweb::{SpiderwebBuilder, config::AppConfig, level::Level, session::LevelSelection,
///     taxonomy::Taxonomy};
///
/// let builder = SpiderwebBuilder::new(AppConfig::default());
/// let taxonomy = Taxonomy::default();
///
/// let mut selection = LevelSelection::new();
/// for (_, parameter) in taxonomy.parameters() {
///     selection.set(parameter, Level::Basis);
/// }
///
/// let spec = builder.compose(&taxonomy, "Mijn Spiderweb", &selection)
///     .expect("Failed to compose");
///
/// let svg = builder.render_svg(&spec);
/// let png = builder.export_png(&spec)
///     .expect("Failed to rasterize");
/// ```
#[derive(Default)]
pub struct SpiderwebBuilder {
    config: AppConfig,
}

impl SpiderwebBuilder {
    /// Create a new builder with the given configuration.
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    /// Returns the builder's configuration.
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Compose a diagram spec from a taxonomy, title, and selection.
    ///
    /// The title is used exactly as supplied. Missing levels are
    /// handled per the configured missing-level policy.
    ///
    /// # Errors
    ///
    /// Returns `SpinwebError` for an invalid clustered arc table,
    /// incomplete input under a blocking policy, or unparseable style
    /// colors.
    pub fn compose(
        &self,
        taxonomy: &Taxonomy,
        title: &str,
        selection: &LevelSelection,
    ) -> Result<DiagramSpec, SpinwebError> {
        info!(policy:% = self.config.layout().policy(); "Composing diagram");

        let engine = EngineBuilder::from_config(self.config.layout()).build(taxonomy)?;
        let assignment = engine.assign(taxonomy);
        debug!(parameters = assignment.len(); "Angles assigned");

        let polygon = layout::build_polygon(
            &assignment,
            selection,
            self.config.session().missing_level(),
        )?;
        debug!(points = polygon.len(); "Polygon built");

        chart::compose(title, polygon, &assignment, self.config.style())
    }

    /// Render a composed diagram to an SVG document string.
    pub fn render_svg(&self, spec: &DiagramSpec) -> String {
        export::svg::render_svg(spec)
    }

    /// Rasterize a composed diagram to the downloadable PNG artifact.
    ///
    /// # Errors
    ///
    /// Returns `SpinwebError::Export` when rasterization fails. SVG
    /// rendering via [`SpiderwebBuilder::render_svg`] is unaffected by
    /// such failures.
    pub fn export_png(&self, spec: &DiagramSpec) -> Result<ExportArtifact, SpinwebError> {
        let artifact = export::raster::export_png(spec)?;
        info!(
            bytes = artifact.bytes().len(),
            filename = artifact.suggested_filename();
            "PNG exported"
        );
        Ok(artifact)
    }
}
