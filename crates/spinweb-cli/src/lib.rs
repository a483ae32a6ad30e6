//! CLI logic for the Spinweb diagram tool.
//!
//! This module contains the core CLI logic for the Spinweb diagram
//! tool: configuration discovery, input parsing, pipeline invocation,
//! and writing the export artifacts.

mod args;
mod config;
mod input;

pub use args::Args;

use std::fs;

use log::{info, warn};

use spinweb::{SpiderwebBuilder, SpinwebError, taxonomy::Taxonomy};

/// Run the Spinweb CLI application
///
/// This function reads the input selections, composes the diagram, and
/// writes the PNG artifact (and optionally the SVG document). The two
/// export paths are independent: an SVG failure is reported but does
/// not abort the PNG export, and vice versa. The run fails only when
/// every requested output failed.
///
/// # Errors
///
/// Returns `SpinwebError` for:
/// - File I/O errors
/// - Configuration loading errors
/// - Input parsing or validation errors
/// - Incomplete level selections
/// - Export errors on all requested outputs
pub fn run(args: &Args) -> Result<(), SpinwebError> {
    info!(
        input_path = args.input,
        output_path = args.output;
        "Processing diagram"
    );

    // Load configuration
    let app_config = config::load_config(args.config.as_ref())?;

    // Read and validate input
    let taxonomy = Taxonomy::default();
    let content = fs::read_to_string(&args.input)?;
    let input = input::parse_input(&content, &taxonomy)?;

    // Compose the diagram spec
    let builder = SpiderwebBuilder::new(app_config);
    let spec = builder.compose(&taxonomy, input.title(), input.selection())?;

    // The SVG document and the PNG raster are independent outputs: one
    // failing must not abort the other.
    let mut failure: Option<SpinwebError> = None;
    let mut succeeded = 0usize;

    if let Some(svg_path) = &args.svg {
        let svg = builder.render_svg(&spec);
        match fs::write(svg_path, svg) {
            Ok(()) => {
                info!(output_file = svg_path.as_str(); "SVG exported successfully");
                succeeded += 1;
            }
            Err(err) => {
                warn!(output_file = svg_path.as_str(), err:% = err; "SVG export failed");
                failure = Some(err.into());
            }
        }
    }

    match builder.export_png(&spec) {
        Ok(artifact) => {
            fs::write(&args.output, artifact.bytes())?;
            info!(
                output_file = args.output,
                media_type = artifact.media_type();
                "PNG exported successfully"
            );
            succeeded += 1;
        }
        Err(err) => {
            warn!(output_file = args.output, err:% = err; "PNG export failed");
            failure = Some(err);
        }
    }

    match failure {
        Some(err) if succeeded == 0 => Err(err),
        _ => Ok(()),
    }
}
