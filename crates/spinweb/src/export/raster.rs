//! PNG rasterization for spiderweb diagrams.
//!
//! Renders the SVG form of a [`DiagramSpec`] through `usvg`/`resvg`
//! into an in-memory PNG byte buffer. Rasterization is synchronous and
//! single-shot: one call, one buffer, no retries.

use log::debug;

use crate::{
    chart::DiagramSpec,
    export::{Error, ExportArtifact, svg::render_svg},
};

/// Suggested filename for the downloadable artifact.
const PNG_FILENAME: &str = "spiderweb.png";
/// Media type label of the artifact.
const PNG_MEDIA_TYPE: &str = "image/png";

/// Rasterize a diagram spec to PNG bytes at the given size.
///
/// `width` and `height` are the logical output size in pixels; `scale`
/// multiplies both for high-DPI output. The diagram is stretched to the
/// requested size regardless of its canvas aspect ratio.
///
/// # Errors
///
/// Returns [`Error::Svg`] if the generated SVG fails to parse and
/// [`Error::Raster`] if the pixel buffer cannot be allocated or encoded.
pub fn rasterize(
    spec: &DiagramSpec,
    width: u32,
    height: u32,
    scale: f32,
) -> Result<Vec<u8>, Error> {
    rasterize_svg(&render_svg(spec), width, height, scale)
}

/// Rasterize an SVG document string to PNG bytes at the given size.
pub fn rasterize_svg(svg: &str, width: u32, height: u32, scale: f32) -> Result<Vec<u8>, Error> {
    if width == 0 || height == 0 || !(scale.is_finite() && scale > 0.0) {
        return Err(Error::Raster(format!(
            "invalid raster size {width}x{height} at scale {scale}"
        )));
    }

    let mut options = usvg::Options::default();
    options.fontdb_mut().load_system_fonts();

    let tree = usvg::Tree::from_str(svg, &options).map_err(|err| Error::Svg(err.to_string()))?;

    let target_width = (width as f32 * scale).round() as u32;
    let target_height = (height as f32 * scale).round() as u32;
    let mut pixmap = resvg::tiny_skia::Pixmap::new(target_width, target_height)
        .ok_or_else(|| Error::Raster(format!("failed to allocate {target_width}x{target_height} pixmap")))?;

    let transform = resvg::tiny_skia::Transform::from_scale(
        target_width as f32 / tree.size().width(),
        target_height as f32 / tree.size().height(),
    );
    resvg::render(&tree, transform, &mut pixmap.as_mut());

    debug!(width = target_width, height = target_height; "Diagram rasterized");

    pixmap
        .encode_png()
        .map_err(|err| Error::Raster(err.to_string()))
}

/// Produce the downloadable PNG artifact at the spec's canvas size.
///
/// # Errors
///
/// Propagates any [`Error`] from [`rasterize`].
pub fn export_png(spec: &DiagramSpec) -> Result<ExportArtifact, Error> {
    let canvas = spec.canvas();
    let bytes = rasterize(spec, canvas.width(), canvas.height(), 1.0)?;
    Ok(ExportArtifact::new(bytes, PNG_FILENAME, PNG_MEDIA_TYPE))
}
