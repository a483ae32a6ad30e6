//! SVG rendering for spiderweb diagrams.
//!
//! Renders a [`DiagramSpec`] into a standalone SVG document. Draw order
//! is fixed: background, title, spokes, reference rings, the data
//! polygon with its vertex markers, axis labels, annotations, and the
//! divider overlays on top.

use svg::{
    Document,
    node::element::{Circle, Line, Polygon, Rectangle, Text},
};

use spinweb_core::{apply_stroke, geometry::ClosedPolygon};

use crate::chart::DiagramSpec;

/// Vertical space reserved above the plot area for the title.
const TITLE_MARGIN: f32 = 100.0;
/// Radial space reserved outside the outer ring for parameter labels.
const LABEL_PADDING: f32 = 60.0;
/// Font used for all chart text.
const FONT_FAMILY: &str = "sans-serif";

/// Pixel frame of the polar plot: center and the length of one radial
/// level unit.
struct PolarFrame {
    center_x: f32,
    center_y: f32,
    unit: f32,
}

impl PolarFrame {
    fn for_spec(spec: &DiagramSpec) -> Self {
        let width = spec.canvas().width() as f32;
        let height = spec.canvas().height() as f32;
        let plot_height = height - TITLE_MARGIN;
        let pixel_radius = (plot_height.min(width) / 2.0 - LABEL_PADDING).max(1.0);

        Self {
            center_x: width / 2.0,
            center_y: TITLE_MARGIN + plot_height / 2.0,
            unit: pixel_radius / spec.radial_axis().max(),
        }
    }

    fn project(&self, angle: f32, radius: f32) -> (f32, f32) {
        spinweb_core::geometry::PolarPoint::new(angle, radius).to_cartesian(
            self.center_x,
            self.center_y,
            self.unit,
        )
    }
}

/// Render the diagram specification to an SVG document string.
pub fn render_svg(spec: &DiagramSpec) -> String {
    let width = spec.canvas().width();
    let height = spec.canvas().height();
    let frame = PolarFrame::for_spec(spec);

    let mut document = Document::new()
        .set("width", width)
        .set("height", height)
        .set("viewBox", (0, 0, width, height));

    document = document.add(
        Rectangle::new()
            .set("x", 0)
            .set("y", 0)
            .set("width", width)
            .set("height", height)
            .set("fill", spec.background().to_string()),
    );

    if !spec.title().is_empty() {
        document = document.add(
            Text::new(escape_text(spec.title()))
                .set("x", frame.center_x)
                .set("y", TITLE_MARGIN / 2.0)
                .set("text-anchor", "middle")
                .set("font-family", FONT_FAMILY)
                .set("font-size", 24)
                .set("fill", "black"),
        );
    }

    // Spokes from the center to the outer ring at each parameter angle
    let outer = spec.radial_axis().max();
    for tick in spec.angular_ticks() {
        let (x, y) = frame.project(tick.angle(), outer);
        document = document.add(
            Line::new()
                .set("x1", frame.center_x)
                .set("y1", frame.center_y)
                .set("x2", x)
                .set("y2", y)
                .set("stroke", "lightgray")
                .set("stroke-width", 1),
        );
    }

    // Reference rings, background only
    for ring in spec.rings() {
        document = document.add(
            Polygon::new()
                .set("points", polygon_points(ring.outline(), &frame))
                .set("fill", ring.fill().opaque().to_string())
                .set("fill-opacity", ring.fill().alpha())
                .set("stroke", "none")
                .set("pointer-events", "none"),
        );
    }

    // The data polygon with vertex markers
    let series = spec.series();
    document = document.add(
        Polygon::new()
            .set("points", polygon_points(series.polygon(), &frame))
            .set("fill", series.color().opaque().to_string())
            .set("fill-opacity", 0.5)
            .set("stroke", series.color().opaque().to_string())
            .set("stroke-width", 2),
    );
    for point in series.polygon().vertices() {
        let (x, y) = frame.project(point.angle(), point.radius());
        document = document.add(
            Circle::new()
                .set("cx", x)
                .set("cy", y)
                .set("r", series.marker_size() / 2.0)
                .set("fill", series.color().opaque().to_string()),
        );
    }

    // Radial axis labels along the east direction
    for tick in spec.radial_axis().ticks() {
        let (x, y) = frame.project(0.0, tick.radius());
        document = document.add(
            Text::new(tick.label())
                .set("x", x)
                .set("y", y - 6.0)
                .set("text-anchor", "middle")
                .set("font-family", FONT_FAMILY)
                .set("font-size", 13)
                .set("fill", "black"),
        );
    }

    // Parameter labels just outside the outer ring
    for tick in spec.angular_ticks() {
        let radians = tick.angle().to_radians();
        let (x, y) = frame.project(tick.angle(), outer);
        let offset = 18.0;
        let label_x = x + offset * radians.cos();
        let label_y = y - offset * radians.sin();
        document = document.add(
            Text::new(escape_text(tick.label()))
                .set("x", label_x)
                .set("y", label_y)
                .set("text-anchor", anchor_for_angle(radians))
                .set("dominant-baseline", "middle")
                .set("font-family", FONT_FAMILY)
                .set("font-size", 11)
                .set("fill", "black"),
        );
    }

    // Paper-coordinate annotations (origin bottom-left, y flipped here)
    for annotation in spec.annotations() {
        document = document.add(
            Text::new(escape_text(annotation.text()))
                .set("x", annotation.x() * width as f32)
                .set("y", (1.0 - annotation.y()) * height as f32)
                .set("text-anchor", "middle")
                .set("font-family", FONT_FAMILY)
                .set("font-size", annotation.font_size())
                .set("fill", "black"),
        );
    }

    // Divider overlays on top
    for divider in spec.dividers() {
        let (x0, y0) = divider.start();
        let (x1, y1) = divider.end();
        let line = Line::new()
            .set("x1", x0 * width as f32)
            .set("y1", (1.0 - y0) * height as f32)
            .set("x2", x1 * width as f32)
            .set("y2", (1.0 - y1) * height as f32);
        document = document.add(apply_stroke!(line, divider.stroke()));
    }

    document.to_string()
}

fn polygon_points(polygon: &ClosedPolygon, frame: &PolarFrame) -> String {
    polygon
        .points()
        .iter()
        .map(|point| {
            let (x, y) = frame.project(point.angle(), point.radius());
            format!("{x:.2},{y:.2}")
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn anchor_for_angle(radians: f32) -> &'static str {
    let cos = radians.cos();
    if cos > 0.3 {
        "start"
    } else if cos < -0.3 {
        "end"
    } else {
        "middle"
    }
}

fn escape_text(input: &str) -> String {
    input
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}
