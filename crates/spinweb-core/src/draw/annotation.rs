//! Paper-coordinate annotations and divider overlays.
//!
//! Annotations and dividers are positioned in normalized paper
//! coordinates (0..1 on each axis, origin bottom-left), NOT in polar
//! data coordinates. Their placement is configuration data tuned per
//! angular policy, independent of the chart geometry.

use serde::{Deserialize, Serialize};

use crate::draw::StrokeDefinition;

/// A free-standing text annotation in paper coordinates.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Annotation {
    text: String,
    x: f32,
    y: f32,
    font_size: f32,
}

impl Annotation {
    /// Creates a new annotation at the given paper position.
    pub fn new(text: impl Into<String>, x: f32, y: f32, font_size: f32) -> Self {
        Self {
            text: text.into(),
            x,
            y,
            font_size,
        }
    }

    /// Returns the annotation text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Returns the horizontal paper coordinate (0..1, left to right).
    pub fn x(&self) -> f32 {
        self.x
    }

    /// Returns the vertical paper coordinate (0..1, bottom to top).
    pub fn y(&self) -> f32 {
        self.y
    }

    /// Returns the font size in pixels.
    pub fn font_size(&self) -> f32 {
        self.font_size
    }
}

/// A straight divider line in paper coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct DividerLine {
    x0: f32,
    y0: f32,
    x1: f32,
    y1: f32,
    stroke: StrokeDefinition,
}

impl DividerLine {
    /// Creates a new divider from `(x0, y0)` to `(x1, y1)`.
    pub fn new(x0: f32, y0: f32, x1: f32, y1: f32, stroke: StrokeDefinition) -> Self {
        Self {
            x0,
            y0,
            x1,
            y1,
            stroke,
        }
    }

    /// Returns the start point in paper coordinates.
    pub fn start(&self) -> (f32, f32) {
        (self.x0, self.y0)
    }

    /// Returns the end point in paper coordinates.
    pub fn end(&self) -> (f32, f32) {
        (self.x1, self.y1)
    }

    /// Returns the stroke used to draw the divider.
    pub fn stroke(&self) -> &StrokeDefinition {
        &self.stroke
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Color;

    #[test]
    fn test_annotation_accessors() {
        let annotation = Annotation::new("Jongeren", 0.2, 0.85, 18.0);
        assert_eq!(annotation.text(), "Jongeren");
        assert_eq!(annotation.x(), 0.2);
        assert_eq!(annotation.y(), 0.85);
        assert_eq!(annotation.font_size(), 18.0);
    }

    #[test]
    fn test_divider_accessors() {
        let stroke = StrokeDefinition::dotted(Color::new("gray").unwrap(), 1.5);
        let divider = DividerLine::new(0.5, 0.2, 0.5, 0.8, stroke.clone());
        assert_eq!(divider.start(), (0.5, 0.2));
        assert_eq!(divider.end(), (0.5, 0.8));
        assert_eq!(divider.stroke(), &stroke);
    }
}
