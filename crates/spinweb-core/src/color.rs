//! Color handling with CSS color support.
//!
//! Thin wrapper around the `color` crate's `DynamicColor`, providing the
//! conveniences the chart pipeline needs: CSS string parsing, alpha
//! access for translucent fills, and conversion to SVG attribute values.

use std::{
    hash::{Hash, Hasher},
    str::FromStr,
};

use color::DynamicColor;

/// Wrapper around the `DynamicColor` type from the color crate.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Color {
    color: DynamicColor,
}

impl Eq for Color {}

impl Hash for Color {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.to_string().hash(state);
    }
}

impl Color {
    /// Create a new `Color` from a string.
    /// This will parse CSS color strings such as "#7768bf",
    /// "rgba(200, 200, 255, 0.08)", "gray", etc.
    pub fn new(color_str: &str) -> Result<Self, String> {
        match DynamicColor::from_str(color_str) {
            Ok(color) => Ok(Color { color }),
            Err(err) => Err(format!("Invalid color '{color_str}': {err}")),
        }
    }

    /// Returns the alpha component in [0, 1].
    pub fn alpha(&self) -> f32 {
        self.color.components[3]
    }

    /// Returns a copy of this color with the given alpha component.
    pub fn with_alpha(mut self, alpha: f32) -> Self {
        self.color.components[3] = alpha;
        self
    }

    /// Returns a fully opaque copy of this color.
    ///
    /// SVG 1.1 fills do not understand alpha inside the color value, so
    /// exporters emit the opaque color plus a separate opacity attribute.
    pub fn opaque(&self) -> Self {
        self.with_alpha(1.0)
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::new("black").unwrap()
    }
}

// For compatibility with the parts of the pipeline that use colors as strings
impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.color)
    }
}

impl From<&Color> for svg::node::Value {
    fn from(color: &Color) -> Self {
        svg::node::Value::from(color.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hex() {
        let color = Color::new("#7768bf").unwrap();
        assert_eq!(color.alpha(), 1.0);
    }

    #[test]
    fn test_parse_named() {
        assert!(Color::new("gray").is_ok());
        assert!(Color::new("white").is_ok());
    }

    #[test]
    fn test_parse_invalid() {
        let result = Color::new("not-a-color");
        assert!(result.is_err());
        assert!(result.unwrap_err().contains("Invalid color"));
    }

    #[test]
    fn test_rgba_alpha() {
        let color = Color::new("rgba(200, 200, 255, 0.08)").unwrap();
        assert!((color.alpha() - 0.08).abs() < 0.001);
    }

    #[test]
    fn test_opaque_strips_alpha() {
        let color = Color::new("rgba(200, 200, 255, 0.08)").unwrap();
        assert_eq!(color.opaque().alpha(), 1.0);
    }

    #[test]
    fn test_default_is_black() {
        assert_eq!(Color::default().to_string(), "black");
    }
}
