//! Export backends for composed diagrams.
//!
//! Two independent outputs exist for every [`DiagramSpec`](crate::chart::DiagramSpec):
//! the SVG document ([`svg`] module) and the rasterized PNG bytes
//! ([`raster`] module). They are deliberately independent operations:
//! a failure in one must not abort the other.

pub mod raster;
pub mod svg;

use thiserror::Error;

/// Errors produced by the export backends.
#[derive(Debug, Error)]
pub enum Error {
    #[error("SVG parse error: {0}")]
    Svg(String),

    #[error("rasterization error: {0}")]
    Raster(String),
}

/// A finished export artifact ready for the save/download affordance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportArtifact {
    bytes: Vec<u8>,
    suggested_filename: String,
    media_type: &'static str,
}

impl ExportArtifact {
    /// Creates a new artifact.
    pub fn new(bytes: Vec<u8>, suggested_filename: impl Into<String>, media_type: &'static str) -> Self {
        Self {
            bytes,
            suggested_filename: suggested_filename.into(),
            media_type,
        }
    }

    /// Returns the encoded bytes.
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Consumes the artifact, returning the encoded bytes.
    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }

    /// Returns the suggested filename for saving.
    pub fn suggested_filename(&self) -> &str {
        &self.suggested_filename
    }

    /// Returns the media type label (e.g. "image/png").
    pub fn media_type(&self) -> &'static str {
        self.media_type
    }
}
