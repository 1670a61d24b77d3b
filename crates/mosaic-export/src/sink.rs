#![forbid(unsafe_code)]

//! The export-sink seam and the default exporter.

use mosaic_runtime::VisualState;

use crate::canvas::Canvas;
use crate::error::ExportError;
use crate::{raster, svg};

/// Turns a snapshot into files. Implementations only read the snapshot.
pub trait ExportSink {
    /// Encode a raster image.
    fn rasterize(&self, state: &VisualState) -> Result<Vec<u8>, ExportError>;

    /// Write a vector document.
    fn vectorize(&self, state: &VisualState) -> Result<String, ExportError>;
}

/// SVG and PNG exporter.
#[derive(Debug, Clone, PartialEq)]
pub struct Exporter {
    /// Canvas width in output units; height follows the aspect ratio.
    pub width: f64,
    /// Raster pixels per output unit.
    pub scale: f64,
}

impl Default for Exporter {
    fn default() -> Self {
        Self {
            width: 800.0,
            scale: 2.0,
        }
    }
}

impl Exporter {
    /// Exporter for a canvas `width` units wide at scale 1.
    pub fn new(width: f64) -> Self {
        Self { width, scale: 1.0 }
    }

    /// Set the raster scale (builder).
    #[must_use]
    pub fn with_scale(mut self, scale: f64) -> Self {
        self.scale = scale;
        self
    }

    /// Resolve the output geometry for `state`.
    pub fn canvas(&self, state: &VisualState) -> Result<Canvas, ExportError> {
        Canvas::new(state, self.width)
    }
}

impl ExportSink for Exporter {
    fn rasterize(&self, state: &VisualState) -> Result<Vec<u8>, ExportError> {
        let canvas = self.canvas(state)?;
        let png = raster::render(state, &canvas, self.scale)?;
        tracing::debug!(bytes = png.len(), scale = self.scale, "rasterized snapshot");
        Ok(png)
    }

    fn vectorize(&self, state: &VisualState) -> Result<String, ExportError> {
        let canvas = self.canvas(state)?;
        let doc = svg::render(state, &canvas);
        tracing::debug!(bytes = doc.len(), "vectorized snapshot");
        Ok(doc)
    }
}
