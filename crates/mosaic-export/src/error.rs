#![forbid(unsafe_code)]

//! Export errors.

use thiserror::Error;

/// Largest raster edge, in pixels.
pub const MAX_RASTER_EDGE: u32 = 16_384;

/// Errors raised while exporting a snapshot.
#[derive(Debug, Error)]
pub enum ExportError {
    /// The requested canvas has no area or is not finite.
    #[error("canvas {width}x{height} is degenerate")]
    Degenerate { width: f64, height: f64 },
    /// The raster would exceed [`MAX_RASTER_EDGE`] on one side.
    #[error("raster {width}x{height} exceeds the {MAX_RASTER_EDGE}px edge limit")]
    TooLarge { width: u32, height: u32 },
    /// PNG encoding failed.
    #[error("png encode error: {0}")]
    Encode(#[from] image::ImageError),
}
