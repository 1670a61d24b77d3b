#![forbid(unsafe_code)]

//! Export: SVG documents and PNG rasters of a grid snapshot.
//!
//! # Role in Mosaic
//! `mosaic-export` reads a [`VisualState`](mosaic_runtime::VisualState)
//! and never touches the studio. [`Exporter`] implements [`ExportSink`]
//! for both formats; [`Canvas`] holds the geometry they share.
//!
//! # Usage
//!
//! ```
//! use mosaic_export::{ExportSink, Exporter};
//! use mosaic_runtime::{RecordingSink, Studio};
//!
//! let mut studio = Studio::with_seed(RecordingSink::new(), 1);
//! studio.start();
//! let svg = Exporter::new(400.0).vectorize(&studio.snapshot()).unwrap();
//! assert!(svg.starts_with("<svg"));
//! ```

pub mod canvas;
pub mod error;
mod font;
mod raster;
pub mod sink;
mod svg;

pub use canvas::{Canvas, Rect};
pub use error::{ExportError, MAX_RASTER_EDGE};
pub use sink::{ExportSink, Exporter};
