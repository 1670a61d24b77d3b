#![forbid(unsafe_code)]

//! Runtime: application state, frame loop, and the render-sink seam.
//!
//! # Role in Mosaic
//! `mosaic-runtime` is where the pieces meet. [`Studio`] owns the
//! selections, the installed regions, the proportion animator, and the
//! grid-reshape and cell-reroll timers. Hosts feed it user actions and
//! frame times; it talks to the screen only through a [`RenderSink`].
//!
//! # Key types
//! - [`Studio`]: explicit application state. No globals.
//! - [`RenderSink`]: collaborator that mounts regions and applies track
//!   sizes. [`RecordingSink`] is a headless implementation.
//! - [`StyleStore`]: region styles keyed by [`RegionId`], generation-tagged
//!   so stale pointer events resolve to nothing.
//! - [`VisualState`]: an owned snapshot for exporters.

pub mod interaction;
pub mod sink;
pub mod snapshot;
pub mod store;
pub mod studio;

pub use interaction::{InteractionMode, PointerKind, PointerOutcome};
pub use sink::{CellHandle, RecordingSink, RenderSink, SinkCall};
pub use snapshot::{Selections, VisualState};
pub use store::{RegionId, StoredRegion, StyleStore};
pub use studio::{FrameReport, Studio};
