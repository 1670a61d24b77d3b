#![forbid(unsafe_code)]

//! The render-sink seam.
//!
//! A [`RenderSink`] is whatever materializes the grid: a terminal preview,
//! a test recorder, a GUI. The studio calls into it and never reads back
//! visual state. The sink owns its handle space and maps each
//! [`CellHandle`] it returns to the [`RegionId`] it was mounted for, so
//! pointer events can be routed back to regions.

use mosaic_core::geometry::CellRegion;
use mosaic_style::CellStyle;
use rustc_hash::FxHashMap;

use crate::store::RegionId;

/// Opaque handle a sink returns for a mounted region.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CellHandle(pub u64);

/// Collaborator that displays the grid.
pub trait RenderSink {
    /// Apply proportional track sizes.
    fn apply_tracks(&mut self, cols: &[f64], rows: &[f64]);

    /// Materialize a styled region and return a handle for it.
    fn mount_region(&mut self, id: RegionId, region: CellRegion, style: &CellStyle) -> CellHandle;

    /// Replace the style of a mounted region.
    fn restyle(&mut self, handle: CellHandle, style: &CellStyle);

    /// Remove every mounted region. Previously returned handles become
    /// invalid.
    fn clear(&mut self);

    /// Region a handle was mounted for, if the handle is still live.
    fn resolve(&self, handle: CellHandle) -> Option<RegionId>;
}

impl<R: RenderSink + ?Sized> RenderSink for &mut R {
    fn apply_tracks(&mut self, cols: &[f64], rows: &[f64]) {
        (**self).apply_tracks(cols, rows);
    }

    fn mount_region(&mut self, id: RegionId, region: CellRegion, style: &CellStyle) -> CellHandle {
        (**self).mount_region(id, region, style)
    }

    fn restyle(&mut self, handle: CellHandle, style: &CellStyle) {
        (**self).restyle(handle, style);
    }

    fn clear(&mut self) {
        (**self).clear();
    }

    fn resolve(&self, handle: CellHandle) -> Option<RegionId> {
        (**self).resolve(handle)
    }
}

// ---------------------------------------------------------------------------
// RecordingSink
// ---------------------------------------------------------------------------

/// One call received by a [`RecordingSink`].
#[derive(Debug, Clone, PartialEq)]
pub enum SinkCall {
    Tracks { cols: Vec<f64>, rows: Vec<f64> },
    Mount { handle: CellHandle, id: RegionId, region: CellRegion, style: CellStyle },
    Restyle { handle: CellHandle, style: CellStyle },
    Clear,
}

/// A headless sink that records every call.
///
/// Useful for tests and for headless runs that only export.
#[derive(Debug, Default)]
pub struct RecordingSink {
    calls: Vec<SinkCall>,
    live: FxHashMap<CellHandle, RegionId>,
    next_handle: u64,
}

impl RecordingSink {
    /// Create an empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Every call received, in order.
    pub fn calls(&self) -> &[SinkCall] {
        &self.calls
    }

    /// Forget recorded calls; live handles are kept.
    pub fn take_calls(&mut self) -> Vec<SinkCall> {
        std::mem::take(&mut self.calls)
    }

    /// Number of regions currently mounted.
    pub fn mounted(&self) -> usize {
        self.live.len()
    }

    /// Handles currently mounted, sorted.
    pub fn handles(&self) -> Vec<CellHandle> {
        let mut handles: Vec<_> = self.live.keys().copied().collect();
        handles.sort_unstable();
        handles
    }

    /// The most recent track sizes applied.
    pub fn last_tracks(&self) -> Option<(&[f64], &[f64])> {
        self.calls.iter().rev().find_map(|call| match call {
            SinkCall::Tracks { cols, rows } => Some((cols.as_slice(), rows.as_slice())),
            _ => None,
        })
    }
}

impl RenderSink for RecordingSink {
    fn apply_tracks(&mut self, cols: &[f64], rows: &[f64]) {
        self.calls.push(SinkCall::Tracks {
            cols: cols.to_vec(),
            rows: rows.to_vec(),
        });
    }

    fn mount_region(&mut self, id: RegionId, region: CellRegion, style: &CellStyle) -> CellHandle {
        let handle = CellHandle(self.next_handle);
        self.next_handle += 1;
        self.live.insert(handle, id);
        self.calls.push(SinkCall::Mount {
            handle,
            id,
            region,
            style: *style,
        });
        handle
    }

    fn restyle(&mut self, handle: CellHandle, style: &CellStyle) {
        self.calls.push(SinkCall::Restyle {
            handle,
            style: *style,
        });
    }

    fn clear(&mut self) {
        self.live.clear();
        self.calls.push(SinkCall::Clear);
    }

    fn resolve(&self, handle: CellHandle) -> Option<RegionId> {
        self.live.get(&handle).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn handles_are_unique_across_clears() {
        let mut sink = RecordingSink::new();
        let id = RegionId::new(1, 0);
        let a = sink.mount_region(id, CellRegion::unit(0, 0), &CellStyle::Empty);
        sink.clear();
        let b = sink.mount_region(RegionId::new(2, 0), CellRegion::unit(0, 0), &CellStyle::Empty);
        assert_ne!(a, b);
        assert_eq!(sink.resolve(a), None);
        assert_eq!(sink.resolve(b), Some(RegionId::new(2, 0)));
        assert_eq!(sink.mounted(), 1);
    }

    #[test]
    fn last_tracks_finds_latest() {
        let mut sink = RecordingSink::new();
        assert!(sink.last_tracks().is_none());
        sink.apply_tracks(&[1.0], &[2.0]);
        sink.apply_tracks(&[3.0], &[4.0]);
        sink.clear();
        assert_eq!(sink.last_tracks(), Some((&[3.0][..], &[4.0][..])));
    }
}
