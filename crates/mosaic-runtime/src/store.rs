#![forbid(unsafe_code)]

//! Style store keyed by region identity.
//!
//! Each installed layout starts a new generation. A [`RegionId`] names a
//! region within one generation; ids from older generations no longer
//! resolve, which is how stale pointer events are dropped.

use std::fmt;

use mosaic_core::geometry::CellRegion;
use mosaic_layout::Placement;
use mosaic_style::CellStyle;
use serde::Serialize;

use crate::sink::CellHandle;

/// Identity of a region within one layout generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct RegionId {
    pub generation: u32,
    pub index: u32,
}

impl RegionId {
    pub const fn new(generation: u32, index: u32) -> Self {
        Self { generation, index }
    }
}

impl fmt::Display for RegionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "g{}#{}", self.generation, self.index)
    }
}

/// A region, its style, and its sink handle once mounted.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StoredRegion {
    pub region: CellRegion,
    pub style: CellStyle,
    pub handle: Option<CellHandle>,
}

/// Styles of the live generation's regions.
#[derive(Debug, Clone, Default)]
pub struct StyleStore {
    generation: u32,
    regions: Vec<StoredRegion>,
}

impl StyleStore {
    /// Create an empty store at generation 0.
    pub fn new() -> Self {
        Self::default()
    }

    /// Live generation.
    pub fn generation(&self) -> u32 {
        self.generation
    }

    /// Number of live regions.
    pub fn len(&self) -> usize {
        self.regions.len()
    }

    /// Whether there are no live regions.
    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }

    /// Drop every region and start a new generation from `placements`.
    ///
    /// Returns the ids of the new regions in placement order.
    pub fn replace(&mut self, placements: &[Placement]) -> Vec<RegionId> {
        self.generation = self.generation.wrapping_add(1);
        self.regions = placements
            .iter()
            .map(|p| StoredRegion {
                region: p.region,
                style: p.style,
                handle: None,
            })
            .collect();
        (0..self.regions.len())
            .map(|i| RegionId::new(self.generation, i as u32))
            .collect()
    }

    /// Look up a live region. Ids from other generations return `None`.
    pub fn get(&self, id: RegionId) -> Option<&StoredRegion> {
        if id.generation != self.generation {
            return None;
        }
        self.regions.get(id.index as usize)
    }

    fn get_mut(&mut self, id: RegionId) -> Option<&mut StoredRegion> {
        if id.generation != self.generation {
            return None;
        }
        self.regions.get_mut(id.index as usize)
    }

    /// Record the sink handle for a live region.
    pub fn set_handle(&mut self, id: RegionId, handle: CellHandle) -> bool {
        self.get_mut(id).map(|r| r.handle = Some(handle)).is_some()
    }

    /// Replace the style of a live region.
    pub fn set_style(&mut self, id: RegionId, style: CellStyle) -> bool {
        self.get_mut(id).map(|r| r.style = style).is_some()
    }

    /// Id of the `index`-th live region.
    pub fn id_at(&self, index: usize) -> Option<RegionId> {
        (index < self.regions.len()).then(|| RegionId::new(self.generation, index as u32))
    }

    /// Live regions with their ids.
    pub fn iter(&self) -> impl Iterator<Item = (RegionId, &StoredRegion)> {
        let generation = self.generation;
        self.regions
            .iter()
            .enumerate()
            .map(move |(i, r)| (RegionId::new(generation, i as u32), r))
    }

    /// Live regions as placements.
    pub fn placements(&self) -> Vec<Placement> {
        self.regions
            .iter()
            .map(|r| Placement {
                region: r.region,
                style: r.style,
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mosaic_core::geometry::GridSpec;
    use mosaic_layout::Layout;
    use mosaic_style::{Fill, Rgb};

    #[test]
    fn replace_bumps_generation() {
        let mut store = StyleStore::new();
        let layout = Layout::blank(GridSpec::new(2, 2));
        let first = store.replace(&layout.placements);
        assert_eq!(first.len(), 4);
        assert_eq!(first[0], RegionId::new(1, 0));

        let second = store.replace(&layout.placements);
        assert_eq!(second[3], RegionId::new(2, 3));
        assert!(store.get(first[0]).is_none());
        assert!(store.get(second[0]).is_some());
    }

    #[test]
    fn stale_ids_cannot_be_restyled() {
        let mut store = StyleStore::new();
        let layout = Layout::blank(GridSpec::new(1, 1));
        let old = store.replace(&layout.placements)[0];
        store.replace(&layout.placements);
        let style = CellStyle::from(Fill::Solid(Rgb::BLACK));
        assert!(!store.set_style(old, style));
        assert_eq!(store.placements()[0].style, CellStyle::Empty);
    }

    #[test]
    fn id_at_bounds() {
        let mut store = StyleStore::new();
        store.replace(&Layout::blank(GridSpec::new(3, 1)).placements);
        assert_eq!(store.id_at(2), Some(RegionId::new(1, 2)));
        assert_eq!(store.id_at(3), None);
    }
}
