#![forbid(unsafe_code)]

//! Palette registry.
//!
//! Palettes are read-only static data selected by [`PaletteName`]. Each
//! holds a list of solid colors and a list of gradients; the combined
//! "pool" (solids first, then gradients) is what shape fills draw from.

use std::fmt;
use std::str::FromStr;

use mosaic_core::selector::{UnknownSelector, parse_or_default};
use serde::{Deserialize, Serialize};

use crate::color::Rgb;
use crate::gradient::{Gradient, GradientDirection as Dir, GradientStop as Stop};
use crate::style::Paint;

/// Neutral off-white used for unpainted Mondrian blocks.
pub const NEUTRAL: Rgb = Rgb::from_u32(0xF0F0F0);

/// Curated block colors for Mondrian layouts with the modern palette.
///
/// The neutral appears twice to bias toward it.
pub const MONDRIAN_COLORS: [Rgb; 5] = [
    Rgb::from_u32(0xE30022),
    Rgb::from_u32(0x0000B8),
    Rgb::from_u32(0xFFD700),
    NEUTRAL,
    NEUTRAL,
];

// ---------------------------------------------------------------------------
// PaletteName
// ---------------------------------------------------------------------------

/// Which palette is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaletteName {
    #[default]
    Modern,
    Vivid,
    Bauhaus,
    Cubist,
}

impl PaletteName {
    /// All palettes in registry order.
    pub const ALL: [Self; 4] = [Self::Modern, Self::Vivid, Self::Bauhaus, Self::Cubist];

    /// Lower-case name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Modern => "modern",
            Self::Vivid => "vivid",
            Self::Bauhaus => "bauhaus",
            Self::Cubist => "cubist",
        }
    }

    /// The palette's data.
    #[must_use]
    pub fn palette(self) -> &'static Palette {
        match self {
            Self::Modern => &MODERN,
            Self::Vivid => &VIVID,
            Self::Bauhaus => &BAUHAUS,
            Self::Cubist => &CUBIST,
        }
    }

    /// Parse leniently, falling back to [`PaletteName::Modern`].
    #[must_use]
    pub fn from_name_or_default(name: &str) -> Self {
        parse_or_default(name)
    }
}

impl fmt::Display for PaletteName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PaletteName {
    type Err = UnknownSelector;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|p| p.as_str() == key)
            .ok_or_else(|| UnknownSelector::new("palette", s))
    }
}

// ---------------------------------------------------------------------------
// Palette
// ---------------------------------------------------------------------------

/// A named collection of solid colors and gradients.
#[derive(Debug, PartialEq)]
pub struct Palette {
    /// Registry name.
    pub name: PaletteName,
    /// Solid colors.
    pub solids: &'static [Rgb],
    /// Gradients.
    pub gradients: &'static [Gradient],
}

impl Palette {
    /// Look up a palette by name.
    #[must_use]
    pub fn named(name: &str) -> Option<&'static Self> {
        name.parse::<PaletteName>().ok().map(PaletteName::palette)
    }

    /// Solid color at `index`, wrapping around.
    #[must_use]
    pub fn solid_at(&self, index: usize) -> Rgb {
        if self.solids.is_empty() {
            return NEUTRAL;
        }
        self.solids[index % self.solids.len()]
    }

    /// Size of the combined solids + gradients pool.
    #[must_use]
    pub fn pool_len(&self) -> usize {
        self.solids.len() + self.gradients.len()
    }

    /// Paint at `index` in the combined pool (solids first), wrapping around.
    #[must_use]
    pub fn pool_at(&self, index: usize) -> Paint {
        let len = self.pool_len();
        if len == 0 {
            return Paint::Solid(NEUTRAL);
        }
        let i = index % len;
        match self.solids.get(i) {
            Some(&c) => Paint::Solid(c),
            None => Paint::Gradient(&self.gradients[i - self.solids.len()]),
        }
    }

    /// Find a gradient in any palette by id.
    #[must_use]
    pub fn find_gradient(id: &str) -> Option<&'static Gradient> {
        PaletteName::ALL
            .into_iter()
            .flat_map(|p| p.palette().gradients.iter())
            .find(|g| g.id == id)
    }
}

static MODERN: Palette = Palette {
    name: PaletteName::Modern,
    solids: &[
        Rgb::from_u32(0xFF3B30),
        Rgb::from_u32(0x007AFF),
        Rgb::from_u32(0x34C759),
        Rgb::from_u32(0xFF9500),
        Rgb::from_u32(0xAF52DE),
        Rgb::from_u32(0xEEEEEE),
    ],
    gradients: &[
        Gradient {
            id: "modern-blush",
            direction: Dir::Angle(135.0),
            stops: &[Stop::new(0xFF9A9E, 0.0), Stop::new(0xFECFEF, 1.0)],
        },
        Gradient {
            id: "modern-lilac",
            direction: Dir::Angle(120.0),
            stops: &[Stop::new(0xA18CD1, 0.0), Stop::new(0xFBC2EB, 1.0)],
        },
        Gradient {
            id: "modern-sky",
            direction: Dir::ToTop,
            stops: &[Stop::new(0xFFF1EB, 0.0), Stop::new(0xACE0F9, 1.0)],
        },
        Gradient {
            id: "modern-lime",
            direction: Dir::Angle(45.0),
            stops: &[Stop::new(0x85FFBD, 0.0), Stop::new(0xFFFB7D, 1.0)],
        },
    ],
};

static VIVID: Palette = Palette {
    name: PaletteName::Vivid,
    solids: &[
        Rgb::from_u32(0xFF00FF),
        Rgb::from_u32(0x00FFFF),
        Rgb::from_u32(0xFFFF00),
        Rgb::from_u32(0x00FF00),
        Rgb::from_u32(0xFF0055),
        Rgb::from_u32(0xFFFFFF),
    ],
    gradients: &[
        Gradient {
            id: "vivid-magenta-cyan",
            direction: Dir::Angle(45.0),
            stops: &[Stop::new(0xFF00FF, 0.0), Stop::new(0x00FFFF, 1.0)],
        },
        Gradient {
            id: "vivid-yellow-red",
            direction: Dir::Angle(90.0),
            stops: &[Stop::new(0xFFFF00, 0.0), Stop::new(0xFF0000, 1.0)],
        },
        Gradient {
            id: "vivid-green-blue",
            direction: Dir::Angle(135.0),
            stops: &[Stop::new(0x00FF00, 0.0), Stop::new(0x0000FF, 1.0)],
        },
    ],
};

static BAUHAUS: Palette = Palette {
    name: PaletteName::Bauhaus,
    solids: &[
        Rgb::from_u32(0xD6241F),
        Rgb::from_u32(0x245BA8),
        Rgb::from_u32(0xF8CF38),
        Rgb::from_u32(0x222222),
        Rgb::from_u32(0xF0F0F0),
    ],
    gradients: &[
        Gradient {
            id: "bauhaus-split-h",
            direction: Dir::ToRight,
            stops: &[Stop::new(0xD6241F, 0.5), Stop::new(0x245BA8, 0.5)],
        },
        Gradient {
            id: "bauhaus-split-v",
            direction: Dir::ToBottom,
            stops: &[Stop::new(0xF8CF38, 0.5), Stop::new(0x222222, 0.5)],
        },
    ],
};

static CUBIST: Palette = Palette {
    name: PaletteName::Cubist,
    solids: &[
        Rgb::from_u32(0xA0522D),
        Rgb::from_u32(0xCD853F),
        Rgb::from_u32(0x8B4513),
        Rgb::from_u32(0x708090),
        Rgb::from_u32(0x2F4F4F),
        Rgb::from_u32(0xDCDCDC),
        Rgb::from_u32(0xC0C0C0),
    ],
    gradients: &[
        Gradient {
            id: "cubist-sienna",
            direction: Dir::ToRight,
            stops: &[Stop::new(0xA0522D, 0.0), Stop::new(0xCD853F, 1.0)],
        },
        Gradient {
            id: "cubist-slate",
            direction: Dir::Angle(135.0),
            stops: &[Stop::new(0x708090, 0.0), Stop::new(0x2F4F4F, 1.0)],
        },
        Gradient {
            id: "cubist-umber",
            direction: Dir::ToBottom,
            stops: &[Stop::new(0xDCDCDC, 0.0), Stop::new(0x8B4513, 1.0)],
        },
    ],
};

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn registry_sizes() {
        let sizes: Vec<(usize, usize)> = PaletteName::ALL
            .iter()
            .map(|p| (p.palette().solids.len(), p.palette().gradients.len()))
            .collect();
        assert_eq!(sizes, vec![(6, 4), (6, 3), (5, 2), (7, 3)]);
    }

    #[test]
    fn names_round_trip() {
        for name in PaletteName::ALL {
            assert_eq!(name.as_str().parse::<PaletteName>().unwrap(), name);
            assert_eq!(name.palette().name, name);
        }
        assert_eq!("  Bauhaus ".parse::<PaletteName>().unwrap(), PaletteName::Bauhaus);
    }

    #[test]
    fn unknown_palette_falls_back() {
        assert!("pastel".parse::<PaletteName>().is_err());
        assert_eq!(PaletteName::from_name_or_default("pastel"), PaletteName::Modern);
        assert!(Palette::named("pastel").is_none());
    }

    #[test]
    fn gradient_ids_unique_and_findable() {
        let mut seen = HashSet::new();
        for name in PaletteName::ALL {
            for g in name.palette().gradients {
                assert!(seen.insert(g.id), "duplicate gradient id {}", g.id);
                assert_eq!(Palette::find_gradient(g.id), Some(g));
            }
        }
    }

    #[test]
    fn pool_orders_solids_first() {
        let modern = PaletteName::Modern.palette();
        assert_eq!(modern.pool_len(), 10);
        assert_eq!(modern.pool_at(0), Paint::Solid(Rgb::from_u32(0xFF3B30)));
        assert!(matches!(modern.pool_at(6), Paint::Gradient(g) if g.id == "modern-blush"));
        assert_eq!(modern.pool_at(10), modern.pool_at(0));
    }

    #[test]
    fn solid_at_wraps() {
        let modern = PaletteName::Modern.palette();
        assert_eq!(modern.solid_at(7), modern.solids[1]);
    }
}
