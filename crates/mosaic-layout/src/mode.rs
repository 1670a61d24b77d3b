#![forbid(unsafe_code)]

//! Layout mode selection.

use std::fmt;
use std::str::FromStr;

use mosaic_core::geometry::GridSpec;
use mosaic_core::selector::{UnknownSelector, parse_or_default};
use serde::{Deserialize, Serialize};

/// Which partition strategy builds the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LayoutMode {
    /// Random spans up to 4×3, half the regions painted.
    #[default]
    Chaos,
    /// Checkerboard of palette solids.
    Chess,
    /// Fixed uneven tracks with 3×3 blocks.
    Mondrian,
    /// 14×14 grid of up-to-2×2 regions in earth tones.
    Cubism,
    /// Placeholder that builds a Chaos layout.
    Concentric,
    /// Flat grid of glyphs.
    Glyph,
}

impl LayoutMode {
    /// All modes in cycle order.
    pub const ALL: [Self; 6] = [
        Self::Chaos,
        Self::Chess,
        Self::Mondrian,
        Self::Cubism,
        Self::Concentric,
        Self::Glyph,
    ];

    /// The next mode in cycle order.
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::Chaos => Self::Chess,
            Self::Chess => Self::Mondrian,
            Self::Mondrian => Self::Cubism,
            Self::Cubism => Self::Concentric,
            Self::Concentric => Self::Glyph,
            Self::Glyph => Self::Chaos,
        }
    }

    /// Grid size this mode builds by default.
    #[must_use]
    pub const fn default_grid(self) -> GridSpec {
        match self {
            Self::Cubism => GridSpec::square(14),
            _ => GridSpec::DEFAULT,
        }
    }

    /// Lower-case name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Chaos => "chaos",
            Self::Chess => "chess",
            Self::Mondrian => "mondrian",
            Self::Cubism => "cubism",
            Self::Concentric => "concentric",
            Self::Glyph => "glyph",
        }
    }

    /// Human-facing label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Chaos => "Chaos",
            Self::Chess => "Chess",
            Self::Mondrian => "Mondrian",
            Self::Cubism => "Cubism",
            Self::Concentric => "Concentric",
            Self::Glyph => "ASCII",
        }
    }

    /// Parse leniently, falling back to [`LayoutMode::Chaos`].
    #[must_use]
    pub fn from_name_or_default(name: &str) -> Self {
        parse_or_default(name)
    }
}

impl fmt::Display for LayoutMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LayoutMode {
    type Err = UnknownSelector;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_ascii_lowercase();
        if key == "ascii" {
            return Ok(Self::Glyph);
        }
        Self::ALL
            .into_iter()
            .find(|m| m.as_str() == key)
            .ok_or_else(|| UnknownSelector::new("layout mode", s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cycle_visits_every_mode() {
        let mut mode = LayoutMode::Chaos;
        let mut seen = Vec::new();
        for _ in 0..6 {
            seen.push(mode);
            mode = mode.next();
        }
        assert_eq!(mode, LayoutMode::Chaos);
        assert_eq!(seen, LayoutMode::ALL.to_vec());
    }

    #[test]
    fn cubism_is_fourteen_square() {
        assert_eq!(LayoutMode::Cubism.default_grid(), GridSpec::square(14));
        assert_eq!(LayoutMode::Chess.default_grid(), GridSpec::square(12));
    }

    #[test]
    fn parse_names() {
        assert_eq!("ASCII".parse::<LayoutMode>().unwrap(), LayoutMode::Glyph);
        assert_eq!("mondrian".parse::<LayoutMode>().unwrap(), LayoutMode::Mondrian);
        assert_eq!(LayoutMode::from_name_or_default("spiral"), LayoutMode::Chaos);
    }
}
