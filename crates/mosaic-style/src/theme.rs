#![forbid(unsafe_code)]

//! Light and dark themes for the default backdrop and empty regions.

use std::fmt;
use std::str::FromStr;

use mosaic_core::selector::UnknownSelector;
use serde::{Deserialize, Serialize};

use crate::color::Rgb;

/// Export theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// The other theme.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Color of grid lines and the default backdrop.
    #[must_use]
    pub const fn line(self) -> Rgb {
        match self {
            Self::Light => Rgb::from_u32(0x1A1A1A),
            Self::Dark => Rgb::from_u32(0xE6E6E6),
        }
    }

    /// Color of empty regions.
    #[must_use]
    pub const fn surface(self) -> Rgb {
        match self {
            Self::Light => Rgb::from_u32(0xFAFAF7),
            Self::Dark => Rgb::from_u32(0x111111),
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Light => "light",
            Self::Dark => "dark",
        })
    }
}

impl FromStr for Theme {
    type Err = UnknownSelector;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            _ => Err(UnknownSelector::new("theme", s)),
        }
    }
}
