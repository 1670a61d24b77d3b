#![forbid(unsafe_code)]

//! Pointer interaction.

use std::fmt;
use std::str::FromStr;

use mosaic_core::selector::UnknownSelector;
use serde::Serialize;

/// How pointer movement restyles regions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum InteractionMode {
    /// Only the primary action restyles.
    #[default]
    Click,
    /// Entering a region restyles it too.
    Hover,
}

impl InteractionMode {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Click => "click",
            Self::Hover => "hover",
        }
    }

    /// Parse leniently, falling back to [`InteractionMode::Click`].
    pub fn from_name_or_default(name: &str) -> Self {
        mosaic_core::selector::parse_or_default(name)
    }
}

impl fmt::Display for InteractionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for InteractionMode {
    type Err = UnknownSelector;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "click" => Ok(Self::Click),
            "hover" => Ok(Self::Hover),
            _ => Err(UnknownSelector::new("interaction mode", s)),
        }
    }
}

/// The three per-region pointer interactions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointerKind {
    /// Pointer entered the region.
    Enter,
    /// Pointer left the region.
    Leave,
    /// Click or tap.
    Primary,
}

/// What a pointer event did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerOutcome {
    /// The region belongs to a previous generation or does not exist.
    Stale,
    /// Hover coordinates changed; no restyle.
    Hovered,
    /// The region was restyled.
    Restyled,
}
