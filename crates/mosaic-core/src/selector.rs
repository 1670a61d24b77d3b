#![forbid(unsafe_code)]

//! Errors and helpers for named selectors (tools, palettes, layout modes).
//!
//! Every process-wide selection is a small enum parsed from a name. Strict
//! parsing returns [`UnknownSelector`]; the lenient path falls back to the
//! enum's default and logs the miss.

use std::str::FromStr;

use thiserror::Error;

/// A selector name did not match any known variant.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown {kind}: {name:?}")]
pub struct UnknownSelector {
    /// What was being selected (e.g. `"tool"`).
    pub kind: &'static str,
    /// The rejected input.
    pub name: String,
}

impl UnknownSelector {
    /// Create a new error for `kind` with the rejected `name`.
    pub fn new(kind: &'static str, name: impl Into<String>) -> Self {
        Self {
            kind,
            name: name.into(),
        }
    }
}

/// Parse `name` as `T`, falling back to `T::default()` on unknown input.
pub fn parse_or_default<T>(name: &str) -> T
where
    T: FromStr<Err = UnknownSelector> + Default,
{
    match name.parse() {
        Ok(value) => value,
        Err(err) => {
            tracing::debug!(kind = err.kind, name = %err.name, "unknown selector, using default");
            T::default()
        }
    }
}
