#![forbid(unsafe_code)]

//! Core: grid geometry, randomness, proportion animation, and timers.
//!
//! # Role in Mosaic
//! `mosaic-core` is the bottom layer. It owns the track coordinate space,
//! the pluggable [`Sampler`](sample::Sampler) every random decision draws
//! from, and the per-frame [`ProportionAnimator`](animation::ProportionAnimator)
//! that eases row and column weights toward their targets.
//!
//! # Primary responsibilities
//! - **Geometry**: [`GridSpec`](geometry::GridSpec), [`CellRegion`](geometry::CellRegion),
//!   track resolution, and output aspect ratios.
//! - **Sampling**: uniform draws, scripted replay for tests, weighted
//!   choice over named categories.
//! - **Animation**: size vectors, hover expansion, frame ticks.
//! - **Timers**: idempotently stoppable interval timers fed by frame time.
//! - **Tuning**: the fixed interpolation, interval and probability numbers.
//!
//! # How it fits in the system
//! `mosaic-style` and `mosaic-layout` build on these types; `mosaic-runtime`
//! wires the animator and timers into the frame loop.

pub mod animation;
pub mod geometry;
pub mod sample;
pub mod selector;
pub mod timer;
pub mod tuning;

pub use animation::{
    AnimatorConfig, AnimatorState, Axis, FrameOutcome, HoverState, ProportionAnimator, SizeVector,
    lerp,
};
pub use geometry::{AspectRatio, CellRegion, GridSpec, TrackSpan, resolve_tracks};
pub use sample::{Sampler, ScriptedSampler, WeightedChoice};
pub use selector::{UnknownSelector, parse_or_default};
pub use timer::IntervalTimer;
pub use tuning::Tuning;
