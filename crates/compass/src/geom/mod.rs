//! Planar helpers for the compass engine.
//!
//! Purpose
//! - Keep the angle conventions in one place: bearings are measured from the
//!   vertical rest axis (legs point "down", +y), not from the x axis.
//! - Stay free of state so the state machine only sequences calls.
//!
//! Code cross-refs: `state::CompassState`, `cfg::SpreadRule`

mod util;

pub use util::{bearing_from_vertical, ensure_finite, leg_tip, rotation_from_bearing, spread_step};

/// Coordinate in the compass's local (untranslated, unrotated) frame.
pub type Point = nalgebra::Vector2<f64>;
