//! Geometry engine for an interactive drawing compass.
//!
//! A pivoted two-leg instrument can be dragged, rotated about its pivot and
//! spread open by pointer gestures. `CompassState` turns raw pointer samples
//! into a translation offset, a rotation angle and a leg spread, and keeps
//! the leg tips and the renderer's `TransformDescriptor` consistent with them.
//!
//! Layout
//! - `geom`: angle conventions and pure helpers.
//! - `cfg`: construction-time configuration and validation.
//! - `state`: the interaction state machine and derived outputs.
//! - `adapter`: host pointer events → state machine calls.
//! - `sample`: seeded pointer gestures for tests and benches.

pub mod adapter;
pub mod cfg;
pub mod error;
pub mod geom;
pub mod sample;
pub mod state;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use adapter::{Frame, Handle, PointerAdapter, PointerEvent};
pub use cfg::{CompassCfg, SpreadRule};
pub use error::{CompassError, Result};
pub use geom::Point;
pub use state::{
    CompassState, InteractionMode, LegEndpoints, PointerCapture, TransformDescriptor,
};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::adapter::{Frame, Handle, PointerAdapter, PointerEvent};
    pub use crate::cfg::{CompassCfg, SpreadRule};
    pub use crate::error::CompassError;
    pub use crate::geom::Point;
    pub use crate::sample::{sample_path, SampleCfg};
    pub use crate::state::{CompassState, InteractionMode, TransformDescriptor};
}
