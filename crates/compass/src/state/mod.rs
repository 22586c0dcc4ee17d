//! Compass interaction state machine.
//!
//! Purpose
//! - Own all mutable geometry (offset, rotation, spread) in one `CompassState`
//!   and expose begin/move/end transitions plus read-only queries.
//! - Keep derived data (transform descriptor, leg tips) consistent after every
//!   mutation: the descriptor is recomputed eagerly, tips are derived on demand.
//!
//! Layout
//! - `types.rs`: modes, descriptor, tips, capture signal.
//! - `machine.rs`: `CompassState` and the drag/rotate/spread handlers.
//! - `legs.rs`, `transform.rs`: pure derivations over a state snapshot.
//!
//! Code cross-refs: `geom::{bearing_from_vertical, leg_tip, spread_step}`, `cfg::CompassCfg`

mod legs;
mod machine;
mod transform;
mod types;

pub use legs::leg_endpoints;
pub use machine::CompassState;
pub use transform::compose_transform;
pub use types::{InteractionMode, LegEndpoints, PointerCapture, TransformDescriptor};
