//! Error type shared by configuration, state machine and adapter.

use thiserror::Error;

use crate::state::InteractionMode;

/// Errors reported synchronously to the caller. All of them describe caller
/// misuse; none is transient.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CompassError {
    /// A `begin_*` call while another gesture is active.
    #[error("cannot begin {requested:?} while {active:?} is active")]
    InvalidTransition {
        active: InteractionMode,
        requested: InteractionMode,
    },

    /// Rejected at construction.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// Pointer coordinates that are NaN or infinite.
    #[error("non-finite pointer coordinates ({x}, {y})")]
    InvalidInput { x: f64, y: f64 },
}

pub type Result<T> = std::result::Result<T, CompassError>;
