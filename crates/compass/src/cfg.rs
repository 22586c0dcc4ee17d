//! Compass configuration (immutable after construction).
//!
//! - `CompassCfg`: leg geometry, pivot, spread range and the spread sign rule.
//! - Layout constants (`leg_width`, `body_width`, `body_height`) are carried for
//!   the rendering side only; the geometry math never reads them.
//!
//! Code cross-refs: `state::CompassState::new`, `geom::spread_step`

use serde::{Deserialize, Serialize};

use crate::error::{CompassError, Result};
use crate::geom::Point;

/// How the sign of an incremental spread step is chosen.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SpreadRule {
    /// Negative (opening) when the pointer moved more along x than along y.
    #[default]
    AxisDominance,
    /// Negative (opening) when the pointer moved away from the live pivot,
    /// positive when it moved closer, zero along a circle around it.
    Radial,
}

/// Compass geometry and interaction limits.
///
/// Missing fields fall back to [`CompassCfg::default`] when deserialized.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CompassCfg {
    pub leg_length: f64,
    /// Visual thickness of a leg; not used by the math.
    pub leg_width: f64,
    /// Mechanical joint of both legs, in local coordinates.
    pub pivot: Point,
    pub body_width: f64,
    pub body_height: f64,
    pub min_spread_deg: f64,
    pub max_spread_deg: f64,
    pub spread_rule: SpreadRule,
}

impl Default for CompassCfg {
    fn default() -> Self {
        Self {
            leg_length: 231.5,
            leg_width: 3.0,
            pivot: Point::new(21.0, 70.0),
            body_width: 53.0,
            body_height: 301.5,
            min_spread_deg: -120.0,
            max_spread_deg: 0.0,
            spread_rule: SpreadRule::AxisDominance,
        }
    }
}

impl CompassCfg {
    /// Check every constraint the state machine relies on.
    pub fn validate(&self) -> Result<()> {
        let scalars = [
            ("leg_length", self.leg_length),
            ("leg_width", self.leg_width),
            ("pivot.x", self.pivot.x),
            ("pivot.y", self.pivot.y),
            ("body_width", self.body_width),
            ("body_height", self.body_height),
            ("min_spread_deg", self.min_spread_deg),
            ("max_spread_deg", self.max_spread_deg),
        ];
        if let Some((name, v)) = scalars.iter().find(|(_, v)| !v.is_finite()) {
            return Err(invalid(format!("{name} must be finite, got {v}")));
        }
        if self.leg_length <= 0.0 {
            return Err(invalid(format!(
                "leg_length must be positive, got {}",
                self.leg_length
            )));
        }
        // Subnormal lengths collapse to zero when halved for the spread step.
        if !self.leg_length.is_normal() {
            return Err(invalid(format!(
                "leg_length is too small to be usable, got {:e}",
                self.leg_length
            )));
        }
        if self.leg_width < 0.0 {
            return Err(invalid(format!(
                "leg_width must not be negative, got {}",
                self.leg_width
            )));
        }
        if self.min_spread_deg > 0.0 {
            return Err(invalid(format!(
                "min_spread_deg must be <= 0, got {}",
                self.min_spread_deg
            )));
        }
        if self.min_spread_deg > self.max_spread_deg {
            return Err(invalid(format!(
                "min_spread_deg ({}) exceeds max_spread_deg ({})",
                self.min_spread_deg, self.max_spread_deg
            )));
        }
        Ok(())
    }

    #[inline]
    pub fn min_spread_rad(&self) -> f64 {
        self.min_spread_deg.to_radians()
    }

    #[inline]
    pub fn max_spread_rad(&self) -> f64 {
        self.max_spread_deg.to_radians()
    }
}

fn invalid(msg: String) -> CompassError {
    CompassError::InvalidConfiguration(msg)
}
