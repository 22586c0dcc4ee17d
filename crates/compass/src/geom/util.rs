use std::f64::consts::PI;

use nalgebra::Vector2;

use super::Point;
use crate::cfg::SpreadRule;
use crate::error::{CompassError, Result};

/// Reject NaN/inf coordinates before they reach any transform.
#[inline]
pub fn ensure_finite(p: Point) -> Result<Point> {
    if p.x.is_finite() && p.y.is_finite() {
        Ok(p)
    } else {
        Err(CompassError::InvalidInput { x: p.x, y: p.y })
    }
}

/// Bearing of `to` seen from `from`, in radians, measured from the +y axis.
///
/// Arguments to `atan2` are swapped on purpose: `atan2(dx, dy)` is zero for a
/// point straight below the pivot, which is the legs' rest pose.
#[inline]
pub fn bearing_from_vertical(from: Point, to: Point) -> f64 {
    let d = to - from;
    d.x.atan2(d.y)
}

/// Body rotation (degrees) for a pointer at `bearing`. Unnormalized.
#[inline]
pub fn rotation_from_bearing(bearing: f64) -> f64 {
    -bearing.to_degrees() - 180.0
}

/// Tip of one leg hanging from `pivot_live`, opened by `half_spread` radians.
///
/// `alpha = half_spread + π`, tip = pivot − len·(sin α, cos α). The left leg
/// uses `θ/2`, the right leg `−θ/2`.
#[inline]
pub fn leg_tip(pivot_live: Point, leg_length: f64, half_spread: f64) -> Point {
    let alpha = half_spread + PI;
    pivot_live - Vector2::new(alpha.sin(), alpha.cos()) * leg_length
}

/// Signed spread increment (radians) for a pointer step `anchor → pointer`.
///
/// Magnitude is the step length over half a leg, so longer legs need more
/// travel per radian.
pub fn spread_step(
    rule: SpreadRule,
    anchor: Point,
    pointer: Point,
    pivot_live: Point,
    leg_length: f64,
) -> f64 {
    let delta = pointer - anchor;
    let magnitude = delta.norm() / (leg_length / 2.0);
    match rule {
        SpreadRule::AxisDominance => {
            if delta.x > delta.y {
                -magnitude
            } else {
                magnitude
            }
        }
        SpreadRule::Radial => {
            let before = (anchor - pivot_live).norm();
            let after = (pointer - pivot_live).norm();
            if after > before {
                -magnitude
            } else if after < before {
                magnitude
            } else {
                0.0
            }
        }
    }
}
