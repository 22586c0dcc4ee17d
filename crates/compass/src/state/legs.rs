use super::{CompassState, LegEndpoints};
use crate::geom::leg_tip;

/// Derive both tips from the live pivot; the legs open symmetrically about the
/// vertical axis by half the spread each.
pub fn leg_endpoints(state: &CompassState) -> LegEndpoints {
    let pivot_live = state.pivot_live();
    let len = state.cfg().leg_length;
    let half = state.spread_rad() / 2.0;
    LegEndpoints {
        left: leg_tip(pivot_live, len, half),
        right: leg_tip(pivot_live, len, -half),
    }
}
