use tracing::{debug, trace, warn};

use super::{compose_transform, leg_endpoints};
use super::{InteractionMode, LegEndpoints, PointerCapture, TransformDescriptor};
use crate::cfg::CompassCfg;
use crate::error::{CompassError, Result};
use crate::geom::{bearing_from_vertical, ensure_finite, rotation_from_bearing, spread_step, Point};

/// All mutable geometry of one compass widget.
///
/// Invariants:
/// - `spread_rad ∈ [min_spread, max_spread]` at all times.
/// - `transform == compose_transform(self)` after every public call.
/// - `spread_anchor.is_some()` iff `mode == SpreadAdjusting`.
#[derive(Clone, Debug)]
pub struct CompassState {
    cfg: CompassCfg,
    min_spread: f64,
    max_spread: f64,
    offset: Point,
    rotation_deg: f64,
    spread_rad: f64,
    mode: InteractionMode,
    drag_anchor: Point,
    spread_anchor: Option<Point>,
    transform: TransformDescriptor,
}

impl Default for CompassState {
    fn default() -> Self {
        Self::from_valid(CompassCfg::default())
    }
}

impl CompassState {
    /// Validate `cfg` and start closed, unrotated, untranslated and idle.
    pub fn new(cfg: CompassCfg) -> Result<Self> {
        cfg.validate()?;
        Ok(Self::from_valid(cfg))
    }

    fn from_valid(cfg: CompassCfg) -> Self {
        let min_spread = cfg.min_spread_rad();
        let max_spread = cfg.max_spread_rad();
        let mut state = Self {
            cfg,
            min_spread,
            max_spread,
            offset: Point::zeros(),
            rotation_deg: 0.0,
            spread_rad: 0.0_f64.clamp(min_spread, max_spread),
            mode: InteractionMode::Idle,
            drag_anchor: Point::zeros(),
            spread_anchor: None,
            transform: TransformDescriptor {
                translate: None,
                rotate_deg: 0.0,
                rotate_center: cfg.pivot,
            },
        };
        state.refresh();
        state
    }

    // --- transitions ---

    pub fn begin_drag(&mut self, pointer: Point) -> Result<PointerCapture> {
        let pointer = self.checked(pointer)?;
        let anchor = pointer - self.offset;
        if !(anchor.x.is_finite() && anchor.y.is_finite()) {
            return Err(CompassError::InvalidInput {
                x: pointer.x,
                y: pointer.y,
            });
        }
        self.enter(InteractionMode::Dragging)?;
        self.drag_anchor = anchor;
        Ok(PointerCapture {
            prevent_default: true,
        })
    }

    /// Rotation needs no anchor: every move recomputes from the live pivot.
    pub fn begin_rotate(&mut self, pointer: Point) -> Result<PointerCapture> {
        self.checked(pointer)?;
        self.enter(InteractionMode::Rotating)?;
        Ok(PointerCapture {
            prevent_default: true,
        })
    }

    pub fn begin_spread(&mut self, pointer: Point) -> Result<PointerCapture> {
        let pointer = self.checked(pointer)?;
        self.enter(InteractionMode::SpreadAdjusting)?;
        self.spread_anchor = Some(pointer);
        Ok(PointerCapture {
            prevent_default: false,
        })
    }

    /// Feed one pointer sample. Returns the new descriptor, or `None` when no
    /// gesture is active.
    ///
    /// The update is applied to a candidate first; if any derived value
    /// overflows to a non-finite number the sample is rejected and `self` is
    /// left untouched.
    pub fn on_pointer_move(&mut self, pointer: Point) -> Result<Option<TransformDescriptor>> {
        let pointer = self.checked(pointer)?;
        let mut next = self.clone();
        match next.mode {
            InteractionMode::Idle => return Ok(None),
            InteractionMode::Dragging => next.on_drag(pointer),
            InteractionMode::Rotating => next.on_rotate(pointer),
            InteractionMode::SpreadAdjusting => next.on_spread(pointer),
        }
        next.refresh();
        if !next.is_finite() {
            warn!(x = pointer.x, y = pointer.y, mode = ?self.mode, "pointer overflows geometry");
            return Err(CompassError::InvalidInput {
                x: pointer.x,
                y: pointer.y,
            });
        }
        *self = next;
        Ok(Some(self.transform))
    }

    /// Pointer released. Legal from any mode, idempotent.
    pub fn end_interaction(&mut self) {
        if self.mode.is_active() {
            debug!(mode = ?self.mode, "end_interaction");
        }
        self.mode = InteractionMode::Idle;
        self.spread_anchor = None;
    }

    // --- queries ---

    #[inline]
    pub fn current_transform(&self) -> TransformDescriptor {
        self.transform
    }
    #[inline]
    pub fn current_mode(&self) -> InteractionMode {
        self.mode
    }
    #[inline]
    pub fn cfg(&self) -> &CompassCfg {
        &self.cfg
    }
    #[inline]
    pub fn translation_offset(&self) -> Point {
        self.offset
    }
    #[inline]
    pub fn rotation_deg(&self) -> f64 {
        self.rotation_deg
    }
    #[inline]
    pub fn spread_rad(&self) -> f64 {
        self.spread_rad
    }
    #[inline]
    pub fn spread_deg(&self) -> f64 {
        self.spread_rad.to_degrees()
    }
    /// Pivot including the drag offset.
    #[inline]
    pub fn pivot_live(&self) -> Point {
        self.cfg.pivot + self.offset
    }
    pub fn leg_endpoints(&self) -> LegEndpoints {
        leg_endpoints(self)
    }
    pub fn left_leg_tip(&self) -> Point {
        self.leg_endpoints().left
    }
    pub fn right_leg_tip(&self) -> Point {
        self.leg_endpoints().right
    }
    /// The drawing leg.
    pub fn pen_position(&self) -> Point {
        self.right_leg_tip()
    }
    pub fn drawing_radius(&self) -> f64 {
        self.leg_endpoints().span()
    }

    // --- handlers ---

    fn on_drag(&mut self, pointer: Point) {
        self.offset = pointer - self.drag_anchor;
        trace!(x = self.offset.x, y = self.offset.y, "drag");
    }

    fn on_rotate(&mut self, pointer: Point) {
        let bearing = bearing_from_vertical(self.pivot_live(), pointer);
        self.rotation_deg = rotation_from_bearing(bearing);
        trace!(deg = self.rotation_deg, "rotate");
    }

    fn on_spread(&mut self, pointer: Point) {
        let anchor = self.spread_anchor.unwrap_or(pointer);
        let step = spread_step(
            self.cfg.spread_rule,
            anchor,
            pointer,
            self.pivot_live(),
            self.cfg.leg_length,
        );
        self.spread_rad = (self.spread_rad + step).clamp(self.min_spread, self.max_spread);
        self.spread_anchor = Some(pointer);
        trace!(step, spread = self.spread_rad, "spread");
    }

    fn enter(&mut self, requested: InteractionMode) -> Result<()> {
        if self.mode.is_active() {
            warn!(active = ?self.mode, requested = ?requested, "rejected gesture start");
            return Err(CompassError::InvalidTransition {
                active: self.mode,
                requested,
            });
        }
        debug!(mode = ?requested, "begin");
        self.mode = requested;
        Ok(())
    }

    fn checked(&self, pointer: Point) -> Result<Point> {
        ensure_finite(pointer).inspect_err(|_| {
            warn!(x = pointer.x, y = pointer.y, mode = ?self.mode, "non-finite pointer");
        })
    }

    fn is_finite(&self) -> bool {
        let tips = self.leg_endpoints();
        [
            self.offset.x,
            self.offset.y,
            self.rotation_deg,
            self.spread_rad,
            tips.left.x,
            tips.left.y,
            tips.right.x,
            tips.right.y,
        ]
        .iter()
        .all(|v| v.is_finite())
    }

    fn refresh(&mut self) {
        self.transform = compose_transform(self);
    }
}
