//! Pointer adapter: maps host pointer events onto one owned `CompassState`.
//!
//! The host decides which handle was pressed (body, rotate tip, leg tip) and
//! forwards coordinates; the adapter picks the gesture and returns a `Frame`
//! with everything the renderer needs after each event.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::Result;
use crate::geom::Point;
use crate::state::{CompassState, InteractionMode, TransformDescriptor};

/// Part of the widget a pointer-down landed on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Handle {
    /// Compass body: translate.
    Body,
    /// Handle at the top: rotate about the pivot.
    RotateTip,
    /// Pen leg: open/close the legs.
    LegTip,
}

/// One host pointer event, in local coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PointerEvent {
    Down { handle: Handle, x: f64, y: f64 },
    Move { x: f64, y: f64 },
    Up,
}

/// Renderer-facing snapshot after one event.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Frame {
    pub mode: InteractionMode,
    pub transform: TransformDescriptor,
    /// `transform` rendered as an SVG attribute value.
    pub svg: String,
    pub left_tip: Point,
    pub right_tip: Point,
    pub spread_deg: f64,
    /// Only ever true on the `Down` that started a capturing gesture.
    pub prevent_default: bool,
}

#[derive(Clone, Debug, Default)]
pub struct PointerAdapter {
    state: CompassState,
}

impl PointerAdapter {
    pub fn new(state: CompassState) -> Self {
        Self { state }
    }

    #[inline]
    pub fn state(&self) -> &CompassState {
        &self.state
    }

    pub fn into_state(self) -> CompassState {
        self.state
    }

    /// Apply one event. Engine errors propagate unchanged and leave the state
    /// as it was.
    pub fn handle(&mut self, event: PointerEvent) -> Result<Frame> {
        let mut prevent_default = false;
        match event {
            PointerEvent::Down { handle, x, y } => {
                let p = Point::new(x, y);
                let capture = match handle {
                    Handle::Body => self.state.begin_drag(p)?,
                    Handle::RotateTip => self.state.begin_rotate(p)?,
                    Handle::LegTip => self.state.begin_spread(p)?,
                };
                prevent_default = capture.prevent_default;
            }
            PointerEvent::Move { x, y } => {
                self.state.on_pointer_move(Point::new(x, y))?;
            }
            PointerEvent::Up => self.state.end_interaction(),
        }
        Ok(self.frame(prevent_default))
    }

    /// Apply events in order, stopping at the first error.
    pub fn replay<I>(&mut self, events: I) -> Result<Vec<Frame>>
    where
        I: IntoIterator<Item = PointerEvent>,
    {
        let frames = events
            .into_iter()
            .map(|ev| self.handle(ev))
            .collect::<Result<Vec<_>>>()?;
        debug!(frames = frames.len(), mode = ?self.state.current_mode(), "replay done");
        Ok(frames)
    }

    fn frame(&self, prevent_default: bool) -> Frame {
        let tips = self.state.leg_endpoints();
        let transform = self.state.current_transform();
        Frame {
            mode: self.state.current_mode(),
            transform,
            svg: transform.to_svg(),
            left_tip: tips.left,
            right_tip: tips.right,
            spread_deg: self.state.spread_deg(),
            prevent_default,
        }
    }
}
