use serde::{Deserialize, Serialize};

use crate::geom::Point;

/// Active gesture. At most one is active while the pointer is down.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InteractionMode {
    #[default]
    Idle,
    Dragging,
    Rotating,
    SpreadAdjusting,
}

impl InteractionMode {
    #[inline]
    pub fn is_active(self) -> bool {
        self != InteractionMode::Idle
    }
}

/// Returned by `begin_*`: whether the host should suppress its default
/// pointer handling (text selection, native drag) for this gesture.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PointerCapture {
    pub prevent_default: bool,
}

/// Translate + rotate data handed to the renderer each frame.
///
/// Invariants:
/// - `translate` is `None` iff the offset is exactly `(0, 0)`.
/// - `rotate_center` is the pivot in local coordinates; the renderer applies
///   the rotation inside the translated frame.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct TransformDescriptor {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub translate: Option<Point>,
    pub rotate_deg: f64,
    pub rotate_center: Point,
}

impl TransformDescriptor {
    /// SVG `transform` attribute value, e.g. `translate(5,10) rotate(-180,21,70)`.
    pub fn to_svg(&self) -> String {
        let rotate = format!(
            "rotate({},{},{})",
            self.rotate_deg, self.rotate_center.x, self.rotate_center.y
        );
        match self.translate {
            Some(t) => format!("translate({},{}) {rotate}", t.x, t.y),
            None => rotate,
        }
    }
}

/// Both leg tips in the live (translated) frame.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct LegEndpoints {
    pub left: Point,
    pub right: Point,
}

impl LegEndpoints {
    /// Distance between the tips, i.e. the radius the compass would draw.
    #[inline]
    pub fn span(&self) -> f64 {
        (self.right - self.left).norm()
    }
}
