//! Seeded pointer gestures (random walks) for property tests, benches and the CLI.
//!
//! Model
//! - One gesture: `Down` on a handle at `start`, `steps` moves with each
//!   coordinate jittered by at most `max_step`, then `Up`.
//! - Determinism: the same `(cfg, seed)` always yields the same events.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::adapter::{Handle, PointerEvent};
use crate::geom::Point;

/// Upper bound on a single step, keeping every sampled coordinate finite.
pub const STEP_LIMIT: f64 = 1.0e9;

/// Events reserved up front; longer walks grow the buffer as they go.
const PREALLOC_LIMIT: usize = 1 << 16;

/// Random-walk gesture configuration.
#[derive(Clone, Copy, Debug)]
pub struct SampleCfg {
    pub handle: Handle,
    pub start: Point,
    pub steps: usize,
    /// Per-axis bound of a single step. Negative or NaN values are treated as
    /// zero; larger values are capped at [`STEP_LIMIT`].
    pub max_step: f64,
}

impl Default for SampleCfg {
    fn default() -> Self {
        Self {
            handle: Handle::Body,
            start: Point::new(21.0, 150.0),
            steps: 16,
            max_step: 12.0,
        }
    }
}

/// Draw one gesture. Always `steps + 2` events long.
pub fn sample_path(cfg: SampleCfg, seed: u64) -> Vec<PointerEvent> {
    let mut rng = StdRng::seed_from_u64(seed);
    let m = if cfg.max_step > 0.0 {
        cfg.max_step.min(STEP_LIMIT)
    } else {
        0.0
    };
    let mut events = Vec::with_capacity(cfg.steps.saturating_add(2).min(PREALLOC_LIMIT));
    events.push(PointerEvent::Down {
        handle: cfg.handle,
        x: cfg.start.x,
        y: cfg.start.y,
    });
    let mut p = cfg.start;
    for _ in 0..cfg.steps {
        if m > 0.0 {
            p += Point::new(rng.gen_range(-m..=m), rng.gen_range(-m..=m));
        }
        events.push(PointerEvent::Move { x: p.x, y: p.y });
    }
    events.push(PointerEvent::Up);
    events
}
