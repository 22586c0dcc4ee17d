use super::{CompassState, TransformDescriptor};

/// Build the renderer's descriptor from the current state. A zero offset
/// produces no translate, so the renderer never emits a no-op.
pub fn compose_transform(state: &CompassState) -> TransformDescriptor {
    let offset = state.translation_offset();
    let translate = if offset.x == 0.0 && offset.y == 0.0 {
        None
    } else {
        Some(offset)
    };
    TransformDescriptor {
        translate,
        rotate_deg: state.rotation_deg(),
        rotate_center: state.cfg().pivot,
    }
}
