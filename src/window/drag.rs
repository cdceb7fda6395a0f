//! Title-bar dragging.
//!
//! `Idle -> Dragging` on a title-bar press of a floating window, one clamped
//! position write per pointer move, back to `Idle` on release.

use super::AppId;
use super::session::InteractionSession;
use super::state::WindowManagerState;
use crate::geometry::{Point, clamp_position};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DragSession {
    pub app: AppId,
    /// Pointer position relative to the window's top-left corner at press.
    pub offset: Point,
}

impl DragSession {
    /// Unclamped top-left corner that keeps the grab offset under `pointer`.
    pub fn target(&self, pointer: Point) -> Point {
        pointer.offset_from(self.offset)
    }
}

/// Starts a drag. Maximized windows do not move, so no session starts and
/// `false` is returned.
pub fn begin(state: &mut WindowManagerState, app: AppId, pointer: Point) -> bool {
    let Some(window) = state.registry.get(app) else {
        return false;
    };
    if window.maximized() {
        return false;
    }
    let offset = pointer.offset_from(window.position());
    state.bring_to_front(app);
    state.session = InteractionSession::Dragging(DragSession { app, offset });
    tracing::debug!(%app, offset_x = offset.x, offset_y = offset.y, "drag started");
    true
}

pub fn update(state: &mut WindowManagerState, drag: DragSession, pointer: Point) {
    let Some(window) = state.registry.get(drag.app) else {
        return;
    };
    let position = clamp_position(
        drag.target(pointer),
        window.size(),
        state.viewport,
        state.reserved,
    );
    state.registry.set_position(drag.app, position);
}
