//! Bottom-right grip resizing.
//!
//! Only the size changes; the top-left corner stays put and no viewport cap
//! applies, so a window may grow past the visible area.

use super::AppId;
use super::session::InteractionSession;
use super::state::WindowManagerState;
use crate::geometry::{Point, Size, clamp_size};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResizeSession {
    pub app: AppId,
    pub start: Point,
    pub start_size: Size,
}

impl ResizeSession {
    pub fn size_at(&self, pointer: Point) -> Size {
        let delta = pointer.offset_from(self.start);
        clamp_size(Size {
            width: self.start_size.width + delta.x,
            height: self.start_size.height + delta.y,
        })
    }
}

/// Starts a resize. Maximized windows are not resizable.
pub fn begin(state: &mut WindowManagerState, app: AppId, pointer: Point) -> bool {
    let Some(window) = state.registry.get(app) else {
        return false;
    };
    if window.maximized() {
        return false;
    }
    let start_size = window.size();
    state.bring_to_front(app);
    state.session = InteractionSession::Resizing(ResizeSession {
        app,
        start: pointer,
        start_size,
    });
    tracing::debug!(
        %app,
        width = start_size.width,
        height = start_size.height,
        "resize started"
    );
    true
}

pub fn update(state: &mut WindowManagerState, resize: ResizeSession, pointer: Point) {
    state
        .registry
        .set_size(resize.app, resize.size_at(pointer));
}
