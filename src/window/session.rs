use super::AppId;
use super::drag::DragSession;
use super::resize::ResizeSession;

/// The single pointer interaction in progress. Dragging and resizing are
/// variants of one value, so both can never be active at once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InteractionSession {
    #[default]
    Idle,
    Dragging(DragSession),
    Resizing(ResizeSession),
}

impl InteractionSession {
    pub fn is_idle(&self) -> bool {
        matches!(self, InteractionSession::Idle)
    }

    /// The window the active session is acting on.
    pub fn app(&self) -> Option<AppId> {
        match self {
            InteractionSession::Idle => None,
            InteractionSession::Dragging(drag) => Some(drag.app),
            InteractionSession::Resizing(resize) => Some(resize.app),
        }
    }
}
