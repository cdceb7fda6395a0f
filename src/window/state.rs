use super::AppId;
use super::registry::WindowRegistry;
use super::session::InteractionSession;
use super::z_order::ZOrder;
use crate::geometry::{self, Reserved, Size, WindowRect};

/// Everything the window manager mutates, held in one place and handed by
/// reference to the drag and resize controllers.
#[derive(Debug, Clone)]
pub struct WindowManagerState {
    pub(crate) registry: WindowRegistry,
    pub(crate) z_order: ZOrder,
    pub(crate) session: InteractionSession,
    pub(crate) viewport: Size,
    pub(crate) reserved: Reserved,
}

impl WindowManagerState {
    pub fn new(viewport: Size, reserved: Reserved) -> Self {
        let mut state = Self {
            registry: WindowRegistry::new(),
            z_order: ZOrder::default(),
            session: InteractionSession::Idle,
            viewport,
            reserved,
        };
        // Seed unique stacking indices in declaration order.
        for app in AppId::ALL {
            state.bring_to_front(app);
        }
        state
    }

    pub fn registry(&self) -> &WindowRegistry {
        &self.registry
    }

    pub fn session(&self) -> InteractionSession {
        self.session
    }

    pub fn viewport(&self) -> Size {
        self.viewport
    }

    pub fn reserved(&self) -> Reserved {
        self.reserved
    }

    pub fn workspace(&self) -> WindowRect {
        geometry::workspace(self.viewport, self.reserved)
    }

    pub fn bring_to_front(&mut self, app: AppId) -> u32 {
        self.z_order.bring_to_front(&mut self.registry, app)
    }

    /// Pulls a floating window back inside the current viewport bounds.
    pub(crate) fn reclamp(&mut self, app: AppId) {
        let Some(window) = self.registry.get(app) else {
            return;
        };
        if window.maximized() {
            return;
        }
        let clamped = geometry::clamp_position(
            window.position(),
            window.size(),
            self.viewport,
            self.reserved,
        );
        if clamped != window.position() {
            self.registry.set_position(app, clamped);
        }
    }
}
