use super::{AppId, Window};
use crate::geometry::{Point, Size};

/// Owns every [`Window`]. Mutators trust their callers: geometry arrives
/// already clamped by the drag/resize controllers.
#[derive(Debug, Clone)]
pub struct WindowRegistry {
    windows: Vec<Window>,
}

impl Default for WindowRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl WindowRegistry {
    /// One hidden window per declared application.
    pub fn new() -> Self {
        Self {
            windows: AppId::ALL.into_iter().map(Window::new).collect(),
        }
    }

    pub fn get(&self, id: AppId) -> Option<&Window> {
        self.windows.iter().find(|w| w.id == id)
    }

    fn get_mut(&mut self, id: AppId) -> Option<&mut Window> {
        self.windows.iter_mut().find(|w| w.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Window> {
        self.windows.iter()
    }

    /// Windows sorted back to front.
    pub fn by_z(&self) -> Vec<&Window> {
        let mut sorted: Vec<&Window> = self.windows.iter().collect();
        sorted.sort_by_key(|w| w.z_index);
        sorted
    }

    pub fn set_visible(&mut self, id: AppId, visible: bool) {
        if let Some(window) = self.get_mut(id) {
            window.visible = visible;
        }
    }

    pub fn set_maximized(&mut self, id: AppId, maximized: bool) {
        if let Some(window) = self.get_mut(id) {
            window.maximized = maximized;
        }
    }

    /// Returns `false` when the write was refused (unknown or maximized).
    pub fn set_position(&mut self, id: AppId, position: Point) -> bool {
        match self.get_mut(id) {
            Some(window) if !window.maximized => {
                window.position = position;
                true
            }
            _ => false,
        }
    }

    /// Returns `false` when the write was refused (unknown or maximized).
    pub fn set_size(&mut self, id: AppId, size: Size) -> bool {
        match self.get_mut(id) {
            Some(window) if !window.maximized => {
                window.size = size;
                true
            }
            _ => false,
        }
    }

    pub(crate) fn set_z_index(&mut self, id: AppId, z_index: u32) {
        if let Some(window) = self.get_mut(id) {
            window.z_index = z_index;
        }
    }
}
