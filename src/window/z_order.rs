use super::AppId;
use super::registry::WindowRegistry;
use crate::constants::Z_INDEX_BASE;

/// Monotonic stacking counter. Every raise hands out a fresh value, so the
/// most recently raised window always has the highest index.
///
/// Wraparound is not handled; a session would need billions of raises to
/// reach `u32::MAX`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ZOrder {
    top: u32,
}

impl Default for ZOrder {
    fn default() -> Self {
        Self::new(Z_INDEX_BASE)
    }
}

impl ZOrder {
    pub fn new(base: u32) -> Self {
        Self { top: base }
    }

    pub fn top(&self) -> u32 {
        self.top
    }

    pub fn bring_to_front(&mut self, registry: &mut WindowRegistry, id: AppId) -> u32 {
        self.top = self.top.saturating_add(1);
        registry.set_z_index(id, self.top);
        self.top
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn last_raised_window_is_on_top() {
        let mut registry = WindowRegistry::new();
        let mut z = ZOrder::default();
        let calls = [
            AppId::Settings,
            AppId::Terminal,
            AppId::Neofetch,
            AppId::Files,
            AppId::Firefox,
        ];
        for app in calls {
            z.bring_to_front(&mut registry, app);
        }
        let mut by_desc: Vec<AppId> = registry.by_z().iter().rev().map(|w| w.id()).collect();
        by_desc.truncate(calls.len());
        let expected: Vec<AppId> = calls.iter().rev().copied().collect();
        assert_eq!(by_desc, expected);
    }

    #[test]
    fn indices_start_above_chrome() {
        let mut registry = WindowRegistry::new();
        let mut z = ZOrder::default();
        assert_eq!(z.bring_to_front(&mut registry, AppId::Files), Z_INDEX_BASE + 1);
        assert_eq!(z.bring_to_front(&mut registry, AppId::Files), Z_INDEX_BASE + 2);
        assert_eq!(registry.get(AppId::Files).unwrap().z_index(), Z_INDEX_BASE + 2);
    }
}
