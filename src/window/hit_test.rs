//! Resolves a pointer position to a window and the part of it under the
//! pointer. Works purely on registry state and chrome metrics, so the same
//! answer comes back regardless of how the desktop is drawn.

use super::AppId;
use super::registry::WindowRegistry;
use crate::constants::{
    RESIZE_HANDLE_SIZE, TITLE_BAR_HEIGHT, TITLE_CONTROL_INSET, TITLE_CONTROL_STRIDE,
    TITLE_CONTROL_WIDTH,
};
use crate::geometry::{Point, WindowRect};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TitleControl {
    Close,
    Minimize,
    Maximize,
}

impl TitleControl {
    pub const ALL: [TitleControl; 3] = [
        TitleControl::Close,
        TitleControl::Minimize,
        TitleControl::Maximize,
    ];

    fn slot(self) -> i32 {
        match self {
            TitleControl::Close => 0,
            TitleControl::Minimize => 1,
            TitleControl::Maximize => 2,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitRegion {
    Control(TitleControl),
    TitleBar,
    ResizeHandle,
    Body,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hit {
    pub app: AppId,
    pub region: HitRegion,
}

pub fn title_bar_rect(frame: WindowRect) -> WindowRect {
    WindowRect::new(
        frame.x,
        frame.y,
        frame.width,
        TITLE_BAR_HEIGHT.min(frame.height),
    )
}

pub fn control_rect(frame: WindowRect, control: TitleControl) -> WindowRect {
    let bar = title_bar_rect(frame);
    WindowRect::new(
        bar.x + TITLE_CONTROL_INSET + control.slot() * TITLE_CONTROL_STRIDE,
        bar.y,
        TITLE_CONTROL_WIDTH,
        bar.height,
    )
}

pub fn resize_handle_rect(frame: WindowRect) -> WindowRect {
    WindowRect::new(
        frame.right() - RESIZE_HANDLE_SIZE,
        frame.bottom() - RESIZE_HANDLE_SIZE,
        RESIZE_HANDLE_SIZE,
        RESIZE_HANDLE_SIZE,
    )
}

/// Content area below the title bar.
pub fn body_rect(frame: WindowRect) -> WindowRect {
    let bar = title_bar_rect(frame);
    WindowRect::new(
        frame.x,
        frame.y + bar.height,
        frame.width,
        (frame.height - bar.height).max(0),
    )
}

/// Classifies `point` against a single window frame. Maximized windows
/// expose no resize handle.
pub fn region_in_frame(frame: WindowRect, maximized: bool, point: Point) -> Option<HitRegion> {
    if !frame.contains(point) {
        return None;
    }
    if let Some(control) = TitleControl::ALL
        .into_iter()
        .find(|c| control_rect(frame, *c).contains(point))
    {
        return Some(HitRegion::Control(control));
    }
    if title_bar_rect(frame).contains(point) {
        return Some(HitRegion::TitleBar);
    }
    if !maximized && resize_handle_rect(frame).contains(point) {
        return Some(HitRegion::ResizeHandle);
    }
    Some(HitRegion::Body)
}

/// Finds the topmost visible window under `point`.
pub fn hit_test(registry: &WindowRegistry, point: Point, workspace: WindowRect) -> Option<Hit> {
    registry
        .by_z()
        .into_iter()
        .rev()
        .filter(|w| w.visible())
        .find_map(|w| {
            region_in_frame(w.frame(workspace), w.maximized(), point).map(|region| Hit {
                app: w.id(),
                region,
            })
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::window::z_order::ZOrder;

    const FRAME: WindowRect = WindowRect::new(100, 100, 400, 300);

    #[test]
    fn classifies_regions_of_a_frame() {
        let r = |x, y| region_in_frame(FRAME, false, Point::new(x, y));
        assert_eq!(r(117, 110), Some(HitRegion::Control(TitleControl::Close)));
        assert_eq!(r(137, 110), Some(HitRegion::Control(TitleControl::Minimize)));
        assert_eq!(r(157, 110), Some(HitRegion::Control(TitleControl::Maximize)));
        assert_eq!(r(300, 110), Some(HitRegion::TitleBar));
        assert_eq!(r(495, 395), Some(HitRegion::ResizeHandle));
        assert_eq!(r(300, 300), Some(HitRegion::Body));
        assert_eq!(r(99, 300), None);
        assert_eq!(r(500, 300), None);
    }

    #[test]
    fn control_dots_sit_at_fixed_offsets() {
        let spans: Vec<(i32, i32)> = TitleControl::ALL
            .into_iter()
            .map(|c| control_rect(FRAME, c))
            .map(|rect| (rect.x - FRAME.x, rect.width))
            .collect();
        assert_eq!(spans, vec![(16, 12), (36, 12), (56, 12)]);

        let r = |x| region_in_frame(FRAME, false, Point::new(x, 110));
        assert_eq!(r(115), Some(HitRegion::TitleBar));
        assert_eq!(r(128), Some(HitRegion::TitleBar));
    }

    #[test]
    fn maximized_frame_has_no_resize_handle() {
        assert_eq!(
            region_in_frame(FRAME, true, Point::new(495, 395)),
            Some(HitRegion::Body)
        );
    }

    #[test]
    fn topmost_visible_window_wins() {
        let mut registry = WindowRegistry::new();
        let mut z = ZOrder::default();
        let ws = WindowRect::new(88, 52, 1180, 736);
        for app in [AppId::Files, AppId::Firefox] {
            registry.set_visible(app, true);
            registry.set_position(app, Point::new(200, 200));
            z.bring_to_front(&mut registry, app);
        }
        let point = Point::new(400, 400);
        assert_eq!(hit_test(&registry, point, ws).map(|h| h.app), Some(AppId::Firefox));

        registry.set_visible(AppId::Firefox, false);
        assert_eq!(hit_test(&registry, point, ws).map(|h| h.app), Some(AppId::Files));

        registry.set_visible(AppId::Files, false);
        assert_eq!(hit_test(&registry, point, ws), None);
    }
}
