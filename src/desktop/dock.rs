//! Launcher column in the dock strip.

use crate::geometry::{Point, Reserved, WindowRect};
use crate::window::AppId;

const LAUNCHER_LEFT: i32 = 12;
const LAUNCHER_TOP_GAP: i32 = 12;
const LAUNCHER_HEIGHT: i32 = 32;
const LAUNCHER_STRIDE: i32 = 48;
/// Gutter between the launchers and the first column windows may use.
const DOCK_GUTTER: i32 = 12;

pub fn launcher_rect(reserved: Reserved, index: usize) -> WindowRect {
    WindowRect::new(
        LAUNCHER_LEFT,
        reserved.top_bar_height + LAUNCHER_TOP_GAP + index as i32 * LAUNCHER_STRIDE,
        (reserved.dock_width - LAUNCHER_LEFT - DOCK_GUTTER).max(0),
        LAUNCHER_HEIGHT,
    )
}

pub fn launchers(reserved: Reserved) -> impl Iterator<Item = (AppId, WindowRect)> {
    AppId::ALL
        .into_iter()
        .enumerate()
        .map(move |(index, app)| (app, launcher_rect(reserved, index)))
}

pub fn launcher_at(reserved: Reserved, point: Point) -> Option<AppId> {
    launchers(reserved)
        .find(|(_, rect)| rect.contains(point))
        .map(|(app, _)| app)
}
