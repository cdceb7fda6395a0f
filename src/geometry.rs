//! Viewport geometry in virtual pixels.
//!
//! Everything here is pure. Positions are clamped per axis against bounds
//! derived from the viewport and the reserved desktop chrome; sizes are
//! floored at the window minimums and never capped.

use crate::constants::{
    DOCK_RESERVED_WIDTH, EDGE_MARGIN, MIN_WINDOW_HEIGHT, MIN_WINDOW_WIDTH, TOP_BAR_HEIGHT,
};
use crate::error::DesktopError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub fn offset_from(self, origin: Point) -> Point {
        Point {
            x: self.x - origin.x,
            y: self.y - origin.y,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Size {
    pub width: i32,
    pub height: i32,
}

impl Size {
    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    /// Builds a size that must have a positive area.
    pub fn try_new(width: i32, height: i32) -> Result<Self, DesktopError> {
        if width <= 0 || height <= 0 {
            return Err(DesktopError::DegenerateGeometry { width, height });
        }
        Ok(Self { width, height })
    }
}

/// Signed rectangle in virtual pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct WindowRect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl WindowRect {
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn from_parts(origin: Point, size: Size) -> Self {
        Self::new(origin.x, origin.y, size.width, size.height)
    }

    pub fn origin(&self) -> Point {
        Point::new(self.x, self.y)
    }

    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    pub fn right(&self) -> i32 {
        self.x + self.width
    }

    pub fn bottom(&self) -> i32 {
        self.y + self.height
    }

    /// Half-open containment: the right and bottom edges are outside.
    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.x && point.x < self.right() && point.y >= self.y && point.y < self.bottom()
    }
}

/// Viewport-edge space windows may not be dragged into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Reserved {
    pub dock_width: i32,
    pub top_bar_height: i32,
    pub margin: i32,
}

impl Default for Reserved {
    fn default() -> Self {
        Self {
            dock_width: DOCK_RESERVED_WIDTH,
            top_bar_height: TOP_BAR_HEIGHT,
            margin: EDGE_MARGIN,
        }
    }
}

/// Legal range for a window's top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PositionBounds {
    pub min_x: i32,
    pub max_x: i32,
    pub min_y: i32,
    pub max_y: i32,
}

impl PositionBounds {
    pub fn compute(window: Size, viewport: Size, reserved: Reserved) -> Self {
        Self {
            min_x: reserved.dock_width,
            max_x: viewport.width - window.width - reserved.margin,
            min_y: reserved.top_bar_height,
            max_y: viewport.height - window.height - reserved.margin,
        }
    }
}

/// Returns the nearest legal top-left corner for `proposed`.
///
/// Axes are clamped independently. When a window is larger than the space
/// between the reserved chrome and the far edge, the far bound wins.
pub fn clamp_position(proposed: Point, window: Size, viewport: Size, reserved: Reserved) -> Point {
    let bounds = PositionBounds::compute(window, viewport, reserved);
    Point {
        x: clamp_axis(proposed.x, bounds.min_x, bounds.max_x),
        y: clamp_axis(proposed.y, bounds.min_y, bounds.max_y),
    }
}

// `i32::clamp` panics when min > max, which happens for oversized windows.
fn clamp_axis(value: i32, min: i32, max: i32) -> i32 {
    value.max(min).min(max)
}

/// Floors a proposed size at the window minimums.
pub fn clamp_size(proposed: Size) -> Size {
    Size {
        width: proposed.width.max(MIN_WINDOW_WIDTH),
        height: proposed.height.max(MIN_WINDOW_HEIGHT),
    }
}

/// Region a maximized window fills: everything right of the dock and below
/// the top bar, less the edge margin.
pub fn workspace(viewport: Size, reserved: Reserved) -> WindowRect {
    let size = clamp_size(Size {
        width: viewport.width - reserved.dock_width - reserved.margin,
        height: viewport.height - reserved.top_bar_height - reserved.margin,
    });
    WindowRect::from_parts(
        Point::new(reserved.dock_width, reserved.top_bar_height),
        size,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    const VIEWPORT: Size = Size::new(1280, 800);
    const WINDOW: Size = Size::new(400, 300);

    #[test]
    fn clamp_position_stays_within_bounds() {
        let reserved = Reserved::default();
        let bounds = PositionBounds::compute(WINDOW, VIEWPORT, reserved);
        for x in (-2000..3000).step_by(137) {
            for y in (-2000..3000).step_by(211) {
                let p = clamp_position(Point::new(x, y), WINDOW, VIEWPORT, reserved);
                assert!(p.x >= bounds.min_x && p.x <= bounds.max_x, "{p:?}");
                assert!(p.y >= bounds.min_y && p.y <= bounds.max_y, "{p:?}");
            }
        }
    }

    #[test]
    fn clamp_position_is_idempotent() {
        let reserved = Reserved::default();
        for (x, y) in [(-50, -50), (100, 100), (5000, 20), (900, 9000), (88, 52)] {
            let once = clamp_position(Point::new(x, y), WINDOW, VIEWPORT, reserved);
            let twice = clamp_position(once, WINDOW, VIEWPORT, reserved);
            assert_eq!(once, twice);
        }
    }

    #[test]
    fn clamp_position_far_bound_wins_for_oversized_window() {
        let reserved = Reserved::default();
        let huge = Size::new(2000, 2000);
        let p = clamp_position(Point::new(500, 500), huge, VIEWPORT, reserved);
        assert_eq!(p.x, 1280 - 2000 - 12);
        assert_eq!(p.y, 800 - 2000 - 12);
        assert_eq!(clamp_position(p, huge, VIEWPORT, reserved), p);
    }

    #[test]
    fn clamp_position_keeps_legal_point() {
        let p = Point::new(300, 200);
        assert_eq!(clamp_position(p, WINDOW, VIEWPORT, Reserved::default()), p);
    }

    #[test]
    fn clamp_size_floors_at_minimums() {
        assert_eq!(clamp_size(Size::new(-200, 10)), Size::new(320, 220));
        assert_eq!(clamp_size(Size::new(321, 5000)), Size::new(321, 5000));
        for w in (-500..800).step_by(53) {
            for h in (-500..800).step_by(47) {
                let s = clamp_size(Size::new(w, h));
                assert!(s.width >= MIN_WINDOW_WIDTH && s.height >= MIN_WINDOW_HEIGHT);
            }
        }
    }

    #[test]
    fn try_new_rejects_empty_sizes() {
        assert!(Size::try_new(0, 10).is_err());
        assert!(Size::try_new(10, -1).is_err());
        assert_eq!(Size::try_new(3, 4).unwrap(), Size::new(3, 4));
    }

    #[test]
    fn workspace_sits_between_chrome_and_margin() {
        let ws = workspace(VIEWPORT, Reserved::default());
        assert_eq!(ws, WindowRect::new(88, 52, 1280 - 88 - 12, 800 - 52 - 12));
    }

    #[test]
    fn rect_contains_is_half_open() {
        let r = WindowRect::new(10, 10, 5, 5);
        assert!(r.contains(Point::new(10, 10)));
        assert!(r.contains(Point::new(14, 14)));
        assert!(!r.contains(Point::new(15, 10)));
        assert!(!r.contains(Point::new(10, 15)));
    }
}
