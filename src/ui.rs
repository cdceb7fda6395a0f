//! Drawing helpers shared by the desktop renderer.
//!
//! `UiFrame` wraps `ratatui::Frame` and clips every draw call to the visible
//! area, so chrome computed from pixel geometry that drifts off screen never
//! writes outside the buffer. `CellScale` is the bridge between the window
//! manager's virtual pixels and terminal cells.
use ratatui::Frame;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::widgets::Widget;

use crate::constants::{DEFAULT_CELL_HEIGHT, DEFAULT_CELL_WIDTH};
use crate::geometry::{Point, Size, WindowRect};

pub struct UiFrame<'a> {
    area: Rect,
    buffer: &'a mut Buffer,
}

impl<'a> UiFrame<'a> {
    pub fn new(frame: &'a mut Frame<'_>) -> Self {
        let area = frame.area();
        let buffer = frame.buffer_mut();
        Self { area, buffer }
    }

    /// Draw straight into a buffer, e.g. one owned by a test backend.
    pub fn from_parts(area: Rect, buffer: &'a mut Buffer) -> Self {
        Self { area, buffer }
    }

    pub fn area(&self) -> Rect {
        self.area
    }

    pub fn buffer_mut(&mut self) -> &mut Buffer {
        self.buffer
    }

    fn clip_rect(&self, rect: Rect) -> Option<Rect> {
        let clipped = rect.intersection(self.area);
        if clipped.width == 0 || clipped.height == 0 {
            None
        } else {
            Some(clipped)
        }
    }

    pub fn render_widget<W>(&mut self, widget: W, area: Rect)
    where
        W: Widget,
    {
        if let Some(clipped) = self.clip_rect(area) {
            widget.render(clipped, self.buffer);
        }
    }

    /// Paints `rect` with blanks in `style`.
    pub fn fill(&mut self, rect: Rect, style: Style) {
        let Some(clipped) = self.clip_rect(rect) else {
            return;
        };
        for y in clipped.y..clipped.y.saturating_add(clipped.height) {
            for x in clipped.x..clipped.x.saturating_add(clipped.width) {
                if let Some(cell) = self.buffer.cell_mut((x, y)) {
                    cell.reset();
                    cell.set_symbol(" ");
                    cell.set_style(style);
                }
            }
        }
    }

    /// Writes `text` starting at `(x, y)`, truncated at the right edge of
    /// `bounds` and of the frame.
    pub fn text(&mut self, bounds: Rect, x: u16, y: u16, text: &str, style: Style) {
        let Some(clipped) = self.clip_rect(bounds) else {
            return;
        };
        safe_set_string(self.buffer, clipped, x, y, text, style);
    }
}

pub(crate) fn safe_set_string(
    buffer: &mut Buffer,
    bounds: Rect,
    x: u16,
    y: u16,
    text: &str,
    style: Style,
) {
    if bounds.width == 0 || bounds.height == 0 {
        return;
    }
    let max_x = bounds.x.saturating_add(bounds.width);
    let max_y = bounds.y.saturating_add(bounds.height);
    if x < bounds.x || x >= max_x || y < bounds.y || y >= max_y {
        return;
    }
    let available = max_x.saturating_sub(x);
    if available == 0 {
        return;
    }
    let text = truncate_to_width(text, available as usize);
    buffer.set_stringn(x, y, text, available as usize, style);
}

pub(crate) fn truncate_to_width(value: &str, width: usize) -> String {
    if value.chars().count() <= width {
        return value.to_string();
    }
    value.chars().take(width).collect()
}

/// How many virtual pixels one terminal cell covers. Both extents are at
/// least one pixel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellScale {
    cell_width_px: i32,
    cell_height_px: i32,
}

impl Default for CellScale {
    fn default() -> Self {
        Self {
            cell_width_px: DEFAULT_CELL_WIDTH,
            cell_height_px: DEFAULT_CELL_HEIGHT,
        }
    }
}

impl CellScale {
    /// Zero or negative extents fall back to one pixel per cell.
    pub fn new(cell_width_px: i32, cell_height_px: i32) -> Self {
        Self {
            cell_width_px: cell_width_px.max(1),
            cell_height_px: cell_height_px.max(1),
        }
    }

    pub fn cell_width_px(&self) -> i32 {
        self.cell_width_px
    }

    pub fn cell_height_px(&self) -> i32 {
        self.cell_height_px
    }

    /// Top-left pixel of a cell.
    pub fn to_px(&self, col: u16, row: u16) -> Point {
        Point::new(
            i32::from(col) * self.cell_width_px,
            i32::from(row) * self.cell_height_px,
        )
    }

    /// The cell whose area contains `point`.
    pub fn cell_at(&self, point: Point) -> (i32, i32) {
        (
            point.x.div_euclid(self.cell_width_px),
            point.y.div_euclid(self.cell_height_px),
        )
    }

    pub fn viewport_px(&self, cols: u16, rows: u16) -> Size {
        Size::new(
            i32::from(cols) * self.cell_width_px,
            i32::from(rows) * self.cell_height_px,
        )
    }

    /// The cells whose top-left pixel lies inside `rect`, clipped to the
    /// non-negative quadrant.
    ///
    /// Pointer events are sampled at the same top-left pixel, so a cell is
    /// drawn as part of a region exactly when a click on it would hit that
    /// region.
    pub fn to_cells(&self, rect: WindowRect) -> Rect {
        let x0 = ceil_div(rect.x, self.cell_width_px).max(0);
        let y0 = ceil_div(rect.y, self.cell_height_px).max(0);
        let x1 = ceil_div(rect.right(), self.cell_width_px).max(0);
        let y1 = ceil_div(rect.bottom(), self.cell_height_px).max(0);
        Rect::new(
            to_u16(x0),
            to_u16(y0),
            to_u16(x1 - x0.min(x1)),
            to_u16(y1 - y0.min(y1)),
        )
    }
}

fn ceil_div(value: i32, divisor: i32) -> i32 {
    -(-value).div_euclid(divisor)
}

fn to_u16(value: i32) -> u16 {
    u16::try_from(value.clamp(0, i32::from(u16::MAX))).unwrap_or(u16::MAX)
}
