//! Shared crate-wide constants.
//!
//! Geometry values are in virtual pixels. The terminal host converts them to
//! cells through [`crate::ui::CellScale`].

use std::time::Duration;

/// Smallest width a window can be resized to.
pub const MIN_WINDOW_WIDTH: i32 = 320;

/// Smallest height a window can be resized to.
pub const MIN_WINDOW_HEIGHT: i32 = 220;

/// Width of the dock strip on the left edge (dock plus its gutter).
pub const DOCK_RESERVED_WIDTH: i32 = 64 + 24;

/// Height of the top bar; windows may not be dragged above it.
pub const TOP_BAR_HEIGHT: i32 = 52;

/// Gap kept between a dragged window and the right/bottom viewport edges.
pub const EDGE_MARGIN: i32 = 12;

/// Stacking index the first window receives is one above this value, so
/// windows always render over the static desktop chrome.
pub const Z_INDEX_BASE: u32 = 60;

/// Height of a window's title bar.
pub const TITLE_BAR_HEIGHT: i32 = 32;

/// Width of each title-bar control dot (close, minimize, maximize).
pub const TITLE_CONTROL_WIDTH: i32 = 12;

/// Horizontal offset of the first control dot inside the title bar.
pub const TITLE_CONTROL_INSET: i32 = 16;

/// Distance between the left edges of adjacent control dots.
pub const TITLE_CONTROL_STRIDE: i32 = 20;

/// Edge length of the square resize grip in the bottom-right corner.
pub const RESIZE_HANDLE_SIZE: i32 = 16;

/// Delay before the terminal's input line grabs keyboard focus after the
/// terminal window is opened.
pub const TERMINAL_FOCUS_DELAY: Duration = Duration::from_millis(50);

/// How long a toast notice stays on screen.
pub const TOAST_DURATION: Duration = Duration::from_millis(1400);

/// How often the top-bar clock label is recomputed.
pub const CLOCK_REFRESH: Duration = Duration::from_secs(10);

/// Size the context menu is assumed to occupy when clamping its origin.
pub const CONTEXT_MENU_WIDTH: i32 = 220;
pub const CONTEXT_MENU_HEIGHT: i32 = 180;

/// Default virtual-pixel size of one terminal cell.
pub const DEFAULT_CELL_WIDTH: i32 = 8;
pub const DEFAULT_CELL_HEIGHT: i32 = 16;
