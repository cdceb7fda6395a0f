use ratatui::layout::Rect;

use super::hit_test::{TitleControl, body_rect, control_rect, resize_handle_rect, title_bar_rect};
use crate::geometry::WindowRect;
use crate::theme::{self, Theme};
use crate::ui::{CellScale, UiFrame};

/// Everything needed to draw one window's chrome.
#[derive(Debug, Clone, Copy)]
pub struct WindowChrome<'a> {
    pub frame: WindowRect,
    pub maximized: bool,
    pub title: &'a str,
    pub hint: Option<&'a str>,
    pub focused: bool,
}

pub trait WindowDecorator: std::fmt::Debug {
    /// Draws the window and returns the body area, in cells, left for the
    /// application.
    fn render_window(
        &self,
        frame: &mut UiFrame<'_>,
        scale: CellScale,
        theme: &Theme,
        chrome: &WindowChrome<'_>,
    ) -> Rect;
}

/// Title bar with traffic-light controls on the left, centered title, a
/// right-aligned hint, and a grip in the bottom-right corner.
#[derive(Debug, Default)]
pub struct DesktopDecorator;

impl WindowDecorator for DesktopDecorator {
    fn render_window(
        &self,
        frame: &mut UiFrame<'_>,
        scale: CellScale,
        theme: &Theme,
        chrome: &WindowChrome<'_>,
    ) -> Rect {
        let outer = scale.to_cells(chrome.frame);
        frame.fill(outer, theme::window_body());

        let header = scale.to_cells(title_bar_rect(chrome.frame));
        let header_style = theme.title_bar(chrome.focused);
        frame.fill(header, header_style);
        // Controls and labels share the first title-bar row.
        let label_row = header.y;

        let mut controls_end = header.x;
        for (slot, control) in TitleControl::ALL.into_iter().enumerate() {
            let cells = scale.to_cells(control_rect(chrome.frame, control));
            if cells.width == 0 {
                continue;
            }
            let dot = header_style.fg(theme::control_dot(slot));
            frame.text(header, cells.x, label_row, "●", dot);
            controls_end = controls_end.max(cells.right());
        }

        let mut hint_start = header.right();
        if let Some(hint) = chrome.hint {
            let len = hint.chars().count() as u16;
            hint_start = header.right().saturating_sub(len.saturating_add(1));
            if hint_start > controls_end {
                frame.text(header, hint_start, label_row, hint, header_style);
            } else {
                hint_start = header.right();
            }
        }

        let title_len = chrome.title.chars().count() as u16;
        let free_start = controls_end.saturating_add(1);
        let free = hint_start.saturating_sub(free_start);
        if title_len <= free {
            let centered = header.x + header.width.saturating_sub(title_len) / 2;
            let x = centered.clamp(free_start, hint_start.saturating_sub(title_len));
            frame.text(header, x, label_row, chrome.title, header_style);
        }

        if !chrome.maximized {
            let grip = scale.to_cells(resize_handle_rect(chrome.frame));
            if grip.width > 0 && grip.height > 0 {
                let x = grip.right().saturating_sub(1);
                let y = grip.bottom().saturating_sub(1);
                frame.text(outer, x, y, "◢", theme::resize_grip());
            }
        }

        scale.to_cells(body_rect(chrome.frame))
    }
}
