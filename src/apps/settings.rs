use ratatui::layout::{Position, Rect};

use crate::theme::{Theme, WALLPAPER_COUNT};

/// Wallpaper and accent choices. Every change returns the notice to toast.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Settings {
    theme: Theme,
}

impl Settings {
    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn wallpaper(&self) -> u8 {
        self.theme.wallpaper
    }

    pub fn accent_alt(&self) -> bool {
        self.theme.accent_alt
    }

    /// Selects wallpaper `n`, clamped to the available range.
    pub fn set_wallpaper(&mut self, n: u8) -> String {
        let n = n.clamp(1, WALLPAPER_COUNT);
        self.theme.wallpaper = n;
        format!("Wallpaper {n}")
    }

    /// Advances 1 -> 2 -> 3 -> 1.
    pub fn cycle_wallpaper(&mut self) -> String {
        self.set_wallpaper(self.theme.wallpaper % WALLPAPER_COUNT + 1)
    }

    pub fn toggle_accent(&mut self) -> String {
        self.theme.accent_alt = !self.theme.accent_alt;
        "Accent toggled".to_string()
    }
}

/// Rows of the settings window body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingsRow {
    Wallpaper(u8),
    Accent,
}

pub const ROWS: [SettingsRow; 4] = [
    SettingsRow::Wallpaper(1),
    SettingsRow::Wallpaper(2),
    SettingsRow::Wallpaper(3),
    SettingsRow::Accent,
];

/// First body row holding a button; the row above is a heading.
pub const FIRST_ROW_OFFSET: u16 = 2;

pub fn row_label(row: SettingsRow) -> String {
    match row {
        SettingsRow::Wallpaper(n) => format!("[ Wallpaper {n} ]"),
        SettingsRow::Accent => "[ Toggle accent ]".to_string(),
    }
}

pub fn row_at(body: Rect, col: u16, row: u16) -> Option<SettingsRow> {
    if !body.contains(Position::new(col, row)) {
        return None;
    }
    let index = row.checked_sub(body.y.saturating_add(FIRST_ROW_OFFSET))?;
    ROWS.get(usize::from(index)).copied()
}
