use std::sync::OnceLock;

use ratatui::style::{Color, Modifier, Style};

// Centralized theme colors. RGB values go through `rgb_to_color` so terminals
// without truecolor get the nearest xterm-256 entry.

pub const ACCENT_RGB: (u8, u8, u8) = (0, 199, 255);
pub const ACCENT_ALT_RGB: (u8, u8, u8) = (23, 147, 209);

/// A wallpaper background: its truecolor value and the xterm-256 entry used
/// when truecolor is unavailable. The dark tones round to near-identical
/// grays, so each one names a cube entry of its own hue.
#[derive(Debug, Clone, Copy)]
struct Wallpaper {
    rgb: (u8, u8, u8),
    fallback: u8,
}

const WALLPAPERS: [Wallpaper; 3] = [
    // Navy.
    Wallpaper {
        rgb: (11, 16, 32),
        fallback: 17,
    },
    // Deep green.
    Wallpaper {
        rgb: (14, 30, 26),
        fallback: 22,
    },
    // Plum.
    Wallpaper {
        rgb: (34, 18, 42),
        fallback: 53,
    },
];

pub const WALLPAPER_COUNT: u8 = WALLPAPERS.len() as u8;

/// Look of the desktop as chosen in the settings app.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub wallpaper: u8,
    pub accent_alt: bool,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            wallpaper: 1,
            accent_alt: false,
        }
    }
}

impl Theme {
    pub fn accent(&self) -> Color {
        if self.accent_alt {
            rgb_to_color(ACCENT_ALT_RGB)
        } else {
            rgb_to_color(ACCENT_RGB)
        }
    }

    pub fn wallpaper_bg(&self) -> Color {
        self.wallpaper_color(truecolor())
    }

    fn wallpaper_color(&self, truecolor: bool) -> Color {
        let index = usize::from(self.wallpaper.clamp(1, WALLPAPER_COUNT) - 1);
        let wallpaper = WALLPAPERS[index];
        pick_color(wallpaper.rgb, wallpaper.fallback, truecolor)
    }

    pub fn desktop(&self) -> Style {
        Style::default().bg(self.wallpaper_bg()).fg(Color::Gray)
    }

    pub fn title_bar(&self, focused: bool) -> Style {
        if focused {
            Style::default()
                .bg(self.accent())
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().bg(Color::DarkGray).fg(Color::White)
        }
    }

    pub fn prompt(&self) -> Style {
        Style::default().fg(self.accent())
    }

    pub fn highlight(&self) -> Style {
        Style::default().bg(self.accent()).fg(Color::Black)
    }
}

// Panels: top bar, dock, menus, toast.
pub fn panel() -> Style {
    Style::default().bg(Color::Black).fg(Color::White)
}

pub fn panel_muted() -> Style {
    Style::default().bg(Color::Black).fg(Color::DarkGray)
}

pub fn menu() -> Style {
    Style::default().bg(Color::DarkGray).fg(Color::White)
}

pub fn toast() -> Style {
    Style::default()
        .bg(Color::White)
        .fg(Color::Black)
        .add_modifier(Modifier::BOLD)
}

// Window body.
pub fn window_body() -> Style {
    Style::default()
        .bg(rgb_to_color((24, 26, 33)))
        .fg(Color::White)
}

pub fn window_body_muted() -> Style {
    window_body().fg(Color::Gray)
}

pub fn resize_grip() -> Style {
    window_body().fg(Color::DarkGray)
}

pub fn control_dot(slot: usize) -> Color {
    match slot {
        0 => rgb_to_color((255, 95, 87)),
        1 => rgb_to_color((254, 188, 46)),
        _ => rgb_to_color((40, 200, 64)),
    }
}

pub fn rgb_to_color(rgb: (u8, u8, u8)) -> Color {
    pick_color(rgb, xterm_index(rgb), truecolor())
}

fn pick_color(rgb: (u8, u8, u8), fallback: u8, truecolor: bool) -> Color {
    if truecolor {
        Color::Rgb(rgb.0, rgb.1, rgb.2)
    } else {
        Color::Indexed(fallback)
    }
}

/// Whether the terminal advertised truecolor through `COLORTERM`. Read once
/// per process.
fn truecolor() -> bool {
    static TRUECOLOR: OnceLock<bool> = OnceLock::new();
    *TRUECOLOR.get_or_init(|| colorterm_has_truecolor(std::env::var("COLORTERM").ok().as_deref()))
}

fn colorterm_has_truecolor(value: Option<&str>) -> bool {
    value.is_some_and(|v| {
        let v = v.to_lowercase();
        v.contains("truecolor") || v.contains("24bit")
    })
}

/// Nearest entry of the xterm-256 color cube or gray ramp.
fn xterm_index((r, g, b): (u8, u8, u8)) -> u8 {
    const LEVELS: [u8; 6] = [0, 95, 135, 175, 215, 255];
    let nearest_level = |v: u8| {
        LEVELS
            .iter()
            .enumerate()
            .min_by_key(|(_, level)| (i32::from(**level) - i32::from(v)).abs())
            .map(|(i, _)| i as u8)
            .unwrap_or(0)
    };
    let (ri, gi, bi) = (nearest_level(r), nearest_level(g), nearest_level(b));
    let cube = (
        LEVELS[usize::from(ri)],
        LEVELS[usize::from(gi)],
        LEVELS[usize::from(bi)],
    );

    let avg = (u16::from(r) + u16::from(g) + u16::from(b)) / 3;
    let gray_step = (avg.saturating_sub(8) / 10).min(23) as u8;
    let gray_value = 8 + gray_step * 10;

    if distance((r, g, b), (gray_value, gray_value, gray_value)) < distance((r, g, b), cube) {
        232 + gray_step
    } else {
        16 + 36 * ri + 6 * gi + bi
    }
}

fn distance(a: (u8, u8, u8), b: (u8, u8, u8)) -> u32 {
    let d = |x: u8, y: u8| (i32::from(x) - i32::from(y)).pow(2) as u32;
    d(a.0, b.0) + d(a.1, b.1) + d(a.2, b.2)
}
