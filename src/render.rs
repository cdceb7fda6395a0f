//! Paints a [`Desktop`] into a terminal frame, back to front: wallpaper,
//! top bar, dock, windows by z-order, context menu, toast.

use std::time::Instant;

use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::widgets::{Paragraph, Wrap};

use crate::apps::files::{FilesLayout, NEW_FILE_LABEL, SIDEBAR, SORT_LABEL};
use crate::apps::terminal::{PROMPT, TermLine};
use crate::apps::{browser, neofetch, settings};
use crate::desktop::context_menu::MenuItem;
use crate::desktop::{Desktop, dock, top_bar};
use crate::geometry::WindowRect;
use crate::theme::{self, Theme};
use crate::ui::UiFrame;
use crate::window::AppId;
use crate::window::decorator::{DesktopDecorator, WindowChrome, WindowDecorator};

pub fn draw(frame: &mut UiFrame<'_>, desktop: &Desktop, now: Instant) {
    let theme = desktop.settings().theme();
    let area = frame.area();
    frame.fill(area, theme.desktop());

    draw_top_bar(frame, desktop);
    draw_dock(frame, desktop, &theme);
    draw_windows(frame, desktop, &theme, now);
    draw_context_menu(frame, desktop, &theme);
    draw_toast(frame, desktop, now);
}

fn draw_top_bar(frame: &mut UiFrame<'_>, desktop: &Desktop) {
    let scale = desktop.scale();
    let viewport = desktop.viewport();
    let bar = scale.to_cells(WindowRect::new(
        0,
        0,
        viewport.width,
        desktop.reserved().top_bar_height,
    ));
    frame.fill(bar, theme::panel());
    if bar.height == 0 {
        return;
    }
    frame.text(bar, bar.x, bar.y, top_bar::LAUNCHER_LABEL, theme::panel());

    let clock = desktop.clock_label();
    let len = clock.chars().count() as u16;
    let x = bar.right().saturating_sub(len.saturating_add(1));
    frame.text(bar, x, bar.y, clock, theme::panel());
}

fn draw_dock(frame: &mut UiFrame<'_>, desktop: &Desktop, theme: &Theme) {
    let scale = desktop.scale();
    let reserved = desktop.reserved();
    let viewport = desktop.viewport();
    let strip = scale.to_cells(WindowRect::new(
        0,
        reserved.top_bar_height,
        reserved.dock_width,
        viewport.height - reserved.top_bar_height,
    ));
    frame.fill(strip, theme::panel_muted());

    for (app, rect) in dock::launchers(reserved) {
        let cells = scale.to_cells(rect);
        if cells.height == 0 {
            continue;
        }
        let running = desktop.wm().window(app).is_some_and(|w| w.visible());
        let style = if running {
            theme.highlight()
        } else {
            theme::panel()
        };
        frame.fill(cells, style);
        frame.text(cells, cells.x, cells.y, app.title(), style);
    }
}

fn draw_windows(frame: &mut UiFrame<'_>, desktop: &Desktop, theme: &Theme, now: Instant) {
    let decorator = DesktopDecorator;
    let scale = desktop.scale();
    let workspace = desktop.wm().workspace();
    let focused = desktop.wm().topmost_visible();
    let files_hint = desktop.files().hint();

    for window in desktop.wm().windows_by_z() {
        if !window.visible() {
            continue;
        }
        let app = window.id();
        let chrome = WindowChrome {
            frame: window.frame(workspace),
            maximized: window.maximized(),
            title: app.title(),
            hint: (app == AppId::Files).then_some(files_hint.as_str()),
            focused: focused == Some(app),
        };
        let body = decorator.render_window(frame, scale, theme, &chrome);
        if body.width == 0 || body.height == 0 {
            continue;
        }
        match app {
            AppId::Terminal => draw_terminal(frame, desktop, theme, body),
            AppId::Files => draw_files(frame, desktop, theme, body),
            AppId::Settings => draw_settings(frame, desktop, theme, body),
            AppId::Neofetch => {
                let lines = neofetch::art(desktop.uptime(now));
                draw_lines(frame, body, lines.iter().map(String::as_str), theme.prompt());
            }
            AppId::Firefox => {
                let address = format!(" {} ", browser::ADDRESS);
                frame.text(body, body.x, body.y, &address, theme::window_body_muted());
                let page = Rect {
                    x: body.x.saturating_add(1),
                    y: body.y.saturating_add(2),
                    width: body.width.saturating_sub(2),
                    height: body.height.saturating_sub(2),
                };
                let text = Paragraph::new(browser::PAGE)
                    .style(theme::window_body())
                    .wrap(Wrap { trim: false });
                frame.render_widget(text, page);
            }
        }
    }
}

fn draw_lines<'a>(
    frame: &mut UiFrame<'_>,
    area: Rect,
    lines: impl Iterator<Item = &'a str>,
    style: Style,
) {
    for (y, line) in (area.y..area.bottom()).zip(lines) {
        frame.text(area, area.x.saturating_add(1), y, line, style);
    }
}

fn draw_terminal(frame: &mut UiFrame<'_>, desktop: &Desktop, theme: &Theme, body: Rect) {
    let terminal = desktop.terminal();
    let input_row = body.bottom().saturating_sub(1);
    let history_rows = usize::from(body.height.saturating_sub(1));
    let lines = terminal.lines();
    let visible = &lines[lines.len().saturating_sub(history_rows)..];
    let x = body.x.saturating_add(1);

    for (y, line) in (body.y..input_row).zip(visible) {
        match line {
            TermLine::Command(cmd) => {
                frame.text(body, x, y, PROMPT, theme.prompt());
                let after = x.saturating_add(PROMPT.len() as u16 + 1);
                frame.text(body, after, y, cmd, theme::window_body());
            }
            TermLine::Output(text) => frame.text(body, x, y, text, theme::window_body()),
        }
    }

    frame.text(body, x, input_row, PROMPT, theme.prompt());
    let input_x = x.saturating_add(PROMPT.len() as u16 + 1);
    frame.text(body, input_x, input_row, terminal.input(), theme::window_body());
    if desktop.terminal_has_input_focus() {
        let cursor_x = input_x.saturating_add(terminal.input().chars().count() as u16);
        frame.text(body, cursor_x, input_row, "█", theme.prompt());
    }
}

fn draw_files(frame: &mut UiFrame<'_>, desktop: &Desktop, theme: &Theme, body: Rect) {
    let files = desktop.files();
    let layout = FilesLayout::new(body);
    let toolbar = layout.toolbar;
    frame.fill(toolbar, theme::window_body_muted());
    frame.text(
        toolbar,
        layout.new_file_button.x,
        toolbar.y,
        NEW_FILE_LABEL,
        theme.prompt(),
    );
    frame.text(
        toolbar,
        layout.sort_button.x,
        toolbar.y,
        SORT_LABEL,
        theme.prompt(),
    );

    let active = files.sidebar_active();
    for (y, (key, label)) in (layout.sidebar.y..layout.sidebar.bottom()).zip(SIDEBAR) {
        let style = if active == Some(key) {
            theme.highlight()
        } else {
            theme::window_body_muted()
        };
        frame.text(layout.sidebar, layout.sidebar.x.saturating_add(1), y, label, style);
    }

    for (y, entry) in (layout.grid.y..layout.grid.bottom()).zip(files.entries()) {
        let line = format!("{} {}", entry.icon, entry.name);
        frame.text(layout.grid, layout.grid.x, y, &line, theme::window_body());
    }
}

fn draw_settings(frame: &mut UiFrame<'_>, desktop: &Desktop, theme: &Theme, body: Rect) {
    let current = desktop.settings();
    let x = body.x.saturating_add(1);
    frame.text(body, x, body.y, "Appearance", theme.prompt());

    let first = body.y.saturating_add(settings::FIRST_ROW_OFFSET);
    for (y, row) in (first..body.bottom()).zip(settings::ROWS) {
        let selected = match row {
            settings::SettingsRow::Wallpaper(n) => current.wallpaper() == n,
            settings::SettingsRow::Accent => current.accent_alt(),
        };
        let style = if selected {
            theme.highlight()
        } else {
            theme::window_body()
        };
        frame.text(body, x, y, &settings::row_label(row), style);
    }
}

fn draw_context_menu(frame: &mut UiFrame<'_>, desktop: &Desktop, theme: &Theme) {
    let menu = desktop.context_menu();
    let Some(rect) = menu.rect() else {
        return;
    };
    let scale = desktop.scale();
    let cells = scale.to_cells(rect);
    frame.fill(cells, theme::menu());
    for item in MenuItem::ALL {
        let Some(item_rect) = menu.item_rect(item) else {
            continue;
        };
        let row = scale.to_cells(item_rect);
        if row.height == 0 {
            continue;
        }
        let style = if item == MenuItem::ChangeWallpaper {
            theme::menu().fg(theme.accent())
        } else {
            theme::menu()
        };
        frame.text(cells, cells.x.saturating_add(1), row.y, item.label(), style);
    }
}

fn draw_toast(frame: &mut UiFrame<'_>, desktop: &Desktop, now: Instant) {
    let Some(message) = desktop.toast(now) else {
        return;
    };
    let area = frame.area();
    let top = desktop
        .scale()
        .to_cells(WindowRect::new(0, 0, 1, desktop.reserved().top_bar_height))
        .bottom();
    let text = format!(" {message} ");
    let width = (text.chars().count() as u16).min(area.width);
    let rect = Rect::new(
        area.x + area.width.saturating_sub(width) / 2,
        top.saturating_add(1),
        width,
        1,
    );
    frame.fill(rect, theme::toast());
    frame.text(rect, rect.x, rect.y, &text, theme::toast());
}
