//! The desktop shell: owns the window manager and the applications, and
//! routes terminal input to them.

pub mod context_menu;
pub mod dock;
pub mod toast;
pub mod top_bar;

use std::time::{Duration, Instant};

use crossterm::event::{Event, KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};

use crate::apps::files::{FilesClick, FilesLayout, SIDEBAR};
use crate::apps::settings::{self, SettingsRow};
use crate::apps::{FileBrowser, PageOpener, Settings, TerminalApp, TerminalEffect, WebBrowserOpener};
use crate::config::DesktopConfig;
use crate::event_loop::ControlFlow;
use crate::geometry::{Point, Reserved, Size};
use crate::keybindings::{Action, KeyBindings};
use crate::ui::CellScale;
use crate::window::hit_test::body_rect;
use crate::window::{
    AppId, DeferredAction, Hit, HitRegion, PointerButton, PointerEvent, PointerKind,
    PointerOutcome, WindowManager,
};
use context_menu::{ContextMenu, MenuItem};
use toast::Toast;
use top_bar::Clock;

pub struct Desktop {
    wm: WindowManager,
    scale: CellScale,
    cells: (u16, u16),
    terminal: TerminalApp,
    files: FileBrowser,
    settings: Settings,
    menu: ContextMenu,
    toast: Toast,
    clock: Clock,
    keys: KeyBindings,
    opener: Box<dyn PageOpener>,
    started: Instant,
}

impl Desktop {
    /// A desktop sized `cols` x `rows` cells with every window hidden.
    pub fn new(config: &DesktopConfig, cols: u16, rows: u16, now: Instant) -> Self {
        let scale = config.scale;
        Self {
            wm: WindowManager::new(scale.viewport_px(cols, rows), config.reserved),
            scale,
            cells: (cols, rows),
            terminal: TerminalApp::new(),
            files: FileBrowser::new(config.files_base.clone()),
            settings: Settings::default(),
            menu: ContextMenu::default(),
            toast: Toast::default(),
            clock: Clock::default(),
            keys: KeyBindings::default(),
            opener: Box::new(WebBrowserOpener),
            started: now,
        }
    }

    pub fn with_opener(mut self, opener: impl PageOpener + 'static) -> Self {
        self.opener = Box::new(opener);
        self
    }

    /// Opens the named applications in order. Unknown names are skipped.
    pub fn open_startup_apps<S: AsRef<str>>(&mut self, apps: &[S], now: Instant) {
        for name in apps {
            if !self.wm.open(name.as_ref(), now) {
                tracing::warn!(app = name.as_ref(), "unknown startup application");
            }
        }
    }

    pub fn open(&mut self, name: &str, now: Instant) -> bool {
        self.wm.open(name, now)
    }

    pub fn wm(&self) -> &WindowManager {
        &self.wm
    }

    pub fn wm_mut(&mut self) -> &mut WindowManager {
        &mut self.wm
    }

    pub fn scale(&self) -> CellScale {
        self.scale
    }

    pub fn reserved(&self) -> Reserved {
        self.wm.state().reserved()
    }

    pub fn viewport(&self) -> Size {
        self.wm.state().viewport()
    }

    pub fn cells(&self) -> (u16, u16) {
        self.cells
    }

    pub fn terminal(&self) -> &TerminalApp {
        &self.terminal
    }

    pub fn files(&self) -> &FileBrowser {
        &self.files
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn context_menu(&self) -> &ContextMenu {
        &self.menu
    }

    pub fn toast(&self, now: Instant) -> Option<&str> {
        self.toast.message(now)
    }

    pub fn clock_label(&self) -> &str {
        self.clock.label()
    }

    pub fn uptime(&self, now: Instant) -> Duration {
        now.saturating_duration_since(self.started)
    }

    pub fn resize(&mut self, cols: u16, rows: u16) {
        self.cells = (cols, rows);
        self.wm.set_viewport(self.scale.viewport_px(cols, rows));
        self.menu.close();
    }

    /// Runs timers: deferred window-manager work, toast expiry, the clock.
    pub fn tick(&mut self, now: Instant) {
        for action in self.wm.take_due(now) {
            match action {
                DeferredAction::FocusTerminalInput => {
                    if self.window_visible(AppId::Terminal) {
                        self.terminal.set_focused(true);
                        tracing::trace!("terminal input focused");
                    }
                }
            }
        }
        self.toast.expire(now);
        self.clock.refresh_if_due(now);
    }

    /// Earliest instant at which [`Desktop::tick`] has something to do.
    pub fn next_deadline(&self) -> Option<Instant> {
        [
            self.wm.next_deadline(),
            self.toast.expires_at(),
            self.clock.next_refresh(),
        ]
        .into_iter()
        .flatten()
        .min()
    }

    pub fn handle_event(&mut self, event: &Event, now: Instant) -> ControlFlow {
        match event {
            Event::Key(key) => return self.handle_key(key, now),
            Event::Mouse(mouse) => {
                if let Some(pointer) = pointer_from_mouse(mouse, self.scale) {
                    self.pointer(pointer, now);
                }
            }
            Event::Resize(cols, rows) => self.resize(*cols, *rows),
            _ => {}
        }
        ControlFlow::Continue
    }

    pub fn handle_key(&mut self, key: &KeyEvent, now: Instant) -> ControlFlow {
        if self.keys.matches(Action::Quit, key) {
            return ControlFlow::Quit;
        }
        if self.terminal_has_input_focus() {
            if key.code == KeyCode::Esc {
                self.terminal.set_focused(false);
            } else if let Some(effect) = self.terminal.handle_key(key, self.uptime(now)) {
                self.apply_terminal_effect(effect, now);
            }
            return ControlFlow::Continue;
        }
        match self.keys.action_for_key(key) {
            Some(Action::CloseMenu) => self.menu.close(),
            Some(Action::CycleFocus) => {
                let raised = self.wm.cycle_focus();
                self.terminal.set_focused(raised == Some(AppId::Terminal));
            }
            Some(Action::Quit) | None => {}
        }
        ControlFlow::Continue
    }

    /// Keys go to the terminal only while its input is focused and its
    /// window is on top.
    pub fn terminal_has_input_focus(&self) -> bool {
        self.terminal.is_focused() && self.wm.topmost_visible() == Some(AppId::Terminal)
    }

    /// Pointer input in viewport pixels.
    pub fn pointer(&mut self, event: PointerEvent, now: Instant) {
        if let PointerKind::Down(button) = event.kind
            && self.menu.is_open()
        {
            if button == PointerButton::Primary
                && let Some(item) = self.menu.item_at(event.position)
            {
                self.menu.close();
                self.run_menu_item(item, now);
                return;
            }
            if self.menu.contains(event.position) {
                return;
            }
            self.menu.close();
        }

        match self.wm.pointer(event) {
            PointerOutcome::Window(hit) => {
                if let PointerKind::Down(button) = event.kind {
                    self.terminal.set_focused(
                        hit.app == AppId::Terminal && hit.region == HitRegion::Body,
                    );
                    if button == PointerButton::Primary && hit.region == HitRegion::Body {
                        self.press_window_body(hit, event.position, now);
                    }
                }
            }
            PointerOutcome::Session(_) => {}
            PointerOutcome::Unhandled => {
                if let PointerKind::Down(button) = event.kind {
                    self.terminal.set_focused(false);
                    self.press_desktop(button, event.position, now);
                }
            }
        }
        if !self.window_visible(AppId::Terminal) {
            self.terminal.set_focused(false);
        }
    }

    fn press_desktop(&mut self, button: PointerButton, position: Point, now: Instant) {
        let reserved = self.reserved();
        let launcher = dock::launcher_at(reserved, position);
        match button {
            PointerButton::Primary => {
                if let Some(app) = launcher {
                    self.wm.open_app(app, now);
                }
            }
            PointerButton::Secondary => {
                let on_chrome = launcher.is_some() || position.y < reserved.top_bar_height;
                if !on_chrome {
                    let origin = self.menu.open_at(position, self.viewport());
                    tracing::debug!(x = origin.x, y = origin.y, "context menu opened");
                }
            }
        }
    }

    fn press_window_body(&mut self, hit: Hit, position: Point, now: Instant) {
        let Some(window) = self.wm.window(hit.app) else {
            return;
        };
        let body = self
            .scale
            .to_cells(body_rect(window.frame(self.wm.workspace())));
        let (col, row) = self.scale.cell_at(position);
        let (Ok(col), Ok(row)) = (u16::try_from(col), u16::try_from(row)) else {
            return;
        };
        match hit.app {
            AppId::Files => {
                let click = FilesLayout::new(body).click(col, row, self.files.entries().len());
                if let Some(click) = click {
                    self.files_click(click, now);
                }
            }
            AppId::Settings => {
                if let Some(row) = settings::row_at(body, col, row) {
                    let notice = match row {
                        SettingsRow::Wallpaper(n) => self.settings.set_wallpaper(n),
                        SettingsRow::Accent => self.settings.toggle_accent(),
                    };
                    self.toast.show(notice, now);
                }
            }
            AppId::Terminal | AppId::Firefox | AppId::Neofetch => {}
        }
    }

    pub fn files_click(&mut self, click: FilesClick, now: Instant) {
        match click {
            FilesClick::NewFile => self.new_file(now),
            FilesClick::Sort => {
                self.files.sort();
                self.toast.show("Sorted", now);
            }
            FilesClick::Sidebar(index) => {
                if let Some((key, _)) = SIDEBAR.get(index) {
                    self.files.select_sidebar(key);
                }
            }
            FilesClick::Entry(index) => {
                if let Err(err) = self.files.activate(index, self.opener.as_ref()) {
                    self.toast.show(err.notice(), now);
                }
            }
        }
    }

    pub fn run_menu_item(&mut self, item: MenuItem, now: Instant) {
        match item {
            MenuItem::NewFile => self.new_file(now),
            MenuItem::Refresh => self.toast.show("Refreshed", now),
            MenuItem::ChangeWallpaper => {
                let notice = self.settings.cycle_wallpaper();
                self.toast.show(notice, now);
            }
        }
    }

    fn new_file(&mut self, now: Instant) {
        let name = self.files.add_placeholder(&mut rand::thread_rng()).name.clone();
        tracing::debug!(%name, folder = self.files.current(), "placeholder file created");
        self.toast.show("Created file", now);
    }

    fn apply_terminal_effect(&mut self, effect: TerminalEffect, now: Instant) {
        match effect {
            TerminalEffect::None => {}
            TerminalEffect::OpenApp(app) => {
                self.wm.open_app(app, now);
                // The new window now sits above the terminal.
                self.terminal.set_focused(false);
            }
        }
    }

    fn window_visible(&self, app: AppId) -> bool {
        self.wm.window(app).is_some_and(|w| w.visible())
    }
}

/// Converts a terminal mouse report into a pixel-space pointer event sampled
/// at the cell's top-left corner. Scrolling and the middle button are
/// ignored.
pub fn pointer_from_mouse(mouse: &MouseEvent, scale: CellScale) -> Option<PointerEvent> {
    let kind = match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => PointerKind::Down(PointerButton::Primary),
        MouseEventKind::Down(MouseButton::Right) => PointerKind::Down(PointerButton::Secondary),
        MouseEventKind::Up(_) => PointerKind::Up,
        MouseEventKind::Drag(_) | MouseEventKind::Moved => PointerKind::Move,
        _ => return None,
    };
    Some(PointerEvent {
        kind,
        position: scale.to_px(mouse.column, mouse.row),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn mouse(kind: MouseEventKind, column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    #[test]
    fn mouse_reports_become_pixel_pointer_events() {
        let scale = CellScale::default();
        assert_eq!(
            pointer_from_mouse(&mouse(MouseEventKind::Down(MouseButton::Left), 3, 2), scale),
            Some(PointerEvent::down(24, 32))
        );
        assert_eq!(
            pointer_from_mouse(&mouse(MouseEventKind::Down(MouseButton::Right), 1, 1), scale),
            Some(PointerEvent::secondary_down(8, 16))
        );
        assert_eq!(
            pointer_from_mouse(&mouse(MouseEventKind::Drag(MouseButton::Left), 0, 0), scale),
            Some(PointerEvent::moved(0, 0))
        );
        assert_eq!(
            pointer_from_mouse(&mouse(MouseEventKind::ScrollUp, 0, 0), scale),
            None
        );
        assert_eq!(
            pointer_from_mouse(&mouse(MouseEventKind::Down(MouseButton::Middle), 0, 0), scale),
            None
        );
    }

    #[test]
    fn next_deadline_tracks_earliest_timer() {
        let now = Instant::now();
        let mut desktop = Desktop::new(&DesktopConfig::default(), 160, 50, now);
        assert_eq!(desktop.next_deadline(), None);
        desktop.open_startup_apps(&["terminal"], now);
        assert_eq!(
            desktop.next_deadline(),
            Some(now + crate::constants::TERMINAL_FOCUS_DELAY)
        );
    }

    #[test]
    fn terminal_input_focuses_on_the_injected_clock() {
        let now = Instant::now();
        let mut desktop = Desktop::new(&DesktopConfig::default(), 160, 50, now);
        desktop.open("terminal", now);

        desktop.tick(now + Duration::from_millis(49));
        assert!(!desktop.terminal_has_input_focus());

        desktop.tick(now + crate::constants::TERMINAL_FOCUS_DELAY);
        assert!(desktop.terminal_has_input_focus());
        assert_eq!(desktop.wm().pending_deferred(), 0);
    }
}
