use std::cell::RefCell;
use std::io;
use std::rc::Rc;
use std::time::Instant;

use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use pretty_assertions::assert_eq;

use term_desk::apps::PageOpener;
use term_desk::apps::files::{FilesClick, FilesLayout};
use term_desk::apps::settings::FIRST_ROW_OFFSET;
use term_desk::constants::{TERMINAL_FOCUS_DELAY, TOAST_DURATION};
use term_desk::desktop::context_menu::MenuItem;
use term_desk::desktop::dock::launcher_rect;
use term_desk::event_loop::ControlFlow;
use term_desk::window::hit_test::body_rect;
use term_desk::window::{AppId, PointerEvent};
use term_desk::{Desktop, DesktopConfig};

#[derive(Clone, Default)]
struct Recorder(Rc<RefCell<Vec<String>>>);

impl PageOpener for Recorder {
    fn open_page(&self, target: &str) -> io::Result<()> {
        self.0.borrow_mut().push(target.to_string());
        Ok(())
    }
}

struct Blocked;

impl PageOpener for Blocked {
    fn open_page(&self, _target: &str) -> io::Result<()> {
        Err(io::Error::other("blocked by the host"))
    }
}

fn desktop() -> Desktop {
    Desktop::new(&DesktopConfig::default(), 160, 50, Instant::now()).with_opener(Recorder::default())
}

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

fn type_line(desktop: &mut Desktop, line: &str) {
    for c in line.chars() {
        desktop.handle_key(&key(KeyCode::Char(c)), Instant::now());
    }
    desktop.handle_key(&key(KeyCode::Enter), Instant::now());
}

/// Presses the top-left pixel of body cell (`dx`, `dy`) of `app`.
fn press_body(desktop: &mut Desktop, app: AppId, dx: u16, dy: u16) {
    let body = body_cells(desktop, app);
    let point = desktop.scale().to_px(body.x + dx, body.y + dy);
    desktop.pointer(PointerEvent::down(point.x, point.y), Instant::now());
    desktop.pointer(PointerEvent::up(point.x, point.y), Instant::now());
}

fn body_cells(desktop: &Desktop, app: AppId) -> ratatui::layout::Rect {
    let window = desktop.wm().window(app).unwrap();
    let frame = window.frame(desktop.wm().workspace());
    desktop.scale().to_cells(body_rect(frame))
}

fn focus_terminal(desktop: &mut Desktop) {
    let now = Instant::now();
    desktop.open("terminal", now);
    desktop.tick(now + TERMINAL_FOCUS_DELAY);
    assert!(desktop.terminal_has_input_focus());
}

#[test]
fn dock_launcher_opens_and_raises_app() {
    let mut desktop = desktop();
    desktop.open("terminal", Instant::now());
    let rect = launcher_rect(desktop.reserved(), 1);
    desktop.pointer(PointerEvent::down(rect.x + 4, rect.y + 4), Instant::now());

    assert!(desktop.wm().window(AppId::Files).unwrap().visible());
    assert_eq!(desktop.wm().topmost_visible(), Some(AppId::Files));
}

#[test]
fn context_menu_opens_only_on_bare_desktop() {
    let mut desktop = desktop();
    let now = Instant::now();

    desktop.pointer(PointerEvent::secondary_down(600, 20), now);
    assert!(!desktop.context_menu().is_open());
    let launcher = launcher_rect(desktop.reserved(), 0);
    desktop.pointer(PointerEvent::secondary_down(launcher.x + 2, launcher.y + 2), now);
    assert!(!desktop.context_menu().is_open());

    desktop.pointer(PointerEvent::secondary_down(1270, 790), now);
    let rect = desktop.context_menu().rect().unwrap();
    assert_eq!((rect.x, rect.y), (1280 - 220, 800 - 180));

    desktop.pointer(PointerEvent::down(300, 300), now);
    assert!(!desktop.context_menu().is_open());
    assert_eq!(desktop.toast(now), None);
}

#[test]
fn context_menu_items_run_and_close_menu() {
    let mut desktop = desktop();
    let now = Instant::now();

    desktop.pointer(PointerEvent::secondary_down(600, 400), now);
    let item = desktop.context_menu().item_rect(MenuItem::Refresh).unwrap();
    desktop.pointer(PointerEvent::down(item.x + 10, item.y + 10), now);
    assert!(!desktop.context_menu().is_open());
    assert_eq!(desktop.toast(now), Some("Refreshed"));

    desktop.pointer(PointerEvent::secondary_down(600, 400), now);
    let item = desktop.context_menu().item_rect(MenuItem::ChangeWallpaper).unwrap();
    desktop.pointer(PointerEvent::down(item.x + 10, item.y + 10), now);
    assert_eq!(desktop.settings().wallpaper(), 2);
    assert_eq!(desktop.toast(now), Some("Wallpaper 2"));

    desktop.pointer(PointerEvent::secondary_down(600, 400), now);
    let item = desktop.context_menu().item_rect(MenuItem::NewFile).unwrap();
    desktop.pointer(PointerEvent::down(item.x + 10, item.y + 10), now);
    assert!(desktop.files().entries()[0].name.starts_with("New File "));
    assert_eq!(desktop.toast(now), Some("Created file"));
}

#[test]
fn blocked_pages_show_a_transient_notice() {
    let mut desktop =
        Desktop::new(&DesktopConfig::default(), 160, 50, Instant::now()).with_opener(Blocked);
    let now = Instant::now();
    desktop.open("files", Instant::now());

    desktop.files_click(FilesClick::Entry(4), now);
    assert_eq!(
        desktop.toast(now),
        Some("Pop-up blocked \u{2014} allow pop-ups for this site.")
    );

    desktop.tick(now + TOAST_DURATION);
    assert_eq!(desktop.toast(now + TOAST_DURATION), None);
}

#[test]
fn file_browser_navigates_and_opens_pages() {
    let recorder = Recorder::default();
    let mut desktop = Desktop::new(&DesktopConfig::default(), 160, 50, Instant::now())
        .with_opener(recorder.clone());
    let now = Instant::now();
    desktop.open("files", Instant::now());

    desktop.files_click(FilesClick::Entry(4), now);
    assert_eq!(*recorder.0.borrow(), vec!["./files/home/notes.html".to_string()]);

    desktop.files_click(FilesClick::Entry(0), now);
    assert_eq!(desktop.files().current(), "projects");
    assert_eq!(desktop.files().sidebar_active(), None);
    assert_eq!(desktop.files().hint(), "/home/arch/projects");

    desktop.files_click(FilesClick::Sidebar(1), now);
    assert_eq!(desktop.files().current(), "documents");
    assert_eq!(desktop.files().sidebar_active(), Some("documents"));
}

#[test]
fn clicks_inside_the_files_window_reach_its_toolbar() {
    let mut desktop = desktop();
    desktop.open("files", Instant::now());
    let body = body_cells(&desktop, AppId::Files);
    let layout = FilesLayout::new(body);
    let dx = layout.new_file_button.x - body.x;

    press_body(&mut desktop, AppId::Files, dx, 0);
    assert_eq!(desktop.toast(Instant::now()), Some("Created file"));
    assert_eq!(desktop.files().entries().len(), 12);
}

#[test]
fn settings_rows_change_wallpaper_and_accent() {
    let mut desktop = desktop();
    desktop.open("settings", Instant::now());

    press_body(&mut desktop, AppId::Settings, 2, FIRST_ROW_OFFSET + 2);
    assert_eq!(desktop.settings().wallpaper(), 3);
    assert_eq!(desktop.toast(Instant::now()), Some("Wallpaper 3"));

    press_body(&mut desktop, AppId::Settings, 2, FIRST_ROW_OFFSET + 3);
    assert!(desktop.settings().accent_alt());
    assert_eq!(desktop.toast(Instant::now()), Some("Accent toggled"));
}

#[test]
fn terminal_takes_keys_once_focused() {
    let mut desktop = desktop();
    let opened = Instant::now();
    desktop.open("terminal", opened);
    desktop.handle_key(&key(KeyCode::Char('x')), opened);
    assert_eq!(desktop.terminal().input(), "");

    desktop.tick(opened + TERMINAL_FOCUS_DELAY);
    type_line(&mut desktop, "whoami");
    assert_eq!(desktop.terminal().lines().len(), 2);

    type_line(&mut desktop, "neofetch");
    assert!(desktop.wm().window(AppId::Neofetch).unwrap().visible());
    assert_eq!(desktop.wm().topmost_visible(), Some(AppId::Neofetch));
    assert!(!desktop.terminal_has_input_focus());
}

#[test]
fn closing_the_terminal_drops_its_pending_focus() {
    let mut desktop = desktop();
    let opened = Instant::now();
    desktop.open("terminal", opened);
    desktop.wm_mut().close(AppId::Terminal);
    desktop.tick(opened + TERMINAL_FOCUS_DELAY);
    assert!(!desktop.terminal().is_focused());
}

#[test]
fn tab_cycles_and_escape_blurs_the_terminal() {
    let mut desktop = desktop();
    desktop.open("terminal", Instant::now());
    desktop.open("files", Instant::now());

    desktop.handle_key(&key(KeyCode::Tab), Instant::now());
    assert_eq!(desktop.wm().topmost_visible(), Some(AppId::Terminal));
    assert!(desktop.terminal_has_input_focus());

    desktop.handle_key(&key(KeyCode::Char('l')), Instant::now());
    assert_eq!(desktop.terminal().input(), "l");

    desktop.handle_key(&key(KeyCode::Esc), Instant::now());
    assert!(!desktop.terminal_has_input_focus());

    desktop.handle_key(&key(KeyCode::Tab), Instant::now());
    assert_eq!(desktop.wm().topmost_visible(), Some(AppId::Files));
    assert!(!desktop.terminal().is_focused());
}

#[test]
fn ctrl_q_quits_even_from_the_terminal() {
    let mut desktop = desktop();
    focus_terminal(&mut desktop);
    let quit = KeyEvent::new(KeyCode::Char('q'), KeyModifiers::CONTROL);
    assert_eq!(desktop.handle_key(&quit, Instant::now()), ControlFlow::Quit);
    assert_eq!(
        desktop.handle_key(&key(KeyCode::Char('q')), Instant::now()),
        ControlFlow::Continue
    );
}

#[test]
fn pointer_focus_follows_the_terminal_body() {
    let mut desktop = desktop();
    desktop.open("terminal", Instant::now());
    press_body(&mut desktop, AppId::Terminal, 4, 4);
    assert!(desktop.terminal_has_input_focus());

    desktop.pointer(PointerEvent::down(1200, 780), Instant::now());
    assert!(!desktop.terminal().is_focused());
}

#[test]
fn terminal_events_drive_the_desktop() {
    let mut desktop = desktop();
    let now = Instant::now();
    let right_click = Event::Mouse(MouseEvent {
        kind: MouseEventKind::Down(MouseButton::Right),
        column: 80,
        row: 30,
        modifiers: KeyModifiers::NONE,
    });
    assert_eq!(desktop.handle_event(&right_click, now), ControlFlow::Continue);
    assert!(desktop.context_menu().is_open());

    desktop.open("files", Instant::now());
    desktop.handle_event(&Event::Resize(100, 40), now);
    assert_eq!(desktop.cells(), (100, 40));
    assert!(!desktop.context_menu().is_open());
    let files = desktop.wm().window(AppId::Files).unwrap();
    assert_eq!(files.position().x, 800 - 720 - 12);
}
