use std::time::Instant;

use super::hit_test::{Hit, HitRegion, TitleControl, hit_test};
use super::session::InteractionSession;
use super::state::WindowManagerState;
use super::{AppId, Window, drag, resize};
use crate::constants::TERMINAL_FOCUS_DELAY;
use crate::geometry::{Point, Reserved, Size, WindowRect};
use crate::scheduler::Scheduler;

/// Work the window manager asks its host to do later.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeferredAction {
    /// Give the terminal's input line keyboard focus.
    FocusTerminalInput,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerButton {
    Primary,
    Secondary,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerKind {
    Down(PointerButton),
    Move,
    Up,
}

/// Pointer input in viewport pixel space.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PointerEvent {
    pub kind: PointerKind,
    pub position: Point,
}

impl PointerEvent {
    pub fn down(x: i32, y: i32) -> Self {
        Self {
            kind: PointerKind::Down(PointerButton::Primary),
            position: Point::new(x, y),
        }
    }

    pub fn secondary_down(x: i32, y: i32) -> Self {
        Self {
            kind: PointerKind::Down(PointerButton::Secondary),
            position: Point::new(x, y),
        }
    }

    pub fn moved(x: i32, y: i32) -> Self {
        Self {
            kind: PointerKind::Move,
            position: Point::new(x, y),
        }
    }

    pub fn up(x: i32, y: i32) -> Self {
        Self {
            kind: PointerKind::Up,
            position: Point::new(x, y),
        }
    }
}

/// What a pointer event did, so the host can route the leftovers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerOutcome {
    /// No window was involved; the event belongs to the desktop behind.
    Unhandled,
    /// A press landed on a window.
    Window(Hit),
    /// The event was consumed by an active drag or resize.
    Session(AppId),
}

/// Public face of the window subsystem: the operations the desktop chrome,
/// dock launchers and title-bar controls call, plus the pointer entry point
/// that feeds the drag and resize controllers.
///
/// Pointer moves and releases are accepted from anywhere in the viewport so
/// a session keeps tracking after the pointer leaves its window.
#[derive(Debug, Clone)]
pub struct WindowManager {
    state: WindowManagerState,
    deferred: Scheduler<DeferredAction>,
}

impl Default for WindowManager {
    fn default() -> Self {
        Self::new(Size::new(1280, 800), Reserved::default())
    }
}

impl WindowManager {
    pub fn new(viewport: Size, reserved: Reserved) -> Self {
        Self {
            state: WindowManagerState::new(viewport, reserved),
            deferred: Scheduler::new(),
        }
    }

    pub fn state(&self) -> &WindowManagerState {
        &self.state
    }

    pub fn window(&self, app: AppId) -> Option<&Window> {
        self.state.registry.get(app)
    }

    /// Back to front.
    pub fn windows_by_z(&self) -> Vec<&Window> {
        self.state.registry.by_z()
    }

    pub fn topmost_visible(&self) -> Option<AppId> {
        self.state
            .registry
            .iter()
            .filter(|w| w.visible())
            .max_by_key(|w| w.z_index())
            .map(|w| w.id())
    }

    pub fn workspace(&self) -> WindowRect {
        self.state.workspace()
    }

    pub fn session(&self) -> InteractionSession {
        self.state.session
    }

    /// Opens the window registered under `name`. Unknown names leave every
    /// piece of state untouched and return `false`.
    pub fn open(&mut self, name: &str, now: Instant) -> bool {
        match name.parse::<AppId>() {
            Ok(app) => {
                self.open_app(app, now);
                true
            }
            Err(err) => {
                tracing::debug!(error = %err, "ignoring open request");
                false
            }
        }
    }

    /// Shows and raises `app`. Opening the terminal asks for its input line
    /// to take focus [`TERMINAL_FOCUS_DELAY`] after `now`.
    pub fn open_app(&mut self, app: AppId, now: Instant) {
        self.state.registry.set_visible(app, true);
        self.state.reclamp(app);
        self.state.bring_to_front(app);
        tracing::debug!(%app, "window opened");
        if app == AppId::Terminal {
            self.deferred
                .cancel_where(|task| *task == DeferredAction::FocusTerminalInput);
            self.deferred
                .schedule(now, TERMINAL_FOCUS_DELAY, DeferredAction::FocusTerminalInput);
        }
    }

    pub fn close(&mut self, app: AppId) {
        self.hide(app);
        tracing::debug!(%app, "window closed");
    }

    /// Same effect as [`WindowManager::close`]: there is no taskbar to
    /// restore from, so a minimized window simply hides until reopened.
    pub fn minimize(&mut self, app: AppId) {
        self.hide(app);
        tracing::debug!(%app, "window minimized");
    }

    fn hide(&mut self, app: AppId) {
        self.state.registry.set_visible(app, false);
        if self.state.session.app() == Some(app) {
            self.state.session = InteractionSession::Idle;
        }
        if app == AppId::Terminal {
            let dropped = self
                .deferred
                .cancel_where(|task| *task == DeferredAction::FocusTerminalInput);
            if dropped > 0 {
                tracing::trace!("pending terminal focus cancelled");
            }
        }
    }

    /// Flips the maximized flag and raises the window. Stored position and
    /// size are left alone, so toggling back restores them exactly.
    pub fn toggle_maximize(&mut self, app: AppId) {
        let Some(window) = self.state.registry.get(app) else {
            return;
        };
        let maximized = !window.maximized();
        self.state.registry.set_maximized(app, maximized);
        if !maximized {
            self.state.reclamp(app);
        }
        self.state.bring_to_front(app);
        tracing::debug!(%app, maximized, "window maximize toggled");
    }

    pub fn focus(&mut self, app: AppId) {
        self.state.bring_to_front(app);
    }

    /// Raises the bottom-most visible window, walking the stack one step.
    pub fn cycle_focus(&mut self) -> Option<AppId> {
        let next = self
            .state
            .registry
            .iter()
            .filter(|w| w.visible())
            .min_by_key(|w| w.z_index())
            .map(|w| w.id())?;
        self.focus(next);
        Some(next)
    }

    /// Adopts a new viewport and pulls visible floating windows back inside.
    pub fn set_viewport(&mut self, viewport: Size) {
        if self.state.viewport == viewport {
            return;
        }
        self.state.viewport = viewport;
        let visible: Vec<AppId> = self
            .state
            .registry
            .iter()
            .filter(|w| w.visible())
            .map(|w| w.id())
            .collect();
        for app in visible {
            self.state.reclamp(app);
        }
    }

    pub fn pointer(&mut self, event: PointerEvent) -> PointerOutcome {
        match event.kind {
            PointerKind::Down(button) => self.pointer_down(button, event.position),
            PointerKind::Move => match self.state.session {
                InteractionSession::Idle => PointerOutcome::Unhandled,
                InteractionSession::Dragging(session) => {
                    drag::update(&mut self.state, session, event.position);
                    PointerOutcome::Session(session.app)
                }
                InteractionSession::Resizing(session) => {
                    resize::update(&mut self.state, session, event.position);
                    PointerOutcome::Session(session.app)
                }
            },
            PointerKind::Up => match self.state.session.app() {
                Some(app) => {
                    self.state.session = InteractionSession::Idle;
                    tracing::debug!(%app, "pointer session ended");
                    PointerOutcome::Session(app)
                }
                None => PointerOutcome::Unhandled,
            },
        }
    }

    fn pointer_down(&mut self, button: PointerButton, position: Point) -> PointerOutcome {
        // A press without a matching release (focus lost mid-drag) ends the
        // old session.
        self.state.session = InteractionSession::Idle;

        let workspace = self.state.workspace();
        let Some(hit) = hit_test(&self.state.registry, position, workspace) else {
            return PointerOutcome::Unhandled;
        };
        if button == PointerButton::Secondary {
            self.state.bring_to_front(hit.app);
            return PointerOutcome::Window(hit);
        }
        match hit.region {
            HitRegion::Control(TitleControl::Close) => self.close(hit.app),
            HitRegion::Control(TitleControl::Minimize) => self.minimize(hit.app),
            HitRegion::Control(TitleControl::Maximize) => self.toggle_maximize(hit.app),
            HitRegion::TitleBar => {
                if !drag::begin(&mut self.state, hit.app, position) {
                    self.state.bring_to_front(hit.app);
                }
            }
            HitRegion::ResizeHandle => {
                if !resize::begin(&mut self.state, hit.app, position) {
                    self.state.bring_to_front(hit.app);
                }
            }
            HitRegion::Body => {
                self.state.bring_to_front(hit.app);
            }
        }
        PointerOutcome::Window(hit)
    }

    /// Deferred work that has come due, for the host to apply.
    pub fn take_due(&mut self, now: Instant) -> Vec<DeferredAction> {
        let due = self.deferred.take_due(now);
        if !due.is_empty() {
            tracing::trace!(count = due.len(), "deferred actions fired");
        }
        due
    }

    pub fn pending_deferred(&self) -> usize {
        self.deferred.pending()
    }

    pub fn next_deadline(&self) -> Option<Instant> {
        self.deferred.next_deadline()
    }
}
