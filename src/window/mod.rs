pub mod decorator;
pub mod drag;
pub mod hit_test;
pub mod registry;
pub mod resize;
pub mod session;
pub mod state;
pub mod z_order;

mod window_manager;

use std::fmt;
use std::str::FromStr;

use crate::error::DesktopError;
use crate::geometry::{Point, Size, WindowRect};

pub use hit_test::{Hit, HitRegion, TitleControl, hit_test};
pub use registry::WindowRegistry;
pub use session::InteractionSession;
pub use state::WindowManagerState;
pub use window_manager::{
    DeferredAction, PointerButton, PointerEvent, PointerKind, PointerOutcome, WindowManager,
};
pub use z_order::ZOrder;

/// The fixed set of applications the desktop ships with. Each one owns
/// exactly one window for the whole session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum AppId {
    Terminal,
    Files,
    Firefox,
    Settings,
    Neofetch,
}

impl AppId {
    pub const ALL: [AppId; 5] = [
        AppId::Terminal,
        AppId::Files,
        AppId::Firefox,
        AppId::Settings,
        AppId::Neofetch,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            AppId::Terminal => "terminal",
            AppId::Files => "files",
            AppId::Firefox => "firefox",
            AppId::Settings => "settings",
            AppId::Neofetch => "neofetch",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            AppId::Terminal => "Terminal",
            AppId::Files => "Files",
            AppId::Firefox => "Firefox",
            AppId::Settings => "Settings",
            AppId::Neofetch => "Neofetch",
        }
    }

    /// Where the window first appears, before any clamping.
    fn initial_rect(self) -> WindowRect {
        match self {
            AppId::Terminal => WindowRect::new(140, 90, 640, 400),
            AppId::Files => WindowRect::new(180, 110, 720, 440),
            AppId::Firefox => WindowRect::new(220, 80, 760, 480),
            AppId::Settings => WindowRect::new(260, 120, 420, 320),
            AppId::Neofetch => WindowRect::new(300, 140, 520, 320),
        }
    }
}

impl fmt::Display for AppId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AppId {
    type Err = DesktopError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        AppId::ALL
            .into_iter()
            .find(|app| app.as_str() == s)
            .ok_or_else(|| DesktopError::UnknownApplication(s.to_string()))
    }
}

/// One application surface. Windows are created once and reused.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Window {
    id: AppId,
    visible: bool,
    maximized: bool,
    position: Point,
    size: Size,
    z_index: u32,
}

impl Window {
    fn new(id: AppId) -> Self {
        let rect = id.initial_rect();
        Self {
            id,
            visible: false,
            maximized: false,
            position: rect.origin(),
            size: rect.size(),
            z_index: 0,
        }
    }

    pub fn id(&self) -> AppId {
        self.id
    }

    pub fn visible(&self) -> bool {
        self.visible
    }

    pub fn maximized(&self) -> bool {
        self.maximized
    }

    /// Stored top-left corner; ignored for layout while maximized.
    pub fn position(&self) -> Point {
        self.position
    }

    /// Stored size; ignored for layout while maximized.
    pub fn size(&self) -> Size {
        self.size
    }

    pub fn z_index(&self) -> u32 {
        self.z_index
    }

    /// The rectangle the window actually occupies.
    pub fn frame(&self, workspace: WindowRect) -> WindowRect {
        if self.maximized {
            workspace
        } else {
            WindowRect::from_parts(self.position, self.size)
        }
    }
}
