//! Command-line options and the typed configuration the library runs on.

use std::path::PathBuf;
use std::time::Duration;

use clap::{ArgAction, Parser};
use tracing::Level;

use crate::constants::{
    DEFAULT_CELL_HEIGHT, DEFAULT_CELL_WIDTH, DOCK_RESERVED_WIDTH, EDGE_MARGIN, TOP_BAR_HEIGHT,
};
use crate::geometry::Reserved;
use crate::ui::CellScale;

pub const DEFAULT_POLL_MS: u64 = 16;
pub const DEFAULT_FILES_BASE: &str = "./files";
pub const DEFAULT_STARTUP_APP: &str = "terminal";

#[derive(Parser, Debug, Clone)]
#[command(
    name = "term-desk",
    version = env!("CARGO_PKG_VERSION"),
    about = "A small desktop with draggable, resizable windows, drawn in the terminal"
)]
pub struct Cli {
    /// Virtual pixels per terminal column.
    #[arg(long, value_name = "PX", default_value_t = DEFAULT_CELL_WIDTH)]
    pub cell_width: i32,

    /// Virtual pixels per terminal row.
    #[arg(long, value_name = "PX", default_value_t = DEFAULT_CELL_HEIGHT)]
    pub cell_height: i32,

    /// Width kept free for the dock on the left edge.
    #[arg(long, value_name = "PX", default_value_t = DOCK_RESERVED_WIDTH)]
    pub dock_width: i32,

    /// Height kept free for the top bar.
    #[arg(long, value_name = "PX", default_value_t = TOP_BAR_HEIGHT)]
    pub top_bar_height: i32,

    /// Gap windows keep from the right and bottom edges.
    #[arg(long, value_name = "PX", default_value_t = EDGE_MARGIN)]
    pub edge_margin: i32,

    /// Input poll interval.
    #[arg(long, value_name = "MS", default_value_t = DEFAULT_POLL_MS)]
    pub poll_ms: u64,

    /// Write logs to this file instead of the in-memory buffer.
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    #[arg(long, value_name = "LEVEL", default_value_t = Level::DEBUG)]
    pub log_level: Level,

    /// Where the file browser's pages live.
    #[arg(long, value_name = "DIR_OR_URL", default_value = DEFAULT_FILES_BASE)]
    pub files_base: String,

    /// Application to open at startup. May be repeated.
    #[arg(
        long = "open",
        value_name = "APP",
        action = ArgAction::Append,
        default_value = DEFAULT_STARTUP_APP
    )]
    pub open: Vec<String>,

    /// Leave mouse reporting off.
    #[arg(long)]
    pub no_mouse: bool,
}

impl Cli {
    pub fn desktop_config(&self) -> DesktopConfig {
        DesktopConfig {
            reserved: Reserved {
                dock_width: self.dock_width,
                top_bar_height: self.top_bar_height,
                margin: self.edge_margin,
            },
            scale: CellScale::new(self.cell_width, self.cell_height),
            poll_interval: Duration::from_millis(self.poll_ms.max(1)),
            startup_apps: self.open.clone(),
            files_base: self.files_base.clone(),
            mouse: !self.no_mouse,
            log_file: self.log_file.clone(),
            log_level: self.log_level,
        }
    }
}

/// Everything the desktop needs at startup. `Default` mirrors the CLI
/// defaults, so embedding the library does not require clap.
#[derive(Debug, Clone, PartialEq)]
pub struct DesktopConfig {
    pub reserved: Reserved,
    pub scale: CellScale,
    pub poll_interval: Duration,
    pub startup_apps: Vec<String>,
    pub files_base: String,
    pub mouse: bool,
    pub log_file: Option<PathBuf>,
    pub log_level: Level,
}

impl Default for DesktopConfig {
    fn default() -> Self {
        Self {
            reserved: Reserved::default(),
            scale: CellScale::default(),
            poll_interval: Duration::from_millis(DEFAULT_POLL_MS),
            startup_apps: vec![DEFAULT_STARTUP_APP.to_string()],
            files_base: DEFAULT_FILES_BASE.to_string(),
            mouse: true,
            log_file: None,
            log_level: Level::DEBUG,
        }
    }
}
