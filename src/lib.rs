//! A desktop with floating windows, a dock and a handful of toy
//! applications, drawn in the terminal.
//!
//! Window geometry lives in a virtual pixel space; [`ui::CellScale`] maps it
//! onto terminal cells for drawing and maps mouse reports back.

pub mod apps;
pub mod config;
pub mod constants;
pub mod desktop;
pub mod drivers;
pub mod error;
pub mod event_loop;
pub mod geometry;
pub mod keybindings;
pub mod log_buffer;
pub mod render;
pub mod runner;
pub mod scheduler;
pub mod theme;
pub mod tracing_sub;
pub mod ui;
pub mod window;

pub use config::{Cli, DesktopConfig};
pub use desktop::Desktop;
pub use error::DesktopError;
pub use runner::run_desktop;
pub use window::{AppId, WindowManager};
