//! The applications living inside the desktop's windows.

pub mod browser;
pub mod files;
pub mod neofetch;
pub mod settings;
pub mod terminal;

pub use files::{FileBrowser, PageOpener, WebBrowserOpener};
pub use settings::Settings;
pub use terminal::{TerminalApp, TerminalEffect};
