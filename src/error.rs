//! Error taxonomy for the desktop.
//!
//! Nothing here is fatal to the session. Unknown applications are ignored by
//! the window manager, blocked navigation becomes a toast, and degenerate
//! geometry is only reported by explicit constructors because the clamping
//! paths never produce it.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum DesktopError {
    #[error("unknown application `{0}`")]
    UnknownApplication(String),

    #[error("could not open `{target}` in a new tab")]
    PopupBlocked {
        target: String,
        #[source]
        source: std::io::Error,
    },

    #[error("degenerate geometry {width}x{height}")]
    DegenerateGeometry { width: i32, height: i32 },

    #[error("terminal i/o error: {0}")]
    Io(#[from] std::io::Error),
}

impl DesktopError {
    /// Text shown to the user when the error surfaces as a toast.
    pub fn notice(&self) -> String {
        match self {
            DesktopError::PopupBlocked { .. } => {
                "Pop-up blocked \u{2014} allow pop-ups for this site.".to_string()
            }
            other => other.to_string(),
        }
    }
}
