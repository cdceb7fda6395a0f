use crate::ui::UiFrame;
use ratatui::backend::Backend;
use ratatui::layout::Size;
use std::io;

/// A surface the desktop is drawn onto.
pub trait OutputDriver {
    type Backend: Backend;

    fn enter(&mut self) -> io::Result<()>;
    fn exit(&mut self) -> io::Result<()>;

    /// Current size in cells.
    fn size(&self) -> io::Result<Size>;

    fn draw<F>(&mut self, f: F) -> io::Result<()>
    where
        F: FnOnce(UiFrame<'_>);
}

/// Any ratatui terminal can be drawn to directly. Entering and leaving are
/// no-ops; the console driver wraps this with raw mode and the alternate
/// screen.
impl<B: Backend> OutputDriver for ratatui::Terminal<B> {
    type Backend = B;

    fn enter(&mut self) -> io::Result<()> {
        Ok(())
    }

    fn exit(&mut self) -> io::Result<()> {
        Ok(())
    }

    fn size(&self) -> io::Result<Size> {
        ratatui::Terminal::size(self).map_err(|err| io::Error::other(err.to_string()))
    }

    fn draw<F>(&mut self, f: F) -> io::Result<()>
    where
        F: FnOnce(UiFrame<'_>),
    {
        ratatui::Terminal::draw(self, move |frame| f(UiFrame::new(frame)))
            .map(|_| ())
            .map_err(|err| io::Error::other(err.to_string()))
    }
}
