pub mod console;
pub mod keyboard;
pub mod output_driver;
pub mod scripted;

use ::crossterm::event::Event;
use std::io;
use std::time::Duration;

pub use output_driver::OutputDriver;

/// Source of terminal input events.
pub trait InputDriver {
    fn poll(&mut self, timeout: Duration) -> io::Result<bool>;
    fn read(&mut self) -> io::Result<Event>;
    fn set_mouse_capture(&mut self, _enabled: bool) -> io::Result<()> {
        Ok(())
    }
}

impl<T: InputDriver + ?Sized> InputDriver for &mut T {
    fn poll(&mut self, timeout: Duration) -> io::Result<bool> {
        (**self).poll(timeout)
    }

    fn read(&mut self) -> io::Result<Event> {
        (**self).read()
    }

    fn set_mouse_capture(&mut self, enabled: bool) -> io::Result<()> {
        (**self).set_mouse_capture(enabled)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use scripted::ScriptedInputDriver;

    fn drain<D: InputDriver>(mut driver: D) -> Vec<Event> {
        let mut out = Vec::new();
        while driver.poll(Duration::ZERO).unwrap() {
            out.push(driver.read().unwrap());
        }
        out
    }

    #[test]
    fn blanket_impl_for_mut_ref_works() {
        let key = Event::Key(KeyEvent::new(KeyCode::Char('x'), KeyModifiers::NONE));
        let mut driver = ScriptedInputDriver::new([key.clone()]);
        assert_eq!(drain(&mut driver), vec![key]);
        assert!(!driver.poll(Duration::ZERO).unwrap());
    }
}
