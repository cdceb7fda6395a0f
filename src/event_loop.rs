use std::io;
use std::time::{Duration, Instant};

use crossterm::event::Event;

use crate::drivers::InputDriver;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlFlow {
    Continue,
    Quit,
}

/// What the loop hands its handler on each turn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoopEvent {
    /// An input event from the driver.
    Input(Event),
    /// Start of an iteration: time to run due timers and redraw.
    Tick(Instant),
}

/// Single-threaded message pump for the desktop.
///
/// Each iteration first delivers a [`LoopEvent::Tick`], then waits up to the
/// poll interval for input and drains every queued event before ticking
/// again. Nothing else in the crate polls or reads the driver.
pub struct EventLoop<D> {
    driver: D,
    poll_interval: Duration,
}

impl<D: InputDriver> EventLoop<D> {
    pub fn new(driver: D, poll_interval: Duration) -> Self {
        Self {
            driver,
            poll_interval,
        }
    }

    pub fn driver(&mut self) -> &mut D {
        &mut self.driver
    }

    pub fn poll_interval(&self) -> Duration {
        self.poll_interval
    }

    /// Runs until the handler returns [`ControlFlow::Quit`].
    ///
    /// `wait_hint` may shorten the next poll so timers that fall due
    /// between input events are not delayed by a full interval.
    pub fn run<F, W>(&mut self, mut handler: F, mut wait_hint: W) -> io::Result<()>
    where
        F: FnMut(&mut D, LoopEvent) -> io::Result<ControlFlow>,
        W: FnMut(Instant) -> Option<Instant>,
    {
        loop {
            let now = Instant::now();
            if handler(&mut self.driver, LoopEvent::Tick(now))? == ControlFlow::Quit {
                return Ok(());
            }

            let timeout = wait_hint(now)
                .map(|deadline| deadline.saturating_duration_since(now))
                .map_or(self.poll_interval, |until| until.min(self.poll_interval));

            if self.driver.poll(timeout)? {
                // Drain bursts (drags, scrolling) before the next redraw.
                loop {
                    let event = self.driver.read()?;
                    if handler(&mut self.driver, LoopEvent::Input(event))? == ControlFlow::Quit {
                        return Ok(());
                    }
                    if !self.driver.poll(Duration::ZERO)? {
                        break;
                    }
                }
            }
        }
    }
}
