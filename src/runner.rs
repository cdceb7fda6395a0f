use std::cell::Cell;
use std::io;
use std::time::Instant;

use crate::config::DesktopConfig;
use crate::desktop::Desktop;
use crate::drivers::{InputDriver, OutputDriver};
use crate::event_loop::{ControlFlow, EventLoop, LoopEvent};
use crate::render;

/// Runs the desktop on `output` until the quit binding is pressed.
///
/// The output is entered before the first frame and exited afterwards even
/// when the loop fails; the loop error wins over an exit error.
pub fn run_desktop<O, D>(
    output: &mut O,
    input: D,
    desktop: &mut Desktop,
    config: &DesktopConfig,
) -> io::Result<()>
where
    O: OutputDriver,
    D: InputDriver,
{
    output.enter()?;
    let result = drive(output, input, desktop, config);
    let exited = output.exit();
    result.and(exited)
}

fn drive<O, D>(
    output: &mut O,
    mut input: D,
    desktop: &mut Desktop,
    config: &DesktopConfig,
) -> io::Result<()>
where
    O: OutputDriver,
    D: InputDriver,
{
    input.set_mouse_capture(config.mouse)?;
    tracing::info!(mouse = config.mouse, "desktop started");

    let deadline = Cell::new(desktop.next_deadline());
    let mut event_loop = EventLoop::new(input, config.poll_interval);
    event_loop.run(
        |_, event| {
            let flow = match event {
                LoopEvent::Tick(now) => {
                    let size = output.size()?;
                    if (size.width, size.height) != desktop.cells() {
                        tracing::debug!(cols = size.width, rows = size.height, "output resized");
                        desktop.resize(size.width, size.height);
                    }
                    desktop.tick(now);
                    output.draw(|mut frame| render::draw(&mut frame, desktop, now))?;
                    ControlFlow::Continue
                }
                LoopEvent::Input(event) => desktop.handle_event(&event, Instant::now()),
            };
            deadline.set(desktop.next_deadline());
            if flow == ControlFlow::Quit {
                tracing::info!("quit requested");
            }
            Ok(flow)
        },
        |_| deadline.get(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::drivers::scripted::ScriptedInputDriver;
    use crossterm::event::{
        Event, KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
    };
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn ctrl_q() -> Event {
        Event::Key(KeyEvent::new(KeyCode::Char('q'), KeyModifiers::CONTROL))
    }

    fn right_click(column: u16, row: u16) -> Event {
        Event::Mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Right),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        })
    }

    fn screen(terminal: &Terminal<TestBackend>) -> String {
        let buffer = terminal.backend().buffer();
        buffer.content().iter().map(|cell| cell.symbol()).collect()
    }

    #[test]
    fn quits_on_ctrl_q_and_adopts_output_size() {
        let config = DesktopConfig::default();
        let mut output = Terminal::new(TestBackend::new(100, 40)).unwrap();
        let mut desktop = Desktop::new(&config, 160, 50, Instant::now());
        let input = ScriptedInputDriver::new([ctrl_q()]);

        run_desktop(&mut output, input, &mut desktop, &config).unwrap();

        assert_eq!(desktop.cells(), (100, 40));
        assert!(screen(&output).contains("Arch Desktop"));
    }

    #[test]
    fn input_is_routed_between_frames() {
        let config = DesktopConfig {
            mouse: false,
            ..DesktopConfig::default()
        };
        let mut output = Terminal::new(TestBackend::new(160, 50)).unwrap();
        let mut desktop = Desktop::new(&config, 160, 50, Instant::now());
        let mut input = ScriptedInputDriver::new([right_click(60, 20), ctrl_q()]);

        run_desktop(&mut output, &mut input, &mut desktop, &config).unwrap();

        assert!(desktop.context_menu().is_open());
        assert_eq!(input.mouse_capture(), Some(false));
    }
}
