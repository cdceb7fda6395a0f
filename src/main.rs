use std::io::{self, Write};
use std::time::Instant;

use clap::Parser;

use term_desk::drivers::OutputDriver;
use term_desk::drivers::console::{ConsoleInputDriver, ConsoleOutputDriver};
use term_desk::{Cli, Desktop, run_desktop, tracing_sub};

fn main() -> io::Result<()> {
    let cli = Cli::parse();
    let config = cli.desktop_config();
    let log_buffer = tracing_sub::init(&config)?;

    let mut output = ConsoleOutputDriver::new()?;
    let size = output.size()?;
    let started = Instant::now();
    let mut desktop = Desktop::new(&config, size.width, size.height, started);
    desktop.open_startup_apps(&config.startup_apps, started);

    let result = run_desktop(&mut output, ConsoleInputDriver::new(), &mut desktop, &config);
    drop(output);
    if let Err(err) = &result {
        tracing::error!(error = %err, "desktop exited with an error");
    }

    // The alternate screen swallowed everything; surface what matters.
    if let Some(buffer) = log_buffer {
        let mut stderr = io::stderr().lock();
        for line in buffer
            .drain()
            .into_iter()
            .filter(|line| tracing_sub::is_warning_or_worse(line))
        {
            writeln!(stderr, "{line}")?;
        }
    }
    result
}
