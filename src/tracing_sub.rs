use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::sync::Arc;

use tracing::Level;

use crate::config::DesktopConfig;
use crate::log_buffer::{LogBuffer, LogBufferWriter, global_log_buffer, set_global_log_buffer};

/// Where formatted log lines end up.
#[derive(Clone, Debug)]
pub enum LogSink {
    Buffer(LogBuffer),
    File(Arc<File>),
}

pub enum SinkWriter<'a> {
    Buffer(LogBufferWriter),
    File(&'a File),
}

impl Write for SinkWriter<'_> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self {
            SinkWriter::Buffer(w) => w.write(buf),
            SinkWriter::File(f) => f.write(buf),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match self {
            SinkWriter::Buffer(w) => w.flush(),
            SinkWriter::File(f) => f.flush(),
        }
    }
}

impl<'a> tracing_subscriber::fmt::MakeWriter<'a> for LogSink {
    type Writer = SinkWriter<'a>;

    fn make_writer(&'a self) -> Self::Writer {
        match self {
            LogSink::Buffer(buffer) => SinkWriter::Buffer(buffer.writer()),
            LogSink::File(file) => SinkWriter::File(file.as_ref()),
        }
    }
}

/// Installs the global subscriber.
///
/// Logs go to `config.log_file` when set, otherwise into the process-wide
/// [`LogBuffer`], which is returned so the caller can replay it after the
/// terminal is restored. Calling this twice leaves the first subscriber in
/// place.
pub fn init(config: &DesktopConfig) -> io::Result<Option<LogBuffer>> {
    let (sink, buffer) = match &config.log_file {
        Some(path) => {
            let file = OpenOptions::new().create(true).append(true).open(path)?;
            (LogSink::File(Arc::new(file)), None)
        }
        None => {
            let buffer = global_log_buffer().unwrap_or_else(|| {
                let buffer = LogBuffer::default();
                set_global_log_buffer(buffer.clone());
                buffer
            });
            (LogSink::Buffer(buffer.clone()), Some(buffer))
        }
    };
    install(sink, config.log_level);
    Ok(buffer)
}

fn install(sink: LogSink, level: Level) {
    let _ = tracing_subscriber::fmt()
        .compact()
        .with_max_level(level)
        .with_writer(sink)
        .with_ansi(false)
        .with_target(false)
        .with_thread_names(false)
        .try_init();
}

/// Whether a formatted line was logged at WARN or ERROR.
pub fn is_warning_or_worse(line: &str) -> bool {
    line.split_whitespace()
        .take(2)
        .any(|token| token == "WARN" || token == "ERROR")
}
