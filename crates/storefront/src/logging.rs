//! Browser console logging.
//!
//! Formats `tracing` events with the `fmt` layer and hands each finished line
//! to the console method that matches its level.

use std::io;

use tracing::{Level, Metadata};
use tracing_subscriber::{EnvFilter, fmt::MakeWriter, prelude::*};

const DEFAULT_DIRECTIVES: &str = "info,verdant=debug,verdant_storefront=debug";

/// Filter directives, fixed at build time through `VERDANT_LOG`.
pub fn directives() -> &'static str {
    option_env!("VERDANT_LOG").unwrap_or(DEFAULT_DIRECTIVES)
}

/// Install the console subscriber.
///
/// A second call leaves the existing subscriber in place.
pub fn init() {
    let layer = tracing_subscriber::fmt::layer()
        .without_time()
        .with_ansi(false)
        .with_level(true)
        .with_target(true)
        .with_writer(ConsoleMakeWriter);

    let result = tracing_subscriber::registry()
        .with(EnvFilter::new(directives()))
        .with(layer)
        .try_init();

    if let Err(error) = result {
        tracing::warn!(%error, "console logging already installed");
    }
}

/// Hands out one [`ConsoleWriter`] per event.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleMakeWriter;

impl<'a> MakeWriter<'a> for ConsoleMakeWriter {
    type Writer = ConsoleWriter;

    fn make_writer(&'a self) -> Self::Writer {
        ConsoleWriter::new(Level::INFO)
    }

    fn make_writer_for(&'a self, meta: &Metadata<'_>) -> Self::Writer {
        ConsoleWriter::new(*meta.level())
    }
}

/// Buffers one formatted event and flushes it to the console on drop.
#[derive(Debug)]
pub struct ConsoleWriter {
    level: Level,
    buffer: Vec<u8>,
}

impl ConsoleWriter {
    fn new(level: Level) -> Self {
        Self {
            level,
            buffer: Vec::new(),
        }
    }

    /// The buffered line without its trailing newline.
    fn line(&self) -> String {
        String::from_utf8_lossy(&self.buffer)
            .trim_end_matches('\n')
            .to_string()
    }
}

impl io::Write for ConsoleWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.buffer.extend_from_slice(buf);

        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl Drop for ConsoleWriter {
    fn drop(&mut self) {
        if self.buffer.is_empty() {
            return;
        }

        emit(self.level, &self.line());
    }
}

#[cfg(target_arch = "wasm32")]
fn emit(level: Level, line: &str) {
    use wasm_bindgen::JsValue;
    use web_sys::console;

    let value = JsValue::from_str(line);

    match level {
        Level::ERROR => console::error_1(&value),
        Level::WARN => console::warn_1(&value),
        Level::INFO => console::info_1(&value),
        Level::DEBUG | Level::TRACE => console::debug_1(&value),
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn emit(_level: Level, _line: &str) {}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use testresult::TestResult;

    use super::*;

    #[test]
    fn test_writer_buffers_until_dropped() -> TestResult {
        let mut writer = ConsoleWriter::new(Level::WARN);

        writer.write_all(b"WARN verdant: fetch failed")?;
        writer.write_all(b"\n")?;

        assert_eq!(writer.line(), "WARN verdant: fetch failed");

        Ok(())
    }

    #[test]
    fn test_writer_takes_event_level() {
        let writer = ConsoleMakeWriter.make_writer();

        assert_eq!(writer.level, Level::INFO);
    }

    #[test]
    fn test_default_directives_parse() {
        assert!(EnvFilter::try_new(DEFAULT_DIRECTIVES).is_ok());
    }
}
