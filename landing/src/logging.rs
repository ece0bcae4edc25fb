//! Browser console logging.
//!
//! `tracing` events are formatted by `tracing-subscriber`'s fmt layer and
//! forwarded line by line to `console.error` / `console.warn` /
//! `console.info` / `console.debug`, so devtools filtering by level works.

use std::io;

use tracing::{Level, Metadata};
use tracing_subscriber::fmt::MakeWriter;
use wasm_bindgen::JsValue;

use crate::config::SiteConfig;

/// Installs the global subscriber. Safe to call more than once; later calls
/// are ignored.
pub fn init(config: &SiteConfig) {
    let installed = tracing_subscriber::fmt()
        .with_writer(ConsoleMakeWriter)
        .with_max_level(config.level_filter())
        .with_ansi(false)
        // wasm32-unknown-unknown has no system clock; the console stamps lines anyway
        .without_time()
        .with_target(false)
        .try_init()
        .is_ok();

    if installed {
        tracing::debug!(level = %config.level_filter(), "console logging ready");
    }
}

/// Prints the startup banner to the browser console.
pub fn print_banner(config: &SiteConfig) {
    if web_sys::window().is_none() {
        return;
    }

    web_sys::console::log_2(
        &JsValue::from_str(&format!("%c{}", banner_text(config))),
        &JsValue::from_str("color: #22d3ee; font-family: monospace; font-size: 11px;"),
    );
    web_sys::console::log_2(
        &JsValue::from_str(&format!("%c$ {}", config.install_command())),
        &JsValue::from_str("color: #c084fc; font-family: monospace;"),
    );
    web_sys::console::log_2(
        &JsValue::from_str(&format!("%cFound a bug? {}", config.issues_url())),
        &JsValue::from_str("color: #f472b6;"),
    );
}

fn banner_text(config: &SiteConfig) -> String {
    format!(
        r#"
  _           _       _     _
 (_)_ __  ___(_) __ _| |__ | |_
 | | '_ \/ __| |/ _` | '_ \| __|
 | | | | \__ \ | (_| | | | | |_
 |_|_| |_|___/_|\__, |_| |_|\__|
                |___/
  {} {} | AI-powered code analysis
"#,
        config.product_name, config.version
    )
}

struct ConsoleMakeWriter;

impl<'a> MakeWriter<'a> for ConsoleMakeWriter {
    type Writer = ConsoleWriter;

    fn make_writer(&'a self) -> Self::Writer {
        ConsoleWriter::new(Level::INFO)
    }

    fn make_writer_for(&'a self, meta: &Metadata<'_>) -> Self::Writer {
        ConsoleWriter::new(*meta.level())
    }
}

/// Buffers one formatted event and emits it when dropped.
struct ConsoleWriter {
    level: Level,
    buf: Vec<u8>,
}

impl ConsoleWriter {
    fn new(level: Level) -> Self {
        Self {
            level,
            buf: Vec::with_capacity(128),
        }
    }
}

impl io::Write for ConsoleWriter {
    fn write(&mut self, bytes: &[u8]) -> io::Result<usize> {
        self.buf.extend_from_slice(bytes);
        Ok(bytes.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl Drop for ConsoleWriter {
    fn drop(&mut self) {
        let line = String::from_utf8_lossy(&self.buf);
        let line = line.trim_end();
        if line.is_empty() {
            return;
        }

        let msg = JsValue::from_str(line);
        match self.level {
            Level::ERROR => web_sys::console::error_1(&msg),
            Level::WARN => web_sys::console::warn_1(&msg),
            Level::INFO => web_sys::console::info_1(&msg),
            _ => web_sys::console::debug_1(&msg),
        }
    }
}
