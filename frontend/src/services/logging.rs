//! Console log backend for the `log` facade.
//!
//! Records are written to the browser console through `gloo::console`,
//! prefixed with the module that produced them.

use log::{Level, LevelFilter, Log, Metadata, Record};

pub struct Logger;

static LOGGER: Logger = Logger;

impl Logger {
    /// Install the console logger. Calling it twice keeps the first install.
    pub fn init(enable_debug_logging: bool) {
        let level = if enable_debug_logging {
            LevelFilter::Debug
        } else {
            LevelFilter::Info
        };
        if log::set_logger(&LOGGER).is_ok() {
            log::set_max_level(level);
        }
    }
}

/// Line written to the console for a record
pub fn format_record(component: &str, message: &str) -> String {
    let component = component.rsplit("::").next().unwrap_or(component);
    format!("[{}] {}", component, message)
}

impl Log for Logger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = format_record(record.target(), &record.args().to_string());
        match record.level() {
            Level::Error => gloo::console::error!(line),
            Level::Warn => gloo::console::warn!(line),
            Level::Info => gloo::console::info!(line),
            Level::Debug | Level::Trace => gloo::console::debug!(line),
        }
    }

    fn flush(&self) {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_format_record_uses_last_path_segment() {
        assert_eq!(
            format_record("finance_tracker_domain::ledger", "Recorded income"),
            "[ledger] Recorded income"
        );
        assert_eq!(format_record("app", "started"), "[app] started");
    }
}
