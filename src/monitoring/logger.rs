//! Frontend logging
//!
//! Logs to the browser console with a structured format. Recent entries are
//! kept in a bounded buffer so they can be exported for troubleshooting.

use serde::Serialize;
use std::cell::RefCell;
use std::collections::VecDeque;
use std::sync::Once;

static INIT: Once = Once::new();

const LOG_BUFFER_CAPACITY: usize = 100;

thread_local! {
    static LOG_BUFFER: RefCell<VecDeque<LogEntry>> =
        RefCell::new(VecDeque::with_capacity(LOG_BUFFER_CAPACITY));
}

#[derive(Clone, Serialize)]
struct LogEntry {
    timestamp: String,
    level: String,
    message: String,
}

pub struct Logger;

impl Logger {
    /// Initialize logging (call once at app startup)
    pub fn init() {
        INIT.call_once(|| {
            Self::log_info("frontend logging initialized");
        });
    }

    /// Log an info message
    pub fn log_info(msg: &str) {
        Self::log_with_level("INFO", msg);
    }

    /// Log a warning message
    pub fn warn(msg: &str) {
        Self::log_with_level("WARN", msg);
    }

    /// Log an error message
    pub fn error(msg: &str) {
        Self::log_with_level("ERROR", msg);
    }

    /// Log a debug message
    pub fn debug(msg: &str) {
        Self::log_with_level("DEBUG", msg);
    }

    fn log_with_level(level: &str, msg: &str) {
        let timestamp = Self::timestamp();
        let line = format!("[{}] {} - {}", timestamp, level, msg);

        Self::emit(level, &line);
        Self::store_log_entry(LogEntry {
            timestamp,
            level: level.to_string(),
            message: msg.to_string(),
        });
    }

    #[cfg(target_arch = "wasm32")]
    fn emit(level: &str, line: &str) {
        use wasm_bindgen::JsValue;

        let line = JsValue::from(line);
        match level {
            "ERROR" => web_sys::console::error_1(&line),
            "WARN" => web_sys::console::warn_1(&line),
            "DEBUG" => web_sys::console::debug_1(&line),
            _ => web_sys::console::log_1(&line),
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn emit(_level: &str, line: &str) {
        eprintln!("{line}");
    }

    /// Keep the entry in memory, evicting the oldest past capacity
    fn store_log_entry(entry: LogEntry) {
        LOG_BUFFER.with(|buffer| {
            let mut buffer = buffer.borrow_mut();
            if buffer.len() == LOG_BUFFER_CAPACITY {
                buffer.pop_front();
            }
            buffer.push_back(entry);
        });
    }

    fn timestamp() -> String {
        chrono::Local::now().format("%H:%M:%S%.3f").to_string()
    }

    /// Export all buffered logs as JSON
    pub fn export_logs() -> String {
        LOG_BUFFER.with(|buffer| {
            let entries: Vec<LogEntry> = buffer.borrow().iter().cloned().collect();
            serde_json::to_string(&entries).unwrap_or_else(|_| "[]".to_string())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_is_idempotent() {
        Logger::init();
        Logger::init();
    }

    #[test]
    fn buffered_entries_show_up_in_the_export() {
        Logger::warn("disk almost full");
        Logger::error("request failed");

        let exported = Logger::export_logs();
        assert!(exported.contains("disk almost full"));
        assert!(exported.contains("request failed"));
        assert!(exported.contains("WARN"));
        assert!(exported.contains("ERROR"));
    }

    #[test]
    fn buffer_is_bounded() {
        for i in 0..(LOG_BUFFER_CAPACITY + 50) {
            Logger::debug(&format!("entry {i}"));
        }

        let entries: Vec<serde_json::Value> =
            serde_json::from_str(&Logger::export_logs()).unwrap();
        assert_eq!(entries.len(), LOG_BUFFER_CAPACITY);
        // the oldest entries were evicted
        assert!(!Logger::export_logs().contains("entry 0\""));
    }
}
