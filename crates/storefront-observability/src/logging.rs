//! Structured logging with page-session context.

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::fmt;
use std::rc::Rc;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::SessionId;

/// Log level for structured logs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Trace => write!(f, "TRACE"),
            Self::Debug => write!(f, "DEBUG"),
            Self::Info => write!(f, "INFO"),
            Self::Warn => write!(f, "WARN"),
            Self::Error => write!(f, "ERROR"),
        }
    }
}

/// Unrecognized log level name.
#[derive(Error, Debug, PartialEq, Eq)]
#[error("Unknown log level: {0}")]
pub struct ParseLevelError(pub String);

impl FromStr for LogLevel {
    type Err = ParseLevelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "trace" => Ok(Self::Trace),
            "debug" => Ok(Self::Debug),
            "info" => Ok(Self::Info),
            "warn" | "warning" => Ok(Self::Warn),
            "error" => Ok(Self::Error),
            other => Err(ParseLevelError(other.to_string())),
        }
    }
}

/// A structured log entry.
#[derive(Debug, Clone, Serialize)]
pub struct LogEntry {
    /// Log level.
    pub level: LogLevel,
    /// Log message.
    pub message: String,
    /// Session ID for correlation.
    pub session_id: String,
    /// Emitting component.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub component: Option<String>,
    /// RFC 3339 wall-clock timestamp.
    pub ts: String,
    /// Additional structured fields.
    #[serde(flatten)]
    pub fields: BTreeMap<String, serde_json::Value>,
}

impl LogEntry {
    /// Format as JSON string.
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| self.message.clone())
    }

    /// Format as human-readable string.
    pub fn to_human(&self) -> String {
        let mut s = match &self.component {
            Some(component) => format!("[{}] {}: {}", self.level, component, self.message),
            None => format!("[{}] {}", self.level, self.message),
        };

        if !self.fields.is_empty() {
            s.push_str(" | ");
            let fields: Vec<String> = self
                .fields
                .iter()
                .map(|(k, v)| format!("{}={}", k, v))
                .collect();
            s.push_str(&fields.join(" "));
        }

        s
    }
}

/// Output format for logs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// JSON format (for log aggregation).
    #[default]
    Json,
    /// Human-readable format (for development).
    Human,
}

/// Where formatted log lines go.
#[derive(Debug, Clone, Default)]
pub enum LogOutput {
    /// Stderr natively, the browser console on wasm32.
    #[default]
    Platform,
    /// Kept in memory, for tests and diagnostics.
    Memory(MemoryLog),
}

/// Shared in-memory log buffer.
#[derive(Debug, Clone, Default)]
pub struct MemoryLog {
    entries: Rc<RefCell<Vec<LogEntry>>>,
}

impl MemoryLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the recorded entries.
    pub fn entries(&self) -> Vec<LogEntry> {
        self.entries.borrow().clone()
    }

    /// Recorded entries at `level`.
    pub fn at_level(&self, level: LogLevel) -> Vec<LogEntry> {
        self.entries
            .borrow()
            .iter()
            .filter(|e| e.level == level)
            .cloned()
            .collect()
    }

    /// Whether any entry's message contains `needle`.
    pub fn contains(&self, needle: &str) -> bool {
        self.entries.borrow().iter().any(|e| e.message.contains(needle))
    }

    fn push(&self, entry: LogEntry) {
        self.entries.borrow_mut().push(entry);
    }
}

/// Structured logger with session context.
///
/// Cheap to clone; clones share the session id and output.
#[derive(Debug, Clone)]
pub struct StructuredLogger {
    session_id: SessionId,
    component: Option<String>,
    min_level: LogLevel,
    format: LogFormat,
    output: LogOutput,
}

impl StructuredLogger {
    /// Create a new logger for a session.
    pub fn new(session_id: SessionId) -> Self {
        Self {
            session_id,
            component: None,
            min_level: LogLevel::Info,
            format: LogFormat::Json,
            output: LogOutput::Platform,
        }
    }

    /// Create a logger that records into `log`, at every level.
    pub fn in_memory(log: &MemoryLog) -> Self {
        Self::new(SessionId::new("sess_test"))
            .with_min_level(LogLevel::Trace)
            .with_output(LogOutput::Memory(log.clone()))
    }

    /// A child logger tagged with a component name.
    pub fn for_component(&self, component: impl Into<String>) -> Self {
        let mut child = self.clone();
        child.component = Some(component.into());
        child
    }

    /// Set minimum log level.
    pub fn with_min_level(mut self, level: LogLevel) -> Self {
        self.min_level = level;
        self
    }

    /// Set output format.
    pub fn with_format(mut self, format: LogFormat) -> Self {
        self.format = format;
        self
    }

    /// Set output destination.
    pub fn with_output(mut self, output: LogOutput) -> Self {
        self.output = output;
        self
    }

    /// Log at info level.
    pub fn info(&self, message: &str) {
        self.log(LogLevel::Info, message, BTreeMap::new());
    }

    /// Log at warn level.
    pub fn warn(&self, message: &str) {
        self.log(LogLevel::Warn, message, BTreeMap::new());
    }

    fn log(&self, level: LogLevel, message: &str, fields: BTreeMap<String, serde_json::Value>) {
        if level < self.min_level {
            return;
        }

        let entry = LogEntry {
            level,
            message: message.to_string(),
            session_id: self.session_id.to_string(),
            component: self.component.clone(),
            ts: chrono::Utc::now().to_rfc3339(),
            fields,
        };

        match &self.output {
            LogOutput::Memory(log) => log.push(entry),
            LogOutput::Platform => {
                let line = match self.format {
                    LogFormat::Json => entry.to_json(),
                    LogFormat::Human => entry.to_human(),
                };
                emit_platform(level, &line);
            }
        }
    }

    /// Get the session ID.
    pub fn session_id(&self) -> &SessionId {
        &self.session_id
    }

    /// Check whether `level` would be emitted.
    pub fn enabled(&self, level: LogLevel) -> bool {
        level >= self.min_level
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn emit_platform(_level: LogLevel, line: &str) {
    eprintln!("{}", line);
}

#[cfg(target_arch = "wasm32")]
fn emit_platform(level: LogLevel, line: &str) {
    let value = wasm_bindgen::JsValue::from_str(line);
    match level {
        LogLevel::Error => web_sys::console::error_1(&value),
        LogLevel::Warn => web_sys::console::warn_1(&value),
        LogLevel::Info => web_sys::console::info_1(&value),
        LogLevel::Debug | LogLevel::Trace => web_sys::console::debug_1(&value),
    }
}

/// Builder for log entries with fluent API.
pub struct LogBuilder<'a> {
    logger: &'a StructuredLogger,
    level: LogLevel,
    message: String,
    fields: BTreeMap<String, serde_json::Value>,
}

impl<'a> LogBuilder<'a> {
    /// Create a new log builder.
    pub fn new(logger: &'a StructuredLogger, level: LogLevel, message: impl Into<String>) -> Self {
        Self {
            logger,
            level,
            message: message.into(),
            fields: BTreeMap::new(),
        }
    }

    /// Add a string field.
    pub fn field(mut self, key: &str, value: impl Into<String>) -> Self {
        self.fields
            .insert(key.to_string(), serde_json::json!(value.into()));
        self
    }

    /// Add an integer field.
    pub fn field_i64(mut self, key: &str, value: i64) -> Self {
        self.fields.insert(key.to_string(), serde_json::json!(value));
        self
    }

    /// Add an error's display text as the `error` field.
    pub fn error(self, err: &dyn std::error::Error) -> Self {
        self.field("error", err.to_string())
    }

    /// Emit the log entry.
    pub fn emit(self) {
        self.logger.log(self.level, &self.message, self.fields);
    }
}

impl StructuredLogger {
    /// Start building an info log entry.
    pub fn info_builder(&self, message: impl Into<String>) -> LogBuilder<'_> {
        LogBuilder::new(self, LogLevel::Info, message)
    }

    /// Start building a warn log entry.
    pub fn warn_builder(&self, message: impl Into<String>) -> LogBuilder<'_> {
        LogBuilder::new(self, LogLevel::Warn, message)
    }

    /// Start building a debug log entry.
    pub fn debug_builder(&self, message: impl Into<String>) -> LogBuilder<'_> {
        LogBuilder::new(self, LogLevel::Debug, message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_min_level_filters() {
        let log = MemoryLog::new();
        let logger = StructuredLogger::in_memory(&log).with_min_level(LogLevel::Warn);
        logger.info("dropped");
        logger.warn("kept");
        assert_eq!(log.entries().len(), 1);
        assert!(log.contains("kept"));
        assert!(!logger.enabled(LogLevel::Debug));
    }

    #[test]
    fn test_builder_fields() {
        let log = MemoryLog::new();
        let logger = StructuredLogger::in_memory(&log).for_component("catalog");
        logger
            .warn_builder("catalog fetch failed")
            .field("url", "https://example.test/products")
            .field_i64("status", 503)
            .emit();

        let entries = log.at_level(LogLevel::Warn);
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].component.as_deref(), Some("catalog"));
        assert_eq!(entries[0].fields["status"], serde_json::json!(503));
    }

    #[test]
    fn test_json_shape() {
        let entry = LogEntry {
            level: LogLevel::Info,
            message: "bootstrap complete".into(),
            session_id: "sess_abc".into(),
            component: None,
            ts: "2024-01-01T00:00:00+00:00".into(),
            fields: BTreeMap::from([("products".to_string(), serde_json::json!(20))]),
        };
        let value: serde_json::Value = serde_json::from_str(&entry.to_json()).unwrap();
        assert_eq!(value["level"], "info");
        assert_eq!(value["session_id"], "sess_abc");
        assert_eq!(value["products"], 20);
        assert!(value.get("component").is_none());
    }

    #[test]
    fn test_human_format() {
        let entry = LogEntry {
            level: LogLevel::Warn,
            message: "storage write failed".into(),
            session_id: "sess_abc".into(),
            component: Some("store".into()),
            ts: String::new(),
            fields: BTreeMap::from([("key".to_string(), serde_json::json!("storefront:cart"))]),
        };
        assert_eq!(
            entry.to_human(),
            "[WARN] store: storage write failed | key=\"storefront:cart\""
        );
    }

    #[test]
    fn test_parse_level() {
        assert_eq!("WARN".parse::<LogLevel>(), Ok(LogLevel::Warn));
        assert!("loud".parse::<LogLevel>().is_err());
    }
}
