//! Observability for the storefront client.
//!
//! Structured, session-correlated logging. Lines go to stderr on native
//! hosts and to the browser console on wasm32.

pub mod logging;
mod session;

pub use logging::{
    LogBuilder, LogEntry, LogFormat, LogLevel, LogOutput, MemoryLog, ParseLevelError,
    StructuredLogger,
};
pub use session::SessionId;
