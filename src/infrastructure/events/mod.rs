//! Event Sink Implementations
//!
//! Provides concrete implementations of SetupEventSink:
//! - ConsoleEventSink: Human-readable progress on stderr
//! - JsonEventSink: NDJSON output for scripts

mod console;
mod json;

pub use console::ConsoleEventSink;
pub use json::JsonEventSink;
