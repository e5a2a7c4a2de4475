//! Logging Source

pub mod console_logger;
pub mod logger;

pub use console_logger::ConsoleLogger;
pub use logger::{LogLevel, Logger, NullLogger, UnknownLogLevel};
