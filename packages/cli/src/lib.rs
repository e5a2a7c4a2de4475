#![deny(clippy::all)]

/**
 * ts-class-meta CLI
 *
 * Command line front end for class metadata extraction
 */
pub use ts_class_meta as extractor;

pub mod args;
pub mod config;
pub mod error;
pub mod main_entry;
pub mod output;

pub use config::ExtractConfig;
pub use error::CliError;

/// CLI version
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
