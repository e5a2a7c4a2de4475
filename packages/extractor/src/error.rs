//! Error types for loading and parsing source files.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum MetadataError {
    #[error("failed to read `{path}`: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to parse `{path}`:\n{}", .diagnostics.join("\n"))]
    Parse {
        path: PathBuf,
        diagnostics: Vec<String>,
    },
}

pub type Result<T> = std::result::Result<T, MetadataError>;
