// CLI Errors
//
// Failures surfaced by the command line front end and their exit codes.

use std::path::PathBuf;

use ts_class_meta::MetadataError;

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// Malformed invocation. The message is the full usage text.
    #[error("{0}")]
    Usage(String),

    #[error(transparent)]
    Metadata(#[from] MetadataError),

    #[error("failed to write `{path}`: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to serialize class metadata: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl CliError {
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Usage(_) => 1,
            CliError::Metadata(_) => 2,
            CliError::Write { .. } | CliError::Serialize(_) => 3,
        }
    }
}
