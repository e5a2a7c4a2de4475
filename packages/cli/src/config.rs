// Extraction Configuration
//
// The single immutable configuration value of one invocation.

use std::path::{Path, PathBuf};

use ts_class_meta::logging::{LogLevel, UnknownLogLevel};

/// Environment variable selecting the log level.
pub const LOG_LEVEL_ENV: &str = "TS_CLASS_META_LOG";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractConfig {
    /// TypeScript file to read.
    pub input_path: PathBuf,
    /// Destination of the JSON document. `None` writes to stdout.
    pub output_path: Option<PathBuf>,
    pub log_level: LogLevel,
}

impl ExtractConfig {
    pub fn new(input_path: impl Into<PathBuf>) -> Self {
        Self {
            input_path: input_path.into(),
            output_path: None,
            log_level: LogLevel::default(),
        }
    }

    pub fn with_output(mut self, output_path: impl Into<PathBuf>) -> Self {
        self.output_path = Some(output_path.into());
        self
    }

    pub fn with_log_level(mut self, log_level: LogLevel) -> Self {
        self.log_level = log_level;
        self
    }

    pub fn output_path(&self) -> Option<&Path> {
        self.output_path.as_deref()
    }
}

/// Log level named by the value of [`LOG_LEVEL_ENV`]. Unset or blank
/// selects the default level.
pub fn log_level_from_env(value: Option<&str>) -> Result<LogLevel, UnknownLogLevel> {
    match value.map(str::trim) {
        None | Some("") => Ok(LogLevel::default()),
        Some(name) => name.parse(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_build_config() {
        let config = ExtractConfig::new("src/user.ts")
            .with_output("out/meta.json")
            .with_log_level(LogLevel::Debug);

        assert_eq!(config.input_path, PathBuf::from("src/user.ts"));
        assert_eq!(config.output_path(), Some(Path::new("out/meta.json")));
        assert_eq!(config.log_level, LogLevel::Debug);
    }

    #[test]
    fn should_default_to_stdout_and_warn_level() {
        let config = ExtractConfig::new("a.ts");
        assert_eq!(config.output_path(), None);
        assert_eq!(config.log_level, LogLevel::Warn);
    }

    #[test]
    fn should_resolve_log_level_from_env_value() {
        assert_eq!(log_level_from_env(None), Ok(LogLevel::Warn));
        assert_eq!(log_level_from_env(Some("  ")), Ok(LogLevel::Warn));
        assert_eq!(log_level_from_env(Some("DEBUG")), Ok(LogLevel::Debug));
        assert_eq!(
            log_level_from_env(Some("verbose")),
            Err(UnknownLogLevel("verbose".to_string()))
        );
    }
}
