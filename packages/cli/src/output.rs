// Output Sink
//
// Delivers the serialized document either to a file or to stdout.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use crate::config::ExtractConfig;
use crate::error::CliError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputSink {
    Stdout,
    File(PathBuf),
}

impl OutputSink {
    pub fn from_config(config: &ExtractConfig) -> Self {
        match config.output_path() {
            Some(path) => OutputSink::File(path.to_path_buf()),
            None => OutputSink::Stdout,
        }
    }

    pub fn write(&self, json: &str) -> Result<(), CliError> {
        let stdout = io::stdout();
        self.write_to(json, &mut stdout.lock())
    }

    /// File mode writes `json` exactly and reports the destination on
    /// `stdout`. Stdout mode prints `json` followed by a newline.
    pub fn write_to<W: Write>(&self, json: &str, stdout: &mut W) -> Result<(), CliError> {
        match self {
            OutputSink::File(path) => {
                fs::write(path, json).map_err(|source| write_error(path, source))?;
                writeln!(stdout, "Class metadata written to {}", path.display())
                    .map_err(|source| write_error(Path::new("<stdout>"), source))
            }
            OutputSink::Stdout => writeln!(stdout, "{json}")
                .and_then(|_| stdout.flush())
                .map_err(|source| write_error(Path::new("<stdout>"), source)),
        }
    }
}

fn write_error(path: &Path, source: io::Error) -> CliError {
    CliError::Write {
        path: path.to_path_buf(),
        source,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const JSON: &str = "[\n  {\n    \"name\": \"Foo\"\n  }\n]";

    #[test]
    fn should_select_sink_from_config() {
        assert_eq!(OutputSink::from_config(&ExtractConfig::new("a.ts")), OutputSink::Stdout);
        assert_eq!(
            OutputSink::from_config(&ExtractConfig::new("a.ts").with_output("b.json")),
            OutputSink::File(PathBuf::from("b.json"))
        );
    }

    #[test]
    fn should_print_json_with_trailing_newline() {
        let mut stdout = Vec::new();
        OutputSink::Stdout.write_to(JSON, &mut stdout).unwrap();
        assert_eq!(String::from_utf8(stdout).unwrap(), format!("{JSON}\n"));
    }

    #[test]
    fn should_write_file_and_confirm() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("meta.json");
        std::fs::write(&path, "stale").unwrap();

        let mut stdout = Vec::new();
        OutputSink::File(path.clone()).write_to(JSON, &mut stdout).unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), JSON);
        assert_eq!(
            String::from_utf8(stdout).unwrap(),
            format!("Class metadata written to {}\n", path.display())
        );
    }

    #[test]
    fn should_report_unwritable_destination() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("missing").join("meta.json");

        let mut stdout = Vec::new();
        let err = OutputSink::File(path.clone()).write_to(JSON, &mut stdout).unwrap_err();

        assert_eq!(err.exit_code(), 3);
        assert!(matches!(err, CliError::Write { path: ref p, .. } if *p == path));
        assert!(stdout.is_empty());
    }
}
