//! Tree Loader
//!
//! Reads a source file from disk and hands it to the oxc parser. The parsed
//! `Program` borrows from both the file text and the arena, so callers keep
//! the `SourceFile` and the `Allocator` alive for as long as they walk it.

use std::fs;
use std::path::{Path, PathBuf};

use oxc_allocator::Allocator;
use oxc_ast::ast::Program;
use oxc_parser::Parser;
use oxc_span::SourceType;

use crate::error::{MetadataError, Result};

/// A source file read into memory, ready to be parsed.
#[derive(Debug, Clone)]
pub struct SourceFile {
    path: PathBuf,
    text: String,
    source_type: SourceType,
}

impl SourceFile {
    /// Read `path` from disk.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| MetadataError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self::from_text(path, text))
    }

    /// Wrap already-loaded text. The path only decides the dialect and is
    /// used in error messages.
    pub fn from_text(path: impl AsRef<Path>, text: impl Into<String>) -> Self {
        let path = path.as_ref().to_path_buf();
        // Unknown extensions are treated as plain TypeScript.
        let source_type = SourceType::from_path(&path).unwrap_or_else(|_| SourceType::ts());
        Self {
            path,
            text: text.into(),
            source_type,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn source_type(&self) -> SourceType {
        self.source_type
    }

    /// Parse the file into an oxc `Program` allocated in `allocator`.
    ///
    /// Any syntax diagnostic fails the whole file: a partially recovered tree
    /// would produce metadata that silently disagrees with the source.
    pub fn parse<'a>(&'a self, allocator: &'a Allocator) -> Result<Program<'a>> {
        let ret = Parser::new(allocator, &self.text, self.source_type).parse();

        if ret.panicked || !ret.errors.is_empty() {
            let mut diagnostics: Vec<String> =
                ret.errors.iter().map(|e| e.to_string()).collect();
            if diagnostics.is_empty() {
                diagnostics.push("parser aborted without a diagnostic".to_string());
            }
            return Err(MetadataError::Parse {
                path: self.path.clone(),
                diagnostics,
            });
        }

        Ok(ret.program)
    }
}
