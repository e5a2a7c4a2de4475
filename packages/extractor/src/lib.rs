#![deny(clippy::all)]

/**
 * ts-class-meta
 *
 * Extracts structural metadata of TypeScript class declarations
 */
use oxc_allocator::Allocator;

pub mod error;
pub mod loader;
pub mod logging;
pub mod metadata;
pub mod reflection;
pub mod serializer;

pub use error::{MetadataError, Result};
pub use loader::SourceFile;
pub use metadata::{ClassExtractor, ClassRecord, ClassRole};

use logging::Logger;
use reflection::TypeScriptReflectionHost;

/// Parse `source` and extract one record per top-level class declaration.
pub fn extract_source(source: &SourceFile, logger: &dyn Logger) -> Result<Vec<ClassRecord>> {
    let allocator = Allocator::default();
    let program = source.parse(&allocator)?;
    let host = TypeScriptReflectionHost::new(source.text());

    let records = ClassExtractor::new(logger).extract(&host, &program);
    logger.debug(&format!(
        "extracted {} class(es) from {}",
        records.len(),
        source.path().display()
    ));
    Ok(records)
}

/// Load `path` from disk and extract its class metadata.
pub fn extract_file(path: impl AsRef<std::path::Path>, logger: &dyn Logger) -> Result<Vec<ClassRecord>> {
    let source = SourceFile::load(path)?;
    extract_source(&source, logger)
}

/// Library version
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
