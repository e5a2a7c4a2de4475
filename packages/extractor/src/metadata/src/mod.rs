//! Metadata Source

pub mod extractor;
pub mod model;
pub mod roles;

pub use extractor::{ClassExtractor, IMPLICIT_TYPE};
pub use model::*;
pub use roles::ClassRole;
