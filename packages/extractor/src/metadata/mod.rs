//! Metadata Module
//!
//! Class metadata records and the extractor that builds them from a parsed
//! program.

pub mod src;

pub use src::*;
