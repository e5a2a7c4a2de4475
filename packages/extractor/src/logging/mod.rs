//! Logging Module
//!
//! Leveled diagnostics for extraction runs. Every line goes to stderr so
//! that stdout stays reserved for the JSON document.

pub mod src;

pub use src::*;

#[cfg(test)]
mod test;
