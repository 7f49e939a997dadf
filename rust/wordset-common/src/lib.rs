//! Core definitions (error types and result aliases), relied upon by all wordset-* crates.

pub mod error;
pub mod result;

pub use result::Result;
