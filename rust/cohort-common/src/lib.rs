//! Core definitions (error types and verification helpers), relied upon by all cohort-* crates.

pub mod error;
pub mod result;

pub use result::Result;

#[cfg(test)]
mod tests;
