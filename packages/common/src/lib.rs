//! Configuration boundary for stylegate.
//!
//! Parses user-facing target strings and feature overrides, rejects anything
//! unknown, and resolves the per-build [`BuildTargets`].

pub mod config;
pub mod error;
pub mod targets;

pub use config::*;
pub use error::*;
pub use targets::*;
