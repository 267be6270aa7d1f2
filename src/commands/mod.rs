//! Command implementations
//!
//! - `plumbing`: Low-level inspection of stored commits
//! - `porcelain`: User-facing version control workflows
//!
//! Every command is an `impl Repository` block, so the repository itself is
//! the facade callers talk to.

pub mod plumbing;
pub mod porcelain;
