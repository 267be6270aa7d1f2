//! dit: a small single-user version control engine
//!
//! The working directory (top level only) is tracked through delta commits
//! along linear per-branch histories. Any commit or branch can be checked
//! out again; its files are rebuilt from the deltas of its ancestor chain.
//!
//! [`areas::repository::Repository`] is the entry point: every operation is
//! a method on it (see [`commands`]).

pub mod areas;
pub mod artifacts;
pub mod commands;
pub mod config;
pub mod errors;
