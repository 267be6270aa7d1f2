//! Working directory status
//!
//! - `file_state`: per-file status (UNTRACKED, MODIFIED, COMMITTED)
//! - `inspector`: classification of a file against the commit history

pub mod file_state;
pub mod inspector;
