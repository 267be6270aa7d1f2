//! Plumbing commands (low-level access to repository data)
//!
//! ## Commands
//!
//! - `ls-commit`: List the paths stored in one commit

pub mod ls_commit;
