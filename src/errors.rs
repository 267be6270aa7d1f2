//! Typed repository failures
//!
//! Facade operations return `anyhow::Result`; the failures listed here are
//! raised as [`RepositoryError`] so callers can tell them apart with
//! `downcast_ref`. Expected, user-correctable situations (nothing to commit,
//! uncommitted changes, duplicate branch names, ...) are not errors: they are
//! reported through the outcome enums of each command.

use crate::artifacts::objects::commit_id::CommitId;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RepositoryError {
    // Validation errors
    #[error("{pattern} wrong regex: {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error("wrong name of branch: {name}")]
    InvalidBranchName { name: String },

    #[error("no commit or branch with the name {name}")]
    UnknownTarget { name: String },

    #[error("{id} doesn't exists")]
    UnknownCommit { id: String },

    // State consistency errors
    #[error("no commit with the name {id}")]
    DanglingCommit { id: CommitId },

    #[error("head references unknown branch {name}")]
    DanglingBranch { name: String },
}
