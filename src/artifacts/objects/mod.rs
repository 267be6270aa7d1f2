//! Commit data model
//!
//! - **Commit**: message, timestamp, optional parent and the delta of files
//!   that changed since their last committed state
//! - **CommitFile**: one file version (path, text lines, modification time)
//! - **CommitId**: short random identifier of a commit

pub mod commit;
pub mod commit_file;
pub mod commit_id;

/// Number of hex characters in a commit id
pub const COMMIT_ID_LENGTH: usize = 8;
