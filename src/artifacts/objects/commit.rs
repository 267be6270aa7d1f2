//! Commit object
//!
//! A commit records the files that changed since their last committed state
//! (a delta, not a snapshot) and links to at most one parent. Following the
//! parent links from any commit yields a linear ancestor chain ending at the
//! root commit.
//!
//! Commits are immutable once stored.

use crate::artifacts::objects::commit_file::CommitFile;
use crate::artifacts::objects::commit_id::CommitId;
use chrono::{DateTime, Utc};
use derive_new::new;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, new)]
pub struct Commit {
    id: CommitId,
    message: String,
    timestamp: DateTime<Utc>,
    parent: Option<CommitId>,
    files: Vec<CommitFile>,
}

impl Commit {
    pub fn id(&self) -> &CommitId {
        &self.id
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// First line of the message
    pub fn short_message(&self) -> String {
        self.message.lines().next().unwrap_or_default().to_string()
    }

    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    pub fn parent(&self) -> Option<&CommitId> {
        self.parent.as_ref()
    }

    pub fn files(&self) -> &[CommitFile] {
        &self.files
    }

    pub fn paths(&self) -> impl Iterator<Item = &Path> {
        self.files.iter().map(CommitFile::path)
    }

    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }
}

/// Entry of the commit history as returned by `log`
#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct CommitMessage {
    pub id: CommitId,
    pub message: String,
}

impl From<&Commit> for CommitMessage {
    fn from(commit: &Commit) -> Self {
        CommitMessage::new(commit.id().clone(), commit.message().to_string())
    }
}

impl std::fmt::Display for CommitMessage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.id, self.message)
    }
}
