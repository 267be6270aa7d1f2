use crate::artifacts::objects::commit_id::CommitId;
use chrono::{DateTime, Utc};
use derive_new::new;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// A file version captured by a commit
///
/// Content is kept verbatim as text lines, without line terminators. The
/// modification time is the one observed on disk at commit time and is
/// written back when the file is restored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, new)]
pub struct CommitFile {
    path: PathBuf,
    commit_id: CommitId,
    content: Vec<String>,
    modified_time: DateTime<Utc>,
}

impl CommitFile {
    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn commit_id(&self) -> &CommitId {
        &self.commit_id
    }

    pub fn content(&self) -> &[String] {
        &self.content
    }

    pub fn modified_time(&self) -> DateTime<Utc> {
        self.modified_time
    }
}
