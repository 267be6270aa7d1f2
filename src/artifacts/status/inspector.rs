use crate::areas::database::Database;
use crate::artifacts::status::file_state::FileStatus;
use chrono::{DateTime, Utc};
use derive_new::new;
use std::path::Path;

/// Classifies working-directory files against the commit history
///
/// The baseline is the repository-wide last commit time, not the time the
/// particular file was committed: any later commit (or switch) makes an
/// unmodified file COMMITTED again.
#[derive(Debug, new)]
pub struct Inspector<'r> {
    database: &'r Database,
    last_commit_time: Option<DateTime<Utc>>,
}

impl Inspector<'_> {
    pub fn classify(&self, path: &Path, modified_time: DateTime<Utc>) -> FileStatus {
        if self.database.latest_version(path).is_none() {
            return FileStatus::Untracked;
        }

        match self.last_commit_time {
            Some(last_commit_time) if modified_time <= last_commit_time => FileStatus::Committed,
            _ => FileStatus::Modified,
        }
    }
}
