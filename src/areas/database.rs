//! Commit store
//!
//! Holds every commit ever created, keyed by id, together with the most
//! recent committed version of each path. The latter only serves status
//! classification; reconstruction of a working tree always walks the
//! ancestor chain instead.

use crate::artifacts::log::rev_list::RevList;
use crate::artifacts::objects::commit::Commit;
use crate::artifacts::objects::commit_file::CommitFile;
use crate::artifacts::objects::commit_id::CommitId;
use crate::errors::RepositoryError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Database {
    commits: BTreeMap<CommitId, Commit>,
    latest_versions: BTreeMap<PathBuf, CommitFile>,
}

impl Database {
    pub fn is_empty(&self) -> bool {
        self.commits.is_empty()
    }

    pub fn len(&self) -> usize {
        self.commits.len()
    }

    pub fn contains(&self, commit_id: &str) -> bool {
        self.commits.contains_key(commit_id)
    }

    /// Pick a fresh random id, regenerating on collision with a stored commit
    pub fn allocate_id(&self) -> CommitId {
        loop {
            let commit_id = CommitId::generate();
            if !self.contains(commit_id.as_ref()) {
                return commit_id;
            }
            log::debug!("commit id {} already taken, regenerating", commit_id);
        }
    }

    pub fn store(&mut self, commit: Commit) -> anyhow::Result<()> {
        if self.commits.contains_key(commit.id()) {
            anyhow::bail!("commit {} already exists", commit.id());
        }

        self.commits.insert(commit.id().clone(), commit);
        Ok(())
    }

    pub fn parse_commit(&self, commit_id: &str) -> Option<&Commit> {
        self.commits.get(commit_id)
    }

    /// Look up a commit that is referenced from inside the repository
    ///
    /// A miss here means a branch, the head or a parent link is dangling.
    pub fn load_commit(&self, commit_id: &CommitId) -> anyhow::Result<&Commit> {
        self.commits.get(commit_id).ok_or_else(|| {
            RepositoryError::DanglingCommit {
                id: commit_id.clone(),
            }
            .into()
        })
    }

    pub fn latest_version(&self, path: &Path) -> Option<&CommitFile> {
        self.latest_versions.get(path)
    }

    pub fn record_latest_version(&mut self, file: CommitFile) {
        self.latest_versions.insert(file.path().to_path_buf(), file);
    }

    /// Ancestor chain of `start`, newest first, `start` included
    pub fn rev_list(&self, start: Option<CommitId>) -> RevList<'_> {
        RevList::new(self, start)
    }
}
