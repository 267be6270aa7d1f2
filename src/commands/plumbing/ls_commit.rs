use crate::areas::repository::Repository;
use crate::artifacts::objects::commit_id::CommitId;
use crate::errors::RepositoryError;
use std::path::PathBuf;

impl Repository {
    /// Paths recorded in a single commit's delta
    ///
    /// This is not the full tree at that commit, only the files the commit
    /// itself captured. Ids are matched case-insensitively.
    pub fn commit_content(&self, commit_id: &str) -> anyhow::Result<Vec<PathBuf>> {
        let commit = CommitId::try_parse(commit_id)
            .ok()
            .and_then(|id| self.database().parse_commit(id.as_ref()))
            .ok_or_else(|| {
                RepositoryError::UnknownCommit {
                    id: commit_id.to_string(),
                }
            })?;

        Ok(commit.paths().map(|path| path.to_path_buf()).collect())
    }
}
