//! Reconstruction of a working tree from the commit history
//!
//! Commits only store the files that changed, so the full content of the
//! target commit is rebuilt by walking its ancestor chain from newest to
//! oldest. The first version met for a path is the most recent one and wins;
//! older versions of the same path are skipped.
//!
//! The migration is planned first (pure walk over the database) and then
//! applied to the workspace: every tracked file is removed, then the planned
//! versions are written with their recorded modification times.
//!
//! ## Failure
//!
//! A file system error aborts the migration where it happened. Files removed
//! or written up to that point stay as they are.

use crate::areas::database::Database;
use crate::areas::workspace::Workspace;
use crate::artifacts::objects::commit_file::CommitFile;
use crate::artifacts::objects::commit_id::CommitId;
use std::collections::HashSet;
use std::path::{Path, PathBuf};

pub struct Migration<'r> {
    workspace: &'r Workspace,
    database: &'r Database,
    /// Files currently on disk that get removed
    removals: Vec<PathBuf>,
    /// Most recent version of every path reachable from the target
    restorations: Vec<&'r CommitFile>,
}

impl<'r> Migration<'r> {
    pub fn new(workspace: &'r Workspace, database: &'r Database) -> Self {
        Self {
            workspace,
            database,
            removals: Vec::new(),
            restorations: Vec::new(),
        }
    }

    pub fn removals(&self) -> &[PathBuf] {
        &self.removals
    }

    pub fn restorations(&self) -> &[&'r CommitFile] {
        &self.restorations
    }

    pub fn plan_changes(
        &mut self,
        tracked_files: Vec<PathBuf>,
        target: &CommitId,
    ) -> anyhow::Result<()> {
        self.removals = tracked_files;
        self.restorations = Self::collect_restorations(self.database, target, HashSet::new())?;

        log::debug!(
            "checkout of {} removes {} files and restores {} files",
            target,
            self.removals.len(),
            self.restorations.len()
        );

        Ok(())
    }

    fn collect_restorations(
        database: &'r Database,
        target: &CommitId,
        mut restored_paths: HashSet<&'r Path>,
    ) -> anyhow::Result<Vec<&'r CommitFile>> {
        let mut restorations = Vec::new();

        for commit in database.rev_list(Some(target.clone())) {
            for file in commit?.files() {
                if restored_paths.insert(file.path()) {
                    restorations.push(file);
                }
            }
        }

        Ok(restorations)
    }

    pub fn apply_changes(&self) -> anyhow::Result<()> {
        self.removals
            .iter()
            .map(|file_path| self.workspace.remove_file(file_path))
            .collect::<anyhow::Result<Vec<()>>>()?;

        self.restorations
            .iter()
            .map(|file| {
                self.workspace
                    .write_lines(file.path(), file.content(), file.modified_time())
            })
            .collect::<anyhow::Result<Vec<()>>>()?;

        Ok(())
    }
}
