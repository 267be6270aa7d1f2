use crate::areas::repository::Repository;
use crate::artifacts::branch::branch_name::BranchName;
use crate::artifacts::branch::head::Head;
use crate::artifacts::objects::commit::Commit;
use crate::artifacts::objects::commit_file::CommitFile;
use crate::artifacts::objects::commit_id::CommitId;
use crate::artifacts::status::file_state::FileState;
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommitOutcome {
    Committed { id: CommitId, root: bool },
    /// Head points straight at a commit
    DetachedHead,
    NothingToCommit,
    /// Head names a branch that is not in the branch table
    NotOnBranch,
}

impl CommitOutcome {
    pub fn is_committed(&self) -> bool {
        matches!(self, CommitOutcome::Committed { .. })
    }
}

impl std::fmt::Display for CommitOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CommitOutcome::Committed { .. } => write!(f, "commit performed successfully"),
            CommitOutcome::DetachedHead => write!(
                f,
                "We are on commit but must be on the branch to make commit"
            ),
            CommitOutcome::NothingToCommit => write!(f, "Nothing to commit"),
            CommitOutcome::NotOnBranch => write!(f, "must commit only to branch"),
        }
    }
}

impl Repository {
    pub fn commit(&mut self, message: &str) -> anyhow::Result<CommitOutcome> {
        if self.refs().head().is_some_and(Head::is_detached) {
            return Ok(CommitOutcome::DetachedHead);
        }

        let file_states = self.info()?;
        if file_states.iter().all(FileState::is_committed) {
            return Ok(CommitOutcome::NothingToCommit);
        }

        let parent = match (self.refs().head(), self.refs().current_branch()) {
            (None, _) => None,
            (Some(_), Some(branch)) => Some(branch.commit_id().clone()),
            (Some(_), None) => return Ok(CommitOutcome::NotOnBranch),
        };

        let commit_id = self.database().allocate_id();
        let files = file_states
            .iter()
            .filter(|file_state| !file_state.is_committed())
            .map(|file_state| self.capture_file(&file_state.path, &commit_id))
            .collect::<anyhow::Result<Vec<_>>>()?;

        let timestamp = self.touch_last_commit_time();
        let commit = Commit::new(
            commit_id.clone(),
            message.to_string(),
            timestamp,
            parent,
            files,
        );

        let root = commit.is_root();
        let state = self.state_mut();
        for file in commit.files() {
            state.database.record_latest_version(file.clone());
        }
        log::info!(
            "created commit {} ({}) with {} changed files",
            commit_id,
            commit.short_message(),
            commit.files().len()
        );
        state.database.store(commit)?;

        if state.refs.head().is_none() {
            let master = BranchName::default_branch();
            state.refs.create_branch(master.clone(), commit_id.clone())?;
            state.refs.set_head(Head::Branch(master));
        } else {
            state.refs.update_head(commit_id.clone())?;
        }

        Ok(CommitOutcome::Committed {
            id: commit_id,
            root,
        })
    }

    fn capture_file(&self, path: &Path, commit_id: &CommitId) -> anyhow::Result<CommitFile> {
        let content = self.workspace().read_lines(path)?;
        let modified_time = self.workspace().modified_time(path)?;

        Ok(CommitFile::new(
            path.to_path_buf(),
            commit_id.clone(),
            content,
            modified_time,
        ))
    }
}
