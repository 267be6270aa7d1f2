use crate::areas::repository::Repository;
use crate::artifacts::branch::head::Head;
use crate::artifacts::checkout::migration::Migration;
use crate::artifacts::objects::commit_id::CommitId;
use crate::errors::RepositoryError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SwitchOutcome {
    Switched { name: String, detached: bool },
    /// The target is what head already resolves to
    AlreadyThere(String),
    UncommittedChanges,
}

impl std::fmt::Display for SwitchOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SwitchOutcome::Switched { name, .. } => write!(f, "Switched to {}", name),
            SwitchOutcome::AlreadyThere(name) => {
                write!(f, "{} is the same commit as current", name)
            }
            SwitchOutcome::UncommittedChanges => write!(f, "make commit before switching"),
        }
    }
}

impl Repository {
    /// Restore the working directory to a branch or commit and move head there
    ///
    /// Branch names take precedence over commit ids. Nothing on disk is
    /// touched unless the switch actually happens.
    pub fn switch_to(&mut self, target: &str) -> anyhow::Result<SwitchOutcome> {
        let (target_head, target_id) = self.resolve_target(target)?;
        let current_id = self.refs().read_head()?;

        let is_current_head = self.refs().head().is_some_and(|head| head.name() == target);
        if current_id.as_ref() == Some(&target_id) || is_current_head {
            return Ok(SwitchOutcome::AlreadyThere(target.to_string()));
        }

        let file_states = self.info()?;
        if file_states.iter().any(|file_state| !file_state.is_committed()) {
            return Ok(SwitchOutcome::UncommittedChanges);
        }

        let tracked_files = file_states
            .into_iter()
            .map(|file_state| file_state.path)
            .collect::<Vec<_>>();

        let mut migration = Migration::new(self.workspace(), self.database());
        migration.plan_changes(tracked_files, &target_id)?;
        migration.apply_changes()?;

        let detached = target_head.is_detached();
        log::info!("switched to {} at {}", target, target_id);
        self.state_mut().refs.set_head(target_head);
        self.touch_last_commit_time();

        Ok(SwitchOutcome::Switched {
            name: target.to_string(),
            detached,
        })
    }

    fn resolve_target(&self, target: &str) -> anyhow::Result<(Head, CommitId)> {
        if let Some(branch) = self.refs().branch(target) {
            let commit = self.database().load_commit(branch.commit_id())?;
            return Ok((Head::Branch(branch.name().clone()), commit.id().clone()));
        }

        match self.database().parse_commit(target) {
            Some(commit) => Ok((Head::Detached(commit.id().clone()), commit.id().clone())),
            None => Err(RepositoryError::UnknownTarget {
                name: target.to_string(),
            }
            .into()),
        }
    }
}
