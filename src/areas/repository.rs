use crate::areas::database::Database;
use crate::areas::refs::Refs;
use crate::areas::workspace::Workspace;
use crate::artifacts::ignore::ignore_filter::IgnoreFilter;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Everything that survives between two runs
///
/// This is the opaque blob handed to the persistence layer; it round-trips
/// the head, branches, commits, latest file versions, ignore patterns and
/// the last commit time.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepositoryState {
    pub(crate) refs: Refs,
    pub(crate) database: Database,
    pub(crate) ignore_filter: IgnoreFilter,
    pub(crate) last_commit_time: Option<DateTime<Utc>>,
}

pub struct Repository {
    workspace: Workspace,
    state: RepositoryState,
}

impl Repository {
    /// Open an empty repository over the directory at `path`
    pub fn new(path: &Path) -> anyhow::Result<Self> {
        Self::with_state(path, RepositoryState::default())
    }

    /// Open a repository over `path` from previously persisted state
    pub fn with_state(path: &Path, state: RepositoryState) -> anyhow::Result<Self> {
        let path = path.canonicalize()?;

        if !path.is_dir() {
            anyhow::bail!("The specified path is not a directory: {:?}", path);
        }

        Ok(Repository {
            workspace: Workspace::new(path.into_boxed_path()),
            state,
        })
    }

    pub fn path(&self) -> &Path {
        self.workspace.path()
    }

    pub fn workspace(&self) -> &Workspace {
        &self.workspace
    }

    pub fn database(&self) -> &Database {
        &self.state.database
    }

    pub fn refs(&self) -> &Refs {
        &self.state.refs
    }

    pub fn ignore_filter(&self) -> &IgnoreFilter {
        &self.state.ignore_filter
    }

    pub fn last_commit_time(&self) -> Option<DateTime<Utc>> {
        self.state.last_commit_time
    }

    pub fn state(&self) -> &RepositoryState {
        &self.state
    }

    pub fn into_state(self) -> RepositoryState {
        self.state
    }

    pub(crate) fn state_mut(&mut self) -> &mut RepositoryState {
        &mut self.state
    }

    /// Reset the status baseline: everything on disk now counts as committed
    /// unless it is touched again
    pub(crate) fn touch_last_commit_time(&mut self) -> DateTime<Utc> {
        let now = Utc::now();
        self.state.last_commit_time = Some(now);
        now
    }
}
