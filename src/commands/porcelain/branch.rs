use crate::areas::repository::Repository;
use crate::artifacts::branch::branch::BranchEntry;
use crate::artifacts::branch::branch_name::BranchName;
use crate::artifacts::branch::head::Head;
use crate::errors::RepositoryError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CreateBranchOutcome {
    Created,
    NoCommits,
    AlreadyExists,
}

impl std::fmt::Display for CreateBranchOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CreateBranchOutcome::Created => write!(f, "branch created successfully"),
            CreateBranchOutcome::NoCommits => {
                write!(f, "Branch may be created only for existing commit")
            }
            CreateBranchOutcome::AlreadyExists => write!(f, "Branch already exists"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenameBranchOutcome {
    Renamed,
    UnknownBranch(String),
    AlreadyExists(String),
}

impl std::fmt::Display for RenameBranchOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RenameBranchOutcome::Renamed => write!(f, "branch renamed successfully"),
            RenameBranchOutcome::UnknownBranch(name) => write!(f, "{} doesn't exists", name),
            RenameBranchOutcome::AlreadyExists(name) => write!(f, "{} is already exists", name),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeleteBranchOutcome {
    Deleted,
    UnknownBranch,
    /// The branch is the current head
    Active,
    LastBranch,
}

impl std::fmt::Display for DeleteBranchOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DeleteBranchOutcome::Deleted => write!(f, "branch deleted successfully"),
            DeleteBranchOutcome::UnknownBranch => write!(f, "branch doesn't exists"),
            DeleteBranchOutcome::Active => {
                write!(f, "this branch is active it couldn't be deleted")
            }
            DeleteBranchOutcome::LastBranch => write!(f, "should be at least one branch"),
        }
    }
}

impl Repository {
    /// Create a branch at the commit resolved by head and move head onto it
    pub fn create_branch(&mut self, branch_name: &str) -> anyhow::Result<CreateBranchOutcome> {
        let branch_name = Self::parse_branch_name(branch_name)?;

        if self.database().is_empty() {
            return Ok(CreateBranchOutcome::NoCommits);
        }
        if self.refs().branch(branch_name.as_ref()).is_some() {
            return Ok(CreateBranchOutcome::AlreadyExists);
        }

        let source_id = self
            .refs()
            .read_head()?
            .ok_or_else(|| anyhow::anyhow!("no current HEAD to branch from"))?;
        self.database().load_commit(&source_id)?;

        let refs = &mut self.state_mut().refs;
        refs.create_branch(branch_name.clone(), source_id.clone())?;
        refs.set_head(Head::Branch(branch_name.clone()));
        log::info!("created branch {} at {}", branch_name, source_id);

        Ok(CreateBranchOutcome::Created)
    }

    pub fn rename_branch(
        &mut self,
        old_name: &str,
        new_name: &str,
    ) -> anyhow::Result<RenameBranchOutcome> {
        if self.refs().branch(old_name).is_none() {
            return Ok(RenameBranchOutcome::UnknownBranch(old_name.to_string()));
        }

        let new_name = Self::parse_branch_name(new_name)?;
        if self.refs().branch(new_name.as_ref()).is_some() {
            return Ok(RenameBranchOutcome::AlreadyExists(new_name.to_string()));
        }

        log::info!("renaming branch {} to {}", old_name, new_name);
        self.state_mut().refs.rename_branch(old_name, new_name)?;

        Ok(RenameBranchOutcome::Renamed)
    }

    pub fn delete_branch(&mut self, branch_name: &str) -> anyhow::Result<DeleteBranchOutcome> {
        if self.refs().branch(branch_name).is_none() {
            return Ok(DeleteBranchOutcome::UnknownBranch);
        }
        if self.refs().is_current_branch(branch_name) {
            return Ok(DeleteBranchOutcome::Active);
        }
        if self.refs().len() == 1 {
            return Ok(DeleteBranchOutcome::LastBranch);
        }

        let branch = self.state_mut().refs.delete_branch(branch_name)?;
        log::info!("deleted branch {} (was {})", branch.name(), branch.commit_id());

        Ok(DeleteBranchOutcome::Deleted)
    }

    pub fn branches(&self) -> Vec<BranchEntry> {
        self.refs().list_branches()
    }

    fn parse_branch_name(branch_name: &str) -> anyhow::Result<BranchName> {
        BranchName::try_parse(branch_name).map_err(|_| {
            RepositoryError::InvalidBranchName {
                name: branch_name.to_string(),
            }
            .into()
        })
    }
}
