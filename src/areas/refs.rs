//! Branch table and head pointer
//!
//! Branches are movable pointers to commits, kept sorted by name. The head
//! is either attached to one of them or detached at a commit id.
//!
//! The table enforces only its own bookkeeping (unique names, existing
//! entries). Rules that depend on the rest of the repository, such as
//! refusing to delete the active branch, are checked by the branch command.

use crate::artifacts::branch::branch::{Branch, BranchEntry};
use crate::artifacts::branch::branch_name::BranchName;
use crate::artifacts::branch::head::Head;
use crate::artifacts::objects::commit_id::CommitId;
use crate::errors::RepositoryError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Refs {
    head: Option<Head>,
    branches: BTreeMap<BranchName, Branch>,
}

impl Refs {
    pub fn head(&self) -> Option<&Head> {
        self.head.as_ref()
    }

    pub fn set_head(&mut self, head: Head) {
        self.head = Some(head);
    }

    /// Resolve the head to the commit it designates
    ///
    /// # Returns
    ///
    /// None when there is no head yet, an error when the head names a branch
    /// that is not in the table
    pub fn read_head(&self) -> anyhow::Result<Option<CommitId>> {
        match &self.head {
            None => Ok(None),
            Some(Head::Detached(commit_id)) => Ok(Some(commit_id.clone())),
            Some(Head::Branch(name)) => self
                .branches
                .get(name)
                .map(|branch| Some(branch.commit_id().clone()))
                .ok_or_else(|| {
                    RepositoryError::DanglingBranch {
                        name: name.to_string(),
                    }
                    .into()
                }),
        }
    }

    pub fn is_current_branch(&self, name: &str) -> bool {
        self.head
            .as_ref()
            .and_then(Head::branch_name)
            .is_some_and(|current| current.as_ref() == name)
    }

    /// The branch the head is attached to, if it exists
    pub fn current_branch(&self) -> Option<&Branch> {
        self.head
            .as_ref()
            .and_then(Head::branch_name)
            .and_then(|name| self.branches.get(name))
    }

    pub fn branch(&self, name: &str) -> Option<&Branch> {
        self.branches.get(name)
    }

    pub fn len(&self) -> usize {
        self.branches.len()
    }

    pub fn is_empty(&self) -> bool {
        self.branches.is_empty()
    }

    pub fn create_branch(&mut self, name: BranchName, commit_id: CommitId) -> anyhow::Result<()> {
        if self.branches.contains_key(&name) {
            anyhow::bail!("branch {} already exists", name);
        }

        self.branches
            .insert(name.clone(), Branch::new(name, commit_id));
        Ok(())
    }

    /// Move the branch the head is attached to
    pub fn update_head(&mut self, commit_id: CommitId) -> anyhow::Result<()> {
        let name = match &self.head {
            Some(Head::Branch(name)) => name.clone(),
            Some(Head::Detached(_)) => anyhow::bail!("cannot advance a detached head"),
            None => anyhow::bail!("no current HEAD to advance"),
        };

        let branch = self
            .branches
            .get_mut(&name)
            .ok_or_else(|| RepositoryError::DanglingBranch {
                name: name.to_string(),
            })?;
        branch.advance(commit_id);

        Ok(())
    }

    /// Re-key a branch, keeping its commit pointer and following it with the head
    pub fn rename_branch(&mut self, old_name: &str, new_name: BranchName) -> anyhow::Result<()> {
        if self.branches.contains_key(&new_name) {
            anyhow::bail!("branch {} already exists", new_name);
        }

        let mut branch = self
            .branches
            .remove(old_name)
            .ok_or_else(|| anyhow::anyhow!("branch {} does not exist", old_name))?;
        branch.rename(new_name.clone());
        self.branches.insert(new_name.clone(), branch);

        if self.is_current_branch(old_name) {
            self.head = Some(Head::Branch(new_name));
        }

        Ok(())
    }

    pub fn delete_branch(&mut self, name: &str) -> anyhow::Result<Branch> {
        self.branches
            .remove(name)
            .ok_or_else(|| anyhow::anyhow!("branch {} does not exist", name))
    }

    pub fn list_branches(&self) -> Vec<BranchEntry> {
        self.branches
            .values()
            .map(|branch| {
                BranchEntry::new(
                    branch.name().clone(),
                    branch.commit_id().clone(),
                    self.is_current_branch(branch.name().as_ref()),
                )
            })
            .collect()
    }
}
