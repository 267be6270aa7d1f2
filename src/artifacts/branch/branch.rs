use crate::artifacts::branch::branch_name::BranchName;
use crate::artifacts::objects::commit_id::CommitId;
use derive_new::new;
use serde::{Deserialize, Serialize};

/// Movable pointer to the latest commit of a line of history
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, new)]
pub struct Branch {
    name: BranchName,
    commit_id: CommitId,
}

impl Branch {
    pub fn name(&self) -> &BranchName {
        &self.name
    }

    pub fn commit_id(&self) -> &CommitId {
        &self.commit_id
    }

    pub(crate) fn advance(&mut self, commit_id: CommitId) {
        self.commit_id = commit_id;
    }

    pub(crate) fn rename(&mut self, name: BranchName) {
        self.name = name;
    }
}

/// Branch listing entry, the active branch is marked with `*`
#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct BranchEntry {
    pub name: BranchName,
    pub commit_id: CommitId,
    pub is_active: bool,
}

impl std::fmt::Display for BranchEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_active {
            write!(f, "{}*", self.name)
        } else {
            write!(f, "{}", self.name)
        }
    }
}
