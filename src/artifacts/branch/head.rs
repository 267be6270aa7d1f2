use crate::artifacts::branch::branch_name::BranchName;
use crate::artifacts::objects::commit_id::CommitId;
use serde::{Deserialize, Serialize};

/// Current checkout pointer
///
/// Either attached to a branch (commits advance the branch) or detached at a
/// commit (read-only, commits are refused).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Head {
    Branch(BranchName),
    Detached(CommitId),
}

impl Head {
    pub fn is_detached(&self) -> bool {
        matches!(self, Head::Detached(_))
    }

    pub fn branch_name(&self) -> Option<&BranchName> {
        match self {
            Head::Branch(name) => Some(name),
            Head::Detached(_) => None,
        }
    }

    /// The raw name the head was set from
    pub fn name(&self) -> &str {
        match self {
            Head::Branch(name) => name.as_ref(),
            Head::Detached(oid) => oid.as_ref(),
        }
    }
}

impl std::fmt::Display for Head {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Head::Branch(name) => write!(f, "branch name {}", name),
            Head::Detached(oid) => write!(f, "commit name {}", oid),
        }
    }
}
