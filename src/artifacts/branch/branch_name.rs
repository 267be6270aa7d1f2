use crate::artifacts::branch::VALID_BRANCH_NAME_REGEX;
use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::borrow::Borrow;

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BranchName(String);

impl BranchName {
    pub fn try_parse(name: &str) -> anyhow::Result<Self> {
        if name.is_empty() {
            anyhow::bail!("branch name cannot be empty");
        }

        let re = regex::Regex::new(VALID_BRANCH_NAME_REGEX)
            .with_context(|| format!("invalid branch name regex: {VALID_BRANCH_NAME_REGEX}"))?;

        if re.is_match(name) {
            Ok(Self(name.to_string()))
        } else {
            anyhow::bail!("invalid branch name: {}", name);
        }
    }

    pub(crate) fn default_branch() -> Self {
        Self(super::DEFAULT_BRANCH_NAME.to_string())
    }
}

impl AsRef<str> for BranchName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for BranchName {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for BranchName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
