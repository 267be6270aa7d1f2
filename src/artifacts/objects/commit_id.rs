//! Commit identifier
//!
//! Commit ids are short random hexadecimal strings. They are not content
//! hashes: two commits with identical files still get distinct ids.
//!
//! ## Format
//!
//! 8 lowercase hex characters taken from a freshly generated v4 UUID
//! (e.g. `3f9a01c2`).

use crate::artifacts::objects::COMMIT_ID_LENGTH;
use serde::{Deserialize, Serialize};
use std::borrow::Borrow;

/// Short random commit identifier
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CommitId(String);

impl CommitId {
    /// Generate a new random id
    ///
    /// Uniqueness is not guaranteed here; the caller retries on collision
    /// against the ids it already knows about.
    pub fn generate() -> Self {
        let uuid = uuid::Uuid::new_v4().simple().to_string();
        Self(uuid[..COMMIT_ID_LENGTH].to_string())
    }

    /// Parse and validate a commit id supplied by a caller
    pub fn try_parse(id: &str) -> anyhow::Result<Self> {
        if id.len() != COMMIT_ID_LENGTH {
            anyhow::bail!("Invalid commit ID length: {}", id.len());
        }
        if !id.chars().all(|c| c.is_ascii_hexdigit()) {
            anyhow::bail!("Invalid commit ID characters: {}", id);
        }
        Ok(Self(id.to_ascii_lowercase()))
    }
}

impl AsRef<str> for CommitId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for CommitId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for CommitId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
