//! Persistence of the repository state
//!
//! The whole state is kept as one JSON document in the working directory.
//! The file name starts with a dot, so the default ignore pattern keeps it
//! out of the tracked files.
//!
//! ## Locking
//!
//! Writes hold an exclusive lock and reads a shared lock on the state file,
//! so two writers never interleave their content. The file is truncated
//! before the lock is taken, so a reader racing a writer may still see an
//! empty or partial document.

use crate::areas::repository::RepositoryState;
use anyhow::Context;
use derive_new::new;
use file_guard::Lock;
use std::io::{Read, Write};
use std::ops::DerefMut;
use std::path::Path;

/// Default name of the state file
pub const STATE_FILE_NAME: &str = ".dit";

#[derive(Debug, new)]
pub struct Storage {
    /// Path to the state file
    path: Box<Path>,
}

impl Storage {
    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Read the persisted state, or a fresh empty one if nothing was saved yet
    pub fn load(&self) -> anyhow::Result<RepositoryState> {
        if !self.path.exists() {
            log::debug!("no state file at {:?}, starting empty", self.path);
            return Ok(RepositoryState::default());
        }

        let mut file = std::fs::File::open(&self.path)
            .with_context(|| format!("failed to open state file at {:?}", self.path))?;
        let mut lock = file_guard::lock(&mut file, Lock::Shared, 0, 1)?;

        let mut content = String::new();
        lock.deref_mut()
            .read_to_string(&mut content)
            .with_context(|| format!("failed to read state file at {:?}", self.path))?;

        let state = serde_json::from_str(&content)
            .with_context(|| format!("corrupted state file at {:?}", self.path))?;
        log::debug!("loaded repository state from {:?}", self.path);

        Ok(state)
    }

    pub fn save(&self, state: &RepositoryState) -> anyhow::Result<()> {
        let content = serde_json::to_string_pretty(state)?;

        let mut file = std::fs::OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(&self.path)
            .with_context(|| format!("failed to open state file at {:?}", self.path))?;
        let mut lock = file_guard::lock(&mut file, Lock::Exclusive, 0, 1)?;
        lock.deref_mut()
            .write_all(content.as_bytes())
            .with_context(|| format!("failed to write state file at {:?}", self.path))?;

        log::debug!("saved repository state to {:?}", self.path);
        Ok(())
    }
}
