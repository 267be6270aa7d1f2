//! Runtime configuration
//!
//! Resolved from the command line and the environment:
//!
//! - `DIT_DIR`: working directory to track (defaults to the current directory,
//!   overridden by `-C <dir>`)
//! - `DIT_STATE_FILE`: file name of the persisted state inside the working
//!   directory (defaults to `.dit`)

use crate::areas::storage::{STATE_FILE_NAME, Storage};
use std::path::{Path, PathBuf};

pub const WORK_DIR_ENV: &str = "DIT_DIR";
pub const STATE_FILE_ENV: &str = "DIT_STATE_FILE";

#[derive(Debug, Clone)]
pub struct Config {
    work_dir: PathBuf,
    state_file_name: String,
}

impl Config {
    pub fn load(work_dir: Option<PathBuf>) -> anyhow::Result<Self> {
        let work_dir = match work_dir.or_else(|| std::env::var_os(WORK_DIR_ENV).map(PathBuf::from)) {
            Some(work_dir) => work_dir,
            None => std::env::current_dir()?,
        };

        let state_file_name =
            std::env::var(STATE_FILE_ENV).unwrap_or_else(|_| STATE_FILE_NAME.to_string());
        Self::validate_state_file_name(&state_file_name)?;

        Ok(Config {
            work_dir,
            state_file_name,
        })
    }

    pub fn work_dir(&self) -> &Path {
        &self.work_dir
    }

    pub fn state_file(&self) -> PathBuf {
        self.work_dir.join(&self.state_file_name)
    }

    pub fn storage(&self) -> Storage {
        Storage::new(self.state_file().into_boxed_path())
    }

    fn validate_state_file_name(name: &str) -> anyhow::Result<()> {
        if name.is_empty() || name.contains(['/', '\\']) {
            anyhow::bail!("invalid state file name: {:?}", name);
        }
        if !name.starts_with('.') {
            log::warn!(
                "state file {} is not dot-prefixed and will be tracked unless ignored",
                name
            );
        }

        Ok(())
    }
}
