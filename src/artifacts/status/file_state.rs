use colored::Colorize;
use derive_new::new;
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FileStatus {
    /// No version of the path was ever committed
    Untracked,
    /// Changed on disk after the last commit
    Modified,
    Committed,
}

impl From<&FileStatus> for &str {
    fn from(status: &FileStatus) -> Self {
        match status {
            FileStatus::Untracked => "UNTRACKED",
            FileStatus::Modified => "MODIFIED",
            FileStatus::Committed => "COMMITTED",
        }
    }
}

impl std::fmt::Display for FileStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let status_str: &str = self.into();
        write!(f, "{}", status_str)
    }
}

/// Status of one working-directory file, recomputed on every query
#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct FileState {
    pub path: PathBuf,
    pub status: FileStatus,
}

impl FileState {
    pub fn is_committed(&self) -> bool {
        self.status == FileStatus::Committed
    }

    pub fn colored_status(&self) -> String {
        let label = self.status.to_string();
        match self.status {
            FileStatus::Untracked => label.red().to_string(),
            FileStatus::Modified => label.yellow().to_string(),
            FileStatus::Committed => label.green().to_string(),
        }
    }
}

impl std::fmt::Display for FileState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.path.display(), self.status)
    }
}
