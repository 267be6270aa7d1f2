use crate::artifacts::ignore::ignore_filter::IgnoreMatcher;
use anyhow::Context;
use chrono::{DateTime, Utc};
use filetime::FileTime;
use std::io::Write;
use std::path::{Path, PathBuf};

/// The tracked working directory
///
/// Only the top level is considered: subdirectories are never descended
/// into. All paths handed in and out are relative to the workspace root.
#[derive(Debug)]
pub struct Workspace {
    path: Box<Path>,
}

impl Workspace {
    pub fn new(path: Box<Path>) -> Self {
        Workspace { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Regular, non-ignored files at the top level, sorted by name
    pub fn list_files(&self, matcher: &IgnoreMatcher) -> anyhow::Result<Vec<PathBuf>> {
        if !self.path.is_dir() {
            anyhow::bail!("The workspace is not a directory: {:?}", self.path);
        }

        let mut files = std::fs::read_dir(&self.path)
            .with_context(|| format!("Failed to list workspace at {:?}", self.path))?
            .filter_map(|entry| entry.ok())
            .filter(|entry| !matcher.is_ignored(&entry.path()))
            .map(|entry| PathBuf::from(entry.file_name()))
            .collect::<Vec<_>>();
        files.sort();

        Ok(files)
    }

    pub fn read_lines(&self, file_path: &Path) -> anyhow::Result<Vec<String>> {
        let content = std::fs::read_to_string(self.path.join(file_path))
            .with_context(|| format!("Failed to read file: {:?}", file_path))?;

        Ok(content.lines().map(String::from).collect())
    }

    pub fn modified_time(&self, file_path: &Path) -> anyhow::Result<DateTime<Utc>> {
        let modified = std::fs::metadata(self.path.join(file_path))
            .and_then(|metadata| metadata.modified())
            .with_context(|| format!("Failed to get modification time for file: {:?}", file_path))?;

        Ok(modified.into())
    }

    /// Write `lines` (each newline-terminated) and pin the modification time
    pub fn write_lines(
        &self,
        file_path: &Path,
        lines: &[String],
        modified_time: DateTime<Utc>,
    ) -> anyhow::Result<()> {
        let path = self.path.join(file_path);

        let mut file = std::fs::OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(&path)
            .with_context(|| format!("Failed to open file: {:?}", file_path))?;

        for line in lines {
            writeln!(file, "{}", line)
                .with_context(|| format!("Failed to write to file: {:?}", file_path))?;
        }
        file.flush()
            .with_context(|| format!("Failed to write to file: {:?}", file_path))?;
        drop(file);

        let mtime = FileTime::from_system_time(modified_time.into());
        filetime::set_file_mtime(&path, mtime).with_context(|| {
            format!("Failed to set modification time for file: {:?}", file_path)
        })?;

        Ok(())
    }

    pub fn remove_file(&self, file_path: &Path) -> anyhow::Result<()> {
        std::fs::remove_file(self.path.join(file_path))
            .with_context(|| format!("Failed to remove file: {:?}", file_path))
    }
}
