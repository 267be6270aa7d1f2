use crate::errors::RepositoryError;
use regex::RegexSet;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Pattern that hides dot-prefixed entries (the state file among them)
pub const DEFAULT_IGNORE_PATTERN: &str = r"\..*";

/// Decides which working-directory entries are excluded from tracking
///
/// Each pattern must match the whole entry name. Patterns are alternatives:
/// an entry is ignored as soon as any one of them matches.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IgnoreFilter {
    patterns: Vec<String>,
}

impl Default for IgnoreFilter {
    fn default() -> Self {
        IgnoreFilter {
            patterns: vec![DEFAULT_IGNORE_PATTERN.to_string()],
        }
    }
}

impl IgnoreFilter {
    pub fn patterns(&self) -> &[String] {
        &self.patterns
    }

    /// Append a new alternative after checking it compiles on its own
    pub fn add_pattern(&mut self, pattern: &str) -> anyhow::Result<()> {
        regex::Regex::new(pattern)
            .and_then(|_| regex::Regex::new(&Self::anchored(pattern)))
            .map_err(|source| RepositoryError::InvalidPattern {
                pattern: pattern.to_string(),
                source,
            })?;

        self.patterns.push(pattern.to_string());
        Ok(())
    }

    pub fn matcher(&self) -> anyhow::Result<IgnoreMatcher> {
        let set = RegexSet::new(self.patterns.iter().map(|p| Self::anchored(p)))?;
        Ok(IgnoreMatcher { set })
    }

    /// All patterns combined into a single alternation, e.g. `(\..*)|(.*\.log)`
    pub fn combined(&self) -> String {
        self.patterns
            .iter()
            .map(|p| format!("({})", p))
            .collect::<Vec<_>>()
            .join("|")
    }

    fn anchored(pattern: &str) -> String {
        format!("^(?:{})$", pattern)
    }
}

/// Compiled form of an [`IgnoreFilter`], built once per directory scan
#[derive(Debug, Clone)]
pub struct IgnoreMatcher {
    set: RegexSet,
}

impl IgnoreMatcher {
    pub fn is_ignored_name(&self, name: &str) -> bool {
        self.set.is_match(name)
    }

    /// Non-regular files (directories, symlinks, ...) are always ignored
    pub fn is_ignored(&self, path: &Path) -> bool {
        let is_regular_file = std::fs::symlink_metadata(path)
            .map(|metadata| metadata.file_type().is_file())
            .unwrap_or(false);

        if !is_regular_file {
            return true;
        }

        path.file_name()
            .map(|name| self.is_ignored_name(&name.to_string_lossy()))
            .unwrap_or(true)
    }
}
