use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// Default age, in seconds, after which a worktree's status is considered stale.
pub const DEFAULT_STALE_AFTER_SECS: i64 = 300;

/// A Worktree is a git working-tree checkout of one branch.
/// Worktrees conventionally live in `<worktrees root>/{project}/{branch}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Worktree {
    /// Absolute path to the worktree directory
    pub path: PathBuf,
    /// Checked-out branch name
    pub branch: String,
    /// Last known HEAD commit hash
    pub commit: String,
    /// Last known working-tree status
    pub status: WorktreeStatus,
    /// When `commit` and `status` were last refreshed
    pub last_updated: DateTime<Utc>,
}

/// Working-tree status as last observed
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WorktreeStatus {
    /// Not yet checked
    #[default]
    Unknown,
    /// No staged or unstaged changes
    Clean,
    /// Staged or unstaged changes present
    Dirty,
}

impl WorktreeStatus {
    pub fn from_dirty(dirty: bool) -> Self {
        if dirty {
            WorktreeStatus::Dirty
        } else {
            WorktreeStatus::Clean
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            WorktreeStatus::Unknown => "unknown",
            WorktreeStatus::Clean => "clean",
            WorktreeStatus::Dirty => "dirty",
        }
    }
}

impl std::fmt::Display for WorktreeStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Worktree {
    /// Create a new Worktree with Unknown status
    ///
    /// # Arguments
    /// * `path` - Absolute path to the worktree directory
    /// * `branch` - Checked-out branch name
    ///
    /// # Errors
    /// Returns `Error::InvalidInput` if either argument is empty.
    pub fn new(path: impl Into<PathBuf>, branch: impl Into<String>) -> Result<Self> {
        let path = path.into();
        let branch = branch.into();

        if path.as_os_str().is_empty() {
            return Err(Error::InvalidInput("worktree path is empty".into()));
        }
        if branch.is_empty() {
            return Err(Error::InvalidInput(format!(
                "worktree at {} has an empty branch name",
                path.display()
            )));
        }

        Ok(Self {
            path,
            branch,
            commit: String::new(),
            status: WorktreeStatus::Unknown,
            last_updated: Utc::now(),
        })
    }

    /// Records a fresh status observation
    pub fn update_status(&mut self, commit: impl Into<String>, status: WorktreeStatus) {
        self.commit = commit.into();
        self.status = status;
        self.last_updated = Utc::now();
    }

    /// Returns true if the status was last refreshed more than `threshold` ago
    pub fn is_stale(&self, threshold: Duration) -> bool {
        Utc::now() - self.last_updated > threshold
    }

    pub fn is_dirty(&self) -> bool {
        self.status == WorktreeStatus::Dirty
    }

    /// Abbreviated commit hash for display
    pub fn short_commit(&self) -> &str {
        let end = self
            .commit
            .char_indices()
            .nth(7)
            .map(|(i, _)| i)
            .unwrap_or(self.commit.len());
        &self.commit[..end]
    }

    /// Generates the conventional worktree path for a project branch
    ///
    /// # Returns
    /// A path in the format "{worktrees_root}/{project}/{branch}"
    pub fn worktree_path(worktrees_root: &Path, project: &str, branch: &str) -> PathBuf {
        worktrees_root.join(project).join(branch)
    }
}
