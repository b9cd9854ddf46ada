//! The git capability consumed by discovery.

use anyhow::Result;
use std::path::{Path, PathBuf};

use crate::models::WorktreeStatus;

/// Worktree information as reported by git
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorktreeInfo {
    pub path: PathBuf,
    /// HEAD commit hash, empty when unknown
    pub head: String,
    /// Branch name without `refs/heads/`, None when detached
    pub branch: Option<String>,
    pub is_bare: bool,
    /// Unknown unless produced by a status query
    pub status: WorktreeStatus,
}

impl WorktreeInfo {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            head: String::new(),
            branch: None,
            is_bare: false,
            status: WorktreeStatus::Unknown,
        }
    }
}

/// Questions discovery asks about paths on disk.
///
/// Any error means "this path is unusable"; callers decide whether that is fatal.
pub trait GitClient: Send + Sync {
    /// Is `path` the top level of a git working tree (main repository or worktree)?
    fn is_git_repository(&self, path: &Path) -> Result<bool>;

    /// Is `path` a main repository rather than a linked worktree?
    fn is_main_repository(&self, path: &Path) -> Result<bool>;

    /// Lists the non-bare worktrees of the repository at `repo_path`, including its main checkout
    fn list_worktrees(&self, repo_path: &Path) -> Result<Vec<WorktreeInfo>>;

    /// Reads branch, HEAD and clean/dirty state of the worktree at `path`
    fn get_worktree_status(&self, path: &Path) -> Result<WorktreeInfo>;
}

impl<T: GitClient + ?Sized> GitClient for std::sync::Arc<T> {
    fn is_git_repository(&self, path: &Path) -> Result<bool> {
        (**self).is_git_repository(path)
    }

    fn is_main_repository(&self, path: &Path) -> Result<bool> {
        (**self).is_main_repository(path)
    }

    fn list_worktrees(&self, repo_path: &Path) -> Result<Vec<WorktreeInfo>> {
        (**self).list_worktrees(repo_path)
    }

    fn get_worktree_status(&self, path: &Path) -> Result<WorktreeInfo> {
        (**self).get_worktree_status(path)
    }
}
