//! [`GitClient`] backed by the `git` binary.

use anyhow::{bail, Result};
use std::path::Path;

use super::client::{GitClient, WorktreeInfo};
use super::parser::{parse_worktree_list, porcelain_is_dirty};
use super::runner::{run_git_bool, run_git_checked};
use crate::models::WorktreeStatus;

#[derive(Debug, Clone, Copy, Default)]
pub struct GitCli;

impl GitCli {
    pub fn new() -> Self {
        Self
    }
}

impl GitClient for GitCli {
    fn is_git_repository(&self, path: &Path) -> Result<bool> {
        if !path.is_dir() {
            bail!("Not a directory: {}", path.display());
        }
        // A `.git` entry keeps subdirectories of an enclosing repository from matching
        Ok(path.join(".git").exists() && run_git_bool(&["rev-parse", "--git-dir"], path))
    }

    fn is_main_repository(&self, path: &Path) -> Result<bool> {
        if !self.is_git_repository(path)? {
            return Ok(false);
        }
        let output = run_git_checked(&["rev-parse", "--git-dir", "--git-common-dir"], path)?;
        let mut lines = output.lines();
        match (lines.next(), lines.next()) {
            (Some(git_dir), Some(common_dir)) => Ok(git_dir.trim() == common_dir.trim()),
            _ => bail!("Unexpected rev-parse output in {}", path.display()),
        }
    }

    fn list_worktrees(&self, repo_path: &Path) -> Result<Vec<WorktreeInfo>> {
        let output = run_git_checked(&["worktree", "list", "--porcelain"], repo_path)?;
        Ok(parse_worktree_list(&output)
            .into_iter()
            .filter(|wt| !wt.is_bare)
            .collect())
    }

    fn get_worktree_status(&self, path: &Path) -> Result<WorktreeInfo> {
        if !path.is_dir() {
            bail!("Worktree directory missing: {}", path.display());
        }

        let head = run_git_checked(&["rev-parse", "HEAD"], path)?;
        let branch = run_git_checked(&["rev-parse", "--abbrev-ref", "HEAD"], path)?;
        let porcelain = run_git_checked(&["status", "--porcelain"], path)?;

        let mut info = WorktreeInfo::new(path);
        info.head = head;
        info.branch = (branch != "HEAD" && !branch.is_empty()).then_some(branch);
        info.status = WorktreeStatus::from_dirty(porcelain_is_dirty(&porcelain));
        Ok(info)
    }
}
