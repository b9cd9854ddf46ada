use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use super::worktree::Worktree;
use crate::error::{Error, Result};

/// A Project is a main git repository together with the worktrees checked out from it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    /// Project name, unique within a workspace
    pub name: String,
    /// Absolute path to the main repository
    pub git_repo_path: PathBuf,
    worktrees: Vec<Worktree>,
}

impl Project {
    pub fn new(name: impl Into<String>, git_repo_path: impl Into<PathBuf>) -> Result<Self> {
        let name = name.into();
        if name.is_empty() {
            return Err(Error::InvalidInput("project name is empty".into()));
        }
        Ok(Self {
            name,
            git_repo_path: git_repo_path.into(),
            worktrees: Vec::new(),
        })
    }

    /// Attaches a worktree to this project
    ///
    /// # Errors
    /// Returns `Error::InvalidInput` if a worktree with the same path is already attached.
    pub fn add_worktree(&mut self, worktree: Worktree) -> Result<()> {
        if self.worktree(&worktree.path).is_some() {
            return Err(Error::InvalidInput(format!(
                "project '{}' already has a worktree at {}",
                self.name,
                worktree.path.display()
            )));
        }
        self.worktrees.push(worktree);
        Ok(())
    }

    /// Detaches the worktree at `path`, returning it if present
    pub fn remove_worktree(&mut self, path: &Path) -> Option<Worktree> {
        let idx = self.worktrees.iter().position(|wt| wt.path == path)?;
        Some(self.worktrees.remove(idx))
    }

    pub fn worktree(&self, path: &Path) -> Option<&Worktree> {
        self.worktrees.iter().find(|wt| wt.path == path)
    }

    /// Finds a worktree by branch name
    pub fn worktree_for_branch(&self, branch: &str) -> Option<&Worktree> {
        self.worktrees.iter().find(|wt| wt.branch == branch)
    }

    pub fn worktrees(&self) -> &[Worktree] {
        &self.worktrees
    }

    pub fn has_dirty_worktrees(&self) -> bool {
        self.worktrees.iter().any(Worktree::is_dirty)
    }
}
