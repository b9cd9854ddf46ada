//! Current-directory classification
//!
//! A directory is matched against two conventional trees:
//! `<worktrees root>/<project>/<branch>/...` and `<projects root>/<project>`.
//! The worktree rule wins over the project rule; anything else is outside git.

use std::path::{Path, PathBuf};
use tracing::debug;

use super::paths::{components_under, normalize_path};
use super::types::Context;
use crate::error::{Error, Result};

/// Filesystem existence check, injectable for tests
pub trait PathCheck {
    fn exists(&self, path: &Path) -> bool;
}

/// Checks the real filesystem
#[derive(Debug, Clone, Copy, Default)]
pub struct FsPathCheck;

impl PathCheck for FsPathCheck {
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }
}

impl<F> PathCheck for F
where
    F: Fn(&Path) -> bool,
{
    fn exists(&self, path: &Path) -> bool {
        self(path)
    }
}

#[derive(Debug, Clone)]
pub struct ContextDetector<P = FsPathCheck> {
    projects_root: PathBuf,
    worktrees_root: PathBuf,
    path_check: P,
}

impl ContextDetector<FsPathCheck> {
    pub fn new(projects_root: impl AsRef<Path>, worktrees_root: impl AsRef<Path>) -> Self {
        Self::with_path_check(projects_root, worktrees_root, FsPathCheck)
    }
}

impl<P: PathCheck> ContextDetector<P> {
    pub fn with_path_check(
        projects_root: impl AsRef<Path>,
        worktrees_root: impl AsRef<Path>,
        path_check: P,
    ) -> Self {
        Self {
            projects_root: normalize_path(projects_root.as_ref()),
            worktrees_root: normalize_path(worktrees_root.as_ref()),
            path_check,
        }
    }

    pub fn projects_root(&self) -> &Path {
        &self.projects_root
    }

    pub fn worktrees_root(&self) -> &Path {
        &self.worktrees_root
    }

    /// Classify `current_dir`
    ///
    /// # Errors
    /// Returns `Error::InvalidInput` if `current_dir` is empty. Every other
    /// input yields a context, `OutsideGit` when no rule matches.
    pub fn detect(&self, current_dir: &Path) -> Result<Context> {
        if current_dir.as_os_str().is_empty() {
            return Err(Error::InvalidInput("current directory is empty".into()));
        }

        let current = normalize_path(current_dir);

        if let Some(ctx) = self.match_worktree(&current) {
            return Ok(ctx);
        }
        if let Some(ctx) = self.match_project(&current) {
            return Ok(ctx);
        }

        debug!(path = %current.display(), "directory is outside the project trees");
        Ok(Context::outside_git(current))
    }

    fn match_worktree(&self, current: &Path) -> Option<Context> {
        let parts = components_under(current, &self.worktrees_root)?;
        if parts.len() < 2 {
            return None;
        }
        let (project, branch) = (&parts[0], &parts[1]);
        if project.is_empty() || branch.is_empty() {
            return None;
        }

        let project_path = self.projects_root.join(project);
        if !self.path_check.exists(&project_path) {
            debug!(
                project = %project,
                path = %project_path.display(),
                "worktree layout matched but project directory is missing"
            );
            return None;
        }

        Some(Context::worktree(
            project.as_str(),
            branch.as_str(),
            project_path,
            current.to_path_buf(),
        ))
    }

    fn match_project(&self, current: &Path) -> Option<Context> {
        let parts = components_under(current, &self.projects_root)?;
        let project = parts.first().filter(|p| !p.is_empty())?;

        // Subdirectories of a project are not the project itself
        let project_path = self.projects_root.join(project);
        if project_path != current {
            return None;
        }

        Some(Context::project(project.as_str(), project_path))
    }
}
