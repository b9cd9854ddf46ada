use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use super::project::Project;
use super::worktree::Worktree;
use crate::error::{Error, Result};

/// The aggregate of all known projects under one root directory.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Workspace {
    pub path: PathBuf,
    projects: Vec<Project>,
}

impl Workspace {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            projects: Vec::new(),
        }
    }

    /// Builds a workspace from discovered projects, rejecting duplicate names
    pub fn with_projects(path: impl Into<PathBuf>, projects: Vec<Project>) -> Result<Self> {
        let mut workspace = Self::new(path);
        for project in projects {
            workspace.add_project(project)?;
        }
        Ok(workspace)
    }

    /// Adds a project
    ///
    /// # Errors
    /// Returns `Error::InvalidInput` if a project with the same name exists.
    pub fn add_project(&mut self, project: Project) -> Result<()> {
        if self.project(&project.name).is_some() {
            return Err(Error::InvalidInput(format!(
                "workspace already has a project named '{}'",
                project.name
            )));
        }
        self.projects.push(project);
        Ok(())
    }

    pub fn remove_project(&mut self, name: &str) -> Option<Project> {
        let idx = self.projects.iter().position(|p| p.name == name)?;
        Some(self.projects.remove(idx))
    }

    pub fn project(&self, name: &str) -> Option<&Project> {
        self.projects.iter().find(|p| p.name == name)
    }

    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    /// All worktrees across every project
    pub fn worktrees(&self) -> impl Iterator<Item = &Worktree> {
        self.projects.iter().flat_map(|p| p.worktrees().iter())
    }

    /// Finds the worktree at `path` and the project owning it
    pub fn find_worktree(&self, path: &Path) -> Option<(&Project, &Worktree)> {
        self.projects
            .iter()
            .find_map(|p| p.worktree(path).map(|wt| (p, wt)))
    }

    /// Worktrees sorted by path, for deterministic output
    pub fn sorted_worktrees(&self) -> Vec<&Worktree> {
        let mut worktrees: Vec<&Worktree> = self.worktrees().collect();
        worktrees.sort_by(|a, b| a.path.cmp(&b.path));
        worktrees
    }
}
