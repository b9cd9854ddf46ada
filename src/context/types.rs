use serde::Serialize;
use std::fmt;
use std::path::PathBuf;

/// Where the current directory sits relative to the projects and worktrees roots
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ContextKind {
    #[default]
    Unknown,
    /// Exactly at `<projects root>/<project>`
    Project,
    /// Anywhere inside `<worktrees root>/<project>/<branch>`
    Worktree,
    /// Neither of the above
    OutsideGit,
}

impl fmt::Display for ContextKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ContextKind::Unknown => "unknown",
            ContextKind::Project => "project",
            ContextKind::Worktree => "worktree",
            ContextKind::OutsideGit => "outside_git",
        };
        f.write_str(s)
    }
}

/// Classification of a directory, produced fresh on every detection
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Context {
    pub kind: ContextKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub branch_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_path: Option<PathBuf>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub worktree_path: Option<PathBuf>,
    pub current_path: PathBuf,
}

impl Context {
    pub fn project(name: impl Into<String>, project_path: PathBuf) -> Self {
        Self {
            kind: ContextKind::Project,
            project_name: Some(name.into()),
            current_path: project_path.clone(),
            project_path: Some(project_path),
            ..Self::default()
        }
    }

    pub fn worktree(
        project: impl Into<String>,
        branch: impl Into<String>,
        project_path: PathBuf,
        worktree_path: PathBuf,
    ) -> Self {
        Self {
            kind: ContextKind::Worktree,
            project_name: Some(project.into()),
            branch_name: Some(branch.into()),
            project_path: Some(project_path),
            current_path: worktree_path.clone(),
            worktree_path: Some(worktree_path),
        }
    }

    pub fn outside_git(current_path: PathBuf) -> Self {
        Self {
            kind: ContextKind::OutsideGit,
            current_path,
            ..Self::default()
        }
    }
}

/// What kind of directory a resolution points at
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TargetType {
    Project,
    Worktree,
}

impl fmt::Display for TargetType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TargetType::Project => f.write_str("project"),
            TargetType::Worktree => f.write_str("worktree"),
        }
    }
}

/// Which disambiguation rule produced a resolution
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ResolutionMethod {
    /// `project/branch` from any context
    CrossProject,
    /// `main` or the project's own name while at the project root
    CurrentProject,
    /// Bare branch name while at a project root
    ProjectBranch,
    /// `main` from inside a worktree
    WorktreeToMain,
    /// The project's own name from inside a worktree
    WorktreeToProject,
    /// Bare branch name from inside a worktree
    SiblingWorktree,
    /// Bare name outside any project, taken as a project name
    ProjectByName,
}

/// A concrete navigation target computed from a user-typed identifier
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContextResolution {
    pub target_type: TargetType,
    pub project_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub branch_name: Option<String>,
    pub target_path: PathBuf,
    pub method: ResolutionMethod,
}
