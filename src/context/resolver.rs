//! Target identifier resolution
//!
//! Turns what a user types (`feature`, `main`, `proj/feature`) into a
//! concrete directory, based on the detected context. Resolution is pure path
//! construction: targets are never checked for existence here, which keeps it
//! usable from shell completion.

use std::path::{Path, PathBuf};

use super::paths::normalize_path;
use super::types::{Context, ContextKind, ContextResolution, ResolutionMethod, TargetType};
use crate::error::{Error, Result};
use crate::models::Worktree;

/// Alias for "the project's main checkout"
pub const MAIN_TARGET: &str = "main";

#[derive(Debug, Clone)]
pub struct ContextResolver {
    projects_root: PathBuf,
    worktrees_root: PathBuf,
}

impl ContextResolver {
    pub fn new(projects_root: impl AsRef<Path>, worktrees_root: impl AsRef<Path>) -> Self {
        Self {
            projects_root: normalize_path(projects_root.as_ref()),
            worktrees_root: normalize_path(worktrees_root.as_ref()),
        }
    }

    /// Resolve `target` relative to `ctx`
    ///
    /// # Errors
    /// * `InvalidInput` - `target` is empty, or the context lacks its project
    /// * `InvalidTargetFormat` - a `/` target is not exactly `project/branch`
    /// * `UnknownContext` - `ctx.kind` is `Unknown`
    pub fn resolve(&self, target: &str, ctx: &Context) -> Result<ContextResolution> {
        if target.is_empty() {
            return Err(Error::InvalidInput("target is empty".into()));
        }

        let mut resolution = match ctx.kind {
            ContextKind::Project => self.from_project(target, ctx)?,
            ContextKind::Worktree => self.from_worktree(target, ctx)?,
            ContextKind::OutsideGit => self.from_outside(target)?,
            ContextKind::Unknown => {
                return Err(Error::UnknownContext {
                    target: target.to_string(),
                });
            }
        };
        resolution.target_path = normalize_path(&resolution.target_path);
        Ok(resolution)
    }

    fn from_project(&self, target: &str, ctx: &Context) -> Result<ContextResolution> {
        if target.contains('/') {
            return self.cross_project(target);
        }

        let (project, project_path) = self.current_project(ctx)?;
        if target == project || target == MAIN_TARGET {
            return Ok(ContextResolution {
                target_type: TargetType::Project,
                project_name: project.to_string(),
                branch_name: None,
                target_path: project_path,
                method: ResolutionMethod::CurrentProject,
            });
        }

        Ok(self.branch_of(project, target, ResolutionMethod::ProjectBranch))
    }

    fn from_worktree(&self, target: &str, ctx: &Context) -> Result<ContextResolution> {
        if target.contains('/') {
            return self.cross_project(target);
        }

        let (project, project_path) = self.current_project(ctx)?;
        let method = if target == MAIN_TARGET {
            Some(ResolutionMethod::WorktreeToMain)
        } else if target == project {
            Some(ResolutionMethod::WorktreeToProject)
        } else {
            None
        };

        match method {
            Some(method) => Ok(ContextResolution {
                target_type: TargetType::Project,
                project_name: project.to_string(),
                branch_name: None,
                target_path: project_path,
                method,
            }),
            None => Ok(self.branch_of(project, target, ResolutionMethod::SiblingWorktree)),
        }
    }

    fn from_outside(&self, target: &str) -> Result<ContextResolution> {
        if target.contains('/') {
            return self.cross_project(target);
        }

        // Bare names outside a project are taken as project names, unchecked
        Ok(ContextResolution {
            target_type: TargetType::Project,
            project_name: target.to_string(),
            branch_name: None,
            target_path: self.projects_root.join(target),
            method: ResolutionMethod::ProjectByName,
        })
    }

    fn cross_project(&self, target: &str) -> Result<ContextResolution> {
        let (project, branch) = split_cross_project(target)?;
        Ok(self.branch_of(project, branch, ResolutionMethod::CrossProject))
    }

    fn branch_of(&self, project: &str, branch: &str, method: ResolutionMethod) -> ContextResolution {
        ContextResolution {
            target_type: TargetType::Worktree,
            project_name: project.to_string(),
            branch_name: Some(branch.to_string()),
            target_path: Worktree::worktree_path(&self.worktrees_root, project, branch),
            method,
        }
    }

    fn current_project<'a>(&self, ctx: &'a Context) -> Result<(&'a str, PathBuf)> {
        let project = ctx
            .project_name
            .as_deref()
            .filter(|p| !p.is_empty())
            .ok_or_else(|| {
                Error::InvalidInput(format!("{} context has no project name", ctx.kind))
            })?;
        let project_path = ctx
            .project_path
            .clone()
            .unwrap_or_else(|| self.projects_root.join(project));
        Ok((project, project_path))
    }
}

/// Split `project/branch`, requiring exactly two non-empty parts
pub fn split_cross_project(target: &str) -> Result<(&str, &str)> {
    let mut parts = target.split('/');
    match (parts.next(), parts.next(), parts.next()) {
        (Some(project), Some(branch), None) if !project.is_empty() && !branch.is_empty() => {
            Ok((project, branch))
        }
        _ => Err(Error::InvalidTargetFormat {
            target: target.to_string(),
        }),
    }
}
