//! Navigation targets offered to shell completion
//!
//! Candidates come from directory names under the two roots, so completion
//! never has to run git.

use anyhow::Result;
use std::fs;
use std::path::Path;

use crate::context::{Context, ContextKind, MAIN_TARGET};

/// Targets that make sense to type from `ctx`, filtered by `prefix` and sorted.
///
/// * Inside a project or worktree: `main` and the project's branches
/// * Outside: project names
/// * A prefix containing `/`: `project/branch` pairs of that project
pub fn complete_targets(
    ctx: &Context,
    projects_root: &Path,
    worktrees_root: &Path,
    prefix: &str,
) -> Result<Vec<String>> {
    let mut results = Vec::new();

    if let Some((project, _)) = prefix.split_once('/') {
        for branch in dir_names(&worktrees_root.join(project))? {
            results.push(format!("{project}/{branch}"));
        }
    } else {
        match ctx.kind {
            ContextKind::Project | ContextKind::Worktree => {
                if let Some(project) = ctx.project_name.as_deref() {
                    results.push(MAIN_TARGET.to_string());
                    for branch in dir_names(&worktrees_root.join(project))? {
                        if ctx.branch_name.as_deref() != Some(branch.as_str()) {
                            results.push(branch);
                        }
                    }
                }
            }
            ContextKind::OutsideGit | ContextKind::Unknown => {
                results.extend(dir_names(projects_root)?);
            }
        }
    }

    results.retain(|candidate| candidate.starts_with(prefix));
    results.sort();
    results.dedup();
    Ok(results)
}

/// Names of the visible subdirectories of `dir`; empty if `dir` is missing
fn dir_names(dir: &Path) -> Result<Vec<String>> {
    if !dir.is_dir() {
        return Ok(Vec::new());
    }

    let mut names = Vec::new();
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        if !entry.path().is_dir() {
            continue;
        }
        if let Some(name) = entry.file_name().to_str() {
            if !name.starts_with('.') {
                names.push(name.to_string());
            }
        }
    }
    Ok(names)
}
