//! `gwm projects`: discover main repositories and their worktrees

use anyhow::Result;
use colored::Colorize;
use std::path::PathBuf;

use super::common::{discovery, interrupt_token};
use super::list::format_row;
use crate::config::Config;

pub fn execute(config: &Config, workspace: Option<PathBuf>, json: bool) -> Result<()> {
    let workspace = workspace.unwrap_or_else(|| config.projects_root.clone());
    let discovery = discovery(config)?;
    let token = interrupt_token();

    let mut projects = discovery.discover_projects_with_cancel(&workspace, &token)?;
    projects.sort_by(|a, b| a.name.cmp(&b.name));

    if json {
        println!("{}", serde_json::to_string_pretty(&projects)?);
        return Ok(());
    }

    if projects.is_empty() {
        println!("(no projects found under {})", workspace.display());
        return Ok(());
    }

    for project in &projects {
        let marker = if project.has_dirty_worktrees() {
            " *".yellow().to_string()
        } else {
            String::new()
        };
        println!(
            "{}{marker} {}",
            project.name.bold(),
            project.git_repo_path.display().to_string().dimmed()
        );

        let mut worktrees: Vec<_> = project.worktrees().iter().collect();
        worktrees.sort_by(|a, b| a.path.cmp(&b.path));
        for worktree in worktrees {
            println!("{}", format_row(worktree));
        }
    }
    Ok(())
}
