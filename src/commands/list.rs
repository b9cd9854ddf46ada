//! `gwm list`: discover worktrees and show their status

use anyhow::Result;
use colored::Colorize;
use std::path::PathBuf;

use super::common::{discovery, interrupt_token};
use crate::config::Config;
use crate::models::{Worktree, WorktreeStatus};

pub fn execute(config: &Config, workspace: Option<PathBuf>, json: bool) -> Result<()> {
    let workspace = workspace.unwrap_or_else(|| config.projects_root.clone());
    let discovery = discovery(config)?;
    let token = interrupt_token();

    let mut worktrees = discovery.discover_worktrees_with_cancel(&workspace, &token)?;
    worktrees.sort_by(|a, b| a.path.cmp(&b.path));

    if json {
        println!("{}", serde_json::to_string_pretty(&worktrees)?);
        return Ok(());
    }

    if worktrees.is_empty() {
        println!("(no worktrees found under {})", workspace.display());
        return Ok(());
    }

    let stale_after = config.stale_after();
    for worktree in &worktrees {
        let stale = if worktree.is_stale(stale_after) {
            " (stale)".dimmed().to_string()
        } else {
            String::new()
        };
        println!("{}{stale}", format_row(worktree));
    }
    Ok(())
}

pub fn format_row(worktree: &Worktree) -> String {
    let status = match worktree.status {
        WorktreeStatus::Clean => "clean".green(),
        WorktreeStatus::Dirty => "dirty".yellow(),
        WorktreeStatus::Unknown => "?".dimmed(),
    };
    format!(
        "  {:<7} {:<24} {} {}",
        status,
        worktree.branch.cyan(),
        worktree.short_commit().dimmed(),
        worktree.path.display()
    )
}
