//! `gwm context`, `gwm resolve` and `gwm complete`

use anyhow::Result;
use colored::Colorize;

use super::common::{current_dir, navigator};
use crate::completions::complete_targets;
use crate::config::Config;
use crate::context::{Context, ContextKind};

/// Print the context of the current directory
pub fn context(config: &Config, json: bool) -> Result<()> {
    let ctx = navigator(config).detect(&current_dir()?)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&ctx)?);
    } else {
        println!("{}", describe(&ctx));
    }
    Ok(())
}

/// Print the directory `target` resolves to from the current directory
pub fn resolve(config: &Config, target: &str, json: bool) -> Result<()> {
    let resolution = navigator(config).resolve_from(&current_dir()?, target)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&resolution)?);
    } else {
        println!("{}", resolution.target_path.display());
    }
    Ok(())
}

/// Print completion candidates for `prefix`, one per line
pub fn complete(config: &Config, prefix: Option<String>) -> Result<()> {
    let nav = navigator(config);
    let ctx = nav.detect(&current_dir()?)?;
    let detector = nav.detector();

    let candidates = complete_targets(
        &ctx,
        detector.projects_root(),
        detector.worktrees_root(),
        prefix.as_deref().unwrap_or(""),
    )?;
    for candidate in candidates {
        println!("{candidate}");
    }
    Ok(())
}

pub fn describe(ctx: &Context) -> String {
    let project = ctx.project_name.as_deref().unwrap_or_default();
    match ctx.kind {
        ContextKind::Project => format!("{} {}", "project".green().bold(), project.cyan()),
        ContextKind::Worktree => format!(
            "{} {}/{}",
            "worktree".green().bold(),
            project.cyan(),
            ctx.branch_name.as_deref().unwrap_or_default().cyan()
        ),
        ContextKind::OutsideGit => format!(
            "{} {}",
            "outside".yellow().bold(),
            ctx.current_path.display()
        ),
        ContextKind::Unknown => "unknown".dimmed().to_string(),
    }
}
