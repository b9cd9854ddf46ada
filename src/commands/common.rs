//! Helpers shared by the gwm commands

use anyhow::Result;
use colored::Colorize;
use std::path::PathBuf;
use tracing::warn;

use crate::config::Config;
use crate::context::Navigator;
use crate::discovery::{CancelToken, Discovery};
use crate::error::{Error, ErrorKind};
use crate::git::{check_git_available, GitCli};

pub fn navigator(config: &Config) -> Navigator {
    Navigator::new(&config.projects_root, &config.worktrees_root)
}

/// A discovery engine over the `git` binary; fails early when git is missing
pub fn discovery(config: &Config) -> Result<Discovery<GitCli>> {
    check_git_available()?;
    Ok(Discovery::with_options(GitCli::new(), config.discovery_options()))
}

pub fn current_dir() -> Result<PathBuf> {
    Ok(std::env::current_dir()?)
}

/// A token that trips on Ctrl-C
pub fn interrupt_token() -> CancelToken {
    let token = CancelToken::new();
    let handler_token = token.clone();
    if let Err(err) = ctrlc::set_handler(move || handler_token.cancel()) {
        warn!(error = %err, "could not install Ctrl-C handler");
    }
    token
}

/// Print an error the way the CLI presents it, with a hint where one helps
pub fn render_error(err: &anyhow::Error) {
    let Some(gwm_err) = err.downcast_ref::<Error>() else {
        eprintln!("{} {err:#}", "error:".red().bold());
        return;
    };

    match gwm_err.kind() {
        ErrorKind::AggregateFailure => {
            eprintln!("{} {gwm_err}", "warning:".yellow().bold());
            eprintln!(
                "  {}",
                "Run with --verbose to see which worktrees could not be read".dimmed()
            );
        }
        ErrorKind::InputValidation => {
            eprintln!("{} {err:#}", "error:".red().bold());
            if matches!(gwm_err, Error::InvalidTargetFormat { .. }) {
                eprintln!(
                    "  {}",
                    "Use a branch name, 'main', or the form project/branch".dimmed()
                );
            }
        }
        ErrorKind::NotFound => {
            eprintln!("{} {err:#}", "error:".red().bold());
            eprintln!(
                "  {}",
                "Check projects_root and worktrees_root in your gwm config".dimmed()
            );
        }
        ErrorKind::CapabilityFailure | ErrorKind::Cancelled => {
            eprintln!("{} {err:#}", "error:".red().bold());
        }
    }
}
