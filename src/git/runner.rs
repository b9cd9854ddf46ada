//! Git command runner
//!
//! Centralizes how gwm invokes the `git` binary so every call gets the same
//! error context.

use anyhow::{bail, Context, Result};
use std::path::Path;
use std::process::{Command, Output};

/// Run a git command in `dir` and return the raw Output.
///
/// # Arguments
/// * `args` - Git command arguments (e.g., `&["worktree", "list"]`)
/// * `dir` - Working directory for the git command
pub fn run_git(args: &[&str], dir: &Path) -> Result<Output> {
    Command::new("git")
        .args(args)
        .current_dir(dir)
        .output()
        .with_context(|| format!("Failed to execute: git {}", args.join(" ")))
}

/// Run a git command, check for success, and return stdout as a trimmed String.
///
/// On failure, bails with the stderr content.
pub fn run_git_checked(args: &[&str], dir: &Path) -> Result<String> {
    let output = run_git(args, dir)?;
    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        let cmd = args.first().unwrap_or(&"");
        bail!("git {cmd} failed: {}", stderr.trim());
    }
    Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
}

/// Run a git command and return true if exit code is 0.
///
/// Spawn failures and non-zero exits both yield false.
pub fn run_git_bool(args: &[&str], dir: &Path) -> bool {
    run_git(args, dir)
        .map(|output| output.status.success())
        .unwrap_or(false)
}

/// Check that a `git` executable is on PATH and runs
pub fn check_git_available() -> Result<()> {
    let git = which::which("git").context("Git is not installed or not in PATH")?;
    let output = Command::new(&git)
        .arg("--version")
        .output()
        .with_context(|| format!("Failed to execute {}", git.display()))?;

    if !output.status.success() {
        bail!("Git is not working properly");
    }
    Ok(())
}
