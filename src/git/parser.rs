//! Git output parsing
//!
//! Turns `git worktree list --porcelain` and `git status --porcelain` output
//! into structured data.

use std::path::PathBuf;

use super::client::WorktreeInfo;

/// Parse git worktree list --porcelain output
///
/// Example input:
/// ```text
/// worktree /ws/Projects/proj1
/// HEAD abc123def456
/// branch refs/heads/main
///
/// worktree /ws/Worktrees/proj1/feature
/// HEAD def789abc012
/// branch refs/heads/feature
/// ```
pub fn parse_worktree_list(output: &str) -> Vec<WorktreeInfo> {
    let mut worktrees = Vec::new();
    let mut current: Option<WorktreeInfo> = None;

    for line in output.lines() {
        if let Some(path) = line.strip_prefix("worktree ") {
            if let Some(wt) = current.take() {
                worktrees.push(wt);
            }
            current = Some(WorktreeInfo::new(PathBuf::from(path)));
        } else if let Some(head) = line.strip_prefix("HEAD ") {
            if let Some(ref mut wt) = current {
                wt.head = head.to_string();
            }
        } else if let Some(branch_line) = line.strip_prefix("branch ") {
            if let Some(ref mut wt) = current {
                let branch_name = branch_line
                    .strip_prefix("refs/heads/")
                    .unwrap_or(branch_line);
                wt.branch = Some(branch_name.to_string());
            }
        } else if line == "bare" {
            if let Some(ref mut wt) = current {
                wt.is_bare = true;
            }
        }
    }

    if let Some(wt) = current {
        worktrees.push(wt);
    }

    worktrees
}

/// Returns true if `git status --porcelain` output shows staged or unstaged changes.
///
/// Untracked files (`??`) do not count.
pub fn porcelain_is_dirty(output: &str) -> bool {
    output
        .lines()
        .any(|line| !line.is_empty() && !line.starts_with("??"))
}
