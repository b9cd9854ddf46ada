//! Discovery against real repositories

use super::helpers::TestWorkspace;
use gwm::discovery::{CancelToken, Discovery};
use gwm::git::{GitCli, GitClient};
use gwm::models::WorktreeStatus;
use gwm::ErrorKind;
use std::fs;

fn branches(mut worktrees: Vec<gwm::models::Worktree>) -> Vec<String> {
    worktrees.sort_by(|a, b| a.branch.cmp(&b.branch));
    worktrees.into_iter().map(|wt| wt.branch).collect()
}

#[test]
fn test_discover_worktrees_finds_main_and_linked() {
    let ws = TestWorkspace::new();
    ws.add_project("proj1");
    ws.add_worktree("proj1", "feature");
    ws.add_project("proj2");
    fs::create_dir_all(ws.projects_root.join("notes")).unwrap();

    let discovery = Discovery::new(GitCli::new());
    let worktrees = discovery.discover_worktrees(&ws.projects_root).unwrap();

    assert_eq!(worktrees.len(), 3);
    assert_eq!(branches(worktrees), vec!["feature", "main", "main"]);
}

#[test]
fn test_discover_worktrees_reports_commit_and_status() {
    let ws = TestWorkspace::new();
    let repo = ws.add_project("proj1");
    let feature = ws.add_worktree("proj1", "feature");
    fs::write(feature.join("README.md"), "# Changed\n").unwrap();

    let discovery = Discovery::new(GitCli::new());
    let worktrees = discovery.discover_worktrees(&ws.projects_root).unwrap();

    let main = worktrees.iter().find(|wt| wt.branch == "main").unwrap();
    let linked = worktrees.iter().find(|wt| wt.branch == "feature").unwrap();

    assert_eq!(main.status, WorktreeStatus::Clean);
    assert_eq!(linked.status, WorktreeStatus::Dirty);
    assert_eq!(main.commit.len(), 40);
    assert_eq!(main.commit, linked.commit);
    assert_eq!(
        fs::canonicalize(&main.path).unwrap(),
        fs::canonicalize(&repo).unwrap()
    );
}

#[test]
fn test_discover_worktrees_is_cached() {
    let ws = TestWorkspace::new();
    ws.add_project("proj1");

    let discovery = Discovery::new(GitCli::new());
    let first = discovery.discover_worktrees(&ws.projects_root).unwrap();
    assert_eq!(discovery.cache().len(), 1);

    let second = discovery.discover_worktrees(&ws.projects_root).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_discover_projects_attaches_linked_worktrees() {
    let ws = TestWorkspace::new();
    ws.add_project("proj1");
    ws.add_worktree("proj1", "feature");
    ws.add_worktree("proj1", "bugfix");
    ws.add_project("proj2");

    let discovery = Discovery::new(GitCli::new());
    let mut projects = discovery.discover_projects(&ws.projects_root).unwrap();
    projects.sort_by(|a, b| a.name.cmp(&b.name));

    assert_eq!(projects.len(), 2);
    assert_eq!(projects[0].name, "proj1");
    assert!(projects[0].worktree_for_branch("feature").is_some());
    assert!(projects[0].worktree_for_branch("bugfix").is_some());
    assert!(projects[0].worktree_for_branch("main").is_none());
    assert_eq!(projects[1].name, "proj2");
    assert!(projects[1].worktrees().is_empty());
}

#[test]
fn test_linked_worktree_is_not_a_main_repository() {
    let ws = TestWorkspace::new();
    let repo = ws.add_project("proj1");
    let feature = ws.add_worktree("proj1", "feature");

    let git = GitCli::new();
    assert!(git.is_git_repository(&feature).unwrap());
    assert!(git.is_main_repository(&repo).unwrap());
    assert!(!git.is_main_repository(&feature).unwrap());
}

#[test]
fn test_discover_worktrees_cancelled_before_start() {
    let ws = TestWorkspace::new();
    ws.add_project("proj1");

    let token = CancelToken::new();
    token.cancel();

    let discovery = Discovery::new(GitCli::new());
    let err = discovery
        .discover_worktrees_with_cancel(&ws.projects_root, &token)
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Cancelled);
}

#[test]
fn test_discover_worktrees_missing_workspace() {
    let ws = TestWorkspace::new();
    let discovery = Discovery::new(GitCli::new());

    let err = discovery
        .discover_worktrees(&ws.temp.path().join("missing"))
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NotFound);
}

#[cfg(unix)]
#[test]
fn test_discover_projects_through_symlinked_workspace() {
    let ws = TestWorkspace::new();
    ws.add_project("proj1");
    ws.add_worktree("proj1", "feature");
    let (_holder, link) = ws.symlinked();

    let discovery = Discovery::new(GitCli::new());
    let direct = discovery.discover_projects(&ws.projects_root).unwrap();
    let via_link = discovery.discover_projects(&link.join("Projects")).unwrap();

    for projects in [&direct, &via_link] {
        assert_eq!(projects.len(), 1);
        let branches: Vec<&str> = projects[0]
            .worktrees()
            .iter()
            .map(|wt| wt.branch.as_str())
            .collect();
        assert_eq!(branches, vec!["feature"]);
    }
}
