//! End-to-end runs of the gwm binary

use super::helpers::TestWorkspace;
use std::path::Path;
use std::process::{Command, Output};

fn gwm(ws: &TestWorkspace, dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_gwm"))
        .args(args)
        .current_dir(dir)
        .env("GWM_CONFIG", ws.temp.path().join("no-such-config.toml"))
        .env("GWM_PROJECTS_ROOT", &ws.projects_root)
        .env("GWM_WORKTREES_ROOT", &ws.worktrees_root)
        .env("NO_COLOR", "1")
        .output()
        .expect("Failed to run gwm")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).trim().to_string()
}

#[test]
fn test_resolve_prints_target_path() {
    let ws = TestWorkspace::new();
    let repo = ws.add_project("proj1");
    let feature = ws.add_worktree("proj1", "feature");

    let output = gwm(&ws, &feature, &["resolve", "main"]);
    assert!(output.status.success());
    assert_eq!(stdout(&output), repo.display().to_string());
}

#[test]
fn test_resolve_json() {
    let ws = TestWorkspace::new();
    let repo = ws.add_project("proj1");
    ws.add_worktree("proj1", "feature");

    let output = gwm(&ws, &repo, &["resolve", "feature", "--json"]);
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(value["project_name"], "proj1");
    assert_eq!(value["branch_name"], "feature");
}

#[test]
fn test_resolve_malformed_target_fails() {
    let ws = TestWorkspace::new();
    let repo = ws.add_project("proj1");

    let output = gwm(&ws, &repo, &["resolve", "/feature"]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("project/branch"));
}

#[test]
fn test_context_in_worktree() {
    let ws = TestWorkspace::new();
    ws.add_project("proj1");
    let feature = ws.add_worktree("proj1", "feature");

    let output = gwm(&ws, &feature, &["context"]);
    assert!(output.status.success());
    assert_eq!(stdout(&output), "worktree proj1/feature");
}

#[test]
fn test_list_json() {
    let ws = TestWorkspace::new();
    ws.add_project("proj1");
    ws.add_worktree("proj1", "feature");

    let output = gwm(&ws, ws.temp.path(), &["list", "--json"]);
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(value.as_array().map(Vec::len), Some(2));
}

#[test]
fn test_complete_lists_siblings() {
    let ws = TestWorkspace::new();
    let repo = ws.add_project("proj1");
    ws.add_worktree("proj1", "feature");
    ws.add_worktree("proj1", "bugfix");

    let output = gwm(&ws, &repo, &["complete"]);
    assert!(output.status.success());

    let lines: Vec<String> = stdout(&output).lines().map(str::to_string).collect();
    assert_eq!(lines, vec!["bugfix", "feature", "main"]);
}

#[cfg(unix)]
#[test]
fn test_context_with_symlinked_roots() {
    let ws = TestWorkspace::new();
    let repo = ws.add_project("proj1");
    let feature = ws.add_worktree("proj1", "feature");
    let (_holder, link) = ws.symlinked();

    let run = |dir: &Path, args: &[&str]| {
        Command::new(env!("CARGO_BIN_EXE_gwm"))
            .args(args)
            .current_dir(dir)
            .env("GWM_CONFIG", ws.temp.path().join("no-such-config.toml"))
            .env("GWM_PROJECTS_ROOT", link.join("Projects"))
            .env("GWM_WORKTREES_ROOT", link.join("Worktrees"))
            .env("NO_COLOR", "1")
            .output()
            .expect("Failed to run gwm")
    };

    let output = run(&feature, &["context"]);
    assert!(output.status.success());
    assert_eq!(stdout(&output), "worktree proj1/feature");

    let output = run(&feature, &["resolve", "main"]);
    assert!(output.status.success());
    assert_eq!(
        stdout(&output),
        std::fs::canonicalize(&repo).unwrap().display().to_string()
    );
}
