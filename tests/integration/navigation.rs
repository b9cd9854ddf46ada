//! Context detection and resolution over a real directory layout

use super::helpers::TestWorkspace;
use gwm::context::{ContextKind, Navigator, ResolutionMethod, TargetType};
use gwm::ErrorKind;

#[test]
fn test_navigate_between_project_and_worktrees() {
    let ws = TestWorkspace::new();
    let repo = ws.add_project("proj1");
    let feature = ws.add_worktree("proj1", "feature");
    let bugfix = ws.add_worktree("proj1", "bugfix");

    let nav = Navigator::new(&ws.projects_root, &ws.worktrees_root);

    let ctx = nav.detect(&repo).unwrap();
    assert_eq!(ctx.kind, ContextKind::Project);
    assert_eq!(ctx.project_name.as_deref(), Some("proj1"));

    let res = nav.resolve("feature", &ctx).unwrap();
    assert_eq!(res.target_path, feature);
    assert_eq!(res.target_type, TargetType::Worktree);
    assert_eq!(res.method, ResolutionMethod::ProjectBranch);

    let ctx = nav.detect(&feature).unwrap();
    assert_eq!(ctx.kind, ContextKind::Worktree);
    assert_eq!(ctx.branch_name.as_deref(), Some("feature"));

    let res = nav.resolve("bugfix", &ctx).unwrap();
    assert_eq!(res.target_path, bugfix);
    assert_eq!(res.method, ResolutionMethod::SiblingWorktree);

    let res = nav.resolve("main", &ctx).unwrap();
    assert_eq!(res.target_path, repo);
    assert_eq!(res.method, ResolutionMethod::WorktreeToMain);
}

#[test]
fn test_detect_from_subdirectory_of_worktree() {
    let ws = TestWorkspace::new();
    ws.add_project("proj1");
    let feature = ws.add_worktree("proj1", "feature");
    let nested = feature.join("src").join("deep");
    std::fs::create_dir_all(&nested).unwrap();

    let nav = Navigator::new(&ws.projects_root, &ws.worktrees_root);
    let ctx = nav.detect(&nested).unwrap();

    assert_eq!(ctx.kind, ContextKind::Worktree);
    assert_eq!(ctx.project_name.as_deref(), Some("proj1"));
    assert_eq!(ctx.branch_name.as_deref(), Some("feature"));
    assert_eq!(ctx.worktree_path.as_deref(), Some(nested.as_path()));
}

#[test]
fn test_cross_project_from_outside() {
    let ws = TestWorkspace::new();
    ws.add_project("proj1");
    let other = ws.add_project("proj2");
    ws.add_worktree("proj2", "release");

    let nav = Navigator::new(&ws.projects_root, &ws.worktrees_root);
    let ctx = nav.detect(ws.temp.path()).unwrap();
    assert_eq!(ctx.kind, ContextKind::OutsideGit);

    let res = nav.resolve("proj2/release", &ctx).unwrap();
    assert_eq!(res.target_path, ws.worktrees_root.join("proj2").join("release"));
    assert_eq!(res.method, ResolutionMethod::CrossProject);

    let res = nav.resolve("proj2", &ctx).unwrap();
    assert_eq!(res.target_path, other);
    assert_eq!(res.method, ResolutionMethod::ProjectByName);
}

#[test]
fn test_resolve_rejects_malformed_target() {
    let ws = TestWorkspace::new();
    let repo = ws.add_project("proj1");

    let nav = Navigator::new(&ws.projects_root, &ws.worktrees_root);
    let err = nav.resolve_from(&repo, "proj1/").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InputValidation);
}
