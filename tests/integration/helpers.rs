//! Shared test helpers: temporary workspaces with real git repositories

use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::TempDir;

/// A temporary `Projects/` + `Worktrees/` layout
pub struct TestWorkspace {
    pub temp: TempDir,
    pub projects_root: PathBuf,
    pub worktrees_root: PathBuf,
}

impl TestWorkspace {
    pub fn new() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let projects_root = temp.path().join("Projects");
        let worktrees_root = temp.path().join("Worktrees");
        fs::create_dir_all(&projects_root).expect("Failed to create Projects/");
        fs::create_dir_all(&worktrees_root).expect("Failed to create Worktrees/");
        Self {
            temp,
            projects_root,
            worktrees_root,
        }
    }

    /// A symlink to this workspace's root, living in a separate temp dir
    #[cfg(unix)]
    pub fn symlinked(&self) -> (TempDir, PathBuf) {
        let holder = TempDir::new().expect("Failed to create temp directory");
        let link = holder.path().join("ws");
        std::os::unix::fs::symlink(self.temp.path(), &link).expect("Failed to create symlink");
        (holder, link)
    }

    /// Create `Projects/<name>` as a git repository with an initial commit on `main`
    pub fn add_project(&self, name: &str) -> PathBuf {
        let repo = self.projects_root.join(name);
        init_test_repo(&repo);
        repo
    }

    /// Check out a new branch of `project` at `Worktrees/<project>/<branch>`
    pub fn add_worktree(&self, project: &str, branch: &str) -> PathBuf {
        let path = self.worktrees_root.join(project).join(branch);
        fs::create_dir_all(path.parent().expect("worktree has a parent"))
            .expect("Failed to create worktree parent");
        git(
            &[
                "worktree",
                "add",
                "-b",
                branch,
                path.to_str().expect("utf-8 temp path"),
            ],
            &self.projects_root.join(project),
        );
        path
    }
}

/// Test helper: initialize a git repository with an initial commit on `main`
pub fn init_test_repo(repo_root: &Path) {
    fs::create_dir_all(repo_root).expect("Failed to create repo directory");

    git(&["init"], repo_root);
    git(&["config", "user.email", "test@test.com"], repo_root);
    git(&["config", "user.name", "Test User"], repo_root);

    fs::write(repo_root.join("README.md"), "# Test Repository\n")
        .expect("Failed to write README.md");

    git(&["add", "."], repo_root);
    git(&["commit", "-m", "Initial commit"], repo_root);
    git(&["branch", "-M", "main"], repo_root);
}

pub fn git(args: &[&str], dir: &Path) {
    let output = Command::new("git")
        .args(args)
        .current_dir(dir)
        .output()
        .expect("Failed to run git");
    assert!(
        output.status.success(),
        "git {} failed: {}",
        args.join(" "),
        String::from_utf8_lossy(&output.stderr)
    );
}
