//! Concurrent worktree and project discovery
//!
//! Scans the immediate subdirectories of a workspace, asks git which are
//! repositories and what worktrees they have, then analyzes every candidate
//! on a bounded pool of worker threads. Results are cached per path.

use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::sync::{mpsc, Mutex};
use std::thread;
use std::time::Duration;
use tracing::{debug, info, warn};

use super::cache::{WorktreeCache, DEFAULT_CACHE_EXPIRY};
use super::cancel::CancelToken;
use crate::error::{Error, Result};
use crate::git::{GitClient, WorktreeInfo};
use crate::models::{Project, Workspace, Worktree};

/// Worker threads used when nothing else is configured
pub const DEFAULT_CONCURRENCY: usize = 4;

/// Upper bound for the worker pool
pub const MAX_CONCURRENCY: usize = 16;

/// Branch label recorded for worktrees with a detached HEAD
pub const DETACHED_BRANCH: &str = "HEAD";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DiscoveryOptions {
    pub concurrency: usize,
    pub cache_expiry: Duration,
}

impl Default for DiscoveryOptions {
    fn default() -> Self {
        Self {
            concurrency: DEFAULT_CONCURRENCY,
            cache_expiry: DEFAULT_CACHE_EXPIRY,
        }
    }
}

pub struct Discovery<G> {
    git: G,
    cache: WorktreeCache,
    concurrency: usize,
}

impl<G: GitClient> Discovery<G> {
    pub fn new(git: G) -> Self {
        Self::with_options(git, DiscoveryOptions::default())
    }

    pub fn with_options(git: G, options: DiscoveryOptions) -> Self {
        Self {
            git,
            cache: WorktreeCache::new(options.cache_expiry),
            concurrency: clamp_concurrency(options.concurrency),
        }
    }

    /// Sets the worker pool size, clamped to `1..=MAX_CONCURRENCY`
    pub fn set_concurrency(&mut self, n: usize) {
        self.concurrency = clamp_concurrency(n);
    }

    pub fn concurrency(&self) -> usize {
        self.concurrency
    }

    pub fn cache(&self) -> &WorktreeCache {
        &self.cache
    }

    pub fn clear_cache(&self) {
        self.cache.clear();
    }

    pub fn git(&self) -> &G {
        &self.git
    }

    /// Analyze one worktree, serving fresh cached results without calling git
    pub fn analyze_worktree(&self, path: &Path) -> Result<Worktree> {
        self.analyze(path, None)
    }

    /// Find every worktree of every repository directly under `workspace`
    ///
    /// Output order is unspecified. Individual failures are dropped unless
    /// they make up at least half of the candidates.
    pub fn discover_worktrees(&self, workspace: &Path) -> Result<Vec<Worktree>> {
        self.discover_worktrees_with_cancel(workspace, &CancelToken::new())
    }

    /// Like [`discover_worktrees`](Self::discover_worktrees), stopping early once `token` is cancelled
    pub fn discover_worktrees_with_cancel(
        &self,
        workspace: &Path,
        token: &CancelToken,
    ) -> Result<Vec<Worktree>> {
        validate_workspace(workspace)?;

        let pruned = self.cache.prune_expired();
        if pruned > 0 {
            debug!(pruned, "dropped expired cache entries");
        }

        let mut candidates = Vec::new();
        let mut seen = HashSet::new();
        for repo in self.repositories(workspace, token)? {
            for info in self.worktrees_of(&repo) {
                if seen.insert(info.path.clone()) {
                    candidates.push(info.path);
                }
            }
        }

        let (worktrees, failures) = self.analyze_all(&candidates, token);
        if token.is_cancelled() {
            return Err(Error::Cancelled);
        }

        let total = candidates.len();
        apply_failure_policy(total, &failures)?;

        for (path, err) in &failures {
            debug!(path = %path.display(), error = %err, "dropping worktree that failed analysis");
        }
        info!(
            workspace = %workspace.display(),
            found = worktrees.len(),
            failed = failures.len(),
            "worktree discovery finished"
        );
        Ok(worktrees)
    }

    /// Find the main repositories directly under `workspace`, with their linked worktrees
    ///
    /// A worktree that fails analysis is left off its project.
    pub fn discover_projects(&self, workspace: &Path) -> Result<Vec<Project>> {
        self.discover_projects_with_cancel(workspace, &CancelToken::new())
    }

    /// Like [`discover_projects`](Self::discover_projects), stopping early once `token` is cancelled
    pub fn discover_projects_with_cancel(
        &self,
        workspace: &Path,
        token: &CancelToken,
    ) -> Result<Vec<Project>> {
        validate_workspace(workspace)?;

        let mut projects = Vec::new();
        for dir in subdirectories(workspace)? {
            if token.is_cancelled() {
                return Err(Error::Cancelled);
            }
            match self.git.is_main_repository(&dir) {
                Ok(true) => {}
                Ok(false) => continue,
                Err(err) => {
                    debug!(path = %dir.display(), error = %err, "skipping directory");
                    continue;
                }
            }

            let name = match dir.file_name() {
                Some(name) => name.to_string_lossy().to_string(),
                None => continue,
            };
            let mut project = Project::new(name, dir.clone())?;

            // git reports canonical paths; `dir` may sit behind a symlink
            let main_checkout = canonical(&dir);
            let linked: Vec<PathBuf> = self
                .worktrees_of(&dir)
                .into_iter()
                .map(|info| info.path)
                .filter(|path| canonical(path) != main_checkout)
                .collect();

            let (worktrees, failures) = self.analyze_all(&linked, token);
            if token.is_cancelled() {
                return Err(Error::Cancelled);
            }
            for (path, err) in failures {
                debug!(project = %project.name, path = %path.display(), error = %err, "skipping worktree");
            }
            for worktree in worktrees {
                if let Err(err) = project.add_worktree(worktree) {
                    debug!(project = %project.name, error = %err, "skipping duplicate worktree");
                }
            }
            projects.push(project);
        }

        info!(workspace = %workspace.display(), found = projects.len(), "project discovery finished");
        Ok(projects)
    }

    /// Discover projects and gather them into a [`Workspace`]
    pub fn discover_workspace(&self, workspace: &Path) -> Result<Workspace> {
        let projects = self.discover_projects(workspace)?;
        Workspace::with_projects(workspace, projects)
    }

    fn analyze(&self, path: &Path, token: Option<&CancelToken>) -> Result<Worktree> {
        if path.as_os_str().is_empty() {
            return Err(Error::InvalidInput("worktree path is empty".into()));
        }

        if let Some(cached) = self.cache.get(path) {
            debug!(path = %path.display(), "worktree cache hit");
            return Ok(cached);
        }

        if token.is_some_and(CancelToken::is_cancelled) {
            return Err(Error::Cancelled);
        }

        let info = self
            .git
            .get_worktree_status(path)
            .map_err(|err| Error::capability(path, err))?;
        let worktree = to_worktree(path, info)?;

        self.cache.insert(path, worktree.clone());
        Ok(worktree)
    }

    fn repositories(&self, workspace: &Path, token: &CancelToken) -> Result<Vec<PathBuf>> {
        let mut repos = Vec::new();
        for dir in subdirectories(workspace)? {
            if token.is_cancelled() {
                return Err(Error::Cancelled);
            }
            match self.git.is_git_repository(&dir) {
                Ok(true) => repos.push(dir),
                Ok(false) => debug!(path = %dir.display(), "not a git repository"),
                Err(err) => debug!(path = %dir.display(), error = %err, "repository check failed"),
            }
        }
        Ok(repos)
    }

    fn worktrees_of(&self, repo: &Path) -> Vec<WorktreeInfo> {
        match self.git.list_worktrees(repo) {
            Ok(worktrees) => worktrees,
            Err(err) => {
                warn!(repo = %repo.display(), error = %err, "could not list worktrees");
                Vec::new()
            }
        }
    }

    /// Run `analyze` over `paths` on the worker pool.
    ///
    /// A producer thread feeds a bounded queue; results and failures come
    /// back on separate channels. Jobs pulled after cancellation are skipped.
    fn analyze_all(
        &self,
        paths: &[PathBuf],
        token: &CancelToken,
    ) -> (Vec<Worktree>, Vec<(PathBuf, Error)>) {
        if paths.is_empty() {
            return (Vec::new(), Vec::new());
        }

        let workers = self.concurrency.min(paths.len());
        let (job_tx, job_rx) = mpsc::sync_channel::<PathBuf>(workers);
        let job_rx = Mutex::new(job_rx);
        let (result_tx, result_rx) = mpsc::channel::<Worktree>();
        let (error_tx, error_rx) = mpsc::channel::<(PathBuf, Error)>();

        thread::scope(|scope| {
            scope.spawn(move || {
                for path in paths {
                    if token.is_cancelled() || job_tx.send(path.clone()).is_err() {
                        break;
                    }
                }
            });

            for _ in 0..workers {
                let result_tx = result_tx.clone();
                let error_tx = error_tx.clone();
                let job_rx = &job_rx;
                scope.spawn(move || loop {
                    let next = match job_rx.lock() {
                        Ok(rx) => rx.recv(),
                        Err(_) => break,
                    };
                    let Ok(path) = next else { break };

                    // Keep draining after cancellation so the producer never blocks
                    if token.is_cancelled() {
                        continue;
                    }

                    match self.analyze(&path, Some(token)) {
                        Ok(worktree) => {
                            let _ = result_tx.send(worktree);
                        }
                        Err(Error::Cancelled) => {}
                        Err(err) => {
                            let _ = error_tx.send((path, err));
                        }
                    }
                });
            }

            drop(result_tx);
            drop(error_tx);

            let worktrees: Vec<Worktree> = result_rx.iter().collect();
            let failures: Vec<(PathBuf, Error)> = error_rx.iter().collect();
            (worktrees, failures)
        })
    }
}

fn clamp_concurrency(n: usize) -> usize {
    n.clamp(1, MAX_CONCURRENCY)
}

fn validate_workspace(workspace: &Path) -> Result<()> {
    if workspace.as_os_str().is_empty() {
        return Err(Error::InvalidInput("workspace path is empty".into()));
    }
    if !workspace.is_dir() {
        return Err(Error::WorkspaceNotFound(workspace.to_path_buf()));
    }
    Ok(())
}

/// `path` with symlinks resolved, or unchanged if it cannot be resolved
fn canonical(path: &Path) -> PathBuf {
    std::fs::canonicalize(path).unwrap_or_else(|_| path.to_path_buf())
}

/// Immediate subdirectories of `dir`, sorted
fn subdirectories(dir: &Path) -> Result<Vec<PathBuf>> {
    let entries = std::fs::read_dir(dir).map_err(|err| Error::io(dir, err))?;

    let mut dirs: Vec<PathBuf> = entries
        .flatten()
        .map(|entry| entry.path())
        .filter(|path| path.is_dir())
        .collect();
    dirs.sort();
    Ok(dirs)
}

fn to_worktree(path: &Path, info: WorktreeInfo) -> Result<Worktree> {
    let branch = info
        .branch
        .filter(|b| !b.is_empty())
        .unwrap_or_else(|| DETACHED_BRANCH.to_string());
    let mut worktree = Worktree::new(path, branch)?;
    worktree.update_status(info.head, info.status);
    Ok(worktree)
}

/// Fail when at least half of `total` candidates failed.
///
/// The sample is the failure with the smallest path so the message does not
/// depend on completion order.
fn apply_failure_policy(total: usize, failures: &[(PathBuf, Error)]) -> Result<()> {
    let failed = failures.len();
    if failed == 0 || failed * 2 < total {
        return Ok(());
    }

    let sample = failures
        .iter()
        .min_by(|a, b| a.0.cmp(&b.0))
        .map(|(_, err)| err.to_string())
        .unwrap_or_default();

    Err(Error::TooManyFailures {
        failed,
        total,
        sample,
    })
}
