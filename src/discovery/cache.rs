//! Per-path worktree analysis cache with time-based expiry

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{PoisonError, RwLock};
use std::time::{Duration, Instant};

use crate::models::Worktree;

/// How long an analyzed worktree stays fresh by default
pub const DEFAULT_CACHE_EXPIRY: Duration = Duration::from_secs(300);

#[derive(Debug, Clone)]
struct CacheEntry {
    worktree: Worktree,
    cached_at: Instant,
}

/// Analyzed worktrees keyed by path.
///
/// Readers get clones; an entry is only ever replaced as a whole.
#[derive(Debug)]
pub struct WorktreeCache {
    entries: RwLock<HashMap<PathBuf, CacheEntry>>,
    expiry: Duration,
}

impl Default for WorktreeCache {
    fn default() -> Self {
        Self::new(DEFAULT_CACHE_EXPIRY)
    }
}

impl WorktreeCache {
    pub fn new(expiry: Duration) -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
            expiry,
        }
    }

    pub fn expiry(&self) -> Duration {
        self.expiry
    }

    /// Returns the cached worktree for `path` if it is younger than the expiry
    pub fn get(&self, path: &Path) -> Option<Worktree> {
        let entries = self.entries.read().unwrap_or_else(PoisonError::into_inner);
        entries
            .get(path)
            .filter(|entry| entry.cached_at.elapsed() < self.expiry)
            .map(|entry| entry.worktree.clone())
    }

    pub fn insert(&self, path: impl Into<PathBuf>, worktree: Worktree) {
        self.insert_at(path.into(), worktree, Instant::now());
    }

    fn insert_at(&self, path: PathBuf, worktree: Worktree, cached_at: Instant) {
        let mut entries = self.entries.write().unwrap_or_else(PoisonError::into_inner);
        entries.insert(
            path,
            CacheEntry {
                worktree,
                cached_at,
            },
        );
    }

    pub fn clear(&self) {
        self.entries
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }

    /// Drops expired entries, returning how many were removed
    pub fn prune_expired(&self) -> usize {
        let mut entries = self.entries.write().unwrap_or_else(PoisonError::into_inner);
        let before = entries.len();
        entries.retain(|_, entry| entry.cached_at.elapsed() < self.expiry);
        before - entries.len()
    }

    /// Number of stored entries, fresh or not
    pub fn len(&self) -> usize {
        self.entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
