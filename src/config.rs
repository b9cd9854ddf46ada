//! User configuration
//!
//! Read from `$GWM_CONFIG` or `<config dir>/gwm/config.toml`. Every field is
//! optional; a missing file yields the defaults.
//!
//! ```toml
//! projects_root = "~/Projects"
//! worktrees_root = "~/Worktrees"
//!
//! [discovery]
//! concurrency = 4
//! cache_expiry_secs = 300
//!
//! [status]
//! stale_after_secs = 300
//! ```

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::discovery::{DiscoveryOptions, DEFAULT_CACHE_EXPIRY, DEFAULT_CONCURRENCY};
use crate::models::worktree::DEFAULT_STALE_AFTER_SECS;

pub const CONFIG_ENV: &str = "GWM_CONFIG";
pub const PROJECTS_ROOT_ENV: &str = "GWM_PROJECTS_ROOT";
pub const WORKTREES_ROOT_ENV: &str = "GWM_WORKTREES_ROOT";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub projects_root: PathBuf,
    pub worktrees_root: PathBuf,
    pub discovery: DiscoverySection,
    pub status: StatusSection,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DiscoverySection {
    pub concurrency: usize,
    pub cache_expiry_secs: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StatusSection {
    pub stale_after_secs: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            projects_root: PathBuf::from("~/Projects"),
            worktrees_root: PathBuf::from("~/Worktrees"),
            discovery: DiscoverySection::default(),
            status: StatusSection::default(),
        }
    }
}

impl Default for DiscoverySection {
    fn default() -> Self {
        Self {
            concurrency: DEFAULT_CONCURRENCY,
            cache_expiry_secs: DEFAULT_CACHE_EXPIRY.as_secs(),
        }
    }
}

impl Default for StatusSection {
    fn default() -> Self {
        Self {
            stale_after_secs: DEFAULT_STALE_AFTER_SECS as u64,
        }
    }
}

impl Config {
    /// Load configuration from the default location, then apply environment overrides
    pub fn load() -> Result<Self> {
        let path = match std::env::var_os(CONFIG_ENV) {
            Some(path) => Some(PathBuf::from(path)),
            None => default_config_path(),
        };

        let mut config = match path {
            Some(path) if path.exists() => Self::from_file(&path)?,
            _ => Self::default(),
        };

        config.apply_env();
        config.expand_home();
        config.resolve_symlinks();
        config.validate()?;
        Ok(config)
    }

    /// Parse a config file without applying environment overrides
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    fn apply_env(&mut self) {
        if let Some(root) = std::env::var_os(PROJECTS_ROOT_ENV) {
            self.projects_root = PathBuf::from(root);
        }
        if let Some(root) = std::env::var_os(WORKTREES_ROOT_ENV) {
            self.worktrees_root = PathBuf::from(root);
        }
    }

    fn expand_home(&mut self) {
        self.projects_root = expand_tilde(&self.projects_root);
        self.worktrees_root = expand_tilde(&self.worktrees_root);
    }

    /// Canonicalize roots that exist so they compare equal to `current_dir()`
    fn resolve_symlinks(&mut self) {
        for root in [&mut self.projects_root, &mut self.worktrees_root] {
            if let Ok(real) = std::fs::canonicalize(&*root) {
                *root = real;
            }
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.projects_root.as_os_str().is_empty() {
            bail!("projects_root must not be empty");
        }
        if self.worktrees_root.as_os_str().is_empty() {
            bail!("worktrees_root must not be empty");
        }
        if self.discovery.concurrency == 0 {
            bail!("discovery.concurrency must be at least 1");
        }
        if self.discovery.cache_expiry_secs == 0 {
            bail!("discovery.cache_expiry_secs must be at least 1");
        }
        if self.status.stale_after_secs == 0 {
            bail!("status.stale_after_secs must be at least 1");
        }
        Ok(())
    }

    pub fn discovery_options(&self) -> DiscoveryOptions {
        DiscoveryOptions {
            concurrency: self.discovery.concurrency,
            cache_expiry: Duration::from_secs(self.discovery.cache_expiry_secs),
        }
    }

    pub fn stale_after(&self) -> chrono::Duration {
        // chrono panics past i64::MAX milliseconds
        let secs = i64::try_from(self.status.stale_after_secs).unwrap_or(i64::MAX);
        chrono::Duration::seconds(secs.min(i64::MAX / 1000))
    }
}

/// `<config dir>/gwm/config.toml`, if the platform has a config dir
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("gwm").join("config.toml"))
}

/// Replace a leading `~` with the home directory
pub fn expand_tilde(path: &Path) -> PathBuf {
    match path.strip_prefix("~") {
        Ok(rest) => match dirs::home_dir() {
            Some(home) => home.join(rest),
            None => path.to_path_buf(),
        },
        Err(_) => path.to_path_buf(),
    }
}
