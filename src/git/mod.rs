//! Git access for discovery
//!
//! This module provides:
//! - The `GitClient` capability trait discovery is written against
//! - `GitCli`, the implementation that shells out to `git`
//! - Porcelain output parsing

pub mod client;
pub mod command;
pub mod parser;
pub mod runner;

pub use client::{GitClient, WorktreeInfo};
pub use command::GitCli;
pub use runner::check_git_available;
