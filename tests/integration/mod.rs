//! Integration tests for gwm
//!
//! These run against real git repositories laid out in temporary
//! `Projects/` and `Worktrees/` trees.

pub mod cli;
pub mod discovery;
pub mod helpers;
pub mod navigation;
