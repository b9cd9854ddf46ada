//! Worktree and project discovery
//!
//! ## Module structure
//!
//! - `engine`: workspace scan, worker pool, partial-failure policy
//! - `cache`: per-path analysis cache with expiry
//! - `cancel`: cancellation flag shared with workers

mod cache;
mod cancel;
mod engine;


pub use cache::{WorktreeCache, DEFAULT_CACHE_EXPIRY};
pub use cancel::CancelToken;
pub use engine::{
    Discovery, DiscoveryOptions, DEFAULT_CONCURRENCY, DETACHED_BRANCH, MAX_CONCURRENCY,
};
