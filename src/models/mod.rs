pub mod project;
pub mod workspace;
pub mod worktree;

pub use project::Project;
pub use workspace::Workspace;
pub use worktree::{Worktree, WorktreeStatus};
