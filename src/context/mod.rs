//! Context detection and target resolution
//!
//! ## Module structure
//!
//! - `detector`: classify a directory as project, worktree or outside git
//! - `resolver`: map a short identifier to a target directory
//! - `paths`: lexical path normalization
//! - `types`: context and resolution value types

pub mod detector;
pub mod paths;
pub mod resolver;
pub mod types;

pub use detector::{ContextDetector, FsPathCheck, PathCheck};
pub use resolver::{split_cross_project, ContextResolver, MAIN_TARGET};
pub use types::{Context, ContextKind, ContextResolution, ResolutionMethod, TargetType};

use std::path::Path;

use crate::error::Result;

/// Detector and resolver sharing one pair of roots
#[derive(Debug, Clone)]
pub struct Navigator<P = FsPathCheck> {
    detector: ContextDetector<P>,
    resolver: ContextResolver,
}

impl Navigator<FsPathCheck> {
    pub fn new(projects_root: impl AsRef<Path>, worktrees_root: impl AsRef<Path>) -> Self {
        Self::with_path_check(projects_root, worktrees_root, FsPathCheck)
    }
}

impl<P: PathCheck> Navigator<P> {
    pub fn with_path_check(
        projects_root: impl AsRef<Path>,
        worktrees_root: impl AsRef<Path>,
        path_check: P,
    ) -> Self {
        Self {
            detector: ContextDetector::with_path_check(
                projects_root.as_ref(),
                worktrees_root.as_ref(),
                path_check,
            ),
            resolver: ContextResolver::new(projects_root, worktrees_root),
        }
    }

    pub fn detector(&self) -> &ContextDetector<P> {
        &self.detector
    }

    pub fn detect(&self, current_dir: &Path) -> Result<Context> {
        self.detector.detect(current_dir)
    }

    pub fn resolve(&self, target: &str, ctx: &Context) -> Result<ContextResolution> {
        self.resolver.resolve(target, ctx)
    }

    /// Detect the context of `current_dir`, then resolve `target` from it
    pub fn resolve_from(&self, current_dir: &Path, target: &str) -> Result<ContextResolution> {
        let ctx = self.detect(current_dir)?;
        self.resolve(target, &ctx)
    }
}
