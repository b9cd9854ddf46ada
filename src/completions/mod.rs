pub mod dynamic;
pub mod generator;

pub use dynamic::complete_targets;
pub use generator::{generate_completions, shell_integration, write_completions, Shell};
