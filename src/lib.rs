pub mod commands;
pub mod completions;
pub mod config;
pub mod context;
pub mod discovery;
pub mod error;
pub mod git;
pub mod logging;
pub mod models;

pub use error::{Error, ErrorKind, Result};
