pub mod common;
pub mod list;
pub mod navigate;
pub mod projects;
