//! Command environment
//!
//! - `session`: output writer and workspace shared by all commands
//! - `workspace`: resolves and reads the files being compared

pub mod session;
pub mod workspace;
