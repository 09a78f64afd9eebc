//! Command implementations
//!
//! - `porcelain`: user-facing commands comparing two text files

pub mod porcelain;
