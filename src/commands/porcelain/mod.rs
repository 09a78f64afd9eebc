//! Porcelain commands
//!
//! Each command is an `impl Session` block that reads its inputs through the
//! session's workspace and reports to the session's writer.
//!
//! ## Commands
//!
//! - `diff`: list the edits turning one file into another
//! - `similarity`: print how similar two files are
//! - `lcs`: print the lines the two files have in common

pub mod diff;
pub mod lcs;
pub mod similarity;
