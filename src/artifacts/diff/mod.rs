//! Sequence differencing
//!
//! This module implements Myers' shortest edit script algorithm over any
//! ordered element type, plus a line-based front end for text:
//!
//! - `sub_array`: 1-based zero-copy windows used for sub-problems
//! - `diagonal_vector`: furthest-reaching endpoints indexed by signed diagonal
//! - `myers`: middle-snake search, match points, LCS and edit scripts
//! - `edit_script`: typed edits and the script that holds them
//! - `text_diff`: hashes lines and diffs the fingerprints
//!
//! A diff run is a pure, single-threaded computation; every working buffer is
//! allocated per call, so independent runs can happen on separate threads.

pub mod diagonal_vector;
pub mod edit_script;
pub mod myers;
pub mod sub_array;
pub mod text_diff;
