//! Data structures and algorithms
//!
//! - `diff`: Myers' diff engine, edit scripts and the line-based text diff
//! - `hashing`: line normalisation and fingerprints used by the text diff

pub mod diff;
pub mod hashing;
