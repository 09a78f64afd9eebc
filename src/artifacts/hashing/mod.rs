//! Line fingerprints for the diff engine
//!
//! Text lines are compared through 32-bit hashes of their normalised form:
//!
//! - `hash_type`: which fingerprint function is applied
//! - `string_hasher`: normalisation and hashing of single lines
//!
//! Equal normalised lines always hash equally. Distinct lines may collide,
//! which the diff then treats as a match.

use bitflags::bitflags;

pub mod hash_type;
pub mod string_hasher;

bitflags! {
    /// Normalisation applied to a line before it is hashed
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct Normalization: u8 {
        const IGNORE_CASE = 0b01;
        const TRIM_WHITESPACE = 0b10;
    }
}
