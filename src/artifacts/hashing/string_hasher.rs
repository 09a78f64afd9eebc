use crate::artifacts::hashing::Normalization;
use crate::artifacts::hashing::hash_type::HashType;
use byteorder::{BigEndian, ByteOrder};
use flate2::Crc;
use sha1::{Digest, Sha1};
use std::borrow::Cow;

/// Maps text lines to `i32` fingerprints
///
/// The hasher is a pure function of its configuration and the line, except in
/// `HashType::Unique` mode where it hands out a new value on every call.
#[derive(Debug, Clone)]
pub struct StringHasher {
    hash_type: HashType,
    normalization: Normalization,
    skip_prefix: usize,
    next_unique: i32,
}

impl StringHasher {
    pub fn new(hash_type: HashType, normalization: Normalization, skip_prefix: usize) -> Self {
        StringHasher {
            hash_type,
            normalization,
            skip_prefix,
            next_unique: 0,
        }
    }

    pub fn hash(&mut self, line: &str) -> i32 {
        match self.hash_type {
            HashType::Content => {
                let digest = Sha1::digest(self.normalize(line).as_bytes());
                BigEndian::read_i32(&digest[..4])
            }
            HashType::Crc32 => {
                let mut crc = Crc::new();
                crc.update(self.normalize(line).as_bytes());
                crc.sum() as i32
            }
            HashType::Unique => {
                let value = self.next_unique;
                self.next_unique = self.next_unique.wrapping_add(1);
                value
            }
        }
    }

    /// The form of `line` that is actually hashed
    ///
    /// The prefix is skipped first (by characters), then surrounding
    /// whitespace is trimmed, then the case is folded.
    pub fn normalize<'l>(&self, line: &'l str) -> Cow<'l, str> {
        let mut line = if self.skip_prefix == 0 {
            line
        } else {
            match line.char_indices().nth(self.skip_prefix) {
                Some((at, _)) => &line[at..],
                None => "",
            }
        };

        if self.normalization.contains(Normalization::TRIM_WHITESPACE) {
            line = line.trim();
        }

        if self.normalization.contains(Normalization::IGNORE_CASE) {
            Cow::Owned(line.to_lowercase())
        } else {
            Cow::Borrowed(line)
        }
    }
}
