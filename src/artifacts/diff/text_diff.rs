//! Line-oriented front end to the diff engine
//!
//! Lines are reduced to fingerprints by a `StringHasher` configured from
//! `TextDiffOptions`. The same hasher serves both texts of one call.

use crate::artifacts::diff::edit_script::EditScript;
use crate::artifacts::diff::myers::MyersDiff;
use crate::artifacts::hashing::Normalization;
use crate::artifacts::hashing::hash_type::HashType;
use crate::artifacts::hashing::string_hasher::StringHasher;
use derive_new::new;

#[derive(Debug, Clone, Copy, PartialEq, Eq, new)]
pub struct TextDiffOptions {
    pub hash_type: HashType,
    pub normalization: Normalization,
    pub skip_prefix: usize,
    pub support_change_edit_type: bool,
}

impl Default for TextDiffOptions {
    fn default() -> Self {
        TextDiffOptions {
            hash_type: HashType::Content,
            normalization: Normalization::empty(),
            skip_prefix: 0,
            support_change_edit_type: true,
        }
    }
}

impl TextDiffOptions {
    pub fn with_hash_type(mut self, hash_type: HashType) -> Self {
        self.hash_type = hash_type;
        self
    }

    pub fn with_normalization(mut self, normalization: Normalization) -> Self {
        self.normalization = normalization;
        self
    }

    pub fn with_skip_prefix(mut self, skip_prefix: usize) -> Self {
        self.skip_prefix = skip_prefix;
        self
    }

    pub fn with_change_edits(mut self, support_change_edit_type: bool) -> Self {
        self.support_change_edit_type = support_change_edit_type;
        self
    }
}

/// Line-based diff of two texts
///
/// Lines are hashed into `i32` fingerprints and the fingerprint sequences are
/// handed to [`MyersDiff`]. Edit offsets are line indices.
#[derive(Debug, Clone, Default, new)]
pub struct TextDiff {
    options: TextDiffOptions,
}

impl TextDiff {
    pub fn diff_lines<S: AsRef<str>>(&self, a: &[S], b: &[S]) -> EditScript {
        let (a_hashes, b_hashes) = self.hash_both(a, b);
        let script =
            MyersDiff::with_change_edits(&a_hashes, &b_hashes, self.options.support_change_edit_type)
                .execute();

        tracing::debug!(
            old_lines = a.len(),
            new_lines = b.len(),
            edits = script.len(),
            total_edit_length = script.total_edit_length(),
            similarity = script.similarity(),
            "diffed lines"
        );

        script
    }

    pub fn diff_text(&self, a: &str, b: &str) -> EditScript {
        let a = a.lines().collect::<Vec<_>>();
        let b = b.lines().collect::<Vec<_>>();

        self.diff_lines(&a, &b)
    }

    pub fn similarity<S: AsRef<str>>(&self, a: &[S], b: &[S]) -> f64 {
        let (a_hashes, b_hashes) = self.hash_both(a, b);
        MyersDiff::new(&a_hashes, &b_hashes).similarity()
    }

    /// Lines of `a` forming one longest common subsequence with `b`
    pub fn common_lines<'l, S: AsRef<str>>(&self, a: &'l [S], b: &[S]) -> Vec<&'l S> {
        let (a_hashes, b_hashes) = self.hash_both(a, b);

        MyersDiff::new(&a_hashes, &b_hashes)
            .match_points()
            .into_iter()
            .map(|point| &a[point.x - 1])
            .collect()
    }

    pub fn hash_lines<S: AsRef<str>>(&self, lines: &[S]) -> Vec<i32> {
        let mut hasher = self.hasher();
        lines.iter().map(|line| hasher.hash(line.as_ref())).collect()
    }

    // One hasher for both sides, so unique hashes never collide across them
    fn hash_both<S: AsRef<str>>(&self, a: &[S], b: &[S]) -> (Vec<i32>, Vec<i32>) {
        let mut hasher = self.hasher();
        let a = a.iter().map(|line| hasher.hash(line.as_ref())).collect();
        let b = b.iter().map(|line| hasher.hash(line.as_ref())).collect();

        (a, b)
    }

    fn hasher(&self) -> StringHasher {
        StringHasher::new(
            self.options.hash_type,
            self.options.normalization,
            self.options.skip_prefix,
        )
    }
}
