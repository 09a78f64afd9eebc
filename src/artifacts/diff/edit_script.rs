//! Typed edit operations produced by a diff run
//!
//! An `EditScript` is assembled once by the engine and is read-only
//! afterwards. Offsets are zero-based positions into the two compared
//! sequences.

use derive_new::new;
use std::fmt::Display;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EditType {
    Delete,
    Insert,
    /// A delete and an insert of the same length at the same place
    Change,
}

impl EditType {
    pub fn as_str(&self) -> &'static str {
        match self {
            EditType::Delete => "Delete",
            EditType::Insert => "Insert",
            EditType::Change => "Change",
        }
    }
}

impl Display for EditType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, new)]
pub struct Edit {
    pub edit_type: EditType,
    pub start_x: usize,
    pub start_y: usize,
    pub length: usize,
}

impl Edit {
    /// Number of single-element insertions and deletions this edit stands for
    pub fn edit_length(&self) -> usize {
        match self.edit_type {
            EditType::Change => 2 * self.length,
            EditType::Delete | EditType::Insert => self.length,
        }
    }

    /// Exclusive end of the affected range in the old sequence
    pub fn end_x(&self) -> usize {
        match self.edit_type {
            EditType::Insert => self.start_x,
            EditType::Delete | EditType::Change => self.start_x + self.length,
        }
    }

    /// Exclusive end of the affected range in the new sequence
    pub fn end_y(&self) -> usize {
        match self.edit_type {
            EditType::Delete => self.start_y,
            EditType::Insert | EditType::Change => self.start_y + self.length,
        }
    }
}

impl Display for Edit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.edit_type {
            EditType::Delete => write!(
                f,
                "{} a[{}..{}] b@{}",
                self.edit_type,
                self.start_x,
                self.end_x(),
                self.start_y
            ),
            EditType::Insert => write!(
                f,
                "{} a@{} b[{}..{}]",
                self.edit_type,
                self.start_x,
                self.start_y,
                self.end_y()
            ),
            EditType::Change => write!(
                f,
                "{} a[{}..{}] b[{}..{}]",
                self.edit_type,
                self.start_x,
                self.end_x(),
                self.start_y,
                self.end_y()
            ),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct EditScript {
    edits: Vec<Edit>,
    total_edit_length: usize,
    similarity: f64,
}

impl EditScript {
    pub(crate) fn new(similarity: f64) -> Self {
        EditScript {
            edits: Vec::new(),
            total_edit_length: 0,
            similarity,
        }
    }

    pub(crate) fn add(&mut self, edit: Edit) {
        self.total_edit_length += edit.edit_length();
        self.edits.push(edit);
    }

    pub fn edits(&self) -> &[Edit] {
        &self.edits
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Edit> {
        self.edits.iter()
    }

    pub fn len(&self) -> usize {
        self.edits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edits.is_empty()
    }

    /// Sum of `edit_length` over all edits; equals the shortest edit script length
    pub fn total_edit_length(&self) -> usize {
        self.total_edit_length
    }

    /// `2 * lcs / (n + m)`, fixed when the script is built
    pub fn similarity(&self) -> f64 {
        self.similarity
    }

    /// Replay the script against `a`, taking inserted elements from `b`
    ///
    /// For a script produced by diffing `a` against `b` the result equals `b`.
    pub fn apply<T: Clone>(&self, a: &[T], b: &[T]) -> Vec<T> {
        let mut output = Vec::with_capacity(b.len());
        let mut cursor = 0;

        for edit in &self.edits {
            output.extend_from_slice(&a[cursor..edit.start_x]);

            match edit.edit_type {
                EditType::Delete => {}
                EditType::Insert | EditType::Change => {
                    output.extend_from_slice(&b[edit.start_y..edit.end_y()]);
                }
            }

            cursor = edit.end_x();
        }

        output.extend_from_slice(&a[cursor..]);
        output
    }
}

impl AsRef<[Edit]> for EditScript {
    fn as_ref(&self) -> &[Edit] {
        &self.edits
    }
}

impl<'s> IntoIterator for &'s EditScript {
    type Item = &'s Edit;
    type IntoIter = std::slice::Iter<'s, Edit>;

    fn into_iter(self) -> Self::IntoIter {
        self.edits.iter()
    }
}

impl IntoIterator for EditScript {
    type Item = Edit;
    type IntoIter = std::vec::IntoIter<Edit>;

    fn into_iter(self) -> Self::IntoIter {
        self.edits.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case(EditType::Delete, 3, 3)]
    #[case(EditType::Insert, 3, 3)]
    #[case(EditType::Change, 3, 6)]
    fn edit_length_counts_changes_twice(
        #[case] edit_type: EditType,
        #[case] length: usize,
        #[case] expected: usize,
    ) {
        assert_eq!(Edit::new(edit_type, 0, 0, length).edit_length(), expected);
    }

    #[test]
    fn add_accumulates_total_edit_length() {
        let mut script = EditScript::new(0.5);
        script.add(Edit::new(EditType::Delete, 0, 0, 2));
        script.add(Edit::new(EditType::Change, 4, 2, 1));
        script.add(Edit::new(EditType::Insert, 7, 5, 3));

        assert_eq!(script.len(), 3);
        assert_eq!(script.total_edit_length(), 7);
        assert_eq!(script.similarity(), 0.5);
    }

    #[test]
    fn apply_replays_every_edit_kind() {
        let a = vec!['a', 'b', 'c', 'd', 'e'];
        let b = vec!['b', 'x', 'y', 'e', 'z'];

        let mut script = EditScript::new(0.4);
        script.add(Edit::new(EditType::Delete, 0, 0, 1));
        script.add(Edit::new(EditType::Change, 2, 1, 2));
        script.add(Edit::new(EditType::Insert, 5, 4, 1));

        assert_eq!(script.apply(&a, &b), b);
    }

    #[test]
    fn apply_of_empty_script_keeps_input() {
        let a = vec![1, 2, 3];

        assert_eq!(EditScript::new(1.0).apply(&a, &a), a);
    }

    #[rstest]
    #[case(Edit::new(EditType::Delete, 1, 1, 1), "Delete a[1..2] b@1")]
    #[case(Edit::new(EditType::Insert, 2, 0, 2), "Insert a@2 b[0..2]")]
    #[case(Edit::new(EditType::Change, 0, 0, 2), "Change a[0..2] b[0..2]")]
    fn edits_display_as_ranges(#[case] edit: Edit, #[case] expected: &str) {
        assert_eq!(edit.to_string(), expected);
    }
}
