//! Zero-copy windows over a backing sequence
//!
//! The divide-and-conquer search keeps splitting its inputs into smaller
//! ranges. A `SubArray` is a borrowed view `(backing, offset, length)` so no
//! split ever copies elements. Indexing is 1-based, matching the coordinates
//! used in the edit graph: position `i` of the view is `backing[offset + i - 1]`.

use std::ops::Index;

#[derive(Debug)]
pub struct SubArray<'a, T> {
    data: &'a [T],
    offset: usize,
    length: usize,
}

// Manual impls: a view is copyable regardless of whether `T` is.
impl<T> Clone for SubArray<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for SubArray<'_, T> {}

impl<'a, T> SubArray<'a, T> {
    /// View over the whole backing sequence
    pub fn new(data: &'a [T]) -> Self {
        SubArray {
            data,
            offset: 0,
            length: data.len(),
        }
    }

    /// Narrow this view to `length` elements starting at the 1-based `offset`
    ///
    /// `offset` is relative to this view, so `slice(1, self.len())` is the
    /// view itself. An empty slice may start one past the end.
    pub fn slice(&self, offset: usize, length: usize) -> Self {
        debug_assert!(offset >= 1, "sub array offsets are 1-based");
        debug_assert!(offset - 1 + length <= self.length);

        SubArray {
            data: self.data,
            offset: self.offset + offset - 1,
            length,
        }
    }

    pub fn len(&self) -> usize {
        self.length
    }

    pub fn is_empty(&self) -> bool {
        self.length == 0
    }

    /// Zero-based position of this view's first element in the backing sequence
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// 1-based position in the backing sequence of the view's `i`-th element
    pub fn absolute(&self, i: usize) -> usize {
        self.offset + i
    }

    pub fn iter(&self) -> std::slice::Iter<'a, T> {
        let data: &'a [T] = self.data;
        data[self.offset..self.offset + self.length].iter()
    }
}

impl<T> Index<usize> for SubArray<'_, T> {
    type Output = T;

    fn index(&self, i: usize) -> &Self::Output {
        if i == 0 || i > self.length {
            panic!(
                "sub array index out of bounds: the len is {} but the index is {}",
                self.length, i
            );
        }

        &self.data[self.offset + i - 1]
    }
}
