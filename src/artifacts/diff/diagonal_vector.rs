//! Furthest-reaching endpoints indexed by diagonal
//!
//! The search records, for every diagonal `k = x - y`, the x-coordinate of the
//! furthest-reaching path found so far. `k` is negative below the main
//! diagonal, so the vector stores its values in a plain `Vec` shifted by a
//! fixed bias. It is sized once from the input lengths and never grows.

use std::ops::{Index, IndexMut};

#[derive(Debug, Clone)]
pub struct DiagonalVector {
    bias: isize,
    values: Vec<isize>,
}

impl DiagonalVector {
    /// Vector able to hold every diagonal touched while diffing sequences of
    /// length `n` and `m`
    ///
    /// Forward diagonals stay within `±(n + m + 1)`; reverse diagonals are
    /// additionally shifted by `delta = n - m`, hence the doubled bias.
    pub fn new(n: usize, m: usize) -> Self {
        let bias = 2 * (n + m) + 2;

        DiagonalVector {
            bias: bias as isize,
            values: vec![0; 2 * bias + 1],
        }
    }

    fn slot(&self, k: isize) -> usize {
        debug_assert!(
            k.abs() <= self.bias,
            "diagonal {} outside of ±{}",
            k,
            self.bias
        );

        (k + self.bias) as usize
    }
}

impl Index<isize> for DiagonalVector {
    type Output = isize;

    fn index(&self, k: isize) -> &Self::Output {
        &self.values[self.slot(k)]
    }
}

impl IndexMut<isize> for DiagonalVector {
    fn index_mut(&mut self, k: isize) -> &mut Self::Output {
        let slot = self.slot(k);
        &mut self.values[slot]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case(0, 0)]
    #[case(3, 5)]
    #[case(10, 1)]
    fn accepts_negative_and_positive_diagonals(#[case] n: usize, #[case] m: usize) {
        let mut vector = DiagonalVector::new(n, m);
        let edge = vector.bias;

        vector[-edge] = 7;
        vector[edge] = -3;
        vector[0] = 42;

        assert_eq!(vector[-edge], 7);
        assert_eq!(vector[edge], -3);
        assert_eq!(vector[0], 42);
    }

    #[test]
    fn covers_shifted_reverse_diagonals() {
        let (n, m) = (6usize, 2usize);
        let vector = DiagonalVector::new(n, m);
        let delta = n as isize - m as isize;
        let depth = (n + m) as isize + 1;

        assert!(vector.bias >= delta + depth);
        assert!(vector.bias >= depth - delta);
    }

    #[test]
    fn starts_zeroed() {
        let vector = DiagonalVector::new(2, 2);

        assert!((-4..=4).all(|k| vector[k] == 0));
    }
}
