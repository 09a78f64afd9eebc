//! Myers' O(ND) difference algorithm
//!
//! The engine compares two borrowed sequences of `Ord` elements and finds a
//! shortest edit script between them. The longest common subsequence is
//! recovered with the linear-space refinement: find the middle snake of an
//! optimal path by running the search from both corners at once, then solve
//! the parts before and after it independently. Sub-problems are kept on an
//! explicit work stack, so the call stack does not grow with the input.
//!
//! Coordinates follow the edit graph: a point `(x, y)` means `x` elements of
//! `a` and `y` elements of `b` have been consumed, and the diagonal of a point
//! is `k = x - y`.

use crate::artifacts::diff::diagonal_vector::DiagonalVector;
use crate::artifacts::diff::edit_script::{Edit, EditScript, EditType};
use crate::artifacts::diff::sub_array::SubArray;
use derive_new::new;
use std::cmp::Ordering;

/// `a[x]` matches `b[y]`, both 1-based
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, new)]
pub struct MatchPoint {
    pub x: usize,
    pub y: usize,
}

/// Diagonal run of matches from `(start_x, start_y)` to `(end_x, end_y)`,
/// in the coordinates of the sub-problem it was found in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Snake {
    start_x: usize,
    start_y: usize,
    end_x: usize,
    end_y: usize,
}

impl Snake {
    fn from_points(start: (isize, isize), end: (isize, isize)) -> Self {
        debug_assert!(start.0 >= 0 && start.1 >= 0, "snake starts outside the grid");
        debug_assert!(end.0 - start.0 == end.1 - start.1, "snake is not diagonal");

        Snake {
            start_x: start.0 as usize,
            start_y: start.1 as usize,
            end_x: end.0 as usize,
            end_y: end.1 as usize,
        }
    }

    fn match_points<T>(
        &self,
        a: &SubArray<'_, T>,
        b: &SubArray<'_, T>,
    ) -> impl Iterator<Item = MatchPoint> {
        let (a_offset, b_offset) = (a.offset(), b.offset());
        let (start_x, start_y) = (self.start_x, self.start_y);

        (1..=self.end_x - self.start_x)
            .map(move |i| MatchPoint::new(a_offset + start_x + i, b_offset + start_y + i))
    }
}

#[derive(Debug)]
struct MiddleSnake {
    /// Length of the optimal edit script of the whole sub-problem
    edit_length: usize,
    snake: Snake,
}

enum Frame<'d, T> {
    Split(SubArray<'d, T>, SubArray<'d, T>),
    Snake(SubArray<'d, T>, SubArray<'d, T>, Snake),
}

fn equal<T: Ord>(a: &T, b: &T) -> bool {
    a.cmp(b) == Ordering::Equal
}

#[derive(Debug, Clone)]
pub struct MyersDiff<'d, T> {
    a: &'d [T],
    b: &'d [T],
    support_change_edit_type: bool,
}

impl<'d, T: Ord> MyersDiff<'d, T> {
    /// Engine that reports paired deletions and insertions as `Change` edits
    pub fn new(a: &'d [T], b: &'d [T]) -> Self {
        Self::with_change_edits(a, b, true)
    }

    pub fn with_change_edits(a: &'d [T], b: &'d [T], support_change_edit_type: bool) -> Self {
        MyersDiff {
            a,
            b,
            support_change_edit_type,
        }
    }

    /// Compute the typed edit script turning `a` into `b`
    pub fn execute(&self) -> EditScript {
        let (n, m) = (self.a.len(), self.b.len());
        let mut points = self.match_points();

        debug_assert_eq!(
            points.len(),
            self.longest_common_subsequence_length(),
            "match points disagree with the longest common subsequence length"
        );

        let mut script = EditScript::new(Self::similarity_of(points.len(), n, m));

        // The sentinel flushes the trailing gap through the same loop
        points.push(MatchPoint::new(n + 1, m + 1));

        let (mut x, mut y) = (1, 1);
        for point in points {
            if self.support_change_edit_type && x < point.x && y < point.y {
                let length = (point.x - x).min(point.y - y);
                script.add(Edit::new(EditType::Change, x - 1, y - 1, length));
                x += length;
                y += length;
            }

            if x < point.x {
                script.add(Edit::new(EditType::Delete, x - 1, y - 1, point.x - x));
            }

            if y < point.y {
                script.add(Edit::new(EditType::Insert, point.x - 1, y - 1, point.y - y));
            }

            x = point.x + 1;
            y = point.y + 1;
        }

        debug_assert_eq!(
            script.total_edit_length(),
            self.shortest_edit_script_length(),
            "edit script is not a shortest edit script"
        );

        script
    }

    /// All matches of one longest common subsequence, strictly increasing in
    /// both coordinates
    pub fn match_points(&self) -> Vec<MatchPoint> {
        let mut points = Vec::new();
        let mut forward = DiagonalVector::new(self.a.len(), self.b.len());
        let mut reverse = DiagonalVector::new(self.a.len(), self.b.len());

        let mut stack = vec![Frame::Split(SubArray::new(self.a), SubArray::new(self.b))];

        while let Some(frame) = stack.pop() {
            let (a, b) = match frame {
                Frame::Snake(a, b, snake) => {
                    points.extend(snake.match_points(&a, &b));
                    continue;
                }
                Frame::Split(a, b) => (a, b),
            };

            if a.is_empty() || b.is_empty() {
                continue;
            }

            let middle = Self::middle_snake(a, b, &mut forward, &mut reverse);
            tracing::trace!(
                a_offset = a.offset(),
                b_offset = b.offset(),
                n = a.len(),
                m = b.len(),
                d = middle.edit_length,
                "split sub-problem"
            );

            match middle.edit_length {
                0 => points.extend(
                    (1..=a.len()).map(|i| MatchPoint::new(a.absolute(i), b.absolute(i))),
                ),
                1 => Self::single_edit_match_points(a, b, &mut points),
                _ => {
                    let snake = middle.snake;

                    // Pushed in reverse so the left part is solved first
                    stack.push(Frame::Split(
                        a.slice(snake.end_x + 1, a.len() - snake.end_x),
                        b.slice(snake.end_y + 1, b.len() - snake.end_y),
                    ));
                    stack.push(Frame::Snake(a, b, snake));
                    stack.push(Frame::Split(
                        a.slice(1, snake.start_x),
                        b.slice(1, snake.start_y),
                    ));
                }
            }
        }

        points
    }

    pub fn longest_common_subsequence(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.match_points()
            .into_iter()
            .map(|point| self.a[point.x - 1].clone())
            .collect()
    }

    pub fn longest_common_subsequence_length(&self) -> usize {
        (self.a.len() + self.b.len() - self.shortest_edit_script_length()) / 2
    }

    /// Fewest single-element insertions and deletions turning `a` into `b`,
    /// searching forward from the origin
    pub fn shortest_edit_script_length(&self) -> usize {
        let (n, m) = (self.a.len() as isize, self.b.len() as isize);
        let mut forward = DiagonalVector::new(self.a.len(), self.b.len());
        forward[1] = 0;

        for d in 0..=(n + m) {
            for k in (-d..=d).step_by(2) {
                let mut x = if k == -d || (k != d && forward[k - 1] < forward[k + 1]) {
                    forward[k + 1]
                } else {
                    forward[k - 1] + 1
                };
                let mut y = x - k;

                while x < n && y < m && equal(&self.a[x as usize], &self.b[y as usize]) {
                    x += 1;
                    y += 1;
                }

                forward[k] = x;

                if x >= n && y >= m {
                    return d as usize;
                }
            }
        }

        unreachable!("a path of length n + m always reaches the end")
    }

    /// Same value as [`Self::shortest_edit_script_length`], searching backward
    /// from `(n, m)` to the origin
    pub fn reverse_shortest_edit_script_length(&self) -> usize {
        let (n, m) = (self.a.len() as isize, self.b.len() as isize);
        let delta = n - m;
        let mut reverse = DiagonalVector::new(self.a.len(), self.b.len());
        reverse[delta - 1] = n;

        for d in 0..=(n + m) {
            for k in (-d..=d).step_by(2) {
                let kr = k + delta;
                let mut x = if k == d || (k != -d && reverse[kr - 1] < reverse[kr + 1]) {
                    reverse[kr - 1]
                } else {
                    reverse[kr + 1] - 1
                };
                let mut y = x - kr;

                while x > 0 && y > 0 && equal(&self.a[x as usize - 1], &self.b[y as usize - 1]) {
                    x -= 1;
                    y -= 1;
                }

                reverse[kr] = x;

                if x <= 0 && y <= 0 {
                    return d as usize;
                }
            }
        }

        unreachable!("a path of length n + m always reaches the origin")
    }

    pub fn similarity(&self) -> f64 {
        Self::similarity_of(
            self.longest_common_subsequence_length(),
            self.a.len(),
            self.b.len(),
        )
    }

    // Two empty sequences are identical
    fn similarity_of(lcs_length: usize, n: usize, m: usize) -> f64 {
        if n + m == 0 {
            1.0
        } else {
            (2 * lcs_length) as f64 / (n + m) as f64
        }
    }

    /// Run the forward and reverse searches in lock step until they overlap
    ///
    /// Both inputs must be non-empty. The vectors are shared between calls;
    /// every value read at distance `d` was written earlier at the same `d`
    /// or at `d - 1`.
    fn middle_snake(
        a: SubArray<'_, T>,
        b: SubArray<'_, T>,
        forward: &mut DiagonalVector,
        reverse: &mut DiagonalVector,
    ) -> MiddleSnake {
        let (n, m) = (a.len() as isize, b.len() as isize);
        let delta = n - m;
        let odd = delta & 1 == 1;

        forward[1] = 0;
        reverse[delta - 1] = n;

        for d in 0..=(n + m + 1) / 2 {
            for k in (-d..=d).step_by(2) {
                let x0 = if k == -d || (k != d && forward[k - 1] < forward[k + 1]) {
                    forward[k + 1]
                } else {
                    forward[k - 1] + 1
                };
                let y0 = x0 - k;

                let (mut x, mut y) = (x0, y0);
                while x < n && y < m && equal(&a[x as usize + 1], &b[y as usize + 1]) {
                    x += 1;
                    y += 1;
                }

                forward[k] = x;

                // Reverse paths of distance d - 1 cover diagonals delta ± (d - 1)
                if odd && (k - delta).abs() < d && forward[k] >= reverse[k] {
                    return MiddleSnake {
                        edit_length: (2 * d - 1) as usize,
                        snake: Snake::from_points((x0, y0), (x, y)),
                    };
                }
            }

            for k in (-d..=d).step_by(2) {
                let kr = k + delta;
                let x0 = if k == d || (k != -d && reverse[kr - 1] < reverse[kr + 1]) {
                    reverse[kr - 1]
                } else {
                    reverse[kr + 1] - 1
                };
                let y0 = x0 - kr;

                let (mut x, mut y) = (x0, y0);
                while x > 0 && y > 0 && equal(&a[x as usize], &b[y as usize]) {
                    x -= 1;
                    y -= 1;
                }

                reverse[kr] = x;

                if !odd && kr.abs() <= d && forward[kr] >= reverse[kr] {
                    return MiddleSnake {
                        edit_length: (2 * d) as usize,
                        snake: Snake::from_points((x, y), (x0, y0)),
                    };
                }
            }
        }

        unreachable!("forward and reverse searches always overlap by distance ceil((n + m) / 2)")
    }

    /// Matches of two sequences whose lengths differ by one and that are
    /// otherwise equal in order
    fn single_edit_match_points(
        a: SubArray<'_, T>,
        b: SubArray<'_, T>,
        points: &mut Vec<MatchPoint>,
    ) {
        let a_is_longer = a.len() > b.len();
        let (mut i, mut j) = (1, 1);

        while i <= a.len() && j <= b.len() {
            if equal(&a[i], &b[j]) {
                points.push(MatchPoint::new(a.absolute(i), b.absolute(j)));
                i += 1;
                j += 1;
            } else if a_is_longer {
                i += 1;
            } else {
                j += 1;
            }
        }
    }
}
