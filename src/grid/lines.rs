//! Precomputed winning lines.
//!
//! ## Ordering
//!
//! Lines are generated direction by direction: horizontal, vertical,
//! diagonal (row and column both increasing), anti-diagonal (row
//! decreasing as the column increases). Within a direction, lines are
//! ordered by their starting cell, row-major. Win detection reports the
//! first matching line in this order.
//!
//! ## Sharing
//!
//! A catalog depends only on the shape, so a ruleset builds it once and
//! hands it to every round behind an `Arc`.

use rustc_hash::FxHashMap;
use smallvec::SmallVec;

use super::coord::Coord;
use super::shape::GridShape;

/// Exactly `win_length` consecutive in-bounds coordinates.
pub type Line = SmallVec<[Coord; 4]>;

/// Horizontal, vertical, diagonal, anti-diagonal.
const DIRECTIONS: [(isize, isize); 4] = [(0, 1), (1, 0), (1, 1), (-1, 1)];

/// Every line of `win_length` cells on a shape, plus a per-cell index.
#[derive(Clone, Debug)]
pub struct LineCatalog {
    win_length: usize,
    lines: Vec<Line>,
    through: FxHashMap<Coord, Vec<usize>>,
}

impl LineCatalog {
    #[must_use]
    pub fn new(shape: &GridShape) -> Self {
        let win_length = shape.win_length();
        // A single cell is the same line in every direction.
        let directions = if win_length == 1 {
            &DIRECTIONS[..1]
        } else {
            &DIRECTIONS[..]
        };

        let mut lines = Vec::new();
        for &(d_row, d_col) in directions {
            for start in shape.coords() {
                if let Some(line) = Self::walk(shape, start, d_row, d_col) {
                    lines.push(line);
                }
            }
        }

        let mut through: FxHashMap<Coord, Vec<usize>> = FxHashMap::default();
        for (i, line) in lines.iter().enumerate() {
            for coord in line {
                through.entry(*coord).or_default().push(i);
            }
        }

        Self {
            win_length,
            lines,
            through,
        }
    }

    fn walk(shape: &GridShape, start: Coord, d_row: isize, d_col: isize) -> Option<Line> {
        let mut line = Line::new();
        let mut at = start;
        for step in 0..shape.win_length() {
            if step > 0 {
                at = at.offset(d_row, d_col)?;
            }
            if !shape.contains(at) {
                return None;
            }
            line.push(at);
        }
        Some(line)
    }

    #[must_use]
    pub fn win_length(&self) -> usize {
        self.win_length
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Line> {
        self.lines.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Line> {
        self.lines.iter()
    }

    /// Lines containing a coordinate, in catalog order.
    pub fn lines_through(&self, coord: Coord) -> impl Iterator<Item = &Line> {
        self.through
            .get(&coord)
            .into_iter()
            .flatten()
            .map(move |&i| &self.lines[i])
    }
}
