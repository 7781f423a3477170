//! Text rendering of grids.
//!
//! Rendering only reads cells through `Grid::cell_at`.

use std::fmt;

use crate::core::{Token, TokenMap};
use crate::grid::{Cell, Coord, Grid, Placement};

/// Join items as an English choice list: `a`, `a or b`, `a, b, or c`.
#[must_use]
pub fn join_or<T: fmt::Display>(items: &[T]) -> String {
    match items {
        [] => String::new(),
        [only] => only.to_string(),
        [a, b] => format!("{a} or {b}"),
        [init @ .., last] => {
            let head: Vec<String> = init.iter().map(ToString::to_string).collect();
            format!("{}, or {last}", head.join(", "))
        }
    }
}

/// Seat the human's chosen marker at `Token::First`.
///
/// `pick` must name one of the two default markers, ignoring case; the
/// other default goes to `Token::Second`.
///
/// ```
/// use parlor::render::pick_markers;
/// use parlor::{Token, TokenMap};
///
/// let markers = pick_markers(&TokenMap::new(Token::marker), 'o').unwrap();
/// assert_eq!((markers[Token::First], markers[Token::Second]), ('O', 'X'));
/// ```
#[must_use]
pub fn pick_markers(defaults: &TokenMap<char>, pick: char) -> Option<TokenMap<char>> {
    let pick = pick.to_ascii_uppercase();
    let (first, second) = (defaults[Token::First], defaults[Token::Second]);
    if pick == first.to_ascii_uppercase() {
        Some(TokenMap::from_pair(first, second))
    } else if pick == second.to_ascii_uppercase() {
        Some(TokenMap::from_pair(second, first))
    } else {
        None
    }
}

/// Display adapter for a grid.
///
/// Drop grids print the top row first with one-based column labels
/// underneath. Free grids print each empty cell's square number.
pub struct GridView<'a> {
    grid: &'a Grid,
    markers: TokenMap<char>,
}

impl<'a> GridView<'a> {
    #[must_use]
    pub fn new(grid: &'a Grid) -> Self {
        Self {
            grid,
            markers: TokenMap::new(Token::marker),
        }
    }

    #[must_use]
    pub fn with_markers(mut self, markers: TokenMap<char>) -> Self {
        self.markers = markers;
        self
    }

    fn symbol(&self, coord: Coord, blank: char) -> char {
        match self.grid.cell_at(coord) {
            Ok(Cell::Marked(token)) => self.markers[token],
            _ => blank,
        }
    }

    fn fmt_drop(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let shape = self.grid.shape();
        let border = format!("+{}", "---+".repeat(shape.cols()));
        writeln!(f, "{border}")?;
        for row in (0..shape.rows()).rev() {
            write!(f, "|")?;
            for col in 0..shape.cols() {
                write!(f, " {} |", self.symbol(Coord::new(row, col), ' '))?;
            }
            writeln!(f)?;
            writeln!(f, "{border}")?;
        }
        for col in 0..shape.cols() {
            write!(f, "  {} ", (col + 1) % 10)?;
        }
        writeln!(f)
    }

    fn fmt_free(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let shape = self.grid.shape();
        let width = shape.cell_count().to_string().len();
        let separator = vec!["-".repeat(width + 2); shape.cols()].join("+");
        for row in 0..shape.rows() {
            if row > 0 {
                writeln!(f, "{separator}")?;
            }
            let cells: Vec<String> = (0..shape.cols())
                .map(|col| {
                    let coord = Coord::new(row, col);
                    match self.grid.cell_at(coord) {
                        Ok(Cell::Marked(token)) => {
                            format!(" {:^width$} ", self.markers[token])
                        }
                        _ => format!(" {:^width$} ", row * shape.cols() + col + 1),
                    }
                })
                .collect();
            writeln!(f, "{}", cells.join("|"))?;
        }
        Ok(())
    }
}

impl fmt::Display for GridView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.grid.shape().placement() {
            Placement::Drop => self.fmt_drop(f),
            Placement::Free => self.fmt_free(f),
        }
    }
}
