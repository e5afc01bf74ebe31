//! The two-dimensional cell matrix plus placement accounting.
//!
//! A `Grid` owns an `N x N` array of [`Cell`]s, initialised to all-`Blocked`.
//! Nothing outside the `placement` module is allowed to write into it —
//! read access, plus the density metric used by the synthesizer's attempt
//! selection, is all that is exposed here.

use serde::{Deserialize, Serialize};

/// One square of the grid: either opaque (`Blocked`) or a placed letter,
/// which may carry a clue number if it starts an across or down word.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Cell {
    Blocked,
    Letter {
        #[serde(rename = "grapheme")]
        g: char,
        #[serde(skip_serializing_if = "Option::is_none")]
        number: Option<u32>,
    },
}

impl Cell {
    pub fn is_letter(&self) -> bool {
        matches!(self, Cell::Letter { .. })
    }

    pub fn grapheme(&self) -> Option<char> {
        match self {
            Cell::Letter { g, .. } => Some(*g),
            Cell::Blocked => None,
        }
    }
}

/// The `N x N` crossword grid.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Grid {
    size: usize,
    cells: Vec<Vec<Cell>>,
}

impl Grid {
    /// An empty, all-`Blocked` grid of `size x size` cells.
    pub fn new(size: usize) -> Self {
        Self {
            size,
            cells: vec![vec![Cell::Blocked; size]; size],
        }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn get(&self, row: usize, col: usize) -> Option<&Cell> {
        self.cells.get(row)?.get(col)
    }

    /// Writes a single cell. Only the `placement` module calls this — it is
    /// `pub(crate)` rather than private so that `placement::place` and the
    /// numbering pass (which stamps clue numbers after the fact) can reach
    /// it without a public, unchecked mutation surface.
    pub(crate) fn set(&mut self, row: usize, col: usize, cell: Cell) {
        self.cells[row][col] = cell;
    }

    /// Iterates cells in reading order: row-major, top-to-bottom,
    /// left-to-right.
    pub fn iter_reading_order(&self) -> impl Iterator<Item = (usize, usize, &Cell)> {
        self.cells.iter().enumerate().flat_map(|(r, row)| {
            row.iter()
                .enumerate()
                .map(move |(c, cell)| (r, c, cell))
        })
    }

    /// Letter-cell count divided by `N^2`.
    pub fn density(&self) -> f64 {
        if self.size == 0 {
            return 0.0;
        }
        let filled = self
            .cells
            .iter()
            .flatten()
            .filter(|cell| cell.is_letter())
            .count();
        filled as f64 / (self.size * self.size) as f64
    }

    pub fn letter_count(&self) -> usize {
        self.cells.iter().flatten().filter(|c| c.is_letter()).count()
    }
}
