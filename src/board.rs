//! # Board Module
//!
//! The shared grid store every detection strategy operates on. The board is
//! a fixed-size rows x columns grid of `char` symbols with gravity-drop
//! semantics: a disc dropped into a column lands on the lowest empty cell.
//!
//! Row 0 is the top of the board, row `rows - 1` the bottom. Cells are kept
//! in a flat row-major vector, so the cell at `(row, column)` lives at index
//! `row * columns + column`.

use std::fmt;
use thiserror::Error;

/// Symbol stored in unoccupied cells.
pub const EMPTY: char = ' ';

/// Errors raised by board construction and disc drops.
///
/// A full column is deliberately *not* represented here: it is a normal
/// outcome of play, reported as `Ok(None)` by [`Board::drop_disc`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BoardError {
    /// Board construction with a zero dimension.
    #[error("rows and columns must be positive (got {rows}x{columns})")]
    InvalidDimensions { rows: usize, columns: usize },
    /// Drop into a column index the board does not have.
    #[error("column {column} is out of range for a board with {columns} columns")]
    ColumnOutOfRange { column: usize, columns: usize },
    /// Drop of the empty-cell sentinel symbol.
    #[error("the empty symbol cannot be dropped")]
    EmptySymbol,
}

/// A connect-four grid with last-move bookkeeping.
///
/// The board owns all mutable state: the grid itself and the coordinates of
/// the most recent successful drop. Detectors read it through the accessors;
/// the only mutations are [`Board::drop_disc`] and [`Board::reset`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    rows: usize,
    columns: usize,
    /// Flat row-major cell storage
    cells: Vec<char>,
    /// Coordinates of the most recent successful drop, if any
    last_move: Option<(usize, usize)>,
}

impl Board {
    /// Creates an empty board with the given dimensions.
    ///
    /// # Arguments
    /// * `rows` - Number of rows (must be positive)
    /// * `columns` - Number of columns (must be positive)
    ///
    /// # Returns
    /// The empty board, or `BoardError::InvalidDimensions` if either
    /// dimension is zero.
    pub fn new(rows: usize, columns: usize) -> Result<Self, BoardError> {
        if rows == 0 || columns == 0 {
            return Err(BoardError::InvalidDimensions { rows, columns });
        }
        Ok(Board {
            rows,
            columns,
            cells: vec![EMPTY; rows * columns],
            last_move: None,
        })
    }

    /// Number of rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    pub fn columns(&self) -> usize {
        self.columns
    }

    /// Total number of cells (`rows * columns`).
    pub fn cell_count(&self) -> usize {
        self.rows * self.columns
    }

    /// Flat row-major index of `(row, column)`, also used as the bit index
    /// in the bit-packed detector's masks.
    pub fn index(&self, row: usize, column: usize) -> usize {
        row * self.columns + column
    }

    /// Symbol at `(row, column)`. Panics if the coordinates are out of
    /// bounds, like any slice index.
    pub fn cell(&self, row: usize, column: usize) -> char {
        self.cells[self.index(row, column)]
    }

    /// Coordinates of the most recent successful drop, or `None` on a fresh
    /// or freshly reset board.
    pub fn last_move(&self) -> Option<(usize, usize)> {
        self.last_move
    }

    /// Sets every cell back to empty and clears the last-move marker.
    /// Idempotent.
    pub fn reset(&mut self) {
        self.cells.fill(EMPTY);
        self.last_move = None;
    }

    /// Drops a disc into the given column.
    ///
    /// The disc lands on the lowest empty cell of the column and becomes the
    /// last move. A full column leaves the board untouched and reports
    /// `Ok(None)`: callers pick another column, no error handling involved.
    ///
    /// # Arguments
    /// * `column` - 0-based column index
    /// * `symbol` - player symbol, e.g. 'X' or 'O'
    ///
    /// # Returns
    /// `Ok(Some(row))` with the landing row, `Ok(None)` if the column is
    /// full, or a `BoardError` for an out-of-range column or the empty
    /// symbol.
    pub fn drop_disc(&mut self, column: usize, symbol: char) -> Result<Option<usize>, BoardError> {
        if column >= self.columns {
            return Err(BoardError::ColumnOutOfRange {
                column,
                columns: self.columns,
            });
        }
        if symbol == EMPTY {
            return Err(BoardError::EmptySymbol);
        }

        for row in (0..self.rows).rev() {
            let idx = row * self.columns + column;
            if self.cells[idx] == EMPTY {
                self.cells[idx] = symbol;
                self.last_move = Some((row, column));
                return Ok(Some(row));
            }
        }

        Ok(None)
    }

    /// True iff no column has space left. With gravity-drop semantics this
    /// reduces to checking the top row.
    pub fn is_full(&self) -> bool {
        self.cells[..self.columns].iter().all(|&cell| cell != EMPTY)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.rows {
            for column in 0..self.columns {
                write!(f, "[{}]", self.cell(row, column))?;
            }
            writeln!(f)?;
        }
        // Column footer, single digit per column to keep alignment
        write!(f, " ")?;
        for column in 0..self.columns {
            write!(f, " {} ", column % 10)?;
        }
        writeln!(f)
    }
}
