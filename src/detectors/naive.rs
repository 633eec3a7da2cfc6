//! Full-board rescan detection. Slow but obviously correct; the reference
//! the optimized strategies are validated against.

use crate::board::{Board, EMPTY};
use crate::{WinDetector, LINE_SIZE};

/// Directions a run is scanned in: right, down, down-right, up-right.
/// Iterating every start cell covers the opposite signs by symmetry.
const SCAN_DIRECTIONS: [(isize, isize); 4] = [(0, 1), (1, 0), (1, 1), (-1, 1)];

/// Checks every occupied cell as a potential start of a run.
#[derive(Debug, Clone, Copy, Default)]
pub struct NaiveDetector;

impl NaiveDetector {
    pub fn new() -> Self {
        NaiveDetector
    }
}

impl WinDetector for NaiveDetector {
    fn name(&self) -> &'static str {
        "naive"
    }

    /// O(rows * columns) work per call.
    fn has_connect_four(&self, board: &Board) -> bool {
        for row in 0..board.rows() {
            for column in 0..board.columns() {
                let symbol = board.cell(row, column);
                if symbol == EMPTY {
                    continue;
                }
                for (dr, dc) in SCAN_DIRECTIONS {
                    if has_run_from(board, row, column, dr, dc, symbol) {
                        return true;
                    }
                }
            }
        }
        false
    }
}

/// True if the `LINE_SIZE` cells starting at `(row, column)` and walking
/// `(dr, dc)` are all in bounds and hold `symbol`.
fn has_run_from(
    board: &Board,
    row: usize,
    column: usize,
    dr: isize,
    dc: isize,
    symbol: char,
) -> bool {
    for k in 0..LINE_SIZE as isize {
        let r = row as isize + k * dr;
        let c = column as isize + k * dc;
        if r < 0 || r >= board.rows() as isize || c < 0 || c >= board.columns() as isize {
            return false;
        }
        if board.cell(r as usize, c as usize) != symbol {
            return false;
        }
    }
    true
}
