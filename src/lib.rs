//! # Connect-Four Detection Arena
//!
//! Win detection for connect-four on arbitrary rows x columns boards, with
//! three interchangeable strategies sharing one grid store:
//!
//! - **Naive**: rescans the whole board, O(rows * columns) per check. The
//!   trusted baseline the optimized variants are validated against.
//! - **Incremental**: checks only the four lines through the most recent
//!   move, O(1) per check.
//! - **Bitboard**: the same last-move check, but occupancy tests are bit
//!   operations against per-symbol masks instead of grid comparisons.
//!
//! A [`Game`] couples a [`Board`] with one detector so stateful detectors
//! see every drop and reset. The `benchmark` binary drives all three
//! variants through identical seeded random games for comparative timing.
//!
//! ## Usage
//! ```
//! use connect4::{Game, IncrementalDetector};
//!
//! let mut game = Game::new(6, 7, IncrementalDetector::new())?;
//! for column in 0..4 {
//!     game.drop_disc(column, 'X')?;
//! }
//! assert!(game.has_connect_four());
//! # Ok::<(), connect4::BoardError>(())
//! ```

pub mod board;
pub mod detectors;
pub mod sim;

pub use board::{Board, BoardError, EMPTY};
pub use detectors::bitboard::BitboardDetector;
pub use detectors::incremental::IncrementalDetector;
pub use detectors::naive::NaiveDetector;

/// Number of aligned discs required to win.
pub const LINE_SIZE: usize = 4;

/// A win-detection strategy over a [`Board`].
///
/// Detectors are interchangeable: all of them answer the same question from
/// the same grid state. Stateless strategies only implement
/// [`has_connect_four`](WinDetector::has_connect_four); strategies keeping
/// state parallel to the grid (the bitboard masks) also override the
/// observation hooks, which [`Game`] invokes after every successful drop
/// and reset.
pub trait WinDetector {
    /// Short static label for benchmark and demo output.
    fn name(&self) -> &'static str;

    /// Called after a disc landed at `(row, column)`.
    fn observe_drop(&mut self, board: &Board, row: usize, column: usize, symbol: char) {
        let _ = (board, row, column, symbol);
    }

    /// Called after the board was reset.
    fn observe_reset(&mut self, board: &Board) {
        let _ = board;
    }

    /// True iff the board currently contains four aligned equal symbols.
    /// Side-effect-free.
    fn has_connect_four(&self, board: &Board) -> bool;
}

/// One board plus one detection strategy.
///
/// Forwarding drops and resets through this type is what keeps detector
/// state (the bitboard masks) mirroring the grid; nothing else mutates
/// either side.
#[derive(Debug, Clone)]
pub struct Game<D: WinDetector> {
    board: Board,
    detector: D,
}

impl<D: WinDetector> Game<D> {
    /// Creates an empty game with the given board dimensions.
    ///
    /// # Arguments
    /// * `rows` - Number of rows (must be positive)
    /// * `columns` - Number of columns (must be positive)
    /// * `detector` - The win-detection strategy to play with
    pub fn new(rows: usize, columns: usize, detector: D) -> Result<Self, BoardError> {
        Ok(Game {
            board: Board::new(rows, columns)?,
            detector,
        })
    }

    /// Read access to the underlying board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Read access to the detection strategy.
    pub fn detector(&self) -> &D {
        &self.detector
    }

    /// Clears the board and the detector's state.
    pub fn reset(&mut self) {
        self.board.reset();
        self.detector.observe_reset(&self.board);
    }

    /// Drops a disc and notifies the detector on success.
    ///
    /// Same contract as [`Board::drop_disc`]: `Ok(Some(row))` on landing,
    /// `Ok(None)` for a full column, `Err` for invalid input.
    pub fn drop_disc(&mut self, column: usize, symbol: char) -> Result<Option<usize>, BoardError> {
        let landed = self.board.drop_disc(column, symbol)?;
        if let Some(row) = landed {
            self.detector.observe_drop(&self.board, row, column, symbol);
        }
        Ok(landed)
    }

    /// True iff the board currently contains a connect-four.
    pub fn has_connect_four(&self) -> bool {
        self.detector.has_connect_four(&self.board)
    }
}
