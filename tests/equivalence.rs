//! Cross-strategy equivalence tests. The naive full-board rescan is the
//! correctness oracle: after every single drop, the incremental and
//! bitboard strategies must return exactly the same answer it does.

use connect4::{BitboardDetector, Game, IncrementalDetector, NaiveDetector};
use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoshiro256PlusPlus;

/// The same position played on all three strategies in lock-step.
struct Trio {
    naive: Game<NaiveDetector>,
    incremental: Game<IncrementalDetector>,
    bitboard: Game<BitboardDetector>,
}

impl Trio {
    fn new(rows: usize, columns: usize) -> Self {
        Trio {
            naive: Game::new(rows, columns, NaiveDetector::new()).unwrap(),
            incremental: Game::new(rows, columns, IncrementalDetector::new()).unwrap(),
            bitboard: Game::new(rows, columns, BitboardDetector::new()).unwrap(),
        }
    }

    fn reset(&mut self) {
        self.naive.reset();
        self.incremental.reset();
        self.bitboard.reset();
    }

    fn drop_disc(&mut self, column: usize, symbol: char) -> Option<usize> {
        let landed = self.naive.drop_disc(column, symbol).unwrap();
        assert_eq!(landed, self.incremental.drop_disc(column, symbol).unwrap());
        assert_eq!(landed, self.bitboard.drop_disc(column, symbol).unwrap());
        landed
    }

    /// Asserts all three strategies agree and returns the shared verdict.
    fn has_connect_four(&self) -> bool {
        let expected = self.naive.has_connect_four();
        assert_eq!(
            expected,
            self.incremental.has_connect_four(),
            "incremental disagrees with naive oracle"
        );
        assert_eq!(
            expected,
            self.bitboard.has_connect_four(),
            "bitboard disagrees with naive oracle"
        );
        expected
    }
}

/// Replays seeded random games, checking strategy agreement after every
/// drop. Mirrors the benchmark workload.
fn random_game_sweep(rows: usize, columns: usize, games: usize, seed: u64, symbols: &[char]) {
    let mut trio = Trio::new(rows, columns);
    let mut rng = Xoshiro256PlusPlus::seed_from_u64(seed);

    for _ in 0..games {
        trio.reset();
        assert!(!trio.has_connect_four());

        let mut current = 0;
        let mut moves = 0;
        let max_moves = rows * columns;

        while moves < max_moves && !trio.naive.board().is_full() {
            let column = rng.random_range(0..columns);
            if trio.drop_disc(column, symbols[current]).is_none() {
                continue;
            }
            moves += 1;
            if trio.has_connect_four() {
                break;
            }
            current = (current + 1) % symbols.len();
        }
    }
}

#[test]
fn equivalence_on_standard_board() {
    random_game_sweep(6, 7, 200, 42, &['X', 'O']);
}

#[test]
fn equivalence_on_word_boundary_board() {
    // 8 x 8 = 64 cells, the largest board with packed masks
    random_game_sweep(8, 8, 100, 7, &['X', 'O']);
}

#[test]
fn equivalence_on_large_board() {
    // 81 cells force the dynamic-bitset masks
    random_game_sweep(9, 9, 50, 11, &['X', 'O']);
}

#[test]
fn equivalence_on_wide_flat_board() {
    random_game_sweep(3, 40, 50, 23, &['X', 'O']);
}

#[test]
fn equivalence_with_three_symbols() {
    // 'Z' exercises the non-canonical mask fallback on a small board
    random_game_sweep(6, 7, 100, 13, &['X', 'O', 'Z']);
}

#[test]
fn scenario_horizontal_win_on_fourth_drop() {
    let mut trio = Trio::new(6, 7);
    for column in 0..3 {
        trio.drop_disc(column, 'X');
        assert!(!trio.has_connect_four());
    }
    trio.drop_disc(3, 'X');
    assert!(trio.has_connect_four());
}

#[test]
fn scenario_vertical_win_on_fourth_drop() {
    let mut trio = Trio::new(6, 7);
    for _ in 0..3 {
        trio.drop_disc(0, 'O');
        assert!(!trio.has_connect_four());
    }
    trio.drop_disc(0, 'O');
    assert!(trio.has_connect_four());
}

#[test]
fn scenario_diagonal_win_only_after_completion() {
    let mut trio = Trio::new(6, 7);
    // X climbs (5,0), (4,1), (3,2), (2,3) with O fillers underneath
    let staging = [
        (0, 'X'),
        (1, 'O'),
        (1, 'X'),
        (2, 'O'),
        (2, 'O'),
        (2, 'X'),
        (3, 'O'),
        (3, 'O'),
        (3, 'O'),
    ];
    for (column, symbol) in staging {
        trio.drop_disc(column, symbol);
        assert!(!trio.has_connect_four());
    }
    trio.drop_disc(3, 'X');
    assert!(trio.has_connect_four());
}

#[test]
fn scenario_anti_diagonal_win_only_after_completion() {
    let mut trio = Trio::new(6, 7);
    // Mirror image: X at (5,6), (4,5), (3,4), (2,3)
    let staging = [
        (6, 'X'),
        (5, 'O'),
        (5, 'X'),
        (4, 'O'),
        (4, 'O'),
        (4, 'X'),
        (3, 'O'),
        (3, 'O'),
        (3, 'O'),
    ];
    for (column, symbol) in staging {
        trio.drop_disc(column, symbol);
        assert!(!trio.has_connect_four());
    }
    trio.drop_disc(3, 'X');
    assert!(trio.has_connect_four());
}

#[test]
fn scenario_gap_closure() {
    let mut trio = Trio::new(6, 7);
    for column in [0, 1, 3] {
        trio.drop_disc(column, 'X');
        assert!(!trio.has_connect_four());
    }
    trio.drop_disc(2, 'X');
    assert!(trio.has_connect_four());
}

#[test]
fn reset_is_idempotent_across_strategies() {
    let mut trio = Trio::new(6, 7);
    for column in 0..4 {
        trio.drop_disc(column, 'X');
    }
    assert!(trio.has_connect_four());

    trio.reset();
    assert!(!trio.has_connect_four());
    assert_eq!(trio.naive.board().last_move(), None);

    trio.reset();
    assert!(!trio.has_connect_four());

    // The position is fully replayable after a reset
    for column in 0..4 {
        trio.drop_disc(column, 'X');
    }
    assert!(trio.has_connect_four());
}
