//! # Random Game Simulation
//!
//! Drives randomized alternating-symbol games against a [`Game`]. This is
//! the workload the benchmark binary times for each detector variant and
//! the equivalence tests replay against all variants at once. The caller
//! supplies the generator, so a fixed seed makes whole runs reproducible.

use rand::Rng;

use crate::{BoardError, Game, WinDetector};

/// Symbols the two simulated players drop.
pub const PLAYER_SYMBOLS: [char; 2] = ['X', 'O'];

/// Aggregate outcome of a simulation run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SimulationStats {
    /// Games played
    pub games: u64,
    /// Successful drops across all games
    pub moves: u64,
    /// Games that ended with a connect-four
    pub wins: u64,
    /// Games that ran out of space or moves
    pub draws: u64,
}

/// Plays `games` random games, resetting the board before each one.
///
/// Every game alternates the two player symbols, dropping into uniformly
/// random columns. A full column just means another column is drawn next
/// iteration. A game ends on a win, a full board, or after
/// `rows * columns` successful moves.
///
/// # Arguments
/// * `game` - The board/detector pair to drive
/// * `games` - Number of games to play
/// * `rng` - Random generator; seed it for reproducible runs
pub fn simulate_games<D: WinDetector, R: Rng>(
    game: &mut Game<D>,
    games: usize,
    rng: &mut R,
) -> Result<SimulationStats, BoardError> {
    let mut stats = SimulationStats {
        games: games as u64,
        ..SimulationStats::default()
    };

    for _ in 0..games {
        game.reset();
        let mut current = 0;
        let mut moves = 0u64;
        let max_moves = game.board().cell_count() as u64;
        let mut won = false;

        while !won && !game.board().is_full() && moves < max_moves {
            let column = rng.random_range(0..game.board().columns());
            if game.drop_disc(column, PLAYER_SYMBOLS[current])?.is_none() {
                // Column full, try another one
                continue;
            }
            won = game.has_connect_four();
            current = 1 - current;
            moves += 1;
        }

        stats.moves += moves;
        if won {
            stats.wins += 1;
        } else {
            stats.draws += 1;
        }
    }

    Ok(stats)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{IncrementalDetector, NaiveDetector};
    use rand::SeedableRng;
    use rand_xoshiro::Xoshiro256PlusPlus;

    #[test]
    fn test_simulation_is_reproducible() {
        let mut first = Game::new(6, 7, IncrementalDetector::new()).unwrap();
        let mut second = Game::new(6, 7, IncrementalDetector::new()).unwrap();

        let mut rng = Xoshiro256PlusPlus::seed_from_u64(42);
        let a = simulate_games(&mut first, 20, &mut rng).unwrap();
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(42);
        let b = simulate_games(&mut second, 20, &mut rng).unwrap();

        assert_eq!(a, b);
    }

    #[test]
    fn test_every_game_is_accounted_for() {
        let mut game = Game::new(6, 7, NaiveDetector::new()).unwrap();
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(7);
        let stats = simulate_games(&mut game, 50, &mut rng).unwrap();

        assert_eq!(stats.games, 50);
        assert_eq!(stats.wins + stats.draws, 50);
        assert!(stats.moves >= stats.games); // a game needs at least one move
    }

    #[test]
    fn test_tiny_board_always_draws() {
        // 2 x 2 cannot hold four in a row
        let mut game = Game::new(2, 2, NaiveDetector::new()).unwrap();
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(3);
        let stats = simulate_games(&mut game, 10, &mut rng).unwrap();

        assert_eq!(stats.wins, 0);
        assert_eq!(stats.draws, 10);
    }
}
