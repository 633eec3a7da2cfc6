//! Comparative benchmark for the win-detection strategies.
//!
//! Every strategy plays the exact same seeded random games, so elapsed time
//! differences come from detection cost alone. Run with `--release` for
//! meaningful numbers.

use std::time::{Duration, Instant};

use clap::Parser;
use colored::Colorize;
use connect4::sim::{simulate_games, SimulationStats};
use connect4::{BitboardDetector, BoardError, Game, IncrementalDetector, NaiveDetector, WinDetector};
use rand::SeedableRng;
use rand_xoshiro::Xoshiro256PlusPlus;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Board rows (default: 100)
    #[arg(long, default_value_t = 100)]
    rows: usize,

    /// Board columns (default: 100)
    #[arg(long, default_value_t = 100)]
    columns: usize,

    /// Number of random games each strategy plays (default: 1000)
    #[arg(long, default_value_t = 1000)]
    games: usize,

    /// RNG seed, shared by every strategy so workloads are identical
    #[arg(long, default_value_t = 42)]
    seed: u64,
}

struct BenchResult {
    name: &'static str,
    stats: SimulationStats,
    elapsed: Duration,
}

fn main() -> Result<(), BoardError> {
    env_logger::init();
    let args = Args::parse();

    println!("Connect-Four Arena - Benchmark Tool");
    println!("===================================");
    println!("Board size: {} x {}", args.rows, args.columns);
    println!("Games per strategy: {}", args.games);
    println!("Seed: {}", args.seed);
    println!("-----------------------------------");

    #[cfg(debug_assertions)]
    println!("WARNING: Running in debug mode. Performance will be significantly lower.\nUse --release for accurate benchmarks.\n");

    let naive = run_benchmark(&args, NaiveDetector::new())?;
    let incremental = run_benchmark(&args, IncrementalDetector::new())?;
    let bitboard = run_benchmark(&args, BitboardDetector::new())?;

    println!("\n{}", "Speedup vs naive:".bold());
    print_speedup(&naive, &incremental);
    print_speedup(&naive, &bitboard);

    Ok(())
}

fn run_benchmark<D: WinDetector>(args: &Args, detector: D) -> Result<BenchResult, BoardError> {
    let name = detector.name();
    let mut game = Game::new(args.rows, args.columns, detector)?;
    let mut rng = Xoshiro256PlusPlus::seed_from_u64(args.seed);

    println!("\nRunning {} strategy...", name.cyan());
    let start = Instant::now();
    let stats = simulate_games(&mut game, args.games, &mut rng)?;
    let elapsed = start.elapsed();

    print_stats(name, &stats, elapsed);
    Ok(BenchResult {
        name,
        stats,
        elapsed,
    })
}

fn print_stats(name: &str, stats: &SimulationStats, elapsed: Duration) {
    let secs = elapsed.as_secs_f64();
    let mps = stats.moves as f64 / secs;

    println!("{} Results:", name);
    println!("  Games: {} ({} wins, {} draws)", stats.games, stats.wins, stats.draws);
    println!("  Moves checked: {}", stats.moves);
    println!("  Time: {:.3}s", secs);
    println!("  Throughput: {:.0} moves/sec", mps);
}

fn print_speedup(baseline: &BenchResult, candidate: &BenchResult) {
    // Identical workloads, or the comparison is meaningless
    debug_assert_eq!(baseline.stats, candidate.stats);

    let ratio = baseline.elapsed.as_secs_f64() / candidate.elapsed.as_secs_f64();
    let line = format!(
        "  {} / {}: {:.2}x",
        baseline.name, candidate.name, ratio
    );
    if ratio >= 1.0 {
        println!("{}", line.green());
    } else {
        println!("{}", line.red());
    }
}
