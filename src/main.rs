//! # Connect-Four Arena
//!
//! Interactive two-player demo. Players take turns typing a column number;
//! the board is reprinted after every move and the game announces a win or
//! a draw. The detection strategy is selectable to make the variants easy
//! to try against each other.

use std::io::{self, BufRead, Write};

use clap::Parser;
use colored::Colorize;
use connect4::sim::PLAYER_SYMBOLS;
use connect4::{BitboardDetector, Game, IncrementalDetector, NaiveDetector, WinDetector};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Board rows (default: 6)
    #[arg(long, default_value_t = 6)]
    rows: usize,

    /// Board columns (default: 7)
    #[arg(long, default_value_t = 7)]
    columns: usize,

    /// Win detection strategy
    #[arg(long, default_value = "incremental", value_parser = ["naive", "incremental", "bitboard"])]
    detector: String,
}

fn main() -> io::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let result = match args.detector.as_str() {
        "naive" => build_and_play(&args, NaiveDetector::new()),
        "bitboard" => build_and_play(&args, BitboardDetector::new()),
        _ => build_and_play(&args, IncrementalDetector::new()),
    };

    match result {
        Ok(()) => Ok(()),
        Err(err) => {
            eprintln!("{}", format!("error: {}", err).red());
            std::process::exit(1);
        }
    }
}

fn build_and_play<D: WinDetector>(args: &Args, detector: D) -> io::Result<()> {
    let game = match Game::new(args.rows, args.columns, detector) {
        Ok(game) => game,
        Err(err) => return Err(io::Error::new(io::ErrorKind::InvalidInput, err.to_string())),
    };
    play(game)
}

fn play<D: WinDetector>(mut game: Game<D>) -> io::Result<()> {
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    let mut current = 0;

    println!(
        "Connect-Four ({} strategy). Enter a column number, or q to quit.\n",
        game.detector().name()
    );
    print!("{}", game.board());

    loop {
        let symbol = PLAYER_SYMBOLS[current];
        print!("Player {}, column: ", colorize_symbol(symbol));
        io::stdout().flush()?;

        let Some(line) = lines.next() else {
            println!();
            return Ok(());
        };
        let line = line?;
        let input = line.trim();
        if input.eq_ignore_ascii_case("q") {
            return Ok(());
        }

        let Ok(column) = input.parse::<usize>() else {
            println!("Not a column number: {:?}", input);
            continue;
        };

        match game.drop_disc(column, symbol) {
            Ok(Some(_row)) => {}
            Ok(None) => {
                println!("Column {} is full, pick another one.", column);
                continue;
            }
            Err(err) => {
                println!("{}", err);
                continue;
            }
        }

        print!("{}", game.board());

        if game.has_connect_four() {
            println!("\nPlayer {} wins!", colorize_symbol(symbol));
            return Ok(());
        }
        if game.board().is_full() {
            println!("\nBoard full: draw.");
            return Ok(());
        }

        current = 1 - current;
    }
}

fn colorize_symbol(symbol: char) -> String {
    match symbol {
        'X' => symbol.to_string().red().bold().to_string(),
        'O' => symbol.to_string().yellow().bold().to_string(),
        _ => symbol.to_string(),
    }
}
