//! A minimal CLI demo for the crossword synthesis core.
//!
//! Reads a JSON array of candidate words from a file, synthesizes a puzzle
//! against an in-memory store, and prints the grid and clue lists.

use kiji_crossword_core::{generate, CandidateWord, InMemoryStore, SynthesisConfig};
use std::env;
use std::fs;
use std::process::ExitCode;

fn usage(program: &str) -> String {
    format!("Usage: {program} <candidates.json> [size]")
}

fn main() -> ExitCode {
    tracing_subscriber::fmt::init();

    let args: Vec<String> = env::args().collect();
    if args.len() < 2 {
        eprintln!("{}", usage(&args[0]));
        return ExitCode::FAILURE;
    }

    let path = &args[1];
    let size: usize = args.get(2).and_then(|s| s.parse().ok()).unwrap_or(7);

    let contents = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(e) => {
            eprintln!("could not read {path}: {e}");
            return ExitCode::FAILURE;
        }
    };

    let candidates: Vec<CandidateWord> = match serde_json::from_str(&contents) {
        Ok(candidates) => candidates,
        Err(e) => {
            eprintln!("could not parse {path} as a candidate list: {e}");
            return ExitCode::FAILURE;
        }
    };

    let store = InMemoryStore::new();
    let config = SynthesisConfig::default();

    match generate(&store, &config, size, candidates) {
        Ok(record) => {
            println!("{}", record.title);
            for row in record.grid.iter_reading_order().fold(
                vec![String::new(); record.grid.size()],
                |mut rows, (r, _, cell)| {
                    rows[r].push(match cell.grapheme() {
                        Some(g) => g,
                        None => '\u{3000}',
                    });
                    rows
                },
            ) {
                println!("{row}");
            }

            println!("\nAcross:");
            for clue in &record.clues.across {
                println!("{}. {}", clue.number, clue.clue);
            }
            println!("\nDown:");
            for clue in &record.clues.down {
                println!("{}. {}", clue.number, clue.clue);
            }

            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("could not generate puzzle: {e}");
            ExitCode::FAILURE
        }
    }
}
