//! Batch harness for the arcgrid solver.
//!
//! Reads a file of puzzles (one 81-cell grid per line, `.`/`_`/`0` for empty
//! cells, `#` for comments), solves each one, and prints the results with
//! per-puzzle timing. With `--solutions`, every result is compared against
//! the expected grid and a `correct/total` summary is reported; any mismatch
//! makes the run fail.
//!
//! ```sh
//! arcgrid puzzles.txt --solutions solutions.txt
//! ```

use std::{
    fs,
    path::{Path, PathBuf},
    process,
    time::Instant,
};

use arcgrid_core::{Grid, ParseGridError};
use arcgrid_solver::solve;
use clap::Parser;

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// File with one puzzle per line.
    puzzles: PathBuf,

    /// File with the expected solutions, aligned line-by-line with the
    /// puzzles.
    #[arg(long, value_name = "FILE")]
    solutions: Option<PathBuf>,

    /// Suppress per-puzzle output; only print the summary.
    #[arg(long)]
    quiet: bool,
}

#[derive(Debug, derive_more::Display, derive_more::Error)]
enum HarnessError {
    #[display("failed to read {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[display("bad grid on line {line}: {source}")]
    BadGrid {
        line: usize,
        source: ParseGridError,
    },
    #[display("got {puzzles} puzzles but {solutions} solutions")]
    CountMismatch { puzzles: usize, solutions: usize },
    #[display("{failed} of {total} results did not match the expected solution")]
    Mismatched { failed: usize, total: usize },
}

fn main() {
    env_logger::init();
    let args = Args::parse();
    if let Err(err) = run(&args) {
        eprintln!("error: {err}");
        process::exit(1);
    }
}

fn run(args: &Args) -> Result<(), HarnessError> {
    let puzzles = load_grids(&args.puzzles)?;
    let solutions = args
        .solutions
        .as_ref()
        .map(|path| load_grids(path))
        .transpose()?;

    if let Some(solutions) = &solutions {
        if solutions.len() != puzzles.len() {
            return Err(HarnessError::CountMismatch {
                puzzles: puzzles.len(),
                solutions: solutions.len(),
            });
        }
    }

    let mut correct = 0;
    let mut failed = 0;
    let mut solved = 0;
    for (i, &puzzle) in puzzles.iter().enumerate() {
        log::debug!("solving puzzle {i}");
        if !args.quiet {
            println!("puzzle {i}:");
            println!("{puzzle}");
        }

        let start = Instant::now();
        let result = solve(puzzle);
        let elapsed = start.elapsed();
        log::info!("puzzle {i} took {elapsed:?}");
        if !result.is_unsolvable() {
            solved += 1;
        }

        if !args.quiet {
            if result.is_unsolvable() {
                println!("no solution ({elapsed:?})");
            } else {
                println!("solution ({elapsed:?}):");
                println!("{result}");
            }
            println!();
        }

        match solutions.as_ref().map(|solutions| solutions[i]) {
            Some(expected) if expected == result => correct += 1,
            Some(expected) => {
                failed += 1;
                log::warn!("puzzle {i} mismatch");
                if !args.quiet {
                    println!("expected:");
                    println!("{expected}");
                    println!();
                }
            }
            None => {}
        }
    }

    if solutions.is_some() {
        println!("{correct}/{} correct", puzzles.len());
        if failed > 0 {
            return Err(HarnessError::Mismatched {
                failed,
                total: puzzles.len(),
            });
        }
    } else {
        println!("{solved}/{} solved", puzzles.len());
    }
    Ok(())
}

fn load_grids(path: &Path) -> Result<Vec<Grid>, HarnessError> {
    let content = fs::read_to_string(path).map_err(|source| HarnessError::Io {
        path: path.display().to_string(),
        source,
    })?;
    parse_grids(&content)
}

/// Parses one grid per non-empty line, skipping `#` comment lines.
fn parse_grids(content: &str) -> Result<Vec<Grid>, HarnessError> {
    content
        .lines()
        .enumerate()
        .filter(|(_, text)| {
            let text = text.trim();
            !text.is_empty() && !text.starts_with('#')
        })
        .map(|(i, text)| {
            text.parse()
                .map_err(|source| HarnessError::BadGrid { line: i + 1, source })
        })
        .collect()
}
