/*
cli_options.rs

Copyright 2025 Hervé Quatremain

This file is part of Memopath.

Memopath is free software: you can redistribute it and/or modify it under the
terms of the GNU General Public License as published by the Free Software
Foundation, either version 3 of the License, or (at your option) any later
version.

Memopath is distributed in the hope that it will be useful, but WITHOUT ANY
WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR
A PARTICULAR PURPOSE. See the GNU General Public License for more details.

You should have received a copy of the GNU General Public License along with
Memopath. If not, see <https://www.gnu.org/licenses/>.

SPDX-License-Identifier: GPL-3.0-or-later
*/

//! Process command-line options.
//!
//! By default, Memopath starts an interactive game on the terminal with the
//! requested board size and difficulty level.
//!
//! The `--batch` option generates paths and prints them without playing.
//! This mode is intended for exploring how the generator behaves for a board
//! size and difficulty combination.
//!
//! # Examples
//!
//! Play on a 12 by 8 board at the hard difficulty level:
//!
//! ```text
//! $ memopath -x 12 -y 8 -f hard
//! ```
//!
//! Generate three easy paths on the default board and print statistics:
//!
//! ```text
//! $ memopath --batch -c 3 -s --seed 42
//! ```

use chrono::{DateTime, Local};
use clap::Parser;
use log::debug;
use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};
use std::collections::HashSet;
use std::env;

use crate::application::MemopathApplication;
use crate::config::{self, COPYRIGHT_NOTICE};
use crate::draw;
use crate::generator::grid::Cell;
use crate::generator::path::Path;
use crate::generator::random_path::{RandomPath, RandomPathError};
use crate::highscores::HighScores;
use crate::saver::highscores::SaverHighScores;
use crate::settings::{Difficulty, GameSettings};

/// Memorize and reproduce a random path through a grid.
#[derive(Parser)]
#[command(about, long_about = None, version, long_version = COPYRIGHT_NOTICE)]
struct Args {
    /// Number of board columns (x-axis)
    #[arg(short = 'x', long, default_value_t = 10)]
    width: usize,

    /// Number of board rows (y-axis)
    #[arg(short = 'y', long, default_value_t = 10)]
    height: usize,

    /// Difficulty level
    #[arg(value_enum, short = 'f', long, default_value_t)]
    difficulty: Difficulty,

    /// Generate and print paths instead of playing
    #[arg(short, long, default_value_t = false, group = "generate")]
    batch: bool,

    /// Number of paths to generate
    #[arg(short, long, default_value_t = 1, requires = "generate")]
    count: usize,

    /// Print some statistics after generating the paths
    #[arg(short, long, default_value_t = false, requires = "generate")]
    summary: bool,

    /// Seed for the random number generator (reproducible paths)
    #[arg(long)]
    seed: Option<u64>,

    /// Print the scoreboards
    #[arg(long, default_value_t = false)]
    scores: bool,

    /// Enable debug messages
    #[arg(short, long, default_value_t = false)]
    debug: bool,
}

/// Parse and process command-line options, and run the requested mode.
///
/// Return the process exit code.
pub fn parse() -> u8 {
    let args: Args = Args::parse();

    if args.debug {
        println!("DEBUG");
        unsafe {
            env::set_var("RUST_LOG", "debug");
        }
    }
    env_logger::init();

    //
    // List the scoreboards
    //
    if args.scores {
        return print_scores();
    }

    //
    // Validate the requested board size and difficulty level
    //
    let settings: GameSettings =
        match GameSettings::new(args.width, args.height, args.difficulty) {
            Ok(s) => s,
            Err(e) => {
                eprintln!("{e}");
                return 1;
            }
        };

    if args.batch {
        return generate_paths(&settings, args.count, args.summary, args.seed);
    }

    //
    // Interactive game
    //
    match MemopathApplication::new(settings, args.seed).run() {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{e}");
            1
        }
    }
}

/// Print the saved scoreboards.
fn print_scores() -> u8 {
    let saver: SaverHighScores = SaverHighScores::new(config::data_dir());
    let highscores: HighScores = match saver.get_highscores() {
        Ok(Some(h)) => h,
        Ok(None) => {
            println!("No scores yet.");
            return 0;
        }
        Err(e) => {
            eprintln!("Cannot read the high scores file: {e}");
            return 1;
        }
    };

    let mut boards: Vec<_> = highscores.iter().collect();
    boards.sort_by(|a, b| a.0.cmp(b.0));
    for (key, scores) in boards {
        let (board, difficulty) = key.split_once("@@").unwrap_or((key.as_str(), ""));
        println!("\n{board} ({difficulty})");
        for (i, score) in scores.iter().enumerate() {
            let when: DateTime<Local> = score.when.into();
            println!(
                "{:>3}. {:>8.2} s  {} errors  {}",
                i + 1,
                score.time.as_secs_f32(),
                score.errors,
                when.format("%Y-%m-%d %H:%M")
            );
        }
    }
    0
}

/// Generate paths and print them with the step numbers on the board.
fn generate_paths(settings: &GameSettings, count: usize, summary: bool, seed: Option<u64>) -> u8 {
    let (min_length, max_length) = settings.length_bounds();
    let mut generator: RandomPath =
        RandomPath::new(settings.grid(), min_length, max_length);
    let mut rng: Box<dyn RngCore> = match seed {
        Some(s) => Box::new(StdRng::seed_from_u64(s)),
        None => Box::new(StdRng::from_os_rng()),
    };

    let mut total: f32 = 0.0;
    let mut max: f32 = 0.0;
    let mut errors: usize = 0;
    let mut iterations: usize = 0;
    let mut i: usize = 0;
    while i < count {
        debug!("Iteration {i}");

        let ret: Result<Path, RandomPathError> = generator.generate(&mut *rng);
        match ret {
            Ok(random_path) => {
                total += generator.duration;
                if generator.duration > max {
                    max = generator.duration;
                }
                iterations += generator.iteration;

                // Verify that the path has an expected length
                if random_path.len() < min_length || random_path.len() > max_length {
                    eprintln!(
                        "Wrong length: {} not in [{}, {}]: {:?}",
                        random_path.len(),
                        min_length,
                        max_length,
                        random_path.get()
                    );
                    panic!("Bug: wrong length for the generated path");
                }

                // Verify that there are no duplicated cells
                let distinct: HashSet<Cell> = random_path.get().iter().copied().collect();
                if distinct.len() != random_path.len() {
                    eprintln!("Duplicated cells in path: {:?}", random_path.get());
                    panic!("Bug: duplicated cells in generated path");
                }

                println!("{}", draw::render_path(settings, &random_path));
                println!("length = {}\n", random_path.len());
                i += 1;
            }

            Err(RandomPathError::NoPath) => {
                // All the starting rows are exhausted: the settings admit no
                // path at all.
                eprintln!(
                    "No path exists for a {}x{} board at the {} difficulty level.",
                    settings.width, settings.height, settings.difficulty
                );
                return 1;
            }

            Err(RandomPathError::DurationExceeded) => {
                // It took too long, the path generating algorithm gave up
                errors += 1;
                debug!("ERROR generating random path");
            }
        }
    }

    // Print some stats
    if summary {
        println!(
            "
        total time = {}s
      average time = {}s
          max time = {}s
average iterations = {}
            errors = {}",
            total,
            total / count as f32,
            max,
            iterations / count,
            errors
        );
    }
    0
}
