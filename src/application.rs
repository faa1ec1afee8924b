/*
application.rs

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

//! Interactive terminal application.
//!
//! The application runs rounds on the terminal: it prints the numbered path,
//! waits for the player to hide it, then reads one cell per line while the
//! player reproduces the path from memory. Completing a path may enter the
//! scoreboard; a wrong cell starts a fresh round with a new path.

use log::warn;
use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};
use std::error::Error;
use std::io::{self, BufRead, Write};
use std::time::Duration;

use crate::config;
use crate::draw;
use crate::game::{ClickOutcome, Game};
use crate::generator::grid::Cell;
use crate::generator::random_path::RandomPathError;
use crate::highscores::HighScores;
use crate::saver::highscores::SaverHighScores;
use crate::settings::{GameSettings, SettingsError};

/// Number of times a round is regenerated when the search times out before
/// the application gives up.
const MAX_TIMEOUT_RETRIES: usize = 3;

/// The terminal application object.
pub struct MemopathApplication {
    /// The game in progress.
    game: Game,

    /// The scoreboards, restored from the save file at startup.
    highscores: HighScores,

    /// Saves the scoreboards when the player makes a new score.
    saver: SaverHighScores,

    /// Source of randomness for the path generation. Seeded from the command
    /// line for reproducible games, or from the operating system.
    rng: Box<dyn RngCore>,
}

impl MemopathApplication {
    /// Create a [`MemopathApplication`] object.
    pub fn new(settings: GameSettings, seed: Option<u64>) -> Self {
        let saver: SaverHighScores = SaverHighScores::new(config::data_dir());
        let highscores: HighScores = match saver.get_highscores() {
            Ok(Some(h)) => h,
            Ok(None) => HighScores::new(),
            Err(e) => {
                warn!("Cannot read the high scores file: {e}");
                HighScores::new()
            }
        };
        let rng: Box<dyn RngCore> = match seed {
            Some(s) => Box::new(StdRng::seed_from_u64(s)),
            None => Box::new(StdRng::from_os_rng()),
        };
        Self {
            game: Game::new(settings),
            highscores,
            saver,
            rng,
        }
    }

    /// Run rounds until the player quits.
    ///
    /// Return the process exit code: 0 when the player quits, 1 when no path
    /// can be generated for the settings.
    ///
    /// # Errors
    ///
    /// The method returns an error when reading from the terminal fails.
    pub fn run(&mut self) -> Result<u8, Box<dyn Error>> {
        let mut timeouts: usize = 0;
        loop {
            match self.game.new_round(&mut *self.rng) {
                Ok(()) => (),
                Err(RandomPathError::NoPath) => {
                    eprintln!("{}", SettingsError::DifficultyTooHard);
                    return Ok(1);
                }
                Err(RandomPathError::DurationExceeded) => {
                    timeouts += 1;
                    if timeouts >= MAX_TIMEOUT_RETRIES {
                        eprintln!("Could not generate a path in time. Try a smaller grid.");
                        return Ok(1);
                    }
                    continue;
                }
            }
            timeouts = 0;

            if !self.play_round()? {
                return Ok(0);
            }
        }
    }

    /// Play one round: memorize phase, then play phase.
    ///
    /// Return false when the player quits.
    fn play_round(&mut self) -> Result<bool, Box<dyn Error>> {
        self.game.show_path();
        println!("\n{}", draw::render_path(&self.game.settings, &self.game.path));
        println!("Memorize the path, then press Enter to hide it (q to quit).");
        match read_line()? {
            Some(line) if line != "q" => (),
            _ => return Ok(false),
        }

        self.game.end_memorization();
        println!("\n{}", draw::render_blank(&self.game.settings));
        println!(
            "You looked at the path for {:.2} s. Now follow it from memory.",
            self.game.get_memorize_duration().as_secs_f32()
        );
        println!("Enter each cell as: row column (q to quit).");

        loop {
            print!("step {}> ", self.game.next_step());
            io::stdout().flush()?;
            let cell: Cell = match read_line()? {
                None => return Ok(false),
                Some(line) if line == "q" => return Ok(false),
                Some(line) => match parse_cell(&line) {
                    Some(c) => c,
                    None => {
                        println!("Enter the cell as two numbers: row column");
                        continue;
                    }
                },
            };

            match self.game.click(cell) {
                ClickOutcome::Correct(step) => {
                    println!(
                        "\n{}",
                        draw::render_progress(&self.game.settings, &self.game.path, step)
                    );
                }
                ClickOutcome::Wrong => {
                    println!("Wrong cell! Here is a new path.");
                    return Ok(true);
                }
                ClickOutcome::Solved => {
                    println!(
                        "\n{}",
                        draw::render_path(&self.game.settings, &self.game.path)
                    );
                    self.record_score();
                    println!("Play again? [y/N]");
                    return Ok(matches!(read_line()?, Some(line) if line == "y"));
                }
                ClickOutcome::Ignored => (),
            }
        }
    }

    /// Report the solved round and update the scoreboard.
    fn record_score(&mut self) {
        let time: Duration = self.game.get_memorize_duration();
        println!(
            "You successfully followed the path! Memorize time: {:.2} s.",
            time.as_secs_f32()
        );

        if let Some(position) =
            self.highscores
                .add_score(&self.game.settings, time, self.game.get_errors())
        {
            println!("You made the scoreboard at position {position}!");
            if let Err(e) = self.saver.save_highscores(&self.highscores) {
                warn!("Cannot save the high scores file: {e}");
            }
        }
    }
}

/// Read one line from the terminal and trim it.
///
/// Return None at end of file.
fn read_line() -> Result<Option<String>, io::Error> {
    let mut line: String = String::new();
    if io::stdin().lock().read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

/// Parse a cell typed by the player, as "row column" with a space or a comma
/// between the coordinates.
fn parse_cell(line: &str) -> Option<Cell> {
    let mut parts = line.split(|c: char| c == ',' || c.is_whitespace()).filter(|p| !p.is_empty());
    let row: usize = parts.next()?.parse().ok()?;
    let column: usize = parts.next()?.parse().ok()?;
    if parts.next().is_some() {
        return None;
    }
    Some(Cell::new(row, column))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cells_are_parsed_from_player_input() {
        assert_eq!(parse_cell("3 4"), Some(Cell::new(3, 4)));
        assert_eq!(parse_cell("3,4"), Some(Cell::new(3, 4)));
        assert_eq!(parse_cell(" 0 , 12 "), Some(Cell::new(0, 12)));
        assert_eq!(parse_cell("3"), None);
        assert_eq!(parse_cell("3 4 5"), None);
        assert_eq!(parse_cell("a b"), None);
    }
}
