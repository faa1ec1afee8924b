/*
game.rs

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

//! Manage the status of a game in progress.
//!
//! A round moves through three phases. The path is generated while the game
//! is [`Phase::Waiting`]. When the player asks to see it, the game enters
//! [`Phase::Memorize`] and the memorize timer starts. The player then hides
//! the path and reproduces it from memory during [`Phase::Play`], one cell at
//! a time, in order. Reproducing the full path moves the game to
//! [`Phase::Solved`]; a wrong cell ends the round, and a fresh path must be
//! generated.
//!
//! Each phase transition is gated by the current phase, so out-of-phase
//! requests (a play click while the path is still shown, for example) are
//! ignored instead of corrupting the round.

use log::debug;
use rand::Rng;
use std::time::{Duration, Instant};

use crate::generator::grid::Cell;
use crate::generator::path::Path;
use crate::generator::random_path::{RandomPath, RandomPathError};
use crate::settings::GameSettings;

/// Phase of the current round.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum Phase {
    /// A path has been generated but the player has not asked to see it yet.
    #[default]
    Waiting,

    /// The path is displayed and the memorize timer is running.
    Memorize,

    /// The path is hidden and the player reproduces it cell by cell.
    Play,

    /// The player reproduced the full path.
    Solved,
}

/// Outcome of a player click during the play phase.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ClickOutcome {
    /// The clicked cell is the next cell of the path. The associated value is
    /// the step number of the cell (step numbers start from 1).
    Correct(usize),

    /// The clicked cell completes the path.
    Solved,

    /// The clicked cell is not the next cell of the path. The round is over.
    Wrong,

    /// The click does not apply to the current phase and was discarded.
    Ignored,
}

/// Manage the status of the game in progress.
#[derive(Debug)]
pub struct Game {
    /// Game settings for the current round.
    pub settings: GameSettings,

    /// Current path that the player must reproduce.
    pub path: Path,

    /// Index in the path of the next cell that the player must click.
    current_index: usize,

    /// Phase of the current round.
    phase: Phase,

    /// Number of wrong cells clicked since the object was created. Wrong
    /// clicks accumulate over rounds and feed the score board.
    errors: usize,

    /// Time when the memorize phase started. Used to compute how long the
    /// player looked at the path.
    memorize_start: Instant,

    /// How long the player looked at the path, set when the play phase
    /// starts.
    memorize_duration: Option<Duration>,
}

impl Game {
    /// Create a [`Game`] object. No path exists until
    /// [`Game::new_round`] is called.
    pub fn new(settings: GameSettings) -> Self {
        Self {
            settings,
            path: Path::default(),
            current_index: 0,
            phase: Phase::Waiting,
            errors: 0,
            memorize_start: Instant::now(),
            memorize_duration: None,
        }
    }

    /// Generate a fresh path and reset the round to the waiting phase.
    ///
    /// # Errors
    ///
    /// The method propagates the generator errors: no path satisfies the
    /// settings, or the search took too long.
    pub fn new_round<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<(), RandomPathError> {
        let (min_length, max_length) = self.settings.length_bounds();
        let mut generator: RandomPath =
            RandomPath::new(self.settings.grid(), min_length, max_length);
        self.path = generator.generate(rng)?;
        debug!(
            "New round: path length = {}  iterations = {}",
            self.path.len(),
            generator.iteration
        );
        self.current_index = 0;
        self.phase = Phase::Waiting;
        self.memorize_duration = None;
        Ok(())
    }

    /// Return the phase of the current round.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Return the step number of the next cell the player must click (step
    /// numbers start from 1).
    pub fn next_step(&self) -> usize {
        self.current_index + 1
    }

    /// Return the number of wrong cells clicked so far.
    pub fn get_errors(&self) -> usize {
        self.errors
    }

    /// Start the memorize phase: the path is displayed and the timer starts.
    /// Ignored unless the round is waiting.
    pub fn show_path(&mut self) {
        if self.phase != Phase::Waiting {
            return;
        }
        self.phase = Phase::Memorize;
        self.memorize_start = Instant::now();
    }

    /// End the memorize phase: the path is hidden and the player starts
    /// reproducing it. Ignored unless the round is in the memorize phase.
    pub fn end_memorization(&mut self) {
        if self.phase != Phase::Memorize {
            return;
        }
        self.memorize_duration = Some(self.memorize_start.elapsed());
        self.phase = Phase::Play;
    }

    /// Process a player click on the given cell.
    ///
    /// Outside of the play phase the click is discarded. During the play
    /// phase, clicking the next cell of the path advances the round, and
    /// clicking any other cell ends it.
    pub fn click(&mut self, cell: Cell) -> ClickOutcome {
        if self.phase != Phase::Play {
            return ClickOutcome::Ignored;
        }
        match self.path.get_cell_from_step(self.current_index + 1) {
            Some(expected) if expected == cell => {
                self.current_index += 1;
                if self.current_index == self.path.len() {
                    self.phase = Phase::Solved;
                    ClickOutcome::Solved
                } else {
                    ClickOutcome::Correct(self.current_index)
                }
            }
            _ => {
                self.errors += 1;
                debug!(
                    "Wrong cell ({}, {}): error count = {}",
                    cell.row, cell.column, self.errors
                );
                ClickOutcome::Wrong
            }
        }
    }

    /// Whether the player reproduced the full path.
    pub fn is_solved(&self) -> bool {
        self.phase == Phase::Solved
    }

    /// Return how long the player looked at the path.
    ///
    /// While the memorize phase is running, the duration grows with the
    /// clock. After the play phase started, the value is frozen.
    pub fn get_memorize_duration(&self) -> Duration {
        match self.phase {
            Phase::Memorize => self.memorize_start.elapsed(),
            _ => self.memorize_duration.unwrap_or(Duration::ZERO),
        }
    }
}
