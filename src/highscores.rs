/*
highscores.rs

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

//! Manage high scores for the games.
//!
//! The main object, [`HighScores`], maintains a list of high scores for each
//! board size and difficulty combination. The score is the time the player
//! needed to memorize the path: the shorter the look, the better the score.
//! This object is saved when the player completes a path and makes it to the
//! scoreboard, and is restored when Memopath starts.
//! See the [`crate::saver::highscores`] module that saves and restores the
//! [`HighScores`] object.

use std::collections::HashMap;
use std::time::{Duration, SystemTime};

use serde::{Deserialize, Serialize};

use crate::settings::GameSettings;

/// Number of entries per scoreboard (number of top scores to keep).
const BOARD_SIZE: usize = 10;

/// Object that represent a score.
#[derive(Serialize, Deserialize, Debug, Clone, Copy)]
pub struct Score {
    /// How long the player looked at the path before reproducing it.
    pub time: Duration,

    /// Number of wrong cells clicked before completing the path.
    pub errors: usize,

    /// Completion timestamp, which is used to display the date and time in
    /// the scoreboard.
    pub when: SystemTime,
}

/// Sorted list of the top scores for one board size and difficulty.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
struct GameHighScoreBoard {
    /// Sorted list of the top scores.
    /// The number of scores in this list is controlled by the [`BOARD_SIZE`]
    /// constant.
    top: Vec<Score>,
}

impl GameHighScoreBoard {
    /// Add a score to the scoreboard and return the position in the board,
    /// or None if the score does not make it to the board.
    ///
    /// The returned position starts at 1 (top score).
    fn add_score(&mut self, time: Duration, errors: usize) -> Option<usize> {
        let position: usize = self
            .top
            .iter()
            .position(|score| time < score.time)
            .unwrap_or(self.top.len());
        if position >= BOARD_SIZE {
            return None;
        }
        self.top.insert(
            position,
            Score {
                time,
                errors,
                when: SystemTime::now(),
            },
        );
        self.top.truncate(BOARD_SIZE);
        Some(position + 1)
    }
}

/// List of the scoreboards for the board size and difficulty combinations.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct HighScores {
    /// Map of the [`GameHighScoreBoard`] scoreboards indexed by the game
    /// settings.
    ///
    /// The index is a string in the format `<width>x<height>@@<difficulty>`.
    board: HashMap<String, GameHighScoreBoard>,
}

impl Default for HighScores {
    fn default() -> Self {
        Self::new()
    }
}

impl HighScores {
    /// Create a [`HighScores`] object.
    pub fn new() -> Self {
        Self {
            board: HashMap::new(),
        }
    }

    /// Return the string that is used as an index for the list of
    /// scoreboards.
    fn build_key(settings: &GameSettings) -> String {
        format!(
            "{}x{}@@{}",
            settings.width, settings.height, settings.difficulty
        )
    }

    /// Add the score to the scoreboard of the provided game settings and
    /// return the position in the scoreboard, or None if the score does not
    /// make it to the board.
    ///
    /// The returned position starts at 1 (top score).
    pub fn add_score(
        &mut self,
        settings: &GameSettings,
        time: Duration,
        errors: usize,
    ) -> Option<usize> {
        let key: String = Self::build_key(settings);
        let scoreboard: &mut GameHighScoreBoard = self.board.entry(key).or_default();

        scoreboard.add_score(time, errors)
    }

    /// Return the list of [`Score`] for the given game settings.
    ///
    /// Return None when the scoreboard is empty.
    pub fn get_score(&self, settings: &GameSettings) -> Option<&Vec<Score>> {
        let key: String = Self::build_key(settings);

        match self.board.get(&key) {
            Some(b) => Some(&b.top),
            None => None,
        }
    }

    /// Return the scoreboards as (key, scores) pairs, every board size and
    /// difficulty combination included.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &Vec<Score>)> {
        self.board.iter().map(|(key, b)| (key, &b.top))
    }

    /// Return whether the list of scoreboard is empty (no scoreboard for any
    /// combination).
    pub fn is_empty(&self) -> bool {
        self.board.is_empty()
    }
}
