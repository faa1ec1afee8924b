/*
settings.rs

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

//! Game settings: board dimensions and difficulty level.
//!
//! The settings are validated before a game starts. Dimensions must stay
//! within [`MIN_GRID_VALUE`] and [`MAX_GRID_VALUE`], and the board must be
//! big enough to hold a path of the minimum length that the difficulty level
//! requires. The generator is never called with settings that fail these
//! checks.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt;
use strum_macros::Display;

use crate::generator::grid::Grid;

/// Smallest accepted board dimension.
pub const MIN_GRID_VALUE: usize = 2;

/// Largest accepted board dimension.
pub const MAX_GRID_VALUE: usize = 20;

/// Game difficulty level.
///
/// The difficulty controls the length window of the generated path relative
/// to the board dimensions.
#[derive(
    Serialize,
    Deserialize,
    Debug,
    Copy,
    Clone,
    PartialOrd,
    PartialEq,
    Eq,
    Hash,
    ValueEnum,
    Default,
    Display,
)]
pub enum Difficulty {
    #[default]
    Easy,
    Hard,
}

/// Type of settings validation errors.
#[derive(Debug, PartialEq)]
pub enum SettingsError {
    /// A board dimension is out of range.
    GridSize,

    /// The board is too small for the minimum path length that the
    /// difficulty level requires.
    DifficultyTooHard,
}

impl fmt::Display for SettingsError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            SettingsError::GridSize => write!(
                f,
                "Grid sizes must be between {MIN_GRID_VALUE} and {MAX_GRID_VALUE}."
            ),
            SettingsError::DifficultyTooHard => write!(
                f,
                "Difficulty selected can't be applied to desired grid size. \
                 Please modify grid values."
            ),
        }
    }
}

impl Error for SettingsError {}

/// Validated game settings.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq)]
pub struct GameSettings {
    /// Number of columns.
    pub width: usize,

    /// Number of rows.
    pub height: usize,

    /// Difficulty level.
    pub difficulty: Difficulty,
}

impl GameSettings {
    /// Create a [`GameSettings`] object.
    ///
    /// # Errors
    ///
    /// The method returns an error if a dimension is out of range, or if the
    /// board cannot hold a path of the minimum length for the difficulty
    /// level. For the hard level, where the maximum length is the full board,
    /// the later check also rejects the degenerate case of a length window
    /// with a minimum above its maximum.
    pub fn new(
        width: usize,
        height: usize,
        difficulty: Difficulty,
    ) -> Result<Self, SettingsError> {
        if !(MIN_GRID_VALUE..=MAX_GRID_VALUE).contains(&width)
            || !(MIN_GRID_VALUE..=MAX_GRID_VALUE).contains(&height)
        {
            return Err(SettingsError::GridSize);
        }

        let settings: Self = Self {
            width,
            height,
            difficulty,
        };
        let (min_length, _) = settings.length_bounds();
        if width * height < min_length {
            return Err(SettingsError::DifficultyTooHard);
        }
        Ok(settings)
    }

    /// Return the board described by the settings.
    pub fn grid(&self) -> Grid {
        Grid::new(self.height, self.width)
    }

    /// Return the inclusive path length window for the difficulty level.
    ///
    /// Easy paths hold at least one cell per column and at most two and a
    /// half times the number of columns. Hard paths wind through at least
    /// four times the number of columns, up to the full board.
    pub fn length_bounds(&self) -> (usize, usize) {
        match self.difficulty {
            Difficulty::Easy => (self.width, (self.width * 5).div_ceil(2)),
            Difficulty::Hard => (self.width * 4 + 1, self.width * self.height),
        }
    }
}
