/*
random_path.rs

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

//! Generate a random path.
//!
//! The path starts in the leftmost column and ends in the rightmost column.
//! It is a simple orthogonal walk that never touches the leftmost column
//! again after its first cell, never runs alongside itself (each cell added
//! to the path touches exactly one cell already in the path), and whose
//! length falls within the configured window.

use log::debug;
use rand::Rng;
use rand::seq::SliceRandom;
use std::time::Instant;

use super::grid::{Cell, Direction, Grid};
use super::path;

// Max duration for trying to find a path, otherwise an error is raised. The
// backtracking search is exponential in the worst case, and some grid and
// length-window combinations admit no path at all.
const MAX_TIME_SEC: u64 = 6;

/// Type of errors.
#[derive(Debug, PartialEq)]
pub enum RandomPathError {
    /// No possible path.
    NoPath,

    /// No path found before the timeout.
    DurationExceeded,
}

/// [`RandomPath`] object.
pub struct RandomPath {
    /// The board on which the path is generated.
    pub grid: Grid,

    /// Minimum number of cells in the path.
    pub min_length: usize,

    /// Maximum number of cells in the path.
    pub max_length: usize,

    /// Number of iterations it took to generate the last random path.
    pub iteration: usize,

    /// Duration in seconds it took to generate the last random path.
    pub duration: f32,

    /// Time when the path generation started. Used to compute the
    /// [`RandomPath::duration`] and to enforce the timeout.
    start: Instant,
}

impl RandomPath {
    /// Create the object.
    pub fn new(grid: Grid, min_length: usize, max_length: usize) -> Self {
        Self {
            grid,
            min_length,
            max_length,
            iteration: 0,
            duration: 0.0,
            start: Instant::now(),
        }
    }

    /// Generate and return a random path.
    ///
    /// The provided random number generator drives both the order in which
    /// the starting rows are tried and the order in which the directions are
    /// explored at every step. Two calls with identical parameters and
    /// identical random sequences produce identical paths.
    ///
    /// # Errors
    ///
    /// The method returns [`RandomPathError::NoPath`] when no path satisfies
    /// the constraints on this board. This is an expected outcome for
    /// restrictive grid and length-window combinations, and the caller is
    /// expected to ask for different settings. The method returns
    /// [`RandomPathError::DurationExceeded`] when the search takes too long.
    /// In that later case, the method can be retried.
    pub fn generate<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
    ) -> Result<path::Path, RandomPathError> {
        self.iteration = 0;
        self.duration = 0.0;
        self.start = Instant::now();

        debug!(
            "Grid = {}x{}  Length window = [{}, {}]",
            self.grid.height, self.grid.width, self.min_length, self.max_length
        );

        // The window cannot be satisfied, not even by covering the full board.
        if self.min_length > self.grid.num_cells() || self.min_length > self.max_length {
            return Err(RandomPathError::NoPath);
        }

        let mut start_rows: Vec<usize> = (0..self.grid.height).collect();
        start_rows.shuffle(rng);

        let mut path: path::Path = path::Path::new(self.grid.num_cells());
        for start_row in start_rows {
            debug!("Trying start row {start_row}");
            path.clear();
            match self.find_path(Cell::new(start_row, 0), &mut path, rng) {
                Ok(()) => {
                    self.duration = self.start.elapsed().as_secs_f32();
                    debug!(
                        "Iterations = {}  Duration = {}",
                        self.iteration, self.duration
                    );
                    return Ok(path);
                }
                Err(RandomPathError::NoPath) => (),
                Err(e) => {
                    self.duration = self.start.elapsed().as_secs_f32();
                    return Err(e);
                }
            }
        }
        self.duration = self.start.elapsed().as_secs_f32();
        debug!(
            "No path: iterations = {}  Duration = {}",
            self.iteration, self.duration
        );
        Err(RandomPathError::NoPath)
    }

    /// Recursively find a path from the given cell.
    fn find_path<R: Rng + ?Sized>(
        &mut self,
        cell: Cell,
        path: &mut path::Path,
        rng: &mut R,
    ) -> Result<(), RandomPathError> {
        debug!(
            "== Going to cell ({}, {}) (iteration {})",
            cell.row, cell.column, self.iteration
        );
        path.push(cell);

        // Reaching the rightmost column terminates the walk: the path either
        // has an acceptable length, or the branch is dead.
        if cell.column == self.grid.last_column() {
            if self.min_length <= path.len() && path.len() <= self.max_length {
                return Ok(());
            }
            debug!("    Back: length {} out of window", path.len());
            path.pop();
            return Err(RandomPathError::NoPath);
        }

        if path.len() >= self.max_length {
            debug!("    Back: maximum length reached");
            path.pop();
            return Err(RandomPathError::NoPath);
        }

        self.iteration += 1;
        if self.start.elapsed().as_secs() >= MAX_TIME_SEC {
            return Err(RandomPathError::DurationExceeded);
        }

        // Randomize the order in which to explore the directions
        let mut directions: [Direction; 4] = Direction::ALL;
        directions.shuffle(rng);

        for direction in directions {
            let Some(next) = self.grid.step(cell, direction) else {
                continue;
            };
            if path.contains(next) {
                continue;
            }
            // Only the very first cell is allowed in column 0
            if next.column == 0 {
                continue;
            }
            // The candidate cell must touch exactly one path cell (the cell
            // being extended). This keeps the walk from running alongside
            // itself, which would make the drawn path ambiguous.
            if self.grid.neighbors(next).filter(|n| path.contains(*n)).count() != 1 {
                continue;
            }

            match self.find_path(next, path, rng) {
                Ok(()) => return Ok(()),
                Err(e) => {
                    if e == RandomPathError::DurationExceeded {
                        return Err(e);
                    }
                }
            }
        }
        debug!("    Back: no eligible direction");
        path.pop();
        Err(RandomPathError::NoPath)
    }
}
