/*
grid.rs

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

//! Rectangular game board.
//!
//! The board is a lattice of [`Grid::height`] rows by [`Grid::width`] columns.
//! Cells are addressed by 0-indexed (row, column) pairs, and moves are
//! orthogonal only (up, down, left, right).

use serde::{Deserialize, Serialize};

/// One cell of the board, addressed by its 0-indexed coordinates.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Cell {
    /// Row, from 0 at the top.
    pub row: usize,

    /// Column, from 0 on the left.
    pub column: usize,
}

impl Cell {
    /// Create a [`Cell`] object.
    pub fn new(row: usize, column: usize) -> Self {
        Self { row, column }
    }
}

/// The four orthogonal move directions.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// All the directions, in a fixed order. Callers that need a random
    /// exploration order shuffle a copy of this array.
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];
}

/// The rectangular board.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq)]
pub struct Grid {
    /// Number of rows.
    pub height: usize,

    /// Number of columns.
    pub width: usize,
}

impl Grid {
    /// Create a [`Grid`] object.
    pub fn new(height: usize, width: usize) -> Self {
        Self { height, width }
    }

    /// Return the total number of cells on the board.
    pub fn num_cells(&self) -> usize {
        self.height * self.width
    }

    /// Return the index of the rightmost column.
    pub fn last_column(&self) -> usize {
        self.width - 1
    }

    /// Whether the given cell lies on the board.
    pub fn contains(&self, cell: Cell) -> bool {
        cell.row < self.height && cell.column < self.width
    }

    /// Return the cell one step away in the given direction, or None when the
    /// move leaves the board.
    pub fn step(&self, cell: Cell, direction: Direction) -> Option<Cell> {
        let (row, column) = match direction {
            Direction::Up => (cell.row.checked_sub(1)?, cell.column),
            Direction::Down => (cell.row + 1, cell.column),
            Direction::Left => (cell.row, cell.column.checked_sub(1)?),
            Direction::Right => (cell.row, cell.column + 1),
        };
        let next: Cell = Cell::new(row, column);
        if self.contains(next) { Some(next) } else { None }
    }

    /// Iterate over the on-board orthogonal neighbors of the given cell.
    pub fn neighbors(&self, cell: Cell) -> impl Iterator<Item = Cell> + '_ {
        Direction::ALL
            .into_iter()
            .filter_map(move |d| self.step(cell, d))
    }
}
