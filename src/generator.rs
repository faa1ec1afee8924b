/*
generator.rs

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

//! Generate random paths on the game board.
//!
//! The board is a [`grid::Grid`] object, a rectangular lattice of cells that
//! are addressed by their (row, column) coordinates ([`grid::Cell`] objects).
//!
//! To play, a random path must be created.
//! You create this path by creating a [`random_path::RandomPath`] object and
//! by using its [`random_path::RandomPath::generate`] method.
//! The resulting [`path::Path`] object is an ordered list of cells that
//! starts in the leftmost column, ends in the rightmost column, and never
//! runs alongside itself.
//!
//! Some boards admit no path for the requested length window. In that case
//! the [`random_path::RandomPath::generate`] method returns the
//! [`random_path::RandomPathError::NoPath`] error, and the caller must ask
//! the player for different game settings.

pub mod grid;
pub mod path;
pub mod random_path;
