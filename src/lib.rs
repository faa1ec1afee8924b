/*
lib.rs

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

//! Memopath: memorize a random path through a grid and reproduce it.
//!
//! The [`generator`] module produces the random path, the [`game`] module
//! manages a round (memorize phase, play phase, progress, and timer), and
//! the [`application`] module drives the game on the terminal.

pub mod application;
pub mod cli_options;
pub mod config;
pub mod draw;
pub mod game;
pub mod generator;
pub mod highscores;
pub mod saver;
pub mod settings;
