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

use rand::SeedableRng;
use rand::rngs::StdRng;
use std::collections::HashSet;

use memopath::generator::grid::{Cell, Grid};
use memopath::generator::path::Path;
use memopath::generator::random_path::{RandomPath, RandomPathError};
use memopath::settings::{Difficulty, GameSettings};

/// Check every structural rule of a generated path.
fn assert_valid_path(grid: Grid, min_length: usize, max_length: usize, path: &Path) {
    let cells: &Vec<Cell> = path.get();
    assert!(!cells.is_empty(), "Path must not be empty.");
    assert!(
        min_length <= cells.len() && cells.len() <= max_length,
        "Path length {} must lie in [{min_length}, {max_length}].",
        cells.len()
    );

    let first: Cell = path.get_first().unwrap();
    let last: Cell = path.get_last().unwrap();
    assert_eq!(first.column, 0, "Path must start in the leftmost column.");
    assert_eq!(
        last.column,
        grid.last_column(),
        "Path must end in the rightmost column."
    );

    let distinct: HashSet<Cell> = cells.iter().copied().collect();
    assert_eq!(distinct.len(), cells.len(), "Path cells must be distinct.");

    for pair in cells.windows(2) {
        let distance: usize = pair[0].row.abs_diff(pair[1].row)
            + pair[0].column.abs_diff(pair[1].column);
        assert_eq!(
            distance, 1,
            "Consecutive cells {:?} and {:?} must be orthogonal neighbors.",
            pair[0], pair[1]
        );
    }

    assert_eq!(
        cells.iter().filter(|c| c.column == 0).count(),
        1,
        "Only the first cell may lie in the leftmost column."
    );

    // Once the path reaches the rightmost column, it must stay there.
    let reached: usize = cells
        .iter()
        .position(|c| c.column == grid.last_column())
        .unwrap();
    assert!(
        cells[reached..].iter().all(|c| c.column == grid.last_column()),
        "Path must not leave the rightmost column after reaching it."
    );

    // Thinness: endpoints touch exactly one path cell, inner cells exactly
    // two (the previous and the next cells of the walk).
    for (i, cell) in cells.iter().enumerate() {
        let touching: usize = grid
            .neighbors(*cell)
            .filter(|n| path.contains(*n))
            .count();
        let expected: usize = if i == 0 || i == cells.len() - 1 { 1 } else { 2 };
        assert_eq!(
            touching, expected,
            "Cell {cell:?} (step {}) touches {touching} path cells instead of {expected}.",
            i + 1
        );
    }
}

/// Generate a path for the settings with a fixed seed and validate it.
fn generate_valid_path(settings: &GameSettings, seed: u64) -> Path {
    let (min_length, max_length) = settings.length_bounds();
    let mut generator = RandomPath::new(settings.grid(), min_length, max_length);
    let mut rng = StdRng::seed_from_u64(seed);
    let path = generator
        .generate(&mut rng)
        .expect("A path must exist for these settings");
    assert_valid_path(settings.grid(), min_length, max_length, &path);
    path
}

#[test]
fn test_easy_10x10_path_is_valid() {
    let settings = GameSettings::new(10, 10, Difficulty::Easy).unwrap();
    for seed in 0..20 {
        generate_valid_path(&settings, seed);
    }
}

#[test]
fn test_hard_10x10_path_is_valid() {
    let settings = GameSettings::new(10, 10, Difficulty::Hard).unwrap();
    for seed in 0..10 {
        let path = generate_valid_path(&settings, seed);
        assert!(
            path.len() >= 41,
            "Hard path on 10x10 must hold at least 41 cells, got {}.",
            path.len()
        );
    }
}

#[test]
fn test_non_square_boards() {
    let settings = GameSettings::new(20, 2, Difficulty::Easy).unwrap();
    generate_valid_path(&settings, 7);

    let settings = GameSettings::new(2, 20, Difficulty::Easy).unwrap();
    generate_valid_path(&settings, 7);
}

#[test]
fn test_smallest_board_path_has_two_cells() {
    let settings = GameSettings::new(2, 2, Difficulty::Easy).unwrap();
    assert_eq!(settings.length_bounds(), (2, 5));
    for seed in 0..10 {
        let path = generate_valid_path(&settings, seed);
        // The only simple path from the left column to the right column on a
        // 2x2 board spans a single row.
        assert_eq!(path.len(), 2, "Path on a 2x2 board must hold two cells.");
        assert_eq!(
            path.get_first().unwrap().row,
            path.get_last().unwrap().row,
            "Path on a 2x2 board must stay on one row."
        );
    }
}

#[test]
fn test_same_seed_same_path() {
    let settings = GameSettings::new(10, 10, Difficulty::Hard).unwrap();
    let first = generate_valid_path(&settings, 42);
    let second = generate_valid_path(&settings, 42);
    assert_eq!(
        first, second,
        "Two generations with the same seed must return the same path."
    );
}

#[test]
fn test_minimum_above_board_capacity_is_no_path() {
    // 4 cells on the board, at least 5 in the path: no path can exist.
    let mut generator = RandomPath::new(Grid::new(2, 2), 5, 10);
    let mut rng = StdRng::seed_from_u64(0);
    assert_eq!(generator.generate(&mut rng), Err(RandomPathError::NoPath));
}

#[test]
fn test_degenerate_length_window_is_no_path() {
    let mut generator = RandomPath::new(Grid::new(5, 5), 4, 3);
    let mut rng = StdRng::seed_from_u64(0);
    assert_eq!(generator.generate(&mut rng), Err(RandomPathError::NoPath));
}

#[test]
fn test_exhausted_search_is_no_path() {
    // On a 2x2 board, every path from the left column to the right column
    // holds exactly two cells, so a window of [3, 4] admits nothing.
    let mut generator = RandomPath::new(Grid::new(2, 2), 3, 4);
    let mut rng = StdRng::seed_from_u64(0);
    assert_eq!(generator.generate(&mut rng), Err(RandomPathError::NoPath));
}

#[test]
fn test_generation_statistics_are_recorded() {
    let settings = GameSettings::new(10, 10, Difficulty::Hard).unwrap();
    let (min_length, max_length) = settings.length_bounds();
    let mut generator = RandomPath::new(settings.grid(), min_length, max_length);
    let mut rng = StdRng::seed_from_u64(3);
    generator.generate(&mut rng).unwrap();
    assert!(
        generator.iteration > 0,
        "A hard search must explore more than one cell."
    );
}
