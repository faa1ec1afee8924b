/*
draw.rs

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

//! Render the game board as text.
//!
//! The functions build strings and perform no I/O. The board is drawn as a
//! lattice of boxes with row and column coordinates in the margins, so that
//! the player can name cells during the play phase. Path cells carry their
//! 1-based step number:
//!
//! ```text
//!      0    1    2
//!    +----+----+----+
//!  0 |  1 |    |    |
//!    +----+----+----+
//!  1 |  2 |  3 |    |
//!    +----+----+----+
//! ```

use crate::generator::grid::Cell;
use crate::generator::path::Path;
use crate::settings::GameSettings;

/// Render the empty board.
pub fn render_blank(settings: &GameSettings) -> String {
    render(settings, &Path::default(), 0)
}

/// Render the board with the full path numbered, for the memorize phase.
pub fn render_path(settings: &GameSettings, path: &Path) -> String {
    render(settings, path, path.len())
}

/// Render the board with only the first `steps` cells of the path numbered,
/// for the play phase.
pub fn render_progress(settings: &GameSettings, path: &Path, steps: usize) -> String {
    render(settings, path, steps)
}

/// Render the board, numbering the path cells whose step number does not
/// exceed `steps`.
fn render(settings: &GameSettings, path: &Path, steps: usize) -> String {
    let mut out: String = String::new();

    // Column coordinates
    out.push_str("   ");
    for column in 0..settings.width {
        out.push_str(&format!("{column:^5}"));
    }
    out.push('\n');

    let border: String = format!("   {}+\n", "+----".repeat(settings.width));

    for row in 0..settings.height {
        out.push_str(&border);
        out.push_str(&format!("{row:>2} "));
        for column in 0..settings.width {
            match path.cell_index(Cell::new(row, column)) {
                Some(i) if i < steps => out.push_str(&format!("|{:^4}", i + 1)),
                _ => out.push_str("|    "),
            }
        }
        out.push_str("|\n");
    }
    out.push_str(&border);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::Difficulty;

    fn sample() -> (GameSettings, Path) {
        let settings = GameSettings::new(3, 2, Difficulty::Easy).unwrap();
        let mut path = Path::new(6);
        path.push(Cell::new(0, 0));
        path.push(Cell::new(0, 1));
        path.push(Cell::new(0, 2));
        (settings, path)
    }

    #[test]
    fn path_cells_are_numbered() {
        let (settings, path) = sample();
        let board = render_path(&settings, &path);
        assert!(board.contains("| 1  | 2  | 3  |"), "board:\n{board}");
    }

    #[test]
    fn blank_board_has_empty_cells() {
        let (settings, _) = sample();
        let board = render_blank(&settings);
        assert!(board.contains("|    |    |    |"), "board:\n{board}");
    }

    #[test]
    fn progress_hides_later_steps() {
        let (settings, path) = sample();
        let board = render_progress(&settings, &path, 1);
        assert!(board.contains("| 1  |    |    |"), "board:\n{board}");
    }
}
