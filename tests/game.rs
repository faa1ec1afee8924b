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

use rand::SeedableRng;
use rand::rngs::StdRng;
use std::time::Duration;

use memopath::game::{ClickOutcome, Game, Phase};
use memopath::generator::grid::Cell;
use memopath::highscores::HighScores;
use memopath::settings::{Difficulty, GameSettings};

/// Create a game with a freshly generated path.
fn game_with_round(seed: u64) -> Game {
    let settings = GameSettings::new(5, 5, Difficulty::Easy).unwrap();
    let mut game = Game::new(settings);
    let mut rng = StdRng::seed_from_u64(seed);
    game.new_round(&mut rng).expect("5x5 easy must have a path");
    game
}

#[test]
fn test_round_walks_through_the_phases() {
    let mut game = game_with_round(1);
    assert_eq!(game.phase(), Phase::Waiting);

    game.show_path();
    assert_eq!(game.phase(), Phase::Memorize);

    game.end_memorization();
    assert_eq!(game.phase(), Phase::Play);
}

#[test]
fn test_out_of_phase_requests_are_ignored() {
    let mut game = game_with_round(2);
    let first: Cell = game.path.get_first().unwrap();

    // Not in the play phase: clicks are discarded.
    assert_eq!(game.click(first), ClickOutcome::Ignored);

    // Skipping the memorize phase is not possible.
    game.end_memorization();
    assert_eq!(game.phase(), Phase::Waiting);

    game.show_path();
    assert_eq!(game.click(first), ClickOutcome::Ignored);

    // A second show_path must not restart the memorize timer state machine.
    game.show_path();
    assert_eq!(game.phase(), Phase::Memorize);
}

#[test]
fn test_reproducing_the_path_solves_the_round() {
    let mut game = game_with_round(3);
    game.show_path();
    game.end_memorization();

    let cells: Vec<Cell> = game.path.get().clone();
    for (i, cell) in cells.iter().enumerate() {
        let outcome = game.click(*cell);
        if i + 1 == cells.len() {
            assert_eq!(outcome, ClickOutcome::Solved);
        } else {
            assert_eq!(outcome, ClickOutcome::Correct(i + 1));
            assert_eq!(game.next_step(), i + 2);
        }
    }
    assert!(game.is_solved());
    assert_eq!(game.get_errors(), 0);

    // The round is over: further clicks are discarded.
    assert_eq!(game.click(cells[0]), ClickOutcome::Ignored);
}

#[test]
fn test_wrong_cell_ends_the_round() {
    let mut game = game_with_round(4);
    game.show_path();
    game.end_memorization();

    // The second path cell is never the expected first cell.
    let wrong: Cell = game.path.get_cell_from_step(2).unwrap();
    assert_eq!(game.click(wrong), ClickOutcome::Wrong);
    assert_eq!(game.get_errors(), 1);
}

#[test]
fn test_new_round_resets_the_progress() {
    let mut game = game_with_round(5);
    game.show_path();
    game.end_memorization();
    let first: Cell = game.path.get_first().unwrap();
    assert_eq!(game.click(first), ClickOutcome::Correct(1));

    let mut rng = StdRng::seed_from_u64(6);
    game.new_round(&mut rng).unwrap();
    assert_eq!(game.phase(), Phase::Waiting);
    assert_eq!(game.next_step(), 1);
}

#[test]
fn test_memorize_duration_is_frozen_after_play_starts() {
    let mut game = game_with_round(7);
    game.show_path();
    game.end_memorization();
    let frozen = game.get_memorize_duration();
    assert_eq!(game.get_memorize_duration(), frozen);
}

#[test]
fn test_highscores_are_sorted_and_bounded() {
    let settings = GameSettings::new(10, 10, Difficulty::Easy).unwrap();
    let mut highscores = HighScores::new();
    assert!(highscores.is_empty());
    assert!(highscores.get_score(&settings).is_none());

    // Decreasing times: each new score takes the top position.
    for i in 0..10 {
        let time = Duration::from_secs(100 - i);
        assert_eq!(highscores.add_score(&settings, time, 0), Some(1));
    }

    // Slower than every entry of a full board: rejected.
    assert_eq!(
        highscores.add_score(&settings, Duration::from_secs(200), 0),
        None
    );

    // A middling time lands at its sorted position.
    let position = highscores
        .add_score(&settings, Duration::from_secs(95), 2)
        .expect("A time of 95s must enter the board");
    assert_eq!(position, 6);

    let scores = highscores.get_score(&settings).unwrap();
    assert_eq!(scores.len(), 10);
    assert!(
        scores.windows(2).all(|pair| pair[0].time <= pair[1].time),
        "Scoreboard must be sorted from best to worst."
    );
}

#[test]
fn test_highscores_boards_are_per_settings() {
    let easy = GameSettings::new(10, 10, Difficulty::Easy).unwrap();
    let hard = GameSettings::new(10, 10, Difficulty::Hard).unwrap();
    let mut highscores = HighScores::new();

    highscores.add_score(&easy, Duration::from_secs(10), 0);
    assert!(highscores.get_score(&hard).is_none());
    assert_eq!(highscores.get_score(&easy).unwrap().len(), 1);
}
