//! Static scoring of positions the search does not resolve

use crate::{
    grid::{Cell, Grid, Player},
    terminal::{window_cells, WINDOWS},
    CENTER_COLUMN, CONNECT, ROWS,
};

/// Score of a window filled by the player
pub const FOUR_SCORE: i64 = 100;
/// Score of a window with three of the player's pieces and one open cell
pub const THREE_SCORE: i64 = 5;
/// Score of a window with two of the player's pieces and two open cells
pub const TWO_SCORE: i64 = 2;
/// Score of a window with three opponent pieces and one open cell
pub const OPPONENT_THREE_SCORE: i64 = -4;
/// Bonus per piece in the center column
pub const CENTER_WEIGHT: i64 = 3;

/// Scores a single window of cells for `player`
pub fn evaluate_window(window: &[Cell; CONNECT], player: Player) -> i64 {
    let own_cell = Cell::from(player);
    let opponent_cell = Cell::from(player.opponent());

    let own = window.iter().filter(|&&c| c == own_cell).count();
    let opponent = window.iter().filter(|&&c| c == opponent_cell).count();
    let empty = window.iter().filter(|c| c.is_empty()).count();

    let mut score = match (own, empty) {
        (4, _) => FOUR_SCORE,
        (3, 1) => THREE_SCORE,
        (2, 2) => TWO_SCORE,
        _ => 0,
    };
    if opponent == 3 && empty == 1 {
        score += OPPONENT_THREE_SCORE;
    }
    score
}

/// Heuristic value of a position for `player`
///
/// Sums a bonus for every piece the player holds in the center column and
/// the score of every horizontal, vertical and diagonal window.
pub fn score_position(grid: &Grid, player: Player) -> i64 {
    let own_cell = Cell::from(player);
    let center_count = (0..ROWS)
        .filter(|&row| grid.cell(row, CENTER_COLUMN) == own_cell)
        .count() as i64;

    let windows: i64 = WINDOWS
        .iter()
        .map(|window| evaluate_window(&window_cells(grid, window), player))
        .sum();

    CENTER_WEIGHT * center_count + windows
}
