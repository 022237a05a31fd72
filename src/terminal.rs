//! Detection of won and drawn positions

use crate::{
    grid::{Cell, Grid, Player},
    CONNECT, COLS, ROWS,
};

/// The number of lines of `CONNECT` cells on the board
pub const NUM_WINDOWS: usize = ROWS * (COLS - CONNECT + 1)
    + COLS * (ROWS - CONNECT + 1)
    + 2 * (ROWS - CONNECT + 1) * (COLS - CONNECT + 1);

/// Every line of `CONNECT` cells on the board as cell indices: horizontal,
/// vertical, positive slope (up and to the right) and negative slope (down
/// and to the right)
pub const WINDOWS: [[usize; CONNECT]; NUM_WINDOWS] = windows();

const fn windows() -> [[usize; CONNECT]; NUM_WINDOWS] {
    // (row step, column step) of each direction
    let directions: [(isize, isize); 4] = [(0, 1), (1, 0), (1, 1), (-1, 1)];
    let reach = CONNECT as isize - 1;

    let mut windows = [[0; CONNECT]; NUM_WINDOWS];
    let mut n = 0;
    let mut d = 0;
    while d < directions.len() {
        let (row_step, column_step) = directions[d];
        let mut row = 0;
        while row < ROWS {
            let mut column = 0;
            while column < COLS {
                let end_row = row as isize + row_step * reach;
                let end_column = column as isize + column_step * reach;
                if end_row >= 0 && end_row < ROWS as isize && end_column < COLS as isize {
                    let mut i = 0;
                    while i < CONNECT {
                        let r = (row as isize + row_step * i as isize) as usize;
                        let c = (column as isize + column_step * i as isize) as usize;
                        windows[n][i] = Grid::index(r, c);
                        i += 1;
                    }
                    n += 1;
                }
                column += 1;
            }
            row += 1;
        }
        d += 1;
    }
    assert!(n == NUM_WINDOWS, "window count does not match the board dimensions");
    windows
}

/// The cells of `grid` covered by a window
pub fn window_cells(grid: &Grid, window: &[usize; CONNECT]) -> [Cell; CONNECT] {
    let mut cells = [Cell::Empty; CONNECT];
    for (cell, &index) in cells.iter_mut().zip(window.iter()) {
        *cell = grid.cell_at(index);
    }
    cells
}

/// Whether `player` has `CONNECT` pieces in a line anywhere on the board
pub fn winning_move(grid: &Grid, player: Player) -> bool {
    let cell = Cell::from(player);
    WINDOWS
        .iter()
        .any(|window| window.iter().all(|&index| grid.cell_at(index) == cell))
}

/// Whether the game is over, either won by a player or drawn on a full board
pub fn is_terminal(grid: &Grid) -> bool {
    winning_move(grid, Player::PlayerOne)
        || winning_move(grid, Player::PlayerTwo)
        || grid.valid_locations().is_empty()
}

#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum GameState {
    Playing,
    PlayerOneWin,
    PlayerTwoWin,
    Draw,
}

impl GameState {
    pub fn is_over(&self) -> bool {
        !matches!(self, GameState::Playing)
    }

    pub fn win_for(player: Player) -> Self {
        match player {
            Player::PlayerOne => GameState::PlayerOneWin,
            Player::PlayerTwo => GameState::PlayerTwoWin,
        }
    }
}

/// The verdict for a board snapshot, a win takes precedence over a full board
pub fn game_state(grid: &Grid) -> GameState {
    if winning_move(grid, Player::PlayerOne) {
        GameState::PlayerOneWin
    } else if winning_move(grid, Player::PlayerTwo) {
        GameState::PlayerTwoWin
    } else if grid.valid_locations().is_empty() {
        GameState::Draw
    } else {
        GameState::Playing
    }
}
