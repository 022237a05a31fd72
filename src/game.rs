use crate::{
    error::EngineError,
    grid::{Grid, Player},
    search::{Score, Searcher},
    terminal::{winning_move, GameState},
    COLS,
};

/// The authoritative state of a game in progress
///
/// Owns the board and the turn order the engine itself knows nothing about.
/// `PlayerOne` moves first.
#[derive(Clone, Debug)]
pub struct Game {
    grid: Grid,
    pub to_move: Player,
    /// One-indexed columns of every move played so far
    pub history: String,
    pub state: GameState,
}

impl Game {
    pub fn new() -> Self {
        Self {
            grid: Grid::new(),
            to_move: Player::PlayerOne,
            history: String::new(),
            state: GameState::Playing,
        }
    }

    /// Replays a string of one-indexed column digits
    pub fn from_moves(moves: &str) -> Result<Self, EngineError> {
        let mut game = Self::new();

        for column_char in moves.chars() {
            match column_char.to_digit(10).map(|c| c as usize) {
                Some(column @ 1..=COLS) => {
                    game.play_checked(column - 1)?;
                }
                _ => return Err(EngineError::InvalidMove(column_char)),
            }
        }
        Ok(game)
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Plays a zero-indexed column for the player to move, returning the new
    /// state of the game
    pub fn play_checked(&mut self, column: usize) -> Result<GameState, EngineError> {
        if self.state.is_over() {
            return Err(EngineError::GameOver);
        }
        if column >= COLS {
            return Err(EngineError::ColumnOutOfRange { column });
        }
        let row = self
            .grid
            .next_open_row(column)
            .ok_or(EngineError::ColumnFull { column })?;
        self.grid.drop_piece(row, column, self.to_move)?;

        self.state = if winning_move(&self.grid, self.to_move) {
            GameState::win_for(self.to_move)
        } else if self.grid.valid_locations().is_empty() {
            GameState::Draw
        } else {
            GameState::Playing
        };
        self.history.push_str(&(column + 1).to_string());
        self.to_move = self.to_move.opponent();

        Ok(self.state)
    }

    /// Searches for the move of the player to move
    ///
    /// `PlayerTwo` maximizes and `PlayerOne` minimizes the engine's score, so
    /// either seat can be played by the engine.
    pub fn ai_move(
        &self,
        searcher: &mut Searcher,
        depth: u32,
    ) -> Result<(usize, Score), EngineError> {
        if self.state.is_over() {
            return Err(EngineError::GameOver);
        }
        searcher.best_move(&self.grid, depth, self.to_move)
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
