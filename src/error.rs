use thiserror::Error;

use crate::{COLS, ROWS};

/// Errors raised by the board and the move-selection entry points
///
/// `ColumnOutOfRange` and `ColumnFull` are the two ways a placement can target
/// an invalid column. Both are caller errors: `Grid::is_valid_location` is the
/// guard to check before placing a piece.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EngineError {
    #[error("column {column} out of range, columns must be between 0 and {max}", max = COLS - 1)]
    ColumnOutOfRange { column: usize },

    #[error("column {column} full")]
    ColumnFull { column: usize },

    #[error("row {row} is not the next open row of column {column}")]
    NotNextOpenRow { row: usize, column: usize },

    #[error("no valid moves remain")]
    NoValidMoves,

    #[error("game is already over")]
    GameOver,

    #[error("could not parse '{0}' as a valid move")]
    InvalidMove(char),

    #[error("invalid layout: {0}, expected {rows} rows of {cols} cells", rows = ROWS, cols = COLS)]
    InvalidLayout(String),
}
