//! A depth-limited minimax agent for the board game 'Connect 4'
//!
//! The agent scores positions with a sliding-window heuristic and searches
//! a fixed number of moves ahead with alpha-beta pruning. Scores are from the
//! point of view of player two, who maximizes them, while player one
//! minimizes them.
//!
//! # Basic Usage
//!
//! ```
//! use connect4_minimax::{grid::Grid, search::best_move, DEFAULT_DEPTH};
//!
//!# use std::error::Error;
//!# fn main() -> Result<(), Box<dyn Error>> {
//! let grid = Grid::from_moves("112233")?;
//! let (column, _score) = best_move(&grid, DEFAULT_DEPTH)?;
//!
//! assert_eq!(column, 3);
//!# Ok(())
//!# }
//! ```

use static_assertions::*;
pub use anyhow;

pub mod error;

pub mod grid;

pub mod terminal;

pub mod evaluation;

pub mod search;

pub mod game;

pub mod crosscheck;


pub use error::EngineError;
pub use game::Game;
pub use grid::{Cell, Grid, Player};
pub use search::{best_move, minimax, minimax_plain, Searcher};
pub use terminal::GameState;

/// The number of rows on the game board
pub const ROWS: usize = 6;

/// The number of columns on the game board
pub const COLS: usize = 7;

/// The length of a winning alignment
pub const CONNECT: usize = 4;

/// The column favoured by the evaluator
pub const CENTER_COLUMN: usize = COLS / 2;

/// The search depth used by the automated player
pub const DEFAULT_DEPTH: u32 = 4;

// an alignment has to fit on the board in every direction
const_assert!(CONNECT <= ROWS && CONNECT <= COLS);
// move strings use a single digit per column
const_assert!(COLS <= 9);
