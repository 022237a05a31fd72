//! A depth-limited minimax agent for Connect 4

use crate::{
    error::EngineError,
    evaluation::score_position,
    grid::{Grid, Player},
    terminal::{is_terminal, winning_move},
};

pub type Score = i64;

/// The score of a position won by `PlayerTwo`, larger than any heuristic score
pub const LARGE_WIN: Score = 100_000_000_000_000;

/// The initial lower bound of a search
pub const NEG_INFINITY: Score = Score::MIN;
/// The initial upper bound of a search
pub const INFINITY: Score = Score::MAX;

/// A minimax searcher with optional alpha-beta pruning
///
/// # Notes
/// Scores are always from the point of view of `PlayerTwo`, who maximizes.
/// `PlayerOne` minimizes the same score. Columns are explored left to right
/// and a later column only replaces the best one found so far when it is
/// strictly better, so the leftmost of equally good columns is chosen.
///
/// Every child position is a fresh copy of its parent, so sibling branches
/// never observe each other's moves.
#[derive(Clone, Debug)]
pub struct Searcher {
    /// The number of nodes visited by this `Searcher` so far (for diagnostics only)
    pub node_count: usize,
    pruning: bool,
}

impl Searcher {
    /// Creates a new `Searcher` using alpha-beta pruning
    pub fn new() -> Self {
        Self {
            node_count: 0,
            pruning: true,
        }
    }

    /// Creates a new `Searcher` which visits the full game tree
    pub fn without_pruning() -> Self {
        Self {
            node_count: 0,
            pruning: false,
        }
    }

    /// Performs game tree search to `depth` moves
    ///
    /// Returns the chosen column, `None` at leaves, and the backed-up score
    pub fn minimax(
        &mut self,
        grid: &Grid,
        depth: u32,
        mut alpha: Score,
        mut beta: Score,
        maximizing: bool,
    ) -> (Option<usize>, Score) {
        self.node_count += 1;

        if depth == 0 || is_terminal(grid) {
            return (None, leaf_score(grid));
        }

        let valid_locations = grid.valid_locations();
        // only kept if no child improves on the initial bound
        let mut best_column = valid_locations.first().copied();

        if maximizing {
            let mut value = NEG_INFINITY;
            for column in valid_locations {
                if let Some(child) = grid.child(column, Player::PlayerTwo) {
                    let (_, score) = self.minimax(&child, depth - 1, alpha, beta, false);
                    if score > value {
                        value = score;
                        best_column = Some(column);
                    }
                    alpha = alpha.max(value);
                    if self.pruning && alpha >= beta {
                        break;
                    }
                }
            }
            (best_column, value)
        } else {
            let mut value = INFINITY;
            for column in valid_locations {
                if let Some(child) = grid.child(column, Player::PlayerOne) {
                    let (_, score) = self.minimax(&child, depth - 1, alpha, beta, true);
                    if score < value {
                        value = score;
                        best_column = Some(column);
                    }
                    beta = beta.min(value);
                    if self.pruning && alpha >= beta {
                        break;
                    }
                }
            }
            (best_column, value)
        }
    }

    /// Chooses a column for `player` with a full-window search
    ///
    /// A depth of 0 is treated as 1, since a move needs at least one ply of
    /// lookahead.
    pub fn best_move(
        &mut self,
        grid: &Grid,
        depth: u32,
        player: Player,
    ) -> Result<(usize, Score), EngineError> {
        if grid.valid_locations().is_empty() {
            return Err(EngineError::NoValidMoves);
        }
        if winning_move(grid, Player::PlayerOne) || winning_move(grid, Player::PlayerTwo) {
            return Err(EngineError::GameOver);
        }

        let maximizing = player == Player::PlayerTwo;
        let (column, score) =
            self.minimax(grid, depth.max(1), NEG_INFINITY, INFINITY, maximizing);
        let column = column.ok_or(EngineError::NoValidMoves)?;
        Ok((column, score))
    }
}

impl Default for Searcher {
    fn default() -> Self {
        Self::new()
    }
}

/// Score of a position where the search stops
fn leaf_score(grid: &Grid) -> Score {
    if winning_move(grid, Player::PlayerTwo) {
        LARGE_WIN
    } else if winning_move(grid, Player::PlayerOne) {
        -LARGE_WIN
    } else if grid.valid_locations().is_empty() {
        0
    } else {
        score_position(grid, Player::PlayerTwo)
    }
}

/// Minimax search with alpha-beta pruning
pub fn minimax(
    grid: &Grid,
    depth: u32,
    alpha: Score,
    beta: Score,
    maximizing: bool,
) -> (Option<usize>, Score) {
    Searcher::new().minimax(grid, depth, alpha, beta, maximizing)
}

/// Minimax search over the full game tree, without pruning
pub fn minimax_plain(grid: &Grid, depth: u32, maximizing: bool) -> (Option<usize>, Score) {
    Searcher::without_pruning().minimax(grid, depth, NEG_INFINITY, INFINITY, maximizing)
}

/// Chooses the column for the automated player, `PlayerTwo`
pub fn best_move(grid: &Grid, depth: u32) -> Result<(usize, Score), EngineError> {
    Searcher::new().best_move(grid, depth, Player::PlayerTwo)
}
