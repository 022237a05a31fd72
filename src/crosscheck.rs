//! Agreement checks between pruned and full minimax searches

use rand::{seq::SliceRandom, Rng};

use crate::{
    grid::{Grid, Player},
    search::{Score, Searcher, INFINITY, NEG_INFINITY},
    terminal::is_terminal,
};

/// Plays up to `plies` random moves from the empty board, alternating from
/// `PlayerOne`
///
/// Moves that would end the game are never chosen, so the result is always a
/// reachable position that is still in play. Fewer moves are played if every
/// remaining move would end the game.
pub fn random_position<R: Rng + ?Sized>(rng: &mut R, plies: usize) -> Grid {
    let mut grid = Grid::new();
    let mut player = Player::PlayerOne;

    for _ in 0..plies {
        let children: Vec<Grid> = grid
            .valid_locations()
            .into_iter()
            .filter_map(|column| grid.child(column, player))
            .filter(|child| !is_terminal(child))
            .collect();
        match children.choose(rng) {
            Some(child) => grid = child.clone(),
            None => break,
        }
        player = player.opponent();
    }
    grid
}

/// The outcome of searching one position with and without pruning
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CrossCheck {
    pub depth: u32,
    pub pruned: (Option<usize>, Score),
    pub plain: (Option<usize>, Score),
    pub pruned_nodes: usize,
    pub plain_nodes: usize,
}

impl CrossCheck {
    /// Whether pruning left the chosen column and its score unchanged
    pub fn agrees(&self) -> bool {
        self.pruned == self.plain
    }
}

/// Searches `grid` to `depth` with and without alpha-beta pruning
pub fn cross_check(grid: &Grid, depth: u32, maximizing: bool) -> CrossCheck {
    let mut pruned_searcher = Searcher::new();
    let pruned = pruned_searcher.minimax(grid, depth, NEG_INFINITY, INFINITY, maximizing);

    let mut plain_searcher = Searcher::without_pruning();
    let plain = plain_searcher.minimax(grid, depth, NEG_INFINITY, INFINITY, maximizing);

    CrossCheck {
        depth,
        pruned,
        plain,
        pruned_nodes: pruned_searcher.node_count,
        plain_nodes: plain_searcher.node_count,
    }
}
