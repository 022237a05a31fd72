//! Checks alpha-beta pruning against the full minimax tree on random positions
//!
//! Usage: `crosscheck [positions] [seed] [depth]`

use anyhow::{anyhow, bail, Result};
use indicatif::*;
use rand::{rngs::StdRng, Rng, SeedableRng};
use rayon::prelude::*;

use std::time::Instant;

use connect4_minimax::{
    crosscheck::{cross_check, random_position, CrossCheck},
    Grid, ROWS, COLS,
};

const DEFAULT_POSITIONS: usize = 200;
const DEFAULT_SEED: u64 = 0;
const DEFAULT_DEPTH: u32 = 3;

fn argument<T: std::str::FromStr>(index: usize, default: T) -> Result<T> {
    match std::env::args().nth(index) {
        Some(arg) => arg
            .parse::<T>()
            .map_err(|_| anyhow!("could not parse argument {}: '{}'", index, arg)),
        None => Ok(default),
    }
}

fn main() -> Result<()> {
    let num_positions = argument(1, DEFAULT_POSITIONS)?;
    let seed = argument(2, DEFAULT_SEED)?;
    let depth = argument(3, DEFAULT_DEPTH)?;

    let mut rng = StdRng::seed_from_u64(seed);
    let positions: Vec<(Grid, bool)> = (0..num_positions)
        .map(|_| {
            let plies = rng.gen_range(0..ROWS * COLS);
            let grid = random_position(&mut rng, plies);
            // the engine searches for whichever side would be to move
            let maximizing = grid.num_moves() % 2 == 1;
            (grid, maximizing)
        })
        .collect();

    let progress = ProgressBar::new(num_positions as u64);
    progress.set_style(
        ProgressStyle::default_bar()
            .template("Cross-checking positions: {bar:40.cyan/blue} {pos}/{len} ~{eta} remaining")
            .progress_chars("█▓▒░  "),
    );

    let start = Instant::now();
    let checks: Vec<CrossCheck> = positions
        .par_iter()
        .map(|(grid, maximizing)| {
            let check = cross_check(grid, depth, *maximizing);
            progress.inc(1);
            check
        })
        .collect();
    progress.finish();

    let disagreements: Vec<(usize, &CrossCheck)> = checks
        .iter()
        .enumerate()
        .filter(|(_, check)| !check.agrees())
        .collect();
    for (index, check) in disagreements.iter() {
        println!(
            "Position {}: pruned {:?} != plain {:?}",
            index, check.pruned, check.plain
        );
    }

    let pruned_nodes: usize = checks.iter().map(|check| check.pruned_nodes).sum();
    let plain_nodes: usize = checks.iter().map(|check| check.plain_nodes).sum();
    println!(
        "Checked {} positions at depth {} in {}",
        checks.len(),
        depth,
        HumanDuration(Instant::now() - start)
    );
    println!(
        "Nodes visited: {} pruned, {} plain ({:.1}%)",
        pruned_nodes,
        plain_nodes,
        100.0 * pruned_nodes as f64 / plain_nodes.max(1) as f64
    );

    if !disagreements.is_empty() {
        bail!(
            "{} of {} positions disagree",
            disagreements.len(),
            checks.len()
        );
    }
    println!("All positions agree");
    Ok(())
}
