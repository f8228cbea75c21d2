//! Generation update.
//!
//! Every function here reads the current generation as an immutable snapshot
//! and builds the next one in a fresh grid, so no cell ever observes an
//! already-updated neighbor.

use rayon::prelude::*;
use serde_json::Value;

use super::{Cell, Grid, RuleSet};
use crate::error::{LifeError, Result};

/// Grids at least this wide are evolved with rayon.
pub const PARALLEL_THRESHOLD: usize = 128;

fn next_row<'a>(grid: &'a Grid, rules: &'a RuleSet, y: usize) -> impl Iterator<Item = Cell> + 'a {
    let topology = rules.topology();
    (0..grid.size()).map(move |x| {
        let neighbors = grid.count_live_neighbors(x, y, topology);
        rules.evolve(grid.cell(x, y), neighbors)
    })
}

/// Pure functional evolution - returns the next generation (serial)
pub fn step(grid: &Grid, rules: &RuleSet) -> Grid {
    let cells = (0..grid.size())
        .flat_map(|y| next_row(grid, rules, y))
        .collect();
    Grid::from_cells(grid.size(), cells)
}

/// Row-parallel evolution using rayon; same result as [`step`]
pub fn step_parallel(grid: &Grid, rules: &RuleSet) -> Grid {
    let rows: Vec<Vec<Cell>> = (0..grid.size())
        .into_par_iter()
        .map(|y| next_row(grid, rules, y).collect())
        .collect();
    Grid::from_cells(grid.size(), rows.into_iter().flatten().collect())
}

/// Pick serial or parallel evolution by grid size
pub fn evolve(grid: &Grid, rules: &RuleSet) -> Grid {
    if grid.size() >= PARALLEL_THRESHOLD {
        step_parallel(grid, rules)
    } else {
        step(grid, rules)
    }
}

/// Evolve an untyped matrix, e.g. one decoded without validation.
///
/// Every entry must be a JSON boolean; the first one that isn't is reported
/// as [`LifeError::MalformedCell`] and no generation is produced.
pub fn step_raw(rows: &[Vec<Value>], rules: &RuleSet) -> Result<Grid> {
    let cells = rows
        .iter()
        .enumerate()
        .map(|(row, values)| {
            values
                .iter()
                .enumerate()
                .map(|(col, value)| {
                    value
                        .as_bool()
                        .map(Cell::from)
                        .ok_or(LifeError::MalformedCell { row, col })
                })
                .collect::<Result<Vec<_>>>()
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(evolve(&Grid::from_rows(cells)?, rules))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Topology;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use serde_json::json;

    /// Build a grid from (row, col) live cells
    fn grid_with(size: usize, live: &[(usize, usize)]) -> Grid {
        let mut grid = Grid::new(size);
        for &(row, col) in live {
            grid.set(col, row, Cell::Alive).unwrap();
        }
        grid
    }

    #[test]
    fn test_five_by_five_scenario() {
        let rules = RuleSet::new(5, &[3], &[2, 3]).unwrap();
        let grid = grid_with(5, &[(1, 2), (2, 3), (3, 1), (3, 2), (3, 3)]);
        let expected = grid_with(5, &[(2, 1), (2, 3), (3, 2), (3, 3), (4, 2)]);
        assert_eq!(step(&grid, &rules), expected);
    }

    #[test]
    fn test_all_dead_stays_dead() {
        let rules = RuleSet::default();
        let mut grid = Grid::new(8);
        for _ in 0..10 {
            grid = step(&grid, &rules);
        }
        assert_eq!(grid, Grid::new(8));
    }

    #[test]
    fn test_block_is_still_life() {
        let rules = RuleSet::default();
        for size in [4, 6] {
            let block = grid_with(size, &[(1, 1), (1, 2), (2, 1), (2, 2)]);
            // Each block cell has exactly 3 live neighbors
            assert_eq!(block.count_live_neighbors(1, 1, Topology::Toroidal), 3);
            // Dead cells bordering the block never reach 3
            for (x, y, cell) in block.iter_cells() {
                if !cell.is_alive() {
                    assert!(block.count_live_neighbors(x, y, Topology::Toroidal) <= 2);
                }
            }
            assert_eq!(step(&block, &rules), block);
        }
    }

    #[test]
    fn test_block_across_the_seam() {
        // Block split over all four corners still lives on a torus
        let rules = RuleSet::default();
        let block = grid_with(6, &[(0, 0), (0, 5), (5, 0), (5, 5)]);
        assert_eq!(step(&block, &rules), block);

        // ...but dies out without wrapping
        let bounded = rules.with_topology(Topology::Bounded);
        assert_eq!(step(&block, &bounded), Grid::new(6));
    }

    #[test]
    fn test_blinker_oscillates() {
        let rules = RuleSet::default();
        let horizontal = grid_with(5, &[(2, 1), (2, 2), (2, 3)]);
        let vertical = grid_with(5, &[(1, 2), (2, 2), (3, 2)]);
        assert_eq!(step(&horizontal, &rules), vertical);
        assert_eq!(step(&vertical, &rules), horizontal);
    }

    #[test]
    fn test_step_is_deterministic_and_size_preserving() {
        let rules = RuleSet::default();
        let mut grid = Grid::new(16);
        grid.randomize(&mut StdRng::seed_from_u64(42), 0.4);
        let first = step(&grid, &rules);
        assert_eq!(first, step(&grid, &rules));
        assert_eq!(first.size(), grid.size());
    }

    #[test]
    fn test_parallel_matches_serial() {
        let rules = RuleSet::new(40, &[3, 6], &[2, 3]).unwrap();
        let mut grid = Grid::new(40);
        grid.randomize(&mut StdRng::seed_from_u64(3), 0.35);
        for _ in 0..5 {
            let serial = step(&grid, &rules);
            assert_eq!(step_parallel(&grid, &rules), serial);
            grid = serial;
        }
    }

    #[test]
    fn test_step_raw_rejects_non_boolean() {
        let rules = RuleSet::default();
        let rows = vec![
            vec![json!("h"), json!("e"), json!("l")],
            vec![json!("l"), json!("o"), json!("!")],
            vec![json!("!"), json!("!"), json!("!")],
        ];
        assert!(matches!(
            step_raw(&rows, &rules),
            Err(LifeError::MalformedCell { row: 0, col: 0 })
        ));

        let ints = vec![vec![json!(false), json!(1)], vec![json!(false), json!(false)]];
        assert!(matches!(
            step_raw(&ints, &rules),
            Err(LifeError::MalformedCell { row: 0, col: 1 })
        ));
    }

    #[test]
    fn test_step_raw_evolves_booleans() {
        let rules = RuleSet::default();
        let rows: Vec<Vec<Value>> = (0..5)
            .map(|row| (0..5).map(|col| json!(row == 2 && (1..=3).contains(&col))).collect())
            .collect();
        let expected = grid_with(5, &[(1, 2), (2, 2), (3, 2)]);
        assert_eq!(step_raw(&rows, &rules).unwrap(), expected);
    }
}
