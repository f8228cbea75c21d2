//! Grid save/load.
//!
//! A saved grid is a bare JSON nested array, `grid[row][col]`, with no
//! header and no rule parameters. Booleans are written; booleans or 0/1
//! integers are accepted on load.

use std::fs;
use std::path::Path;

use log::debug;
use serde::Deserialize;

use crate::domain::{Cell, Grid};
use crate::error::{LifeError, Result};

/// One stored entry, before normalisation to [`Cell`]
#[derive(Deserialize)]
#[serde(untagged)]
enum StoredCell {
    Flag(bool),
    Bit(u64),
}

impl StoredCell {
    fn into_cell(self, row: usize, col: usize) -> Result<Cell> {
        match self {
            StoredCell::Flag(alive) => Ok(Cell::from(alive)),
            StoredCell::Bit(0) => Ok(Cell::Dead),
            StoredCell::Bit(1) => Ok(Cell::Alive),
            StoredCell::Bit(other) => Err(LifeError::Deserialization(format!(
                "cell at row {row}, column {col} is {other}, expected a boolean or 0/1"
            ))),
        }
    }
}

/// Serialize a grid to its nested-array text form
pub fn encode(grid: &Grid) -> Result<String> {
    serde_json::to_string(&grid.to_rows())
        .map_err(|err| LifeError::Serialization(err.to_string()))
}

/// Parse a nested-array payload into a square grid
pub fn decode(payload: &str) -> Result<Grid> {
    let stored: Vec<Vec<StoredCell>> = serde_json::from_str(payload)?;
    let rows = stored
        .into_iter()
        .enumerate()
        .map(|(row, entries)| {
            entries
                .into_iter()
                .enumerate()
                .map(|(col, entry)| entry.into_cell(row, col))
                .collect::<Result<Vec<_>>>()
        })
        .collect::<Result<Vec<_>>>()?;
    Grid::from_rows(rows)
}

/// Write a grid to `path`; a missing parent directory surfaces as `Io`
pub fn save_to<P: AsRef<Path>>(path: P, grid: &Grid) -> Result<()> {
    let payload = encode(grid)?;
    fs::write(path.as_ref(), payload)?;
    debug!("Saved {0}x{0} grid to {1}", grid.size(), path.as_ref().display());
    Ok(())
}

/// Read a grid from `path`
pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Grid> {
    let payload = fs::read_to_string(path.as_ref())?;
    let grid = decode(&payload)?;
    debug!("Loaded {0}x{0} grid from {1}", grid.size(), path.as_ref().display());
    Ok(grid)
}
