use rand::Rng;

use super::{Cell, Topology, MAX_FIELD_SIZE};
use crate::error::{LifeError, Result};

/// Square matrix of cells, row-major.
/// Replaced wholesale on every generation; edited in place only by toggling.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Grid {
    size: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Create a new grid with all cells initially dead.
    ///
    /// # Panics
    ///
    /// If `size` is outside `1..=MAX_FIELD_SIZE`. `RuleSet` sizes always satisfy this.
    pub fn new(size: usize) -> Self {
        assert!(
            (1..=MAX_FIELD_SIZE).contains(&size),
            "grid size {size} is outside 1..={MAX_FIELD_SIZE}"
        );
        Self {
            size,
            cells: vec![Cell::Dead; size * size],
        }
    }

    /// Build a grid from rows, requiring a non-empty square matrix
    pub fn from_rows(rows: Vec<Vec<Cell>>) -> Result<Self> {
        let size = rows.len();
        if size == 0 {
            return Err(LifeError::Deserialization("grid has no rows".to_string()));
        }
        if let Some((row, cells)) = rows.iter().enumerate().find(|(_, r)| r.len() != size) {
            return Err(LifeError::Deserialization(format!(
                "row {row} has {} cells, expected {size}",
                cells.len()
            )));
        }
        Ok(Self {
            size,
            cells: rows.into_iter().flatten().collect(),
        })
    }

    /// Wrap an already row-major, size*size cell buffer
    pub(crate) fn from_cells(size: usize, cells: Vec<Cell>) -> Self {
        debug_assert_eq!(cells.len(), size * size);
        Self { size, cells }
    }

    /// Row-major copy of the matrix
    pub fn to_rows(&self) -> Vec<Vec<Cell>> {
        self.cells.chunks(self.size.max(1)).map(<[Cell]>::to_vec).collect()
    }

    pub const fn size(&self) -> usize {
        self.size
    }

    /// Convert 2D coordinates to 1D index
    const fn get_index(&self, x: usize, y: usize) -> usize {
        y * self.size + x
    }

    fn check_bounds(&self, x: usize, y: usize) -> Result<usize> {
        if x < self.size && y < self.size {
            Ok(self.get_index(x, y))
        } else {
            Err(LifeError::OutOfBounds { x, y, size: self.size })
        }
    }

    /// Cell at column `x`, row `y`
    pub fn get(&self, x: usize, y: usize) -> Result<Cell> {
        self.check_bounds(x, y).map(|idx| self.cells[idx])
    }

    pub fn set(&mut self, x: usize, y: usize, cell: Cell) -> Result<()> {
        let idx = self.check_bounds(x, y)?;
        self.cells[idx] = cell;
        Ok(())
    }

    /// Flip one cell, returning its new state
    pub fn toggle(&mut self, x: usize, y: usize) -> Result<Cell> {
        let idx = self.check_bounds(x, y)?;
        self.cells[idx] = self.cells[idx].toggle();
        Ok(self.cells[idx])
    }

    /// Wholesale swap with another generation
    pub fn replace(&mut self, next: Grid) {
        *self = next;
    }

    /// Unchecked read for callers that already iterate within bounds
    pub(crate) fn cell(&self, x: usize, y: usize) -> Cell {
        self.cells[self.get_index(x, y)]
    }

    /// Count live cells among the 8 neighbors of (x, y)
    pub fn count_live_neighbors(&self, x: usize, y: usize, topology: Topology) -> u8 {
        let n = self.size as isize;

        (-1..=1)
            .flat_map(|dy| (-1..=1).map(move |dx| (dx, dy)))
            .filter(|&(dx, dy)| dx != 0 || dy != 0)
            .filter_map(|(dx, dy)| {
                let nx = x as isize + dx;
                let ny = y as isize + dy;
                match topology {
                    Topology::Toroidal => Some((nx.rem_euclid(n), ny.rem_euclid(n))),
                    Topology::Bounded => {
                        ((0..n).contains(&nx) && (0..n).contains(&ny)).then_some((nx, ny))
                    }
                }
            })
            .filter(|&(nx, ny)| self.cell(nx as usize, ny as usize).is_alive())
            .count() as u8
    }

    /// Fill the grid, each cell alive with probability `density`
    pub fn randomize<R: Rng>(&mut self, rng: &mut R, density: f64) {
        let density = density.clamp(0.0, 1.0);
        self.cells
            .iter_mut()
            .for_each(|cell| *cell = Cell::from(rng.random_bool(density)));
    }

    pub fn live_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_alive()).count()
    }

    /// Iterate over all cells with their positions
    pub fn iter_cells(&self) -> impl Iterator<Item = (usize, usize, Cell)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(|(idx, &cell)| (idx % self.size, idx / self.size, cell))
    }
}
