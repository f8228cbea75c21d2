use std::fmt;

use serde::{Deserialize, Serialize};

use super::Cell;
use crate::error::{LifeError, Result};

/// Largest neighbor count a cell can observe in a Moore neighborhood.
pub const MAX_NEIGHBORS: u8 = 8;

pub const DEFAULT_FIELD_SIZE: usize = 30;

/// Largest accepted field side; keeps `size * size` cell buffers addressable.
pub const MAX_FIELD_SIZE: usize = 10_000;

/// Set of neighbor counts in `0..=8`, packed as a bitmask.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct NeighborSet(u16);

impl NeighborSet {
    /// Build a set, rejecting counts above 8
    pub fn new(counts: &[u8]) -> Result<Self> {
        counts.iter().try_fold(Self(0), |set, &n| {
            if n > MAX_NEIGHBORS {
                return Err(LifeError::InvalidConfig(format!(
                    "neighbor count {n} is outside 0..=8"
                )));
            }
            Ok(Self(set.0 | 1u16 << n))
        })
    }

    pub const fn contains(self, neighbors: u8) -> bool {
        neighbors <= MAX_NEIGHBORS && self.0 & (1u16 << neighbors) != 0
    }

    /// Counts in ascending order
    pub fn counts(self) -> Vec<u8> {
        (0..=MAX_NEIGHBORS).filter(|&n| self.contains(n)).collect()
    }
}

impl fmt::Display for NeighborSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.counts().iter().try_for_each(|n| write!(f, "{n}"))
    }
}

/// How neighbors are looked up past the grid edge.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Topology {
    /// Opposite edges are connected (torus)
    #[default]
    Toroidal,
    /// Cells past the edge count as dead
    Bounded,
}

/// Birth/survive rule plus the configured field size.
/// Changing a RuleSet never resizes an existing grid.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct RuleSet {
    field_size: usize,
    birth: NeighborSet,
    survive: NeighborSet,
    topology: Topology,
}

impl RuleSet {
    /// Validated constructor
    pub fn new(field_size: usize, birth: &[u8], survive: &[u8]) -> Result<Self> {
        if field_size < 1 {
            return Err(LifeError::InvalidConfig(
                "field size must be a positive integer".to_string(),
            ));
        }
        if field_size > MAX_FIELD_SIZE {
            return Err(LifeError::InvalidConfig(format!(
                "field size {field_size} exceeds the maximum of {MAX_FIELD_SIZE}"
            )));
        }
        Ok(Self {
            field_size,
            birth: NeighborSet::new(birth)?,
            survive: NeighborSet::new(survive)?,
            topology: Topology::default(),
        })
    }

    /// Replace size, birth and survive together. On failure nothing changes.
    pub fn configure(&mut self, field_size: usize, birth: &[u8], survive: &[u8]) -> Result<()> {
        let topology = self.topology;
        *self = Self::new(field_size, birth, survive)?.with_topology(topology);
        Ok(())
    }

    /// Restore standard Life on a 30x30 field
    pub fn defaults(&mut self) {
        *self = Self::default();
    }

    pub fn with_topology(mut self, topology: Topology) -> Self {
        self.topology = topology;
        self
    }

    pub fn set_topology(&mut self, topology: Topology) {
        self.topology = topology;
    }

    pub const fn field_size(&self) -> usize {
        self.field_size
    }

    pub const fn birth(&self) -> NeighborSet {
        self.birth
    }

    pub const fn survive(&self) -> NeighborSet {
        self.survive
    }

    pub const fn topology(&self) -> Topology {
        self.topology
    }

    /// Next state of one cell. Survival is checked before birth.
    pub const fn evolve(&self, current: Cell, neighbors: u8) -> Cell {
        match current {
            Cell::Alive if self.survive.contains(neighbors) => Cell::Alive,
            Cell::Dead if self.birth.contains(neighbors) => Cell::Alive,
            _ => Cell::Dead,
        }
    }
}

impl Default for RuleSet {
    fn default() -> Self {
        Self {
            field_size: DEFAULT_FIELD_SIZE,
            birth: NeighborSet(1 << 3),
            survive: NeighborSet(1 << 2 | 1 << 3),
            topology: Topology::Toroidal,
        }
    }
}

impl fmt::Display for RuleSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "B{}/S{}", self.birth, self.survive)
    }
}

/// Named (birth, survive) presets selectable from the frontend
pub const PRESETS: &[(&str, &[u8], &[u8])] = &[
    ("Conway", &[3], &[2, 3]),
    ("HighLife", &[3, 6], &[2, 3]),
    ("Seeds", &[2], &[]),
    ("Day&Night", &[3, 6, 7, 8], &[3, 4, 6, 7, 8]),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_conway_rules() {
        let rules = RuleSet::default();

        // Underpopulation
        assert_eq!(rules.evolve(Cell::Alive, 0), Cell::Dead);
        assert_eq!(rules.evolve(Cell::Alive, 1), Cell::Dead);

        // Survival
        assert_eq!(rules.evolve(Cell::Alive, 2), Cell::Alive);
        assert_eq!(rules.evolve(Cell::Alive, 3), Cell::Alive);

        // Overpopulation
        assert_eq!(rules.evolve(Cell::Alive, 4), Cell::Dead);

        // Reproduction
        assert_eq!(rules.evolve(Cell::Dead, 3), Cell::Alive);
        assert_eq!(rules.evolve(Cell::Dead, 2), Cell::Dead);
    }

    #[test]
    fn test_defaults() {
        let rules = RuleSet::default();
        assert_eq!(rules.field_size(), 30);
        assert_eq!(rules.birth().counts(), vec![3]);
        assert_eq!(rules.survive().counts(), vec![2, 3]);
        assert_eq!(rules.topology(), Topology::Toroidal);
        assert_eq!(rules.to_string(), "B3/S23");
    }

    #[test]
    fn test_configure_valid() {
        let mut rules = RuleSet::default();
        rules.configure(10, &[3, 4], &[5, 6, 7]).unwrap();
        assert_eq!(rules.field_size(), 10);
        assert_eq!(rules.birth().counts(), vec![3, 4]);
        assert_eq!(rules.survive().counts(), vec![5, 6, 7]);
    }

    #[test]
    fn test_configure_rejects_zero_size() {
        let mut rules = RuleSet::default();
        let err = rules.configure(0, &[3], &[2, 3]).unwrap_err();
        assert!(matches!(err, LifeError::InvalidConfig(_)));
        assert_eq!(rules, RuleSet::default());
    }

    #[test]
    fn test_configure_rejects_oversized_field() {
        let mut rules = RuleSet::default();
        assert!(rules.configure(MAX_FIELD_SIZE, &[3], &[2, 3]).is_ok());
        rules.defaults();
        for size in [MAX_FIELD_SIZE + 1, 1 << 32, usize::MAX] {
            assert!(matches!(
                rules.configure(size, &[3], &[2, 3]),
                Err(LifeError::InvalidConfig(_))
            ));
        }
        assert_eq!(rules, RuleSet::default());
    }

    #[test]
    fn test_configure_rejects_counts_above_eight() {
        let mut rules = RuleSet::default();
        assert!(matches!(
            rules.configure(10, &[9], &[2, 3]),
            Err(LifeError::InvalidConfig(_))
        ));
        // Survive counts are validated too
        assert!(matches!(
            rules.configure(10, &[3], &[2, 12]),
            Err(LifeError::InvalidConfig(_))
        ));
        assert_eq!(rules, RuleSet::default());
    }

    #[test]
    fn test_configure_keeps_topology() {
        let mut rules = RuleSet::default().with_topology(Topology::Bounded);
        rules.configure(5, &[3], &[2, 3]).unwrap();
        assert_eq!(rules.topology(), Topology::Bounded);
    }

    #[test]
    fn test_defaults_restores_conway() {
        let mut rules = RuleSet::new(7, &[1], &[8]).unwrap();
        rules.defaults();
        assert_eq!(rules, RuleSet::default());
    }

    #[test]
    fn test_presets_are_valid() {
        for &(name, birth, survive) in PRESETS {
            assert!(RuleSet::new(10, birth, survive).is_ok(), "{name}");
        }
        let seeds = RuleSet::new(10, &[2], &[]).unwrap();
        assert_eq!(seeds.to_string(), "B2/S");
        assert_eq!(seeds.evolve(Cell::Alive, 2), Cell::Dead);
    }
}
