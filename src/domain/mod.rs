mod cell;
mod grid;
mod rules;
pub mod engine;

pub use cell::Cell;
pub use grid::Grid;
pub use rules::{NeighborSet, RuleSet, Topology, PRESETS, DEFAULT_FIELD_SIZE, MAX_FIELD_SIZE, MAX_NEIGHBORS};
