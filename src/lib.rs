// Domain layer - Core business logic
pub mod domain;

// Application layer - Use cases and coordination
pub mod application;

pub mod config;
pub mod error;
pub mod persistence;

// Infrastructure layer - UI, rendering, input
pub mod ui;
pub mod rendering;
pub mod input;

// Re-exports for convenience
pub use domain::{Cell, Grid, RuleSet, Topology, engine};
pub use application::{Action, SimulationState};
pub use config::Settings;
pub use error::{LifeError, Result};
