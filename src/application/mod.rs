mod action;
mod simulation;

pub use action::Action;
pub use simulation::SimulationState;
