use std::path::{Path, PathBuf};
use std::time::Instant;

use log::{debug, info, warn};

use super::Action;
use crate::config::{Settings, DEFAULT_PERIOD, MAX_PERIOD, MIN_PERIOD, PERIOD_STEP};
use crate::domain::{engine, Cell, Grid, RuleSet, Topology, PRESETS};
use crate::error::{LifeError, Result};
use crate::persistence;

/// SimulationState orchestrates the simulation.
/// This is the application layer that coordinates domain logic;
/// the frontend only talks to it through commands and read-only queries.
pub struct SimulationState {
    grid: Grid,
    rules: RuleSet,
    running: bool,
    /// Seconds between automatic steps
    period: f32,
    /// Seconds accumulated since the last automatic step
    elapsed: f32,
    /// Set by the first tick, which only starts the clock
    clock_started: bool,
    generation: u64,
    state_path: PathBuf,
    randomize_density: f64,
    last_step_ms: f32,
}

impl SimulationState {
    /// Standard Life on an empty 30x30 field, paused
    pub fn new() -> Self {
        let settings = Settings::default();
        let rules = RuleSet::default();
        Self {
            grid: Grid::new(rules.field_size()),
            rules,
            running: false,
            period: DEFAULT_PERIOD,
            elapsed: 0.0,
            clock_started: false,
            generation: 0,
            state_path: settings.state_path,
            randomize_density: settings.randomize_density,
            last_step_ms: 0.0,
        }
    }

    /// Build a session from user settings, validating the rule parameters
    pub fn from_settings(settings: &Settings) -> Result<Self> {
        let mut state = Self::new();
        state.configure_rules(settings.field_size, &settings.birth, &settings.survive)?;
        state.rules.set_topology(settings.topology);
        state.grid = Grid::new(state.rules.field_size());
        state.period = settings.period.clamp(MIN_PERIOD, MAX_PERIOD);
        state.state_path = settings.state_path.clone();
        state.randomize_density = settings.randomize_density;
        Ok(state)
    }

    /// Replace field size, birth and survive rules together.
    ///
    /// The current grid keeps its size; [`reset`](Self::reset) creates a grid
    /// of the new size. Nothing changes on failure.
    pub fn configure_rules(&mut self, field_size: i64, birth: &[i64], survive: &[i64]) -> Result<()> {
        let field_size = usize::try_from(field_size).map_err(|_| {
            LifeError::InvalidConfig(format!("field size {field_size} must be a positive integer"))
        })?;
        let birth = neighbor_counts("birth", birth)?;
        let survive = neighbor_counts("survive", survive)?;

        self.rules.configure(field_size, &birth, &survive)?;
        info!("Rules set to {} on a {1}x{1} field", self.rules, field_size);
        Ok(())
    }

    /// Switch to a named preset, keeping the configured field size
    pub fn apply_preset(&mut self, index: usize) -> Result<()> {
        let &(name, birth, survive) = PRESETS.get(index).ok_or_else(|| {
            LifeError::InvalidConfig(format!("no rule preset at index {index}"))
        })?;
        self.rules.configure(self.rules.field_size(), birth, survive)?;
        info!("Rule preset {name} ({})", self.rules);
        Ok(())
    }

    pub fn set_topology(&mut self, topology: Topology) {
        self.rules.set_topology(topology);
    }

    /// Toggle play/pause state
    pub fn toggle_run(&mut self) {
        self.running = !self.running;
        debug!("Simulation {}", if self.running { "running" } else { "paused" });
    }

    /// Advance one generation, whatever the run state
    pub fn step(&mut self) {
        let start = Instant::now();
        let next = engine::evolve(&self.grid, &self.rules);
        self.grid.replace(next);
        self.generation += 1;
        self.last_step_ms = start.elapsed().as_secs_f32() * 1000.0;
    }

    /// Advance the clock by one frame of `delta_time` seconds.
    ///
    /// The first call only starts the clock. While running, a step happens once
    /// at least `period` seconds have accumulated. Returns whether it stepped.
    pub fn tick(&mut self, delta_time: f32) -> bool {
        if !self.clock_started {
            self.clock_started = true;
            return false;
        }

        self.elapsed = (self.elapsed + delta_time.max(0.0)).min(MAX_PERIOD);
        if !self.running || self.elapsed < self.period {
            return false;
        }

        self.step();
        self.elapsed = 0.0;
        true
    }

    /// Change the step period, clamped to [0.05, 1.0] seconds
    pub fn adjust_period(&mut self, delta: f32) {
        self.period = (self.period + delta).clamp(MIN_PERIOD, MAX_PERIOD);
    }

    /// Empty grid of the configured size, paused, default period
    pub fn reset(&mut self) {
        self.grid.replace(Grid::new(self.rules.field_size()));
        self.running = false;
        self.period = DEFAULT_PERIOD;
        self.elapsed = 0.0;
        self.generation = 0;
        info!("Reset to an empty {0}x{0} field", self.rules.field_size());
    }

    /// Fill the grid at random and pause
    pub fn randomize(&mut self) {
        self.grid.randomize(&mut rand::rng(), self.randomize_density);
        self.running = false;
        self.generation = 0;
    }

    /// Flip one cell; allowed while running
    pub fn edit_cell(&mut self, x: usize, y: usize) -> Result<Cell> {
        self.grid.toggle(x, y)
    }

    /// Replace the grid with a decoded payload; the grid is untouched on failure
    pub fn load_str(&mut self, payload: &str) -> Result<()> {
        let grid = persistence::decode(payload)?;
        self.install(grid);
        Ok(())
    }

    pub fn save_string(&self) -> Result<String> {
        persistence::encode(&self.grid)
    }

    pub fn load_from<P: AsRef<Path>>(&mut self, path: P) -> Result<()> {
        let grid = persistence::load_from(path)?;
        self.install(grid);
        Ok(())
    }

    pub fn save_to<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        persistence::save_to(path, &self.grid)
    }

    fn install(&mut self, grid: Grid) {
        if grid.size() != self.rules.field_size() {
            warn!(
                "Loaded {0}x{0} grid differs from the configured {1}x{1} field",
                grid.size(),
                self.rules.field_size()
            );
        }
        self.grid.replace(grid);
        self.generation = 0;
    }

    /// Run a control-panel command
    pub fn apply(&mut self, action: Action) -> Result<()> {
        match action {
            Action::ToggleRun => self.toggle_run(),
            Action::Step => self.step(),
            Action::Slower => self.adjust_period(PERIOD_STEP),
            Action::Faster => self.adjust_period(-PERIOD_STEP),
            Action::Load => {
                let path = self.state_path.clone();
                self.load_from(&path)?;
                info!("Loaded grid from {}", path.display());
            }
            Action::Save => {
                self.save_to(&self.state_path)?;
                info!("Saved grid to {}", self.state_path.display());
            }
            Action::Reset => self.reset(),
            Action::Randomize => self.randomize(),
        }
        Ok(())
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }

    pub fn cell(&self, x: usize, y: usize) -> Result<bool> {
        self.grid.get(x, y).map(Cell::is_alive)
    }

    /// Configured field size
    pub fn field_size(&self) -> usize {
        self.rules.field_size()
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn period(&self) -> f32 {
        self.period
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn state_path(&self) -> &Path {
        &self.state_path
    }

    /// Duration of the last evolution step in milliseconds
    pub fn last_step_ms(&self) -> f32 {
        self.last_step_ms
    }
}

impl Default for SimulationState {
    fn default() -> Self {
        Self::new()
    }
}

fn neighbor_counts(name: &str, counts: &[i64]) -> Result<Vec<u8>> {
    counts
        .iter()
        .map(|&n| {
            u8::try_from(n).map_err(|_| {
                LifeError::InvalidConfig(format!("{name} count {n} is outside 0..=8"))
            })
        })
        .collect()
}
