// simulation.rs - Single owner of the evolving grid

use std::sync::Arc;

use rand::Rng;

use crate::config::Config;
use crate::error::GridError;
use crate::grid::Grid;
use crate::patterns::Pattern;

const HISTORY_LEN: usize = 10;

/// Immutable view of one generation, cheap to clone and hand to a reader.
#[derive(Clone, Debug)]
pub struct Snapshot {
    pub grid: Arc<Grid>,
    pub generation: u64,
    pub population: usize,
    /// Whether the tick loop is advancing on its own.
    pub running: bool,
}

impl Snapshot {
    pub fn new(grid: Arc<Grid>, generation: u64, running: bool) -> Self {
        let population = grid.population();
        Self { grid, generation, population, running }
    }
}

/// Ring of recent grid fingerprints.
#[derive(Debug, Default)]
struct History {
    hashes: [u64; HISTORY_LEN],
    count: usize,
}

impl History {
    /// Records `hash`, returning true if it was already among the recent ones.
    fn check(&mut self, hash: u64) -> bool {
        let filled = self.count.min(HISTORY_LEN);
        if self.hashes[..filled].contains(&hash) {
            return true;
        }
        self.hashes[self.count % HISTORY_LEN] = hash;
        self.count += 1;
        false
    }

    fn reset(&mut self) {
        *self = Self::default();
    }
}

/// The simulation state and every operation allowed to change it.
///
/// Generations only advance through [`Simulation::step`]; cells only change
/// individually through [`Simulation::paint_cell`]. The other mutators
/// swap in a whole new grid and restart the generation count.
pub struct Simulation {
    grid: Arc<Grid>,
    generation: u64,
    running: bool,
    cycle_detected: bool,
    history: History,
    config: Config,
}

impl Simulation {
    /// Starts from a random grid seeded with `config.population`.
    pub fn new<R: Rng + ?Sized>(config: Config, rng: &mut R) -> Result<Self, GridError> {
        let grid = Grid::random(config.grid_size, config.population, rng)?;
        Ok(Self::with_grid(config, grid))
    }

    pub fn with_grid(config: Config, grid: Grid) -> Self {
        let mut sim = Self {
            grid: Arc::new(grid),
            generation: 0,
            running: true,
            cycle_detected: false,
            history: History::default(),
            config,
        };
        sim.history.check(sim.grid.fingerprint());
        sim
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn set_running(&mut self, running: bool) {
        self.running = running;
    }

    /// Whether the current grid repeats one of the last few generations.
    pub fn cycle_detected(&self) -> bool {
        self.cycle_detected
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot::new(Arc::clone(&self.grid), self.generation, self.running)
    }

    /// Advances one generation. Returns true when the new grid repeats a
    /// recent one.
    pub fn step(&mut self) -> bool {
        self.grid = Arc::new(self.grid.step());
        self.generation += 1;

        let repeated = self.history.check(self.grid.fingerprint());
        if repeated && !self.cycle_detected {
            log::info!("generation {} repeats an earlier state", self.generation);
            if self.config.pause_on_cycle {
                self.running = false;
            }
        }
        self.cycle_detected = repeated;
        repeated
    }

    /// Sets one cell. Rejects positions outside the grid.
    pub fn paint_cell(&mut self, x: usize, y: usize, alive: bool) -> Result<(), GridError> {
        if self.grid.contains(x, y) && self.grid.is_alive(x, y) == alive {
            return Ok(());
        }
        Arc::make_mut(&mut self.grid).set(x, y, alive)?;
        self.cycle_detected = false;
        self.history.reset();
        self.history.check(self.grid.fingerprint());
        Ok(())
    }

    /// Replaces the grid with a fresh random one.
    pub fn restart<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<(), GridError> {
        let grid = Grid::random(self.config.grid_size, self.config.population, rng)?;
        log::info!("restarting with {} live cells", grid.population());
        self.replace(grid);
        Ok(())
    }

    /// Replaces the grid with `pattern` placed at the configured offset.
    pub fn load_pattern(&mut self, pattern: &Pattern) -> Result<(), GridError> {
        let grid = Grid::with_pattern(self.config.grid_size, pattern, self.config.pattern_offset)?;
        log::info!("loaded pattern {:?} at offset {}", pattern.name, self.config.pattern_offset);
        self.replace(grid);
        Ok(())
    }

    /// Replaces the grid with an empty one.
    pub fn clear(&mut self) -> Result<(), GridError> {
        let grid = Grid::new(self.config.grid_size)?;
        self.replace(grid);
        Ok(())
    }

    fn replace(&mut self, grid: Grid) {
        self.grid = Arc::new(grid);
        self.generation = 0;
        self.cycle_detected = false;
        self.history.reset();
        self.history.check(self.grid.fingerprint());
    }
}
