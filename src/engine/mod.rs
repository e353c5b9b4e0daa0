//! The simulation engine.
//!
//! `Engine` owns the current grid and advances it one generation per
//! [`step`](Engine::step) call. Next states are computed into a scratch grid
//! from the current one and the two are swapped at the end, so every cell's
//! next state depends only on the pre-step generation and a step never
//! allocates.
//!
//! ## Usage
//!
//! ```
//! use rust_life::{EngineConfig, Engine};
//!
//! let mut engine = Engine::with_config(&EngineConfig::new(10, 10).with_seed(7)).unwrap();
//!
//! engine.step();
//!
//! assert_eq!(engine.generation(), 1);
//! assert_eq!(engine.grid().dimensions(), (10, 10));
//! ```

use crate::core::{EngineConfig, EngineError, Grid, SimRng};
use crate::rules::Rule;

/// A Life simulation: a grid plus the rule that advances it.
#[derive(Clone, Debug)]
pub struct Engine {
    grid: Grid,
    scratch: Grid,
    rule: Rule,
    generation: u64,
}

impl Engine {
    /// Create an engine with a `rows x cols` grid, each cell independently
    /// alive with probability 0.5, under Conway's rule.
    ///
    /// The RNG seed is drawn from OS entropy; use [`with_config`] with a
    /// fixed seed for a reproducible grid.
    ///
    /// [`with_config`]: Engine::with_config
    pub fn new(rows: usize, cols: usize) -> Result<Self, EngineError> {
        Self::with_config(&EngineConfig::new(rows, cols))
    }

    /// Create an engine from a full configuration.
    pub fn with_config(config: &EngineConfig) -> Result<Self, EngineError> {
        config.validate()?;

        let mut rng = match config.seed {
            Some(seed) => SimRng::new(seed),
            None => SimRng::from_entropy(),
        };
        let grid = Grid::random(config.rows, config.cols, config.density, &mut rng)?;

        log::debug!(
            "engine created: {}x{} grid, rule {}, density {}, seed {}",
            config.rows,
            config.cols,
            config.rule,
            config.density,
            rng.seed()
        );

        Ok(Self::from_parts(grid, config.rule))
    }

    /// Create an engine that starts from an explicit grid, under Conway's
    /// rule. Useful for seeding known patterns.
    #[must_use]
    pub fn from_grid(grid: Grid) -> Self {
        Self::from_parts(grid, Rule::default())
    }

    /// Swap in a different update rule.
    #[must_use]
    pub fn with_rule(mut self, rule: Rule) -> Self {
        self.rule = rule;
        self
    }

    fn from_parts(grid: Grid, rule: Rule) -> Self {
        let scratch = grid.clone();
        Self {
            grid,
            scratch,
            rule,
            generation: 0,
        }
    }

    /// The current grid.
    ///
    /// The borrow pins the engine: the grid cannot change out from under a
    /// reader, and callers wanting state that survives a [`step`](Engine::step)
    /// take a clone.
    #[must_use]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// The active update rule.
    #[must_use]
    pub fn rule(&self) -> Rule {
        self.rule
    }

    /// How many steps have been applied since construction.
    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Count of alive cells in the current grid.
    #[must_use]
    pub fn population(&self) -> usize {
        self.grid.population()
    }

    /// Grid shape as `(rows, cols)`. Fixed for the engine's lifetime.
    #[must_use]
    pub fn dimensions(&self) -> (usize, usize) {
        self.grid.dimensions()
    }

    /// Advance the simulation by exactly one generation.
    ///
    /// Every cell's next state is computed from the pre-step grid, then the
    /// finished generation replaces the current one in a single swap.
    pub fn step(&mut self) {
        let (rows, cols) = self.grid.dimensions();
        for row in 0..rows {
            for col in 0..cols {
                let next = self
                    .rule
                    .next_state(self.grid[(row, col)], self.grid.live_neighbors(row, col));
                self.scratch.set(row, col, next);
            }
        }
        std::mem::swap(&mut self.grid, &mut self.scratch);
        self.generation += 1;

        log::trace!(
            "stepped to generation {}: population {}",
            self.generation,
            self.grid.population()
        );
    }
}
