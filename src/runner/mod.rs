//! A driving loop for the engine.
//!
//! The engine itself never loops; a caller steps it. `Runner` packages the
//! common caller: step up to a bound, hand each new generation to an
//! observer, and optionally stop early when the grid revisits a previous
//! state (a still life or an oscillator means nothing new will ever happen).
//!
//! Repeats are detected by grid fingerprint, so a hash collision can end a
//! run one step early. With 64-bit fingerprints and runs of bounded length
//! this is vanishingly unlikely and accepted.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::engine::Engine;

/// Configuration for a bounded run.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RunnerConfig {
    /// Maximum number of steps to apply.
    pub max_steps: u64,
    /// Stop as soon as the grid matches a previously seen generation.
    pub stop_on_cycle: bool,
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self {
            max_steps: 100,
            stop_on_cycle: true,
        }
    }
}

impl RunnerConfig {
    /// Create a configuration that runs for at most `max_steps` steps.
    #[must_use]
    pub fn new(max_steps: u64) -> Self {
        Self {
            max_steps,
            ..Self::default()
        }
    }

    /// Enable or disable early stop on a repeated grid state.
    #[must_use]
    pub fn with_stop_on_cycle(mut self, stop_on_cycle: bool) -> Self {
        self.stop_on_cycle = stop_on_cycle;
        self
    }
}

/// Why a run ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum StopReason {
    /// The step bound was reached.
    MaxSteps,
    /// The grid repeated a state first seen at `first_seen`, closing a loop
    /// of length `period`. A period of 1 is a still life.
    Cycle { first_seen: u64, period: u64 },
}

/// Summary of a completed run.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RunReport {
    /// Steps actually applied, which is at most `max_steps`.
    pub steps_taken: u64,
    /// The engine's generation when the run ended.
    pub final_generation: u64,
    /// Alive cells when the run ended.
    pub final_population: usize,
    /// Why the run ended.
    pub stop: StopReason,
}

/// Drives an engine for a bounded number of steps.
///
/// ## Usage
///
/// ```
/// use rust_life::{Engine, Grid, Runner, RunnerConfig, StopReason};
///
/// // A blinker repeats with period 2.
/// let grid = Grid::from_rows(&[
///     [0, 0, 0, 0, 0],
///     [0, 0, 0, 0, 0],
///     [0, 1, 1, 1, 0],
///     [0, 0, 0, 0, 0],
///     [0, 0, 0, 0, 0],
/// ])
/// .unwrap();
/// let mut engine = Engine::from_grid(grid);
///
/// let report = Runner::new(RunnerConfig::new(50)).run(&mut engine);
///
/// assert_eq!(report.stop, StopReason::Cycle { first_seen: 0, period: 2 });
/// assert_eq!(report.steps_taken, 2);
/// ```
#[derive(Clone, Debug, Default)]
pub struct Runner {
    config: RunnerConfig,
}

impl Runner {
    /// Create a runner with the given configuration.
    #[must_use]
    pub fn new(config: RunnerConfig) -> Self {
        Self { config }
    }

    /// Run the engine until the step bound, or earlier on a repeated state.
    pub fn run(&self, engine: &mut Engine) -> RunReport {
        self.run_with(engine, |_| {})
    }

    /// Like [`run`](Runner::run), invoking `observe` on the engine after
    /// every applied step. The observer also sees the repeated state that
    /// ends a cycle-stopped run.
    pub fn run_with<F>(&self, engine: &mut Engine, mut observe: F) -> RunReport
    where
        F: FnMut(&Engine),
    {
        let start = engine.generation();
        let mut seen: FxHashMap<u64, u64> = FxHashMap::default();
        seen.insert(engine.grid().fingerprint(), start);

        let mut stop = StopReason::MaxSteps;
        for _ in 0..self.config.max_steps {
            engine.step();
            observe(engine);

            if self.config.stop_on_cycle {
                let generation = engine.generation();
                let fingerprint = engine.grid().fingerprint();
                match seen.get(&fingerprint) {
                    Some(&first_seen) => {
                        let period = generation - first_seen;
                        log::debug!(
                            "cycle detected at generation {}: period {}",
                            generation,
                            period
                        );
                        stop = StopReason::Cycle { first_seen, period };
                        break;
                    }
                    None => {
                        seen.insert(fingerprint, generation);
                    }
                }
            }
        }

        RunReport {
            steps_taken: engine.generation() - start,
            final_generation: engine.generation(),
            final_population: engine.population(),
            stop,
        }
    }
}
