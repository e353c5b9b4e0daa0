//! # rust-life
//!
//! A Conway's Game of Life engine: a finite, non-wrapping grid of binary
//! cells advanced one generation at a time under a Life-like rule.
//!
//! ## Design Principles
//!
//! 1. **Engine Only**: The crate owns the state and the stepping. Rendering
//!    and pacing belong to whatever drives it, whether that is the bundled
//!    terminal binary, a benchmark loop, or a test.
//!
//! 2. **Simultaneous Updates**: A step computes every next state from the
//!    pre-step generation, then swaps in the finished grid. Readers never
//!    see a half-updated state and stepping never allocates.
//!
//! 3. **Reproducible Randomness**: All randomness flows through a seedable
//!    RNG, so any run can be replayed from its seed.
//!
//! ## Quick start
//!
//! ```
//! use rust_life::{Engine, EngineConfig, Runner, RunnerConfig};
//!
//! // A reproducible 20x20 soup under B3/S23.
//! let config = EngineConfig::new(20, 20).with_seed(42);
//! let mut engine = Engine::with_config(&config).unwrap();
//!
//! // Drive it for up to 100 generations, stopping early if it settles.
//! let report = Runner::new(RunnerConfig::new(100)).run(&mut engine);
//!
//! assert_eq!(engine.generation(), report.final_generation);
//! ```
//!
//! ## Modules
//!
//! - `core`: Cells, the grid, configuration, errors, RNG
//! - `rules`: Life-like rules in B/S notation (Conway's B3/S23 and friends)
//! - `engine`: The simulation itself, one generation per `step()`
//! - `runner`: A bounded driving loop with cycle detection

pub mod core;
pub mod engine;
pub mod rules;
pub mod runner;

// Re-export commonly used types
pub use crate::core::{Cell, EngineConfig, EngineError, Grid, SimRng};
pub use crate::engine::Engine;
pub use crate::rules::Rule;
pub use crate::runner::{RunReport, Runner, RunnerConfig, StopReason};
