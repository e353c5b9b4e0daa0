//! Core simulation types.
//!
//! ## Key Types
//!
//! - `Cell`: the two cell states, with their 0/1 value mapping
//! - `Grid`: fixed-shape row-major cell array with neighbor counting
//! - `EngineConfig`: shape, seed, density, and rule for a random start
//! - `EngineError`: everything construction can reject
//! - `SimRng`: seedable ChaCha8 RNG behind all randomness

pub mod cell;
pub mod config;
pub mod error;
pub mod grid;
pub mod rng;

pub use cell::Cell;
pub use config::EngineConfig;
pub use error::EngineError;
pub use grid::Grid;
pub use rng::SimRng;
