//! Engine configuration.
//!
//! `EngineConfig` gathers everything needed to build an engine with a random
//! starting grid: the shape, the alive density, the rule, and an optional
//! RNG seed. Fields chain through `with_*` builders from a sensible
//! `Default`, and `validate` rejects degenerate values before any grid is
//! allocated.

use serde::{Deserialize, Serialize};

use super::error::EngineError;
use super::grid::check_dimensions;
use crate::rules::Rule;

/// Configuration for a randomly seeded engine.
///
/// ## Usage
///
/// ```
/// use rust_life::EngineConfig;
///
/// let config = EngineConfig::new(20, 30).with_seed(7).with_density(0.25);
///
/// assert!(config.validate().is_ok());
/// assert_eq!(config.seed, Some(7));
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Number of grid rows. Must be at least 1.
    pub rows: usize,
    /// Number of grid columns. Must be at least 1.
    pub cols: usize,
    /// Seed for the simulation RNG. `None` draws a seed from OS entropy.
    pub seed: Option<u64>,
    /// Probability that each cell starts alive, within `0.0..=1.0`.
    pub density: f64,
    /// The update rule applied on every step.
    pub rule: Rule,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            rows: 50,
            cols: 50,
            seed: None,
            density: 0.5,
            rule: Rule::conway(),
        }
    }
}

impl EngineConfig {
    /// Create a configuration for a `rows x cols` grid, other fields at
    /// their defaults.
    #[must_use]
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            ..Self::default()
        }
    }

    /// Set the RNG seed, making the starting grid reproducible.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the starting alive density.
    #[must_use]
    pub fn with_density(mut self, density: f64) -> Self {
        self.density = density;
        self
    }

    /// Set the update rule.
    #[must_use]
    pub fn with_rule(mut self, rule: Rule) -> Self {
        self.rule = rule;
        self
    }

    /// Check that the configuration describes a buildable engine.
    pub fn validate(&self) -> Result<(), EngineError> {
        check_dimensions(self.rows, self.cols)?;
        if !self.density.is_finite() || !(0.0..=1.0).contains(&self.density) {
            return Err(EngineError::InvalidDensity {
                density: self.density,
            });
        }
        Ok(())
    }
}
