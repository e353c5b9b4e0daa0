//! Update rules for the simulation.
//!
//! The engine is rule-parametric: any Life-like rule expressible as birth
//! and survival neighbor-count sets plugs in. Conway's B3/S23 is the
//! default and the only rule the stock behavior is stated for.

pub mod rule;

pub use rule::Rule;
