//! Life-like update rules.
//!
//! A rule is a pair of neighbor-count sets in standard B/S notation: a dead
//! cell becomes alive when its live-neighbor count is in the birth set, an
//! alive cell stays alive when its count is in the survival set, and every
//! other cell is dead on the next step. Counts range over 0..=8, so each set
//! packs into the low nine bits of a `u16`.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::core::Cell;

/// A Life-like rule as birth and survival neighbor-count sets.
///
/// ## Usage
///
/// ```
/// use rust_life::{Cell, Rule};
///
/// let rule = Rule::conway();
///
/// assert_eq!(rule.next_state(Cell::Dead, 3), Cell::Alive);
/// assert_eq!(rule.next_state(Cell::Alive, 1), Cell::Dead);
/// assert_eq!(rule.to_string(), "B3/S23");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rule {
    birth: u16,
    survival: u16,
}

fn count_mask(counts: &[u8]) -> u16 {
    counts.iter().fold(0, |mask, &count| {
        assert!(count <= 8, "neighbor count {} out of range 0..=8", count);
        mask | 1 << count
    })
}

impl Rule {
    /// Build a rule from explicit birth and survival neighbor counts.
    ///
    /// Panics if any count exceeds 8.
    #[must_use]
    pub fn new(birth: &[u8], survival: &[u8]) -> Self {
        Self {
            birth: count_mask(birth),
            survival: count_mask(survival),
        }
    }

    /// Conway's Game of Life, B3/S23.
    #[must_use]
    pub fn conway() -> Self {
        Self::new(&[3], &[2, 3])
    }

    /// HighLife, B36/S23. Like Conway's rule plus birth on six neighbors.
    #[must_use]
    pub fn high_life() -> Self {
        Self::new(&[3, 6], &[2, 3])
    }

    /// Day & Night, B3678/S34678.
    #[must_use]
    pub fn day_and_night() -> Self {
        Self::new(&[3, 6, 7, 8], &[3, 4, 6, 7, 8])
    }

    /// Whether a dead cell with `live_neighbors` becomes alive.
    #[must_use]
    pub fn births_on(&self, live_neighbors: u8) -> bool {
        live_neighbors <= 8 && self.birth & (1 << live_neighbors) != 0
    }

    /// Whether an alive cell with `live_neighbors` stays alive.
    #[must_use]
    pub fn survives_on(&self, live_neighbors: u8) -> bool {
        live_neighbors <= 8 && self.survival & (1 << live_neighbors) != 0
    }

    /// The state a cell takes on the next step, given its current state and
    /// live-neighbor count.
    #[must_use]
    pub fn next_state(&self, current: Cell, live_neighbors: u8) -> Cell {
        let alive = match current {
            Cell::Alive => self.survives_on(live_neighbors),
            Cell::Dead => self.births_on(live_neighbors),
        };
        Cell::from_alive(alive)
    }
}

impl Default for Rule {
    fn default() -> Self {
        Self::conway()
    }
}

impl fmt::Display for Rule {
    // B/S notation, e.g. "B3/S23".
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "B")?;
        for count in 0..=8 {
            if self.birth & (1 << count) != 0 {
                write!(f, "{}", count)?;
            }
        }
        write!(f, "/S")?;
        for count in 0..=8 {
            if self.survival & (1 << count) != 0 {
                write!(f, "{}", count)?;
            }
        }
        Ok(())
    }
}
