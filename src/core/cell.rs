//! Cell state: the two-valued alphabet of the automaton.

use serde::{Deserialize, Serialize};

/// State of a single grid cell.
///
/// Cells are strictly two-valued. The numeric mapping (DEAD = 0, ALIVE = 1)
/// is fixed; `value()` is what snapshots and renderers rely on.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    /// Empty cell (value 0).
    #[default]
    Dead,
    /// Live cell (value 1).
    Alive,
}

impl Cell {
    /// Check whether the cell is alive.
    #[must_use]
    pub const fn is_alive(self) -> bool {
        matches!(self, Cell::Alive)
    }

    /// Numeric value of the cell: 0 for dead, 1 for alive.
    #[must_use]
    pub const fn value(self) -> u8 {
        match self {
            Cell::Dead => 0,
            Cell::Alive => 1,
        }
    }

    /// Build a cell from a liveness flag.
    ///
    /// ```
    /// use rust_life::Cell;
    ///
    /// assert_eq!(Cell::from_alive(true), Cell::Alive);
    /// assert_eq!(Cell::from_alive(false), Cell::Dead);
    /// ```
    #[must_use]
    pub const fn from_alive(alive: bool) -> Self {
        if alive {
            Cell::Alive
        } else {
            Cell::Dead
        }
    }
}

impl From<bool> for Cell {
    fn from(alive: bool) -> Self {
        Cell::from_alive(alive)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_mapping() {
        assert_eq!(Cell::Dead.value(), 0);
        assert_eq!(Cell::Alive.value(), 1);
    }

    #[test]
    fn test_is_alive() {
        assert!(Cell::Alive.is_alive());
        assert!(!Cell::Dead.is_alive());
    }

    #[test]
    fn test_default_is_dead() {
        assert_eq!(Cell::default(), Cell::Dead);
    }

    #[test]
    fn test_from_bool() {
        assert_eq!(Cell::from(true), Cell::Alive);
        assert_eq!(Cell::from(false), Cell::Dead);
    }

    #[test]
    fn test_serialization() {
        let cell = Cell::Alive;
        let json = serde_json::to_string(&cell).unwrap();
        let deserialized: Cell = serde_json::from_str(&json).unwrap();
        assert_eq!(cell, deserialized);
    }
}
