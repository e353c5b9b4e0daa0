//! Errors raised when constructing grids and engines.
//!
//! Construction is the only fallible surface: `step()` and snapshot reads
//! cannot fail once an engine exists. All constructors return
//! `Result<_, EngineError>` and produce no partial value on failure.

use thiserror::Error;

/// Errors from grid and engine construction.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum EngineError {
    /// Grid dimensions must each be at least 1.
    #[error("invalid grid dimensions: {rows}x{cols} (rows and cols must be >= 1)")]
    InvalidDimension { rows: usize, cols: usize },

    /// The configured alive-density must be a probability.
    #[error("invalid alive density: {density} (must be within 0.0..=1.0)")]
    InvalidDensity { density: f64 },

    /// Row data passed to `Grid::from_rows` was not rectangular.
    #[error("ragged row data: row {row} has {actual} cells, expected {expected}")]
    RaggedRows {
        row: usize,
        expected: usize,
        actual: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_dimension_message() {
        let err = EngineError::InvalidDimension { rows: 0, cols: 10 };
        assert_eq!(
            format!("{}", err),
            "invalid grid dimensions: 0x10 (rows and cols must be >= 1)"
        );
    }

    #[test]
    fn test_invalid_density_message() {
        let err = EngineError::InvalidDensity { density: 1.5 };
        assert_eq!(
            format!("{}", err),
            "invalid alive density: 1.5 (must be within 0.0..=1.0)"
        );
    }

    #[test]
    fn test_ragged_rows_message() {
        let err = EngineError::RaggedRows {
            row: 2,
            expected: 4,
            actual: 3,
        };
        assert_eq!(
            format!("{}", err),
            "ragged row data: row 2 has 3 cells, expected 4"
        );
    }
}
