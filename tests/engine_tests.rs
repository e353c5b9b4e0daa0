//! Engine semantics tests.
//!
//! These tests pin the update rule end to end: construction contracts,
//! B3/S23 on known patterns, the non-wrapping boundary, and the guarantee
//! that next states are computed from the pre-step grid only.

use rust_life::{Cell, Engine, EngineConfig, EngineError, Grid, SimRng};

/// Test that construction produces exactly the requested shape.
#[test]
fn test_construction_shapes() {
    for (rows, cols) in [(1, 1), (1, 7), (7, 1), (13, 5), (50, 50)] {
        let engine = Engine::new(rows, cols).unwrap();

        assert_eq!(engine.dimensions(), (rows, cols));
        assert_eq!(engine.grid().cells().len(), rows * cols);
        for cell in engine.grid().cells() {
            assert!(matches!(cell, Cell::Dead | Cell::Alive));
        }
    }
}

/// Test that degenerate shapes fail construction with the offending values.
#[test]
fn test_invalid_dimensions_surface_immediately() {
    for (rows, cols) in [(0, 1), (1, 0), (0, 0), (0, 100)] {
        assert_eq!(
            Engine::new(rows, cols).unwrap_err(),
            EngineError::InvalidDimension { rows, cols }
        );
    }
}

/// Test that stepping has no hidden randomness: same grid in, same grid out.
#[test]
fn test_identical_grids_step_identically() {
    let grid = Grid::random(15, 15, 0.5, &mut SimRng::new(77)).unwrap();
    let mut a = Engine::from_grid(grid.clone());
    let mut b = Engine::from_grid(grid);

    for _ in 0..25 {
        a.step();
        b.step();
        assert_eq!(a.grid(), b.grid());
    }
}

/// Test the degenerate 1x1 grid.
#[test]
fn test_single_cell_grid_dies() {
    // The only cell of a 1x1 grid has no neighbors: alive dies of
    // underpopulation, dead has no three neighbors to be born from.
    let mut alive = Engine::from_grid(Grid::from_rows(&[[1]]).unwrap());
    alive.step();
    assert_eq!(alive.grid()[(0, 0)], Cell::Dead);

    let mut dead = Engine::from_grid(Grid::from_rows(&[[0]]).unwrap());
    dead.step();
    assert_eq!(dead.grid()[(0, 0)], Cell::Dead);
}

/// Test that the 2x2 block never changes: every alive cell has exactly
/// three alive neighbors, every bordering dead cell has at most two.
#[test]
fn test_block_is_a_still_life() {
    let block = Grid::from_rows(&[[0, 0, 0], [0, 1, 1], [0, 1, 1]]).unwrap();
    let mut engine = Engine::from_grid(block.clone());

    for _ in 0..16 {
        engine.step();
        assert_eq!(engine.grid(), &block);
    }
}

/// Test the blinker, centered far enough from the edges not to feel them.
#[test]
fn test_blinker_oscillates_with_period_two() {
    let horizontal = Grid::from_rows(&[
        [0, 0, 0, 0, 0],
        [0, 0, 0, 0, 0],
        [0, 1, 1, 1, 0],
        [0, 0, 0, 0, 0],
        [0, 0, 0, 0, 0],
    ])
    .unwrap();
    let vertical = Grid::from_rows(&[
        [0, 0, 0, 0, 0],
        [0, 0, 1, 0, 0],
        [0, 0, 1, 0, 0],
        [0, 0, 1, 0, 0],
        [0, 0, 0, 0, 0],
    ])
    .unwrap();
    let mut engine = Engine::from_grid(horizontal.clone());

    engine.step();
    assert_eq!(engine.grid(), &vertical);

    engine.step();
    assert_eq!(engine.grid(), &horizontal);
}

/// Test that nothing is ever born into an empty grid.
#[test]
fn test_all_dead_grid_stays_dead() {
    let mut engine = Engine::from_grid(Grid::dead(4, 6).unwrap());

    for _ in 0..10 {
        engine.step();
        assert_eq!(engine.population(), 0);
    }
}

/// Test a case where updating cells in place would give a different answer.
#[test]
fn test_next_states_read_only_the_previous_generation() {
    // Row-major in-place updating would see the fresh birth at (1, 2) while
    // scoring (1, 3), hand it three live neighbors, and wrongly revive it.
    // Against the pre-step grid it has two and stays dead.
    let mut engine = Engine::from_grid(
        Grid::from_rows(&[
            [0, 0, 0, 0, 0],
            [0, 0, 0, 0, 0],
            [0, 1, 1, 1, 0],
            [0, 0, 0, 0, 0],
            [0, 0, 0, 0, 0],
        ])
        .unwrap(),
    );

    engine.step();

    assert_eq!(engine.grid()[(1, 3)], Cell::Dead);
    let expected = Grid::from_rows(&[
        [0, 0, 0, 0, 0],
        [0, 0, 1, 0, 0],
        [0, 0, 1, 0, 0],
        [0, 0, 1, 0, 0],
        [0, 0, 0, 0, 0],
    ])
    .unwrap();
    assert_eq!(engine.grid(), &expected);
}

/// Test four steps of a glider against its hand-computed translation.
#[test]
fn test_glider_translates_down_right() {
    let start = Grid::from_rows(&[
        [0, 1, 0, 0, 0, 0],
        [0, 0, 1, 0, 0, 0],
        [1, 1, 1, 0, 0, 0],
        [0, 0, 0, 0, 0, 0],
        [0, 0, 0, 0, 0, 0],
        [0, 0, 0, 0, 0, 0],
    ])
    .unwrap();
    // After one full glider cycle the pattern reappears one cell down and
    // one cell right.
    let shifted = Grid::from_rows(&[
        [0, 0, 0, 0, 0, 0],
        [0, 0, 1, 0, 0, 0],
        [0, 0, 0, 1, 0, 0],
        [0, 1, 1, 1, 0, 0],
        [0, 0, 0, 0, 0, 0],
        [0, 0, 0, 0, 0, 0],
    ])
    .unwrap();
    let mut engine = Engine::from_grid(start);

    for _ in 0..4 {
        engine.step();
    }

    assert_eq!(engine.grid(), &shifted);
}

/// Test that a fixed seed pins the whole run, not just the starting grid.
#[test]
fn test_seeded_construction_is_reproducible() {
    let config = EngineConfig::new(30, 30).with_seed(1234).with_density(0.4);

    let mut a = Engine::with_config(&config).unwrap();
    let mut b = Engine::with_config(&config).unwrap();
    assert_eq!(a.grid(), b.grid());

    for _ in 0..50 {
        a.step();
        b.step();
    }
    assert_eq!(a.grid(), b.grid());
}
