//! Grid integration tests - row operations and compaction.

use blockfall::core::{catalog_shape, Grid};
use blockfall::types::{PieceKind, GRID_HEIGHT, GRID_WIDTH};

fn fill_row(grid: &mut Grid, y: i8) {
    for x in 0..GRID_WIDTH as i8 {
        grid.set(x, y, Some(PieceKind::S));
    }
}

#[test]
fn new_grid_is_empty() {
    let grid = Grid::new();
    assert_eq!(grid.width(), GRID_WIDTH);
    assert_eq!(grid.height(), GRID_HEIGHT);
    for y in 0..GRID_HEIGHT as i8 {
        for x in 0..GRID_WIDTH as i8 {
            assert!(grid.is_empty(x, y), "cell ({x}, {y}) should be empty");
        }
    }
}

#[test]
fn out_of_bounds_cell_access_returns_none() {
    let grid = Grid::new();
    assert_eq!(grid.cell(-1, 0), None);
    assert_eq!(grid.cell(0, -1), None);
    assert_eq!(grid.cell(GRID_WIDTH as i8, 0), None);
    assert_eq!(grid.cell(0, GRID_HEIGHT as i8), None);
}

#[test]
fn set_and_read_back() {
    let mut grid = Grid::new();
    assert!(grid.set(5, 10, Some(PieceKind::T)));
    assert_eq!(grid.cell(5, 10), Some(Some(PieceKind::T)));
    assert!(grid.is_occupied(5, 10));
    assert!(!grid.is_empty(5, 10));

    assert!(grid.set(5, 10, None));
    assert!(grid.is_empty(5, 10));
}

#[test]
fn full_row_detection_requires_every_cell() {
    let mut grid = Grid::new();
    for x in 0..(GRID_WIDTH as i8 - 1) {
        grid.set(x, 19, Some(PieceKind::L));
    }
    assert!(!grid.is_row_full(19));

    grid.set(GRID_WIDTH as i8 - 1, 19, Some(PieceKind::L));
    assert!(grid.is_row_full(19));
}

#[test]
fn remove_row_inserts_an_empty_top_row() {
    let mut grid = Grid::new();
    fill_row(&mut grid, 0);
    fill_row(&mut grid, 19);

    grid.remove_row(19);

    // The old top row slid down one; a fresh empty row sits at the top.
    assert!(!grid.row0_occupied());
    assert!(grid.is_row_full(1));
    assert!(!grid.is_row_full(19));
}

#[test]
fn clearing_rows_three_and_seven_compacts_to_twenty_rows() {
    let mut grid = Grid::new();
    fill_row(&mut grid, 3);
    fill_row(&mut grid, 7);

    let cleared = grid.clear_full_rows();

    assert_eq!(cleared.as_slice(), &[3, 7]);
    assert_eq!(grid.height(), GRID_HEIGHT);
    // Two empty rows were inserted at the top and no full row remains.
    assert!(!grid.row0_occupied());
    assert!(!grid.is_row_full(1));
    for y in 0..GRID_HEIGHT as usize {
        assert!(!grid.is_row_full(y));
    }
}

#[test]
fn merge_writes_only_the_piece_cells() {
    let mut grid = Grid::new();
    let shape = catalog_shape(PieceKind::J);
    grid.merge_piece(&shape, 2, 10, PieceKind::J);

    let mut settled = Vec::new();
    for y in 0..GRID_HEIGHT as i8 {
        for x in 0..GRID_WIDTH as i8 {
            if grid.is_occupied(x, y) {
                settled.push((x, y));
            }
        }
    }

    let mut expected: Vec<(i8, i8)> = shape
        .iter_cells()
        .map(|(cx, cy)| (2 + cx as i8, 10 + cy as i8))
        .collect();
    expected.sort();
    settled.sort();
    assert_eq!(settled, expected);
}
