//! Piece catalog and placement validator integration tests.

use blockfall::core::{catalog_shape, Grid, Piece, PieceFactory};
use blockfall::types::{PieceKind, GRID_HEIGHT, GRID_WIDTH};

#[test]
fn catalog_matrices_match_the_classic_layouts() {
    let cells = |kind: PieceKind| -> Vec<(u8, u8)> { catalog_shape(kind).iter_cells().collect() };

    assert_eq!(cells(PieceKind::I), vec![(0, 0), (1, 0), (2, 0), (3, 0)]);
    assert_eq!(cells(PieceKind::O), vec![(0, 0), (1, 0), (0, 1), (1, 1)]);
    assert_eq!(cells(PieceKind::Z), vec![(0, 0), (1, 0), (1, 1), (2, 1)]);
    assert_eq!(cells(PieceKind::S), vec![(1, 0), (2, 0), (0, 1), (1, 1)]);
    assert_eq!(cells(PieceKind::T), vec![(0, 0), (1, 0), (2, 0), (1, 1)]);
    assert_eq!(cells(PieceKind::L), vec![(0, 0), (1, 0), (2, 0), (0, 1)]);
    assert_eq!(cells(PieceKind::J), vec![(0, 0), (1, 0), (2, 0), (2, 1)]);
}

#[test]
fn four_quarter_turns_are_the_identity() {
    for kind in PieceKind::ALL {
        let shape = catalog_shape(kind);
        assert_eq!(shape.rotated().rotated().rotated().rotated(), shape);
    }
}

#[test]
fn placement_is_valid_only_inside_empty_bounds() {
    let grid = Grid::new();
    let shape = catalog_shape(PieceKind::O);

    assert!(shape.fits(&grid, 0, 0));
    assert!(shape.fits(&grid, GRID_WIDTH as i8 - 2, GRID_HEIGHT as i8 - 2));

    // One cell past any edge fails.
    assert!(!shape.fits(&grid, -1, 0));
    assert!(!shape.fits(&grid, GRID_WIDTH as i8 - 1, 0));
    assert!(!shape.fits(&grid, 0, GRID_HEIGHT as i8 - 1));
    assert!(!shape.fits(&grid, 0, -1));
}

#[test]
fn placement_over_a_settled_cell_is_invalid() {
    let mut grid = Grid::new();
    grid.set(4, 10, Some(PieceKind::T));

    let shape = catalog_shape(PieceKind::O);
    assert!(!shape.fits(&grid, 4, 10));
    assert!(!shape.fits(&grid, 3, 9));
    // Adjacent but non-overlapping placements stay valid.
    assert!(shape.fits(&grid, 5, 10));
    assert!(shape.fits(&grid, 4, 11));
}

#[test]
fn factory_draws_replay_per_seed() {
    let mut a = PieceFactory::new(2024);
    let mut b = PieceFactory::new(2024);
    for _ in 0..20 {
        assert_eq!(a.next_piece().kind, b.next_piece().kind);
    }
}

#[test]
fn factory_pieces_start_from_the_catalog() {
    let mut factory = PieceFactory::new(8);
    for _ in 0..20 {
        let piece = factory.next_piece();
        assert_eq!(piece.shape, catalog_shape(piece.kind));
    }
}

#[test]
fn rotating_a_piece_does_not_touch_the_catalog() {
    let mut piece = Piece::new(PieceKind::L);
    for _ in 0..3 {
        piece.shape = piece.shape.rotated();
    }
    assert_eq!(catalog_shape(PieceKind::L), Piece::new(PieceKind::L).shape);
}
