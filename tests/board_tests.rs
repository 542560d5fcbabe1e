//! Board tests - grid access, collision, merge and line clearing

use blocktris::core::{ActivePiece, Board};
use blocktris::types::{PieceKind, BOARD_HEIGHT, BOARD_WIDTH};

fn fill_row(board: &mut Board, y: i8, kind: PieceKind) {
    for x in 0..BOARD_WIDTH as i8 {
        board.set(x, y, Some(kind));
    }
}

#[test]
fn test_board_new_empty() {
    let board = Board::new();
    assert_eq!(board.width(), BOARD_WIDTH);
    assert_eq!(board.height(), BOARD_HEIGHT);

    for y in 0..BOARD_HEIGHT as i8 {
        for x in 0..BOARD_WIDTH as i8 {
            assert_eq!(board.get(x, y), Some(None), "cell ({}, {})", x, y);
        }
    }
    assert_eq!(board.filled_count(), 0);
}

#[test]
fn test_board_get_out_of_bounds() {
    let board = Board::new();

    assert_eq!(board.get(-1, 0), None);
    assert_eq!(board.get(0, -1), None);
    assert_eq!(board.get(BOARD_WIDTH as i8, 0), None);
    assert_eq!(board.get(0, BOARD_HEIGHT as i8), None);
}

#[test]
fn test_board_set_and_get() {
    let mut board = Board::new();

    assert!(board.set(5, 10, Some(PieceKind::T)));
    assert_eq!(board.get(5, 10), Some(Some(PieceKind::T)));
    assert!(board.is_occupied(5, 10));

    assert!(board.set(5, 10, None));
    assert!(!board.is_occupied(5, 10));

    assert!(!board.set(10, 0, Some(PieceKind::I)));
}

#[test]
fn test_collision_walls_and_floor() {
    let board = Board::new();
    let mut piece = ActivePiece::new(PieceKind::O);

    piece.x = 0;
    assert!(board.collides(&piece, -1, 0));
    assert!(!board.collides(&piece, 0, 0));

    piece.x = BOARD_WIDTH as i8 - 2;
    assert!(board.collides(&piece, 1, 0));

    piece.y = BOARD_HEIGHT as i8 - 2;
    assert!(board.collides(&piece, 0, 1));
    assert!(!board.collides(&piece, 0, 0));
}

#[test]
fn test_collision_above_board_only_checks_walls() {
    let mut board = Board::new();
    fill_row(&mut board, 0, PieceKind::Z);

    let mut piece = ActivePiece::new(PieceKind::I);
    piece.y = -1;
    assert!(!board.collides(&piece, 0, 0));
    assert!(board.collides(&piece, 0, 1));

    piece.x = -1;
    assert!(board.collides(&piece, 0, 0));
}

#[test]
fn test_merge_colors_cells_by_kind() {
    let mut board = Board::new();
    let mut piece = ActivePiece::new(PieceKind::J);
    piece.y = 18;
    board.merge(&piece);

    assert_eq!(board.get(3, 18), Some(Some(PieceKind::J)));
    for x in 3..6 {
        assert_eq!(board.get(x, 19), Some(Some(PieceKind::J)));
    }
    assert_eq!(board.filled_count(), 4);
}

#[test]
fn test_clear_no_full_rows() {
    let mut board = Board::new();
    board.set(0, 19, Some(PieceKind::I));
    let before = board.clone();

    assert!(board.clear_full_lines().is_empty());
    assert_eq!(board, before);
}

#[test]
fn test_clear_adjacent_rows() {
    let mut board = Board::new();
    fill_row(&mut board, 18, PieceKind::I);
    fill_row(&mut board, 19, PieceKind::I);
    board.set(2, 17, Some(PieceKind::T));

    let cleared = board.clear_full_lines();
    assert_eq!(cleared.as_slice(), &[19, 18]);
    assert_eq!(board.get(2, 19), Some(Some(PieceKind::T)));
    assert_eq!(board.filled_count(), 1);
}

#[test]
fn test_clear_non_adjacent_rows_shift_by_rows_below() {
    let mut board = Board::new();
    fill_row(&mut board, 19, PieceKind::I);
    board.set(0, 18, Some(PieceKind::S));
    fill_row(&mut board, 17, PieceKind::I);
    board.set(1, 16, Some(PieceKind::Z));

    let cleared = board.clear_full_lines();
    assert_eq!(cleared.as_slice(), &[19, 17]);

    // Row 18 drops by one, row 16 by two.
    assert_eq!(board.get(0, 19), Some(Some(PieceKind::S)));
    assert_eq!(board.get(1, 18), Some(Some(PieceKind::Z)));
    assert_eq!(board.filled_count(), 2);
    assert!(board.rows().take(18).flatten().all(|c| c.is_none()));
}

#[test]
fn test_clear_four_rows_empties_board() {
    let mut board = Board::new();
    for y in 16..20 {
        fill_row(&mut board, y, PieceKind::I);
    }

    assert_eq!(board.clear_full_lines().len(), 4);
    assert_eq!(board.filled_count(), 0);
}
