//! Board tests - grid storage, collision and line clearing

use atomic_tetris::core::{Board, Shape};
use atomic_tetris::types::{NeonColor, PieceKind, BOARD_HEIGHT, BOARD_WIDTH};

#[test]
fn test_board_new_empty() {
    let board = Board::new();
    assert_eq!(board.width(), BOARD_WIDTH);
    assert_eq!(board.height(), BOARD_HEIGHT);
    assert_eq!(board.cells().len(), 200);

    for y in 0..BOARD_HEIGHT as i8 {
        for x in 0..BOARD_WIDTH as i8 {
            assert_eq!(board.get(x, y), Some(None), "cell ({}, {})", x, y);
        }
    }
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
    assert!(board.set(5, 10, Some(NeonColor::Violet)));
    assert_eq!(board.get(5, 10), Some(Some(NeonColor::Violet)));
    assert!(board.is_occupied(5, 10));

    assert!(board.set(5, 10, None));
    assert!(!board.is_occupied(5, 10));

    assert!(!board.set(-1, 0, Some(NeonColor::Mint)));
    assert!(!board.set(0, BOARD_HEIGHT as i8, Some(NeonColor::Mint)));
}

#[test]
fn test_accepts_walls_floor_and_ceiling() {
    let mut board = Board::new();
    board.set(4, 19, Some(NeonColor::Cyan));

    assert!(board.accepts(0, 0));
    assert!(board.accepts(9, 19));
    assert!(!board.accepts(-1, 5));
    assert!(!board.accepts(10, 5));
    assert!(!board.accepts(3, 20));
    assert!(!board.accepts(4, 19));

    // Above the top edge is open space, as long as the column is on the board.
    assert!(board.accepts(0, -3));
    assert!(!board.accepts(-1, -3));
}

#[test]
fn test_collides_against_walls_and_cells() {
    let mut board = Board::new();
    let o = Shape::of(PieceKind::O);

    assert!(!board.collides(&o, 0, 0));
    assert!(!board.collides(&o, 8, 18));
    assert!(board.collides(&o, 9, 0), "right wall");
    assert!(board.collides(&o, -1, 0), "left wall");
    assert!(board.collides(&o, 0, 19), "floor");

    board.set(1, 1, Some(NeonColor::Mint));
    assert!(board.collides(&o, 0, 0));
    assert!(!board.collides(&o, 2, 0));
}

#[test]
fn test_clear_full_rows_shifts_down() {
    let mut board = Board::from_ascii(&[
        "#.........", // row 17
        "##########", // row 18
        ".#........", // row 19
    ]);

    let cleared = board.clear_full_rows();
    assert_eq!(cleared.as_slice(), &[18]);

    // Row 17 fell into 18; row 19 untouched.
    assert!(board.is_occupied(0, 18));
    assert!(board.is_occupied(1, 19));
    assert!(!board.is_occupied(0, 17));
    assert_eq!(board.filled_count(), 2);
    assert_eq!(board.rows().count(), BOARD_HEIGHT as usize);
}

#[test]
fn test_clear_non_adjacent_rows() {
    let mut board = Board::from_ascii(&[
        "##########",
        "..#.......",
        "##########",
        "...#......",
    ]);

    let cleared = board.clear_full_rows();
    assert_eq!(cleared.as_slice(), &[18, 16]);
    assert!(board.is_occupied(2, 18));
    assert!(board.is_occupied(3, 19));
    assert_eq!(board.filled_count(), 2);
}

#[test]
fn test_clear_with_no_full_rows_is_noop() {
    let mut board = Board::from_ascii(&["#########.", "#########."]);
    let before = board.clone();
    assert!(board.clear_full_rows().is_empty());
    assert_eq!(board, before);
}

#[test]
fn test_full_board_clears_to_empty() {
    let rows = vec!["##########"; BOARD_HEIGHT as usize];
    let mut board = Board::from_ascii(&rows);
    assert_eq!(board.clear_full_rows().len(), BOARD_HEIGHT as usize);
    assert_eq!(board.filled_count(), 0);
}

#[test]
fn test_merge_clips_cells_above_top() {
    let mut board = Board::new();
    let i_vertical = Shape::of(PieceKind::I).rotated_cw();
    let written = board.merge(&i_vertical, 0, -2, NeonColor::Cyan);
    assert_eq!(written, 2);
    assert!(board.is_occupied(0, 0));
    assert!(board.is_occupied(0, 1));
    assert!(!board.is_occupied(0, 2));
}

#[test]
fn test_board_clear() {
    let mut board = Board::from_ascii(&["#.#.#.#.#."]);
    assert_eq!(board.filled_count(), 5);
    board.clear();
    assert_eq!(board, Board::new());
}
