//! Piece tests - shapes, spawn placement and rotation

use std::collections::HashSet;

use atomic_tetris::core::{Board, Piece, PieceRandomizer, Shape};
use atomic_tetris::types::{NeonColor, PieceKind};

// ============== Shape Tests ==============

#[test]
fn test_every_shape_has_four_minos() {
    for kind in PieceKind::ALL {
        assert_eq!(Shape::of(kind).minos().count(), 4, "{:?}", kind);
    }
}

#[test]
fn test_shape_dimensions() {
    let dims = |k| {
        let s = Shape::of(k);
        (s.rows(), s.cols())
    };
    assert_eq!(dims(PieceKind::I), (1, 4));
    assert_eq!(dims(PieceKind::O), (2, 2));
    for k in [PieceKind::T, PieceKind::S, PieceKind::Z, PieceKind::J, PieceKind::L] {
        assert_eq!(dims(k), (2, 3), "{:?}", k);
    }
}

#[test]
fn test_shape_layouts() {
    assert_eq!(Shape::of(PieceKind::T), Shape::from_rows(&[".#.", "###"]));
    assert_eq!(Shape::of(PieceKind::S), Shape::from_rows(&[".##", "##."]));
    assert_eq!(Shape::of(PieceKind::Z), Shape::from_rows(&["##.", ".##"]));
    assert_eq!(Shape::of(PieceKind::J), Shape::from_rows(&["#..", "###"]));
    assert_eq!(Shape::of(PieceKind::L), Shape::from_rows(&["..#", "###"]));
}

#[test]
fn test_piece_colors() {
    assert_eq!(PieceKind::I.color(), NeonColor::Cyan);
    assert_eq!(PieceKind::J.color(), NeonColor::Cyan);
    assert_eq!(PieceKind::O.color(), NeonColor::Mint);
    assert_eq!(PieceKind::S.color(), NeonColor::Mint);
    assert_eq!(PieceKind::L.color(), NeonColor::Mint);
    assert_eq!(PieceKind::T.color(), NeonColor::Violet);
    assert_eq!(PieceKind::Z.color(), NeonColor::Violet);
}

// ============== Rotation Tests ==============

#[test]
fn test_four_rotations_are_identity() {
    for kind in PieceKind::ALL {
        let shape = Shape::of(kind);
        let back = shape.rotated_cw().rotated_cw().rotated_cw().rotated_cw();
        assert_eq!(back, shape, "{:?}", kind);
    }
}

#[test]
fn test_rotation_swaps_dimensions() {
    for kind in PieceKind::ALL {
        let shape = Shape::of(kind);
        let r = shape.rotated_cw();
        assert_eq!((r.rows(), r.cols()), (shape.cols(), shape.rows()));
        assert_eq!(r.minos().count(), 4);
    }
}

#[test]
fn test_t_rotation_clockwise() {
    let r = Shape::of(PieceKind::T).rotated_cw();
    assert_eq!(r, Shape::from_rows(&["#.", "##", "#."]));
}

#[test]
fn test_o_rotation_is_unchanged() {
    let o = Shape::of(PieceKind::O);
    assert_eq!(o.rotated_cw(), o);
}

// ============== Spawn Tests ==============

#[test]
fn test_spawn_is_centered_at_top() {
    assert_eq!(Piece::spawn(PieceKind::I).x, 3);
    assert_eq!(Piece::spawn(PieceKind::O).x, 4);
    assert_eq!(Piece::spawn(PieceKind::T).x, 4);
    for kind in PieceKind::ALL {
        let p = Piece::spawn(kind);
        assert_eq!(p.y, 0);
        assert!(!p.collides(&Board::new()));
    }
}

#[test]
fn test_drop_distance_on_empty_board() {
    let o = Piece::spawn(PieceKind::O);
    assert_eq!(o.drop_distance(&Board::new()), 18);
    let i = Piece::spawn(PieceKind::I);
    assert_eq!(i.drop_distance(&Board::new()), 19);
}

// ============== Randomizer Tests ==============

#[test]
fn test_randomizer_is_deterministic() {
    let mut a = PieceRandomizer::new(2024);
    let mut b = PieceRandomizer::new(2024);
    for _ in 0..50 {
        assert_eq!(a.draw(), b.draw());
    }
}

#[test]
fn test_randomizer_covers_all_kinds() {
    let mut r = PieceRandomizer::new(5);
    let seen: HashSet<_> = (0..500).map(|_| r.draw()).collect();
    assert_eq!(seen.len(), PieceKind::ALL.len());
}
