//! Piece geometry tests

use std::collections::BTreeSet;

use blockfall::core::piece::{shape_cells, Piece, SHAPE_TABLE};
use blockfall::types::{Coord, ShapeKind};

fn set(cells: [Coord; 4]) -> BTreeSet<Coord> {
    cells.into_iter().collect()
}

#[test]
fn test_every_footprint_has_four_distinct_cells() {
    for kind in ShapeKind::ALL {
        for orientation in 0..4 {
            assert_eq!(
                set(shape_cells(kind, orientation)).len(),
                4,
                "{:?} orientation {} has overlapping cells",
                kind,
                orientation
            );
        }
    }
}

#[test]
fn test_o_piece_never_changes() {
    let spawn = set(shape_cells(ShapeKind::O, 0));
    for orientation in 1..4 {
        assert_eq!(set(shape_cells(ShapeKind::O, orientation)), spawn);
    }
}

#[test]
fn test_i_s_z_have_two_orientations() {
    for kind in [ShapeKind::I, ShapeKind::S, ShapeKind::Z] {
        let o = |n| set(shape_cells(kind, n));
        assert_eq!(o(0), o(2), "{:?} 0 vs 2", kind);
        assert_eq!(o(1), o(3), "{:?} 1 vs 3", kind);
        assert_ne!(o(0), o(1), "{:?} 0 vs 1", kind);
    }
}

#[test]
fn test_l_j_t_have_four_orientations() {
    for kind in [ShapeKind::L, ShapeKind::J, ShapeKind::T] {
        let all: BTreeSet<BTreeSet<Coord>> = (0..4).map(|n| set(shape_cells(kind, n))).collect();
        assert_eq!(all.len(), 4, "{:?}", kind);
    }
}

#[test]
fn test_all_kinds_are_distinct_shapes() {
    let spawns: BTreeSet<BTreeSet<Coord>> = ShapeKind::ALL
        .iter()
        .map(|&k| set(shape_cells(k, 0)))
        .collect();
    assert_eq!(spawns.len(), ShapeKind::COUNT);
}

#[test]
fn test_l_and_j_are_mirror_images() {
    let mirrored: BTreeSet<Coord> = shape_cells(ShapeKind::L, 0)
        .into_iter()
        .map(|(r, c)| (r, -c))
        .collect();
    assert_eq!(mirrored, set(shape_cells(ShapeKind::J, 0)));

    let mirrored: BTreeSet<Coord> = shape_cells(ShapeKind::S, 0)
        .into_iter()
        .map(|(r, c)| (r, -c))
        .collect();
    assert_eq!(mirrored, set(shape_cells(ShapeKind::Z, 0)));
}

#[test]
fn test_table_matches_lookup() {
    for kind in ShapeKind::ALL {
        for orientation in 0..4u8 {
            assert_eq!(
                SHAPE_TABLE[kind.index()][orientation as usize],
                shape_cells(kind, orientation)
            );
        }
    }
}

#[test]
fn test_four_rotations_round_trip() {
    for kind in ShapeKind::ALL {
        let mut piece = Piece::new(kind);
        piece.set_origin(10, 4);
        let start = piece.global_cells(0).map(set);

        // Delta queries compose with the stored orientation.
        for delta in [4, -4, 8] {
            assert_eq!(piece.global_cells(delta).map(set), start);
        }
        assert_eq!(set(piece.local_cells(1)), set(piece.local_cells(-3)));
    }
}

#[test]
fn test_local_cells_for_each_delta() {
    let piece = Piece::new(ShapeKind::T);
    assert_eq!(piece.local_cells(0), shape_cells(ShapeKind::T, 0));
    assert_eq!(piece.local_cells(1), shape_cells(ShapeKind::T, 1));
    assert_eq!(piece.local_cells(-1), shape_cells(ShapeKind::T, 3));
    assert_eq!(piece.local_cells(2), shape_cells(ShapeKind::T, 2));
}

#[test]
fn test_global_cells_follow_origin() {
    let mut piece = Piece::new(ShapeKind::O);
    assert_eq!(piece.global_cells(0), None);

    piece.set_origin(3, 5);
    assert_eq!(
        piece.global_cells(0).map(set),
        Some(set([(3, 5), (3, 4), (4, 5), (4, 4)]))
    );
    assert_eq!(
        piece.global_cells_with_offset(-1, 1, 0).map(set),
        Some(set([(2, 6), (2, 5), (3, 6), (3, 5)]))
    );
}
