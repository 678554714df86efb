//! End-to-end conformance tests against `lucena`'s public API: the perft
//! table for depths 1-5 on the starting position and Kiwipete, and the
//! remaining seeded scenarios from spec.md §8 not already covered by a
//! module's own unit tests (en-passant-resolves-check, promotion-at-the-edge).
//!
//! Depth 5 for either position takes long enough in a debug-ish test build
//! that it's marked `#[ignore]`, run on demand with `cargo test -- --ignored`.

use lucena::fen;
use lucena::notation::to_long_algebraic;
use lucena::perft::perft;
use lucena::position::Position;

const KIWIPETE: &str = "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1";

#[test]
fn starting_position_perft_depths_one_through_four() {
    let mut pos = Position::starting_position();
    assert_eq!(perft(&mut pos, 1, false), 20);
    assert_eq!(perft(&mut pos, 2, false), 400);
    assert_eq!(perft(&mut pos, 3, false), 8_902);
    assert_eq!(perft(&mut pos, 4, false), 197_281);
}

#[test]
#[ignore]
fn starting_position_perft_depth_five() {
    let mut pos = Position::starting_position();
    assert_eq!(perft(&mut pos, 5, false), 4_865_609);
}

#[test]
fn kiwipete_perft_depths_one_through_three() {
    let mut pos = fen::parse(KIWIPETE).unwrap();
    assert_eq!(perft(&mut pos, 1, false), 48);
    assert_eq!(perft(&mut pos, 2, false), 2_039);
    assert_eq!(perft(&mut pos, 3, false), 97_862);
}

#[test]
#[ignore]
fn kiwipete_perft_depths_four_and_five() {
    let mut pos = fen::parse(KIWIPETE).unwrap();
    assert_eq!(perft(&mut pos, 4, false), 4_085_603);
    assert_eq!(perft(&mut pos, 5, false), 193_690_690);
}

#[test]
fn en_passant_resolves_check() {
    let pos = fen::parse("1r4k1/p6p/1n4pP/2b2pP1/2p1KP2/8/1P1R4/7R w - f6 0 36").unwrap();
    let moves = lucena::movegen::legal_moves(&pos);
    assert!(
        moves
            .iter()
            .any(|m| m.flag == lucena::MoveFlag::EnPassant && to_long_algebraic(m) == "g5f6"),
        "g5xf6 en passant must appear in the legal move list"
    );
}

#[test]
fn promotion_at_the_edge() {
    let pos = fen::parse("4k3/2R5/4p2p/P4PpP/8/3bP3/2p2K2/8 b - - 0 62").unwrap();
    let moves = lucena::movegen::legal_moves(&pos);

    let promos: Vec<String> = moves
        .iter()
        .filter(|m| m.from.to_string() == "c2" && m.to.to_string() == "c1")
        .map(to_long_algebraic)
        .collect();

    for expected in ["c2c1n", "c2c1b", "c2c1r", "c2c1q"] {
        assert!(promos.iter().any(|m| m == expected), "missing {expected}");
    }
    assert_eq!(promos.len(), 4, "no non-promoting c2c1 move should appear: {promos:?}");
}
