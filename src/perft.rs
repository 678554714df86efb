//! Perft (performance test): recursively plays out every legal move to a
//! fixed depth and counts leaf nodes, the standard conformance check for a
//! move generator (spec.md §6, §8).
//!
//! Ground: the teacher's `perft`/`test_epd` pair, restated against
//! `Position`/`movegen` instead of `pos::Position`/`moves::gen_legal`. The
//! EPD-driven batch runner and its colored pass/fail summary are kept
//! close to verbatim — only the move-generation and position types
//! underneath changed.

use std::fs;

use colored::Colorize;

use crate::movegen;
use crate::notation;
use crate::position::Position;

/// Recursively searches `pos` to `depth`, returning the leaf node count.
/// When `is_root`, also prints the per-move node count (a "perft divide"),
/// which is what narrows down a move-generation bug to a single branch.
pub fn perft(pos: &mut Position, depth: u32, is_root: bool) -> u64 {
    if depth == 0 {
        return 1;
    }

    let mut nodes = 0;
    for mv in movegen::legal_moves(pos) {
        pos.make_move(mv);
        let new_nodes = perft(pos, depth - 1, false);
        nodes += new_nodes;
        if is_root {
            println!("{}: {new_nodes}", notation::to_long_algebraic(&mv));
        }
        pos.unmake_move();
    }

    if is_root {
        println!("\nsearched {nodes} nodes");
    }

    nodes
}

struct TestCase<'a> {
    fen: &'a str,
    depths: Vec<u32>,
    node_counts: Vec<u64>,
}

/// Parses an EPD file of `fen ;D1 n1 ;D2 n2 ...` test positions and checks
/// each against this crate's own perft output.
pub fn test_epd(path: &str, max_depth: u32, num_tests: usize, start_at: usize) {
    let contents = String::from_utf8_lossy(&fs::read(path).expect("failed to read EPD file")).to_string();

    let test_cases: Vec<TestCase> = contents
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(parse_epd_line)
        .collect();

    let mut ok = 0;
    let mut failed = 0;

    for test_case in test_cases.iter().skip(start_at).take(num_tests) {
        if test_case.depths.first().is_none_or(|&d| d > max_depth) {
            continue;
        }
        println!("\ntesting position: {}", test_case.fen.bright_yellow());

        for (&depth, &expected) in test_case.depths.iter().zip(&test_case.node_counts) {
            if depth > max_depth {
                break;
            }
            print!("depth: {depth}; expected nodes: {}; ", expected.to_string().yellow());

            let mut pos = crate::fen::parse(test_case.fen).expect("EPD fixture FEN must parse");
            let nodes = perft(&mut pos, depth, false);
            if nodes == expected {
                println!("actual nodes: {}; {}", nodes.to_string().yellow(), "ok".green());
                ok += 1;
            } else {
                let diff = nodes as i64 - expected as i64;
                let sign = if diff > 0 { "+" } else { "" };
                println!(
                    "actual nodes: {} ({sign}{diff}); {}",
                    nodes.to_string().red(),
                    "failed".red()
                );
                failed += 1;
            }
        }
    }

    let total = ok + failed;
    println!(
        "results: out of {} tests, {} passed, {} failed",
        total.to_string().yellow().bold(),
        if ok == total { ok.to_string().green().bold() } else { ok.to_string().yellow().bold() },
        if failed == 0 { failed.to_string().green().bold() } else { failed.to_string().red().bold() },
    );
}

fn parse_epd_line(line: &str) -> TestCase<'_> {
    let fen = line.split(';').next().unwrap().trim();
    let mut depths = Vec::new();
    let mut node_counts = Vec::new();
    for field in line.split(';').skip(1) {
        let field = field.trim();
        let Some(rest) = field.strip_prefix('D') else { continue };
        let mut parts = rest.splitn(2, char::is_whitespace);
        let depth: u32 = parts.next().unwrap().trim().parse().expect("EPD depth must be an integer");
        let count: u64 = parts.next().unwrap().trim().parse().expect("EPD node count must be an integer");
        depths.push(depth);
        node_counts.push(count);
    }
    TestCase { fen, depths, node_counts }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fen;

    #[test]
    fn starting_position_perft_depth_1_through_3() {
        let mut pos = Position::starting_position();
        assert_eq!(perft(&mut pos, 1, false), 20);
        assert_eq!(perft(&mut pos, 2, false), 400);
        assert_eq!(perft(&mut pos, 3, false), 8902);
    }

    #[test]
    fn kiwipete_perft_depth_1_and_2() {
        let kiwipete = "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1";
        let mut pos = fen::parse(kiwipete).unwrap();
        assert_eq!(perft(&mut pos, 1, false), 48);
        assert_eq!(perft(&mut pos, 2, false), 2039);
    }

    // Depths 4-5 for both positions (the full table spec.md §8 calls for)
    // live in tests/conformance.rs, with depth 5 marked #[ignore] since it
    // takes long enough to not belong in the default `cargo test` run.
}
