use std::time::Instant;

use crate::board::Board;
use crate::fen;
use crate::movegen::generate_color_moves;
use crate::moves::Move;
use crate::types::PieceColor;

#[derive(Debug)]
pub struct PerftPosition {
    pub name: &'static str,
    pub fen: &'static str,
    pub to_move: PieceColor,
    pub expected_results: &'static [(u32, u64)], // (depth, expected_nodes)
}

/// Reference positions with node counts the wider engine community
/// agrees on.
pub const PERFT_POSITIONS: &[PerftPosition] = &[
    PerftPosition {
        name: "Starting Position",
        fen: fen::START_FEN,
        to_move: PieceColor::White,
        expected_results: &[(1, 20), (2, 400), (3, 8_902), (4, 197_281), (5, 4_865_609)],
    },
    PerftPosition {
        name: "Kiwipete",
        fen: fen::KIWIPETE_FEN,
        to_move: PieceColor::White,
        expected_results: &[(1, 48), (2, 2_039), (3, 97_862)],
    },
];

/// Counts the leaf positions reachable through legal moves of the
/// given color to the given depth.
pub fn perft(board: &mut Board, color: PieceColor, depth: u32) -> u64 {
    if depth == 0 {
        return 1;
    }

    let moves = generate_color_moves(color, board, true, true);
    let mut nodes = 0;

    for mv in &moves {
        board.apply_move(mv);
        nodes += perft(board, color.opposite(), depth - 1);
        board.undo_move();
    }

    nodes
}

/// Per-root-move node counts, for chasing down a bad total against a
/// known-good engine.
pub fn perft_divide(board: &mut Board, color: PieceColor, depth: u32) -> Vec<(Move, u64)> {
    let moves = generate_color_moves(color, board, true, true);
    let mut results = Vec::new();

    for mv in &moves {
        board.apply_move(mv);
        let nodes = if depth > 1 {
            perft(board, color.opposite(), depth - 1)
        } else {
            1
        };
        board.undo_move();

        results.push((mv.clone(), nodes));
    }

    results
}

/// Runs one position of the table up to `max_depth`, printing a line
/// per depth. Returns whether every depth matched.
pub fn run_position_tests(position: &PerftPosition, max_depth: Option<u32>) -> bool {
    println!("\n🏁 Testing: {}", position.name);
    println!("FEN: {}", position.fen);

    let mut board = Board::from_fen(position.fen).expect("perft table fens are valid");
    let mut all_passed = true;

    for &(depth, expected) in position.expected_results {
        if let Some(max) = max_depth {
            if depth > max {
                break;
            }
        }

        let start_time = Instant::now();
        let nodes = perft(&mut board, position.to_move, depth);
        let elapsed = start_time.elapsed();

        let passed = nodes == expected;
        all_passed &= passed;

        let status = if passed { "✅ PASS" } else { "❌ FAIL" };
        println!(
            "{} - Depth {}: {} nodes in {:.3}s (expected {})",
            status,
            depth,
            nodes,
            elapsed.as_secs_f64(),
            expected
        );

        if !passed {
            println!("🔍 Divide breakdown:");
            for (mv, count) in perft_divide(&mut board, position.to_move, depth) {
                println!("  {}: {}", mv, count);
            }
            break;
        }
    }

    all_passed
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn start_position_shallow_counts() {
        let mut board = Board::new();

        assert_eq!(perft(&mut board, PieceColor::White, 1), 20);
        assert_eq!(perft(&mut board, PieceColor::White, 2), 400);
        assert_eq!(perft(&mut board, PieceColor::White, 3), 8_902);

        // The walk leaves the board untouched
        assert_eq!(board, Board::new());
    }

    #[test]
    #[ignore = "slow; run with --ignored for the full reference counts"]
    fn start_position_depth_four() {
        let mut board = Board::new();
        assert_eq!(perft(&mut board, PieceColor::White, 4), 197_281);
    }

    #[test]
    fn kiwipete_shallow_counts() {
        let mut board = Board::from_fen(fen::KIWIPETE_FEN).unwrap();

        assert_eq!(perft(&mut board, PieceColor::White, 1), 48);
        assert_eq!(perft(&mut board, PieceColor::White, 2), 2_039);
    }

    #[test]
    #[ignore = "slow; run with --ignored for the full reference counts"]
    fn kiwipete_depth_three() {
        let mut board = Board::from_fen(fen::KIWIPETE_FEN).unwrap();
        assert_eq!(perft(&mut board, PieceColor::White, 3), 97_862);
    }

    #[test]
    fn divide_sums_to_perft() {
        let mut board = Board::new();

        let divide = perft_divide(&mut board, PieceColor::White, 2);
        assert_eq!(divide.len(), 20);

        let total: u64 = divide.iter().map(|(_, nodes)| nodes).sum();
        assert_eq!(total, 400);
    }
}
