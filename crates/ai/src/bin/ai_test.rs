use std::time::Instant;

use ai::{best_move, SearchLoggerExtensions, SearchTask};
use engine::{generate_color_moves, Board, GameLogger, PieceColor};

fn main() {
    println!("🤖 Testing the search engine");
    println!("{}", "=".repeat(50));

    let mut logger = GameLogger::new();
    logger.enable_advanced_logging();

    // Starting position, White to move
    let board = Board::new();
    let moves = generate_color_moves(PieceColor::White, &board, true, true);

    logger.log_search_start(true, 3, moves.len());

    let start = Instant::now();
    let result = best_move(&board, &moves, true, 3);
    let elapsed = start.elapsed();

    logger.log_search_complete(&result);

    match &result.best_move {
        Some(mv) => {
            println!("✅ Best opening move: {} in {:.2}s", mv, elapsed.as_secs_f64());
            println!("📊 Score: {}", result.score);
        }
        None => println!("❌ No move found!"),
    }

    // Mate in one, searched off-thread the way a UI would run it
    println!("\n🎯 Mate-in-one position (background task):");
    let mate_board = Board::from_fen("7k/6pp/8/8/8/8/8/R3K3").unwrap();
    let mate_moves = generate_color_moves(PieceColor::White, &mate_board, true, true);

    let task = SearchTask::spawn(&mate_board, mate_moves, true, 2);
    match task.result() {
        Ok(result) => match &result.best_move {
            Some(mv) => println!("✅ Found {} (score {})", mv, result.score),
            None => println!("❌ No move found!"),
        },
        Err(error) => println!("❌ Search failed: {}", error),
    }

    print!("{}", logger.log_buffer);
}
