use engine::{GameLogger, Move};

use crate::types::SearchResult;

/// Search-flow logging bolted onto the engine's game logger. All of
/// it is gated on advanced logging being enabled.
pub trait SearchLoggerExtensions {
    fn log_search_start(&mut self, is_white: bool, depth: u32, candidates: usize);
    fn log_candidate_score(&mut self, mv: &Move, score: i32);
    fn log_search_complete(&mut self, result: &SearchResult);
}

impl SearchLoggerExtensions for GameLogger {
    fn log_search_start(&mut self, is_white: bool, depth: u32, candidates: usize) {
        if !self.should_log_advanced() {
            return;
        }

        let side = if is_white { "White" } else { "Black" };
        self.log(&format!(
            "🚀 Search started for {} at depth {} ({} candidate moves)",
            side, depth, candidates
        ));
    }

    fn log_candidate_score(&mut self, mv: &Move, score: i32) {
        if !self.should_log_advanced() {
            return;
        }

        self.log(&format!("  📊 {} scored {}", mv, score));
    }

    fn log_search_complete(&mut self, result: &SearchResult) {
        if !self.should_log_advanced() {
            return;
        }

        match &result.best_move {
            Some(mv) => self.log(&format!(
                "🏆 Search complete: {} (score {}, depth {})",
                mv, result.score, result.depth
            )),
            None => self.log("🏆 Search complete: no move available"),
        }
    }
}
