use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::thread::{self, JoinHandle};

use engine::{Board, Move};

use crate::search::best_move;
use crate::types::SearchResult;

/// One-shot background search.
///
/// The worker thread owns a copy of the board and never touches the
/// live one, so the interactive side is free to keep reading and
/// drawing it. There is no cancellation: once spawned, the search
/// runs to its configured depth and posts a single result through
/// the channel.
#[derive(Debug)]
pub struct SearchTask {
    receiver: Receiver<SearchResult>,
    handle: Option<JoinHandle<()>>,
}

impl SearchTask {
    /// Spawns the search for the given side over its already-
    /// enumerated legal moves. The caller should have detected an
    /// empty move list (checkmate or stalemate) before scheduling.
    pub fn spawn(board: &Board, move_list: Vec<Move>, is_white: bool, search_depth: u32) -> Self {
        let scratch = board.get_copy();
        let (sender, receiver) = mpsc::channel();

        let handle = thread::spawn(move || {
            let result = best_move(&scratch, &move_list, is_white, search_depth);
            // The receiver may have been dropped; nothing to do then
            let _ = sender.send(result);
        });

        Self {
            receiver,
            handle: Some(handle),
        }
    }

    /// Non-blocking poll, for callers driving a redraw loop.
    pub fn try_result(&self) -> Option<SearchResult> {
        match self.receiver.try_recv() {
            Ok(result) => Some(result),
            Err(TryRecvError::Empty) | Err(TryRecvError::Disconnected) => None,
        }
    }

    /// Blocks until the search finishes and hands the result over.
    pub fn result(mut self) -> Result<SearchResult, String> {
        let result = self
            .receiver
            .recv()
            .map_err(|_| "search thread exited without a result".to_string());

        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }

        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use engine::{generate_color_moves, PieceColor};

    #[test]
    fn background_search_matches_the_direct_call() {
        let board = Board::from_fen("7k/6pp/8/8/8/8/8/R3K3").unwrap();
        let moves = generate_color_moves(PieceColor::White, &board, true, true);

        let direct = best_move(&board, &moves, true, 1);
        let task = SearchTask::spawn(&board, moves, true, 1);
        let background = task.result().unwrap();

        assert_eq!(background, direct);
    }

    #[test]
    fn the_live_board_is_never_touched() {
        let board = Board::new();
        let snapshot = board.get_copy();
        let moves = generate_color_moves(PieceColor::White, &board, true, true);

        let task = SearchTask::spawn(&board, moves, true, 2);
        let result = task.result().unwrap();

        assert!(result.best_move.is_some());
        assert_eq!(board, snapshot);
        assert!(board.last_move().is_none());
    }
}
