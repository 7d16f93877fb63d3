use engine::{Board, PieceColor};

use crate::types::piece_value;

/// Material evaluation of the whole board: White-owned pieces count
/// positive, Black-owned negative. Positional factors are ignored.
pub fn evaluate_board(board: &Board) -> i32 {
    let mut board_score = 0;

    for piece in board.all_pieces() {
        match piece.color {
            PieceColor::White => board_score += piece_value(piece.kind),
            PieceColor::Black => board_score -= piece_value(piece.kind),
        }
    }

    board_score
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{PAWN_VALUE, QUEEN_VALUE};

    #[test]
    fn starting_position_is_balanced() {
        assert_eq!(evaluate_board(&Board::new()), 0);
    }

    #[test]
    fn material_imbalance_shows_up_signed() {
        // White is a queen up, Black a pawn up
        let board = Board::from_fen("4k3/p7/8/8/8/8/8/Q3K3").unwrap();
        assert_eq!(evaluate_board(&board), QUEEN_VALUE - PAWN_VALUE);

        let mirrored = Board::from_fen("q3k3/8/8/8/8/8/P7/4K3").unwrap();
        assert_eq!(evaluate_board(&mirrored), PAWN_VALUE - QUEEN_VALUE);
    }
}
