use crate::board::Board;
use crate::moves::Move;
use crate::piece::Piece;
use crate::types::{Coordinate, PieceColor, PieceType};

/// The closed set of conditions a movement template can carry. Each
/// condition knows how to test itself against a board (occupancy and
/// geometry only) and how to build the resulting move once it holds.
///
/// `test_legal` additionally rules out moves that leave the mover's
/// own king attacked; only the castling variants override the default
/// simulate-and-check behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveCondition {
    /// Destination square is empty.
    SimpleMove,
    /// A piece of the opposite color sits on the destination square.
    SimpleCapture,
    /// Pawn forward step; recognizes the promotion row.
    PawnAdvance,
    /// Pawn diagonal capture; recognizes the promotion row.
    PawnCapture,
    /// Two squares forward from the pawn's starting square, both the
    /// skipped and the destination square empty.
    PawnDoubleStep,
    /// Capture of a pawn that just double-stepped past this one.
    EnPassant,
    CastleKingSide,
    CastleQueenSide,
}

impl MoveCondition {
    /// Occupancy/geometry test, ignorant of king safety.
    pub fn test_pseudo_legal(&self, board: &Board, piece: &Piece, to: Coordinate) -> bool {
        match self {
            MoveCondition::SimpleMove | MoveCondition::PawnAdvance => board.is_square_empty(to),

            MoveCondition::SimpleCapture | MoveCondition::PawnCapture => {
                board.is_color_at(to, piece.color.opposite())
            }

            MoveCondition::PawnDoubleStep => {
                let skipped = piece.position.offset(piece.color.forward(), 0);

                board.is_square_empty(skipped) && board.is_square_empty(to) && !piece.has_moved
            }

            MoveCondition::EnPassant => {
                let last_move = match board.last_move() {
                    Some(mv) => mv,
                    None => return false,
                };

                // The pawn being captured stands beside the mover, on
                // the file of the destination square.
                let beside = Coordinate::new(piece.position.row, to.column);
                let neighbour = match board.piece_at(beside) {
                    Some(p) => p,
                    None => return false,
                };

                let en_passant_row = match piece.color {
                    PieceColor::White => 4,
                    PieceColor::Black => 3,
                };

                piece.position.row == en_passant_row
                    && board.is_square_empty(to)
                    && neighbour.kind == PieceType::Pawn
                    && last_move.to == beside
                    && last_move.is_first_move
            }

            MoveCondition::CastleKingSide => {
                let rook = match board.find_piece(|p| {
                    p.kind == PieceType::Rook && p.color == piece.color && p.is_king_side()
                }) {
                    Some(rook) => rook,
                    // Rook already captured, no castle this side
                    None => return false,
                };

                if piece.has_moved || rook.has_moved {
                    return false;
                }

                let next_to_king = piece.position.offset(0, 1);
                let next_to_rook = rook.position.offset(0, -1);

                board.is_square_empty(next_to_king) && board.is_square_empty(next_to_rook)
            }

            MoveCondition::CastleQueenSide => {
                let rook = match board.find_piece(|p| {
                    p.kind == PieceType::Rook && p.color == piece.color && p.is_queen_side()
                }) {
                    Some(rook) => rook,
                    None => return false,
                };

                if piece.has_moved || rook.has_moved {
                    return false;
                }

                let next_to_king = piece.position.offset(0, -1);
                let next_to_rook = rook.position.offset(0, 1);
                let middle = piece.position.offset(0, -2);

                board.is_square_empty(next_to_king)
                    && board.is_square_empty(next_to_rook)
                    && board.is_square_empty(middle)
            }
        }
    }

    /// Builds the move for this condition. Only meaningful once
    /// `test_pseudo_legal` has passed for the same square.
    pub fn build_move(&self, board: &Board, piece: &Piece, to: Coordinate) -> Move {
        match self {
            MoveCondition::SimpleMove | MoveCondition::PawnDoubleStep => {
                Move::new(piece.position, to)
            }

            MoveCondition::SimpleCapture => {
                let captured = board
                    .piece_at(to)
                    .copied()
                    .expect("capture condition held, so the destination is occupied");
                Move::capture(piece.position, to, captured)
            }

            MoveCondition::PawnAdvance => {
                if on_promotion_row(piece) {
                    Move::promotion(piece.position, to, PieceType::Pawn)
                } else {
                    Move::new(piece.position, to)
                }
            }

            MoveCondition::PawnCapture => {
                let captured = board
                    .piece_at(to)
                    .copied()
                    .expect("capture condition held, so the destination is occupied");

                if on_promotion_row(piece) {
                    Move::promotion_capture(piece.position, to, PieceType::Pawn, captured)
                } else {
                    Move::capture(piece.position, to, captured)
                }
            }

            MoveCondition::EnPassant => {
                let beside = Coordinate::new(piece.position.row, to.column);
                let captured = board
                    .piece_at(beside)
                    .copied()
                    .expect("en-passant condition held, so the neighbour square is occupied");
                Move::capture(piece.position, to, captured)
            }

            MoveCondition::CastleKingSide => {
                let row = piece.position.row;
                let rook_move = Move::new(Coordinate::new(row, 7), Coordinate::new(row, 5));
                Move::trigger(piece.position, to, rook_move)
            }

            MoveCondition::CastleQueenSide => {
                let row = piece.position.row;
                let rook_move = Move::new(Coordinate::new(row, 0), Coordinate::new(row, 3));
                Move::trigger(piece.position, to, rook_move)
            }
        }
    }

    /// True when the move does not leave the mover's king attacked.
    ///
    /// The default simulates the move on a throwaway board copy and
    /// checks the king's square afterwards. Castling instead requires
    /// the king's start, transit and destination squares to all be
    /// safe on the current board, which also covers the destination
    /// the simulation would have checked.
    pub fn test_legal(&self, board: &Board, piece: &Piece, mv: &Move) -> bool {
        match self {
            MoveCondition::CastleKingSide => {
                let row = piece.position.row;
                !board.squares_attacked(
                    piece.color.opposite(),
                    &[
                        Coordinate::new(row, 5),
                        Coordinate::new(row, 6),
                        piece.position,
                    ],
                )
            }

            MoveCondition::CastleQueenSide => {
                let row = piece.position.row;
                !board.squares_attacked(
                    piece.color.opposite(),
                    &[
                        Coordinate::new(row, 3),
                        Coordinate::new(row, 2),
                        piece.position,
                    ],
                )
            }

            _ => {
                let mut copy = board.get_copy();
                copy.apply_move(mv);

                let king = copy
                    .find_piece(|p| p.kind == PieceType::King && p.color == piece.color)
                    .expect("a legal position holds exactly one king per color");

                !copy.squares_attacked(king.color.opposite(), &[king.position])
            }
        }
    }
}

/// A pawn one step short of the last row promotes when it moves.
fn on_promotion_row(piece: &Piece) -> bool {
    match piece.color {
        PieceColor::White => piece.position.row == 6,
        PieceColor::Black => piece.position.row == 1,
    }
}
