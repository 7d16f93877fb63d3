use crate::board::Board;
use crate::moves::Move;
use crate::piece::Piece;
use crate::types::PieceColor;

/// Walks a piece's movement templates against the board and collects
/// the moves whose conditions hold.
///
/// For each template the candidate square starts at the piece and
/// repeatedly adds the template's offset; walking stops at the board
/// edge, after one step for non-sliding templates, and at the first
/// occupied square for sliding ones (a capture of it included). At
/// each candidate the template's conditions are tried in order and
/// the first passing one supplies the move.
///
/// With `check_legality` set, moves that leave the mover's own king
/// attacked are dropped (a dropped move falls through to the
/// template's next condition). With `fragment_promotions` set, a
/// promoting move is replaced by one copy per promotion choice.
pub fn generate_piece_moves(
    piece: Piece,
    board: &Board,
    check_legality: bool,
    fragment_promotions: bool,
) -> Vec<Move> {
    let mut moves = Vec::new();

    for template in piece.move_pattern() {
        let mut candidate = piece.position;

        loop {
            candidate = candidate.offset(template.row_offset, template.column_offset);

            if board.is_out_of_bounds(candidate) {
                break;
            }

            for condition in template.conditions {
                if !condition.test_pseudo_legal(board, &piece, candidate) {
                    continue;
                }

                let mv = condition.build_move(board, &piece, candidate);

                if check_legality && !condition.test_legal(board, &piece, &mv) {
                    continue;
                }

                if mv.is_promotion() && fragment_promotions {
                    for &kind in piece.promotions() {
                        moves.push(mv.with_promotion_choice(kind));
                    }
                } else {
                    moves.push(mv);
                }

                break;
            }

            if !template.sliding || !board.is_square_empty(candidate) {
                break;
            }
        }
    }

    moves
}

/// Union of `generate_piece_moves` over every live piece of a color,
/// in the piece list's insertion order.
pub fn generate_color_moves(
    color: PieceColor,
    board: &Board,
    check_legality: bool,
    fragment_promotions: bool,
) -> Vec<Move> {
    let mut moves = Vec::new();

    for piece in board.all_pieces() {
        if piece.color == color {
            moves.extend(generate_piece_moves(
                *piece,
                board,
                check_legality,
                fragment_promotions,
            ));
        }
    }

    moves
}
