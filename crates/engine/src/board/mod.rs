use crate::fen;
use crate::movegen::generate_color_moves;
use crate::moves::Move;
use crate::piece::Piece;
use crate::types::{Coordinate, PieceColor, PieceType, COLUMN_COUNT, ROW_COUNT};

pub mod state;

/// The board: an 8x8 layout grid kept in lock-step with a flat list
/// of live pieces, plus the history of applied moves.
///
/// Invariant: a square of `layout` holds piece P exactly when P is in
/// `pieces` and P's position is that square. The list keeps insertion
/// order, which is what move generation iterates in.
#[derive(Debug, Clone)]
pub struct Board {
    layout: [[Option<Piece>; COLUMN_COUNT as usize]; ROW_COUNT as usize],
    pieces: Vec<Piece>,
    last_moves: Vec<Move>,
    // Captured pieces per capturing side, kept for display only
    captured_white: Vec<Piece>,
    captured_black: Vec<Piece>,
}

impl Board {
    /// Board at the usual starting position.
    pub fn new() -> Self {
        Self::from_fen(fen::START_FEN).expect("the start fen is well-formed")
    }

    pub fn from_fen(fen: &str) -> Result<Self, String> {
        Ok(Self::from_pieces(fen::decode(fen)?))
    }

    /// Board holding exactly the given pieces, empty history.
    pub fn from_pieces(pieces: Vec<Piece>) -> Self {
        let mut layout = [[None; COLUMN_COUNT as usize]; ROW_COUNT as usize];

        for piece in &pieces {
            layout[piece.position.row as usize][piece.position.column as usize] = Some(*piece);
        }

        Self {
            layout,
            pieces,
            last_moves: Vec::new(),
            captured_white: Vec::new(),
            captured_black: Vec::new(),
        }
    }

    pub fn to_fen(&self) -> String {
        fen::encode(self)
    }

    /// The piece at a square, None when empty or out of bounds.
    pub fn piece_at(&self, coordinate: Coordinate) -> Option<&Piece> {
        if self.is_out_of_bounds(coordinate) {
            return None;
        }

        self.layout[coordinate.row as usize][coordinate.column as usize].as_ref()
    }

    pub fn is_square_empty(&self, coordinate: Coordinate) -> bool {
        self.piece_at(coordinate).is_none()
    }

    /// Whether a piece of the given color stands on the square.
    pub fn is_color_at(&self, coordinate: Coordinate, color: PieceColor) -> bool {
        self.piece_at(coordinate).map_or(false, |p| p.color == color)
    }

    /// Whether a piece of the given type stands on the square.
    pub fn is_type_at(&self, coordinate: Coordinate, kind: PieceType) -> bool {
        self.piece_at(coordinate).map_or(false, |p| p.kind == kind)
    }

    pub fn is_out_of_bounds(&self, coordinate: Coordinate) -> bool {
        coordinate.row >= ROW_COUNT
            || coordinate.row < 0
            || coordinate.column >= COLUMN_COUNT
            || coordinate.column < 0
    }

    /// Whether any of the given squares is reached by one of
    /// `by_color`'s pseudo-legal moves.
    ///
    /// Generation here must stay pseudo-legal: the legality filter
    /// calls back into this query, so filtering the opponent's moves
    /// for legality too would recurse forever.
    pub fn squares_attacked(&self, by_color: PieceColor, squares: &[Coordinate]) -> bool {
        let opponent_moves = generate_color_moves(by_color, self, false, true);

        opponent_moves
            .iter()
            .any(|mv| squares.iter().any(|square| mv.to == *square))
    }

    /// Whether the given color's king is currently attacked.
    pub fn is_color_in_check(&self, color: PieceColor) -> bool {
        self.find_piece(|p| p.kind == PieceType::King && p.color == color)
            .map_or(false, |king| {
                self.squares_attacked(color.opposite(), &[king.position])
            })
    }

    /// First live piece satisfying the predicate, in insertion order.
    pub fn find_piece(&self, checker: impl Fn(&Piece) -> bool) -> Option<&Piece> {
        self.pieces.iter().find(|piece| checker(piece))
    }

    pub fn all_pieces(&self) -> &[Piece] {
        &self.pieces
    }

    pub fn last_move(&self) -> Option<&Move> {
        self.last_moves.last()
    }

    pub fn captured_white_pieces(&self) -> &[Piece] {
        &self.captured_white
    }

    pub fn captured_black_pieces(&self) -> &[Piece] {
        &self.captured_black
    }

    /// Independent copy: fresh grid, fresh piece list, copied history.
    pub fn get_copy(&self) -> Self {
        self.clone()
    }

    /// Debugging dump: ranks 8 down to 1, fen symbols, `#` marking the
    /// square the last move left from.
    pub fn print_to_screen(&self) {
        println!();

        for row in (0..ROW_COUNT).rev() {
            print!("{}  ", row + 1);

            for column in 0..COLUMN_COUNT {
                let square = Coordinate::new(row, column);

                if self.last_move().map_or(false, |mv| mv.from == square) {
                    print!("#  ");
                } else {
                    match self.piece_at(square) {
                        Some(piece) => print!("{}  ", fen::symbol(piece)),
                        None => print!("-  "),
                    }
                }
            }
            println!();
        }

        print!("   ");
        for file in b'a'..=b'h' {
            print!("{}  ", file as char);
        }
        println!();
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

/// Boards are equal when their live-piece collections hold the same
/// structural pieces. History and captured-piece bookkeeping are
/// deliberately ignored.
impl PartialEq for Board {
    fn eq(&self, other: &Self) -> bool {
        self.pieces.len() == other.pieces.len()
            && self.pieces.iter().all(|piece| other.pieces.contains(piece))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn out_of_bounds_squares_are_absent_not_errors() {
        let board = Board::new();

        assert!(board.piece_at(Coordinate::new(-1, 0)).is_none());
        assert!(board.piece_at(Coordinate::new(0, 8)).is_none());
        assert!(board.is_square_empty(Coordinate::new(8, 8)));
        assert!(!board.is_color_at(Coordinate::new(-1, -1), PieceColor::White));
    }

    #[test]
    fn layout_and_piece_list_agree_at_start() {
        let board = Board::new();

        assert_eq!(board.all_pieces().len(), 32);
        for piece in board.all_pieces() {
            assert_eq!(board.piece_at(piece.position), Some(piece));
        }

        assert!(board.is_type_at(Coordinate::new(0, 4), PieceType::King));
        assert!(board.is_color_at(Coordinate::new(7, 4), PieceColor::Black));
    }

    #[test]
    fn equality_ignores_history_and_piece_order() {
        let a = Board::new();

        let mut reversed = fen::decode(fen::START_FEN).unwrap();
        reversed.reverse();
        let b = Board::from_pieces(reversed);

        assert_eq!(a, b);
        assert_ne!(a, Board::from_fen(fen::KIWIPETE_FEN).unwrap());
    }

    #[test]
    fn copies_are_independent(){
        let board = Board::new();
        let mut copy = board.get_copy();

        let e2e4 = Move::new(Coordinate::new(1, 4), Coordinate::new(3, 4));
        copy.apply_move(&e2e4);

        assert!(board.is_type_at(Coordinate::new(1, 4), PieceType::Pawn));
        assert!(copy.is_square_empty(Coordinate::new(1, 4)));
        assert_ne!(board, copy);
    }

    #[test]
    fn fresh_board_is_not_in_check() {
        let board = Board::new();
        assert!(!board.is_color_in_check(PieceColor::White));
        assert!(!board.is_color_in_check(PieceColor::Black));
    }

    #[test]
    fn a_rook_on_the_king_file_gives_check() {
        let board = Board::from_fen("4r1k1/8/8/8/8/8/8/4K3").unwrap();

        assert!(board.is_color_in_check(PieceColor::White));
        assert!(!board.is_color_in_check(PieceColor::Black));
    }

    #[test]
    fn back_rank_is_attacked_by_nothing_but_knights_at_start() {
        let board = Board::new();

        // Knights cover a3/c3/f3/h3
        assert!(board.squares_attacked(PieceColor::White, &[Coordinate::new(2, 0)]));
        // Nothing white reaches rank 5
        assert!(!board.squares_attacked(PieceColor::White, &[Coordinate::new(4, 0)]));
    }
}
