use engine::{Move, PieceType};

// Material value of each piece
pub const KING_VALUE: i32 = 1000;
pub const QUEEN_VALUE: i32 = 900;
pub const ROOK_VALUE: i32 = 500;
pub const BISHOP_VALUE: i32 = 300;
pub const KNIGHT_VALUE: i32 = 300;
pub const PAWN_VALUE: i32 = 100;

/// Score bounds; a side with no legal moves scores one of these.
pub const MAX: i32 = i32::MAX;
pub const MIN: i32 = i32::MIN;

pub fn piece_value(kind: PieceType) -> i32 {
    match kind {
        PieceType::King => KING_VALUE,
        PieceType::Queen => QUEEN_VALUE,
        PieceType::Rook => ROOK_VALUE,
        PieceType::Bishop => BISHOP_VALUE,
        PieceType::Knight => KNIGHT_VALUE,
        PieceType::Pawn => PAWN_VALUE,
    }
}

/// Outcome of a best-move search.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchResult {
    pub best_move: Option<Move>,
    pub score: i32,
    pub depth: u32,
}
