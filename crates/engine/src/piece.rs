use crate::conditions::MoveCondition;
use crate::types::{Coordinate, PieceColor, PieceType};

/// One entry of a piece's movement pattern: an offset, whether the
/// offset repeats until blocked, and the conditions tried at each
/// candidate square (in declared order, first match wins).
#[derive(Debug, Clone, Copy)]
pub struct PieceMove {
    pub row_offset: i8,
    pub column_offset: i8,
    pub sliding: bool,
    pub conditions: &'static [MoveCondition],
}

const fn step(row_offset: i8, column_offset: i8, conditions: &'static [MoveCondition]) -> PieceMove {
    PieceMove {
        row_offset,
        column_offset,
        sliding: false,
        conditions,
    }
}

const fn slide(row_offset: i8, column_offset: i8) -> PieceMove {
    PieceMove {
        row_offset,
        column_offset,
        sliding: true,
        conditions: MOVE_OR_CAPTURE,
    }
}

const MOVE_OR_CAPTURE: &[MoveCondition] = &[MoveCondition::SimpleMove, MoveCondition::SimpleCapture];
const PAWN_ADVANCE: &[MoveCondition] = &[MoveCondition::PawnAdvance];
const PAWN_CAPTURE: &[MoveCondition] = &[MoveCondition::PawnCapture];
const PAWN_DOUBLE_STEP: &[MoveCondition] = &[MoveCondition::PawnDoubleStep];
const EN_PASSANT: &[MoveCondition] = &[MoveCondition::EnPassant];

// Movement patterns are fixed per (kind, color) and shared by every
// piece copy; they are never mutated after construction.

const KING_PATTERN: &[PieceMove] = &[
    step(1, 0, MOVE_OR_CAPTURE),
    step(1, 1, MOVE_OR_CAPTURE),
    step(0, 1, MOVE_OR_CAPTURE),
    step(-1, 1, MOVE_OR_CAPTURE),
    step(-1, 0, MOVE_OR_CAPTURE),
    step(-1, -1, MOVE_OR_CAPTURE),
    step(0, -1, MOVE_OR_CAPTURE),
    step(1, -1, MOVE_OR_CAPTURE),
    step(0, 2, &[MoveCondition::CastleKingSide]),
    step(0, -2, &[MoveCondition::CastleQueenSide]),
];

const QUEEN_PATTERN: &[PieceMove] = &[
    slide(1, 0),
    slide(1, 1),
    slide(0, 1),
    slide(-1, 1),
    slide(-1, 0),
    slide(-1, -1),
    slide(0, -1),
    slide(1, -1),
];

const ROOK_PATTERN: &[PieceMove] = &[slide(1, 0), slide(0, 1), slide(-1, 0), slide(0, -1)];

const BISHOP_PATTERN: &[PieceMove] = &[slide(1, 1), slide(-1, 1), slide(-1, -1), slide(1, -1)];

const KNIGHT_PATTERN: &[PieceMove] = &[
    step(2, 1, MOVE_OR_CAPTURE),
    step(1, 2, MOVE_OR_CAPTURE),
    step(-1, 2, MOVE_OR_CAPTURE),
    step(-2, 1, MOVE_OR_CAPTURE),
    step(-2, -1, MOVE_OR_CAPTURE),
    step(-1, -2, MOVE_OR_CAPTURE),
    step(1, -2, MOVE_OR_CAPTURE),
    step(2, -1, MOVE_OR_CAPTURE),
];

const WHITE_PAWN_PATTERN: &[PieceMove] = &[
    step(1, 0, PAWN_ADVANCE),
    step(1, 1, PAWN_CAPTURE),
    step(1, -1, PAWN_CAPTURE),
    step(2, 0, PAWN_DOUBLE_STEP),
    step(1, 1, EN_PASSANT),
    step(1, -1, EN_PASSANT),
];

const BLACK_PAWN_PATTERN: &[PieceMove] = &[
    step(-1, 0, PAWN_ADVANCE),
    step(-1, 1, PAWN_CAPTURE),
    step(-1, -1, PAWN_CAPTURE),
    step(-2, 0, PAWN_DOUBLE_STEP),
    step(-1, 1, EN_PASSANT),
    step(-1, -1, EN_PASSANT),
];

/// Piece types a pawn may promote into, in enumeration order.
const PAWN_PROMOTIONS: &[PieceType] = &[
    PieceType::Queen,
    PieceType::Knight,
    PieceType::Rook,
    PieceType::Bishop,
];

/// A piece on the board. Plain value: boards hold copies, never
/// shared references.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Piece {
    pub kind: PieceType,
    pub color: PieceColor,
    pub position: Coordinate,
    pub has_moved: bool,
    /// Rooks only: whether this rook started on the king-side file.
    /// Fixed at construction, consulted by the castling conditions.
    pub king_side: bool,
}

impl Piece {
    pub fn new(kind: PieceType, color: PieceColor, position: Coordinate) -> Self {
        Self::with_moved(kind, color, position, false)
    }

    pub fn with_moved(kind: PieceType, color: PieceColor, position: Coordinate, has_moved: bool) -> Self {
        let king_side = kind == PieceType::Rook
            && position.column == 7
            && (position.row == 0 || position.row == 7);

        Self {
            kind,
            color,
            position,
            has_moved,
            king_side,
        }
    }

    pub fn move_pattern(&self) -> &'static [PieceMove] {
        match (self.kind, self.color) {
            (PieceType::King, _) => KING_PATTERN,
            (PieceType::Queen, _) => QUEEN_PATTERN,
            (PieceType::Rook, _) => ROOK_PATTERN,
            (PieceType::Bishop, _) => BISHOP_PATTERN,
            (PieceType::Knight, _) => KNIGHT_PATTERN,
            (PieceType::Pawn, PieceColor::White) => WHITE_PAWN_PATTERN,
            (PieceType::Pawn, PieceColor::Black) => BLACK_PAWN_PATTERN,
        }
    }

    /// The piece types this piece may promote into (empty for
    /// everything but pawns).
    pub fn promotions(&self) -> &'static [PieceType] {
        match self.kind {
            PieceType::Pawn => PAWN_PROMOTIONS,
            _ => &[],
        }
    }

    /// The replacement piece a promotion produces: same square, same
    /// color, same has-moved flag, new kind.
    pub fn promoted(&self, kind: PieceType) -> Self {
        Self::with_moved(kind, self.color, self.position, self.has_moved)
    }

    pub fn is_king_side(&self) -> bool {
        self.king_side
    }

    pub fn is_queen_side(&self) -> bool {
        !self.king_side
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rook_side_flags_come_from_the_starting_square() {
        let h1 = Piece::new(PieceType::Rook, PieceColor::White, Coordinate::new(0, 7));
        let a8 = Piece::new(PieceType::Rook, PieceColor::Black, Coordinate::new(7, 0));

        assert!(h1.is_king_side());
        assert!(a8.is_queen_side());

        // Only rooks carry the flag
        let king = Piece::new(PieceType::King, PieceColor::White, Coordinate::new(0, 7));
        assert!(!king.king_side);
    }

    #[test]
    fn pawn_patterns_depend_on_color() {
        let white = Piece::new(PieceType::Pawn, PieceColor::White, Coordinate::new(1, 0));
        let black = Piece::new(PieceType::Pawn, PieceColor::Black, Coordinate::new(6, 0));

        assert_eq!(white.move_pattern()[0].row_offset, 1);
        assert_eq!(black.move_pattern()[0].row_offset, -1);
        assert_eq!(white.move_pattern().len(), 6);
    }

    #[test]
    fn promotion_keeps_square_and_moved_flag() {
        let mut pawn = Piece::new(PieceType::Pawn, PieceColor::White, Coordinate::new(6, 3));
        pawn.has_moved = true;

        let queen = pawn.promoted(PieceType::Queen);
        assert_eq!(queen.kind, PieceType::Queen);
        assert_eq!(queen.position, pawn.position);
        assert!(queen.has_moved);
    }

    #[test]
    fn equality_is_structural() {
        let a = Piece::new(PieceType::Knight, PieceColor::White, Coordinate::new(0, 1));
        let b = Piece::new(PieceType::Knight, PieceColor::White, Coordinate::new(0, 1));
        let mut c = b;
        c.has_moved = true;

        assert_eq!(a, b);
        assert_ne!(a, c);
    }
}
