use std::fmt;

use crate::piece::Piece;
use crate::types::{Coordinate, PieceType};

/// Promotion metadata carried by a pawn move that reaches the last
/// row. The chosen type starts unset and is filled in either by move
/// fragmentation during generation or by the caller before the move
/// is applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Promotion {
    /// Type of the piece before promoting (a pawn in practice).
    pub piece_type: PieceType,
    pub promoted_to: Option<PieceType>,
}

/// One ply, fixed at construction apart from the promotion choice and
/// the first-move flag the board fills in at apply time.
#[derive(Debug, Clone)]
pub struct Move {
    pub from: Coordinate,
    pub to: Coordinate,
    pub row_offset: i8,
    pub column_offset: i8,
    captured: Vec<Piece>,
    triggered: Vec<Move>,
    promotion: Option<Promotion>,
    /// Whether applying this move was the mover's first move ever.
    /// Set by `Board::apply_move` on the history record, consulted by
    /// undo and by the en-passant condition.
    pub is_first_move: bool,
}

impl Move {
    pub fn new(from: Coordinate, to: Coordinate) -> Self {
        Self {
            from,
            to,
            row_offset: to.row - from.row,
            column_offset: to.column - from.column,
            captured: Vec::new(),
            triggered: Vec::new(),
            promotion: None,
            is_first_move: false,
        }
    }

    /// A move that captures the given piece. The captured piece keeps
    /// its own square, which for en passant is not the destination.
    pub fn capture(from: Coordinate, to: Coordinate, captured: Piece) -> Self {
        Self {
            captured: vec![captured],
            ..Self::new(from, to)
        }
    }

    /// A move that drags a secondary move along with it (the rook
    /// relocation of a castle).
    pub fn trigger(from: Coordinate, to: Coordinate, triggered: Move) -> Self {
        Self {
            triggered: vec![triggered],
            ..Self::new(from, to)
        }
    }

    /// A promoting move with the choice of replacement still open.
    pub fn promotion(from: Coordinate, to: Coordinate, piece_type: PieceType) -> Self {
        Self {
            promotion: Some(Promotion {
                piece_type,
                promoted_to: None,
            }),
            ..Self::new(from, to)
        }
    }

    /// A promoting move that also captures.
    pub fn promotion_capture(
        from: Coordinate,
        to: Coordinate,
        piece_type: PieceType,
        captured: Piece,
    ) -> Self {
        Self {
            captured: vec![captured],
            ..Self::promotion(from, to, piece_type)
        }
    }

    pub fn is_capture(&self) -> bool {
        !self.captured.is_empty()
    }

    pub fn captured_pieces(&self) -> &[Piece] {
        &self.captured
    }

    pub fn is_move_trigger(&self) -> bool {
        !self.triggered.is_empty()
    }

    pub fn triggered_moves(&self) -> &[Move] {
        &self.triggered
    }

    pub fn is_promotion(&self) -> bool {
        self.promotion.is_some()
    }

    /// Type of the piece before promotion, if this is a promoting move.
    pub fn piece_type(&self) -> Option<PieceType> {
        self.promotion.map(|p| p.piece_type)
    }

    pub fn promoted_piece_type(&self) -> Option<PieceType> {
        self.promotion.and_then(|p| p.promoted_to)
    }

    pub fn set_promoted_piece_type(&mut self, kind: PieceType) {
        if let Some(promotion) = &mut self.promotion {
            promotion.promoted_to = Some(kind);
        }
    }

    /// Copy of this move with the promotion choice filled in, used
    /// when fragmenting one promoting move into one move per choice.
    pub fn with_promotion_choice(&self, kind: PieceType) -> Self {
        let mut copy = self.clone();
        copy.set_promoted_piece_type(kind);
        copy
    }
}

/// Two moves are equal when endpoints, capture set, triggered set and
/// promotion choice all match. Offsets are derived and the first-move
/// flag is apply-time bookkeeping, so neither takes part.
impl PartialEq for Move {
    fn eq(&self, other: &Self) -> bool {
        if self.from != other.from || self.to != other.to {
            return false;
        }

        if self.captured.len() != other.captured.len()
            || !self.captured.iter().all(|p| other.captured.contains(p))
        {
            return false;
        }

        if self.triggered.len() != other.triggered.len()
            || !self.triggered.iter().all(|m| other.triggered.contains(m))
        {
            return false;
        }

        self.is_promotion() == other.is_promotion()
            && self.promoted_piece_type() == other.promoted_piece_type()
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)?;

        if let Some(kind) = self.promoted_piece_type() {
            let symbol = match kind {
                PieceType::Queen => 'q',
                PieceType::Rook => 'r',
                PieceType::Bishop => 'b',
                PieceType::Knight => 'n',
                PieceType::King => 'k',
                PieceType::Pawn => 'p',
            };
            write!(f, "{}", symbol)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::PieceColor;

    fn pawn_at(row: i8, column: i8) -> Piece {
        Piece::new(PieceType::Pawn, PieceColor::Black, Coordinate::new(row, column))
    }

    #[test]
    fn offsets_are_derived_from_endpoints() {
        let mv = Move::new(Coordinate::new(1, 4), Coordinate::new(3, 4));
        assert_eq!(mv.row_offset, 2);
        assert_eq!(mv.column_offset, 0);
    }

    #[test]
    fn equality_ignores_first_move_flag() {
        let a = Move::new(Coordinate::new(0, 1), Coordinate::new(2, 2));
        let mut b = a.clone();
        b.is_first_move = true;

        assert_eq!(a, b);
    }

    #[test]
    fn equality_compares_capture_sets() {
        let from = Coordinate::new(3, 4);
        let to = Coordinate::new(4, 3);

        let plain = Move::new(from, to);
        let capturing = Move::capture(from, to, pawn_at(4, 3));

        assert_ne!(plain, capturing);
        assert_eq!(capturing, Move::capture(from, to, pawn_at(4, 3)));
        assert_ne!(capturing, Move::capture(from, to, pawn_at(3, 3)));
    }

    #[test]
    fn equality_compares_promotion_choice() {
        let base = Move::promotion(Coordinate::new(6, 0), Coordinate::new(7, 0), PieceType::Pawn);

        let queen = base.with_promotion_choice(PieceType::Queen);
        let knight = base.with_promotion_choice(PieceType::Knight);

        assert_ne!(queen, knight);
        assert_eq!(queen, base.with_promotion_choice(PieceType::Queen));
        assert_ne!(base, queen);
    }

    #[test]
    fn display_appends_promotion_symbol() {
        let mv = Move::promotion(Coordinate::new(6, 4), Coordinate::new(7, 4), PieceType::Pawn)
            .with_promotion_choice(PieceType::Queen);
        assert_eq!(mv.to_string(), "e7e8q");

        let plain = Move::new(Coordinate::new(1, 4), Coordinate::new(3, 4));
        assert_eq!(plain.to_string(), "e2e4");
    }
}
