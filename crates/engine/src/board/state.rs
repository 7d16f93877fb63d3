use super::Board;
use crate::moves::Move;
use crate::piece::Piece;
use crate::types::{Coordinate, PieceColor};

impl Board {
    /// Applies a move: captured pieces leave the board, triggered
    /// moves (the castling rook relocation) apply first, a resolved
    /// promotion swaps the pawn for its replacement, then the mover
    /// relocates. The record pushed onto the history carries whether
    /// this was the mover's first move, which undo needs to restore
    /// the has-moved flag.
    pub fn apply_move(&mut self, mv: &Move) {
        let mut record = mv.clone();

        for captured in record.captured_pieces().to_vec() {
            self.remove_piece(&captured);

            match captured.color {
                PieceColor::White => self.captured_white.push(captured),
                PieceColor::Black => self.captured_black.push(captured),
            }
        }

        for triggered in record.triggered_moves().to_vec() {
            self.apply_move(&triggered);
        }

        let index = self
            .pieces
            .iter()
            .position(|piece| piece.position == record.from)
            .expect("a piece stands on the square the move starts from");

        if record.is_promotion() {
            if let Some(kind) = record.promoted_piece_type() {
                self.pieces[index] = self.pieces[index].promoted(kind);
            }
        }

        self.set_square(record.from, None);

        let piece = &mut self.pieces[index];
        piece.position = record.to;

        if !piece.has_moved {
            record.is_first_move = true;
        }
        piece.has_moved = true;

        let moved = *piece;
        self.set_square(record.to, Some(moved));

        self.last_moves.push(record);
    }

    /// Undoes the most recent move; does nothing on an empty history.
    /// Exact inverse of `apply_move` for everything board equality
    /// considers, over arbitrarily long apply/undo chains.
    pub fn undo_move(&mut self) {
        let record = match self.last_moves.pop() {
            Some(record) => record,
            None => return,
        };

        // Walk back: the mover now stands on the move's destination
        let from = record.to;
        let to = record.from;

        {
            let index = self
                .pieces
                .iter()
                .position(|piece| piece.position == from)
                .expect("the moved piece stands on the square the move ended on");

            if record.is_first_move {
                self.pieces[index].has_moved = false;
            }

            // A resolved promotion reverts to the piece it replaced
            if record.is_promotion() && record.promoted_piece_type().is_some() {
                if let Some(kind) = record.piece_type() {
                    let piece = self.pieces[index];
                    self.pieces[index] = Piece::with_moved(kind, piece.color, piece.position, piece.has_moved);
                }
            }
        }

        // Triggered moves sit above this one on the history, so they
        // unwind first (the rook walks back before the king)
        for _ in 0..record.triggered_moves().len() {
            self.undo_move();
        }

        let index = self
            .pieces
            .iter()
            .position(|piece| piece.position == from)
            .expect("the moved piece stands on the square the move ended on");

        self.set_square(from, None);
        self.pieces[index].position = to;
        let moved = self.pieces[index];
        self.set_square(to, Some(moved));

        for captured in record.captured_pieces() {
            self.pieces.push(*captured);
            self.set_square(captured.position, Some(*captured));
        }
    }

    fn set_square(&mut self, coordinate: Coordinate, piece: Option<Piece>) {
        self.layout[coordinate.row as usize][coordinate.column as usize] = piece;
    }

    fn remove_piece(&mut self, target: &Piece) {
        if let Some(index) = self.pieces.iter().position(|piece| piece == target) {
            self.pieces.remove(index);
        }

        self.set_square(target.position, None);
    }
}
