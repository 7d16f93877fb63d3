use crate::board::Board;
use crate::piece::Piece;
use crate::types::{Coordinate, PieceColor, PieceType, COLUMN_COUNT, ROW_COUNT};

/// The usual starting position.
pub const START_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

/// "Kiwipete", the classic move-generation stress position.
pub const KIWIPETE_FEN: &str = "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq -";

/// Decodes the piece-placement field of a fen string into pieces in
/// reading order (rank 8 first, a-file to h-file). Only the first
/// whitespace-separated field is consulted; every decoded piece
/// starts with its has-moved flag cleared.
pub fn decode(fen: &str) -> Result<Vec<Piece>, String> {
    let placement = fen
        .split_whitespace()
        .next()
        .ok_or_else(|| "empty fen string".to_string())?;

    let mut pieces = Vec::new();
    let mut row: i8 = ROW_COUNT - 1;
    let mut column: i8 = 0;

    for symbol in placement.chars() {
        if symbol == '/' {
            row -= 1;
            column = 0;
            continue;
        }

        if let Some(skip) = symbol.to_digit(10) {
            column += skip as i8;
            continue;
        }

        let color = if symbol.is_ascii_uppercase() {
            PieceColor::White
        } else {
            PieceColor::Black
        };

        let kind = match symbol.to_ascii_lowercase() {
            'k' => PieceType::King,
            'q' => PieceType::Queen,
            'r' => PieceType::Rook,
            'b' => PieceType::Bishop,
            'n' => PieceType::Knight,
            'p' => PieceType::Pawn,
            other => return Err(format!("unknown fen symbol '{}'", other)),
        };

        if row < 0 || column >= COLUMN_COUNT {
            return Err(format!("fen placement overflows the board at '{}'", symbol));
        }

        pieces.push(Piece::new(kind, color, Coordinate::new(row, column)));
        column += 1;
    }

    Ok(pieces)
}

/// Encodes a board's layout back into a piece-placement field, for
/// display and debugging.
pub fn encode(board: &Board) -> String {
    let mut fen = String::new();

    for row in (0..ROW_COUNT).rev() {
        let mut empty_run = 0;

        for column in 0..COLUMN_COUNT {
            match board.piece_at(Coordinate::new(row, column)) {
                Some(piece) => {
                    if empty_run != 0 {
                        fen.push_str(&empty_run.to_string());
                        empty_run = 0;
                    }
                    fen.push(symbol(piece));
                }
                None => empty_run += 1,
            }
        }

        if empty_run != 0 {
            fen.push_str(&empty_run.to_string());
        }

        if row != 0 {
            fen.push('/');
        }
    }

    fen
}

/// Fen letter for a piece, upper case for White.
pub fn symbol(piece: &Piece) -> char {
    let symbol = match piece.kind {
        PieceType::King => 'k',
        PieceType::Queen => 'q',
        PieceType::Rook => 'r',
        PieceType::Bishop => 'b',
        PieceType::Knight => 'n',
        PieceType::Pawn => 'p',
    };

    match piece.color {
        PieceColor::White => symbol.to_ascii_uppercase(),
        PieceColor::Black => symbol,
    }
}
