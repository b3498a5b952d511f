//! Board model: a flat 64-square grid of optional pieces.
//!
//! The board is `Copy`; every engine operation that "changes" it returns a new
//! value and leaves its input untouched.

use std::fmt;

use crate::game_state::chess_rules::{back_rank_row, pawn_start_row, BACK_RANK_ORDER};
use crate::game_state::chess_types::{Piece, PieceKind, Player, Square};

#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Board {
    squares: [Option<Piece>; 64],
}

impl Board {
    pub const fn empty() -> Self {
        Self {
            squares: [None; 64],
        }
    }

    /// Standard starting position: pawns on rows 1/6, back ranks on rows 0/7.
    pub fn new_game() -> Self {
        let mut board = Self::empty();
        for player in Player::ALL {
            let back = back_rank_row(player);
            let pawns = pawn_start_row(player);
            for (col, kind) in (0u8..).zip(BACK_RANK_ORDER) {
                board.place(back, col, Piece::new(kind, player));
                board.place(pawns, col, Piece::new(PieceKind::Pawn, player));
            }
        }
        board
    }

    fn place(&mut self, row: u8, col: u8, piece: Piece) {
        if let Some(square) = Square::new(row, col) {
            self.squares[square.index()] = Some(piece);
        }
    }

    #[inline]
    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        self.squares[square.index()]
    }

    #[inline]
    pub fn is_empty(&self, square: Square) -> bool {
        self.squares[square.index()].is_none()
    }

    /// Copy of this board with `square` set to `piece`.
    pub fn with_piece(mut self, square: Square, piece: Piece) -> Self {
        self.squares[square.index()] = Some(piece);
        self
    }

    /// Copy of this board with `square` emptied.
    pub fn without_piece(mut self, square: Square) -> Self {
        self.squares[square.index()] = None;
        self
    }

    pub(crate) fn set(&mut self, square: Square, piece: Option<Piece>) {
        self.squares[square.index()] = piece;
    }

    pub(crate) fn take(&mut self, square: Square) -> Option<Piece> {
        self.squares[square.index()].take()
    }

    /// Location of `player`'s king, if it is on the board.
    pub fn find_king(&self, player: Player) -> Option<Square> {
        self.pieces()
            .find(|(_, piece)| piece.kind == PieceKind::King && piece.player == player)
            .map(|(square, _)| square)
    }

    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(|square| self.piece_at(square).map(|piece| (square, piece)))
    }

    pub fn pieces_of(&self, player: Player) -> impl Iterator<Item = (Square, Piece)> + '_ {
        self.pieces().filter(move |(_, piece)| piece.player == player)
    }

    pub fn occupied_count(&self) -> usize {
        self.squares.iter().filter(|sq| sq.is_some()).count()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new_game()
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.pieces()).finish()
    }
}
