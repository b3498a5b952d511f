//! Value types shared by every subsystem: players, nominal piece kinds,
//! movement roles, squares and castling rights.

use std::fmt;

/// Side owning a piece. White starts on rows 6/7 and moves toward row 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Player {
    White,
    Black,
}

impl Player {
    pub const ALL: [Player; 2] = [Player::White, Player::Black];

    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Player::White => 0,
            Player::Black => 1,
        }
    }

    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Player::White => Player::Black,
            Player::Black => Player::White,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Player::White => write!(f, "white"),
            Player::Black => write!(f, "black"),
        }
    }
}

/// Nominal identity of a piece. Fixed for the life of the piece except when a
/// pawn-role piece promotes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceKind {
    pub const ALL: [PieceKind; 6] = [
        PieceKind::Pawn,
        PieceKind::Knight,
        PieceKind::Bishop,
        PieceKind::Rook,
        PieceKind::Queen,
        PieceKind::King,
    ];

    #[inline]
    pub const fn index(self) -> usize {
        match self {
            PieceKind::Pawn => 0,
            PieceKind::Knight => 1,
            PieceKind::Bishop => 2,
            PieceKind::Rook => 3,
            PieceKind::Queen => 4,
            PieceKind::King => 5,
        }
    }
}

/// Movement behavior a piece exhibits on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl Role {
    /// The five roles shuffled among the non-king kinds.
    pub const NON_KING: [Role; 5] = [
        Role::Pawn,
        Role::Knight,
        Role::Bishop,
        Role::Rook,
        Role::Queen,
    ];

    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Role::Pawn => 0,
            Role::Knight => 1,
            Role::Bishop => 2,
            Role::Rook => 3,
            Role::Queen => 4,
            Role::King => 5,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub kind: PieceKind,
    pub player: Player,
}

impl Piece {
    #[inline]
    pub const fn new(kind: PieceKind, player: Player) -> Self {
        Self { kind, player }
    }
}

/// A square on the 8x8 board, addressed by `row` (0 = black's back rank) and
/// `col` (0 = queen-side corner). Always in range: every constructor checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Square(u8);

impl Square {
    #[inline]
    pub const fn new(row: u8, col: u8) -> Option<Self> {
        if row < 8 && col < 8 {
            Some(Self(row * 8 + col))
        } else {
            None
        }
    }

    #[inline]
    pub const fn from_index(index: u8) -> Option<Self> {
        if index < 64 {
            Some(Self(index))
        } else {
            None
        }
    }

    #[inline]
    pub const fn row(self) -> u8 {
        self.0 / 8
    }

    #[inline]
    pub const fn col(self) -> u8 {
        self.0 % 8
    }

    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Square reached by stepping `(d_row, d_col)`, or `None` off the board.
    #[inline]
    pub const fn offset(self, d_row: i8, d_col: i8) -> Option<Self> {
        let row = self.row() as i8 + d_row;
        let col = self.col() as i8 + d_col;
        if row < 0 || row > 7 || col < 0 || col > 7 {
            None
        } else {
            Some(Self((row as u8) * 8 + col as u8))
        }
    }

    pub fn all() -> impl Iterator<Item = Square> {
        (0u8..64).map(Square)
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row(), self.col())
    }
}

/// Castling permissions for one player.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CastlingSides {
    pub king_side: bool,
    pub queen_side: bool,
}

/// Castling permissions for both players. Flags are only ever cleared.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CastlingRights {
    sides: [CastlingSides; 2],
}

impl CastlingRights {
    pub const fn full() -> Self {
        let all = CastlingSides {
            king_side: true,
            queen_side: true,
        };
        Self { sides: [all; 2] }
    }

    pub const fn none() -> Self {
        let none = CastlingSides {
            king_side: false,
            queen_side: false,
        };
        Self { sides: [none; 2] }
    }

    #[inline]
    pub const fn for_player(&self, player: Player) -> CastlingSides {
        self.sides[player.index()]
    }

    #[inline]
    pub fn clear_king_side(&mut self, player: Player) {
        self.sides[player.index()].king_side = false;
    }

    #[inline]
    pub fn clear_queen_side(&mut self, player: Player) {
        self.sides[player.index()].queen_side = false;
    }

    #[inline]
    pub fn clear_all(&mut self, player: Player) {
        self.clear_king_side(player);
        self.clear_queen_side(player);
    }
}

impl Default for CastlingRights {
    fn default() -> Self {
        Self::full()
    }
}
