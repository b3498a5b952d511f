//! A single game from the first move to checkmate or stalemate.
//!
//! `Game` owns the current `GameState`, the game's random source and its
//! status. A presentation layer asks it for legal destinations when a piece is
//! selected and calls [`Game::play_move`] when a destination is chosen. Each
//! game is independent; run as many side by side as needed.

use std::error::Error;
use std::fmt;

use log::{debug, info};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::game_state::chess_types::{Piece, PieceKind, Player, Square};
use crate::game_state::game_config::GameConfig;
use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_apply::apply_move;
use crate::move_generation::legal_move_checks::attackers_to_square;
use crate::move_generation::legal_move_generator::{game_status, legal_moves, GameStatus};
use crate::roles::role_assignment::assign_roles;
use crate::roles::role_map::RoleMap;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveError {
    GameOver(GameStatus),
    EmptySquare(Square),
    NotYourPiece { square: Square, owner: Player },
    IllegalMove { from: Square, to: Square },
}

impl fmt::Display for MoveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveError::GameOver(status) => write!(f, "game is over: {status:?}"),
            MoveError::EmptySquare(square) => write!(f, "no piece on {square}"),
            MoveError::NotYourPiece { square, owner } => {
                write!(f, "piece on {square} belongs to {owner}")
            }
            MoveError::IllegalMove { from, to } => write!(f, "illegal move {from} -> {to}"),
        }
    }
}

impl Error for MoveError {}

/// What an accepted move did, for animation and status display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveRecord {
    pub player: Player,
    pub from: Square,
    pub to: Square,
    pub moved: Piece,
    pub captured: Option<Piece>,
    pub promoted_to: Option<PieceKind>,
    pub castled: bool,
    pub en_passant_capture: bool,
    /// Status for the opponent, who moves next.
    pub status: GameStatus,
}

pub struct Game<R = StdRng> {
    state: GameState,
    rng: R,
    status: GameStatus,
    ply: u32,
    last_move: Option<MoveRecord>,
}

impl Game<StdRng> {
    /// New game seeded from `config.seed`, or from the OS when unset.
    pub fn new(config: &GameConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Self::with_rng(rng, config)
    }
}

impl<R: Rng> Game<R> {
    pub fn with_rng(mut rng: R, config: &GameConfig) -> Self {
        let roles = if config.shuffle_roles {
            assign_roles(&mut rng)
        } else {
            RoleMap::standard()
        };
        Self::from_state(GameState::new_game(roles), rng)
    }

    /// Resumes play from an arbitrary position.
    pub fn from_state(state: GameState, rng: R) -> Self {
        let status = game_status(&state);
        debug!("game started, {} to move, status {:?}", state.side_to_move, status);
        Self {
            state,
            rng,
            status,
            ply: 0,
            last_move: None,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn roles(&self) -> &RoleMap {
        &self.state.roles
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn current_player(&self) -> Player {
        self.state.side_to_move
    }

    pub fn in_check(&self) -> bool {
        match self.status {
            GameStatus::InProgress { in_check } => in_check,
            GameStatus::Checkmate { .. } => true,
            GameStatus::Stalemate => false,
        }
    }

    pub fn is_over(&self) -> bool {
        self.status.is_over()
    }

    pub fn winner(&self) -> Option<Player> {
        match self.status {
            GameStatus::Checkmate { winner } => Some(winner),
            _ => None,
        }
    }

    /// Plies played since this session started.
    pub fn ply(&self) -> u32 {
        self.ply
    }

    pub fn last_move(&self) -> Option<&MoveRecord> {
        self.last_move.as_ref()
    }

    /// Squares of the pieces giving check to the side to move.
    pub fn checkers(&self) -> Vec<Square> {
        let player = self.current_player();
        match self.state.board.find_king(player) {
            Some(king) => attackers_to_square(&self.state.board, king, player.opposite(), &self.state.roles),
            None => Vec::new(),
        }
    }

    /// Legal destinations for a piece of the side to move. Empty for empty
    /// squares, opponent pieces and finished games.
    pub fn legal_moves(&self, from: Square) -> Vec<Square> {
        if self.is_over() {
            return Vec::new();
        }
        match self.state.board.piece_at(from) {
            Some(piece) if piece.player == self.current_player() => legal_moves(&self.state, from),
            _ => Vec::new(),
        }
    }

    pub fn is_legal_move(&self, from: Square, to: Square) -> bool {
        self.legal_moves(from).contains(&to)
    }

    /// Validates and plays a move for the side to move.
    pub fn play_move(&mut self, from: Square, to: Square) -> Result<MoveRecord, MoveError> {
        let player = self.current_player();
        let rejected = |err: MoveError| {
            debug!("rejected move {from} -> {to} for {player}: {err}");
            err
        };

        if self.is_over() {
            return Err(rejected(MoveError::GameOver(self.status)));
        }
        let piece = self
            .state
            .board
            .piece_at(from)
            .ok_or_else(|| rejected(MoveError::EmptySquare(from)))?;
        if piece.player != player {
            return Err(rejected(MoveError::NotYourPiece {
                square: from,
                owner: piece.player,
            }));
        }
        if !legal_moves(&self.state, from).contains(&to) {
            return Err(rejected(MoveError::IllegalMove { from, to }));
        }

        let applied = apply_move(&self.state, from, to, &mut self.rng);
        self.state = applied.game_state;
        self.status = game_status(&self.state);
        self.ply += 1;

        match self.status {
            GameStatus::Checkmate { winner } => info!("checkmate after {} plies, {winner} wins", self.ply),
            GameStatus::Stalemate => info!("stalemate after {} plies", self.ply),
            GameStatus::InProgress { .. } => {}
        }

        let record = MoveRecord {
            player,
            from,
            to,
            moved: piece,
            captured: applied.captured,
            promoted_to: applied.promoted_to,
            castled: applied.castled,
            en_passant_capture: applied.en_passant_capture,
            status: self.status,
        };
        self.last_move = Some(record);
        Ok(record)
    }
}
