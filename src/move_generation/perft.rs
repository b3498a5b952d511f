//! Move-tree node counting for generator validation and benchmarking.

use crate::game_state::chess_types::PieceKind;
use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_apply::apply_move_with_promotion;
use crate::move_generation::move_generator::{LegalMoveGenerator, MoveGenerator};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PerftCounts {
    pub nodes: u64,
    pub captures: u64,
    pub en_passant: u64,
    pub castles: u64,
    pub promotions: u64,
}

impl PerftCounts {
    fn merge(&mut self, rhs: PerftCounts) {
        self.nodes += rhs.nodes;
        self.captures += rhs.captures;
        self.en_passant += rhs.en_passant;
        self.castles += rhs.castles;
        self.promotions += rhs.promotions;
    }
}

/// Counts leaf positions `depth` plies below `game_state` using `generator`.
/// Promotions are expanded once, as a queen.
pub fn perft<G: MoveGenerator>(generator: &G, game_state: &GameState, depth: u8) -> PerftCounts {
    if depth == 0 {
        return PerftCounts {
            nodes: 1,
            ..PerftCounts::default()
        };
    }

    let mut total = PerftCounts::default();
    let side = game_state.side_to_move;
    for (from, _) in game_state.board.pieces_of(side) {
        for to in generator.generate_moves(game_state, from) {
            let applied = apply_move_with_promotion(game_state, from, to, PieceKind::Queen);
            if depth == 1 {
                total.merge(PerftCounts {
                    nodes: 1,
                    captures: applied.captured.is_some() as u64,
                    en_passant: applied.en_passant_capture as u64,
                    castles: applied.castled as u64,
                    promotions: applied.promoted_to.is_some() as u64,
                });
            } else {
                total.merge(perft(generator, &applied.game_state, depth - 1));
            }
        }
    }
    total
}

/// Legal-move perft.
pub fn perft_legal(game_state: &GameState, depth: u8) -> PerftCounts {
    perft(&LegalMoveGenerator, game_state, depth)
}

#[cfg(test)]
mod tests {
    use rand::{rngs::StdRng, SeedableRng};

    use super::*;
    use crate::move_generation::move_generator::PseudoMoveGenerator;
    use crate::roles::role_assignment::assign_roles;
    use crate::roles::role_map::RoleMap;

    #[test]
    fn perft_depth_zero_counts_single_node() {
        let game = GameState::new_game(RoleMap::standard());
        assert_eq!(perft_legal(&game, 0).nodes, 1);
    }

    #[test]
    fn standard_roles_match_classic_perft() {
        let game = GameState::new_game(RoleMap::standard());
        assert_eq!(perft_legal(&game, 1).nodes, 20);
        assert_eq!(perft_legal(&game, 2).nodes, 400);

        let depth_three = perft_legal(&game, 3);
        assert_eq!(depth_three.nodes, 8902);
        assert_eq!(depth_three.captures, 34);
    }

    #[test]
    fn legal_counts_never_exceed_pseudo_counts() {
        let mut rng = StdRng::seed_from_u64(17);
        for _ in 0..5 {
            let game = GameState::new_game(assign_roles(&mut rng));
            let legal = perft_legal(&game, 2).nodes;
            let pseudo = perft(&PseudoMoveGenerator, &game, 2).nodes;
            assert!(legal <= pseudo);
        }
    }
}
