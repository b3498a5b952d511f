//! Randomized choices made by the rules: the per-game role shuffle and the
//! kind a promoting piece becomes.
//!
//! Both take the random source as an argument so callers can seed it.

use log::debug;
use rand::prelude::IndexedRandom;
use rand::seq::SliceRandom;
use rand::Rng;

use crate::game_state::chess_rules::PROMOTION_KINDS;
use crate::game_state::chess_types::{PieceKind, Role};
use crate::roles::role_map::RoleMap;

/// Draws a uniformly random role permutation for the five non-king kinds.
pub fn assign_roles<R: Rng + ?Sized>(rng: &mut R) -> RoleMap {
    let mut roles = Role::NON_KING;
    roles.shuffle(rng);

    let map = RoleMap::from_permutation(roles);
    debug!("assigned roles {:?}", map.shuffled_roles());
    map
}

/// Picks the kind a promoting piece turns into.
pub fn choose_promotion_kind<R: Rng + ?Sized>(rng: &mut R) -> PieceKind {
    PROMOTION_KINDS
        .choose(rng)
        .copied()
        .unwrap_or(PieceKind::Queen)
}
