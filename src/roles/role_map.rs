//! Mapping from a piece's nominal kind to the role it moves with.

use std::error::Error;
use std::fmt;

use crate::game_state::chess_types::{PieceKind, Role};

/// Kinds whose role is shuffled, in the order `try_from_roles` expects.
pub const SHUFFLED_KINDS: [PieceKind; 5] = [
    PieceKind::Pawn,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Rook,
    PieceKind::Queen,
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RoleMapError {
    KingRoleAssigned,
    DuplicateRole(Role),
}

impl fmt::Display for RoleMapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RoleMapError::KingRoleAssigned => {
                write!(f, "the king role cannot be given to a non-king piece")
            }
            RoleMapError::DuplicateRole(role) => {
                write!(f, "role {role:?} is assigned to more than one kind")
            }
        }
    }
}

impl Error for RoleMapError {}

/// Per-game role table. The king always moves as a king; the other five kinds
/// carry a permutation of the five remaining roles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoleMap {
    roles: [Role; 6],
}

impl RoleMap {
    /// Classic chess: every kind moves as itself.
    pub const fn standard() -> Self {
        Self {
            roles: [
                Role::Pawn,
                Role::Knight,
                Role::Bishop,
                Role::Rook,
                Role::Queen,
                Role::King,
            ],
        }
    }

    /// Builds a map from the roles of [`SHUFFLED_KINDS`], in that order.
    pub fn try_from_roles(roles: [Role; 5]) -> Result<Self, RoleMapError> {
        let mut seen = [false; 6];
        for role in roles {
            if role == Role::King {
                return Err(RoleMapError::KingRoleAssigned);
            }
            if seen[role.index()] {
                return Err(RoleMapError::DuplicateRole(role));
            }
            seen[role.index()] = true;
        }
        Ok(Self::from_permutation(roles))
    }

    /// `roles` must be a permutation of [`Role::NON_KING`].
    pub(crate) fn from_permutation(roles: [Role; 5]) -> Self {
        let mut map = Self::standard();
        for (kind, role) in SHUFFLED_KINDS.into_iter().zip(roles) {
            map.roles[kind.index()] = role;
        }
        map
    }

    #[inline]
    pub const fn role_of(&self, kind: PieceKind) -> Role {
        self.roles[kind.index()]
    }

    /// Roles of [`SHUFFLED_KINDS`], in that order.
    pub fn shuffled_roles(&self) -> [Role; 5] {
        SHUFFLED_KINDS.map(|kind| self.role_of(kind))
    }

    pub fn is_standard(&self) -> bool {
        *self == Self::standard()
    }
}

impl Default for RoleMap {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_map_is_identity() {
        let map = RoleMap::standard();
        assert_eq!(map.role_of(PieceKind::Pawn), Role::Pawn);
        assert_eq!(map.role_of(PieceKind::Queen), Role::Queen);
        assert_eq!(map.role_of(PieceKind::King), Role::King);
        assert!(map.is_standard());
    }

    #[test]
    fn try_from_roles_accepts_permutation() {
        let map = RoleMap::try_from_roles([
            Role::Knight,
            Role::Pawn,
            Role::Queen,
            Role::Bishop,
            Role::Rook,
        ])
        .expect("permutation should be accepted");
        assert_eq!(map.role_of(PieceKind::Pawn), Role::Knight);
        assert_eq!(map.role_of(PieceKind::Knight), Role::Pawn);
        assert_eq!(map.role_of(PieceKind::Rook), Role::Bishop);
        assert_eq!(map.role_of(PieceKind::King), Role::King);
        assert!(!map.is_standard());
    }

    #[test]
    fn try_from_roles_rejects_duplicates_and_king() {
        assert_eq!(
            RoleMap::try_from_roles([Role::Pawn, Role::Pawn, Role::Bishop, Role::Rook, Role::Queen]),
            Err(RoleMapError::DuplicateRole(Role::Pawn))
        );
        assert_eq!(
            RoleMap::try_from_roles([Role::King, Role::Knight, Role::Bishop, Role::Rook, Role::Queen]),
            Err(RoleMapError::KingRoleAssigned)
        );
    }
}
