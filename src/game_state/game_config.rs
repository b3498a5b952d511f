//! Session configuration.
//!
//! Defaults give a shuffled game seeded from the operating system. Two
//! environment variables override them:
//!
//! - `SHUFFLE_CHESS_SEED`: `u64` seed for role assignment and promotions.
//! - `SHUFFLE_CHESS_CLASSIC`: `1`/`true` to keep every piece's own role.

use std::env;

use log::warn;

pub const SEED_ENV_VAR: &str = "SHUFFLE_CHESS_SEED";
pub const CLASSIC_ENV_VAR: &str = "SHUFFLE_CHESS_CLASSIC";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    pub seed: Option<u64>,
    pub shuffle_roles: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            seed: None,
            shuffle_roles: true,
        }
    }
}

impl GameConfig {
    pub fn seeded(seed: u64) -> Self {
        Self {
            seed: Some(seed),
            ..Self::default()
        }
    }

    pub fn classic() -> Self {
        Self {
            shuffle_roles: false,
            ..Self::default()
        }
    }

    pub fn from_env() -> Self {
        Self::from_vars(
            env::var(SEED_ENV_VAR).ok().as_deref(),
            env::var(CLASSIC_ENV_VAR).ok().as_deref(),
        )
    }

    /// Builds a config from raw variable values. Unparseable values fall back
    /// to the defaults.
    pub fn from_vars(seed: Option<&str>, classic: Option<&str>) -> Self {
        let mut config = Self::default();

        if let Some(raw) = seed {
            match raw.trim().parse::<u64>() {
                Ok(value) => config.seed = Some(value),
                Err(_) => warn!("ignoring {SEED_ENV_VAR}={raw:?}: not a u64"),
            }
        }

        if let Some(raw) = classic {
            let raw = raw.trim();
            if raw == "1" || raw.eq_ignore_ascii_case("true") {
                config.shuffle_roles = false;
            }
        }

        config
    }
}
