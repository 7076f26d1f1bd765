use thiserror::Error;

use crate::player::Position;

/// Errors raised while building a matchup.
///
/// Both variants are fatal to roster construction: there is no partial or
/// degraded roster, and a series is never run against one.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SimError {
    #[error("not enough players at {position}: need 2, found {available}")]
    InsufficientPlayers {
        position: Position,
        available: usize,
    },

    #[error("cannot derive per-minute rates for {player}: {minutes} minutes per game")]
    InvalidRate { player: String, minutes: f64 },
}
