use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::SimError;

/// Court position.
///
/// A closed set of exactly five roles; the sampler requires two eligible
/// players at each.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Position {
    PointGuard,
    ShootingGuard,
    SmallForward,
    PowerForward,
    Center,
}

impl Position {
    /// All five positions in lineup order.
    pub const ALL: [Position; 5] = [
        Position::PointGuard,
        Position::ShootingGuard,
        Position::SmallForward,
        Position::PowerForward,
        Position::Center,
    ];

    /// Conventional abbreviation (PG, SG, SF, PF, C).
    pub fn abbrev(&self) -> &'static str {
        match self {
            Position::PointGuard => "PG",
            Position::ShootingGuard => "SG",
            Position::SmallForward => "SF",
            Position::PowerForward => "PF",
            Position::Center => "C",
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Position::PointGuard => "PointGuard",
            Position::ShootingGuard => "ShootingGuard",
            Position::SmallForward => "SmallForward",
            Position::PowerForward => "PowerForward",
            Position::Center => "Center",
        };
        write!(f, "{}", name)
    }
}

/// Historical player with per-game averages.
///
/// Immutable once loaded; the pool owns these records and the engine clones
/// the ones it selects.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub name: String,
    pub position: Position,
    pub points_per_game: f64,
    pub assists_per_game: f64,
    pub rebounds_per_game: f64,
    pub minutes_per_game: f64,
}

impl Player {
    /// Create a new Player.
    pub fn new(
        name: impl Into<String>,
        position: Position,
        points_per_game: f64,
        assists_per_game: f64,
        rebounds_per_game: f64,
        minutes_per_game: f64,
    ) -> Self {
        Player {
            name: name.into(),
            position,
            points_per_game,
            assists_per_game,
            rebounds_per_game,
            minutes_per_game,
        }
    }
}

/// Per-minute rates derived from a player's per-game averages.
///
/// Recomputed from the source stats each time a roster is built; never
/// persisted.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct RateProfile {
    pub points_per_min: f64,
    pub assists_per_min: f64,
    pub rebounds_per_min: f64,
}

impl RateProfile {
    /// Derive per-minute rates for one player.
    ///
    /// Fails with [`SimError::InvalidRate`] when minutes per game is zero,
    /// negative, or not finite. The division here must never leak an
    /// infinite or NaN rate into the Poisson draws downstream.
    pub fn for_player(player: &Player) -> Result<Self, SimError> {
        let minutes = player.minutes_per_game;
        if !minutes.is_finite() || minutes <= 0.0 {
            return Err(SimError::InvalidRate {
                player: player.name.clone(),
                minutes,
            });
        }

        Ok(RateProfile {
            points_per_min: player.points_per_game / minutes,
            assists_per_min: player.assists_per_game / minutes,
            rebounds_per_min: player.rebounds_per_game / minutes,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rate_conversion() {
        let player = Player::new("Scorer", Position::ShootingGuard, 24.0, 3.0, 6.0, 30.0);
        let rates = RateProfile::for_player(&player).unwrap();

        assert!((rates.points_per_min - 0.8).abs() < 1e-12);
        assert!((rates.assists_per_min - 0.1).abs() < 1e-12);
        assert!((rates.rebounds_per_min - 0.2).abs() < 1e-12);
    }

    #[test]
    fn test_zero_minutes_rejected() {
        let player = Player::new("Bench", Position::Center, 2.0, 0.5, 1.0, 0.0);
        let err = RateProfile::for_player(&player).unwrap_err();

        assert_eq!(
            err,
            SimError::InvalidRate {
                player: "Bench".to_string(),
                minutes: 0.0,
            }
        );
    }

    #[test]
    fn test_negative_minutes_rejected() {
        let player = Player::new("Glitch", Position::PointGuard, 10.0, 5.0, 3.0, -12.0);
        assert!(RateProfile::for_player(&player).is_err());
    }

    #[test]
    fn test_nan_minutes_rejected() {
        let player = Player::new("Glitch", Position::PointGuard, 10.0, 5.0, 3.0, f64::NAN);
        assert!(RateProfile::for_player(&player).is_err());
    }

    #[test]
    fn test_rates_are_finite() {
        let player = Player::new("Iron Man", Position::PowerForward, 31.0, 4.4, 12.5, 45.8);
        let rates = RateProfile::for_player(&player).unwrap();

        assert!(rates.points_per_min.is_finite());
        assert!(rates.assists_per_min.is_finite());
        assert!(rates.rebounds_per_min.is_finite());
    }

    #[test]
    fn test_positions_are_distinct() {
        for (i, a) in Position::ALL.iter().enumerate() {
            for b in Position::ALL.iter().skip(i + 1) {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn test_position_display_names_error() {
        let err = SimError::InsufficientPlayers {
            position: Position::SmallForward,
            available: 1,
        };
        assert!(err.to_string().contains("SmallForward"));
    }
}
