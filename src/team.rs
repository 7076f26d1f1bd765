use serde::Serialize;
use std::fmt;

use crate::constants::TEAM_SIZE;
use crate::error::SimError;
use crate::player::{Player, RateProfile};

/// One roster slot: a player plus the per-minute rates derived for this run.
#[derive(Clone, Debug, Serialize)]
pub struct TeamPlayer {
    pub player: Player,
    pub rates: RateProfile,
}

impl TeamPlayer {
    /// Attach a freshly derived rate profile to a player.
    pub fn new(player: Player) -> Result<Self, SimError> {
        let rates = RateProfile::for_player(&player)?;
        Ok(TeamPlayer { player, rates })
    }
}

/// Five players, one per position, fixed for the duration of a series.
#[derive(Clone, Debug, Serialize)]
pub struct Team {
    pub name: String,
    players: Vec<TeamPlayer>,
}

impl Team {
    /// Build a team from exactly [`TEAM_SIZE`] players in lineup order.
    ///
    /// Panics on any other roster size; the sampler is the only producer of
    /// lineups and always hands over five.
    pub fn new(name: impl Into<String>, players: Vec<TeamPlayer>) -> Self {
        assert!(players.len() == TEAM_SIZE);
        Team {
            name: name.into(),
            players,
        }
    }

    /// The lineup in positional order.
    pub fn players(&self) -> &[TeamPlayer] {
        &self.players
    }

    pub fn player_names(&self) -> Vec<&str> {
        self.players.iter().map(|p| p.player.name.as_str()).collect()
    }
}

impl fmt::Display for Team {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.name)?;
        for slot in &self.players {
            let p = &slot.player;
            writeln!(
                f,
                "  {:20} {:2} | {:5.1} pts | {:4.1} ast | {:4.1} trb | {:4.1} min",
                p.name,
                p.position.abbrev(),
                p.points_per_game,
                p.assists_per_game,
                p.rebounds_per_game,
                p.minutes_per_game,
            )?;
        }
        Ok(())
    }
}
