use rand::Rng;
use serde::Serialize;
use std::cmp::Ordering;

use crate::constants::GAME_MINUTES;
use crate::minute::{simulate_minute, MinuteEvent};
use crate::team::Team;

/// Accumulated counting stats for one player over one game.
///
/// Starts at zero and only increases.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct StatLine {
    pub points: u32,
    pub assists: u32,
    pub rebounds: u32,
}

impl StatLine {
    fn add(&mut self, event: &MinuteEvent) {
        self.points += event.points;
        self.assists += event.assists;
        self.rebounds += event.rebounds;
    }
}

/// Box score for one team: one line per roster player, in lineup order.
///
/// Every roster player gets a zero-initialized line up front, so a player
/// who never records a stat still appears with explicit zeros.
#[derive(Clone, Debug, Serialize)]
pub struct PlayerGameStats {
    lines: Vec<(String, StatLine)>,
}

impl PlayerGameStats {
    fn for_team(team: &Team) -> Self {
        PlayerGameStats {
            lines: team
                .players()
                .iter()
                .map(|slot| (slot.player.name.clone(), StatLine::default()))
                .collect(),
        }
    }

    fn record(&mut self, event: &MinuteEvent) {
        self.lines[event.player].1.add(event);
    }

    pub fn get(&self, name: &str) -> Option<&StatLine> {
        self.lines.iter().find(|(n, _)| n == name).map(|(_, l)| l)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &StatLine)> {
        self.lines.iter().map(|(n, l)| (n.as_str(), l))
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn total_points(&self) -> u32 {
        self.lines.iter().map(|(_, l)| l.points).sum()
    }
}

/// Completed game: both box scores and the final score pair.
#[derive(Clone, Debug, Serialize)]
pub struct GameResult {
    pub team1_stats: PlayerGameStats,
    pub team2_stats: PlayerGameStats,
    /// (team 1 points, team 2 points)
    pub final_score: (u32, u32),
}

impl GameResult {
    /// `Some(true)` if team 1 won, `Some(false)` if team 2 won, `None` on a
    /// tie. Equal scores are a legitimate outcome, not an error.
    pub fn team1_won(&self) -> Option<bool> {
        match self.final_score.0.cmp(&self.final_score.1) {
            Ordering::Greater => Some(true),
            Ordering::Less => Some(false),
            Ordering::Equal => None,
        }
    }
}

/// Simulate one full game.
///
/// Runs [`GAME_MINUTES`] sequential minutes, invoking the minute simulator
/// once per team per minute and folding each event additively into that
/// team's box score and running score. Minutes are statistically
/// independent; nothing carries over between them.
pub fn simulate_game<R: Rng + ?Sized>(team1: &Team, team2: &Team, rng: &mut R) -> GameResult {
    let mut team1_stats = PlayerGameStats::for_team(team1);
    let mut team2_stats = PlayerGameStats::for_team(team2);
    let mut score1 = 0u32;
    let mut score2 = 0u32;

    for _ in 0..GAME_MINUTES {
        for event in simulate_minute(team1, rng) {
            score1 += event.points;
            team1_stats.record(&event);
        }
        for event in simulate_minute(team2, rng) {
            score2 += event.points;
            team2_stats.record(&event);
        }
    }

    GameResult {
        team1_stats,
        team2_stats,
        final_score: (score1, score2),
    }
}
