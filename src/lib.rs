//! Hofsim Core - Monte Carlo engine for hall-of-fame 5v5 matchups.
//!
//! Draws two five-player rosters from a pool of historical players, derives
//! per-minute rates from their per-game averages, simulates a 48-minute game
//! minute-by-minute with independent per-player Poisson counters, and
//! repeats the game many times to estimate a win probability and one
//! representative box score.
//!
//! Loading the pool and presenting results are left to callers; the engine
//! takes a `&[Player]` and an injected random source, and hands back plain
//! value types.

pub mod constants;
pub mod error;
pub mod game;
pub mod minute;
pub mod player;
pub mod roster;
pub mod series;
pub mod team;

pub use constants::{DEFAULT_SERIES_GAMES, GAME_MINUTES, PLAYERS_PER_POSITION, TEAM_SIZE};
pub use error::SimError;
pub use game::{simulate_game, GameResult, PlayerGameStats, StatLine};
pub use minute::{simulate_minute, MinuteEvent};
pub use player::{Player, Position, RateProfile};
pub use roster::sample_matchup;
pub use series::{run_series, run_series_par, SeriesResult};
pub use team::{Team, TeamPlayer};
