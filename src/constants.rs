/// Regulation game length in minutes
pub const GAME_MINUTES: u32 = 48;

/// Players fielded per team
pub const TEAM_SIZE: usize = 5;

/// Players sampled from the pool at each position (one per team)
pub const PLAYERS_PER_POSITION: usize = 2;

/// Default number of games in a series estimate
pub const DEFAULT_SERIES_GAMES: usize = 1000;
