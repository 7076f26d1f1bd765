use log::debug;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use rayon::prelude::*;
use serde::Serialize;

use crate::game::{simulate_game, GameResult};
use crate::team::Team;

/// Outcome of a simulated series between two fixed teams.
///
/// Ties are reported as their own bucket: they count toward the number of
/// games played but never toward either team's wins, so
/// `win_probability = team1_wins / scores.len()`.
#[derive(Clone, Debug, Serialize)]
pub struct SeriesResult {
    /// Final (team 1, team 2) score of every game in the series.
    pub scores: Vec<(u32, u32)>,
    pub team1_wins: usize,
    pub team2_wins: usize,
    pub ties: usize,
    /// Empirical probability that team 1 wins a game.
    pub win_probability: f64,
    /// One extra game run outside the probability estimate, kept so callers
    /// can show a full per-player box score.
    pub sample_game: GameResult,
}

/// One sub-seed per game plus one for the sample game, all derived from the
/// master seed. Reseeding a fresh ChaCha stream per game keeps games
/// independent whether they run sequentially or on the rayon pool.
fn game_seeds(n: usize, seed: Option<u64>) -> Vec<u64> {
    let mut rng = match seed {
        Some(s) => ChaCha8Rng::seed_from_u64(s),
        None => ChaCha8Rng::from_entropy(),
    };

    (0..=n).map(|_| rng.gen::<u64>()).collect()
}

fn summarize(scores: Vec<(u32, u32)>, sample_game: GameResult) -> SeriesResult {
    let team1_wins = scores.iter().filter(|(s1, s2)| s1 > s2).count();
    let team2_wins = scores.iter().filter(|(s1, s2)| s2 > s1).count();
    let ties = scores.len() - team1_wins - team2_wins;
    let win_probability = team1_wins as f64 / scores.len() as f64;

    debug!(
        "series of {}: {} wins / {} losses / {} ties, p(team 1) = {:.3}",
        scores.len(),
        team1_wins,
        team2_wins,
        ties,
        win_probability,
    );

    SeriesResult {
        scores,
        team1_wins,
        team2_wins,
        ties,
        win_probability,
        sample_game,
    }
}

/// Run `n` independent games and estimate team 1's win probability.
///
/// The teams are fixed for the whole series; only the game randomness is
/// redrawn. Each game consumes its own ChaCha stream seeded from the master
/// seed, so a fixed `seed` reproduces the entire series. Panics if `n` is
/// zero.
pub fn run_series(team1: &Team, team2: &Team, n: usize, seed: Option<u64>) -> SeriesResult {
    assert!(n >= 1, "series needs at least one game");
    let seeds = game_seeds(n, seed);

    let scores: Vec<(u32, u32)> = seeds[..n]
        .iter()
        .map(|&s| {
            simulate_game(team1, team2, &mut ChaCha8Rng::seed_from_u64(s)).final_score
        })
        .collect();

    let sample_game = simulate_game(team1, team2, &mut ChaCha8Rng::seed_from_u64(seeds[n]));
    summarize(scores, sample_game)
}

/// Same estimate as [`run_series`], with the games spread across the rayon
/// pool.
///
/// Games share no mutable state and each worker owns an independent ChaCha
/// stream, so completion order is irrelevant and the result for a given
/// seed is identical to the sequential driver.
pub fn run_series_par(team1: &Team, team2: &Team, n: usize, seed: Option<u64>) -> SeriesResult {
    assert!(n >= 1, "series needs at least one game");
    let seeds = game_seeds(n, seed);

    let scores: Vec<(u32, u32)> = seeds[..n]
        .par_iter()
        .map(|&s| {
            simulate_game(team1, team2, &mut ChaCha8Rng::seed_from_u64(s)).final_score
        })
        .collect();

    let sample_game = simulate_game(team1, team2, &mut ChaCha8Rng::seed_from_u64(seeds[n]));
    summarize(scores, sample_game)
}
