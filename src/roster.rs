use log::debug;
use rand::seq::index;
use rand::Rng;

use crate::constants::{PLAYERS_PER_POSITION, TEAM_SIZE};
use crate::error::SimError;
use crate::player::{Player, Position};
use crate::team::{Team, TeamPlayer};

/// Draw a full 5v5 matchup from the pool.
///
/// Every position's subset is checked for eligibility before any sampling
/// happens, so a shortage at one position is reported even when another has
/// surplus. Two players are then drawn uniformly without replacement per
/// position and each pair is split by pool order: the earlier-indexed player
/// joins team 1, the other team 2. A pool of exactly two players per
/// position therefore always yields the same two teams, whatever the seed.
///
/// Entropy comes only from the injected `rng`; a fixed seed reproduces the
/// matchup.
pub fn sample_matchup<R: Rng + ?Sized>(
    pool: &[Player],
    rng: &mut R,
) -> Result<(Team, Team), SimError> {
    let mut subsets: Vec<Vec<usize>> = Vec::with_capacity(Position::ALL.len());
    for position in Position::ALL {
        let subset: Vec<usize> = pool
            .iter()
            .enumerate()
            .filter(|(_, p)| p.position == position)
            .map(|(i, _)| i)
            .collect();

        if subset.len() < PLAYERS_PER_POSITION {
            return Err(SimError::InsufficientPlayers {
                position,
                available: subset.len(),
            });
        }
        subsets.push(subset);
    }

    let mut first = Vec::with_capacity(TEAM_SIZE);
    let mut second = Vec::with_capacity(TEAM_SIZE);

    for subset in &subsets {
        let mut picks: Vec<usize> = index::sample(rng, subset.len(), PLAYERS_PER_POSITION)
            .into_iter()
            .map(|i| subset[i])
            .collect();
        picks.sort_unstable();

        first.push(TeamPlayer::new(pool[picks[0]].clone())?);
        second.push(TeamPlayer::new(pool[picks[1]].clone())?);
    }

    let team1 = Team::new("Team 1", first);
    let team2 = Team::new("Team 2", second);
    debug!(
        "sampled matchup from pool of {}: {:?} vs {:?}",
        pool.len(),
        team1.player_names(),
        team2.player_names(),
    );

    Ok((team1, team2))
}
