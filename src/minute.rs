use rand::distributions::Distribution;
use rand::Rng;
use statrs::distribution::Poisson;

use crate::team::Team;

/// Stat counts produced by one player during one simulated minute.
///
/// Folded into the game accumulation immediately; never retained.
#[derive(Clone, Copy, Debug)]
pub struct MinuteEvent {
    /// Index into the team's lineup.
    pub player: usize,
    pub points: u32,
    pub assists: u32,
    pub rebounds: u32,
}

/// One Poisson count with mean `rate`, or a deterministic zero when the rate
/// is not strictly positive. A zero-rate stat can never spontaneously become
/// nonzero.
fn poisson_count<R: Rng + ?Sized>(rate: f64, rng: &mut R) -> u32 {
    if rate > 0.0 {
        // Rate profiles are validated at construction, so the mean is finite
        // and positive here.
        Poisson::new(rate).unwrap().sample(rng) as u32
    } else {
        0
    }
}

/// Simulate one minute for every player on a team.
///
/// Each of points, assists, and rebounds is drawn independently per player
/// and independently across players; the only entropy source is the
/// injected `rng`.
pub fn simulate_minute<R: Rng + ?Sized>(team: &Team, rng: &mut R) -> Vec<MinuteEvent> {
    team.players()
        .iter()
        .enumerate()
        .map(|(i, slot)| MinuteEvent {
            player: i,
            points: poisson_count(slot.rates.points_per_min, rng),
            assists: poisson_count(slot.rates.assists_per_min, rng),
            rebounds: poisson_count(slot.rates.rebounds_per_min, rng),
        })
        .collect()
}
