use serde::Serialize;
use thiserror::Error;
use tracing::{debug, info};

use crate::creature::{Alignment, Creature};
use crate::encounter::{TrialOutcome, run_trial};
use crate::Dice;

const Z_95: f64 = 1.96;

/// Structural roster problems are fatal at setup: running them would loop
/// forever failing victory checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SetupError {
    #[error("roster is empty")]
    EmptyRoster,
    #[error("roster has no {0:?}-aligned creatures")]
    MissingAlignment(Alignment),
}

#[derive(Debug, Clone, Copy)]
pub struct RunConfig {
    /// Trial budget; the run stops here even if the interval never tightens.
    pub max_trials: u32,
    /// Stop once the 95% CI half-width on the win rate drops below this.
    pub half_width_threshold: f64,
    /// Conclusive trials required before the stopping rule is evaluated.
    pub min_samples: u32,
    /// Per-trial round cap; exceeding it makes the trial inconclusive.
    pub max_rounds: u32,
    /// Base seed; trial i rolls with `seed.wrapping_add(i)`.
    pub seed: u64,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            max_trials: 1_000_000,
            half_width_threshold: 0.01,
            min_samples: 1000,
            max_rounds: 1000,
            seed: 12345,
        }
    }
}

/// Final-HP samples for one tracked Good-side creature, one entry per
/// conclusive trial in completion order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlayerSamples {
    pub id: u32,
    pub name: String,
    pub final_hp: Vec<i32>,
}

#[derive(Debug, Clone, Serialize)]
pub struct RunReport {
    /// Trials attempted, inconclusive ones included.
    pub trials: u32,
    pub wins: u32,
    pub losses: u32,
    pub inconclusive: u32,
    pub win_rate: f64,
    pub half_width: f64,
    pub samples: Vec<PlayerSamples>,
}

pub fn validate_roster(roster: &[Creature]) -> Result<(), SetupError> {
    if roster.is_empty() {
        return Err(SetupError::EmptyRoster);
    }
    for side in [Alignment::Good, Alignment::Evil] {
        if !roster.iter().any(|c| c.alignment == side) {
            return Err(SetupError::MissingAlignment(side));
        }
    }
    Ok(())
}

/// Sequential Monte-Carlo loop: repeat independent trials over the shared
/// roster until the win-rate confidence interval is tight enough or the
/// trial budget runs out. Inconclusive trials are counted separately and
/// excluded from the win/loss tallies and the HP samples.
pub fn run(cfg: RunConfig, roster: &mut [Creature]) -> Result<RunReport, SetupError> {
    validate_roster(roster)?;

    let mut samples: Vec<PlayerSamples> = roster
        .iter()
        .filter(|c| c.alignment == Alignment::Good)
        .map(|c| PlayerSamples { id: c.id, name: c.name.clone(), final_hp: Vec::new() })
        .collect();
    samples.sort_by_key(|p| p.id);

    let mut wins = 0u32;
    let mut losses = 0u32;
    let mut inconclusive = 0u32;
    let mut trials = 0u32;
    let mut win_rate = 0.0;
    let mut half_width = 1.0;

    for i in 0..cfg.max_trials {
        // The only cancellation point: stop issuing new trials once the
        // interval is tight enough.
        if wins + losses >= cfg.min_samples && half_width < cfg.half_width_threshold {
            break;
        }

        let mut dice = Dice::from_seed(cfg.seed.wrapping_add(u64::from(i)));
        let result = run_trial(roster, &mut dice, cfg.max_rounds);
        trials += 1;

        match result.outcome {
            TrialOutcome::GoodWins => wins += 1,
            TrialOutcome::EvilWins => losses += 1,
            TrialOutcome::Inconclusive => {
                debug!(trial = i, rounds = result.rounds, "inconclusive trial excluded from tallies");
                inconclusive += 1;
                continue;
            }
        }

        for (slot, &(id, hp)) in samples.iter_mut().zip(result.good_hp.iter()) {
            debug_assert_eq!(slot.id, id);
            slot.final_hp.push(hp);
        }

        let conclusive = wins + losses;
        win_rate = f64::from(wins) / f64::from(conclusive);
        half_width = Z_95 * (win_rate * (1.0 - win_rate) / f64::from(conclusive)).sqrt();
    }

    info!(trials, wins, losses, inconclusive, win_rate, half_width, "monte-carlo run complete");
    Ok(RunReport { trials, wins, losses, inconclusive, win_rate, half_width, samples })
}
