use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

pub mod content;
pub mod creature;
pub mod encounter;
pub mod monte_carlo;
pub mod roster;
pub mod weapon;

pub use creature::{AbilityScores, Alignment, Creature, CreatureKind, FallbackAttack};
pub use encounter::{Encounter, TrialOutcome, TrialResult, run_trial};
pub use monte_carlo::{PlayerSamples, RunConfig, RunReport, SetupError, validate_roster};
pub use roster::{CreatureDef, build_roster, parse_roster};
pub use weapon::{AttackOutcome, DamageType, Weapon};

/// Seeded dice pool. Every random draw in the engine flows through one of
/// these; callers own it and thread it explicitly, so a fixed seed replays
/// an identical run.
pub struct Dice {
    rng: ChaCha8Rng,
}

impl Dice {
    pub fn from_seed(seed: u64) -> Self {
        Self { rng: ChaCha8Rng::seed_from_u64(seed) }
    }

    pub fn d20(&mut self) -> i32 {
        self.rng.gen_range(1..=20)
    }

    /// Uniform roll in [1, sides]; anything below a d1 is treated as a d1.
    pub fn roll(&mut self, sides: i32) -> i32 {
        self.rng.gen_range(1..=sides.max(1))
    }
}

/// D&D ability modifier = floor((score - 10) / 2) for integer scores.
pub fn ability_mod(score: i32) -> i32 {
    // `div_euclid` with positive divisor matches mathematical floor division.
    (score - 10).div_euclid(2)
}
