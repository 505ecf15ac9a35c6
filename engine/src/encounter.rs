use serde::Serialize;
use tracing::{debug, trace};

use crate::creature::{Alignment, Creature};
use crate::Dice;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TrialOutcome {
    GoodWins,
    EvilWins,
    /// Round cap hit without a victor (e.g. nobody can deal damage).
    Inconclusive,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TrialResult {
    pub outcome: TrialOutcome,
    pub rounds: u32,
    /// Good-side (id, hp) pairs at the moment the encounter ended, ordered
    /// by id ascending.
    pub good_hp: Vec<(u32, i32)>,
}

/// Turn resolver for a single trial: a fixed initiative permutation over the
/// roster, advanced one round at a time until a side is wiped out.
pub struct Encounter {
    order: Vec<usize>,
    rounds: u32,
}

impl Encounter {
    /// Roll initiative for the whole roster and fix this trial's turn order,
    /// highest first. The sort is stable, so initiative ties keep roster
    /// order and a fixed seed replays the same permutation.
    pub fn new(roster: &mut [Creature], dice: &mut Dice) -> Self {
        for creature in roster.iter_mut() {
            creature.roll_initiative(dice);
        }
        let mut order: Vec<usize> = (0..roster.len()).collect();
        order.sort_by_key(|&i| std::cmp::Reverse(roster[i].initiative));
        Self { order, rounds: 0 }
    }

    pub fn order(&self) -> &[usize] {
        &self.order
    }

    /// First creature in initiative order that is of opposite alignment, not
    /// the actor itself, and still alive.
    pub fn select_target(&self, actor: usize, roster: &[Creature]) -> Option<usize> {
        self.order.iter().copied().find(|&candidate| {
            let target = &roster[candidate];
            target.alignment != roster[actor].alignment
                && target.id != roster[actor].id
                && target.is_alive()
        })
    }

    /// Evil-alive is checked first, so a simultaneous wipe favours Good.
    fn victory(&self, roster: &[Creature]) -> Option<TrialOutcome> {
        if !side_alive(roster, Alignment::Evil) {
            return Some(TrialOutcome::GoodWins);
        }
        if !side_alive(roster, Alignment::Good) {
            return Some(TrialOutcome::EvilWins);
        }
        None
    }

    /// One turn: at most one attack attempt against at most one target.
    fn turn(&self, actor: usize, roster: &mut [Creature], dice: &mut Dice) {
        let Some(target) = self.select_target(actor, roster) else {
            trace!(actor = %roster[actor].name, "no living target, turn is a no-op");
            return;
        };
        let target_ac = roster[target].armour_class;
        let Some(outcome) = roster[actor].attack(target_ac, dice) else {
            trace!(actor = %roster[actor].name, "no weapon or fallback, turn is a no-op");
            return;
        };
        if outcome.hit {
            roster[target].take_damage(outcome.damage);
            debug!(
                attacker = %roster[actor].name,
                target = %roster[target].name,
                total = outcome.total,
                ac = target_ac,
                damage = outcome.damage,
                hp = roster[target].hit_points,
                "hit"
            );
        } else {
            trace!(
                attacker = %roster[actor].name,
                target = %roster[target].name,
                total = outcome.total,
                ac = target_ac,
                "miss"
            );
        }
    }

    /// One full pass over the initiative order. Dead creatures are skipped
    /// without consuming their slot; a creature killed earlier in the round
    /// simply never acts.
    fn round(&mut self, roster: &mut [Creature], dice: &mut Dice) {
        self.rounds += 1;
        for pos in 0..self.order.len() {
            let actor = self.order[pos];
            if !roster[actor].is_alive() {
                continue;
            }
            self.turn(actor, roster, dice);
        }
    }

    /// Run whole rounds until a terminal state. Victory is checked before
    /// the first round, so a pre-decided encounter reports without fighting.
    pub fn run(mut self, roster: &mut [Creature], dice: &mut Dice, max_rounds: u32) -> TrialResult {
        loop {
            if let Some(outcome) = self.victory(roster) {
                return TrialResult {
                    outcome,
                    rounds: self.rounds,
                    good_hp: good_snapshot(roster),
                };
            }
            if self.rounds >= max_rounds {
                debug!(rounds = self.rounds, "round cap reached, trial is inconclusive");
                return TrialResult {
                    outcome: TrialOutcome::Inconclusive,
                    rounds: self.rounds,
                    good_hp: good_snapshot(roster),
                };
            }
            self.round(roster, dice);
        }
    }
}

fn side_alive(roster: &[Creature], side: Alignment) -> bool {
    roster.iter().any(|c| c.alignment == side && c.is_alive())
}

fn good_snapshot(roster: &[Creature]) -> Vec<(u32, i32)> {
    let mut snapshot: Vec<(u32, i32)> = roster
        .iter()
        .filter(|c| c.alignment == Alignment::Good)
        .map(|c| (c.id, c.hit_points))
        .collect();
    snapshot.sort_by_key(|&(id, _)| id);
    snapshot
}

/// One complete trial from fresh state: reset every creature, re-roll
/// initiative, fight to a terminal state. The roster is mutated in place and
/// must not be shared with a concurrently running trial.
pub fn run_trial(roster: &mut [Creature], dice: &mut Dice, max_rounds: u32) -> TrialResult {
    for creature in roster.iter_mut() {
        creature.reset();
    }
    let encounter = Encounter::new(roster, dice);
    encounter.run(roster, dice, max_rounds)
}
