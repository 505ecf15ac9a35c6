use serde::{Deserialize, Serialize};

use crate::weapon::{AttackOutcome, Weapon};
use crate::{Dice, ability_mod};

/// Faction tag; determines valid attack targets. Immutable once a creature
/// is built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Alignment {
    Good,
    Evil,
}

/// Which to-hit rule applies: players add ability modifier + proficiency,
/// monsters use flat weapon/fallback bonuses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CreatureKind {
    #[default]
    Player,
    Monster,
}

/// Scores default to 0 when a definition omits them, so a sparse stat block
/// degrades to a penalty instead of failing the run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AbilityScores {
    #[serde(default)]
    pub strength: i32,
    #[serde(default)]
    pub dexterity: i32,
}

/// Flat attack numbers for monster variants that carry no weapon data:
/// to-hit = d20 + bonus vs AC, damage = d6 + attack_damage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FallbackAttack {
    pub attack_bonus: i32,
    pub attack_damage: i32,
}

const FALLBACK_DAMAGE_DIE: i32 = 6;

/// Mutable combat entity. Built once per definition, then `reset` and reused
/// across trials; `initiative` is only meaningful within one encounter.
#[derive(Debug, Clone)]
pub struct Creature {
    pub id: u32,
    pub name: String,
    pub alignment: Alignment,
    pub kind: CreatureKind,
    pub max_hit_points: i32,
    pub hit_points: i32,
    pub armour_class: i32,
    pub abilities: AbilityScores,
    pub proficiency_bonus: i32,
    pub weapons: Vec<Weapon>,
    pub fallback: Option<FallbackAttack>,
    pub initiative: i32,
}

impl Creature {
    /// d20 + DEX modifier, stored for this encounter's ordering. Call exactly
    /// once per creature per encounter.
    pub fn roll_initiative(&mut self, dice: &mut Dice) -> i32 {
        self.initiative = dice.d20() + ability_mod(self.abilities.dexterity);
        self.initiative
    }

    /// Clamp into [0, max]; already-dead creatures stay at 0.
    pub fn take_damage(&mut self, amount: i32) {
        self.hit_points = (self.hit_points - amount).clamp(0, self.max_hit_points);
    }

    /// Highest-priority weapon; on a duplicate maximum the first weapon
    /// encountered wins.
    pub fn best_weapon(&self) -> Option<&Weapon> {
        self.weapons.iter().fold(None, |best, w| match best {
            Some(b) if w.priority > b.priority => Some(w),
            Some(b) => Some(b),
            None => Some(w),
        })
    }

    /// Attack with the best weapon, falling back to the flat attack pair.
    /// `None` means the creature has neither: a no-op miss, not an error.
    pub fn attack(&self, target_ac: i32, dice: &mut Dice) -> Option<AttackOutcome> {
        if let Some(weapon) = self.best_weapon() {
            return Some(weapon.attack(self, target_ac, dice));
        }
        let fallback = self.fallback?;
        let roll = dice.d20();
        let total = roll + fallback.attack_bonus;
        let hit = total >= target_ac;
        let damage = if hit {
            dice.roll(FALLBACK_DAMAGE_DIE) + fallback.attack_damage
        } else {
            0
        };
        Some(AttackOutcome { roll, total, ac: target_ac, hit, damage })
    }

    pub fn is_alive(&self) -> bool {
        self.hit_points > 0
    }

    /// Restore full hit points between trials. Initiative is stale until the
    /// next `roll_initiative`.
    pub fn reset(&mut self) {
        self.hit_points = self.max_hit_points;
    }
}
