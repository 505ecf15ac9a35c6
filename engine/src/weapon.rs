use serde::{Deserialize, Serialize};

use crate::creature::{Creature, CreatureKind};
use crate::{Dice, ability_mod};

/// Cosmetic only; no resistance/vulnerability rules apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DamageType {
    Bludgeoning,
    Piercing,
    Slashing,
    Fire,
    Cold,
    Lightning,
    Acid,
    Poison,
    Psychic,
    Radiant,
    Necrotic,
    Thunder,
    Force,
}

/// Immutable attack profile owned by exactly one creature. `priority` is the
/// selection key: a creature always swings its highest-priority weapon.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Weapon {
    pub name: String,
    pub priority: i32,
    #[serde(default)]
    pub to_hit_bonus: i32,
    pub damage_die: i32,
    #[serde(default)]
    pub damage_modifier: i32,
    pub damage_type: DamageType,
    #[serde(default)]
    pub finesse: bool,
}

/// One resolved attack roll. Damage is zero on a miss; the caller applies it
/// to the target via `Creature::take_damage`.
#[derive(Debug, Clone, Copy)]
pub struct AttackOutcome {
    pub roll: i32,
    pub total: i32,
    pub ac: i32,
    pub hit: bool,
    pub damage: i32,
}

impl Weapon {
    /// Monsters swing with the flat weapon bonus; player characters add the
    /// ability modifier (DEX if finesse, STR otherwise) and proficiency.
    pub fn to_hit_modifier(&self, attacker: &Creature) -> i32 {
        match attacker.kind {
            CreatureKind::Monster => self.to_hit_bonus,
            CreatureKind::Player => {
                let score = if self.finesse {
                    attacker.abilities.dexterity
                } else {
                    attacker.abilities.strength
                };
                ability_mod(score) + attacker.proficiency_bonus + self.to_hit_bonus
            }
        }
    }

    /// Roll to hit against `target_ac` (ties hit) and, on a hit, roll damage.
    pub fn attack(&self, attacker: &Creature, target_ac: i32, dice: &mut Dice) -> AttackOutcome {
        let roll = dice.d20();
        let total = roll + self.to_hit_modifier(attacker);
        let hit = total >= target_ac;
        let damage = if hit {
            dice.roll(self.damage_die) + self.damage_modifier
        } else {
            0
        };
        AttackOutcome { roll, total, ac: target_ac, hit, damage }
    }
}
