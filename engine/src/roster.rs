use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::creature::{AbilityScores, Alignment, Creature, CreatureKind, FallbackAttack};
use crate::weapon::Weapon;

fn default_count() -> u32 {
    1
}

/// One already-parsed creature definition. The engine does not care where
/// these come from; the CLI loads them from JSON/YAML files or builtins.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct CreatureDef {
    pub name: String,
    pub alignment: Alignment,
    #[serde(default)]
    pub kind: CreatureKind,
    pub max_hit_points: i32,
    pub armour_class: i32,
    #[serde(default)]
    pub abilities: AbilityScores,
    #[serde(default)]
    pub proficiency_bonus: i32,
    #[serde(default)]
    pub weapons: Vec<Weapon>,
    #[serde(default)]
    pub fallback: Option<FallbackAttack>,
    /// Expand this definition into `count` identical creatures with
    /// numbered names.
    #[serde(default = "default_count")]
    pub count: u32,
}

pub fn parse_roster(text: &str) -> Result<Vec<CreatureDef>> {
    serde_json::from_str(text).context("failed to parse roster JSON")
}

/// Materialize creatures from definitions. Ids are assigned in definition
/// order starting at 1, which also fixes the HP-snapshot ordering.
pub fn build_roster(defs: &[CreatureDef]) -> Vec<Creature> {
    let mut roster = Vec::new();
    for def in defs {
        let count = def.count.max(1);
        for copy in 0..count {
            let name = if count > 1 {
                format!("{} {}", def.name, copy + 1)
            } else {
                def.name.clone()
            };
            roster.push(Creature {
                id: roster.len() as u32 + 1,
                name,
                alignment: def.alignment,
                kind: def.kind,
                max_hit_points: def.max_hit_points,
                hit_points: def.max_hit_points,
                armour_class: def.armour_class,
                abilities: def.abilities,
                proficiency_bonus: def.proficiency_bonus,
                weapons: def.weapons.clone(),
                fallback: def.fallback,
                initiative: 0,
            });
        }
    }
    roster
}
