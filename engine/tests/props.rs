use engine::{AbilityScores, Alignment, Creature, CreatureKind};
use proptest::prelude::*;

fn dummy(max_hp: i32, hp: i32) -> Creature {
    Creature {
        id: 1,
        name: "Dummy".to_string(),
        alignment: Alignment::Good,
        kind: CreatureKind::Player,
        max_hit_points: max_hp,
        hit_points: hp,
        armour_class: 10,
        abilities: AbilityScores::default(),
        proficiency_bonus: 0,
        weapons: Vec::new(),
        fallback: None,
        initiative: 0,
    }
}

proptest! {
    #[test]
    fn damage_is_clamped_into_bounds(
        (max_hp, start, dmg) in (1..200i32).prop_flat_map(|max| (Just(max), 0..=max, 0..500i32))
    ) {
        let mut c = dummy(max_hp, start);
        c.take_damage(dmg);
        prop_assert_eq!(c.hit_points, (start - dmg).max(0));
        prop_assert!(c.hit_points >= 0);
        prop_assert!(c.hit_points <= c.max_hit_points);
    }

    #[test]
    fn reset_always_revives_a_positive_max(max_hp in 1..200i32, dmg in 0..500i32) {
        let mut c = dummy(max_hp, max_hp);
        c.take_damage(dmg);
        c.reset();
        prop_assert!(c.is_alive());
        prop_assert_eq!(c.hit_points, max_hp);
    }
}
