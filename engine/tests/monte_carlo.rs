use engine::{
    AbilityScores, Alignment, Creature, CreatureKind, DamageType, FallbackAttack, RunConfig,
    SetupError, Weapon, monte_carlo, validate_roster,
};

fn combatant(id: u32, name: &str, alignment: Alignment, hp: i32, ac: i32) -> Creature {
    Creature {
        id,
        name: name.to_string(),
        alignment,
        kind: CreatureKind::Monster,
        max_hit_points: hp,
        hit_points: hp,
        armour_class: ac,
        abilities: AbilityScores { strength: 10, dexterity: 10 },
        proficiency_bonus: 0,
        weapons: Vec::new(),
        fallback: None,
        initiative: 0,
    }
}

/// AC 25 one-shot killer vs a 1 HP goblin that cannot land a hit.
fn lopsided_roster() -> Vec<Creature> {
    let mut champion = combatant(1, "Champion", Alignment::Good, 30, 25);
    champion.weapons = vec![Weapon {
        name: "Doomblade".to_string(),
        priority: 1,
        to_hit_bonus: 30,
        damage_die: 6,
        damage_modifier: 99,
        damage_type: DamageType::Slashing,
        finesse: false,
    }];
    let mut goblin = combatant(2, "Goblin", Alignment::Evil, 1, 1);
    goblin.fallback = Some(FallbackAttack { attack_bonus: -30, attack_damage: 2 });
    vec![champion, goblin]
}

#[test]
fn overwhelming_advantage_converges_and_stops_early() {
    let cfg = RunConfig {
        max_trials: 10_000,
        half_width_threshold: 0.05,
        min_samples: 100,
        max_rounds: 50,
        seed: 1,
    };
    let mut roster = lopsided_roster();
    let report = monte_carlo::run(cfg, &mut roster).unwrap();

    assert!(report.win_rate > 0.95);
    assert_eq!(report.losses, 0);
    assert!(report.trials < cfg.max_trials);
    assert!(report.trials >= cfg.min_samples);
    assert!(report.half_width < cfg.half_width_threshold);
}

#[test]
fn samples_track_every_conclusive_trial() {
    let cfg = RunConfig {
        max_trials: 500,
        half_width_threshold: 0.05,
        min_samples: 100,
        max_rounds: 50,
        seed: 2,
    };
    let mut roster = lopsided_roster();
    let report = monte_carlo::run(cfg, &mut roster).unwrap();

    assert_eq!(report.samples.len(), 1);
    assert_eq!(report.samples[0].id, 1);
    assert_eq!(report.samples[0].name, "Champion");
    assert_eq!(report.samples[0].final_hp.len() as u32, report.wins + report.losses);
    // the champion never takes a hit
    assert!(report.samples[0].final_hp.iter().all(|&hp| hp == 30));
}

#[test]
fn empty_roster_refuses_to_run() {
    assert_eq!(validate_roster(&[]), Err(SetupError::EmptyRoster));
    let cfg = RunConfig::default();
    assert_eq!(monte_carlo::run(cfg, &mut []).unwrap_err(), SetupError::EmptyRoster);
}

#[test]
fn one_sided_roster_refuses_to_run() {
    let mut roster = vec![
        combatant(1, "Hero", Alignment::Good, 10, 12),
        combatant(2, "Friend", Alignment::Good, 10, 12),
    ];
    assert_eq!(
        monte_carlo::run(RunConfig::default(), &mut roster).unwrap_err(),
        SetupError::MissingAlignment(Alignment::Evil),
    );
}

#[test]
fn inconclusive_trials_are_excluded_from_tallies_and_samples() {
    // Nobody can deal damage, so every trial hits the round cap.
    let mut roster = vec![
        combatant(1, "Pacifist", Alignment::Good, 10, 12),
        combatant(2, "Ghost", Alignment::Evil, 10, 12),
    ];
    let cfg = RunConfig {
        max_trials: 25,
        half_width_threshold: 0.01,
        min_samples: 10,
        max_rounds: 3,
        seed: 3,
    };
    let report = monte_carlo::run(cfg, &mut roster).unwrap();
    assert_eq!(report.trials, 25);
    assert_eq!(report.inconclusive, 25);
    assert_eq!(report.wins + report.losses, 0);
    assert!(report.samples[0].final_hp.is_empty());
}

#[test]
fn fixed_seed_reproduces_the_whole_run() {
    let cfg = RunConfig {
        max_trials: 300,
        half_width_threshold: 0.05,
        min_samples: 100,
        max_rounds: 50,
        seed: 7,
    };
    let one = monte_carlo::run(cfg, &mut lopsided_roster()).unwrap();
    let two = monte_carlo::run(cfg, &mut lopsided_roster()).unwrap();
    assert_eq!(one.trials, two.trials);
    assert_eq!(one.wins, two.wins);
    assert_eq!(one.losses, two.losses);
    assert_eq!(one.win_rate, two.win_rate);
    assert_eq!(one.samples, two.samples);
}
