use std::collections::HashMap;

pub fn builtin_rosters() -> HashMap<&'static str, &'static str> {
    HashMap::from([(
        "goblin_ambush",
        include_str!("../content/rosters/goblin_ambush.json"),
    )])
}
