mod report;

use std::path::{Path, PathBuf};

use anyhow::{Context, bail};
use clap::{Args, Parser, Subcommand};
use encoding_rs::Encoding;
use engine::{CreatureDef, RunConfig, content, monte_carlo, roster};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "skirmish")]
#[command(about = "Monte Carlo skirmish simulator: Good vs Evil until the win rate settles")]
struct Cli {
    #[command(subcommand)]
    cmd: Cmd,
}

#[derive(Args, Clone, Copy)]
struct SimArgs {
    /// Trial budget
    #[arg(long, default_value_t = 1_000_000)]
    trials: u32,

    /// Stop once the 95% CI half-width on the win rate drops below this
    #[arg(long, default_value_t = 0.01)]
    threshold: f64,

    /// Conclusive trials required before the stopping rule is evaluated
    #[arg(long, default_value_t = 1000)]
    min_samples: u32,

    /// Safety cap on rounds per trial
    #[arg(long, default_value_t = 1000)]
    max_rounds: u32,

    /// RNG base seed (trial i uses seed+i)
    #[arg(long, default_value_t = 12345)]
    seed: u64,
}

impl SimArgs {
    fn to_config(self) -> RunConfig {
        RunConfig {
            max_trials: self.trials,
            half_width_threshold: self.threshold,
            min_samples: self.min_samples,
            max_rounds: self.max_rounds,
            seed: self.seed,
        }
    }
}

#[derive(Subcommand)]
enum Cmd {
    /// Run one Monte-Carlo configuration against a roster
    Simulate {
        /// Roster file, JSON or YAML (defaults to the builtin goblin_ambush)
        #[arg(long)]
        roster: Option<PathBuf>,

        #[command(flatten)]
        sim: SimArgs,

        /// Emit the full report as JSON instead of the summary
        #[arg(long, default_value_t = false)]
        json: bool,
    },
    /// Re-run the simulation across Evil-side max-HP overrides
    Sweep {
        /// Roster file, JSON or YAML (defaults to the builtin goblin_ambush)
        #[arg(long)]
        roster: Option<PathBuf>,

        /// Comma-separated Evil max-HP overrides
        #[arg(long, value_delimiter = ',', default_values_t = vec![7, 10, 15, 20])]
        hp: Vec<i32>,

        #[command(flatten)]
        sim: SimArgs,
    },
    /// Print a builtin roster as pretty JSON
    RosterDump {
        #[arg(long, default_value = "goblin_ambush")]
        name: String,
    },
}

/// BOM-tolerant text read; roster files exported from editors on Windows
/// often carry one.
fn read_text_auto(path: &Path) -> anyhow::Result<String> {
    let bytes = std::fs::read(path).with_context(|| format!("failed to read {}", path.display()))?;
    if let Some((enc, bom_len)) = Encoding::for_bom(&bytes) {
        let (cow, _, _) = enc.decode(&bytes[bom_len..]);
        Ok(cow.into_owned())
    } else {
        Ok(String::from_utf8(bytes)?)
    }
}

fn load_defs(path: Option<&Path>) -> anyhow::Result<Vec<CreatureDef>> {
    let Some(path) = path else {
        let builtins = content::builtin_rosters();
        let text = builtins
            .get("goblin_ambush")
            .copied()
            .context("builtin roster goblin_ambush is missing")?;
        return roster::parse_roster(text);
    };
    let text = read_text_auto(path)?;
    match path.extension().and_then(|e| e.to_str()) {
        Some("yaml") | Some("yml") => serde_yaml::from_str(&text)
            .with_context(|| format!("failed to parse roster YAML: {}", path.display())),
        _ => roster::parse_roster(&text)
            .with_context(|| format!("failed to parse roster: {}", path.display())),
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Cmd::Simulate { roster: path, sim, json } => {
            let defs = load_defs(path.as_deref())?;
            let mut roster = roster::build_roster(&defs);
            let report = monte_carlo::run(sim.to_config(), &mut roster)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                report::print_summary(&report);
                report::print_histograms(&report);
            }
        }
        Cmd::Sweep { roster: path, hp, sim } => {
            let defs = load_defs(path.as_deref())?;
            for max_hp in hp {
                let mut overridden = defs.clone();
                for def in overridden
                    .iter_mut()
                    .filter(|d| d.alignment == engine::Alignment::Evil)
                {
                    def.max_hit_points = max_hp;
                }
                let mut roster = roster::build_roster(&overridden);
                let report = monte_carlo::run(sim.to_config(), &mut roster)?;
                println!(
                    "evil max HP {:>3}: win rate {:>5.1}% ± {:.1}% ({} trials, {} inconclusive)",
                    max_hp,
                    report.win_rate * 100.0,
                    report.half_width * 100.0,
                    report.trials,
                    report.inconclusive,
                );
            }
        }
        Cmd::RosterDump { name } => {
            let builtins = content::builtin_rosters();
            let Some(text) = builtins.get(name.as_str()).copied() else {
                bail!("unknown builtin roster '{}'", name);
            };
            let defs: Vec<CreatureDef> = roster::parse_roster(text)?;
            println!("{}", serde_json::to_string_pretty(&defs)?);
        }
    }
    Ok(())
}
