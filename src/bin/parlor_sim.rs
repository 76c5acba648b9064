//! Runs seeded automated matches of both games and prints a summary.

use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::Parser;
use parlor_games::sim::{self, SimConfig};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Read when `--config` is not given, if present.
const DEFAULT_CONFIG_PATH: &str = "parlor-sim.toml";

#[derive(Debug, Parser)]
#[command(name = "parlor-sim", about = "Simulate grid and card games against the automated opponents")]
struct Cli {
    /// TOML file with simulation settings; must exist when given
    #[arg(long)]
    config: Option<PathBuf>,

    /// Master seed
    #[arg(long)]
    seed: Option<u64>,

    /// Number of best-of-five grid matches
    #[arg(long)]
    grid_matches: Option<u32>,

    /// Number of card rounds
    #[arg(long)]
    card_rounds: Option<u32>,

    /// Simulated player stays at or above this total
    #[arg(long)]
    stand_on: Option<u32>,

    /// Log every move
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    fn resolve_config(&self) -> anyhow::Result<SimConfig> {
        let mut config = match &self.config {
            Some(path) => SimConfig::load(path)
                .with_context(|| format!("loading {}", path.display()))?,
            None => SimConfig::load_or_default(Path::new(DEFAULT_CONFIG_PATH))
                .with_context(|| format!("loading {DEFAULT_CONFIG_PATH}"))?,
        };
        if let Some(seed) = self.seed {
            config = config.with_seed(seed);
        }
        if let Some(matches) = self.grid_matches {
            config = config.with_grid_matches(matches);
        }
        if let Some(rounds) = self.card_rounds {
            config = config.with_card_rounds(rounds);
        }
        if let Some(total) = self.stand_on {
            config = config.with_stand_on(total);
        }
        config.validate()?;
        Ok(config)
    }
}

fn init_logger(verbose: bool) {
    let default = if verbose {
        "parlor_games=debug,info"
    } else {
        "parlor_games=warn"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .compact(),
        )
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logger(cli.verbose);

    let config = cli.resolve_config()?;
    tracing::debug!(?config, "resolved config");

    let report = sim::run(&config)?;

    println!("seed: {}", report.seed);
    println!(
        "grid: {} matches won by human, {} by opponent, {} unfinished ({} rounds, {} tied)",
        report.grid.human_matches,
        report.grid.opponent_matches,
        report.grid.unfinished_matches,
        report.grid.rounds,
        report.grid.tied_rounds,
    );
    println!(
        "cards: {} player wins, {} dealer wins, {} ties",
        report.cards.player_wins, report.cards.dealer_wins, report.cards.ties,
    );
    Ok(())
}
