use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use airtrack_app::config::AppConfig;
use airtrack_app::console;
use airtrack_app::error::AppResult;
use airtrack_app::state::AppState;
use airtrack_app::core::enums::ScenarioId;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum ScenarioArg {
    Empty,
    Airport,
    Random,
}

#[derive(Parser, Debug)]
#[command(author, version, about = "Track aircraft around an airport", long_about = None)]
struct Cli {
    /// JSON configuration file.
    #[arg(short, long)]
    config: Option<PathBuf>,
    /// Initial track population.
    #[arg(short, long, value_enum)]
    scenario: Option<ScenarioArg>,
    /// Number of tracks for the random scenario.
    #[arg(long, default_value_t = 10)]
    count: u32,
    /// Seed for the random scenario.
    #[arg(long)]
    seed: Option<u64>,
    /// Pretty-print responses.
    #[arg(short, long)]
    pretty: bool,
}

fn load_config(cli: &Cli) -> AppResult<AppConfig> {
    let mut config = match &cli.config {
        Some(path) => AppConfig::load(path)?,
        None => AppConfig::default(),
    };
    if let Some(scenario) = cli.scenario {
        config.engine.scenario = match scenario {
            ScenarioArg::Empty => ScenarioId::Empty,
            ScenarioArg::Airport => ScenarioId::Airport,
            ScenarioArg::Random => ScenarioId::RandomTraffic { count: cli.count },
        };
    }
    if let Some(seed) = cli.seed {
        config.engine.seed = seed;
    }
    config.pretty |= cli.pretty;
    Ok(config)
}

fn main() -> AppResult<()> {
    let cli = Cli::parse();
    let config = load_config(&cli)?;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    info!(?config, "starting airtrack console");
    let state = AppState::new(config.engine);

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    if let Err(e) = console::run(&state, stdin.lock(), stdout.lock(), config.pretty) {
        error!("console stopped: {e}");
        return Err(e);
    }
    Ok(())
}
