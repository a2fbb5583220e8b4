//! Echo terminal companion
//!
//! Launches the TUI, or writes a default config with `echo init-config`.

use anyhow::{bail, Context, Result};
use clap::Parser;

use echo_app::{AppState, Preferences};
use echo_terminal::config::EchoConfig;
use echo_terminal::tui::{run_terminal, RuntimeSettings, TuiState};
use echo_terminal::{logging, Cli, Command};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command() {
        Command::InitConfig { force } => init_config(&cli, *force),
        Command::Run => run(&cli).await,
    }
}

fn init_config(cli: &Cli, force: bool) -> Result<()> {
    let path = match cli.config.clone().or_else(EchoConfig::default_path) {
        Some(path) => path,
        None => bail!("no config directory on this platform; pass --config"),
    };
    if path.exists() && !force {
        bail!("{} already exists (use --force to overwrite)", path.display());
    }
    EchoConfig::default()
        .save(&path)
        .with_context(|| format!("writing {}", path.display()))?;
    println!("Wrote {}", path.display());
    Ok(())
}

async fn run(cli: &Cli) -> Result<()> {
    let (config, config_path) =
        EchoConfig::discover(cli.config.as_deref()).context("loading configuration")?;

    let log_path = logging::resolve_log_path(cli.log_file.as_deref(), &config.logging);
    let filter = logging::build_filter(&config.logging, cli.verbose)?;
    logging::init(&log_path, filter).context("initialising logging")?;

    match &config_path {
        Some(path) => tracing::info!(path = %path.display(), "using config file"),
        None => tracing::info!("no config file found, using defaults"),
    }

    let preferences = Preferences {
        dark_mode: config.ui.dark_mode && !cli.light,
        ..Preferences::default()
    };
    let state = TuiState::with_app(AppState::new().with_preferences(preferences));

    run_terminal(state, RuntimeSettings::from_config(&config)).await?;
    Ok(())
}
