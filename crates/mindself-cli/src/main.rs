use std::path::PathBuf;

use clap::Parser;
use eyre::Result;

use mindself_cli::cli::{Cli, Commands};
use mindself_cli::commands;
use mindself_cli::config::{self, MindselfConfig};
use mindself_cli::logging;
use mindself_cli::state::AppState;

fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();
    logging::init(cli.log_json);

    let config_path = match cli.config {
        Some(path) => path,
        None => config::config_path()?,
    };
    let config = config::load_config(&config_path)?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Commands::List { category } => commands::list(&mut out, category)?,
        Commands::Show { scale_id } => commands::show(&mut out, &scale_id)?,
        Commands::Config {
            retention,
            time_zone,
            data_dir,
        } => {
            let config = update_config(config, retention, time_zone, data_dir, &config_path)?;
            commands::show_config(&mut out, &config_path, &config)?;
        }
        Commands::Take { scale_id } => {
            let mut state = AppState::open(config)?;
            let mut input = std::io::stdin().lock();
            commands::take(&mut state, &mut input, &mut out, &scale_id)?;
        }
        Commands::Score {
            scale_id,
            answers,
            dry_run,
        } => {
            let mut state = AppState::open(config)?;
            commands::score(&mut state, &mut out, &scale_id, &answers, !dry_run)?;
        }
        Commands::History { scale } => {
            let state = AppState::open(config)?;
            commands::history(&state, &mut out, scale.as_deref())?;
        }
        Commands::Trend { scale_id } => {
            let state = AppState::open(config)?;
            commands::trend(&state, &mut out, &scale_id)?;
        }
        Commands::Stats => commands::stats(&AppState::open(config)?, &mut out)?,
        Commands::ClearHistory => {
            commands::clear_history(&mut AppState::open(config)?, &mut out)?;
        }
        Commands::Forget { record_id } => {
            commands::forget(&mut AppState::open(config)?, &mut out, &record_id)?;
        }
    }

    Ok(())
}

fn update_config(
    mut config: MindselfConfig,
    retention: Option<usize>,
    time_zone: Option<String>,
    data_dir: Option<PathBuf>,
    path: &std::path::Path,
) -> Result<MindselfConfig> {
    if retention.is_none() && time_zone.is_none() && data_dir.is_none() {
        return Ok(config);
    }
    if let Some(retention) = retention {
        config.history_retention = retention.max(1);
    }
    if let Some(name) = time_zone {
        mindself_core::time_zone::resolve(Some(&name))?;
        config.time_zone = Some(name);
    }
    if let Some(dir) = data_dir {
        config.data_dir = Some(dir);
    }
    config::save_config(path, &config)?;
    Ok(config)
}
