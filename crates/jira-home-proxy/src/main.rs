//! Jira Home proxy
//!
//! Serves the dashboard's `/project` payload from the upstream Jira API.

use anyhow::{Context, Result};
use clap::Parser;
use jira_home_core::models::Config;
use jira_home_core::storage::{init_config_dir, init_data_dir, ConfigStorage};
use jira_home_proxy::{ApiHandler, ProxyServer};
use std::fs;
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Parser, Debug)]
#[command(name = "jira-homed")]
#[command(about = "Jira Home proxy - project and issue data for the dashboard", long_about = None)]
struct Args {
    /// Config file (defaults to config.json in the user config directory)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Listen address, overrides the config file
    #[arg(short = 'a', long)]
    listen: Option<String>,

    /// Log level, overrides the config file
    #[arg(short, long)]
    log_level: Option<String>,
}

/// Config plus what happened while loading it, reported once logging is up
struct LoadedConfig {
    config: Config,
    created_at: Option<PathBuf>,
    env_overrides: Vec<&'static str>,
}

fn load_config(args: &Args) -> Result<LoadedConfig> {
    let mut created_at = None;
    let mut config = match &args.config {
        Some(path) => ConfigStorage::load_from(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?,
        None => {
            let storage = ConfigStorage::new(init_config_dir()?);
            if !storage.config_path().exists() {
                created_at = Some(storage.config_path());
            }
            storage.load()?
        }
    };

    let env_overrides = config.apply_env_overrides();

    if let Some(listen) = &args.listen {
        config.server.listen_addr = listen.clone();
    }
    if let Some(level) = &args.log_level {
        config.server.log_level = level.clone();
    }

    config.validate().context("Invalid configuration")?;
    Ok(LoadedConfig {
        config,
        created_at,
        env_overrides,
    })
}

fn setup_logging(log_level: &str) -> Result<PathBuf> {
    let data_dir = init_data_dir()?;
    let log_file_path = data_dir.join("proxy.log");

    let log_file = fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_file_path)?;

    // Write to both file and stdout
    use tracing_subscriber::fmt::writer::MakeWriterExt;
    let stdout_writer = std::io::stdout.with_max_level(tracing::Level::INFO);
    let file_writer = log_file.with_max_level(tracing::Level::DEBUG);

    tracing_subscriber::fmt()
        .with_writer(stdout_writer.and(file_writer))
        .with_env_filter(log_level)
        .with_ansi(false)
        .init();

    Ok(log_file_path)
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    let LoadedConfig {
        config,
        created_at,
        env_overrides,
    } = load_config(&args)?;

    let log_file_path = setup_logging(&config.server.log_level)?;

    tracing::info!("Jira Home proxy starting...");
    tracing::info!("Log file: {}", log_file_path.display());
    if let Some(path) = created_at {
        tracing::info!("Created default config at {}", path.display());
    }
    for name in env_overrides {
        tracing::debug!("Config value overridden by {}", name);
    }
    tracing::info!(
        "Project key: {}, upstream: {}",
        config.jira.project_key,
        config.jira.api_root()
    );

    let api_handler = Arc::new(ApiHandler::new(config.jira));
    tracing::info!("API handler initialized");

    let server = ProxyServer::new(config.server, api_handler);
    server.start().await?;

    Ok(())
}
