mod delivery;
mod scheduler;

use std::path::{Path, PathBuf};
use std::sync::Arc;

use careersignal_core::{AppConfig, Preferences};
use careersignal_feed::{parse_snapshot, CycleOutcome, FeedClient, Presenter, Watcher};
use clap::{Parser, Subcommand};
use tokio::sync::Mutex;
use tracing_subscriber::EnvFilter;

use crate::delivery::{PreferencesToggle, SnapshotPresenter, TerminalNotifier};

#[derive(Debug, Parser)]
#[command(name = "careersignal")]
#[command(about = "Watch an internship feed and alert on new postings")]
struct Cli {
    /// Feed URL; overrides `CAREERSIGNAL_FEED_URL`.
    #[arg(long, global = true)]
    feed_url: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Poll the feed forever (default).
    Watch {
        /// Poll period in seconds; overrides `CAREERSIGNAL_POLL_INTERVAL_SECS`.
        #[arg(long, value_parser = clap::value_parser!(u64).range(1..))]
        interval_secs: Option<u64>,
    },
    /// Fetch and print the feed once.
    Check,
    /// Parse a local markdown file and print the postings it contains.
    Parse { file: PathBuf },
    /// Show or change whether new-posting alerts fire.
    Alerts {
        #[command(subcommand)]
        command: AlertsCommands,
    },
}

#[derive(Debug, Subcommand)]
enum AlertsCommands {
    On,
    Off,
    Status,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = careersignal_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    if let Some(feed_url) = cli.feed_url {
        config.feed_url = feed_url;
    }

    match cli.command {
        None => watch(&config).await,
        Some(Commands::Watch { interval_secs }) => {
            if let Some(secs) = interval_secs {
                config.poll_interval_secs = secs;
            }
            watch(&config).await
        }
        Some(Commands::Check) => check(&config).await,
        Some(Commands::Parse { file }) => parse_file(&config, &file),
        Some(Commands::Alerts { command }) => alerts(&config, &command),
    }
}

type TerminalWatcher = Watcher<FeedClient, TerminalNotifier, PreferencesToggle, SnapshotPresenter>;

fn build_watcher(config: &AppConfig) -> anyhow::Result<TerminalWatcher> {
    let client = FeedClient::new(
        &config.feed_url,
        config.fetch_timeout_secs,
        &config.user_agent,
    )
    .map_err(|e| anyhow::anyhow!("failed to build feed client: {e}"))?;

    Ok(Watcher::new(
        client,
        TerminalNotifier,
        PreferencesToggle::new(config.preferences_path.clone()),
        SnapshotPresenter::new(config.snapshot_path.clone()),
    ))
}

async fn watch(config: &AppConfig) -> anyhow::Result<()> {
    let watcher = build_watcher(config)?;

    tracing::info!(
        feed_url = watcher.source().url(),
        interval_secs = config.poll_interval_secs,
        timeout_secs = config.fetch_timeout_secs,
        "watch: starting"
    );

    let watcher = Arc::new(Mutex::new(watcher));
    let mut scheduler = scheduler::start_polling(watcher, config.poll_interval()).await?;
    shutdown_signal().await;
    scheduler.shutdown().await?;
    Ok(())
}

async fn check(config: &AppConfig) -> anyhow::Result<()> {
    let mut watcher = build_watcher(config)?;
    match watcher.run_cycle().await {
        CycleOutcome::Completed(_) => Ok(()),
        CycleOutcome::FetchFailed(e) => {
            Err(anyhow::anyhow!("failed to fetch {}: {e}", config.feed_url))
        }
    }
}

fn parse_file(config: &AppConfig, file: &Path) -> anyhow::Result<()> {
    let document = std::fs::read_to_string(file)
        .map_err(|e| anyhow::anyhow!("failed to read {}: {e}", file.display()))?;
    let records = parse_snapshot(&document);
    SnapshotPresenter::new(config.snapshot_path.clone()).replace(&records);
    Ok(())
}

fn alerts(config: &AppConfig, command: &AlertsCommands) -> anyhow::Result<()> {
    let path = &config.preferences_path;
    let mut prefs = Preferences::load(path)?;

    match command {
        AlertsCommands::On => prefs.alerts_enabled = true,
        AlertsCommands::Off => prefs.alerts_enabled = false,
        AlertsCommands::Status => {
            println!(
                "alerts are {}",
                if prefs.alerts_enabled { "on" } else { "off" }
            );
            return Ok(());
        }
    }

    prefs.save(path)?;
    tracing::info!(
        path = %path.display(),
        alerts_enabled = prefs.alerts_enabled,
        "alerts: preference saved"
    );
    println!(
        "alerts turned {}",
        if prefs.alerts_enabled { "on" } else { "off" }
    );
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to listen for ctrl-c");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    tracing::info!("received shutdown signal, stopping feed polling");
}

#[cfg(test)]
mod tests;
