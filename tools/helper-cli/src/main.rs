//! Fantasy Helper CLI
//!
//! Terminal views over a Sleeper league:
//! - leagues: leagues a user plays in for a season
//! - dashboard: roster table, needs, positional mix, ages, traded picks and targets
//! - ratings: every team in the league rated and compared

mod render;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use league_analytics::{league_ratings, Dashboard};
use sleeper_provider::logging::initialize_logging;
use sleeper_provider::{
    load_league_snapshot, load_user_leagues, select_provider, HelperConfig, SelectedProvider,
    SessionSettings,
};
use tracing::{debug, info};

#[derive(Parser)]
#[command(name = "fantasy-helper")]
#[command(about = "Sleeper league helper - roster tiers, needs, targets and league ratings")]
#[command(version = "0.1.0")]
struct Cli {
    /// Use the built-in demonstration data instead of the Sleeper API
    #[arg(long, global = true)]
    mock: bool,

    /// Log level when RUST_LOG is unset
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List a user's leagues for a season
    Leagues {
        /// Sleeper username
        #[arg(short, long)]
        username: String,

        /// Four-digit season, defaults to the current year
        #[arg(short, long)]
        season: Option<String>,
    },

    /// Roster dashboard for one user in one league
    Dashboard {
        /// Sleeper username
        #[arg(short, long)]
        username: String,

        /// Four-digit season, defaults to the current year
        #[arg(short, long)]
        season: Option<String>,

        /// League ID, defaults to the user's first league
        #[arg(short, long)]
        league: Option<String>,
    },

    /// Rate every team in a league
    Ratings {
        /// League ID
        #[arg(short, long)]
        league: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();

    let cli = Cli::parse();
    initialize_logging(&cli.log_level, "compact")?;

    let config = HelperConfig::from_env().context("Failed to load configuration")?;
    let selected = select_provider(&config, cli.mock).await?;
    render::print_source_banner(&selected);

    match cli.command {
        Commands::Leagues { username, season } => {
            let settings = session(username, season)?;
            run_leagues(&selected, &settings).await
        }
        Commands::Dashboard { username, season, league } => {
            let mut settings = session(username, season)?;
            if let Some(league_id) = league {
                settings = settings.with_league(league_id);
            }
            run_dashboard(&selected, &config, settings).await
        }
        Commands::Ratings { league } => run_ratings(&selected, &config, &league).await,
    }
}

fn session(username: String, season: Option<String>) -> Result<SessionSettings> {
    let season = season.unwrap_or_else(SessionSettings::current_season);
    Ok(SessionSettings::new(username, season)?)
}

async fn run_leagues(selected: &SelectedProvider, settings: &SessionSettings) -> Result<()> {
    let leagues = load_user_leagues(selected.provider(), settings)
        .await
        .with_context(|| format!("Failed to load leagues for {}", settings.username))?;

    render::print_leagues(&settings.username, &settings.season, &leagues);
    Ok(())
}

async fn run_dashboard(
    selected: &SelectedProvider,
    config: &HelperConfig,
    mut settings: SessionSettings,
) -> Result<()> {
    if settings.league_id.is_none() {
        let leagues = load_user_leagues(selected.provider(), &settings)
            .await
            .with_context(|| format!("Failed to load leagues for {}", settings.username))?;
        let Some(first) = leagues.first() else {
            let message =
                format!("No leagues found for {} in {}", settings.username, settings.season);
            println!("{}", message.yellow());
            return Ok(());
        };
        info!("No league given, using {} ({})", first.display_name(), first.league_id);
        settings = settings.with_league(first.league_id.clone());
    }

    let league_id = settings.league_id.as_deref().unwrap_or_default();
    let snapshot = load_league_snapshot(selected.provider(), league_id, &config.trending)
        .await
        .with_context(|| format!("Failed to load league {league_id}"))?;

    match Dashboard::for_user(&snapshot, &settings.username) {
        Some(dashboard) => {
            debug!("Dashboard ready for roster {}", dashboard.roster_id);
            render::print_dashboard(&dashboard);
        }
        None => println!("{}", format!("League {league_id} has no rosters").yellow()),
    }
    Ok(())
}

async fn run_ratings(
    selected: &SelectedProvider,
    config: &HelperConfig,
    league_id: &str,
) -> Result<()> {
    let snapshot = load_league_snapshot(selected.provider(), league_id, &config.trending)
        .await
        .with_context(|| format!("Failed to load league {league_id}"))?;

    render::print_ratings(&league_ratings(&snapshot));
    Ok(())
}
