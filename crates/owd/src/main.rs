//! owd - Overwatch profile statistics exporter
//!
//! Serves roster management, parse triggers and a Prometheus scrape target.

use anyhow::Result;
use clap::{Parser, Subcommand};
use owd::{commands, Config};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "owd")]
#[command(about = "Overwatch profile statistics exporter", long_about = None)]
#[command(version)]
struct Cli {
    /// Config file (TOML)
    #[arg(long, global = true, env = "OWD_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the HTTP server and the periodic sweep (default)
    Serve,

    /// Resolve, fetch and parse one player, print the profile as JSON
    Parse {
        /// BattleTag, e.g. "Name#1234"
        battletag: String,
    },

    /// Parse a saved profile page
    ParseFile {
        path: PathBuf,

        /// Handle recorded in the parsed profile
        #[arg(long, default_value = "local")]
        handle: String,

        /// Print the full profile as JSON
        #[arg(long)]
        json: bool,
    },

    /// Manage the player roster
    Players {
        #[command(subcommand)]
        action: PlayersCommands,
    },

    /// Show the metric descriptor catalog
    Catalog {
        /// Hero id, e.g. "soldier-76"
        hero: Option<String>,
    },
}

#[derive(Subcommand)]
enum PlayersCommands {
    /// List roster entries and their resolution status
    List,

    /// Resolve a BattleTag and add it to the roster
    Add { battletag: String },

    /// Remove a BattleTag from the roster
    Remove { battletag: String },

    /// Resolve roster entries that have no address yet
    ResolveAll {
        /// Resolve every entry, including already resolved ones
        #[arg(long)]
        force: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::load(cli.config.as_deref())?;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.logging.level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
    config.source.log();

    match cli.command.unwrap_or(Commands::Serve) {
        Commands::Serve => commands::serve(&config).await,
        Commands::Parse { battletag } => commands::parse(&config, &battletag).await,
        Commands::ParseFile { path, handle, json } => commands::parse_file(&path, &handle, json),
        Commands::Players { action } => match action {
            PlayersCommands::List => commands::players_list(&config).await,
            PlayersCommands::Add { battletag } => commands::players_add(&config, &battletag).await,
            PlayersCommands::Remove { battletag } => {
                commands::players_remove(&config, &battletag).await
            }
            PlayersCommands::ResolveAll { force } => commands::resolve_all(&config, force).await,
        },
        Commands::Catalog { hero } => commands::catalog(hero.as_deref()),
    }
}
