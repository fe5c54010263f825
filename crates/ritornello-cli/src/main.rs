use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

mod commands;
mod config;

use config::Config;

#[derive(Debug, Parser)]
#[command(name = "ritornello", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Path to the catalog JSON (default: ~/.local/share/ritornello/catalog.json)
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,

    /// Path to the similarity matrix JSON (default: ~/.local/share/ritornello/similarity.json)
    #[arg(long, global = true)]
    similarity: Option<PathBuf>,
}

#[derive(Debug, clap::Subcommand)]
enum Commands {
    /// List every track title in the catalog, in load order
    ///
    /// The catalog is the ordered track table produced by the offline
    /// build step. Its order is stable, so the same dataset always
    /// lists the same way; pick any printed title as the argument to
    /// `ritornello recommend`.
    Tracks,
    /// Recommend tracks similar to a catalog track
    ///
    /// Ranks every other catalog track by its precomputed similarity
    /// to TITLE and prints the top K as cards with cover art, an audio
    /// preview link when Spotify has one, and a listen link. With no
    /// TITLE, the first track in the catalog is used.
    ///
    /// Cover art and links come from the Spotify Web API and require
    /// client credentials (see `ritornello config init`). Without
    /// credentials, or when a track has no match, a placeholder cover
    /// is shown instead; the recommendation list itself never shrinks.
    Recommend {
        /// Title of the query track (default: first track in the catalog)
        title: Option<String>,

        /// How many similar tracks to return
        #[arg(short, long, default_value_t = 5)]
        k: usize,
    },
    /// Inspect or scaffold configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Debug, clap::Subcommand)]
enum ConfigAction {
    /// Print the effective configuration (secrets redacted)
    Show,
    /// Write a commented example config file if none exists
    Init,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    let mut config = Config::load()?;
    if let Some(catalog) = cli.catalog {
        config.catalog_path = catalog;
    }
    if let Some(similarity) = cli.similarity {
        config.similarity_path = similarity;
    }

    match cli.command {
        Commands::Tracks => {
            commands::run_tracks(&config)?;
        }
        Commands::Recommend { title, k } => {
            commands::run_recommend(&config, title, k).await?;
        }
        Commands::Config { action } => match action {
            ConfigAction::Show => commands::show_config(&config)?,
            ConfigAction::Init => commands::init_config()?,
        },
    }

    Ok(())
}
