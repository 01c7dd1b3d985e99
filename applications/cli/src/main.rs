/// DoraMusic CLI - drive the page controllers from a terminal
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod config;

use config::DoraConfig;

#[derive(Parser)]
#[command(name = "dora")]
#[command(about = "DoraMusic player pages as JSON", long_about = None)]
struct Cli {
    /// Configuration file path (defaults to ./dora.toml when present)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render the page at a path (`/`, `/library`, `/playlist/dora-favs`)
    Render {
        /// Location path
        path: String,
    },
    /// Search the catalog
    Search {
        /// Search term
        query: String,
    },
    /// Mount a page, replay UI events and print the result
    Session {
        /// Location path
        path: String,
        /// Events in order (`play=s1`, `seek=50`, `play-pause`, `tick=30`)
        #[arg(short, long = "event")]
        events: Vec<String>,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = DoraConfig::load(cli.config.as_deref())?;

    // Initialize tracing (stdout carries the JSON output)
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.log_filter.as_str().into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let ctx = config.page_context()?;

    let output = match cli.command {
        Commands::Render { path } => commands::render(&ctx, &path)?,
        Commands::Search { query } => commands::search(&ctx, &query)?,
        Commands::Session { path, events } => {
            serde_json::to_value(commands::session(&ctx, &path, &events)?)?
        }
    };

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn session_collects_repeated_events() {
        let cli = Cli::try_parse_from([
            "dora", "session", "/now-playing", "-e", "mute", "--event", "seek=10",
        ])
        .unwrap();

        match cli.command {
            Commands::Session { path, events } => {
                assert_eq!(path, "/now-playing");
                assert_eq!(events, vec!["mute", "seek=10"]);
            }
            _ => panic!("expected session"),
        }
    }

    #[test]
    fn config_flag_after_subcommand() {
        let cli = Cli::try_parse_from(["dora", "search", "dora", "--config", "alt.toml"]).unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("alt.toml")));
    }
}
