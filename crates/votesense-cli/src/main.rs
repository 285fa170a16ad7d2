mod sentiment;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use crate::sentiment::SentimentCommands;

#[derive(Debug, Parser)]
#[command(name = "votesense")]
#[command(about = "Candidate sentiment aggregation")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Aggregate and classify comment sentiment
    Sentiment {
        #[command(subcommand)]
        command: SentimentCommands,
    },
    /// Inspect resolved configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

#[derive(Debug, Subcommand)]
enum ConfigCommands {
    /// Print the configuration resolved from the environment
    Show,
}

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = votesense_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.command {
        Some(Commands::Sentiment { command }) => {
            let output = sentiment::run(&config, command)?;
            print!("{output}");
        }
        Some(Commands::Config {
            command: ConfigCommands::Show,
        }) => println!("{config:#?}"),
        None => println!("votesense: run `votesense --help` for usage"),
    }

    Ok(())
}

#[cfg(test)]
mod tests;
