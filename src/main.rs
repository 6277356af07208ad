mod discogs;
mod error;
mod finder;

use std::time::Duration;

use anyhow::{Context, Result, ensure};
use clap::{CommandFactory, Parser, Subcommand};
use log::{error, info};

/// Keeps guessing Discogs release IDs until it finds a release with videos, then prints it
#[derive(Parser)]
#[command(version, author, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Discogs API base URL
    #[arg(long, default_value = discogs::DEFAULT_BASE_URL)]
    base_url: String,

    /// User-Agent header sent with every request
    #[arg(long, default_value = discogs::DEFAULT_USER_AGENT)]
    user_agent: String,

    /// Per-request timeout in seconds
    #[arg(long, default_value_t = discogs::DEFAULT_TIMEOUT.as_secs())]
    timeout: u64,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate shell completions
    Completions {
        /// The shell to generate the completions for
        #[arg(value_enum)]
        shell: clap_complete_command::Shell,
    },
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Completions { shell }) => {
            shell.generate(&mut Cli::command(), &mut std::io::stdout());
        }
        None => {
            ensure!(cli.timeout > 0, "timeout must be at least one second");

            let client = discogs::Client::new(
                &cli.base_url,
                &cli.user_agent,
                Duration::from_secs(cli.timeout),
            )?;
            let found = finder::find_release(&client, discogs::release_ids(rand::rng()))
                .await
                .inspect_err(|err| error!("{err}"))
                .context("failed to find a release with videos")?;

            info!(
                "Found release {} after {} attempt(s)",
                found.release_id, found.attempts,
            );
            println!("{:#?}", found.release);
        }
    }
    Ok(())
}
