mod burndown;
mod chart;
mod cli;
mod client;
mod commands;
mod config;
mod error;
mod normalize;
mod output;
mod project;
mod responses;
mod types;

use std::error::Error;
use std::io;

use clap::{CommandFactory, Parser};
use clap_complete::generate;

use cli::{Cli, Commands};
use client::GitHubClient;
use config::Config;
use error::Result;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let cli = Cli::parse();
    let verbose = cli.verbose;

    if let Err(e) = run(cli).await {
        eprintln!("Error: {e}");

        // Show error chain if verbose flag was passed
        if verbose {
            let mut source = e.source();
            while let Some(cause) = source {
                eprintln!("Caused by: {cause}");
                source = std::error::Error::source(cause);
            }
        }

        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<()> {
    output::set_json_output(cli.json);

    match cli.command {
        // Completions need no config or client
        Commands::Completions { shell } => {
            let mut cmd = Cli::command();
            generate(shell, &mut cmd, "burndown", &mut io::stdout());
        }
        command => {
            let config = Config::load()?;
            let client = GitHubClient::new(config.api_token()?);

            match command {
                Commands::Cards(args) => {
                    commands::cards::list(&client, &config, args).await?;
                }
                Commands::Chart(args) => {
                    commands::chart::generate(&client, &config, args).await?;
                }
                Commands::Completions { .. } => {
                    // Already handled above
                }
            }
        }
    }

    Ok(())
}
