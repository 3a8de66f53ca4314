use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use dictionary::{Dictionary, RelationshipType};
use rand::{rngs::StdRng, SeedableRng};
use tracing::info;
use tracing_subscriber::EnvFilter;

use cli::{Cli, Command};
use console::Terminal;
use game::Game;

mod cli;
mod commands;
mod console;
mod game;
#[cfg(test)]
mod testing;
mod utilities;

#[tokio::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();
    // stdout belongs to the game, diagnostics go to stderr
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    match run(Cli::parse()).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            println!("Some error occurred: {error:#}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let dict = Dictionary::new(cli.api_config()).context("could not set up the dictionary")?;
    let mut console = Terminal::new();
    let command = cli.command.unwrap_or(Command::Play);
    info!(?command, host = %cli.host, "running command");
    match command {
        Command::Defn { word } => commands::define(&dict, &mut console, &word).await?,
        Command::Syn { word } => {
            commands::related(&dict, &mut console, &word, RelationshipType::Synonym).await?
        }
        Command::Ant { word } => {
            commands::related(&dict, &mut console, &word, RelationshipType::Antonym).await?
        }
        Command::Ex { word } => commands::examples(&dict, &mut console, &word).await?,
        Command::Dict { word } => commands::full_entry(&dict, &mut console, &word).await?,
        Command::Play => {
            let mut game = Game::new(dict, console, StdRng::from_entropy());
            game.play().await?;
        }
    }
    Ok(())
}
