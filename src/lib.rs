pub mod api;
pub mod cli;
pub mod config;
pub mod database;
pub mod display;
pub mod errors;
pub mod pairing;
pub mod services;

use anyhow::Result;
use clap::Parser;
use cli::Cli;
use serde::Serialize;

use crate::config::settings::AppConfig;
use crate::services::server::ServerService;
use crate::services::tournament::TournamentService;

pub use crate::database::models::{Match, Player, PlayerId, Standing};
pub use crate::errors::TournamentError;
pub use crate::pairing::{Pairing, Pairings};

pub fn interpret() -> Cli {
    Cli::parse()
}

pub fn load_config(cli: &Cli) -> AppConfig {
    let config = AppConfig::from_env();
    match &cli.database {
        Some(path) => config.with_database_path(path.clone()),
        None => config,
    }
}

fn open_tournament(config: &AppConfig) -> Result<TournamentService> {
    Ok(TournamentService::open(&config.database)?)
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

pub fn handle_init(config: &AppConfig) -> Result<()> {
    open_tournament(config)?;
    log::info!("Tournament database ready at {}", config.database.path);
    Ok(())
}

pub fn handle_reset(config: &AppConfig) -> Result<()> {
    open_tournament(config)?.reset()?;
    Ok(())
}

pub fn handle_register(config: &AppConfig, name: &str) -> Result<()> {
    let player = open_tournament(config)?.register_player(name)?;
    println!("{}", display::render_player(&player));
    Ok(())
}

pub fn handle_report(config: &AppConfig, winner: PlayerId, loser: PlayerId) -> Result<()> {
    open_tournament(config)?.report_match(winner, loser)?;
    Ok(())
}

pub fn handle_count(config: &AppConfig) -> Result<()> {
    let count = open_tournament(config)?.count_players()?;
    println!("{count}");
    Ok(())
}

pub fn handle_standings(config: &AppConfig, json: bool) -> Result<()> {
    let standings = open_tournament(config)?.player_standings()?;
    if json {
        return print_json(&standings);
    }
    println!("{}", display::render_standings(&standings));
    Ok(())
}

pub fn handle_pairings(config: &AppConfig, json: bool) -> Result<()> {
    let pairings = open_tournament(config)?.swiss_pairings()?;
    if json {
        return print_json(&pairings);
    }
    println!("{}", display::render_pairings(&pairings));
    Ok(())
}

pub fn handle_matches(config: &AppConfig, json: bool) -> Result<()> {
    let matches = open_tournament(config)?.list_matches()?;
    if json {
        return print_json(&matches);
    }
    println!("{}", display::render_matches(&matches));
    Ok(())
}

pub fn handle_delete_matches(config: &AppConfig) -> Result<()> {
    open_tournament(config)?.delete_matches()?;
    Ok(())
}

pub fn handle_delete_players(config: &AppConfig) -> Result<()> {
    open_tournament(config)?.delete_players()?;
    Ok(())
}

pub fn handle_serve(config: AppConfig, port: Option<u16>) -> Result<()> {
    let port = port.unwrap_or(config.server.port);
    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(async {
        let service = ServerService::new(port, config);
        service.run().await
    })
}
