mod cli;
mod config;
mod db;
mod haptics;
mod models;
mod tally;
mod tui;
mod utils;

use anyhow::{Context, Result};
use clap::Parser;
use rusqlite::Connection;

use cli::args::{Cli, Commands};
use cli::handlers;
use config::AppConfig;
use db::migrations::run_migrations;
use db::{KvStore, MemoryStore, SqliteStore};
use haptics::TerminalBell;
use tally::Tally;
use utils::ambient::host_prefers_dark;

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let config = AppConfig::load().context("Loading config")?;

    // Config management never touches the store
    if let Some(Commands::Config { init, path }) = cli.command {
        return handlers::handle_config(&config, init, path);
    }

    let store: Box<dyn KvStore> = if cli.ephemeral {
        log::info!("ephemeral session, counts will not be saved");
        Box::new(MemoryStore::new())
    } else {
        Box::new(open_store()?)
    };

    let prefer = config.appearance.prefer;
    let mut tally = Tally::open(store, || host_prefers_dark(prefer));

    match cli.command {
        Some(Commands::Press { mode, times }) => {
            let sink = TerminalBell::new(config.haptics.enabled);
            handlers::handle_press(&mut tally, &sink, mode, times)?;
        }
        Some(Commands::Reset { mode }) => {
            handlers::handle_reset(&mut tally, mode)?;
        }
        Some(Commands::Theme) => {
            handlers::handle_theme(&mut tally)?;
        }
        Some(Commands::Show { json }) => {
            handlers::handle_show(&tally, json)?;
        }
        Some(Commands::Config { .. }) => unreachable!(),

        // No subcommand → launch TUI
        None => {
            tui::app::run(tally, &config)?;
        }
    }

    Ok(())
}

fn open_store() -> Result<SqliteStore> {
    AppConfig::ensure_data_dir()?;
    let db_path = AppConfig::db_path()?;
    let conn = Connection::open(&db_path)
        .with_context(|| format!("Opening database at {:?}", db_path))?;

    // WAL lets a second session read while another writes
    conn.execute_batch("PRAGMA journal_mode=WAL;")?;

    run_migrations(&conn)?;
    Ok(SqliteStore::new(conn))
}
