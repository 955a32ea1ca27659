use std::path::PathBuf;
use clap::Parser;
use env_logger::Env;
use log::info;

use crate::config::LedgerConfig;
use crate::db::Database;

mod chart;
mod common;
mod config;
mod controller;
mod csv_reader;
mod db;
mod editor;
mod input;
mod report;
mod transaction;
mod util;

#[derive(Parser)]
#[clap(author, version, about, long_about = None)]
#[clap(propagate_version = true)]
struct Cli {
    /// Ledger file path, overrides the config file
    #[clap(long)]
    file: Option<PathBuf>,

    /// Config file, defaults to finledger/config.toml in the user's config directory
    #[clap(long)]
    config: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let cli: Cli = Cli::parse();

    let mut config = LedgerConfig::load(cli.config.as_deref())?;
    if let Some(file) = cli.file {
        config.file_path = file;
    }
    info!("Using ledger file {}", config.file_path.display());

    let db = Database::new(config);
    db.initialize()?;

    let mut rl = editor::new_editor()?;
    let result = controller::run(&db, &mut rl);
    editor::save_history(&mut rl);
    result
}
