use bookcat::api::CatalogApi;
use bookcat::config::CatalogConfig;
use bookcat::error::Result;
use bookcat::logging;
use bookcat::store::fs::FileStore;
use clap::Parser;
use std::io;

mod args;
mod cli;

use args::Cli;
use cli::menu::Menu;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let _cli = Cli::parse();

    let cwd = std::env::current_dir()?;
    let config = CatalogConfig::load(&cwd)?;
    logging::init(&config.log_level)?;

    let store = FileStore::new(config.data_path(&cwd));
    tracing::debug!(path = %store.path().display(), "opening catalog");
    let mut api = CatalogApi::open(store)?;

    let stdin = io::stdin();
    let stdout = io::stdout();
    Menu::new(&mut api, stdin.lock(), stdout.lock()).run()
}
