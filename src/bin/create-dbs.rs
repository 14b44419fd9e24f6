//! Creates the `baseball_stats` and `stock_stats` tables the ingest pipeline writes to.
//! Safe to run more than once.

use std::error::Error;
use std::process;

use stat_ingest::schema::{create_baseball_table, create_stock_table};
use stat_ingest::Config;

fn main() {
    env_logger::init();
    if let Err(err) = run_app() {
        eprintln!("Error: {}", err);
        process::exit(1);
    }
}

fn run_app() -> Result<(), Box<dyn Error>> {
    let config = Config::from_env();
    create_baseball_table(&config.baseball_db)?;
    log::info!("baseball_stats ready in {}", config.baseball_db.display());
    create_stock_table(&config.stocks_db)?;
    log::info!("stock_stats ready in {}", config.stocks_db.display());
    Ok(())
}
