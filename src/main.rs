use std::error::Error;
use std::io;
use std::process;

use stat_ingest::{run, Config};

fn main() {
    env_logger::init();
    if let Err(err) = run_app() {
        eprintln!("Error: {}", err);
        process::exit(1);
    }
}

fn run_app() -> Result<(), Box<dyn Error>> {
    let config = Config::from_env();
    log::debug!("using {:?}", config);
    run(&config, io::stdout().lock())?;
    Ok(())
}
