use std::io::Write;

use log::info;

use crate::{
    config::Config,
    error::Error,
    reader::{BaseballCsvReader, RowToRecord, StocksCsvReader},
    report::{salary_by_average, tickers_by_country, write_country_report, write_salary_report},
    store::{BaseballStatsDao, StatsDao, StockStatsDao},
};

/// Row counts from one pipeline run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    pub inserted: usize,
    pub skipped: usize,
}

/// Loads the stock file, stores it, reads the table back and writes the
/// ticker-count-per-country report.
///
/// # Errors
/// Returns an error if:
/// * The input file cannot be read
/// * The database cannot be opened or its table is missing
/// * Writing to the output fails
pub fn run_stocks<W: Write>(config: &Config, writer: W) -> Result<RunSummary, Error> {
    let loaded = StocksCsvReader::new(&config.stocks_csv).load()?;
    let dao = StockStatsDao::new(&config.stocks_db);
    dao.insert_records(&loaded.records)?;

    let stocks = dao.select_all()?;
    write_country_report(writer, &tickers_by_country(&stocks))?;

    let summary = RunSummary {
        inserted: loaded.records.len(),
        skipped: loaded.skipped.len(),
    };
    info!("stocks: {:?}", summary);
    Ok(summary)
}

/// Loads the baseball file, stores it, reads the table back and writes the
/// mean-salary-per-batting-average report.
///
/// # Errors
/// Same conditions as [`run_stocks`].
pub fn run_baseball<W: Write>(config: &Config, writer: W) -> Result<RunSummary, Error> {
    let loaded = BaseballCsvReader::new(&config.baseball_csv).load()?;
    let dao = BaseballStatsDao::new(&config.baseball_db);
    dao.insert_records(&loaded.records)?;

    let players = dao.select_all()?;
    write_salary_report(writer, &salary_by_average(&players))?;

    let summary = RunSummary {
        inserted: loaded.records.len(),
        skipped: loaded.skipped.len(),
    };
    info!("baseball: {:?}", summary);
    Ok(summary)
}

/// Runs the stock pipeline, then the baseball pipeline, writing both reports.
pub fn run<W: Write>(config: &Config, mut writer: W) -> Result<(), Error> {
    run_stocks(config, &mut writer)?;
    run_baseball(config, &mut writer)?;
    Ok(())
}
