pub mod config;
pub mod csv_utils;
pub mod error;
pub mod reader;
pub mod records;
pub mod report;
pub mod runner;
pub mod schema;
pub mod store;

pub use config::Config;
pub use error::{BadData, Error};
pub use reader::{BaseballCsvReader, Loaded, RowToRecord, SkippedRow, StatReader, StocksCsvReader};
pub use records::{BaseballStatRecord, Record, StockStatRecord};
pub use runner::{run, run_baseball, run_stocks, RunSummary};
pub use store::{BaseballStatsDao, StatsDao, StatsGateway, StockStatsDao};
