//! File locations for the two pipelines.

use std::env;
use std::path::{Path, PathBuf};

pub const STOCKS_CSV: &str = "StockValuations.csv";
pub const BASEBALL_CSV: &str = "MLB2008.csv";
pub const STOCKS_DB: &str = "stocks.db";
pub const BASEBALL_DB: &str = "baseball.db";

/// Where the pipelines read their input files and keep their databases.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub stocks_csv: PathBuf,
    pub baseball_csv: PathBuf,
    pub stocks_db: PathBuf,
    pub baseball_db: PathBuf,
}

impl Default for Config {
    /// Fixed file names in the current directory.
    fn default() -> Self {
        Self::in_dir(".")
    }
}

impl Config {
    /// Fixed file names inside `dir`.
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        let dir = dir.as_ref();
        Self {
            stocks_csv: dir.join(STOCKS_CSV),
            baseball_csv: dir.join(BASEBALL_CSV),
            stocks_db: dir.join(STOCKS_DB),
            baseball_db: dir.join(BASEBALL_DB),
        }
    }

    /// Resolves the base directory from `STAT_INGEST_HOME`, falling back to the
    /// current directory when it is unset or empty.
    pub fn from_env() -> Self {
        match env::var_os("STAT_INGEST_HOME") {
            Some(home) if !home.is_empty() => Self::in_dir(PathBuf::from(home)),
            _ => Self::default(),
        }
    }
}
