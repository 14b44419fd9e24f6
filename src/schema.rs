//! One-time table setup. The gateways in [`crate::store`] expect these tables to exist.
//!
//! Numeric columns are `DOUBLE`: a DuckDB `REAL` is a 4-byte float and would not
//! return the values that were inserted.

use std::path::Path;

use duckdb::Connection;

pub const BASEBALL_STATS_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS baseball_stats (
    player_name TEXT,
    games_played DOUBLE,
    average DOUBLE,
    salary DOUBLE
);
"#;

pub const STOCK_STATS_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS stock_stats (
    company_name TEXT,
    ticker TEXT,
    country TEXT,
    price DOUBLE,
    exchange_rate DOUBLE,
    shares_outstanding DOUBLE,
    net_income DOUBLE,
    market_value DOUBLE,
    pe_ratio DOUBLE
);
"#;

pub fn create_baseball_table(db_path: &Path) -> Result<(), duckdb::Error> {
    let connection = Connection::open(db_path)?;
    connection.execute_batch(BASEBALL_STATS_TABLE)
}

pub fn create_stock_table(db_path: &Path) -> Result<(), duckdb::Error> {
    let connection = Connection::open(db_path)?;
    connection.execute_batch(STOCK_STATS_TABLE)
}
