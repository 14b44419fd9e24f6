//! Storage gateways mapping records to and from their DuckDB tables.
//!
//! Every call opens its own connection to the database file and closes it when
//! done. Tables are never created here, see [`crate::schema`].

use std::path::{Path, PathBuf};

use duckdb::{Connection, ToSql};
use log::debug;

use crate::error::Error;
use crate::records::{BaseballStatRecord, Record, StockStatRecord};

/// Bulk insert and full read-back of one dataset's table.
pub trait StatsDao {
    type Record;

    fn db_path(&self) -> &Path;

    fn connect(&self) -> Result<Connection, Error> {
        Ok(Connection::open(self.db_path())?)
    }

    /// Appends every record as one row, committing them together.
    ///
    /// # Errors
    /// Returns an error if the database cannot be opened or any insert fails; in
    /// that case nothing is committed.
    fn insert_records(&self, records: &[Self::Record]) -> Result<(), Error>;

    /// Reads every row of the table in the store's native order.
    fn select_all(&self) -> Result<Vec<Self::Record>, Error>;
}

#[derive(Debug, Clone)]
pub struct BaseballStatsDao {
    db_path: PathBuf,
}

impl BaseballStatsDao {
    pub fn new(db_path: impl Into<PathBuf>) -> Self {
        Self {
            db_path: db_path.into(),
        }
    }
}

impl StatsDao for BaseballStatsDao {
    type Record = BaseballStatRecord;

    fn db_path(&self) -> &Path {
        &self.db_path
    }

    fn insert_records(&self, records: &[BaseballStatRecord]) -> Result<(), Error> {
        if records.is_empty() {
            return Ok(());
        }

        let connection = self.connect()?;
        connection.execute_batch("BEGIN TRANSACTION")?;
        let result = (|| -> Result<(), Error> {
            let mut statement = connection.prepare(
                "INSERT INTO baseball_stats (player_name, games_played, average, salary) \
                 VALUES (?, ?, ?, ?)",
            )?;
            for record in records {
                let games_played = f64::from(record.games_played);
                let params: [&dyn ToSql; 4] = [
                    &record.name,
                    &games_played,
                    &record.batting_average,
                    &record.salary,
                ];
                statement.execute(params.as_slice())?;
            }
            Ok(())
        })();

        finalize_transaction(&connection, result)?;
        debug!("inserted {} rows into baseball_stats", records.len());
        Ok(())
    }

    fn select_all(&self) -> Result<Vec<BaseballStatRecord>, Error> {
        let connection = self.connect()?;
        let mut statement = connection
            .prepare("SELECT player_name, games_played, average, salary FROM baseball_stats")?;
        let rows = statement
            .query_map([], |row| {
                Ok((
                    row.get::<_, String>(0)?,
                    row.get::<_, f64>(1)?,
                    row.get::<_, f64>(2)?,
                    row.get::<_, f64>(3)?,
                ))
            })?
            .collect::<Result<Vec<_>, _>>()?;

        rows.into_iter()
            .map(|(name, games_played, average, salary)| -> Result<_, Error> {
                Ok(BaseballStatRecord::new(
                    name,
                    salary,
                    games_from_real(games_played)?,
                    average,
                ))
            })
            .collect()
    }
}

#[derive(Debug, Clone)]
pub struct StockStatsDao {
    db_path: PathBuf,
}

impl StockStatsDao {
    pub fn new(db_path: impl Into<PathBuf>) -> Self {
        Self {
            db_path: db_path.into(),
        }
    }
}

impl StatsDao for StockStatsDao {
    type Record = StockStatRecord;

    fn db_path(&self) -> &Path {
        &self.db_path
    }

    fn insert_records(&self, records: &[StockStatRecord]) -> Result<(), Error> {
        if records.is_empty() {
            return Ok(());
        }

        let connection = self.connect()?;
        connection.execute_batch("BEGIN TRANSACTION")?;
        let result = (|| -> Result<(), Error> {
            let mut statement = connection.prepare(
                "INSERT INTO stock_stats \
                 (company_name, ticker, country, price, exchange_rate, shares_outstanding, \
                  net_income, market_value, pe_ratio) \
                 VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)",
            )?;
            for record in records {
                let params: [&dyn ToSql; 9] = [
                    &record.company_name,
                    &record.name,
                    &record.exchange_country,
                    &record.price,
                    &record.exchange_rate,
                    &record.shares_outstanding,
                    &record.net_incomes,
                    &record.market_value_usd,
                    &record.pe_ratio,
                ];
                statement.execute(params.as_slice())?;
            }
            Ok(())
        })();

        finalize_transaction(&connection, result)?;
        debug!("inserted {} rows into stock_stats", records.len());
        Ok(())
    }

    fn select_all(&self) -> Result<Vec<StockStatRecord>, Error> {
        let connection = self.connect()?;
        let mut statement = connection.prepare(
            "SELECT company_name, ticker, country, price, exchange_rate, shares_outstanding, \
             net_income, market_value, pe_ratio FROM stock_stats",
        )?;
        // Derived columns are taken as stored, not recomputed.
        let records = statement
            .query_map([], |row| {
                Ok(StockStatRecord {
                    company_name: row.get(0)?,
                    name: row.get(1)?,
                    exchange_country: row.get(2)?,
                    price: row.get(3)?,
                    exchange_rate: row.get(4)?,
                    shares_outstanding: row.get(5)?,
                    net_incomes: row.get(6)?,
                    market_value_usd: row.get(7)?,
                    pe_ratio: row.get(8)?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(records)
    }
}

/// A gateway for either dataset, accepting and returning untyped [`Record`]s.
#[derive(Debug, Clone)]
pub enum StatsGateway {
    Baseball(BaseballStatsDao),
    Stocks(StockStatsDao),
}

impl StatsGateway {
    fn name(&self) -> &'static str {
        match self {
            StatsGateway::Baseball(_) => "baseball",
            StatsGateway::Stocks(_) => "stock",
        }
    }

    /// # Errors
    /// Fails with [`Error::RecordKindMismatch`] before touching the database if any
    /// record belongs to the other dataset.
    pub fn insert_records(&self, records: &[Record]) -> Result<(), Error> {
        let mismatch = |record: &Record| Error::RecordKindMismatch {
            gateway: self.name(),
            record: record.kind(),
        };
        match self {
            StatsGateway::Baseball(dao) => {
                let typed = records
                    .iter()
                    .map(|record| match record {
                        Record::Baseball(inner) => Ok(inner.clone()),
                        other => Err(mismatch(other)),
                    })
                    .collect::<Result<Vec<_>, _>>()?;
                dao.insert_records(&typed)
            }
            StatsGateway::Stocks(dao) => {
                let typed = records
                    .iter()
                    .map(|record| match record {
                        Record::Stock(inner) => Ok(inner.clone()),
                        other => Err(mismatch(other)),
                    })
                    .collect::<Result<Vec<_>, _>>()?;
                dao.insert_records(&typed)
            }
        }
    }

    pub fn select_all(&self) -> Result<Vec<Record>, Error> {
        match self {
            StatsGateway::Baseball(dao) => {
                Ok(dao.select_all()?.into_iter().map(Record::from).collect())
            }
            StatsGateway::Stocks(dao) => {
                Ok(dao.select_all()?.into_iter().map(Record::from).collect())
            }
        }
    }
}

fn finalize_transaction<T>(connection: &Connection, result: Result<T, Error>) -> Result<T, Error> {
    match result {
        Ok(value) => {
            connection.execute_batch("COMMIT")?;
            Ok(value)
        }
        Err(error) => {
            let _ = connection.execute_batch("ROLLBACK");
            Err(error)
        }
    }
}

/// `games_played` is stored in a floating-point column.
fn games_from_real(value: f64) -> Result<u32, Error> {
    if value.fract() == 0.0 && (0.0..=f64::from(u32::MAX)).contains(&value) {
        Ok(value as u32)
    } else {
        Err(Error::InvalidStoredValue {
            column: "games_played",
            value,
        })
    }
}
