//! Typed records and the input-row schemas they are built from.
//!
//! A `*Row` struct mirrors the CSV columns a reader consumes. Converting a row into its
//! record applies the validation rules; a failed conversion yields [`BadData`].

use std::fmt;

use serde::Deserialize;

use crate::error::BadData;

/// One player's season line from the baseball file.
#[derive(Debug, Deserialize, PartialEq)]
pub struct BaseballRow {
    #[serde(rename = "PLAYER")]
    pub player: String,
    #[serde(rename = "SALARY")]
    pub salary: f64,
    #[serde(rename = "G")]
    pub games: u32,
    #[serde(rename = "AVG")]
    pub average: f64,
}

/// One company's valuation line from the stock file.
#[derive(Debug, Deserialize, PartialEq)]
pub struct StockRow {
    pub ticker: String,
    pub exchange_country: String,
    #[serde(default)]
    pub company_name: Option<String>,
    pub price: f64,
    pub exchange_rate: f64,
    pub shares_outstanding: f64,
    pub net_income: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BaseballStatRecord {
    /// Player name.
    pub name: String,
    pub salary: f64,
    pub games_played: u32,
    pub batting_average: f64,
}

impl BaseballStatRecord {
    pub fn new(name: impl Into<String>, salary: f64, games_played: u32, batting_average: f64) -> Self {
        Self {
            name: name.into(),
            salary,
            games_played,
            batting_average,
        }
    }
}

impl TryFrom<BaseballRow> for BaseballStatRecord {
    type Error = BadData;

    fn try_from(row: BaseballRow) -> Result<Self, Self::Error> {
        if row.player.is_empty() {
            return Err(BadData::EmptyField("PLAYER"));
        }
        Ok(Self::new(row.player, row.salary, row.games, row.average))
    }
}

impl fmt::Display for BaseballStatRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "BaseballStatRecord ({}, {:.2}, {}, {:.2})",
            self.name, self.salary, self.games_played, self.batting_average
        )
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct StockStatRecord {
    /// Ticker symbol, the identity of the record.
    pub name: String,
    pub company_name: String,
    pub exchange_country: String,
    pub price: f64,
    pub exchange_rate: f64,
    pub shares_outstanding: f64,
    pub net_incomes: f64,
    /// `price * exchange_rate * shares_outstanding`
    pub market_value_usd: f64,
    /// `price * shares_outstanding / net_incomes`
    pub pe_ratio: f64,
}

impl StockStatRecord {
    /// Builds a record and computes its derived valuation fields.
    pub fn new(
        ticker: impl Into<String>,
        company_name: impl Into<String>,
        exchange_country: impl Into<String>,
        price: f64,
        exchange_rate: f64,
        shares_outstanding: f64,
        net_incomes: f64,
    ) -> Self {
        Self {
            name: ticker.into(),
            company_name: company_name.into(),
            exchange_country: exchange_country.into(),
            price,
            exchange_rate,
            shares_outstanding,
            net_incomes,
            market_value_usd: price * exchange_rate * shares_outstanding,
            pe_ratio: price * shares_outstanding / net_incomes,
        }
    }

    pub fn ticker(&self) -> &str {
        &self.name
    }
}

impl TryFrom<StockRow> for StockStatRecord {
    type Error = BadData;

    fn try_from(row: StockRow) -> Result<Self, Self::Error> {
        if row.ticker.is_empty() {
            return Err(BadData::EmptyField("ticker"));
        }
        if row.exchange_country.is_empty() {
            return Err(BadData::EmptyField("exchange_country"));
        }
        if row.net_income == 0.0 {
            return Err(BadData::ZeroNetIncome);
        }
        Ok(Self::new(
            row.ticker,
            row.company_name.unwrap_or_default(),
            row.exchange_country,
            row.price,
            row.exchange_rate,
            row.shares_outstanding,
            row.net_income,
        ))
    }
}

impl fmt::Display for StockStatRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "StockStatRecord ({}, {}, {:.2}, {:.2}, {:.2}, {:.2}, {:.2}, {:.2})",
            self.name,
            self.exchange_country,
            self.price,
            self.exchange_rate,
            self.shares_outstanding,
            self.net_incomes,
            self.market_value_usd,
            self.pe_ratio
        )
    }
}

/// A record of either dataset.
#[derive(Debug, Clone, PartialEq)]
pub enum Record {
    Baseball(BaseballStatRecord),
    Stock(StockStatRecord),
}

impl Record {
    /// Player name or ticker.
    pub fn name(&self) -> &str {
        match self {
            Record::Baseball(record) => &record.name,
            Record::Stock(record) => &record.name,
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Record::Baseball(_) => "baseball",
            Record::Stock(_) => "stock",
        }
    }
}

impl From<BaseballStatRecord> for Record {
    fn from(record: BaseballStatRecord) -> Self {
        Record::Baseball(record)
    }
}

impl From<StockStatRecord> for Record {
    fn from(record: StockStatRecord) -> Self {
        Record::Stock(record)
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Record::Baseball(record) => fmt::Display::fmt(record, f),
            Record::Stock(record) => fmt::Display::fmt(record, f),
        }
    }
}
