//! Errors for the ingest pipeline.
//!
//! Two kinds of failure exist:
//! - [`BadData`]: a single input row is unusable. Readers skip the row and keep going.
//! - [`Error`]: the run cannot continue (file I/O, malformed CSV stream, store failures).
//!
//! Only [`Error`] ever reaches the caller of a pipeline.

use thiserror::Error;

/// Reason a single CSV row was dropped.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum BadData {
    #[error("{0} is empty")]
    EmptyField(&'static str),

    /// The row could not be deserialized (unparsable number, missing column, ...).
    #[error("malformed row: {0}")]
    Malformed(String),

    #[error("net_income is zero, pe_ratio is undefined")]
    ZeroNetIncome,
}

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Csv(#[from] csv::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Store(#[from] duckdb::Error),

    #[error("column {column} holds {value}, expected a whole non-negative number")]
    InvalidStoredValue { column: &'static str, value: f64 },

    #[error("{gateway} gateway cannot store a {record} record")]
    RecordKindMismatch {
        gateway: &'static str,
        record: &'static str,
    },
}
