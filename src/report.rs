//! Aggregations over records read back from storage, and their two-column reports.
//!
//! Output lines follow `HashMap` iteration order; nothing is sorted.

use std::collections::HashMap;
use std::io::{self, Write};

use crate::records::{BaseballStatRecord, StockStatRecord};

/// Number of records per exchange country.
pub fn tickers_by_country(records: &[StockStatRecord]) -> HashMap<String, usize> {
    let mut counts = HashMap::new();
    for record in records {
        *counts.entry(record.exchange_country.clone()).or_insert(0) += 1;
    }
    counts
}

/// A batting average used as a grouping key.
///
/// Grouping is by exact bit pattern, so averages that differ only in the last
/// bit land in different groups, as do `0.0` and `-0.0`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AverageKey(u64);

impl AverageKey {
    pub fn new(average: f64) -> Self {
        Self(average.to_bits())
    }

    pub fn value(self) -> f64 {
        f64::from_bits(self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SalaryTally {
    pub salary: f64,
    pub count: usize,
}

impl SalaryTally {
    pub fn mean(&self) -> f64 {
        self.salary / self.count as f64
    }
}

/// Salary sum and player count for every distinct batting average.
pub fn salary_by_average(records: &[BaseballStatRecord]) -> HashMap<AverageKey, SalaryTally> {
    let mut groups: HashMap<AverageKey, SalaryTally> = HashMap::new();
    for record in records {
        let tally = groups
            .entry(AverageKey::new(record.batting_average))
            .or_default();
        tally.salary += record.salary;
        tally.count += 1;
    }
    groups
}

pub fn write_country_report<W: Write>(
    mut writer: W,
    counts: &HashMap<String, usize>,
) -> io::Result<()> {
    writeln!(writer, "country | ticker_count")?;
    for (country, count) in counts {
        writeln!(writer, "{} {}", country, count)?;
    }
    Ok(())
}

/// Writes `<average> <mean salary>` lines. Floats print like `0.3` and `150.0`.
pub fn write_salary_report<W: Write>(
    mut writer: W,
    groups: &HashMap<AverageKey, SalaryTally>,
) -> io::Result<()> {
    writeln!(writer, "batting average, salary")?;
    for (average, tally) in groups {
        writeln!(writer, "{:?} {:?}", average.value(), tally.mean())?;
    }
    Ok(())
}
