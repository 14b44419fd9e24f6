//! CSV readers turning input files into validated records.
//!
//! Each dataset has a reader implementing [`RowToRecord`]. Loading walks the file in
//! order; rows that fail to deserialize or validate are skipped and reported in
//! [`Loaded::skipped`] instead of aborting the load.

use std::path::{Path, PathBuf};

use log::{debug, info};
use serde::de::DeserializeOwned;

use crate::csv_utils::{is_row_error, read_csv};
use crate::error::{BadData, Error};
use crate::records::{BaseballRow, BaseballStatRecord, Record, StockRow, StockStatRecord};

/// A row that was dropped during a load.
#[derive(Debug, Clone, PartialEq)]
pub struct SkippedRow {
    /// 1-based data row number, header excluded.
    pub row: usize,
    pub reason: BadData,
}

/// Result of loading one file: kept records in file order plus the skipped rows.
#[derive(Debug, Clone, PartialEq)]
pub struct Loaded<T> {
    pub records: Vec<T>,
    pub skipped: Vec<SkippedRow>,
}

impl<T> Loaded<T> {
    fn new() -> Self {
        Self {
            records: Vec::new(),
            skipped: Vec::new(),
        }
    }

    pub fn map_records<U>(self, f: impl FnMut(T) -> U) -> Loaded<U> {
        Loaded {
            records: self.records.into_iter().map(f).collect(),
            skipped: self.skipped,
        }
    }
}

/// Converts one deserialized CSV row into a record of a single dataset.
pub trait RowToRecord {
    type Row: DeserializeOwned;
    type Record;

    fn path(&self) -> &Path;

    fn row_to_record(&self, row: Self::Row) -> Result<Self::Record, BadData>;

    /// Reads the whole file, keeping every row that converts and skipping the rest.
    ///
    /// # Errors
    /// Returns an error if the file cannot be opened or the CSV stream itself is
    /// unreadable. Bad rows never produce an error.
    fn load(&self) -> Result<Loaded<Self::Record>, Error> {
        let path = self.path();
        let mut loaded = Loaded::new();

        for (index, result) in read_csv::<Self::Row, _>(path)?.enumerate() {
            let outcome = match result {
                Ok(row) => self.row_to_record(row),
                Err(err) if is_row_error(&err) => Err(BadData::Malformed(err.to_string())),
                Err(err) => return Err(err.into()),
            };
            match outcome {
                Ok(record) => loaded.records.push(record),
                Err(reason) => {
                    debug!("{}: skipping row {}: {}", path.display(), index + 1, reason);
                    loaded.skipped.push(SkippedRow {
                        row: index + 1,
                        reason,
                    });
                }
            }
        }

        info!(
            "{}: loaded {} records, skipped {} rows",
            path.display(),
            loaded.records.len(),
            loaded.skipped.len()
        );
        Ok(loaded)
    }
}

#[derive(Debug, Clone)]
pub struct BaseballCsvReader {
    path: PathBuf,
}

impl BaseballCsvReader {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl RowToRecord for BaseballCsvReader {
    type Row = BaseballRow;
    type Record = BaseballStatRecord;

    fn path(&self) -> &Path {
        &self.path
    }

    fn row_to_record(&self, row: BaseballRow) -> Result<BaseballStatRecord, BadData> {
        BaseballStatRecord::try_from(row)
    }
}

#[derive(Debug, Clone)]
pub struct StocksCsvReader {
    path: PathBuf,
}

impl StocksCsvReader {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl RowToRecord for StocksCsvReader {
    type Row = StockRow;
    type Record = StockStatRecord;

    fn path(&self) -> &Path {
        &self.path
    }

    fn row_to_record(&self, row: StockRow) -> Result<StockStatRecord, BadData> {
        StockStatRecord::try_from(row)
    }
}

/// A reader for either dataset, yielding untyped [`Record`]s.
#[derive(Debug, Clone)]
pub enum StatReader {
    Baseball(BaseballCsvReader),
    Stocks(StocksCsvReader),
}

impl StatReader {
    pub fn load(&self) -> Result<Loaded<Record>, Error> {
        match self {
            StatReader::Baseball(reader) => Ok(reader.load()?.map_records(Record::from)),
            StatReader::Stocks(reader) => Ok(reader.load()?.map_records(Record::from)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_temp_csv(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_load_baseball_fixture() -> Result<(), Error> {
        let loaded = BaseballCsvReader::new("data/MLB2008.csv").load()?;

        let names: Vec<_> = loaded.records.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, ["Ruth", "Gehrig", "DiMaggio", "Williams", "Cobb"]);
        assert_eq!(
            loaded.records[0],
            BaseballStatRecord::new("Ruth", 50000.0, 120, 0.342)
        );

        let skipped_rows: Vec<_> = loaded.skipped.iter().map(|s| s.row).collect();
        assert_eq!(skipped_rows, [4, 5, 6]);
        assert_eq!(loaded.skipped[0].reason, BadData::EmptyField("PLAYER"));
        assert!(matches!(loaded.skipped[1].reason, BadData::Malformed(_)));
        Ok(())
    }

    #[test]
    fn test_load_stock_fixture() -> Result<(), Error> {
        let loaded = StocksCsvReader::new("data/StockValuations.csv").load()?;

        let tickers: Vec<_> = loaded.records.iter().map(|r| r.ticker()).collect();
        assert_eq!(tickers, ["ABC", "TM", "MSFT", "NSRGY", "SHEL"]);

        let reasons: Vec<_> = loaded.skipped.iter().map(|s| &s.reason).collect();
        assert_eq!(reasons[0], &BadData::EmptyField("ticker"));
        assert_eq!(reasons[1], &BadData::EmptyField("exchange_country"));
        assert_eq!(reasons[2], &BadData::ZeroNetIncome);
        assert!(matches!(reasons[3], BadData::Malformed(_)));
        Ok(())
    }

    #[test]
    fn test_empty_identity_never_escapes_load() -> Result<(), Error> {
        let file = write_temp_csv("PLAYER,SALARY,G,AVG\n,1,1,1\n");
        let loaded = BaseballCsvReader::new(file.path()).load()?;
        assert!(loaded.records.is_empty());
        assert_eq!(loaded.skipped.len(), 1);
        Ok(())
    }

    #[test]
    fn test_short_row_is_skipped() -> Result<(), Error> {
        let file = write_temp_csv("PLAYER,SALARY,G,AVG\nRuth,50000\nCobb,250,140,0.367\n");
        let loaded = BaseballCsvReader::new(file.path()).load()?;
        assert_eq!(loaded.records, [BaseballStatRecord::new("Cobb", 250.0, 140, 0.367)]);
        assert_eq!(loaded.skipped[0].row, 1);
        Ok(())
    }

    #[test]
    fn test_fields_are_trimmed() -> Result<(), Error> {
        let file = write_temp_csv("PLAYER, SALARY ,G,AVG\n Ruth , 50000 , 120 , 0.342 \n");
        let loaded = BaseballCsvReader::new(file.path()).load()?;
        assert_eq!(loaded.records, [BaseballStatRecord::new("Ruth", 50000.0, 120, 0.342)]);
        Ok(())
    }

    #[test]
    fn test_latin1_row_is_skipped() -> Result<(), Error> {
        // "Peña" encoded as Latin-1
        let contents: &[u8] =
            b"PLAYER,SALARY,G,AVG\nRuth,50000,120,0.342\nPe\xf1a,100,10,0.250\nCobb,250,140,0.367\n";
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents).unwrap();
        let loaded = BaseballCsvReader::new(file.path()).load()?;

        let names: Vec<_> = loaded.records.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, ["Ruth", "Cobb"]);
        assert_eq!(loaded.skipped.len(), 1);
        assert_eq!(loaded.skipped[0].row, 2);
        assert!(matches!(loaded.skipped[0].reason, BadData::Malformed(_)));
        Ok(())
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let result = StocksCsvReader::new("data/missing.csv").load();
        assert!(matches!(result, Err(Error::Csv(_))));
    }

    #[test]
    fn test_stat_reader_wraps_records() -> Result<(), Error> {
        let loaded = StatReader::Stocks(StocksCsvReader::new("data/StockValuations.csv")).load()?;
        assert_eq!(loaded.records.len(), 5);
        assert!(loaded.records.iter().all(|r| matches!(r, Record::Stock(_))));
        assert_eq!(loaded.records[0].name(), "ABC");
        Ok(())
    }

    #[test]
    fn test_formatting_reproduces_input_values() -> Result<(), Error> {
        let file = write_temp_csv(
            "ticker,exchange_country,company_name,price,exchange_rate,shares_outstanding,net_income\n\
             ABC,US,,10.25,1.5,200,41\n",
        );
        let loaded = StatReader::Stocks(StocksCsvReader::new(file.path())).load()?;
        assert_eq!(
            loaded.records[0].to_string(),
            "StockStatRecord (ABC, US, 10.25, 1.50, 200.00, 41.00, 3075.00, 50.00)"
        );
        Ok(())
    }
}
