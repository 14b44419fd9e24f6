//! End-to-end checks through the public API: file -> reader -> gateway -> report.

use std::fs;
use std::path::Path;

use stat_ingest::report::{salary_by_average, tickers_by_country, AverageKey};
use stat_ingest::schema::{create_baseball_table, create_stock_table};
use stat_ingest::{
    BaseballCsvReader, BaseballStatRecord, BaseballStatsDao, Error, Record, StatReader,
    StatsGateway, StockStatsDao, StocksCsvReader,
};
use tempfile::tempdir;

fn write(dir: &Path, name: &str, contents: &str) -> std::path::PathBuf {
    let path = dir.join(name);
    fs::write(&path, contents).unwrap();
    path
}

#[test]
fn baseball_rows_survive_storage_and_feed_the_report() -> Result<(), Error> {
    let temp = tempdir().unwrap();
    let csv = write(
        temp.path(),
        "players.csv",
        "PLAYER,SALARY,G,AVG\n\
         Ruth,50000,120,0.342\n\
         ,1,1,1\n\
         Gehrig,100,155,0.300\n\
         DiMaggio,200,151,0.300\n",
    );
    let db = temp.path().join("baseball.db");
    create_baseball_table(&db).unwrap();

    let loaded = StatReader::Baseball(BaseballCsvReader::new(&csv)).load()?;
    assert_eq!(loaded.records.len(), 3);
    assert_eq!(loaded.skipped.len(), 1);
    assert_eq!(
        loaded.records[0],
        Record::Baseball(BaseballStatRecord::new("Ruth", 50000.0, 120, 0.342))
    );

    let gateway = StatsGateway::Baseball(BaseballStatsDao::new(&db));
    gateway.insert_records(&loaded.records)?;
    let stored = gateway.select_all()?;
    assert_eq!(stored, loaded.records);

    let players: Vec<BaseballStatRecord> = stored
        .into_iter()
        .filter_map(|record| match record {
            Record::Baseball(player) => Some(player),
            Record::Stock(_) => None,
        })
        .collect();
    let groups = salary_by_average(&players);
    assert_eq!(groups[&AverageKey::new(0.3)].mean(), 150.0);
    assert_eq!(groups[&AverageKey::new(0.342)].count, 1);
    Ok(())
}

#[test]
fn stock_rows_survive_storage_with_derived_values() -> Result<(), Error> {
    let temp = tempdir().unwrap();
    let csv = write(
        temp.path(),
        "stocks.csv",
        "ticker,exchange_country,company_name,price,exchange_rate,shares_outstanding,net_income\n\
         ABC,US,,10,1,100,50\n\
         DEF,,Nowhere Inc,10,1,100,50\n\
         GHI,DE,Ghi AG,4,1.1,1000,400\n",
    );
    let db = temp.path().join("stocks.db");
    create_stock_table(&db).unwrap();

    let loaded = StatReader::Stocks(StocksCsvReader::new(&csv)).load()?;
    let names: Vec<_> = loaded.records.iter().map(Record::name).collect();
    assert_eq!(names, ["ABC", "GHI"]);

    let gateway = StatsGateway::Stocks(StockStatsDao::new(&db));
    gateway.insert_records(&loaded.records)?;

    let stocks: Vec<_> = gateway
        .select_all()?
        .into_iter()
        .filter_map(|record| match record {
            Record::Stock(stock) => Some(stock),
            Record::Baseball(_) => None,
        })
        .collect();
    let abc = stocks.iter().find(|s| s.ticker() == "ABC").unwrap();
    assert_eq!(abc.company_name, "");
    assert_eq!(abc.market_value_usd, 1000.0);
    assert_eq!(abc.pe_ratio, 20.0);

    let ghi = stocks.iter().find(|s| s.ticker() == "GHI").unwrap();
    assert_eq!(ghi.market_value_usd, 4.0 * 1.1 * 1000.0);
    assert_eq!(ghi.pe_ratio, 4.0 * 1000.0 / 400.0);

    let counts = tickers_by_country(&stocks);
    assert_eq!(counts["US"], 1);
    assert_eq!(counts["DE"], 1);
    Ok(())
}

#[test]
fn storage_failures_reach_the_caller() {
    let temp = tempdir().unwrap();
    let gateway = StatsGateway::Stocks(StockStatsDao::new(temp.path().join("no_tables.db")));
    assert!(matches!(gateway.select_all(), Err(Error::Store(_))));
}
