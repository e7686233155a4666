use chrono::{NaiveDate, NaiveDateTime};
use serde::Deserialize;
use std::path::Path;
use thiserror::Error;

/// Errors raised while loading candle CSV files
#[derive(Debug, Error)]
pub enum DataError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    #[error("unrecognized timestamp {0:?}")]
    Timestamp(String),

    #[error("{0}: no usable rows")]
    Empty(String),
}

/// One row of a candle CSV. Extra columns (open, high, low, volume) are
/// ignored; only the close enters the analysis.
#[derive(Debug, Deserialize)]
struct CandleRecord {
    timestamp: String,
    close: f64,
}

#[derive(Debug)]
struct Candle {
    time: NaiveDateTime,
    close: f64,
}

/// Load closing prices from a candle CSV, oldest first
pub fn load_closes(path: &Path) -> Result<Vec<f64>, DataError> {
    let mut rdr = csv::Reader::from_path(path)?;
    let mut candles = Vec::new();

    for result in rdr.deserialize() {
        let record: CandleRecord = result?;
        candles.push(Candle {
            time: parse_timestamp(&record.timestamp)?,
            close: record.close,
        });
    }

    if candles.is_empty() {
        return Err(DataError::Empty(path.display().to_string()));
    }

    candles.sort_by_key(|c| c.time);
    Ok(candles.iter().map(|c| c.close).collect())
}

/// Accept either datetime or bare-date timestamps
fn parse_timestamp(raw: &str) -> Result<NaiveDateTime, DataError> {
    if let Ok(dt) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S") {
        return Ok(dt);
    }
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Ok(date.and_hms_opt(0, 0, 0).unwrap());
    }
    Err(DataError::Timestamp(raw.to_string()))
}
