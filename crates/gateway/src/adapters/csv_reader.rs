//! TradingView "List of Trades" CSV reader

use csv::{ReaderBuilder, Trim};
use log::debug;
use serde::{Deserialize, Serialize};
use signalfeed_core::TradeRow;
use signalfeed_ports::{ReadError, ReadResult, TradeSource};
use std::fmt;
use std::fs::File;
use std::io;
use std::path::PathBuf;
use std::str::FromStr;

use crate::error::GatewayError;

pub const TYPE_COLUMN: &str = "Type";
pub const DATE_TIME_COLUMN: &str = "Date/Time";

/// Row order of a trade list file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum RowOrder {
    /// TradingView exports the most recent trade first
    #[default]
    NewestFirst,
    OldestFirst,
}

impl FromStr for RowOrder {
    type Err = GatewayError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "newest-first" | "newest" => Ok(RowOrder::NewestFirst),
            "oldest-first" | "oldest" => Ok(RowOrder::OldestFirst),
            _ => Err(GatewayError::UnknownVariant {
                kind: "row order",
                value: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for RowOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RowOrder::NewestFirst => f.write_str("newest-first"),
            RowOrder::OldestFirst => f.write_str("oldest-first"),
        }
    }
}

/// The columns we need; every other column of the export is ignored
#[derive(Debug, Deserialize)]
struct TradeRecord {
    #[serde(rename = "Type")]
    trade_type: String,
    #[serde(rename = "Date/Time")]
    date_time: Option<String>,
}

impl From<TradeRecord> for TradeRow {
    fn from(record: TradeRecord) -> Self {
        TradeRow {
            event_type: record.trade_type.into(),
            timestamp: record.date_time.filter(|cell| !cell.is_empty()),
        }
    }
}

/// Reads a trade list file and hands rows out oldest first
#[derive(Debug, Clone)]
pub struct CsvTradeReader {
    path: PathBuf,
    order: RowOrder,
    name: String,
}

impl CsvTradeReader {
    /// Reader for a TradingView export (newest first)
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        Self {
            name: path.display().to_string(),
            path,
            order: RowOrder::default(),
        }
    }

    pub fn with_order(mut self, order: RowOrder) -> Self {
        self.order = order;
        self
    }

    /// Parse trade rows from any reader, returning them oldest first
    pub fn read_from<R: io::Read>(source: R, order: RowOrder) -> ReadResult<Vec<TradeRow>> {
        let mut reader = ReaderBuilder::new().trim(Trim::All).from_reader(source);

        let headers = reader.headers().map_err(|e| malformed(0, e))?;
        for column in [TYPE_COLUMN, DATE_TIME_COLUMN] {
            if !headers.iter().any(|header| header == column) {
                return Err(ReadError::MissingColumn(column.to_string()));
            }
        }

        let mut rows = reader
            .deserialize::<TradeRecord>()
            .enumerate()
            .map(|(i, record)| record.map(TradeRow::from).map_err(|e| malformed(i + 1, e)))
            .collect::<ReadResult<Vec<_>>>()?;

        if order == RowOrder::NewestFirst {
            rows.reverse();
        }
        Ok(rows)
    }
}

fn malformed(record: usize, err: csv::Error) -> ReadError {
    ReadError::Malformed {
        record,
        message: err.to_string(),
    }
}

impl TradeSource for CsvTradeReader {
    fn read_trades(&self) -> ReadResult<Vec<TradeRow>> {
        let file = File::open(&self.path).map_err(|e| ReadError::Io {
            path: self.name.clone(),
            message: e.to_string(),
        })?;

        let rows = Self::read_from(file, self.order)?;
        debug!(
            "Read {} trade rows from {} ({})",
            rows.len(),
            self.name,
            self.order
        );
        Ok(rows)
    }

    fn name(&self) -> &str {
        &self.name
    }
}
