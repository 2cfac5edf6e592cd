//! CSV parsing module for reading price data from CSV files.
//!
//! # Column Detection
//!
//! Columns are detected by header name (case-insensitive):
//! - `close`, `price`, `adj close`, `adjusted close` → close prices
//! - `high` → high prices
//! - `low` → low prices
//!
//! Any other non-date column can be selected by name. Date columns (`date`,
//! `time`, `datetime`, `timestamp`, `dt`) are kept as strings for output
//! alignment. Empty cells are read as NaN.

use std::collections::HashMap;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use csv::ReaderBuilder;
use tracing::debug;

use crate::error::{CliError, Result};

/// A single price column with optional dates.
#[derive(Debug, Clone)]
pub struct PriceSeries {
    /// Date/time strings (if present in CSV).
    pub dates: Option<Vec<String>>,
    /// Column values.
    pub values: Vec<f64>,
}

/// High/low/close price data.
#[derive(Debug, Clone)]
pub struct HlcData {
    /// Date/time strings (if present in CSV).
    pub dates: Option<Vec<String>>,
    /// High prices.
    pub high: Vec<f64>,
    /// Low prices.
    pub low: Vec<f64>,
    /// Close prices.
    pub close: Vec<f64>,
}

/// Parsed CSV data with column mapping.
#[derive(Debug, Clone)]
pub struct ParsedCsv {
    /// Column headers from the CSV.
    pub headers: Vec<String>,
    /// Mapping of normalized column name to column index.
    pub column_map: HashMap<String, usize>,
    /// Date column values (if found).
    pub dates: Option<Vec<String>>,
    /// All numeric data columns by index.
    pub columns: HashMap<usize, Vec<f64>>,
    /// Number of rows parsed.
    pub row_count: usize,
}

impl ParsedCsv {
    /// Get a column by name (case-insensitive, e.g. "close", "High").
    #[must_use]
    pub fn get_column(&self, name: &str) -> Option<&Vec<f64>> {
        self.column_map
            .get(&normalize_header(name))
            .and_then(|idx| self.columns.get(idx))
    }

    /// Get close prices, trying multiple common column names.
    #[must_use]
    pub fn get_close(&self) -> Option<&Vec<f64>> {
        self.get_column("close")
            .or_else(|| self.get_column("price"))
            .or_else(|| self.get_column("adj close"))
            .or_else(|| self.get_column("adjusted close"))
    }

    /// Get an explicitly named column, or the close column when `name` is `None`.
    ///
    /// # Errors
    ///
    /// Returns `CliError::CsvParseError` if the column is missing.
    pub fn require_column(&self, name: Option<&str>) -> Result<&Vec<f64>> {
        match name {
            Some(name) => self.get_column(name).ok_or_else(|| CliError::CsvParseError {
                message: format!(
                    "no '{name}' column found (available: {})",
                    self.headers.join(", ")
                ),
                line: None,
            }),
            None => self.get_close().ok_or_else(|| CliError::CsvParseError {
                message: "no close price column found (expected 'close', 'price', or 'adj close')"
                    .to_string(),
                line: None,
            }),
        }
    }
}

/// Normalize a column header name for matching.
fn normalize_header(header: &str) -> String {
    header.trim().to_lowercase()
}

/// Check if a header represents a date column.
fn is_date_column(header: &str) -> bool {
    let normalized = normalize_header(header);
    matches!(
        normalized.as_str(),
        "date" | "time" | "datetime" | "timestamp" | "dt"
    )
}

/// Parse a string value to f64, treating empty as NaN.
fn parse_value(value: &str, line: usize) -> Result<f64> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        Ok(f64::NAN)
    } else {
        trimmed.parse::<f64>().map_err(|_| CliError::CsvParseError {
            message: format!("cannot parse '{trimmed}' as number"),
            line: Some(line),
        })
    }
}

/// Parse a CSV file into a structured format.
///
/// # Errors
///
/// Returns `CliError::IoError` if the file cannot be read, or
/// `CliError::CsvParseError` if the CSV is malformed.
pub fn parse_csv<P: AsRef<Path>>(path: P) -> Result<ParsedCsv> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| CliError::IoError {
        source: e,
        path: Some(path.display().to_string()),
    })?;
    let parsed = parse_csv_from_reader(BufReader::new(file))?;
    debug!(
        path = %path.display(),
        rows = parsed.row_count,
        columns = parsed.headers.len(),
        "parsed csv"
    );
    Ok(parsed)
}

/// Parse CSV data from a reader.
///
/// # Errors
///
/// Returns `CliError::CsvParseError` if the CSV is malformed or a numeric
/// cell cannot be parsed.
pub fn parse_csv_from_reader<R: Read>(reader: R) -> Result<ParsedCsv> {
    let mut csv_reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let headers: Vec<String> = csv_reader
        .headers()
        .map_err(|e| CliError::CsvParseError {
            message: e.to_string(),
            line: Some(1),
        })?
        .iter()
        .map(String::from)
        .collect();

    if headers.is_empty() {
        return Err(CliError::CsvParseError {
            message: "CSV file has no headers".to_string(),
            line: Some(1),
        });
    }

    let mut column_map = HashMap::new();
    let mut date_column_idx: Option<usize> = None;

    for (idx, header) in headers.iter().enumerate() {
        if is_date_column(header) {
            date_column_idx = Some(idx);
        } else {
            column_map.insert(normalize_header(header), idx);
        }
    }

    let mut columns: HashMap<usize, Vec<f64>> =
        column_map.values().map(|&idx| (idx, Vec::new())).collect();
    let mut dates: Vec<String> = Vec::new();

    let mut row_count = 0;
    for (row_idx, result) in csv_reader.records().enumerate() {
        // +2 for the header row and 0-indexing
        let line = row_idx + 2;
        let record = result.map_err(|e| CliError::CsvParseError {
            message: e.to_string(),
            line: Some(line),
        })?;

        if let Some(date_idx) = date_column_idx {
            dates.push(record.get(date_idx).unwrap_or_default().to_string());
        }

        for (&col_idx, values) in &mut columns {
            values.push(parse_value(record.get(col_idx).unwrap_or(""), line)?);
        }

        row_count += 1;
    }

    Ok(ParsedCsv {
        headers,
        column_map,
        dates: if dates.is_empty() { None } else { Some(dates) },
        columns,
        row_count,
    })
}

/// Parse one price column from a CSV file.
///
/// Uses `column` when given, otherwise the detected close column.
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed, or if the column
/// is missing.
pub fn parse_series<P: AsRef<Path>>(path: P, column: Option<&str>) -> Result<PriceSeries> {
    let parsed = parse_csv(path)?;
    let values = parsed.require_column(column)?.clone();
    Ok(PriceSeries {
        dates: parsed.dates,
        values,
    })
}

/// Parse a CSV file into high/low/close data.
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed, or if any of the
/// three columns is missing.
pub fn parse_hlc<P: AsRef<Path>>(path: P) -> Result<HlcData> {
    let parsed = parse_csv(path)?;

    let high = parsed.require_column(Some("high"))?.clone();
    let low = parsed.require_column(Some("low"))?.clone();
    let close = parsed.require_column(None)?.clone();

    Ok(HlcData {
        dates: parsed.dates,
        high,
        low,
        close,
    })
}
