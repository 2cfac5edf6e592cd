//! CSV output module for writing analysis results.
//!
//! Every command writes one header row followed by data rows. Series outputs
//! keep one row per input row, with the date column first when the input had
//! one. NaN values are written as empty cells.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use crate::error::{CliError, Result};

/// Output destination: either stdout or a file.
pub enum OutputDest {
    /// Write to stdout.
    Stdout,
    /// Write to a file at the given path.
    File(String),
}

impl OutputDest {
    /// Build a destination from the optional `-o` argument.
    #[must_use]
    pub fn from_option(path: Option<&str>) -> Self {
        path.map_or(Self::Stdout, |p| Self::File(p.to_string()))
    }

    /// Create a writer for this output destination.
    ///
    /// # Errors
    ///
    /// Returns `CliError::IoError` if the file cannot be created.
    pub fn writer(&self) -> Result<Box<dyn Write>> {
        match self {
            Self::Stdout => Ok(Box::new(io::stdout())),
            Self::File(path) => {
                let file = File::create(path).map_err(|e| CliError::IoError {
                    source: e,
                    path: Some(path.clone()),
                })?;
                Ok(Box::new(BufWriter::new(file)))
            }
        }
    }
}

/// One output column.
#[derive(Debug, Clone, Copy)]
pub enum Column<'a> {
    /// Floating point values; NaN becomes an empty cell.
    Float(&'a [f64]),
    /// Integer codes such as pivot labels and trend modes.
    Int(&'a [i8]),
    /// Verbatim text.
    Text(&'a [String]),
}

impl Column<'_> {
    fn len(&self) -> usize {
        match self {
            Self::Float(values) => values.len(),
            Self::Int(values) => values.len(),
            Self::Text(values) => values.len(),
        }
    }

    fn cell(&self, i: usize) -> String {
        match self {
            Self::Float(values) => values.get(i).map_or_else(String::new, |&v| format_value(v)),
            Self::Int(values) => values.get(i).map_or_else(String::new, i8::to_string),
            Self::Text(values) => values.get(i).cloned().unwrap_or_default(),
        }
    }
}

/// Format a float for output. NaN is written as an empty cell.
#[must_use]
pub fn format_value(value: f64) -> String {
    if value.is_nan() {
        String::new()
    } else {
        value.to_string()
    }
}

/// Write named columns to CSV.
///
/// # Arguments
///
/// * `columns` - Vector of (header_name, values) pairs
/// * `dates` - Optional date column written first
/// * `dest` - Output destination
///
/// The row count is the length of the longest column; shorter columns are
/// padded with empty cells.
///
/// # Errors
///
/// Returns `CliError::IoError` if writing fails.
pub fn write_columns(
    columns: &[(&str, Column<'_>)],
    dates: Option<&[String]>,
    dest: &OutputDest,
) -> Result<()> {
    let mut writer = dest.writer()?;

    let mut headers: Vec<&str> = Vec::with_capacity(columns.len() + 1);
    if dates.is_some() {
        headers.push("date");
    }
    headers.extend(columns.iter().map(|(name, _)| *name));
    writeln!(writer, "{}", headers.join(","))?;

    let len = columns.iter().map(|(_, col)| col.len()).max().unwrap_or(0);
    for i in 0..len {
        let mut cells: Vec<String> = Vec::with_capacity(headers.len());
        if let Some(dates) = dates {
            cells.push(dates.get(i).cloned().unwrap_or_default());
        }
        cells.extend(columns.iter().map(|(_, col)| col.cell(i)));
        writeln!(writer, "{}", cells.join(","))?;
    }

    writer.flush()?;
    Ok(())
}

/// Write a single named value.
///
/// # Errors
///
/// Returns `CliError::IoError` if writing fails.
pub fn write_scalar(header: &str, value: f64, dest: &OutputDest) -> Result<()> {
    let mut writer = dest.writer()?;
    writeln!(writer, "{header}")?;
    writeln!(writer, "{}", format_value(value))?;
    writer.flush()?;
    Ok(())
}

/// Write columns to a file path.
///
/// # Errors
///
/// Returns `CliError::IoError` if the file cannot be created or written.
pub fn write_to_file<P: AsRef<Path>>(
    columns: &[(&str, Column<'_>)],
    dates: Option<&[String]>,
    path: P,
) -> Result<()> {
    let dest = OutputDest::File(path.as_ref().display().to_string());
    write_columns(columns, dates, &dest)
}
