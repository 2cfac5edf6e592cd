//! CLI argument parsing module.
//!
//! The CLI follows the pattern: `zigzag <command> <input.csv> [up,down] [-o output.csv]`
//!
//! # Examples
//!
//! ```bash
//! # Pivots with the default 3% thresholds
//! zigzag pivots prices.csv
//!
//! # Asymmetric thresholds, written to a file
//! zigzag pivots prices.csv 0.05,-0.02 -o pivots.csv
//!
//! # Pivots on high/low wicks
//! zigzag candlestick ohlc.csv 0.05,-0.05
//!
//! # Trend modes and pivot-to-pivot returns
//! zigzag modes prices.csv
//! zigzag returns prices.csv 0.1,-0.1
//!
//! # Maximum drawdown of a column
//! zigzag drawdown equity.csv -c equity
//! ```

use clap::{Parser, Subcommand};

use crate::error::{CliError, Result};

/// Default thresholds: symmetric 3% reversals.
pub const DEFAULT_THRESHOLDS: &str = "0.03,-0.03";

/// zigzag: percentage-reversal pivot detection CLI
#[derive(Parser, Debug)]
#[command(name = "zigzag")]
#[command(author, version, about = "Peak and valley detection for price series")]
#[command(long_about = "zigzag labels every row of a price series as a peak (1), a valley (-1) \
    or neither (0). A pivot is confirmed once prices reverse away from it by a relative \
    threshold. Input is read from CSV files and output can be written to files or stdout.")]
pub struct Args {
    /// The analysis to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands.
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Peak/valley pivots of a close series
    #[command(about = "Peak/valley pivots of a price column")]
    Pivots {
        /// Input CSV file
        input: String,

        /// Thresholds: up,down (e.g., 0.05,-0.05)
        #[arg(default_value = DEFAULT_THRESHOLDS)]
        params: String,

        /// Output CSV file (defaults to stdout)
        #[arg(short, long)]
        output: Option<String>,

        /// Column to use for prices (auto-detected if not specified)
        #[arg(short, long)]
        column: Option<String>,
    },

    /// Peak/valley pivots of high/low/close data
    #[command(about = "Peak/valley pivots placed on highs and lows")]
    Candlestick {
        /// Input CSV file with high, low and close columns
        input: String,

        /// Thresholds: up,down (e.g., 0.05,-0.05)
        #[arg(default_value = DEFAULT_THRESHOLDS)]
        params: String,

        /// Output CSV file (defaults to stdout)
        #[arg(short, long)]
        output: Option<String>,
    },

    /// Trend mode of every row
    #[command(about = "Trend mode (1 rising, -1 falling) between pivots")]
    Modes {
        /// Input CSV file
        input: String,

        /// Thresholds: up,down (e.g., 0.05,-0.05)
        #[arg(default_value = DEFAULT_THRESHOLDS)]
        params: String,

        /// Output CSV file (defaults to stdout)
        #[arg(short, long)]
        output: Option<String>,

        /// Column to use for prices
        #[arg(short, long)]
        column: Option<String>,
    },

    /// Pivot-to-pivot segment returns
    #[command(about = "Relative return of each pivot-to-pivot segment")]
    Returns {
        /// Input CSV file
        input: String,

        /// Thresholds: up,down (e.g., 0.05,-0.05)
        #[arg(default_value = DEFAULT_THRESHOLDS)]
        params: String,

        /// Output CSV file (defaults to stdout)
        #[arg(short, long)]
        output: Option<String>,

        /// Column to use for prices
        #[arg(short, long)]
        column: Option<String>,
    },

    /// Maximum drawdown
    #[command(about = "Maximum peak-to-trough drawdown")]
    Drawdown {
        /// Input CSV file
        input: String,

        /// Output CSV file (defaults to stdout)
        #[arg(short, long)]
        output: Option<String>,

        /// Column to use for values
        #[arg(short, long)]
        column: Option<String>,
    },
}

impl Args {
    /// Get the input file path from the command.
    #[must_use]
    pub fn input_path(&self) -> &str {
        match &self.command {
            Command::Pivots { input, .. }
            | Command::Candlestick { input, .. }
            | Command::Modes { input, .. }
            | Command::Returns { input, .. }
            | Command::Drawdown { input, .. } => input,
        }
    }

    /// Get the output file path from the command, if specified.
    #[must_use]
    pub fn output_path(&self) -> Option<&str> {
        match &self.command {
            Command::Pivots { output, .. }
            | Command::Candlestick { output, .. }
            | Command::Modes { output, .. }
            | Command::Returns { output, .. }
            | Command::Drawdown { output, .. } => output.as_deref(),
        }
    }
}

/// Parse threshold parameters from string "up,down".
///
/// # Errors
///
/// Returns `CliError::InvalidArgument` if the string does not hold exactly
/// two numbers or if `down` is positive.
pub fn parse_threshold_params(params: &str) -> Result<(f64, f64)> {
    let parts: Vec<&str> = params.split(',').collect();
    if parts.len() != 2 {
        return Err(CliError::InvalidArgument {
            argument: "params".to_string(),
            reason: format!("thresholds require 2 parameters, got {}", parts.len()),
            suggestion: Some("Use format: up,down (e.g., 0.05,-0.05)".to_string()),
        });
    }

    let up = parts[0].trim().parse::<f64>().map_err(|_| CliError::InvalidArgument {
        argument: "up_thresh".to_string(),
        reason: format!("cannot parse '{}' as number", parts[0]),
        suggestion: Some("Use a relative rise like 0.05 for 5%".to_string()),
    })?;

    let down = parts[1].trim().parse::<f64>().map_err(|_| CliError::InvalidArgument {
        argument: "down_thresh".to_string(),
        reason: format!("cannot parse '{}' as number", parts[1]),
        suggestion: Some("Use a relative fall like -0.05 for 5%".to_string()),
    })?;

    if zigzag::validate_thresholds(up, down).is_err() {
        return Err(CliError::InvalidArgument {
            argument: "down_thresh".to_string(),
            reason: format!("down threshold must not be positive, got {down}"),
            suggestion: Some(format!("Did you mean {up},{}?", -down.abs())),
        });
    }

    Ok((up, down))
}
