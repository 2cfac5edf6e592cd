//! Command dispatch.
//!
//! Each subcommand reads its CSV input, runs the matching `zigzag` analysis
//! and writes the result through [`csv_writer`](crate::csv_writer).

use tracing::{debug, info};
use zigzag::{
    labels_to_i8, max_drawdown, peak_valley_pivots, peak_valley_pivots_candlestick,
    pivot_indices, pivots_to_modes, segment_returns, PivotLabel, TrendMode,
};

use crate::args::{parse_threshold_params, Args, Command};
use crate::csv_parser::{parse_hlc, parse_series, PriceSeries};
use crate::csv_writer::{write_columns, write_scalar, Column, OutputDest};
use crate::error::Result;

/// Run the command selected on the command line.
///
/// # Errors
///
/// Returns an error if the input cannot be read, the parameters are
/// invalid, the analysis fails, or the output cannot be written.
pub fn run(args: &Args) -> Result<()> {
    let dest = OutputDest::from_option(args.output_path());

    match &args.command {
        Command::Pivots {
            input,
            params,
            column,
            ..
        } => run_pivots(input, params, column.as_deref(), &dest),
        Command::Candlestick { input, params, .. } => run_candlestick(input, params, &dest),
        Command::Modes {
            input,
            params,
            column,
            ..
        } => run_modes(input, params, column.as_deref(), &dest),
        Command::Returns {
            input,
            params,
            column,
            ..
        } => run_returns(input, params, column.as_deref(), &dest),
        Command::Drawdown { input, column, .. } => run_drawdown(input, column.as_deref(), &dest),
    }
}

fn detect_pivots(series: &PriceSeries, params: &str) -> Result<Vec<PivotLabel>> {
    let (up, down) = parse_threshold_params(params)?;
    let pivots = peak_valley_pivots(&series.values, up, down)?;
    info!(
        rows = series.values.len(),
        pivots = pivot_indices(&pivots).len(),
        up,
        down,
        "detected pivots"
    );
    Ok(pivots)
}

/// `[date,]close,pivot`
fn run_pivots(input: &str, params: &str, column: Option<&str>, dest: &OutputDest) -> Result<()> {
    let series = parse_series(input, column)?;
    let pivots = labels_to_i8(&detect_pivots(&series, params)?);

    write_columns(
        &[
            (column.unwrap_or("close"), Column::Float(&series.values)),
            ("pivot", Column::Int(&pivots)),
        ],
        series.dates.as_deref(),
        dest,
    )
}

/// `[date,]close,high,low,pivot`
fn run_candlestick(input: &str, params: &str, dest: &OutputDest) -> Result<()> {
    let hlc = parse_hlc(input)?;
    let (up, down) = parse_threshold_params(params)?;
    let pivots = peak_valley_pivots_candlestick(&hlc.close, &hlc.high, &hlc.low, up, down)?;
    info!(
        rows = hlc.close.len(),
        pivots = pivot_indices(&pivots).len(),
        up,
        down,
        "detected candlestick pivots"
    );
    let pivots = labels_to_i8(&pivots);

    write_columns(
        &[
            ("close", Column::Float(&hlc.close)),
            ("high", Column::Float(&hlc.high)),
            ("low", Column::Float(&hlc.low)),
            ("pivot", Column::Int(&pivots)),
        ],
        hlc.dates.as_deref(),
        dest,
    )
}

/// `[date,]pivot,mode`
fn run_modes(input: &str, params: &str, column: Option<&str>, dest: &OutputDest) -> Result<()> {
    let series = parse_series(input, column)?;
    let pivots = detect_pivots(&series, params)?;
    let modes: Vec<i8> = pivots_to_modes(&pivots)?
        .into_iter()
        .map(TrendMode::as_i8)
        .collect();
    let pivots = labels_to_i8(&pivots);

    write_columns(
        &[("pivot", Column::Int(&pivots)), ("mode", Column::Int(&modes))],
        series.dates.as_deref(),
        dest,
    )
}

/// `start,end,return`, keyed by date when the input has one.
fn run_returns(input: &str, params: &str, column: Option<&str>, dest: &OutputDest) -> Result<()> {
    let series = parse_series(input, column)?;
    let pivots = detect_pivots(&series, params)?;
    let returns = segment_returns(&series.values, &pivots)?;

    let keys: Vec<String> = pivot_indices(&pivots)
        .into_iter()
        .map(|t| match &series.dates {
            Some(dates) => dates[t].clone(),
            None => t.to_string(),
        })
        .collect();
    let (starts, ends): (&[String], &[String]) = if keys.len() < 2 {
        (&[], &[])
    } else {
        (&keys[..keys.len() - 1], &keys[1..])
    };
    debug!(segments = returns.len(), "computed segment returns");

    write_columns(
        &[
            ("start", Column::Text(starts)),
            ("end", Column::Text(ends)),
            ("return", Column::Float(&returns)),
        ],
        None,
        dest,
    )
}

/// Single `max_drawdown` value.
fn run_drawdown(input: &str, column: Option<&str>, dest: &OutputDest) -> Result<()> {
    let series = parse_series(input, column)?;
    let dd = max_drawdown(&series.values)?;
    info!(rows = series.values.len(), max_drawdown = dd, "computed drawdown");
    write_scalar("max_drawdown", dd, dest)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CliError;
    use std::path::PathBuf;

    const CLOSE_CSV: &str = "date,close\n\
                             2024-01-01,1.0\n\
                             2024-01-02,1.05\n\
                             2024-01-03,1.00\n\
                             2024-01-04,0.90\n\
                             2024-01-05,0.95\n\
                             2024-01-06,1.10\n";

    fn temp_file(name: &str, content: &str) -> PathBuf {
        let path = std::env::temp_dir().join(name);
        std::fs::write(&path, content).unwrap();
        path
    }

    fn run_to_lines(command: Command, out_name: &str) -> Vec<String> {
        let out = std::env::temp_dir().join(out_name);
        let command = match command {
            Command::Pivots {
                input,
                params,
                column,
                ..
            } => Command::Pivots {
                input,
                params,
                column,
                output: Some(out.display().to_string()),
            },
            Command::Candlestick { input, params, .. } => Command::Candlestick {
                input,
                params,
                output: Some(out.display().to_string()),
            },
            Command::Modes {
                input,
                params,
                column,
                ..
            } => Command::Modes {
                input,
                params,
                column,
                output: Some(out.display().to_string()),
            },
            Command::Returns {
                input,
                params,
                column,
                ..
            } => Command::Returns {
                input,
                params,
                column,
                output: Some(out.display().to_string()),
            },
            Command::Drawdown { input, column, .. } => Command::Drawdown {
                input,
                column,
                output: Some(out.display().to_string()),
            },
        };
        run(&Args { command }).unwrap();
        let lines = std::fs::read_to_string(&out)
            .unwrap()
            .lines()
            .map(String::from)
            .collect();
        std::fs::remove_file(&out).ok();
        lines
    }

    #[test]
    fn test_pivots_command() {
        let input = temp_file("zigzag_cmd_pivots_in.csv", CLOSE_CSV);
        let lines = run_to_lines(
            Command::Pivots {
                input: input.display().to_string(),
                params: "0.03,-0.03".to_string(),
                output: None,
                column: None,
            },
            "zigzag_cmd_pivots_out.csv",
        );

        assert_eq!(lines[0], "date,close,pivot");
        assert_eq!(lines[1], "2024-01-01,1,-1");
        assert_eq!(lines[2], "2024-01-02,1.05,1");
        assert_eq!(lines[3], "2024-01-03,1,0");
        assert_eq!(lines[4], "2024-01-04,0.9,-1");
        assert_eq!(lines[6], "2024-01-06,1.1,1");
        std::fs::remove_file(&input).ok();
    }

    #[test]
    fn test_modes_command() {
        let input = temp_file("zigzag_cmd_modes_in.csv", CLOSE_CSV);
        let lines = run_to_lines(
            Command::Modes {
                input: input.display().to_string(),
                params: "0.03,-0.03".to_string(),
                output: None,
                column: None,
            },
            "zigzag_cmd_modes_out.csv",
        );

        assert_eq!(lines[0], "date,pivot,mode");
        let modes: Vec<&str> = lines[1..]
            .iter()
            .map(|l| l.rsplit(',').next().unwrap())
            .collect();
        assert_eq!(modes, vec!["-1", "1", "-1", "-1", "1", "1"]);
        std::fs::remove_file(&input).ok();
    }

    #[test]
    fn test_returns_command_uses_dates() {
        let input = temp_file("zigzag_cmd_returns_in.csv", CLOSE_CSV);
        let lines = run_to_lines(
            Command::Returns {
                input: input.display().to_string(),
                params: "0.03,-0.03".to_string(),
                output: None,
                column: None,
            },
            "zigzag_cmd_returns_out.csv",
        );

        assert_eq!(lines[0], "start,end,return");
        assert_eq!(lines.len(), 4);
        assert!(lines[1].starts_with("2024-01-01,2024-01-02,"));
        assert!(lines[3].starts_with("2024-01-04,2024-01-06,"));
        std::fs::remove_file(&input).ok();
    }

    #[test]
    fn test_returns_command_uses_indices_without_dates() {
        let input = temp_file("zigzag_cmd_returns_idx_in.csv", "close\n1.0\n2.0\n");
        let lines = run_to_lines(
            Command::Returns {
                input: input.display().to_string(),
                params: "0.1,-0.1".to_string(),
                output: None,
                column: None,
            },
            "zigzag_cmd_returns_idx_out.csv",
        );

        assert_eq!(lines, vec!["start,end,return", "0,1,1"]);
        std::fs::remove_file(&input).ok();
    }

    #[test]
    fn test_candlestick_command() {
        let input = temp_file(
            "zigzag_cmd_candle_in.csv",
            "close,high,low\n\
             10.0,10.2,9.8\n\
             11.5,12.5,11.2\n\
             11.8,12.0,11.5\n\
             10.4,10.6,10.2\n\
             9.5,9.7,9.1\n\
             9.9,10.1,8.8\n\
             11.0,11.2,10.8\n",
        );
        let lines = run_to_lines(
            Command::Candlestick {
                input: input.display().to_string(),
                params: "0.1,-0.1".to_string(),
                output: None,
            },
            "zigzag_cmd_candle_out.csv",
        );

        assert_eq!(lines[0], "close,high,low,pivot");
        let pivots: Vec<&str> = lines[1..]
            .iter()
            .map(|l| l.rsplit(',').next().unwrap())
            .collect();
        assert_eq!(pivots, vec!["-1", "1", "0", "0", "0", "-1", "1"]);
        std::fs::remove_file(&input).ok();
    }

    #[test]
    fn test_drawdown_command_named_column() {
        let input = temp_file(
            "zigzag_cmd_drawdown_in.csv",
            "close,equity\n1,100\n1,120\n1,90\n1,130\n1,104\n",
        );
        let lines = run_to_lines(
            Command::Drawdown {
                input: input.display().to_string(),
                output: None,
                column: Some("equity".to_string()),
            },
            "zigzag_cmd_drawdown_out.csv",
        );

        assert_eq!(lines[0], "max_drawdown");
        let dd: f64 = lines[1].parse().unwrap();
        assert!((dd - 0.25).abs() < 1e-12);
        std::fs::remove_file(&input).ok();
    }

    #[test]
    fn test_empty_series_is_analysis_error() {
        let input = temp_file("zigzag_cmd_empty_in.csv", "close\n");
        let args = Args {
            command: Command::Pivots {
                input: input.display().to_string(),
                params: "0.03,-0.03".to_string(),
                output: Some(
                    std::env::temp_dir()
                        .join("zigzag_cmd_empty_out.csv")
                        .display()
                        .to_string(),
                ),
                column: None,
            },
        };

        assert!(matches!(
            run(&args),
            Err(CliError::AnalysisError {
                source: zigzag::Error::EmptyInput
            })
        ));
        std::fs::remove_file(&input).ok();
    }

    #[test]
    fn test_positive_down_threshold_rejected() {
        let input = temp_file("zigzag_cmd_badthresh_in.csv", CLOSE_CSV);
        let args = Args {
            command: Command::Pivots {
                input: input.display().to_string(),
                params: "0.03,0.03".to_string(),
                output: None,
                column: None,
            },
        };

        assert!(matches!(
            run(&args),
            Err(CliError::InvalidArgument { .. })
        ));
        std::fs::remove_file(&input).ok();
    }
}
