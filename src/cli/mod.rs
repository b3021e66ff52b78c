//! `fintrack_cli`: runs the dashboard transforms over saved API responses.

pub mod output;

use std::{
    fs,
    io::{self, Read},
    path::{Path, PathBuf},
};

use clap::{Parser, Subcommand};
use serde::Serialize;
use serde_json::Value;

use crate::{
    config::{ConfigManager, DashboardConfig},
    dashboard::Visualization,
    envelope,
    errors::Result,
    series::normalize_value,
    time::{Clock, SystemClock},
    transactions::{preview, BucketedRecord, Bucketer, DateRange},
    utils::{build_info, init_tracing},
};

use output::OutputPreferences;

#[derive(Debug, Parser)]
#[command(name = "fintrack_cli", version, about = "Shape finance API responses for the dashboard")]
pub struct Cli {
    /// Suppress informational status lines.
    #[arg(long, global = true)]
    pub quiet: bool,
    /// Disable colored status lines.
    #[arg(long, global = true)]
    pub plain: bool,
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print the canonical `{labels, values}` form of a trend payload.
    Normalize {
        /// JSON file, or `-` for stdin.
        input: PathBuf,
    },
    /// Tag transactions with their period bucket.
    Bucket {
        /// JSON file holding the transaction list, or `-` for stdin.
        input: PathBuf,
        /// daily, weekly or monthly. Defaults to the configured period.
        #[arg(long)]
        period: Option<String>,
        #[arg(long)]
        start: Option<String>,
        #[arg(long)]
        end: Option<String>,
        /// Print only the dashboard preview of the list.
        #[arg(long)]
        preview: bool,
    },
    /// Print pie and trend series from a visualization payload.
    Visualize {
        input: PathBuf,
    },
    /// Print build metadata.
    Version,
}

/// Parses process arguments and runs the selected command.
pub fn run_cli() -> Result<()> {
    run(Cli::parse())
}

pub fn run(cli: Cli) -> Result<()> {
    output::set_preferences(OutputPreferences {
        plain: cli.plain,
        quiet: cli.quiet,
    });
    let config = ConfigManager::from_env()?.load()?;
    init_tracing(config.log_filter.as_deref());
    tracing::debug!(command = ?cli.command, "running command");

    match cli.command {
        Command::Normalize { input } => {
            let body = read_json(&input)?;
            let series = normalize_value(envelope::check_named("trend", &body)?);
            if series.is_empty() {
                output::warning("no data to render");
            } else {
                output::info(format!("{} points", series.point_count()));
            }
            print_json(&series)
        }
        Command::Bucket {
            input,
            period,
            start,
            end,
            preview: preview_only,
        } => {
            let body = read_json(&input)?;
            let body = envelope::check_named("transactions", &body)?;
            let range = resolve_range(&config, start.as_deref(), end.as_deref(), &SystemClock)?;
            let period = period.unwrap_or_else(|| config.default_period.clone());
            let records = Bucketer::for_period_name(&period)
                .with_range(range)
                .bucket_value(body);
            output::success(bucket_summary(&records, &period));
            if preview_only {
                print_json(&preview(&records, config.preview_limit))
            } else {
                print_json(&records)
            }
        }
        Command::Visualize { input } => {
            let body = read_json(&input)?;
            let viz = Visualization::from_value(&body)?;
            if !viz.has_pie() {
                output::warning("no expense breakdown to render");
            }
            if viz.has_trend() {
                output::info(format!(
                    "trend total {}",
                    config.format_amount(viz.trend.total())
                ));
            }
            print_json(&viz)
        }
        Command::Version => {
            println!("{}", build_info::current().summary());
            Ok(())
        }
    }
}

/// Explicit bounds win; with none, the configured default window applies.
fn resolve_range(
    config: &DashboardConfig,
    start: Option<&str>,
    end: Option<&str>,
    clock: &dyn Clock,
) -> Result<Option<DateRange>> {
    match DateRange::from_inputs(start, end)? {
        Some(range) => Ok(Some(range)),
        None if config.default_to_current_month => {
            Ok(Some(DateRange::current_month(clock.today())))
        }
        None => Ok(None),
    }
}

fn bucket_summary(records: &[BucketedRecord], period: &str) -> String {
    let income = records.iter().filter(|r| r.record.is_income()).count();
    format!(
        "{} transactions bucketed by {} ({} income, {} other)",
        records.len(),
        period,
        income,
        records.len() - income
    )
}

fn read_json(path: &Path) -> Result<Value> {
    let raw = if path == Path::new("-") {
        let mut buffer = String::new();
        io::stdin().read_to_string(&mut buffer)?;
        buffer
    } else {
        fs::read_to_string(path)?
    };
    Ok(serde_json::from_str(&raw)?)
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::time::FixedClock;
    use chrono::NaiveDate;

    fn clock() -> FixedClock {
        FixedClock::on(NaiveDate::from_ymd_opt(2024, 3, 15).unwrap())
    }

    #[test]
    fn explicit_range_wins_over_default_month() {
        let range = resolve_range(
            &DashboardConfig::default(),
            Some("2024-01-01"),
            Some("2024-01-31"),
            &clock(),
        )
        .unwrap()
        .unwrap();
        assert_eq!(range.start, NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
    }

    #[test]
    fn empty_inputs_use_current_month_when_configured() {
        let range = resolve_range(&DashboardConfig::default(), None, None, &clock())
            .unwrap()
            .unwrap();
        assert_eq!(range.start, NaiveDate::from_ymd_opt(2024, 3, 1).unwrap());
        assert_eq!(range.end, NaiveDate::from_ymd_opt(2024, 3, 31).unwrap());
    }

    #[test]
    fn empty_inputs_mean_unbounded_when_default_disabled() {
        let config = DashboardConfig {
            default_to_current_month: false,
            ..DashboardConfig::default()
        };
        assert_eq!(resolve_range(&config, None, None, &clock()).unwrap(), None);
    }

    #[test]
    fn summary_counts_income_records() {
        use crate::transactions::{TransactionKind, TransactionRecord};
        let tagged = |kind| BucketedRecord {
            record: TransactionRecord::new(1, kind, "Misc", 1.0, "2024-03-01"),
            period_key: None,
        };
        let records = [
            tagged(TransactionKind::Income),
            tagged(TransactionKind::Expense),
            tagged(TransactionKind::Expense),
        ];
        assert_eq!(
            bucket_summary(&records, "weekly"),
            "3 transactions bucketed by weekly (1 income, 2 other)"
        );
    }

    #[test]
    fn one_sided_input_is_an_error() {
        let config = DashboardConfig::default();
        assert!(resolve_range(&config, Some("2024-01-01"), None, &clock()).is_err());
    }

    #[test]
    fn cli_definition_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
