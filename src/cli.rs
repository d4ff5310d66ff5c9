//! CLI definition and dispatch.

use chrono::{Datelike, Local, NaiveDate};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use crate::adapters::csv_export;
use crate::adapters::file_config_adapter::FileConfigAdapter;
use crate::adapters::json_journal_adapter::JsonJournalAdapter;
use crate::domain::calendar::{daily_calendar_stats, day_key};
use crate::domain::config_validation::validate_journal_config;
use crate::domain::date_range::DateRange;
use crate::domain::dimension::{aggregate_by_dimension, Dimension};
use crate::domain::discipline::discipline_report;
use crate::domain::edge::edge_names;
use crate::domain::error::JournalError;
use crate::domain::formula::formula_names;
use crate::domain::money::format_currency;
use crate::domain::r_multiple::r_multiple_distribution;
use crate::domain::weekday::weekday_performance;
use crate::ports::config_port::ConfigPort;
use crate::ports::journal_port::JournalPort;

const DEFAULT_DISCIPLINE_WINDOW_DAYS: i64 = 30;

#[derive(Parser, Debug)]
#[command(name = "edgebook", about = "Trading journal analytics")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum DimensionArg {
    Strategy,
    Entry,
    StopLoss,
    Target,
}

impl From<DimensionArg> for Dimension {
    fn from(arg: DimensionArg) -> Self {
        match arg {
            DimensionArg::Strategy => Dimension::Strategy,
            DimensionArg::Entry => Dimension::EntryFormula,
            DimensionArg::StopLoss => Dimension::StopLossFormula,
            DimensionArg::Target => Dimension::TargetFormula,
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Performance grouped by strategy or formula
    Report {
        #[arg(short, long)]
        config: PathBuf,
        #[arg(short, long, value_enum)]
        dimension: Option<DimensionArg>,
        /// Also write the table to a CSV file
        #[arg(long)]
        export: Option<PathBuf>,
    },
    /// R-multiple distribution histogram
    Distribution {
        #[arg(short, long)]
        config: PathBuf,
    },
    /// Day-of-week performance table
    Weekdays {
        #[arg(short, long)]
        config: PathBuf,
    },
    /// Daily P&L calendar
    Calendar {
        #[arg(short, long)]
        config: PathBuf,
        /// Restrict to one month, yyyy-MM
        #[arg(long)]
        month: Option<String>,
    },
    /// Time-block confirmation-rate report
    Discipline {
        #[arg(short, long)]
        config: PathBuf,
        #[arg(long)]
        from: Option<String>,
        #[arg(long)]
        to: Option<String>,
    },
    /// Validate configuration and journal data
    Validate {
        #[arg(short, long)]
        config: PathBuf,
    },
}

pub fn run(cli: Cli) -> ExitCode {
    match cli.command {
        Command::Report {
            config,
            dimension,
            export,
        } => run_report(
            &config,
            dimension.unwrap_or(DimensionArg::Strategy),
            export.as_deref(),
        ),
        Command::Distribution { config } => run_distribution(&config),
        Command::Weekdays { config } => run_weekdays(&config),
        Command::Calendar { config, month } => run_calendar(&config, month.as_deref()),
        Command::Discipline { config, from, to } => {
            run_discipline(&config, from.as_deref(), to.as_deref())
        }
        Command::Validate { config } => run_validate(&config),
    }
}

pub fn load_config(path: &Path) -> Result<FileConfigAdapter, ExitCode> {
    FileConfigAdapter::from_file(path).map_err(|e| {
        let err = JournalError::ConfigParse {
            file: path.display().to_string(),
            reason: e.to_string(),
        };
        eprintln!("error: {err}");
        ExitCode::from(&err)
    })
}

fn open_journal(config_path: &Path) -> Result<(FileConfigAdapter, JsonJournalAdapter), ExitCode> {
    eprintln!("Loading config from {}", config_path.display());
    let config = load_config(config_path)?;

    if let Err(e) = validate_journal_config(&config) {
        eprintln!("error: {e}");
        return Err((&e).into());
    }

    let journal = match JsonJournalAdapter::from_config(&config) {
        Ok(j) => j,
        Err(e) => {
            eprintln!("error: {e}");
            return Err((&e).into());
        }
    };

    Ok((config, journal))
}

fn currency_symbol(config: &FileConfigAdapter) -> String {
    config
        .get_string("report", "currency_symbol")
        .unwrap_or_default()
}

fn money(symbol: &str, value: f64) -> String {
    format!("{}{}", symbol, format_currency(value))
}

fn dimension_title(dimension: DimensionArg) -> &'static str {
    match dimension {
        DimensionArg::Strategy => "Strategy",
        DimensionArg::Entry => "Entry Formula",
        DimensionArg::StopLoss => "Stop-Loss Formula",
        DimensionArg::Target => "Target Formula",
    }
}

fn run_report(config_path: &Path, dimension: DimensionArg, export: Option<&Path>) -> ExitCode {
    let (config, journal) = match open_journal(config_path) {
        Ok(v) => v,
        Err(code) => return code,
    };

    let trades = match journal.load_trades() {
        Ok(t) => t,
        Err(e) => {
            eprintln!("error: {e}");
            return (&e).into();
        }
    };

    let names = match dimension {
        DimensionArg::Strategy => match journal.load_edges() {
            Ok(edges) => edge_names(&edges),
            Err(e) => {
                eprintln!("error: {e}");
                return (&e).into();
            }
        },
        _ => match journal.load_formulas() {
            Ok(formulas) => formula_names(&formulas),
            Err(e) => {
                eprintln!("error: {e}");
                return (&e).into();
            }
        },
    };

    let rows = aggregate_by_dimension(&trades, dimension.into(), &names);
    eprintln!("{} trades loaded, {} groups", trades.len(), rows.len());

    let symbol = currency_symbol(&config);
    println!("=== {} Performance ===", dimension_title(dimension));
    if rows.is_empty() {
        println!("  (no closed trades)");
    }
    for row in &rows {
        let pf = if row.profit_factor.is_infinite() {
            "inf".to_string()
        } else {
            format!("{:.2}", row.profit_factor)
        };
        println!(
            "  {}: {} trades, {:.1}% win rate, PF {}, avg {}, total {}",
            row.name,
            row.trade_count,
            row.win_rate,
            pf,
            money(&symbol, row.avg_pnl),
            money(&symbol, row.total_pnl),
        );
    }

    if let Some(path) = export {
        if let Err(e) = csv_export::write_dimension_report(path, &rows) {
            eprintln!("error: {e}");
            return (&e).into();
        }
        eprintln!("Report written to: {}", path.display());
    }

    ExitCode::SUCCESS
}

fn run_distribution(config_path: &Path) -> ExitCode {
    let (_, journal) = match open_journal(config_path) {
        Ok(v) => v,
        Err(code) => return code,
    };

    let trades = match journal.load_trades() {
        Ok(t) => t,
        Err(e) => {
            eprintln!("error: {e}");
            return (&e).into();
        }
    };

    let buckets = r_multiple_distribution(&trades);
    let binned: usize = buckets.iter().map(|b| b.count).sum();
    eprintln!("{} trades loaded, {} binned", trades.len(), binned);

    println!("=== R-Multiple Distribution ===");
    for bucket in &buckets {
        println!(
            "  {:<12} {:>4}  {}",
            bucket.label,
            bucket.count,
            "#".repeat(bucket.count.min(60)),
        );
    }

    ExitCode::SUCCESS
}

fn run_weekdays(config_path: &Path) -> ExitCode {
    let (config, journal) = match open_journal(config_path) {
        Ok(v) => v,
        Err(code) => return code,
    };

    let trades = match journal.load_trades() {
        Ok(t) => t,
        Err(e) => {
            eprintln!("error: {e}");
            return (&e).into();
        }
    };

    let rows = weekday_performance(&trades);
    let symbol = currency_symbol(&config);

    println!("=== Day-of-Week Performance ===");
    for row in &rows {
        println!(
            "  {}: {} trades, {}",
            row.day,
            row.trades,
            money(&symbol, row.pnl),
        );
    }

    ExitCode::SUCCESS
}

fn run_calendar(config_path: &Path, month: Option<&str>) -> ExitCode {
    let (config, journal) = match open_journal(config_path) {
        Ok(v) => v,
        Err(code) => return code,
    };

    let month_start = match month {
        Some(m) => match NaiveDate::parse_from_str(&format!("{m}-01"), "%Y-%m-%d") {
            Ok(d) => Some(d),
            Err(_) => {
                eprintln!("error: invalid month {:?} (expected yyyy-MM)", m);
                return ExitCode::from(4);
            }
        },
        None => None,
    };

    let trades = match journal.load_trades() {
        Ok(t) => t,
        Err(e) => {
            eprintln!("error: {e}");
            return (&e).into();
        }
    };

    let days = daily_calendar_stats(&trades);
    let symbol = currency_symbol(&config);

    println!("=== Daily P&L Calendar ===");
    let mut total_pnl = 0.0;
    let mut shown = 0usize;
    for (date, stats) in &days {
        if let Some(start) = month_start {
            if date.year() != start.year() || date.month() != start.month() {
                continue;
            }
        }
        println!(
            "  {}: {} trades, {}",
            day_key(*date),
            stats.trade_count,
            money(&symbol, stats.pnl),
        );
        total_pnl += stats.pnl;
        shown += 1;
    }
    if shown == 0 {
        println!("  (no trading days)");
    } else {
        println!("  {} trading days, net {}", shown, money(&symbol, total_pnl));
    }

    ExitCode::SUCCESS
}

/// Resolves the discipline window from the range flags. Both bounds are
/// inclusive; `--from` alone means that single day; no flags means the
/// trailing default window ending today.
fn discipline_range(
    from: Option<&str>,
    to: Option<&str>,
    today: NaiveDate,
) -> Result<DateRange, JournalError> {
    match (from, to) {
        (Some(f), Some(t)) => DateRange::parse(f, t),
        (Some(f), None) => DateRange::parse(f, f),
        (None, None) => Ok(DateRange::trailing_days(
            today,
            DEFAULT_DISCIPLINE_WINDOW_DAYS,
        )),
        (None, Some(_)) => Err(JournalError::DateRange {
            reason: "--to requires --from".to_string(),
        }),
    }
}

fn run_discipline(config_path: &Path, from: Option<&str>, to: Option<&str>) -> ExitCode {
    let (_, journal) = match open_journal(config_path) {
        Ok(v) => v,
        Err(code) => return code,
    };

    let today = Local::now().date_naive();
    let range = match discipline_range(from, to, today) {
        Ok(r) => r,
        Err(e) => {
            eprintln!("error: {e}");
            return (&e).into();
        }
    };

    let blocks = match journal.load_blocks() {
        Ok(b) => b,
        Err(e) => {
            eprintln!("error: {e}");
            return (&e).into();
        }
    };

    eprintln!(
        "{} blocks loaded, range {} to {}",
        blocks.len(),
        range.from,
        range.to,
    );

    let report = discipline_report(&blocks, range, today);

    println!("=== Discipline Report ===");
    println!(
        "  Confirmed {} of {} due blocks ({:.1}%)",
        report.total_confirmed_blocks,
        report.total_due_blocks,
        report.overall_confirmation_rate,
    );
    for row in &report.by_condition {
        println!(
            "  {}: {}/{} ({:.1}%)",
            row.condition, row.confirmed, row.due, row.rate,
        );
    }

    ExitCode::SUCCESS
}

fn run_validate(config_path: &Path) -> ExitCode {
    let (_, journal) = match open_journal(config_path) {
        Ok(v) => v,
        Err(code) => return code,
    };
    eprintln!("Config validated successfully");

    let trades = match journal.load_trades() {
        Ok(t) => t,
        Err(e) => {
            eprintln!("error: {e}");
            return (&e).into();
        }
    };
    let edges = match journal.load_edges() {
        Ok(e) => e,
        Err(e) => {
            eprintln!("error: {e}");
            return (&e).into();
        }
    };
    let formulas = match journal.load_formulas() {
        Ok(f) => f,
        Err(e) => {
            eprintln!("error: {e}");
            return (&e).into();
        }
    };
    let blocks = match journal.load_blocks() {
        Ok(b) => b,
        Err(e) => {
            eprintln!("error: {e}");
            return (&e).into();
        }
    };

    let open = trades.iter().filter(|t| t.is_open()).count();
    eprintln!("\nJournal contents:");
    eprintln!("  trades:   {} ({} open)", trades.len(), open);
    eprintln!("  edges:    {}", edges.len());
    eprintln!("  formulas: {}", formulas.len());
    eprintln!("  blocks:   {}", blocks.len());
    eprintln!("\nJournal is valid");

    ExitCode::SUCCESS
}
