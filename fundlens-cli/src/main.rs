//! FundLens CLI — print or export the funding reports.
//!
//! Commands:
//! - `overall` — market totals and the month-over-month trend
//! - `startup` — one startup's funding history
//! - `investor` — one investor's portfolio
//! - `list` — the names the profile reports accept
//! - `export` — write a report as JSON or markdown
//! - `info` — load statistics and the dataset fingerprint

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use tracing::warn;

use fundlens_core::{InvestorMatch, RecentOrder, Report, ReportRequest, TrendMetric};
use fundlens_runner::{
    export_report, logging, render_text, DashboardConfig, ExportFormat, Session,
};

#[derive(Parser)]
#[command(
    name = "fundlens",
    about = "FundLens CLI — startup funding analysis reports"
)]
struct Cli {
    /// Funding CSV. Overrides `[data] path` from the config file.
    #[arg(long, global = true)]
    data: Option<PathBuf>,

    /// TOML config file.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Order recent-investment tables newest first instead of table order.
    #[arg(long, global = true, default_value_t = false)]
    recent_by_date: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Overall market report.
    Overall {
        /// Metric for the month-over-month trend.
        #[arg(long, value_enum, default_value_t = TrendArg::Total)]
        trend: TrendArg,
    },
    /// Startup profile.
    Startup {
        /// Exact startup name, as printed by `list startups`.
        name: String,
    },
    /// Investor profile.
    Investor {
        /// Investor name.
        name: String,

        /// Match whole investor names only instead of substrings.
        #[arg(long, default_value_t = false)]
        strict: bool,
    },
    /// List startup or investor names.
    List {
        #[arg(value_enum)]
        kind: ListKind,
    },
    /// Write a report to a file.
    Export {
        #[arg(value_enum)]
        mode: ModeArg,

        /// Startup or investor name (required for those modes).
        name: Option<String>,

        #[arg(long, value_enum, default_value_t = FormatArg::Markdown)]
        format: FormatArg,

        /// Output directory.
        #[arg(long, default_value = "reports")]
        out: PathBuf,

        /// Trend metric for the overall report.
        #[arg(long, value_enum, default_value_t = TrendArg::Total)]
        trend: TrendArg,

        /// Strict investor matching.
        #[arg(long, default_value_t = false)]
        strict: bool,
    },
    /// Show load statistics and the dataset fingerprint.
    Info,
}

#[derive(Clone, Copy, ValueEnum)]
enum TrendArg {
    Total,
    Count,
}

impl From<TrendArg> for TrendMetric {
    fn from(arg: TrendArg) -> Self {
        match arg {
            TrendArg::Total => TrendMetric::Total,
            TrendArg::Count => TrendMetric::Count,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum ListKind {
    Startups,
    Investors,
}

#[derive(Clone, Copy, ValueEnum)]
enum ModeArg {
    Overall,
    Startup,
    Investor,
}

#[derive(Clone, Copy, ValueEnum)]
enum FormatArg {
    Markdown,
    Json,
}

impl From<FormatArg> for ExportFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Markdown => ExportFormat::Markdown,
            FormatArg::Json => ExportFormat::Json,
        }
    }
}

fn main() -> Result<()> {
    logging::init_stderr("warn")?;
    let cli = Cli::parse();

    let config = build_config(&cli)?;
    let session = Session::open(config).context("Failed to open funding data")?;

    match cli.command {
        Commands::Overall { trend } => print_report(
            &session,
            &ReportRequest::Overall {
                trend: trend.into(),
            },
            false,
        ),
        Commands::Startup { name } => {
            print_report(&session, &ReportRequest::Startup { name }, false)
        }
        Commands::Investor { name, strict } => {
            print_report(&session, &ReportRequest::Investor { name }, strict)
        }
        Commands::List { kind } => {
            let names = match kind {
                ListKind::Startups => session.startup_names(),
                ListKind::Investors => session.investor_names(),
            };
            for name in names {
                println!("{name}");
            }
            Ok(())
        }
        Commands::Export {
            mode,
            name,
            format,
            out,
            trend,
            strict,
        } => run_export(&session, mode, name, format, &out, trend, strict),
        Commands::Info => {
            run_info(&session);
            Ok(())
        }
    }
}

fn build_config(cli: &Cli) -> Result<DashboardConfig> {
    let mut config = match &cli.config {
        Some(path) => DashboardConfig::from_file(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => DashboardConfig::default(),
    };
    if let Some(data) = &cli.data {
        config.data.path = data.clone();
    }
    if cli.recent_by_date {
        config.report.recent_order = RecentOrder::MostRecentFirst;
    }
    Ok(config)
}

fn options(session: &Session, strict: bool) -> fundlens_core::ReportOptions {
    let mut options = session.options();
    if strict {
        options.investor_match = InvestorMatch::Strict;
    }
    options
}

fn print_report(session: &Session, request: &ReportRequest, strict: bool) -> Result<()> {
    let report = session.run_with(request, &options(session, strict));
    warn_if_unmatched(&report);
    print!("{}", render_text(&session.render(&report)));
    Ok(())
}

fn warn_if_unmatched(report: &Report) {
    match report {
        Report::Startup(r) if r.matched == 0 => {
            warn!(name = %r.name, "no records for this startup; see `fundlens list startups`");
        }
        Report::Investor(r) if r.matched == 0 => {
            warn!(name = %r.name, "no records for this investor; see `fundlens list investors`");
        }
        _ => {}
    }
}

fn run_export(
    session: &Session,
    mode: ModeArg,
    name: Option<String>,
    format: FormatArg,
    out: &std::path::Path,
    trend: TrendArg,
    strict: bool,
) -> Result<()> {
    let request = match (mode, name) {
        (ModeArg::Overall, _) => ReportRequest::Overall {
            trend: trend.into(),
        },
        (ModeArg::Startup, Some(name)) => ReportRequest::Startup { name },
        (ModeArg::Investor, Some(name)) => ReportRequest::Investor { name },
        (ModeArg::Startup | ModeArg::Investor, None) => {
            bail!("export of a startup or investor report needs a NAME")
        }
    };
    let path = export_report(
        session,
        &request,
        &options(session, strict),
        format.into(),
        out,
    )?;
    println!("Wrote {}", path.display());
    Ok(())
}

fn run_info(session: &Session) {
    let summary = session.summary();
    println!("Source:            {}", session.config().data.path.display());
    println!("Rows:              {}", summary.rows);
    println!("Blank dates:       {}", summary.blank_dates);
    println!("Invalid dates:     {}", summary.invalid_dates);
    println!("Blank amounts:     {}", summary.blank_amounts);
    println!("Invalid amounts:   {}", summary.invalid_amounts);
    println!("Startups:          {}", session.startup_names().len());
    println!("Investors:         {}", session.investor_names().len());
    println!("Fingerprint:       {}", session.dataset().fingerprint());
}
