use std::io;
use std::process::ExitCode;

use clap::{Parser, ValueEnum};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use solar_radiation::{
    date_comparison, reports_to_json, resolve_day, tilt_comparison, write_report, Day,
    DayFallback, EccentricityArgument, Format, ModelOptions, RadiationError, REFERENCE_LATITUDE,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum ReportKind {
    /// Radiation vs. hour for each day at latitude tilt.
    Dates,
    /// Clear-sky radiation for each day and tilt.
    Tilts,
    All,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Csv,
    Json,
}

impl From<OutputFormat> for Format {
    fn from(f: OutputFormat) -> Self {
        match f {
            OutputFormat::Text => Format::Text,
            OutputFormat::Csv => Format::Csv,
            OutputFormat::Json => Format::Json,
        }
    }
}

/// Hourly extraterrestrial and clear-sky radiation on a tilted panel.
#[derive(Debug, Parser)]
#[command(name = "solar-radiation", version, about)]
struct Args {
    /// Site latitude in degrees, positive north.
    #[arg(long, default_value_t = REFERENCE_LATITUDE, allow_hyphen_values = true)]
    latitude: f64,

    /// Panel tilt in degrees for the tilt comparison. Repeatable.
    /// Defaults to the latitude and 20°.
    #[arg(long = "tilt", allow_hyphen_values = true)]
    tilts: Vec<f64>,

    /// Day selector ("Oct 1", "Nov 1", "2026-10-01"). Repeatable.
    /// Defaults to both supported days.
    #[arg(long = "day")]
    days: Vec<String>,

    #[arg(long, value_enum, default_value_t = ReportKind::All)]
    report: ReportKind,

    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Convert the eccentricity argument to radians instead of reproducing
    /// the reference tables.
    #[arg(long)]
    corrected_eccentricity: bool,

    /// Resolve unknown day selectors to Nov 1 instead of failing.
    #[arg(long)]
    legacy_day_fallback: bool,

    /// Increase log verbosity (-v debug, -vv trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Args {
    fn options(&self) -> ModelOptions {
        ModelOptions {
            eccentricity: if self.corrected_eccentricity {
                EccentricityArgument::Degrees
            } else {
                EccentricityArgument::RadiansQuirk
            },
            day_fallback: if self.legacy_day_fallback {
                DayFallback::Legacy
            } else {
                DayFallback::Strict
            },
            ..ModelOptions::default()
        }
    }
}

fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn run(args: &Args) -> Result<(), RadiationError> {
    let options = args.options();
    debug!(?options, "model options");

    let days = if args.days.is_empty() {
        Day::ALL.to_vec()
    } else {
        args.days
            .iter()
            .map(|s| resolve_day(s, &options))
            .collect::<Result<Vec<_>, _>>()?
    };
    let tilts = if args.tilts.is_empty() {
        vec![args.latitude, 20.0]
    } else {
        args.tilts.clone()
    };

    let mut reports = Vec::new();
    if matches!(args.report, ReportKind::Dates | ReportKind::All) {
        reports.push(date_comparison(args.latitude, &days, &options));
    }
    if matches!(args.report, ReportKind::Tilts | ReportKind::All) {
        reports.push(tilt_comparison(args.latitude, &tilts, &days, &options));
    }

    let stdout = io::stdout();
    let mut out = stdout.lock();
    if args.format == OutputFormat::Json {
        let json = reports_to_json(&reports)?;
        io::Write::write_all(&mut out, json.as_bytes())?;
        io::Write::write_all(&mut out, b"\n")?;
        return Ok(());
    }
    for (i, report) in reports.iter().enumerate() {
        if i > 0 {
            io::Write::write_all(&mut out, b"\n")?;
        }
        write_report(&mut out, report, args.format.into())?;
    }
    Ok(())
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(args.verbose);

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}
