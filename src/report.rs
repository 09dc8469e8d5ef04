use std::io::Write;

use chrono::{SecondsFormat, Utc};
use serde::Serialize;
use tracing::info;

use crate::error::Result;
use crate::radiation;
use crate::types::{Day, HourlyRecord, ModelOptions, SiteConfig};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Quantity {
    Extraterrestrial,
    ClearSky,
    Both,
}

impl Quantity {
    fn columns(self) -> &'static [&'static str] {
        match self {
            Quantity::Extraterrestrial => &["g0_tilt"],
            Quantity::ClearSky => &["g_clear"],
            Quantity::Both => &["g0_tilt", "g_clear"],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Series {
    pub label: String,
    pub day: Day,
    pub site: SiteConfig,
    pub records: Vec<HourlyRecord>,
}

impl Series {
    fn values(&self, quantity: Quantity) -> Vec<Vec<f64>> {
        self.records
            .iter()
            .map(|r| match quantity {
                Quantity::Extraterrestrial => vec![r.g0_tilt],
                Quantity::ClearSky => vec![r.g_clear],
                Quantity::Both => vec![r.g0_tilt, r.g_clear],
            })
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportMetadata {
    pub generated_at: String,
    pub series_count: usize,
    pub total_records: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComparisonReport {
    pub title: String,
    pub quantity: Quantity,
    pub series: Vec<Series>,
    pub metadata: ReportMetadata,
}

fn tilt_label(site: &SiteConfig) -> String {
    if site.tilt == site.latitude {
        "Latitude Tilt".to_string()
    } else {
        format!("{}° Tilt", format_degrees(site.tilt))
    }
}

fn format_degrees(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{:.0}", value)
    } else {
        format!("{}", value)
    }
}

fn build_report(title: String, quantity: Quantity, series: Vec<Series>) -> ComparisonReport {
    let total_records = series.iter().map(|s| s.records.len()).sum();
    info!(title = %title, series = series.len(), "built comparison report");
    ComparisonReport {
        title,
        quantity,
        metadata: ReportMetadata {
            generated_at: Utc::now().to_rfc3339_opts(SecondsFormat::Secs, false),
            series_count: series.len(),
            total_records,
        },
        series,
    }
}

/// Extraterrestrial and clear-sky radiation for each day, panel at latitude tilt.
pub fn date_comparison(latitude: f64, days: &[Day], options: &ModelOptions) -> ComparisonReport {
    let site = SiteConfig::latitude_tilt(latitude);
    let series = days
        .iter()
        .map(|&day| Series {
            label: day.label().to_string(),
            day,
            site,
            records: radiation::hourly_radiation_with(day, &site, options),
        })
        .collect();
    build_report(
        format!("Hourly Radiation at {}° (Latitude Tilt)", format_degrees(latitude)),
        Quantity::Both,
        series,
    )
}

/// Clear-sky radiation for every (day, tilt) pair, days outermost.
pub fn tilt_comparison(
    latitude: f64,
    tilts: &[f64],
    days: &[Day],
    options: &ModelOptions,
) -> ComparisonReport {
    let series = days
        .iter()
        .flat_map(|&day| {
            tilts.iter().map(move |&tilt| {
                let site = SiteConfig::new(latitude, tilt);
                Series {
                    label: format!("{} - {}", day.label(), tilt_label(&site)),
                    day,
                    site,
                    records: radiation::hourly_radiation_with(day, &site, options),
                }
            })
        })
        .collect();
    build_report(
        "Effect of Tilt on Clear Sky Radiation".to_string(),
        Quantity::ClearSky,
        series,
    )
}

/// Values per series as rows of `[hour][column]`, `None` where the model
/// has no usable estimate.
pub fn report_to_compact(report: &ComparisonReport) -> Vec<Vec<Vec<Option<f64>>>> {
    report
        .series
        .iter()
        .map(|s| {
            s.values(report.quantity)
                .into_iter()
                .map(|row| row.into_iter().map(|v| v.is_finite().then_some(v)).collect())
                .collect()
        })
        .collect()
}

fn header(report: &ComparisonReport) -> Vec<String> {
    let mut cols = vec!["hour".to_string()];
    for s in &report.series {
        for c in report.quantity.columns() {
            cols.push(format!("{} {}", s.label, c));
        }
    }
    cols
}

fn hours(report: &ComparisonReport) -> usize {
    report.series.iter().map(|s| s.records.len()).max().unwrap_or(0)
}

fn cell(report: &ComparisonReport, compact: &[Vec<Vec<Option<f64>>>], hour: usize) -> Vec<Option<f64>> {
    let width = report.quantity.columns().len();
    compact
        .iter()
        .flat_map(|rows| match rows.get(hour) {
            Some(row) => row.clone(),
            None => vec![None; width],
        })
        .collect()
}

pub fn render_csv(report: &ComparisonReport) -> String {
    let compact = report_to_compact(report);
    let mut lines = vec![header(report).join(",")];
    for hour in 0..hours(report) {
        let mut fields = vec![hour.to_string()];
        fields.extend(
            cell(report, &compact, hour)
                .into_iter()
                .map(|v| v.map(|v| format!("{:.4}", v)).unwrap_or_default()),
        );
        lines.push(fields.join(","));
    }
    lines.join("\n") + "\n"
}

pub fn render_text(report: &ComparisonReport) -> String {
    let compact = report_to_compact(report);
    let header = header(report);
    let widths: Vec<usize> = header.iter().map(|h| h.chars().count().max(8)).collect();

    let mut lines = vec![
        report.title.clone(),
        format!("Radiation (W/m²), generated {}", report.metadata.generated_at),
        String::new(),
    ];

    let columns: Vec<String> = header
        .iter()
        .zip(&widths)
        .map(|(h, &w)| format!("{:>w$}", h, w = w))
        .collect();
    lines.push(columns.join("  "));

    for hour in 0..hours(report) {
        let mut fields = vec![format!("{:>w$}", hour, w = widths[0])];
        for (v, &w) in cell(report, &compact, hour).into_iter().zip(&widths[1..]) {
            let text = v.map(|v| format!("{:.1}", v)).unwrap_or_else(|| "-".to_string());
            fields.push(format!("{:>w$}", text, w = w));
        }
        lines.push(fields.join("  "));
    }
    lines.join("\n") + "\n"
}

pub fn to_json(report: &ComparisonReport) -> Result<String> {
    Ok(serde_json::to_string_pretty(report)?)
}

/// Several reports as one JSON array.
pub fn reports_to_json(reports: &[ComparisonReport]) -> Result<String> {
    Ok(serde_json::to_string_pretty(reports)?)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Text,
    Csv,
    Json,
}

pub fn write_report<W: Write>(writer: &mut W, report: &ComparisonReport, format: Format) -> Result<()> {
    let rendered = match format {
        Format::Text => render_text(report),
        Format::Csv => render_csv(report),
        Format::Json => to_json(report)? + "\n",
    };
    writer.write_all(rendered.as_bytes())?;
    Ok(())
}
