pub mod angles;
pub mod error;
pub mod radiation;
pub mod report;
pub mod types;

pub use angles::{
    cos_incidence_tilted, cos_zenith, deg_to_rad, hour_angle, rad_to_deg, sunset_hour_angle,
    DEGREES_PER_HOUR, HOURS_PER_DAY,
};

pub use error::{RadiationError, Result};

pub use radiation::{
    compute_hourly_radiation, eccentricity_factor, estimate_sunrise_sunset,
    extraterrestrial_horizontal, hourly_breakdown, hourly_radiation, hourly_radiation_with,
    profile, radiation_at_hour, resolve_day, tilt_factor,
};

pub use report::{
    date_comparison, render_csv, render_text, report_to_compact, reports_to_json,
    tilt_comparison, to_json, write_report, ComparisonReport, Format, Quantity, ReportMetadata, Series,
};

pub use types::{
    clamp_non_negative, Day, DayFallback, DaySpec, EccentricityArgument, HourlyBreakdown,
    HourlyRecord, ModelOptions, RadiationProfile, SiteConfig, SunriseSunset, REFERENCE_LATITUDE,
};
