//! Hourly extraterrestrial and clear-sky irradiance on a tilted surface.
//!
//! For each clock hour the horizontal extraterrestrial irradiance is scaled
//! by the beam tilt factor `R_b` and attenuated by a fixed clear-sky
//! transmittance. Hours are local solar time, so hour 12 is solar noon.

use std::str::FromStr;

use chrono::{Datelike, NaiveDate};
use tracing::{debug, warn};

use crate::angles::{self, HOURS_PER_DAY};
use crate::error::{RadiationError, Result};
use crate::types::{
    Day, DayFallback, EccentricityArgument, HourlyBreakdown, HourlyRecord, ModelOptions,
    RadiationProfile, SiteConfig, SunriseSunset,
};

const DATE_FORMATS: [&str; 4] = ["%Y-%m-%d", "%b %d %Y", "%B %d %Y", "%d %b %Y"];

/// Lowercase tokens split on ASCII whitespace, `-` and `_`.
fn selector_tokens(s: &str) -> Vec<String> {
    s.trim()
        .split(|c: char| c.is_ascii_whitespace() || c == '-' || c == '_')
        .filter(|t| !t.is_empty())
        .map(str::to_ascii_lowercase)
        .collect()
}

fn day_from_name(month: &str, day: &str) -> Option<Day> {
    if day != "1" && day != "01" {
        return None;
    }
    match month {
        "oct" | "october" => Some(Day::Oct1),
        "nov" | "november" => Some(Day::Nov1),
        _ => None,
    }
}

impl FromStr for Day {
    type Err = RadiationError;

    fn from_str(s: &str) -> Result<Self> {
        if let [month, day] = selector_tokens(s).as_slice() {
            if let Some(d) = day_from_name(month, day) {
                return Ok(d);
            }
        }

        let trimmed = s.trim();
        DATE_FORMATS
            .iter()
            .find_map(|fmt| NaiveDate::parse_from_str(trimmed, fmt).ok())
            .and_then(|date| {
                Day::ALL
                    .into_iter()
                    .find(|day| day.date(date.year()) == Some(date))
            })
            .ok_or_else(|| RadiationError::UnsupportedDay(s.to_string()))
    }
}

/// Resolves a textual day selector under the configured fallback policy.
pub fn resolve_day(selector: &str, options: &ModelOptions) -> Result<Day> {
    match (selector.parse::<Day>(), options.day_fallback) {
        (Ok(day), _) => Ok(day),
        (Err(_), DayFallback::Legacy) => {
            warn!(selector = %selector, "unknown day selector, falling back to Nov 1");
            Ok(Day::Nov1)
        }
        (Err(e), DayFallback::Strict) => Err(e),
    }
}

pub fn eccentricity_factor(day_of_year: i32, mode: EccentricityArgument) -> f64 {
    let arg = (360 * day_of_year) as f64 / 365.0;
    let arg = match mode {
        EccentricityArgument::RadiansQuirk => arg,
        EccentricityArgument::Degrees => angles::deg_to_rad(arg),
    };
    1.0 + 0.033 * arg.cos()
}

/// Extraterrestrial irradiance on a horizontal surface, W/m². Negative
/// while the sun is below the horizon. Angles in radians.
pub fn extraterrestrial_horizontal(
    solar_constant: f64,
    eccentricity: f64,
    lat_rad: f64,
    decl_rad: f64,
    ha_rad: f64,
) -> f64 {
    solar_constant * eccentricity * angles::cos_zenith(lat_rad, decl_rad, ha_rad)
}

/// Ratio of beam irradiance on the tilted surface to beam irradiance on
/// the horizontal. The denominator vanishes at sunrise and sunset and the
/// resulting infinity or NaN is returned as is. Angles in radians.
pub fn tilt_factor(lat_rad: f64, tilt_rad: f64, decl_rad: f64, ha_rad: f64) -> f64 {
    angles::cos_incidence_tilted(lat_rad, tilt_rad, decl_rad, ha_rad)
        / angles::cos_incidence_tilted(lat_rad, 0.0, decl_rad, ha_rad)
}

pub fn radiation_at_hour(
    day: Day,
    site: &SiteConfig,
    options: &ModelOptions,
    hour: u32,
) -> HourlyBreakdown {
    let spec = day.spec();
    let decl_rad = angles::deg_to_rad(spec.declination);
    let lat_rad = angles::deg_to_rad(site.latitude);
    let tilt_rad = angles::deg_to_rad(site.tilt);

    let ha = angles::hour_angle(hour as f64);
    let ha_rad = angles::deg_to_rad(ha);

    let eccentricity = eccentricity_factor(spec.day_of_year, options.eccentricity);
    let g0_horizontal =
        extraterrestrial_horizontal(options.solar_constant, eccentricity, lat_rad, decl_rad, ha_rad);
    let r_b = tilt_factor(lat_rad, tilt_rad, decl_rad, ha_rad);
    let g0_tilt_raw = g0_horizontal * r_b;

    HourlyBreakdown {
        hour,
        hour_angle: ha,
        eccentricity,
        g0_horizontal,
        r_b,
        g0_tilt_raw,
        g_clear_raw: options.clear_sky_transmittance * g0_tilt_raw,
    }
}

pub fn hourly_breakdown(day: Day, site: &SiteConfig, options: &ModelOptions) -> Vec<HourlyBreakdown> {
    (0..HOURS_PER_DAY)
        .map(|hour| radiation_at_hour(day, site, options, hour))
        .collect()
}

pub fn hourly_radiation_with(
    day: Day,
    site: &SiteConfig,
    options: &ModelOptions,
) -> Vec<HourlyRecord> {
    let records: Vec<HourlyRecord> = hourly_breakdown(day, site, options)
        .iter()
        .map(HourlyBreakdown::to_record)
        .collect();

    for r in records.iter().filter(|r| !r.is_usable()) {
        warn!(
            day = %day,
            latitude = site.latitude,
            tilt = site.tilt,
            hour = r.hour,
            "singular sun geometry, no usable irradiance for this hour"
        );
    }
    debug!(day = %day, latitude = site.latitude, tilt = site.tilt, "computed hourly radiation");
    records
}

pub fn hourly_radiation(day: Day, site: &SiteConfig) -> Vec<HourlyRecord> {
    hourly_radiation_with(day, site, &ModelOptions::default())
}

/// 24 hourly records for a textual day selector, latitude and tilt in
/// degrees. Fails only for a selector other than Oct 1 or Nov 1.
pub fn compute_hourly_radiation(
    day_selector: &str,
    latitude: f64,
    tilt: f64,
) -> Result<Vec<HourlyRecord>> {
    let day = day_selector.parse::<Day>()?;
    Ok(hourly_radiation(day, &SiteConfig::new(latitude, tilt)))
}

pub fn estimate_sunrise_sunset(latitude: f64, day: Day) -> SunriseSunset {
    let decl = day.spec().declination;
    let solar_noon_minutes = 720;
    match angles::sunset_hour_angle(latitude, decl) {
        Some(ws) => {
            let half_day_minutes = (ws / angles::DEGREES_PER_HOUR) * 60.0;
            SunriseSunset {
                sunrise: (solar_noon_minutes as f64 - half_day_minutes) as i32,
                sunset: (solar_noon_minutes as f64 + half_day_minutes) as i32,
            }
        }
        // Polar night when the sun and the site are in opposite hemispheres.
        None if latitude * decl < 0.0 => SunriseSunset {
            sunrise: solar_noon_minutes,
            sunset: solar_noon_minutes,
        },
        None => SunriseSunset {
            sunrise: 0,
            sunset: 1440,
        },
    }
}

pub fn profile(day: Day, site: SiteConfig, options: &ModelOptions) -> RadiationProfile {
    RadiationProfile {
        day,
        site,
        daylight: estimate_sunrise_sunset(site.latitude, day),
        records: hourly_radiation_with(day, &site, options),
    }
}
