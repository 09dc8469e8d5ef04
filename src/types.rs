use std::fmt;

use chrono::NaiveDate;
use serde::Serialize;

use crate::angles::HOURS_PER_DAY;

/// Latitude of Freetown, Sierra Leone.
pub const REFERENCE_LATITUDE: f64 = 8.460555;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum Day {
    #[serde(rename = "Oct 1")]
    Oct1,
    #[serde(rename = "Nov 1")]
    Nov1,
}

impl Day {
    pub const ALL: [Day; 2] = [Day::Oct1, Day::Nov1];

    pub fn spec(self) -> DaySpec {
        match self {
            Day::Oct1 => DaySpec {
                day_of_year: 274,
                declination: -3.36106,
            },
            Day::Nov1 => DaySpec {
                day_of_year: 305,
                declination: -14.56895,
            },
        }
    }

    pub fn month_day(self) -> (u32, u32) {
        match self {
            Day::Oct1 => (10, 1),
            Day::Nov1 => (11, 1),
        }
    }

    /// Calendar date of this day in `year`.
    pub fn date(self, year: i32) -> Option<NaiveDate> {
        let (month, day) = self.month_day();
        NaiveDate::from_ymd_opt(year, month, day)
    }

    pub fn label(self) -> &'static str {
        match self {
            Day::Oct1 => "Oct 1",
            Day::Nov1 => "Nov 1",
        }
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Day-of-year and solar declination (degrees) for one supported day.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DaySpec {
    pub day_of_year: i32,
    pub declination: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SiteConfig {
    pub latitude: f64,
    pub tilt: f64,
}

impl SiteConfig {
    pub fn new(latitude: f64, tilt: f64) -> Self {
        Self { latitude, tilt }
    }

    /// Panel tilted at the site latitude.
    pub fn latitude_tilt(latitude: f64) -> Self {
        Self {
            latitude,
            tilt: latitude,
        }
    }
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self::latitude_tilt(REFERENCE_LATITUDE)
    }
}

/// How the eccentricity correction `1 + 0.033 cos(360 n / 365)` feeds its
/// argument to the cosine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum EccentricityArgument {
    /// Degree-scaled value passed straight to a radian cosine, matching
    /// the published reference tables.
    #[default]
    RadiansQuirk,
    /// Argument converted to radians first.
    Degrees,
}

/// What to do with a day selector outside the fixed table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum DayFallback {
    #[default]
    Strict,
    /// Resolve any unknown selector to Nov 1, as the legacy tables did.
    Legacy,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ModelOptions {
    /// W/m²
    pub solar_constant: f64,
    pub clear_sky_transmittance: f64,
    pub eccentricity: EccentricityArgument,
    pub day_fallback: DayFallback,
}

impl Default for ModelOptions {
    fn default() -> Self {
        Self {
            solar_constant: 1367.0,
            clear_sky_transmittance: 0.7,
            eccentricity: EccentricityArgument::RadiansQuirk,
            day_fallback: DayFallback::Strict,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct HourlyRecord {
    pub hour: u32,
    /// Extraterrestrial irradiance on the tilted surface, W/m².
    pub g0_tilt: f64,
    /// Clear-sky irradiance on the tilted surface, W/m².
    pub g_clear: f64,
}

impl HourlyRecord {
    /// False when the hour sits on singular sunrise/sunset geometry and
    /// carries no usable estimate.
    pub fn is_usable(&self) -> bool {
        self.g0_tilt.is_finite() && self.g_clear.is_finite()
    }
}

/// Unclamped intermediates of the model for one hour.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct HourlyBreakdown {
    pub hour: u32,
    /// Degrees.
    pub hour_angle: f64,
    pub eccentricity: f64,
    pub g0_horizontal: f64,
    pub r_b: f64,
    pub g0_tilt_raw: f64,
    pub g_clear_raw: f64,
}

impl HourlyBreakdown {
    pub fn to_record(&self) -> HourlyRecord {
        HourlyRecord {
            hour: self.hour,
            g0_tilt: clamp_non_negative(self.g0_tilt_raw),
            g_clear: clamp_non_negative(self.g_clear_raw),
        }
    }
}

/// Negative values become zero; NaN and infinities pass through.
pub fn clamp_non_negative(value: f64) -> f64 {
    if value < 0.0 {
        0.0
    } else {
        value
    }
}

/// Sunrise and sunset on a horizontal surface, minutes of local solar time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SunriseSunset {
    pub sunrise: i32,
    pub sunset: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RadiationProfile {
    pub day: Day,
    pub site: SiteConfig,
    pub daylight: SunriseSunset,
    pub records: Vec<HourlyRecord>,
}

impl RadiationProfile {
    /// Record with the highest extraterrestrial tilted irradiance.
    pub fn peak(&self) -> Option<&HourlyRecord> {
        self.records
            .iter()
            .filter(|r| r.is_usable())
            .max_by(|a, b| a.g0_tilt.total_cmp(&b.g0_tilt))
    }

    /// Daily totals in Wh/m² as `(extraterrestrial, clear_sky)`, one hour per record.
    pub fn daily_total_wh(&self) -> (f64, f64) {
        self.records
            .iter()
            .filter(|r| r.is_usable())
            .fold((0.0, 0.0), |(g0, gc), r| (g0 + r.g0_tilt, gc + r.g_clear))
    }

    pub fn unusable_hours(&self) -> Vec<u32> {
        self.records
            .iter()
            .filter(|r| !r.is_usable())
            .map(|r| r.hour)
            .collect()
    }

    pub fn is_complete(&self) -> bool {
        self.records.len() == HOURS_PER_DAY as usize
    }
}
