pub const DEGREES_PER_HOUR: f64 = 15.0;
pub const HOURS_PER_DAY: u32 = 24;

pub fn deg_to_rad(deg: f64) -> f64 {
    deg * (std::f64::consts::PI / 180.0)
}

pub fn rad_to_deg(rad: f64) -> f64 {
    rad * (180.0 / std::f64::consts::PI)
}

/// Hour angle in degrees for a clock hour taken as local solar time.
/// Zero at solar noon, negative before, positive after.
pub fn hour_angle(hour: f64) -> f64 {
    DEGREES_PER_HOUR * (hour - 12.0)
}

/// Cosine of the solar zenith angle. All arguments in radians.
pub fn cos_zenith(lat_rad: f64, decl_rad: f64, ha_rad: f64) -> f64 {
    lat_rad.cos() * decl_rad.cos() * ha_rad.cos() + lat_rad.sin() * decl_rad.sin()
}

/// Cosine of the beam incidence angle on an equator-facing surface tilted
/// by `tilt_rad`, expressed through the equivalent latitude `lat - tilt`.
/// With zero tilt this is the horizontal-surface cosine in the
/// declination-first term order. All arguments in radians.
pub fn cos_incidence_tilted(lat_rad: f64, tilt_rad: f64, decl_rad: f64, ha_rad: f64) -> f64 {
    let eq_lat = lat_rad - tilt_rad;
    decl_rad.sin() * eq_lat.sin() + decl_rad.cos() * eq_lat.cos() * ha_rad.cos()
}

/// Sunset hour angle in degrees for a horizontal surface, or `None` when
/// the sun never rises or never sets at this latitude and declination.
pub fn sunset_hour_angle(latitude: f64, declination: f64) -> Option<f64> {
    let cos_ws = -deg_to_rad(latitude).tan() * deg_to_rad(declination).tan();
    if (-1.0..=1.0).contains(&cos_ws) {
        Some(rad_to_deg(cos_ws.acos()))
    } else {
        None
    }
}
