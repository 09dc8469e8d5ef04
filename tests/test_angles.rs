use solar_radiation::angles::*;

macro_rules! assert_approx {
    ($left:expr, $right:expr, $tol:expr) => {
        let (l, r) = ($left as f64, $right as f64);
        assert!(
            (l - r).abs() <= $tol,
            "assert_approx failed: left={}, right={}, diff={}, tol={}",
            l, r, (l - r).abs(), $tol
        );
    };
}

// ── Unit conversion ──

#[test]
fn test_deg_rad_conversion() {
    assert_approx!(deg_to_rad(180.0), std::f64::consts::PI, 1e-15);
    assert_approx!(deg_to_rad(-90.0), -std::f64::consts::FRAC_PI_2, 1e-15);
    assert_approx!(rad_to_deg(std::f64::consts::FRAC_PI_4), 45.0, 1e-12);
    for deg in [-90.0, -14.56895, 0.0, 8.460555, 20.0, 90.0] {
        assert_approx!(rad_to_deg(deg_to_rad(deg)), deg, 1e-12);
    }
}

// ── HourAngle ──

#[test]
fn test_hour_angle_noon_is_zero() {
    assert_eq!(hour_angle(12.0), 0.0);
}

#[test]
fn test_hour_angle_sign_and_rate() {
    assert_eq!(hour_angle(0.0), -180.0);
    assert_eq!(hour_angle(6.0), -90.0);
    assert_eq!(hour_angle(18.0), 90.0);
    assert_eq!(hour_angle(23.0), 165.0);
    assert_eq!(hour_angle(13.0) - hour_angle(12.0), DEGREES_PER_HOUR);
}

// ── Incidence cosines ──

#[test]
fn test_cos_zenith_equinox_equator_noon() {
    assert_approx!(cos_zenith(0.0, 0.0, 0.0), 1.0, 1e-15);
}

#[test]
fn test_cos_zenith_matches_untilted_incidence() {
    let lat = deg_to_rad(8.460555);
    let decl = deg_to_rad(-3.36106);
    for hour in 0..24 {
        let ha = deg_to_rad(hour_angle(hour as f64));
        assert_eq!(
            cos_zenith(lat, decl, ha),
            cos_incidence_tilted(lat, 0.0, decl, ha),
            "hour {}",
            hour
        );
    }
}

#[test]
fn test_cos_incidence_latitude_tilt_reduces_to_equator() {
    let lat = deg_to_rad(8.460555);
    let decl = deg_to_rad(-14.56895);
    for hour in 0..24 {
        let ha = deg_to_rad(hour_angle(hour as f64));
        assert_approx!(
            cos_incidence_tilted(lat, lat, decl, ha),
            decl.cos() * ha.cos(),
            1e-15
        );
    }
}

// ── Sunset hour angle ──

#[test]
fn test_sunset_hour_angle_equator_is_ninety() {
    assert_approx!(sunset_hour_angle(0.0, -14.56895).unwrap(), 90.0, 1e-9);
}

#[test]
fn test_sunset_hour_angle_short_days_south_declination() {
    let ws = sunset_hour_angle(8.460555, -14.56895).unwrap();
    assert!(ws < 90.0 && ws > 85.0, "ws={}", ws);
}

#[test]
fn test_sunset_hour_angle_polar() {
    assert_eq!(sunset_hour_angle(80.0, -14.56895), None);
    assert_eq!(sunset_hour_angle(-80.0, -14.56895), None);
}
