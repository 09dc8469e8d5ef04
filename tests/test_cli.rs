use std::process::{Command, Output};

fn run(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_solar-radiation"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to run solar-radiation")
}

#[test]
fn test_cli_csv_date_report() {
    let out = run(&["--report", "dates", "--format", "csv"]);
    assert!(out.status.success());
    let stdout = String::from_utf8(out.stdout).unwrap();
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 25);
    assert!(lines[0].starts_with("hour,Oct 1 g0_tilt,"));
}

#[test]
fn test_cli_default_prints_both_reports() {
    let out = run(&[]);
    assert!(out.status.success());
    let stdout = String::from_utf8(out.stdout).unwrap();
    assert!(stdout.contains("Hourly Radiation at 8.460555° (Latitude Tilt)"));
    assert!(stdout.contains("Effect of Tilt on Clear Sky Radiation"));
    assert!(stdout.contains("Nov 1 - 20° Tilt g_clear"));
}

#[test]
fn test_cli_json_is_single_array() {
    let out = run(&["--format", "json", "--day", "Oct 1", "--tilt", "30"]);
    assert!(out.status.success());
    let v: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
    let reports = v.as_array().unwrap();
    assert_eq!(reports.len(), 2);
    assert_eq!(reports[1]["series"][0]["label"], "Oct 1 - 30° Tilt");
}

#[test]
fn test_cli_unsupported_day_fails() {
    let out = run(&["--day", "Dec 25"]);
    assert!(!out.status.success());
    let stderr = String::from_utf8(out.stderr).unwrap();
    assert!(stderr.contains("unsupported day selector"), "{}", stderr);
}

#[test]
fn test_cli_legacy_fallback_accepts_unknown_day() {
    let out = run(&["--day", "Dec 25", "--legacy-day-fallback", "--report", "dates", "--format", "csv"]);
    assert!(out.status.success());
    let stdout = String::from_utf8(out.stdout).unwrap();
    assert!(stdout.starts_with("hour,Nov 1 g0_tilt,Nov 1 g_clear\n"));
}

#[test]
fn test_cli_southern_latitude() {
    let out = run(&["--latitude", "-33.9", "--report", "tilts", "--format", "csv"]);
    assert!(out.status.success());
    let stdout = String::from_utf8(out.stdout).unwrap();
    assert!(stdout.contains("Oct 1 - Latitude Tilt g_clear"));
}
