//! Integration tests for stanza-cli.
//!
//! Drives the `stanza` binary end-to-end: table output, validation
//! failures, CSV export, and preset plumbing.

use std::process::Command;

/// Helper to get the path to the `stanza` binary built by cargo.
fn stanza_bin() -> Command {
    Command::new(env!("CARGO_BIN_EXE_stanza"))
}

const REFERENCE_ROOM: &[&str] = &[
    "--length", "4", "--width", "3", "--height", "2.5", "--sound-speed", "343",
];

// ---------------------------------------------------------------------------
// `stanza modes`
// ---------------------------------------------------------------------------

#[test]
fn modes_prints_classified_tables() {
    let output = stanza_bin()
        .arg("modes")
        .args(REFERENCE_ROOM)
        .args(["--max-modes", "2"])
        .output()
        .expect("failed to run stanza modes");

    assert!(output.status.success(), "stanza modes failed");
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(stdout.contains("Axial modes"), "missing axial table");
    assert!(stdout.contains("Tangential modes"), "missing tangential table");
    assert!(stdout.contains("Oblique modes"), "missing oblique table");
    // The 4 m fundamental: (343/2) * (1/4) = 42.875 -> 42.88.
    assert!(stdout.contains("42.88"), "missing fundamental frequency");
    assert!(stdout.contains("(1,0,0)"), "missing mode label");
}

#[test]
fn modes_json_emits_records() {
    let output = stanza_bin()
        .arg("modes")
        .args(REFERENCE_ROOM)
        .args(["--max-modes", "1", "--json"])
        .output()
        .expect("failed to run stanza modes --json");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);

    let json: serde_json::Value =
        serde_json::from_str(&stdout).expect("output should be valid JSON");
    assert_eq!(json["max_mode_index"], 1);
    assert_eq!(json["axial"][0]["frequency_hz"], 42.88);
    assert_eq!(json["axial"][0]["mode"], "(1,0,0)");
    // max-modes 1 admits tangential pairs (sum 2) but prunes (1,1,1).
    assert!(!json["tangential"].as_array().unwrap().is_empty());
    assert!(json["oblique"].as_array().unwrap().is_empty());
}

#[test]
fn modes_requires_dimensions() {
    let output = stanza_bin()
        .arg("modes")
        .args(["--length", "4", "--width", "3"])
        .output()
        .expect("failed to run stanza modes");

    assert!(!output.status.success(), "should fail without height");
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("missing room height"), "got: {stderr}");
}

#[test]
fn modes_rejects_out_of_range_max_modes() {
    let output = stanza_bin()
        .arg("modes")
        .args(REFERENCE_ROOM)
        .args(["--max-modes", "0"])
        .output()
        .expect("failed to run stanza modes");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("max mode index"), "got: {stderr}");
}

#[test]
fn modes_rejects_negative_dimension() {
    let output = stanza_bin()
        .arg("modes")
        .args(["--length=-4", "--width", "3", "--height", "2.5"])
        .output()
        .expect("failed to run stanza modes");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("positive finite"), "got: {stderr}");
}

// ---------------------------------------------------------------------------
// `stanza waves`
// ---------------------------------------------------------------------------

#[test]
fn waves_prints_sorted_series() {
    let output = stanza_bin()
        .arg("waves")
        .args(REFERENCE_ROOM)
        .args(["--max-modes", "2"])
        .output()
        .expect("failed to run stanza waves");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(stdout.contains("Standing waves (6)"), "got: {stdout}");
    assert!(stdout.contains("Length"));
    assert!(stdout.contains("Width"));
    assert!(stdout.contains("Height"));
    assert!(stdout.contains("42.88"));
}

// ---------------------------------------------------------------------------
// `stanza response`
// ---------------------------------------------------------------------------

#[test]
fn response_writes_curve_csv() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("curves.csv");

    let output = stanza_bin()
        .arg("response")
        .args(REFERENCE_ROOM)
        .args(["--max-modes", "2", "--resolution", "100"])
        .args(["--output", path.to_str().unwrap()])
        .output()
        .expect("failed to run stanza response");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("100 samples per curve"), "got: {stdout}");
    assert!(stdout.contains("peaks at"), "got: {stdout}");

    let content = std::fs::read_to_string(&path).unwrap();
    let mut lines = content.lines();
    assert_eq!(
        lines.next(),
        Some("frequency_hz;axial;tangential;oblique;combined")
    );
    assert_eq!(lines.count(), 100);
}

// ---------------------------------------------------------------------------
// `stanza export`
// ---------------------------------------------------------------------------

#[test]
fn export_writes_semicolon_report() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("report.csv");

    let output = stanza_bin()
        .arg("export")
        .args(REFERENCE_ROOM)
        .args(["--max-modes", "2"])
        .arg(path.to_str().unwrap())
        .output()
        .expect("failed to run stanza export");

    assert!(output.status.success());

    let content = std::fs::read_to_string(&path).unwrap();
    assert!(content.contains("Room Settings"));
    assert!(content.contains("Length (m);4"));
    assert!(content.contains("Type;Mode;Frequency (Hz)"));
    assert!(content.contains("Axial;(1,0,0);42.88"));
}

// ---------------------------------------------------------------------------
// `stanza presets`
// ---------------------------------------------------------------------------

#[test]
fn presets_list_shows_factory_rooms() {
    let output = stanza_bin()
        .args(["presets", "list"])
        .output()
        .expect("failed to run stanza presets list");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(stdout.contains("Factory presets:"));
    for name in ["Listening Room", "Control Room", "Home Studio", "Rehearsal Hall"] {
        assert!(stdout.contains(name), "missing preset '{name}'");
    }
}

#[test]
fn presets_show_prints_stored_values() {
    let output = stanza_bin()
        .args(["presets", "show", "control_room"])
        .output()
        .expect("failed to run stanza presets show");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("name        = Control Room"));
    assert!(stdout.contains("length      = 4 m"));
    assert!(stdout.contains("sound_speed = 343 m/s"));
}

#[test]
fn presets_show_unknown_name_fails() {
    let output = stanza_bin()
        .args(["presets", "show", "broom_closet"])
        .output()
        .expect("failed to run stanza presets show");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("unknown preset"), "got: {stderr}");
}

#[test]
fn presets_save_reports_the_written_file() {
    let dir = tempfile::TempDir::new().unwrap();

    let output = stanza_bin()
        .env("XDG_CONFIG_HOME", dir.path())
        .args(["presets", "save", "garage"])
        .args(["--length", "6", "--width", "4", "--height", "2.7"])
        .args(["--max-modes", "3"])
        .output()
        .expect("failed to run stanza presets save");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Saved preset 'garage'"), "got: {stdout}");
}

#[test]
fn modes_accepts_factory_preset() {
    let output = stanza_bin()
        .args(["modes", "--preset", "control_room", "--max-modes", "1"])
        .output()
        .expect("failed to run stanza modes --preset");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    // The control room is 4 x 3 x 2.5 m.
    assert!(stdout.contains("42.88"), "got: {stdout}");
}

#[test]
fn preset_file_path_feeds_dimensions() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("custom.toml");
    std::fs::write(
        &path,
        "name = \"Custom\"\nlength = 8.0\nwidth = 5.0\nheight = 3.0\nmax_modes = 1\n",
    )
    .unwrap();

    let output = stanza_bin()
        .args(["modes", "--preset", path.to_str().unwrap()])
        .output()
        .expect("failed to run stanza modes with preset file");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    // 343 / (2*8) = 21.4375 -> 21.44 for the 8 m fundamental.
    assert!(stdout.contains("21.44"), "got: {stdout}");
}
