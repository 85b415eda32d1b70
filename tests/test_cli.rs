//! End-to-end test of the `cvd` binary: write a PNG, run the CLI on it,
//! and check the simulated output file.

mod common;

use common::{assert_alpha_identical, create_gradient_image, max_rgb_diff};
use std::process::Command;

#[test]
fn cli_simulates_a_png_end_to_end() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("input.png");
    let output = dir.path().join("output.png");

    let img = create_gradient_image(48, 32);
    img.save(&input).unwrap();

    let status = Command::new(env!("CARGO_BIN_EXE_cvd"))
        .arg(input.to_str().unwrap())
        .args(["-o", output.to_str().unwrap()])
        .args(["-d", "tritan"])
        .args(["-s", "0.8"])
        .status()
        .expect("failed to run the cvd binary");
    assert!(status.success(), "cvd exited with {status}");

    let result = image::open(&output).unwrap().to_rgba8();
    assert_eq!(result.dimensions(), img.dimensions());
    assert!(max_rgb_diff(img.as_raw(), result.as_raw()) > 0, "output identical to input");
    assert_alpha_identical(img.as_raw(), result.as_raw());
}

#[test]
fn cli_rejects_a_missing_input_file() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("does_not_exist.png");

    let output = Command::new(env!("CARGO_BIN_EXE_cvd"))
        .arg(missing.to_str().unwrap())
        .output()
        .expect("failed to run the cvd binary");
    assert!(!output.status.success(), "cvd succeeded on a missing file");
}

#[test]
fn cli_rejects_a_non_finite_severity() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("input.png");
    create_gradient_image(8, 8).save(&input).unwrap();

    let output = Command::new(env!("CARGO_BIN_EXE_cvd"))
        .arg(input.to_str().unwrap())
        .args(["-s", "NaN"])
        .output()
        .expect("failed to run the cvd binary");
    assert!(!output.status.success(), "cvd accepted a NaN severity");
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("finite"), "unexpected error output: {stderr}");
}
