use std::fs;
use std::io::Write;
use std::process::{Command, Output, Stdio};

use tempfile::tempdir;

fn donorcre(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_donorcre"))
        .args(args)
        .output()
        .expect("run donorcre cli")
}

#[test]
fn predict_prints_two_decimal_result_and_disclaimer() {
    let out = donorcre(&[
        "predict", "--bw", "65.5", "--cre", "0.85", "--volume", "180.2", "--male", "0",
    ]);
    assert!(out.status.success(), "CLI exited with status {:?}", out.status);
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains("(mg/dL): 1.09"), "stdout was: {stdout}");
    assert!(stdout.contains("Tokyo Women's Medical University"));
}

#[test]
fn show_models_lists_all_nine() {
    let out = donorcre(&[
        "predict", "--bw", "70", "--cre", "1.0", "--volume", "150", "--male", "1",
        "--show-models",
    ]);
    assert!(out.status.success());
    let stdout = String::from_utf8_lossy(&out.stdout);
    for i in 1..=9 {
        assert!(stdout.contains(&format!("model_{i}")), "missing model_{i}");
    }
    assert!(stdout.contains("(mg/dL): 1.42"));
}

#[test]
fn negative_measurement_surfaces_generic_error() {
    let out = donorcre(&[
        "predict", "--bw", "-1", "--cre", "1.0", "--volume", "150", "--male", "1",
    ]);
    assert!(!out.status.success());
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("An error occurred: Body Weight (Bw) must be greater than or equal to 0"));
}

#[test]
fn invalid_sex_indicator_is_rejected() {
    let out = donorcre(&[
        "predict", "--bw", "70", "--cre", "1.0", "--volume", "150", "--male", "2",
    ]);
    assert!(!out.status.success());
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("Male must be 1 (male) or 0 (female)"));
}

#[test]
fn zero_body_weight_is_reported_in_japanese() {
    let out = donorcre(&[
        "--lang", "ja", "predict", "--bw", "0", "--cre", "1.0", "--volume", "150", "--male", "1",
    ]);
    assert!(!out.status.success());
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.starts_with("エラーが発生しました: Body weight is 0 kg"));
}

#[test]
fn covariate_file_and_output_file_round_through_toml() {
    let tmp = tempdir().expect("temporary directory");
    let covariates = tmp.path().join("covariates.toml");
    let output = tmp.path().join("prediction.toml");

    let written = donorcre(&["covariates", "--write", covariates.to_str().expect("path str")]);
    assert!(written.status.success());
    let text = fs::read_to_string(&covariates).expect("read covariates");
    assert!(text.contains("hba1c = 5.7"));
    assert!(text.contains("bun = 13.8"));

    fs::write(&covariates, "age = 50.0\nbun = 13.8\n").expect("write covariates");
    let out = donorcre(&[
        "predict", "--bw", "70", "--cre", "1.0", "--volume", "150", "--male", "1",
        "--covariates", covariates.to_str().expect("path str"),
        "--output", output.to_str().expect("path str"),
    ]);
    assert!(out.status.success());
    let saved = fs::read_to_string(&output).expect("read prediction");
    assert!(saved.contains("median_value"));
    assert!(saved.contains("per_model_values"));
}

#[test]
fn interactive_session_collects_and_calculates() {
    let mut child = Command::new(env!("CARGO_BIN_EXE_donorcre"))
        .arg("interactive")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("spawn donorcre");
    child
        .stdin
        .take()
        .expect("stdin")
        .write_all(b"65.5\n0.85\n-3\n180.2\n0\n")
        .expect("write answers");
    let out = child.wait_with_output().expect("wait donorcre");

    assert!(out.status.success());
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains("Input fields"));
    assert!(stdout.contains("Non-Excised Kidney Volume must be greater than or equal to 0"));
    assert!(stdout.contains("(mg/dL): 1.09"));
}
