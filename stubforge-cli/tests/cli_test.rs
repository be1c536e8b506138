use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn stubforge() -> Command {
    let mut cmd = Command::cargo_bin("stubforge").unwrap();
    cmd.env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_missing_files_warn_and_exit_zero() -> Result<(), Box<dyn std::error::Error>> {
    let dir = TempDir::new()?;

    stubforge()
        .arg("--base-dir")
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Warning:").count(8))
        .stdout(predicate::str::contains("numpy_port_ufunc_test.rs not found"))
        .stdout(predicate::str::contains("Generating").not());

    assert_eq!(fs::read_dir(dir.path())?.count(), 0);
    Ok(())
}

#[test]
fn test_missing_file_warns_once_on_stdout_only() -> Result<(), Box<dyn std::error::Error>> {
    let dir = TempDir::new()?;

    stubforge()
        .arg("--base-dir")
        .arg(dir.path())
        .args(["--only", "masked"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Warning:").count(1))
        .stdout(predicate::str::contains("numpy_port_masked_test.rs not found"))
        .stderr(predicate::str::is_empty());
    Ok(())
}

#[test]
fn test_log_output_has_no_color_codes_when_piped() -> Result<(), Box<dyn std::error::Error>> {
    let dir = TempDir::new()?;

    stubforge()
        .arg("--base-dir")
        .arg(dir.path())
        .args(["--only", "masked", "--log-level", "info"])
        .assert()
        .success()
        .stderr(predicate::str::contains("generation finished"))
        .stderr(predicate::str::contains("\u{1b}[").not());
    Ok(())
}

#[test]
fn test_write_failure_exits_non_zero_and_keeps_earlier_appends() -> Result<(), Box<dyn std::error::Error>> {
    let dir = TempDir::new()?;
    let ufunc = dir.path().join("numpy_port_ufunc_test.rs");
    fs::write(&ufunc, "")?;
    // A directory exists but cannot be opened for appending.
    let indexing = dir.path().join("numpy_port_indexing_test.rs");
    fs::create_dir(&indexing)?;

    stubforge()
        .arg("--base-dir")
        .arg(dir.path())
        .args(["--only", "ufunc", "--only", "indexing"])
        .args(["--count", "ufunc=1", "--count", "indexing=1"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("  Added 1 tests to"))
        .stderr(predicate::str::contains("test generation failed"));

    assert!(fs::read_to_string(&ufunc)?.contains("fn test_exp_comprehensive_86()"));
    assert!(indexing.is_dir());
    Ok(())
}

#[test]
fn test_appends_to_present_file() -> Result<(), Box<dyn std::error::Error>> {
    let dir = TempDir::new()?;
    let path = dir.path().join("numpy_port_dtype_test.rs");
    fs::write(&path, "use raptors_core::types::{DType, NpyType};\n")?;

    stubforge()
        .arg("--base-dir")
        .arg(dir.path())
        .args(["--only", "dtype", "--count", "dtype=2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Generating 2 tests for dtype..."))
        .stdout(predicate::str::contains("  Added 2 tests to"));

    let content = fs::read_to_string(&path)?;
    assert!(content.starts_with("use raptors_core::types::{DType, NpyType};\n"));
    assert!(content.contains("fn test_dtype_comprehensive_36()"));
    assert!(content.contains("fn test_dtype_comprehensive_37()"));
    assert!(!content.contains("fn test_dtype_comprehensive_38()"));
    Ok(())
}

#[test]
fn test_dry_run_prints_without_writing() -> Result<(), Box<dyn std::error::Error>> {
    let dir = TempDir::new()?;
    let path = dir.path().join("numpy_port_ufunc_test.rs");
    fs::write(&path, "")?;

    stubforge()
        .arg("--base-dir")
        .arg(dir.path())
        .args(["--only", "ufunc", "--count", "ufunc=3", "--dry-run"])
        .assert()
        .success()
        .stdout(predicate::str::contains("fn test_exp_comprehensive_86()"))
        .stdout(predicate::str::contains("fn test_log_comprehensive_87()"))
        .stdout(predicate::str::contains("fn test_log10_comprehensive_88()"));

    assert_eq!(fs::read_to_string(&path)?, "");
    Ok(())
}

#[test]
fn test_report_and_config_file() -> Result<(), Box<dyn std::error::Error>> {
    let dir = TempDir::new()?;
    let tests_dir = dir.path().join("tests");
    fs::create_dir(&tests_dir)?;
    fs::write(tests_dir.join("numpy_port_linalg_test.rs"), "")?;

    let config_path = dir.path().join("stubforge.toml");
    fs::write(
        &config_path,
        format!(
            "base_dir = {:?}\n[categories.linalg]\ncount = 1\noffset = 500\n",
            tests_dir.display().to_string()
        ),
    )?;
    let report_path = dir.path().join("report.json");

    stubforge()
        .arg("--config")
        .arg(&config_path)
        .arg("--report")
        .arg(&report_path)
        .args(["--only", "linalg"])
        .assert()
        .success();

    let content = fs::read_to_string(tests_dir.join("numpy_port_linalg_test.rs"))?;
    assert!(content.contains("fn test_linalg_comprehensive_500()"));

    let report: serde_json::Value = serde_json::from_str(&fs::read_to_string(&report_path)?)?;
    assert_eq!(report["categories"][0]["category"], "linalg");
    assert_eq!(report["categories"][0]["status"], "appended");
    assert_eq!(report["categories"][0]["requested"], 1);
    assert_eq!(report["tests_added"], 1);
    Ok(())
}

#[test]
fn test_list_shows_registry() {
    stubforge()
        .arg("--list")
        .assert()
        .success()
        .stdout(predicate::str::contains("ufunc"))
        .stdout(predicate::str::contains("Universal Functions"))
        .stdout(predicate::str::contains("165"))
        .stdout(predicate::str::contains("raptors-core/tests/numpy_port_datetime_test.rs"))
        .stdout(predicate::str::contains("472"));
}

#[test]
fn test_unknown_category_is_rejected() {
    stubforge()
        .args(["--only", "fft"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown category"));
}

#[test]
fn test_bad_config_file_fails() -> Result<(), Box<dyn std::error::Error>> {
    let dir = TempDir::new()?;
    let config_path = dir.path().join("bad.toml");
    fs::write(&config_path, "[categories.fft]\ncount = 1\n")?;

    stubforge()
        .arg("--config")
        .arg(&config_path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to load configuration"));
    Ok(())
}
