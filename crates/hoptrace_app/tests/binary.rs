use std::fs;
use std::process::Command;

use tempfile::TempDir;

#[test]
fn configuration_errors_go_to_stderr_and_keep_stdout_clean() {
    let temp = TempDir::new().unwrap();
    let config = temp.path().join("hoptrace.ron");
    fs::write(&config, "(width: \"wide\")").unwrap();

    let output = Command::new(env!("CARGO_BIN_EXE_hoptrace"))
        .arg("--config")
        .arg(&config)
        .arg("-j")
        .arg("https://example.invalid/")
        .output()
        .unwrap();

    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Error loading configuration"));
}
