use assert_cmd::Command;
use predicates::str::contains;
use tempfile::TempDir;

fn cmd(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("envprep").unwrap();
    cmd.current_dir(dir.path());
    cmd
}

#[test]
fn default_run_without_config() {
    let dir = TempDir::new().unwrap();
    cmd(&dir)
        .assert()
        .success()
        .stdout(contains("Setting up environment..."))
        .stdout(contains("Environment setup complete!"))
        .stdout(contains("Configuration file config.json not found"));
}

#[test]
fn default_run_with_config() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("config.json"), "").unwrap();
    cmd(&dir)
        .assert()
        .success()
        .stdout(contains("Configuration is valid"));
}

#[test]
fn setup_creates_dirs_relative_to_cwd() {
    let dir = TempDir::new().unwrap();
    cmd(&dir).arg("setup").assert().success();
    assert!(dir.path().join("logs").is_dir());
    assert!(dir.path().join("data").is_dir());
}

#[test]
fn status_rows() {
    let dir = TempDir::new().unwrap();
    cmd(&dir)
        .arg("status")
        .assert()
        .success()
        .stdout(contains("logs\tmissing"))
        .stdout(contains("data\tmissing"))
        .stdout(contains("config.json\tmissing"));
}
