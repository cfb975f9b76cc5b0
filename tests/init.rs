use std::process::Command;

#[test]
fn init_creates_valid_toml() {
    let dir = tempfile::tempdir().unwrap();

    let output = Command::new(env!("CARGO_BIN_EXE_meetcost"))
        .arg("init")
        .current_dir(dir.path())
        .output()
        .unwrap();

    assert!(output.status.success(), "meetcost init failed: {}", String::from_utf8_lossy(&output.stderr));

    let config_path = dir.path().join(".meetcost.toml");
    assert!(config_path.exists(), ".meetcost.toml should exist");

    let content = std::fs::read_to_string(&config_path).unwrap();
    assert!(content.contains("[store]"));
    assert!(content.contains("[dashboard]"));

    let config = meetcost_core::MeetcostConfig::from_toml(&content).unwrap();
    assert_eq!(config.dashboard.list_limit, 50);
    assert!(config.default_rates.is_empty());
    let _raw: toml::Value = toml::from_str(&content).unwrap();
}

#[test]
fn init_refuses_if_exists() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join(".meetcost.toml"), "# existing").unwrap();

    let output = Command::new(env!("CARGO_BIN_EXE_meetcost"))
        .arg("init")
        .current_dir(dir.path())
        .output()
        .unwrap();

    assert!(!output.status.success());
}
