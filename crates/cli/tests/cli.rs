use assert_cmd::Command;

#[test]
fn config_prints_effective_settings() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join("base.toml"),
        "[server]\nport = 9191\n\n[file_storage]\nupload_dir = \"files\"\n",
    )
    .unwrap();

    let output = Command::cargo_bin("erudio")
        .unwrap()
        .arg("config")
        .env("ERUDIO_CONFIG_DIR", dir.path())
        .env("ERUDIO_ENV", "staging")
        .output()
        .unwrap();
    assert!(output.status.success());

    let settings: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(settings["environment"], "staging");
    assert_eq!(settings["server"]["port"], 9191);
    assert_eq!(settings["file_storage"]["upload_dir"], "files");
}

#[test]
fn migrate_creates_the_database() {
    let dir = tempfile::tempdir().unwrap();
    let db_path = dir.path().join("erudio.db");

    Command::cargo_bin("erudio")
        .unwrap()
        .arg("migrate")
        .env("ERUDIO_CONFIG_DIR", dir.path())
        .env(
            "ERUDIO_DATABASE__URL",
            format!("sqlite://{}", db_path.display()),
        )
        .env(
            "ERUDIO_FILE_STORAGE__UPLOAD_DIR",
            dir.path().join("uploads").display().to_string(),
        )
        .assert()
        .success();

    assert!(db_path.exists());
}

#[test]
fn unknown_subcommand_fails() {
    Command::cargo_bin("erudio")
        .unwrap()
        .arg("serve-forever")
        .assert()
        .failure();
}
