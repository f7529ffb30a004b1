//! Environment overrides are checked in a child run of this test binary so the
//! variables never leak into other tests.

use skalable_domain::config::AppConfig;
use skalable_kernel::config::load_config;
use std::env;
use std::fs;
use std::process::Command;
use tempfile::tempdir;

const CHILD_MARKER: &str = "SKALABLE_KERNEL_ENV_CHILD";
const CONFIG_PATH: &str = "SKALABLE_KERNEL_ENV_CONFIG";

#[test]
fn environment_overrides_file_and_defaults() -> Result<(), Box<dyn std::error::Error>> {
    if env::var_os(CHILD_MARKER).is_some() {
        let path = env::var_os(CONFIG_PATH).ok_or("config path not passed to child")?;
        let cfg: AppConfig = load_config(Some(path))?;
        assert_eq!(cfg.page.root_id, "fromenv");
        assert!(cfg.logging.json);
        assert_eq!(cfg.page.title, "From file");
        return Ok(());
    }

    let dir = tempdir()?;
    let path = dir.path().join("skalable.toml");
    fs::write(
        &path,
        r#"
[page]
root_id = "app"
title = "From file"

[logging]
json = false
"#,
    )?;

    let output = Command::new(env::current_exe()?)
        .args(["--exact", "environment_overrides_file_and_defaults"])
        .env(CHILD_MARKER, "1")
        .env(CONFIG_PATH, &path)
        .env("SKALABLE__PAGE__ROOT_ID", "fromenv")
        .env("SKALABLE__LOGGING__JSON", "true")
        .output()?;

    assert!(
        output.status.success(),
        "child run failed:\n{}\n{}",
        String::from_utf8_lossy(&output.stdout),
        String::from_utf8_lossy(&output.stderr)
    );
    Ok(())
}

#[test]
fn numeric_text_still_fills_string_fields() -> Result<(), Box<dyn std::error::Error>> {
    if env::var_os(CHILD_MARKER).is_some() {
        let cfg: AppConfig = load_config(None::<&str>)?;
        assert_eq!(cfg.page.title, "2026");
        return Ok(());
    }

    let dir = tempdir()?;
    let output = Command::new(env::current_exe()?)
        .args(["--exact", "numeric_text_still_fills_string_fields"])
        .current_dir(dir.path())
        .env(CHILD_MARKER, "1")
        .env("SKALABLE__PAGE__TITLE", "2026")
        .output()?;

    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stdout));
    Ok(())
}
