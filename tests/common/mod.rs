//! Shared test fixtures and helpers.

#![allow(dead_code)]

use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Create an empty temp directory for a test run.
pub fn temp_dir() -> (TempDir, PathBuf) {
    let tmp = TempDir::new().expect("failed to create temp dir");
    let path = tmp.path().to_path_buf();
    (tmp, path)
}

/// Write a webui.toml with the standard five OAuth keys.
pub fn write_settings_toml(dir: &Path) -> PathBuf {
    let path = dir.join("webui.toml");
    std::fs::write(
        &path,
        r#"ENABLE_OAUTH_GROUP_MANAGEMENT = true
OAUTH_GROUPS_CLAIM = "groups"
OAUTH_ADMIN_ROLES = ["admin"]
OAUTH_ALLOWED_ROLES = ["admin", "user"]
GOOGLE_CLIENT_ID = "abc123"
"#,
    )
    .unwrap();
    path
}

/// Write a webui.toml missing one of the five keys.
pub fn write_settings_toml_without(dir: &Path, key: &str) -> PathBuf {
    let path = dir.join("webui.toml");
    let full = r#"ENABLE_OAUTH_GROUP_MANAGEMENT = true
OAUTH_GROUPS_CLAIM = "groups"
OAUTH_ADMIN_ROLES = ["admin"]
OAUTH_ALLOWED_ROLES = ["admin", "user"]
GOOGLE_CLIENT_ID = "abc123"
"#;
    let kept: String = full
        .lines()
        .filter(|line| !line.starts_with(key))
        .map(|line| format!("{line}\n"))
        .collect();
    std::fs::write(&path, kept).unwrap();
    path
}
