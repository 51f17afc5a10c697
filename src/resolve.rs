//! Settings file resolution for groupcheck.
//!
//! Resolution order:
//!   1. --config PATH (handled by the caller)
//!   2. GROUPCHECK_CONFIG environment variable
//!   3. webui.toml in the current directory

use std::path::PathBuf;

/// Return the default settings file path.
pub fn settings_toml() -> PathBuf {
    if let Ok(env) = std::env::var("GROUPCHECK_CONFIG") {
        if !env.is_empty() {
            return expand_tilde(&env);
        }
    }
    PathBuf::from("webui.toml")
}

/// Get the user's home directory.
pub fn home_dir() -> PathBuf {
    std::env::var_os("HOME")
        .or_else(|| std::env::var_os("USERPROFILE"))
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("."))
}

/// Expand ~ to home directory.
pub fn expand_tilde(path: &str) -> PathBuf {
    if let Some(rest) = path.strip_prefix("~/") {
        home_dir().join(rest)
    } else if path == "~" {
        home_dir()
    } else {
        PathBuf::from(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expand_tilde_plain_path() {
        assert_eq!(expand_tilde("/etc/webui.toml"), PathBuf::from("/etc/webui.toml"));
    }

    #[test]
    fn test_expand_tilde_home_prefix() {
        let expanded = expand_tilde("~/webui.toml");
        assert!(expanded.ends_with("webui.toml"));
        assert_ne!(expanded, PathBuf::from("~/webui.toml"));
    }
}
