use std::{env, path::PathBuf};

/// Returns the user's home directory.
///
/// Reads `HOME`, falling back to `/home/$USER` and finally `/root`.
pub fn home_dir() -> PathBuf {
    env::var("HOME").map(PathBuf::from).unwrap_or_else(|_| {
        env::var("USER")
            .map(|user| PathBuf::from(format!("/home/{user}")))
            .unwrap_or_else(|_| PathBuf::from("/root"))
    })
}

/// Returns the user's config directory following the XDG Base Directory Specification.
///
/// This checks `XDG_CONFIG_HOME` and defaults to `$HOME/.config`.
pub fn xdg_config_home() -> PathBuf {
    env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| home_dir().join(".config"))
}

/// Splits a comma separated list, dropping blank entries.
pub fn split_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}
