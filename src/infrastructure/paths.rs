//! Sandbox path helpers.
//!
//! Inside the Zellij plugin sandbox the host filesystem is mounted under
//! `/host`, which usually resolves to the user's home directory.

use std::path::PathBuf;

/// Returns the directory holding gamedex trace files.
///
/// Resolves to `~/.local/share/zellij/gamedex` on the host when Zellij was
/// started from the home directory.
#[must_use]
pub fn get_data_dir() -> PathBuf {
    PathBuf::from("/host/.local/share/zellij").join("gamedex")
}

/// Rewrites a `~`-prefixed path to its `/host` equivalent. Other paths are
/// returned unchanged.
#[must_use]
pub fn expand_tilde(path: &str) -> String {
    match path.strip_prefix('~') {
        Some("") => "/host".to_string(),
        Some(rest) if rest.starts_with('/') => format!("/host{rest}"),
        _ => path.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn data_dir_lives_under_the_zellij_share() {
        assert_eq!(
            get_data_dir(),
            PathBuf::from("/host/.local/share/zellij/gamedex")
        );
    }

    #[test]
    fn tilde_maps_to_host() {
        assert_eq!(expand_tilde("~"), "/host");
        assert_eq!(expand_tilde("~/themes/dex.toml"), "/host/themes/dex.toml");
    }

    #[test]
    fn other_paths_pass_through() {
        assert_eq!(expand_tilde("/etc/gamedex.toml"), "/etc/gamedex.toml");
        assert_eq!(expand_tilde("~other/theme.toml"), "~other/theme.toml");
        assert_eq!(expand_tilde("relative/theme.toml"), "relative/theme.toml");
    }
}
