use crate::error::Result;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Environment variable overriding the config file location.
pub const CONFIG_ENV: &str = "EVCOID_CONFIG";

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
/// Defaults for output flags, read from `config.toml`.
pub struct Preferences {
    /// Emit JSON by default.
    pub json: Option<bool>,
    /// Print full IDs as `CC-PPP-IIIIIIIII-D`.
    pub hyphenated: Option<bool>,
}

impl Preferences {
    /// Loads preferences; a missing file yields defaults.
    pub fn load() -> Result<Self> {
        match config_path() {
            Some(path) => load_from(&path),
            None => Ok(Self::default()),
        }
    }
}

/// Internal helper function.
fn load_from(path: &Path) -> Result<Preferences> {
    if !path.exists() {
        return Ok(Preferences::default());
    }
    let raw = fs::read_to_string(path)?;
    if raw.trim().is_empty() {
        return Ok(Preferences::default());
    }
    let prefs = toml::from_str(&raw)?;
    Ok(prefs)
}

/// Internal helper function.
fn config_path() -> Option<PathBuf> {
    if let Some(path) = std::env::var_os(CONFIG_ENV).filter(|v| !v.is_empty()) {
        return Some(PathBuf::from(path));
    }

    #[cfg(target_os = "windows")]
    {
        let base = std::env::var_os("LOCALAPPDATA").or_else(|| std::env::var_os("APPDATA"))?;
        let mut path = PathBuf::from(base);
        path.push("evcoid");
        path.push("config.toml");
        Some(path)
    }

    #[cfg(not(target_os = "windows"))]
    {
        let home = std::env::var_os("HOME")?;
        let mut path = PathBuf::from(home);
        path.push(".evcoid");
        path.push("config.toml");
        Some(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_file(name: &str, contents: &str) -> PathBuf {
        let path = std::env::temp_dir().join(name);
        let _ = fs::write(&path, contents);
        path
    }

    #[test]
    fn missing_file_is_default() {
        let path = std::env::temp_dir().join("evcoid_config_missing.toml");
        let _ = fs::remove_file(&path);
        let loaded = load_from(&path);
        assert!(loaded.is_ok());
        if let Ok(prefs) = loaded {
            assert!(prefs.json.is_none());
            assert!(prefs.hyphenated.is_none());
        }
    }

    #[test]
    fn empty_file_is_default() {
        let path = temp_file("evcoid_config_empty.toml", "  \n");
        let loaded = load_from(&path);
        assert!(loaded.is_ok());
        if let Ok(prefs) = loaded {
            assert!(prefs.json.is_none());
        }
        let _ = fs::remove_file(&path);
    }

    #[test]
    fn reads_flags() {
        let path = temp_file("evcoid_config_flags.toml", "json = true\nhyphenated = false\n");
        let loaded = load_from(&path);
        assert!(loaded.is_ok());
        if let Ok(prefs) = loaded {
            assert_eq!(prefs.json, Some(true));
            assert_eq!(prefs.hyphenated, Some(false));
        }
        let _ = fs::remove_file(&path);
    }

    #[test]
    fn rejects_unknown_keys() {
        let path = temp_file("evcoid_config_unknown.toml", "colour = \"red\"\n");
        assert!(load_from(&path).is_err());
        let _ = fs::remove_file(&path);
    }
}
