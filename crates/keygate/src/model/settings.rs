//! Settings model.

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::Context;

use crate::style::widgets::palette::ThemeMode;

/// Application directory name under the platform config and data dirs.
const APP_DIR: &str = "keygate";

/// Application settings read from `settings.json`.
///
/// Missing keys take their default value.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AppSettings {
    /// Current theme mode (serialized as string).
    #[serde(with = "theme_mode_serde")]
    pub theme_mode: ThemeMode,
    /// Delay before returning to the login tab after a registration.
    pub return_to_login_delay_ms: u64,
    /// Directory holding `users.json`; the platform data dir when unset.
    pub data_dir: Option<PathBuf>,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            theme_mode: ThemeMode::Dark,
            return_to_login_delay_ms: 2000,
            data_dir: None,
        }
    }
}

impl AppSettings {
    /// Get the default location of `settings.json`.
    #[must_use]
    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(APP_DIR)
            .join("settings.json")
    }

    /// Load settings from `path`, falling back to defaults if it does not exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub async fn load(path: &Path) -> anyhow::Result<Self> {
        if !tokio::fs::try_exists(path).await.unwrap_or(false) {
            return Ok(Self::default());
        }

        let contents = tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("Failed to read {}", path.display()))?;

        serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse {}", path.display()))
    }

    /// Get the delay before switching back to the login tab.
    #[must_use]
    pub const fn return_to_login_delay(&self) -> Duration {
        Duration::from_millis(self.return_to_login_delay_ms)
    }

    /// Get the directory holding the users file.
    #[must_use]
    pub fn users_dir(&self) -> PathBuf {
        self.data_dir.clone().unwrap_or_else(|| {
            dirs::data_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(APP_DIR)
        })
    }
}

/// Serde helpers for `ThemeMode` (since it doesn't derive `Serialize`/`Deserialize`).
mod theme_mode_serde {
    use super::ThemeMode;
    use serde::{Deserialize, Deserializer, Serializer};

    #[allow(clippy::trivially_copy_pass_by_ref)] // Required by serde with= signature
    pub fn serialize<S>(mode: &ThemeMode, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let s = match mode {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
        };
        serializer.serialize_str(s)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<ThemeMode, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        match s.as_str() {
            "light" => Ok(ThemeMode::Light),
            _ => Ok(ThemeMode::Dark),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::redundant_clone)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = AppSettings::default();
        assert_eq!(settings.theme_mode, ThemeMode::Dark);
        assert_eq!(settings.return_to_login_delay(), Duration::from_secs(2));
        assert!(settings.data_dir.is_none());
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let settings: AppSettings = serde_json::from_str(r#"{"theme_mode":"light"}"#).unwrap();
        assert_eq!(settings.theme_mode, ThemeMode::Light);
        assert_eq!(settings.return_to_login_delay_ms, 2000);
    }

    #[test]
    fn test_unknown_theme_is_dark() {
        let settings: AppSettings = serde_json::from_str(r#"{"theme_mode":"sepia"}"#).unwrap();
        assert_eq!(settings.theme_mode, ThemeMode::Dark);
    }

    #[test]
    fn test_data_dir_override() {
        let settings = AppSettings {
            data_dir: Some(PathBuf::from("/srv/keygate")),
            ..AppSettings::default()
        };
        assert_eq!(settings.users_dir(), PathBuf::from("/srv/keygate"));
    }

    #[test]
    fn test_serialized_theme_is_string() {
        let json = serde_json::to_string(&AppSettings::default()).unwrap();
        assert!(json.contains(r#""theme_mode":"dark""#));
    }

    #[tokio::test]
    async fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let settings = AppSettings::load(&dir.path().join("settings.json"))
            .await
            .unwrap();
        assert_eq!(settings, AppSettings::default());
    }

    #[tokio::test]
    async fn test_load_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        std::fs::write(&path, r#"{"return_to_login_delay_ms":500}"#).unwrap();

        let settings = AppSettings::load(&path).await.unwrap();
        assert_eq!(settings.return_to_login_delay(), Duration::from_millis(500));
    }

    #[tokio::test]
    async fn test_load_invalid_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        std::fs::write(&path, "{").unwrap();

        let err = AppSettings::load(&path).await.unwrap_err();
        assert!(err.to_string().starts_with("Failed to parse"));
    }
}
