//! TOML settings store adapter

use std::path::PathBuf;

use async_trait::async_trait;
use tokio::fs;

use crate::application::ports::SettingsStore;
use crate::domain::error::SettingsError;
use crate::domain::settings::Settings;

/// Settings record stored as TOML under the per-user config directory
pub struct TomlSettingsStore {
    path: PathBuf,
}

impl TomlSettingsStore {
    /// Create a store at the default path
    pub fn new() -> Self {
        let config_dir = dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("~/.config"))
            .join("irkit");

        Self {
            path: config_dir.join("settings.toml"),
        }
    }

    /// Create with custom path
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Parse TOML content into Settings
    fn parse_toml(content: &str) -> Result<Settings, SettingsError> {
        toml::from_str(content).map_err(|e| SettingsError::ParseError(e.to_string()))
    }

    /// Serialize Settings to TOML.
    ///
    /// Serialization follows struct field order, so the written file is
    /// stable across runs and diffs cleanly.
    fn to_toml(settings: &Settings) -> Result<String, SettingsError> {
        toml::to_string_pretty(settings).map_err(|e| SettingsError::WriteError(e.to_string()))
    }
}

impl Default for TomlSettingsStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SettingsStore for TomlSettingsStore {
    async fn load(&self) -> Result<Settings, SettingsError> {
        if !self.exists() {
            // First run: no device chosen yet, scope at the root
            return Ok(Settings::empty());
        }

        let content = fs::read_to_string(&self.path)
            .await
            .map_err(|e| SettingsError::ReadError(e.to_string()))?;

        Self::parse_toml(&content)
    }

    async fn save(&self, settings: &Settings) -> Result<(), SettingsError> {
        // Ensure parent directory exists
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .await
                .map_err(|e| SettingsError::WriteError(e.to_string()))?;
        }

        let content = Self::to_toml(settings)?;

        fs::write(&self.path, content)
            .await
            .map_err(|e| SettingsError::WriteError(e.to_string()))?;

        Ok(())
    }

    fn path(&self) -> PathBuf {
        self.path.clone()
    }

    fn exists(&self) -> bool {
        self.path.exists()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn default_path_is_under_config_dir() {
        let store = TomlSettingsStore::new();
        let path = store.path();
        assert!(path.to_string_lossy().contains("irkit"));
        assert!(path.to_string_lossy().contains("settings.toml"));
    }

    #[test]
    fn custom_path() {
        let store = TomlSettingsStore::with_path("/custom/path/settings.toml");
        assert_eq!(store.path(), PathBuf::from("/custom/path/settings.toml"));
    }

    #[test]
    fn parse_toml_full_record() {
        let content = r#"
device = "irkitd2f1.local"
scope = ["living", "tv"]
"#;

        let settings = TomlSettingsStore::parse_toml(content).unwrap();
        assert_eq!(settings.device, Some("irkitd2f1.local".to_string()));
        assert_eq!(settings.scope, vec!["living".to_string(), "tv".to_string()]);
    }

    #[test]
    fn to_toml_round_trip() {
        let settings = Settings {
            device: Some("irkitd2f1.local".to_string()),
            scope: vec!["tv".to_string()],
        };

        let toml = TomlSettingsStore::to_toml(&settings).unwrap();
        let parsed = TomlSettingsStore::parse_toml(&toml).unwrap();

        assert_eq!(settings, parsed);
    }

    #[test]
    fn to_toml_is_stable() {
        let settings = Settings {
            device: Some("irkitd2f1.local".to_string()),
            scope: vec!["tv".to_string()],
        };

        let first = TomlSettingsStore::to_toml(&settings).unwrap();
        let second = TomlSettingsStore::to_toml(&settings).unwrap();

        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn load_missing_file_yields_empty_record() {
        let tmp = TempDir::new().unwrap();
        let store = TomlSettingsStore::with_path(tmp.path().join("settings.toml"));

        let settings = store.load().await.unwrap();

        assert_eq!(settings, Settings::empty());
    }

    #[tokio::test]
    async fn save_and_load_round_trip() {
        let tmp = TempDir::new().unwrap();
        let store = TomlSettingsStore::with_path(tmp.path().join("nested/dir/settings.toml"));

        let settings = Settings {
            device: Some("irkitd2f1.local".to_string()),
            scope: vec!["living".to_string(), "tv".to_string()],
        };

        store.save(&settings).await.unwrap();
        assert!(store.exists());

        let loaded = store.load().await.unwrap();
        assert_eq!(loaded, settings);
    }

    #[tokio::test]
    async fn corrupt_file_is_a_parse_error() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("settings.toml");
        std::fs::write(&path, "scope = not-an-array").unwrap();

        let store = TomlSettingsStore::with_path(&path);
        let result = store.load().await;

        assert!(matches!(result, Err(SettingsError::ParseError(_))));
    }
}
