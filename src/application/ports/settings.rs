//! Settings persistence port interface

use async_trait::async_trait;
use std::path::PathBuf;

use crate::domain::error::SettingsError;
use crate::domain::settings::Settings;

/// Port for settings storage
#[async_trait]
pub trait SettingsStore: Send + Sync {
    /// Load settings from storage.
    ///
    /// A missing file yields the empty record, not an error.
    async fn load(&self) -> Result<Settings, SettingsError>;

    /// Save settings to storage.
    async fn save(&self, settings: &Settings) -> Result<(), SettingsError>;

    /// Get the settings file path.
    fn path(&self) -> PathBuf;

    /// Check if the settings file exists.
    fn exists(&self) -> bool;
}
