//! Settings persistence adapters

pub mod toml_store;

pub use toml_store::TomlSettingsStore;
