//! `.locale-overrides.json` の読み込みと検証
/// Config file loader
mod loader;
/// Configuration manager
mod manager;
/// Configuration types and settings
mod types;

pub use manager::ConfigManager;
pub use types::{
    ConfigError,
    MergeStrategy,
    OverrideSettings,
    ValidationError,
};
