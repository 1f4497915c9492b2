//! Configuration module for the text corrector.
//!
//! Provides `AppConfig` (top-level settings), sub-configs for the correction
//! service, the window and the reference download, `AppPaths` for
//! cross-platform directories, and TOML persistence via `SettingsFile`.

pub mod paths;
pub mod settings;

pub use paths::AppPaths;
pub use settings::{
    AppConfig, CorrectionBackend, DownloadConfig, ServiceConfig, SettingsFile, Theme, UiConfig,
};
