//! Application settings structs, defaults and TOML persistence.
//!
//! All structs implement `Serialize`, `Deserialize`, `Default` and `Clone`
//! so they can be round-tripped through TOML files and handed to the
//! correction backends on the tokio runtime.

use std::path::{Path, PathBuf};

use anyhow::Result;
use serde::{Deserialize, Serialize};

use super::AppPaths;

// ---------------------------------------------------------------------------
// CorrectionBackend
// ---------------------------------------------------------------------------

/// Selects which remote service performs the correction.
///
/// | Variant            | Wire format                                   |
/// |--------------------|-----------------------------------------------|
/// | `Function`         | `{text}` → `{correctedText}` / `{error}`      |
/// | `OpenAiCompatible` | `/v1/chat/completions` with a Spanish prompt  |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CorrectionBackend {
    /// Hosted `correct-text` edge function (default).
    Function,
    /// Any OpenAI-compatible chat endpoint (OpenAI, Groq, Ollama, Gemini's
    /// OpenAI layer …).
    OpenAiCompatible,
}

impl Default for CorrectionBackend {
    fn default() -> Self {
        Self::Function
    }
}

// ---------------------------------------------------------------------------
// ServiceConfig
// ---------------------------------------------------------------------------

/// Connection details for the correction service.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceConfig {
    /// Which backend to talk to.
    pub backend: CorrectionBackend,
    /// Full URL of the edge function (`Function`) or base URL of the API
    /// (`OpenAiCompatible`, without the `/v1/...` suffix).
    pub endpoint_url: String,
    /// API key: `None` for local or unauthenticated endpoints.
    pub api_key: Option<String>,
    /// Model identifier sent to chat endpoints.
    pub model: String,
    /// Sampling temperature for chat endpoints (0.0 – 1.0).
    pub temperature: f32,
    /// Maximum seconds to wait for the service before giving up.
    pub timeout_secs: u64,
    /// Reject requests locally when no API key is configured
    /// (`OpenAiCompatible` only).
    pub require_api_key: bool,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            backend: CorrectionBackend::default(),
            endpoint_url: "http://localhost:54321/functions/v1/correct-text".into(),
            api_key: None,
            model: "gemini-2.0-flash".into(),
            temperature: 0.2,
            timeout_secs: 30,
            require_api_key: false,
        }
    }
}

// ---------------------------------------------------------------------------
// UiConfig
// ---------------------------------------------------------------------------

/// Colour scheme of the window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Theme {
    Light,
    Dark,
}

impl Default for Theme {
    fn default() -> Self {
        Self::Light
    }
}

impl Theme {
    /// The other theme.
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

/// Window appearance settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Initial colour scheme; toggling in the window is saved back here.
    pub theme: Theme,
    /// Initial inner size of the window `(width, height)` in points.
    pub window_size: (f32, f32),
    /// How long a notification stays on screen.
    pub toast_secs: u64,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            theme: Theme::default(),
            window_size: (720.0, 640.0),
            toast_secs: 4,
        }
    }
}

// ---------------------------------------------------------------------------
// DownloadConfig
// ---------------------------------------------------------------------------

/// Where the bundled reference file is written.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DownloadConfig {
    /// Destination directory.  `None` means the platform downloads folder.
    pub target_dir: Option<PathBuf>,
}

impl DownloadConfig {
    /// The configured directory, or the platform default.
    pub fn resolve_dir(&self) -> PathBuf {
        self.target_dir
            .clone()
            .unwrap_or_else(|| AppPaths::new().download_dir)
    }
}

// ---------------------------------------------------------------------------
// AppConfig  (top-level)
// ---------------------------------------------------------------------------

/// Top-level application configuration, serialised as `settings.toml`.
///
/// ```rust,no_run
/// use text_corrector::config::SettingsFile;
///
/// // Defaults when the file is missing or invalid
/// let (config, _file) = SettingsFile::open_default();
/// println!("{}", config.service.endpoint_url);
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Correction service settings.
    pub service: ServiceConfig,
    /// Window settings.
    pub ui: UiConfig,
    /// Reference file download settings.
    pub download: DownloadConfig,
}

impl AppConfig {
    /// Load from an explicit path.
    ///
    /// Returns `Ok(AppConfig::default())` when the file does not exist yet.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)?;
        let config: Self = toml::from_str(&content)?;
        Ok(config)
    }

    /// Save to an explicit path, creating parent directories as needed.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// SettingsFile
// ---------------------------------------------------------------------------

/// The `settings.toml` the running app was started from.
///
/// A file that exists but cannot be read is never written back: the app runs
/// on defaults and the user's file (API key, endpoint …) stays as it was.
#[derive(Debug, Clone)]
pub struct SettingsFile {
    path: PathBuf,
    writable: bool,
}

impl SettingsFile {
    /// Open the platform-appropriate `settings.toml`.
    pub fn open_default() -> (AppConfig, Self) {
        Self::open(AppPaths::new().settings_file)
    }

    /// Load `path`, falling back to defaults when it is missing or invalid.
    pub fn open(path: impl Into<PathBuf>) -> (AppConfig, Self) {
        let path = path.into();
        match AppConfig::load_from(&path) {
            Ok(config) => (config, Self { path, writable: true }),
            Err(e) => {
                log::warn!(
                    "Failed to load {} ({e}); using defaults and leaving the file untouched",
                    path.display()
                );
                (
                    AppConfig::default(),
                    Self {
                        path,
                        writable: false,
                    },
                )
            }
        }
    }

    /// `false` when the file on disk failed to load.
    pub fn is_writable(&self) -> bool {
        self.writable
    }

    /// Persist `config`.  Returns `Ok(false)` without touching the disk when
    /// the file failed to load at startup.
    pub fn save(&self, config: &AppConfig) -> Result<bool> {
        if !self.writable {
            log::warn!(
                "Not saving settings: fix {} and restart to persist changes",
                self.path.display()
            );
            return Ok(false);
        }
        config.save_to(&self.path)?;
        Ok(true)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
