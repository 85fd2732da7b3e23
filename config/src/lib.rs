//! Configuration loading for Cardfolio.
//!
//! ```toml
//! [app]
//! ascii_only = false
//! high_contrast = false
//!
//! [form]
//! commit_policy = "messaging"
//! notice_ttl_ms = 2500
//! ```

use std::{
    env, fs,
    path::{Path, PathBuf},
    time::Duration,
};

use serde::Deserialize;
use thiserror::Error;

use cardfolio_types::{CommitPolicy, ui::UiOptions};

/// Environment variable that overrides `[form] commit_policy`.
pub const COMMIT_POLICY_ENV: &str = "CARDFOLIO_COMMIT_POLICY";

const DEFAULT_NOTICE_TTL_MS: u64 = 2500;

const fn default_notice_ttl_ms() -> u64 {
    DEFAULT_NOTICE_TTL_MS
}

#[derive(Debug, Default, Deserialize)]
pub struct CardfolioConfig {
    pub app: Option<AppConfig>,
    pub form: Option<FormConfig>,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config at {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config at {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

impl ConfigError {
    #[must_use]
    pub fn path(&self) -> &Path {
        match self {
            ConfigError::Read { path, .. } | ConfigError::Parse { path, .. } => path,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct AppConfig {
    /// Use ASCII-only glyphs for icons.
    #[serde(default)]
    pub ascii_only: bool,
    /// Enable a high-contrast color palette.
    #[serde(default)]
    pub high_contrast: bool,
}

#[derive(Debug, Deserialize)]
pub struct FormConfig {
    #[serde(default)]
    pub commit_policy: CommitPolicy,
    /// How long a commit notice stays on screen.
    #[serde(default = "default_notice_ttl_ms")]
    pub notice_ttl_ms: u64,
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            commit_policy: CommitPolicy::default(),
            notice_ttl_ms: DEFAULT_NOTICE_TTL_MS,
        }
    }
}

/// Settings after config file and environment have been merged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedSettings {
    pub commit_policy: CommitPolicy,
    pub notice_ttl: Duration,
    pub ui_options: UiOptions,
}

impl Default for ResolvedSettings {
    fn default() -> Self {
        Self {
            commit_policy: CommitPolicy::default(),
            notice_ttl: Duration::from_millis(DEFAULT_NOTICE_TTL_MS),
            ui_options: UiOptions::default(),
        }
    }
}

impl CardfolioConfig {
    /// Load `~/.cardfolio/config.toml`. A missing file is `Ok(None)`.
    pub fn load() -> Result<Option<Self>, ConfigError> {
        match config_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(None),
        }
    }

    pub fn load_from(path: &Path) -> Result<Option<Self>, ConfigError> {
        if !path.exists() {
            return Ok(None);
        }

        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(err) => {
                tracing::warn!("Failed to read config at {:?}: {}", path, err);
                return Err(ConfigError::Read {
                    path: path.to_path_buf(),
                    source: err,
                });
            }
        };

        match Self::parse(&content) {
            Ok(config) => Ok(Some(config)),
            Err(err) => {
                tracing::warn!("Failed to parse config at {:?}: {}", path, err);
                Err(ConfigError::Parse {
                    path: path.to_path_buf(),
                    source: err,
                })
            }
        }
    }

    pub fn parse(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    #[must_use]
    pub fn path() -> Option<PathBuf> {
        config_path()
    }

    #[must_use]
    pub fn ui_options(&self) -> UiOptions {
        self.app
            .as_ref()
            .map(|app| UiOptions {
                ascii_only: app.ascii_only,
                high_contrast: app.high_contrast,
            })
            .unwrap_or_default()
    }

    /// Merge the config with an optional environment override for the policy.
    ///
    /// An unparseable override is logged and ignored.
    #[must_use]
    pub fn resolve(config: Option<&Self>, policy_override: Option<&str>) -> ResolvedSettings {
        let form = config.and_then(|cfg| cfg.form.as_ref());
        let mut commit_policy = form.map(|f| f.commit_policy).unwrap_or_default();
        let notice_ttl_ms = form.map_or(DEFAULT_NOTICE_TTL_MS, |f| f.notice_ttl_ms);

        if let Some(raw) = policy_override {
            match CommitPolicy::parse(raw) {
                Ok(policy) => commit_policy = policy,
                Err(err) => tracing::warn!("Ignoring {COMMIT_POLICY_ENV}: {err}"),
            }
        }

        ResolvedSettings {
            commit_policy,
            notice_ttl: Duration::from_millis(notice_ttl_ms),
            ui_options: config.map(Self::ui_options).unwrap_or_default(),
        }
    }

    /// [`Self::resolve`] with the override read from `CARDFOLIO_COMMIT_POLICY`.
    #[must_use]
    pub fn resolve_from_env(config: Option<&Self>) -> ResolvedSettings {
        let policy_override = env::var(COMMIT_POLICY_ENV).ok();
        Self::resolve(config, policy_override.as_deref())
    }
}

pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".cardfolio").join("config.toml"))
}
