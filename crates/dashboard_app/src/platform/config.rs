//! Dashboard configuration: a RON file plus command-line overrides.
//!
//! Every field is optional. Example `dashboard.ron`:
//!
//! ```ron
//! (
//!     deployment: Development,
//!     refresh_after_command: Status,
//!     single_flight: true,
//!     refresh_interval_secs: Some(30),
//! )
//! ```

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use clap::ValueEnum;
use dashboard_client::BackendSettings;
use dashboard_core::{ControlSettings, RefreshScope};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::cli::Cli;

pub const DEFAULT_CONFIG_FILE: &str = "dashboard.ron";

pub const PRODUCTION_URL: &str = "https://bot-oferta.vagalimitada.com";
pub const DEVELOPMENT_URL: &str = "http://127.0.0.1:10000";
pub const HOSTED_URL: &str = "https://bot-ofertas-dashboard.onrender.com";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not read config {path:?}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("invalid config {path:?}: {source}")]
    Parse {
        path: PathBuf,
        source: ron::error::SpannedError,
    },
}

/// Known backend deployments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
pub enum Deployment {
    Production,
    Development,
    #[default]
    Hosted,
}

impl Deployment {
    pub fn base_url(self) -> &'static str {
        match self {
            Deployment::Production => PRODUCTION_URL,
            Deployment::Development => DEVELOPMENT_URL,
            Deployment::Hosted => HOSTED_URL,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum RefreshAfter {
    Status,
    #[default]
    All,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    pub deployment: Deployment,
    /// Overrides `deployment` when set; use it for same-origin or ad-hoc hosts.
    pub base_url: Option<String>,
    pub refresh_after_command: RefreshAfter,
    pub single_flight: bool,
    pub refresh_interval_secs: Option<u64>,
    pub connect_timeout_secs: Option<u64>,
    pub request_timeout_secs: Option<u64>,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            deployment: Deployment::default(),
            base_url: None,
            refresh_after_command: RefreshAfter::default(),
            single_flight: true,
            refresh_interval_secs: None,
            connect_timeout_secs: None,
            request_timeout_secs: None,
        }
    }
}

impl DashboardConfig {
    /// Load `path`, or `./dashboard.ron` if no path is given.
    ///
    /// A missing default file yields the defaults; a missing explicit file
    /// is an error.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        Self::load_in(Path::new("."), path)
    }

    /// Like [`load`](Self::load), looking for the default file in `dir`.
    pub fn load_in(dir: &Path, path: Option<&Path>) -> Result<Self, ConfigError> {
        let (path, explicit) = match path {
            Some(path) => (path.to_path_buf(), true),
            None => (dir.join(DEFAULT_CONFIG_FILE), false),
        };

        let content = match fs::read_to_string(&path) {
            Ok(text) => text,
            Err(err) if !explicit && err.kind() == std::io::ErrorKind::NotFound => {
                return Ok(Self::default());
            }
            Err(source) => return Err(ConfigError::Read { path, source }),
        };

        ron::from_str(&content).map_err(|source| ConfigError::Parse { path, source })
    }

    /// Apply command-line overrides on top of the file values.
    pub fn with_overrides(mut self, cli: &Cli) -> Self {
        if let Some(deployment) = cli.deployment {
            self.deployment = deployment;
            // A named deployment on the command line beats a file-level URL.
            self.base_url = None;
        }
        if let Some(base_url) = &cli.base_url {
            self.base_url = Some(base_url.clone());
        }
        if let Some(secs) = cli.refresh_secs {
            self.refresh_interval_secs = Some(secs);
        }
        self
    }

    pub fn base_url(&self) -> &str {
        self.base_url
            .as_deref()
            .unwrap_or_else(|| self.deployment.base_url())
    }

    pub fn backend_settings(&self) -> BackendSettings {
        BackendSettings {
            base_url: self.base_url().to_string(),
            connect_timeout: self.connect_timeout_secs.map(Duration::from_secs),
            request_timeout: self.request_timeout_secs.map(Duration::from_secs),
        }
    }

    pub fn control_settings(&self) -> ControlSettings {
        ControlSettings {
            refresh_after_command: match self.refresh_after_command {
                RefreshAfter::Status => RefreshScope::Status,
                RefreshAfter::All => RefreshScope::All,
            },
            single_flight: self.single_flight,
        }
    }

    /// Periodic refresh interval; zero disables it.
    pub fn refresh_interval(&self) -> Option<Duration> {
        self.refresh_interval_secs
            .filter(|secs| *secs > 0)
            .map(Duration::from_secs)
    }
}
