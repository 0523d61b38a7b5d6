//! Host configuration for backend construction.
//!
//! Every field has a default, so an empty JSON object (or no file at all) is a
//! valid configuration. A representative file is:
//!
//! ```json
//! {
//!   "sysfs_root": "/sys",
//!   "procfs_root": "/proc",
//!   "launcher": {
//!     "command": ["xdg-open"],
//!     "sms_settings_uri": "settings://messaging"
//!   },
//!   "keep_awake": {
//!     "command": ["systemd-inhibit", "--what=idle", "sleep", "infinity"]
//!   }
//! }
//! ```

use camino::{Utf8Path, Utf8PathBuf};
use serde::{Deserialize, Serialize};
use std::ffi::OsString;
use thiserror::Error;

/// Environment variable naming a JSON configuration file.
pub const CONFIG_PATH_ENV: &str = "WINRT_SHIM_CONFIG";

const DEFAULT_SYSFS_ROOT: &str = "/sys";
const DEFAULT_PROCFS_ROOT: &str = "/proc";

/// Errors returned while loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("failed to read configuration from {path}")]
    Read {
        /// Path that was read.
        path: Utf8PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The configuration file is not valid JSON for [`ShimConfig`].
    #[error("invalid configuration in {path}")]
    Parse {
        /// Path that was parsed.
        path: Utf8PathBuf,
        /// Underlying JSON error.
        #[source]
        source: serde_json::Error,
    },

    /// The configuration path from the environment is not UTF-8.
    #[error("configuration path {0:?} is not valid UTF-8")]
    NonUtf8Path(OsString),

    /// A command override is present but empty.
    #[error("{0} command override must name a program")]
    EmptyCommand(&'static str),
}

/// Launcher settings for URI-based backends.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LauncherConfig {
    /// Program and leading arguments used to open URIs. The URI is appended
    /// as the final argument. `None` selects the target's default opener.
    pub command: Option<Vec<String>>,
    /// Alternate opener tried when the primary one is missing. `None`
    /// selects the target's fallback opener.
    pub fallback_command: Option<Vec<String>>,
    /// URI opened by the messaging settings action. `None` disables it.
    pub sms_settings_uri: Option<String>,
}

/// Settings for the keep-awake inhibitor backend.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct KeepAwakeConfig {
    /// Program and arguments of a process that holds the display awake for
    /// as long as it runs. `None` selects the target's default inhibitor.
    pub command: Option<Vec<String>>,
}

/// Root configuration for backend construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ShimConfig {
    /// Mount point of sysfs, used by the radio and network backends.
    pub sysfs_root: Utf8PathBuf,
    /// Mount point of procfs, used by the network backend.
    pub procfs_root: Utf8PathBuf,
    /// URI launcher settings.
    pub launcher: LauncherConfig,
    /// Keep-awake inhibitor settings.
    pub keep_awake: KeepAwakeConfig,
}

impl Default for ShimConfig {
    fn default() -> Self {
        Self {
            sysfs_root: Utf8PathBuf::from(DEFAULT_SYSFS_ROOT),
            procfs_root: Utf8PathBuf::from(DEFAULT_PROCFS_ROOT),
            launcher: LauncherConfig::default(),
            keep_awake: KeepAwakeConfig::default(),
        }
    }
}

impl ShimConfig {
    /// Parses configuration from a JSON document.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed JSON and
    /// [`ConfigError::EmptyCommand`] for empty command overrides.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Self::parse(json, Utf8Path::new("<inline>"))
    }

    /// Loads configuration from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when the file cannot be read, parsed or
    /// validated.
    pub fn load(path: &Utf8Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_owned(),
            source,
        })?;
        Self::parse(&contents, path)
    }

    /// Loads configuration from the file named by [`CONFIG_PATH_ENV`], or
    /// returns the defaults when the variable is unset.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when the variable is set but the file cannot
    /// be used.
    pub fn from_env() -> Result<Self, ConfigError> {
        let Some(raw_path) = std::env::var_os(CONFIG_PATH_ENV) else {
            return Ok(Self::default());
        };
        let path = Utf8PathBuf::from_path_buf(raw_path.into())
            .map_err(|path| ConfigError::NonUtf8Path(path.into_os_string()))?;
        Self::load(&path)
    }

    fn parse(contents: &str, path: &Utf8Path) -> Result<Self, ConfigError> {
        let config: Self =
            serde_json::from_str(contents).map_err(|source| ConfigError::Parse {
                path: path.to_owned(),
                source,
            })?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if is_empty_command(self.launcher.command.as_deref()) {
            return Err(ConfigError::EmptyCommand("launcher"));
        }
        if is_empty_command(self.launcher.fallback_command.as_deref()) {
            return Err(ConfigError::EmptyCommand("launcher fallback"));
        }
        if is_empty_command(self.keep_awake.command.as_deref()) {
            return Err(ConfigError::EmptyCommand("keep_awake"));
        }
        Ok(())
    }
}

fn is_empty_command(command: Option<&[String]>) -> bool {
    command.is_some_and(|parts| parts.first().is_none_or(|program| program.trim().is_empty()))
}
