// Settings resolution.
//
// Values are layered: built-in defaults, then the JSON config file, then
// `STORECLI_*` environment variables, then command-line flags.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{ClientError, Result};

pub const HOST_ENV: &str = "STORECLI_HOST";
pub const STORAGE_ENV: &str = "STORECLI_STORAGE";

/// Contents of the config file. Both fields may be left out.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Config {
    #[serde(default = "Config::default_host")]
    pub host: String,
    #[serde(default = "Config::default_storage")]
    pub storage: String,
}

impl Config {
    fn default_host() -> String {
        "http://localhost:8080".into()
    }

    fn default_storage() -> String {
        "common".into()
    }

    /// `<config_dir>/storecli/config.json`, when the platform has one.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("storecli").join("config.json"))
    }

    /// Load the config file. An explicitly given path must exist; the
    /// default location is optional.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        let (path, required) = match explicit {
            Some(p) => (p.to_path_buf(), true),
            None => match Self::default_path() {
                Some(p) => (p, false),
                None => return Ok(Config::default()),
            },
        };

        match fs::read_to_string(&path) {
            Ok(text) => {
                debug!(path = %path.display(), "loaded config file");
                serde_json::from_str(&text).map_err(|e| {
                    ClientError::Config(format!("{}: {}", path.display(), e))
                })
            }
            Err(e) if e.kind() == ErrorKind::NotFound && !required => Ok(Config::default()),
            Err(e) => Err(ClientError::io(path, e)),
        }
    }

    /// Override with values taken from an environment lookup.
    pub fn apply_env<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(host) = lookup(HOST_ENV).filter(|v| !v.is_empty()) {
            self.host = host;
        }
        if let Some(storage) = lookup(STORAGE_ENV).filter(|v| !v.is_empty()) {
            self.storage = storage;
        }
        self
    }

    /// Override with command-line values.
    pub fn apply_flags(mut self, host: Option<&str>, storage: Option<&str>) -> Self {
        if let Some(host) = host.filter(|v| !v.is_empty()) {
            self.host = host.to_string();
        }
        if let Some(storage) = storage.filter(|v| !v.is_empty()) {
            self.storage = storage.to_string();
        }
        self
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| ClientError::io(parent, e))?;
        }
        let text = serde_json::to_string_pretty(self)
            .map_err(|e| ClientError::Config(e.to_string()))?;
        fs::write(path, text).map_err(|e| ClientError::io(path, e))
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            host: Self::default_host(),
            storage: Self::default_storage(),
        }
    }
}
