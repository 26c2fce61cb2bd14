// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! User configuration.
//!
//! Configuration is stored in `<config dir>/iv/config.toml` (or the file
//! named by `IV_CONFIG`) and includes:
//! - `plain`: Always render without colors
//! - `color256`: Force 256-color grays on or off instead of detecting from `TERM`

use serde::{Deserialize, Serialize};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::env;
use crate::error::{Error, Result};

const APP_DIR_NAME: &str = "iv";
const CONFIG_FILE_NAME: &str = "config.toml";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Render without colors even on a terminal.
    pub plain: bool,
    /// Override 256-color detection.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color256: Option<bool>,
}

impl Config {
    /// Location of the config file: `IV_CONFIG`, else the platform config
    /// directory. `None` when neither is available.
    pub fn path() -> Option<PathBuf> {
        env::config_path().or_else(|| {
            dirs::config_dir().map(|dir| dir.join(APP_DIR_NAME).join(CONFIG_FILE_NAME))
        })
    }

    /// Load from the default location, falling back to defaults when there
    /// is no config file.
    pub fn load() -> Result<Self> {
        match Self::path() {
            Some(path) => Self::load_from(&path),
            None => Ok(Config::default()),
        }
    }

    /// Load from `path`. A missing file yields the defaults.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Config::default()),
            Err(e) => {
                return Err(Error::Config(format!(
                    "failed to read {}: {}",
                    path.display(),
                    e
                )))
            }
        };
        Ok(toml::from_str(&content)?)
    }

    /// Serialize as TOML, the same shape [`Config::load_from`] reads.
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self)
            .map_err(|e| Error::Config(format!("failed to serialize config: {}", e)))
    }

    /// 256-color support: the config override, else the `TERM` hint.
    pub fn supports_256(&self, term: Option<&str>) -> bool {
        self.color256
            .unwrap_or_else(|| crate::colors::supports_256(term))
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
