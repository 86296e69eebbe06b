// Copyright 2025 Fernando Borretti
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Command-line configuration.
//!
//! Precedence, highest first: command-line flags, `QUIZDECK_*` environment
//! variables (both handled by clap), then the TOML config file.

use std::path::Path;
use std::path::PathBuf;

use quizdeck_core::ErrorReport;
use quizdeck_core::Fallible;
use quizdeck_core::PageLocation;
use quizdeck_core::fail;
use quizdeck_core::resolve_base_url;
use serde::Deserialize;

use crate::client::ApiClient;

/// Looked up in the working directory when `--config` is not given.
pub const DEFAULT_CONFIG_FILE: &str = "quizdeck.toml";

/// The contents of a config file. Every key is optional.
#[derive(Clone, PartialEq, Eq, Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    pub base_url: Option<String>,
    pub port: Option<u16>,
    pub api_key: Option<String>,
}

impl ConfigFile {
    pub fn read(path: &Path) -> Fallible<Self> {
        let text = std::fs::read_to_string(path)?;
        toml::from_str(&text).map_err(|e| {
            ErrorReport::new(format!(
                "Failed to parse config file '{}': {e}",
                path.display()
            ))
        })
    }

    /// Read `explicit` if given, which must exist, else the default file if
    /// present in `dir`.
    pub fn discover(explicit: Option<&Path>, dir: &Path) -> Fallible<Option<Self>> {
        match explicit {
            Some(path) => {
                if !path.exists() {
                    return fail(format!("config file not found: {}", path.display()));
                }
                log::debug!("Reading config from {}", path.display());
                Ok(Some(Self::read(path)?))
            }
            None => {
                let path = dir.join(DEFAULT_CONFIG_FILE);
                if path.exists() {
                    log::debug!("Reading config from {}", path.display());
                    Ok(Some(Self::read(&path)?))
                } else {
                    Ok(None)
                }
            }
        }
    }
}

/// Values given on the command line or through the environment.
#[derive(Clone, PartialEq, Eq, Debug, Default)]
pub struct Overrides {
    pub config: Option<PathBuf>,
    pub base_url: Option<String>,
    pub port: Option<u16>,
    pub api_key: Option<String>,
}

/// The resolved settings.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Config {
    pub base_url: String,
    pub api_key: Option<String>,
}

impl Config {
    /// Load the config file from the working directory, then apply overrides.
    pub fn load(overrides: &Overrides) -> Fallible<Self> {
        let cwd = std::env::current_dir()?;
        let file = ConfigFile::discover(overrides.config.as_deref(), &cwd)?;
        Ok(Self::resolve(file.unwrap_or_default(), overrides))
    }

    /// Merge `file` under `overrides`. The base URL is resolved as a page
    /// served from `http://localhost` would resolve it.
    pub fn resolve(file: ConfigFile, overrides: &Overrides) -> Self {
        let base_url = overrides.base_url.clone().or(file.base_url);
        let port = overrides.port.or(file.port).map(|p| p.to_string());
        let base_url = resolve_base_url(
            base_url.as_deref(),
            port.as_deref(),
            &PageLocation::localhost(),
        );
        let api_key = overrides
            .api_key
            .clone()
            .or(file.api_key)
            .filter(|k| !k.trim().is_empty());
        Self { base_url, api_key }
    }

    /// A client for the configured server, carrying the configured key.
    pub fn client(&self) -> ApiClient {
        let client = ApiClient::new(&self.base_url);
        client.set_api_key(self.api_key.clone());
        client
    }
}
