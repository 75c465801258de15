// Copyright (C) 2026  Caprica Software Limited
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! Application configuration.
//!
//! This module manages the application configuration file. Values missing
//! from the file take their defaults, and an unreadable file falls back to
//! the defaults entirely.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

const CONFIG_NAME: &str = "albumui";

const LOG_FILE_NAME: &str = "albumui.log";

pub(crate) const DEFAULT_API_URL: &str = "http://localhost:8080";

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub(crate) struct AppConfig {
    pub(crate) version: u32,
    /// Base URL of the catalog service, without the `/api/v1` prefix.
    pub(crate) api_url: String,
    pub(crate) log_file: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            version: 1,
            api_url: DEFAULT_API_URL.to_string(),
            log_file: None,
        }
    }
}

impl AppConfig {
    /// The configured log file, or `albumui.log` in the platform data
    /// directory.
    pub(crate) fn log_path(&self) -> PathBuf {
        match &self.log_file {
            Some(path) => path.clone(),
            None => dirs::data_dir()
                .map(|dir| dir.join(CONFIG_NAME))
                .unwrap_or_else(|| PathBuf::from("."))
                .join(LOG_FILE_NAME),
        }
    }
}

pub(crate) fn load_config() -> AppConfig {
    confy::load(CONFIG_NAME, None).unwrap_or_default()
}
