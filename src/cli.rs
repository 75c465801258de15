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

//! Command-line arguments.
//!
//! Anything given on the command line overrides the configuration file for
//! this run only.

use std::path::PathBuf;

use clap::Parser;

use crate::config::AppConfig;

#[derive(Parser, Debug, Default)]
#[command(name = "albumui")]
#[command(version, about = "Terminal client for a music catalog service")]
pub(crate) struct Cli {
    /// Base URL of the catalog service
    #[arg(long, env = "ALBUMUI_API_URL")]
    pub(crate) api_url: Option<String>,

    /// Write the log to this file instead of the default location
    #[arg(long)]
    pub(crate) log_file: Option<PathBuf>,
}

impl Cli {
    pub(crate) fn apply(self, mut config: AppConfig) -> AppConfig {
        if let Some(api_url) = self.api_url {
            config.api_url = api_url;
        }
        if let Some(log_file) = self.log_file {
            config.log_file = Some(log_file);
        }
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arguments_override_config() {
        let cli = Cli::try_parse_from([
            "albumui",
            "--api-url",
            "http://catalog:9000",
            "--log-file",
            "/tmp/albumui.log",
        ])
        .unwrap();

        let config = cli.apply(AppConfig::default());
        assert_eq!(config.api_url, "http://catalog:9000");
        assert_eq!(config.log_file, Some(PathBuf::from("/tmp/albumui.log")));
    }

    #[test]
    fn absent_arguments_keep_config() {
        let config = AppConfig {
            api_url: "http://from-file".to_string(),
            ..AppConfig::default()
        };

        let applied = Cli::default().apply(config.clone());
        assert_eq!(applied, config);
    }

    #[test]
    fn unknown_argument_is_rejected() {
        assert!(Cli::try_parse_from(["albumui", "--media-dir", "x"]).is_err());
    }
}
