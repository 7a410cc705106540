use clap::Parser;
use serde::Deserialize;
use snafu::{ResultExt, ensure};
use std::fs;
use std::path::PathBuf;

use crate::Result;
use crate::error::{ConfigFileSnafu, ConfigParseSnafu, ConfigSnafu};

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub port: u16,
    #[serde(default = "default_bind_address")]
    pub bind_address: String,
    pub dist_dir: PathBuf,
}

fn default_bind_address() -> String {
    "127.0.0.1".to_string()
}

impl Config {
    pub fn build(filename: &PathBuf) -> Result<Config> {
        let toml_string = fs::read_to_string(filename).context(ConfigFileSnafu)?;
        Self::parse(toml_string.as_str())
    }

    pub fn parse(toml_string: &str) -> Result<Config> {
        let config: Config = toml::from_str(toml_string).context(ConfigParseSnafu)?;

        // Validate config values
        ensure!(
            config.port > 0,
            ConfigSnafu {
                msg: "Server port is required.".to_string()
            }
        );
        ensure!(
            config.bind_address.len() > 0,
            ConfigSnafu {
                msg: "Bind address is required.".to_string()
            }
        );
        ensure!(
            config.dist_dir.exists(),
            ConfigSnafu {
                msg: "Dist directory does not exist.".to_string()
            }
        );
        ensure!(
            config.index_file().is_file(),
            ConfigSnafu {
                msg: "Dist directory has no index.html.".to_string()
            }
        );

        Ok(config)
    }

    /// Application shell served for every client route.
    pub fn index_file(&self) -> PathBuf {
        self.dist_dir.join("index.html")
    }
}

/// Serves the playlist importer web application
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    #[arg(short, long, value_name = "shell.toml")]
    pub config: PathBuf,
}
