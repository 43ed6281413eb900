use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub data: DataConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Bind address for the HTTP listener
    pub host: String,

    /// Listener port (overridable via PORT)
    pub port: u16,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DataConfig {
    /// Path of the delimited company dataset (overridable via
    /// COMPANY_DATA_FILE)
    pub file: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            data: DataConfig::default(),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
        }
    }
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            file: PathBuf::from("company_data.csv"),
        }
    }
}

impl Config {
    /// Load config from the default location.
    ///
    /// A missing file means defaults; a file that exists but does not
    /// parse is an error. `PORT` and `COMPANY_DATA_FILE` environment
    /// variables override whatever the file says.
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path();

        let mut config = if config_path.exists() {
            let contents = fs::read_to_string(&config_path)
                .with_context(|| format!("reading config file {}", config_path.display()))?;
            toml::from_str(&contents)
                .with_context(|| format!("parsing config file {}", config_path.display()))?
        } else {
            Self::default()
        };

        if let Ok(port) = env::var("PORT") {
            config.server.port = port
                .parse()
                .with_context(|| format!("invalid PORT value '{}'", port))?;
        }
        if let Ok(file) = env::var("COMPANY_DATA_FILE") {
            config.data.file = PathBuf::from(file);
        }

        Ok(config)
    }

    /// Config file location: `COMPANY_DATA_CONFIG` if set, otherwise
    /// `company-data.toml` beside the process.
    pub fn config_path() -> PathBuf {
        env::var("COMPANY_DATA_CONFIG")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("company-data.toml"))
    }

    /// Socket address string for the listener.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_sane() {
        let config = Config::default();
        assert_eq!(config.bind_addr(), "0.0.0.0:3000");
        assert_eq!(config.data.file, PathBuf::from("company_data.csv"));
    }

    #[test]
    fn partial_toml_fills_in_defaults() {
        let config: Config = toml::from_str(
            "[data]\n\
             file = \"fixtures/fortune.csv\"\n",
        )
        .unwrap();

        assert_eq!(config.data.file, PathBuf::from("fixtures/fortune.csv"));
        assert_eq!(config.server.port, 3000);
    }

    #[test]
    fn full_toml_round_trips() {
        let config: Config = toml::from_str(
            "[server]\n\
             host = \"127.0.0.1\"\n\
             port = 8080\n\
             \n\
             [data]\n\
             file = \"company_data.csv\"\n",
        )
        .unwrap();

        assert_eq!(config.bind_addr(), "127.0.0.1:8080");
    }
}
