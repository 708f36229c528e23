use serde::{Deserialize, Serialize};
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing_subscriber::filter;

use crate::dir::CryptopowerDirectory;

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct Config {
    /// log level, can be "info", "debug", "trace".
    pub log_level: Option<String>,
    /// Log at debug level if no log level is given.
    pub debug: Option<bool>,
}

pub const DEFAULT_FILE_NAME: &str = "gui.toml";

impl Config {
    pub fn path(datadir: &CryptopowerDirectory) -> PathBuf {
        datadir.path().join(DEFAULT_FILE_NAME)
    }

    /// Loads the configuration of the data directory, falling back to the
    /// defaults if there is none.
    pub fn load(datadir: &CryptopowerDirectory) -> Result<Self, ConfigError> {
        match Self::from_file(&Self::path(datadir)) {
            Err(ConfigError::NotFound) => Ok(Self::default()),
            res => res,
        }
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let config = std::fs::read(path)
            .map_err(|e| match e.kind() {
                std::io::ErrorKind::NotFound => ConfigError::NotFound,
                _ => ConfigError::ReadingFile(format!("Reading configuration file: {}", e)),
            })
            .and_then(|file_content| {
                toml::from_slice::<Config>(&file_content).map_err(|e| {
                    ConfigError::ReadingFile(format!("Parsing configuration file: {}", e))
                })
            })?;

        // check if log_level field is valid
        config.log_level()?;
        Ok(config)
    }

    pub fn to_file(&self, path: &Path) -> Result<(), ConfigError> {
        let content = toml::to_string(&self)
            .map_err(|e| ConfigError::WritingFile(format!("Failed to serialize config: {}", e)))?;

        let mut config_file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(path)
            .map_err(|e| ConfigError::WritingFile(e.to_string()))?;

        config_file.write_all(content.as_bytes()).map_err(|e| {
            tracing::warn!("failed to write to file: {:?}", e);
            ConfigError::WritingFile(e.to_string())
        })?;

        tracing::info!("Done writing gui configuration file");
        Ok(())
    }

    pub fn log_level(&self) -> Result<filter::LevelFilter, ConfigError> {
        if let Some(level) = &self.log_level {
            match level.as_ref() {
                "info" => Ok(filter::LevelFilter::INFO),
                "debug" => Ok(filter::LevelFilter::DEBUG),
                "trace" => Ok(filter::LevelFilter::TRACE),
                _ => Err(ConfigError::InvalidField(
                    "log_level",
                    format!("Unknown value '{}'", level),
                )),
            }
        } else if let Some(true) = self.debug {
            Ok(filter::LevelFilter::DEBUG)
        } else {
            Ok(filter::LevelFilter::INFO)
        }
    }
}

#[derive(PartialEq, Eq, Debug, Clone, thiserror::Error)]
pub enum ConfigError {
    #[error("Config field {0} is invalid: {1}")]
    InvalidField(&'static str, String),
    #[error("Config file not found")]
    NotFound,
    #[error("Error while reading file: {0}")]
    ReadingFile(String),
    #[error("Error while writing file: {0}")]
    WritingFile(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_level_from_config() {
        assert_eq!(
            Config::default().log_level().unwrap(),
            filter::LevelFilter::INFO
        );
        let config = Config {
            log_level: None,
            debug: Some(true),
        };
        assert_eq!(config.log_level().unwrap(), filter::LevelFilter::DEBUG);
        let config = Config {
            log_level: Some("trace".to_string()),
            debug: Some(true),
        };
        assert_eq!(config.log_level().unwrap(), filter::LevelFilter::TRACE);
        let config = Config {
            log_level: Some("loud".to_string()),
            debug: None,
        };
        assert!(matches!(
            config.log_level(),
            Err(ConfigError::InvalidField("log_level", _))
        ));
    }

    #[test]
    fn config_file() {
        let tmp = tempfile::tempdir().unwrap();
        let datadir = CryptopowerDirectory::new(tmp.path().to_path_buf());
        let path = Config::path(&datadir);

        assert_eq!(Config::from_file(&path), Err(ConfigError::NotFound));
        assert_eq!(Config::load(&datadir).unwrap(), Config::default());

        let config = Config {
            log_level: Some("debug".to_string()),
            debug: None,
        };
        config.to_file(&path).unwrap();
        assert_eq!(Config::load(&datadir).unwrap(), config);

        std::fs::write(&path, "log_level = \"loud\"\n").unwrap();
        assert!(matches!(
            Config::load(&datadir),
            Err(ConfigError::InvalidField("log_level", _))
        ));

        std::fs::write(&path, "log_level = [").unwrap();
        assert!(matches!(
            Config::from_file(&path),
            Err(ConfigError::ReadingFile(_))
        ));
    }
}
