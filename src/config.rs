/***************************************/
/*        3rd party libraries          */
/***************************************/
use log::warn;
use serde::Deserialize;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/***************************************/
/*           Local modules             */
/***************************************/
use crate::shared::DoorModel;

/***************************************/
/*       Public data structures        */
/***************************************/
#[derive(Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(default)]
pub struct Config {
    pub simulation: SimulationConfig,
    pub driver: DriverConfig,
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct SimulationConfig {
    pub n_floors: u8,
    pub n_elevators: u8,
    pub start_floor: u8,
    pub door_model: DoorModel,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        SimulationConfig {
            n_floors: 10,
            n_elevators: 2,
            start_floor: 1,
            door_model: DoorModel::Instant,
        }
    }
}

/// Pacing of the console driver, in milliseconds.
///
/// A `tick_interval` of 0 disables automatic ticking; the simulation then only
/// advances on the `step` command.
#[derive(Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct DriverConfig {
    pub tick_interval: u64,
    pub door_open_time: u64,
}

impl Default for DriverConfig {
    fn default() -> Self {
        DriverConfig {
            tick_interval: 1000,
            door_open_time: 3000,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read configuration file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to parse configuration file: {0}")]
    Parse(#[from] toml::de::Error),
}

/***************************************/
/*             Public API              */
/***************************************/
pub fn parse_config(config_str: &str) -> Result<Config, ConfigError> {
    Ok(toml::from_str(config_str)?)
}

/// Loads the configuration file at `path`, falling back to defaults when the
/// file does not exist.
pub fn load_config(path: &Path) -> Result<Config, ConfigError> {
    match fs::read_to_string(path) {
        Ok(config_str) => parse_config(&config_str),
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            warn!("{} not found, using default configuration", path.display());
            Ok(Config::default())
        }
        Err(source) => Err(ConfigError::Read {
            path: path.to_path_buf(),
            source,
        }),
    }
}

/***************************************/
/*             Unit tests              */
/***************************************/
