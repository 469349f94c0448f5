//! # Botsim Configuration
//!
//! Hierarchical configuration for the order-fulfillment simulator.
//!
//! Hierarchy:
//! 1. Default values
//! 2. `config/botsim.yaml` - base settings. If missing, defaults are used.
//! 3. `BOTSIM_*` environment variables.

#![warn(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use std::path::{Path, PathBuf};

use figment::{
    providers::{Env, Format, Serialized, Yaml},
    Figment,
};
use serde::{Deserialize, Serialize};
use validator::Validate;

mod error;
mod simulation;
mod telemetry;

pub use error::ConfigError;
pub use simulation::SimulationConfig;
pub use telemetry::TelemetryConfig;

/// Top-level configuration container.
#[derive(Debug, Serialize, Deserialize, Validate, Default, Clone)]
pub struct BotsimConfig {
    /// Simulation parameters (processing time, id allocation).
    #[validate(nested)]
    pub simulation: SimulationConfig,

    /// Telemetry and observability configuration.
    #[validate(nested)]
    pub telemetry: TelemetryConfig,
}

impl BotsimConfig {
    /// Load configuration from default files and environment.
    pub fn load() -> Result<Self, ConfigError> {
        let mut figment = Figment::from(Serialized::defaults(BotsimConfig::default()));

        if Path::new("config/botsim.yaml").exists() {
            figment = figment.merge(Yaml::file("config/botsim.yaml"));
        }

        figment
            .merge(Env::prefixed("BOTSIM_").split("__"))
            .extract()
            .map_err(ConfigError::from)
            .and_then(|config: Self| {
                config.validate()?;
                Ok(config)
            })
    }

    /// Load configuration from a specific path for testing/validation.
    pub fn load_from_path<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(ConfigError::FileNotFound(PathBuf::from(path)));
        }

        Figment::from(Serialized::defaults(BotsimConfig::default()))
            .merge(Yaml::file(path))
            .extract()
            .map_err(ConfigError::from)
            .and_then(|config: Self| {
                config.validate()?;
                Ok(config)
            })
    }
}
