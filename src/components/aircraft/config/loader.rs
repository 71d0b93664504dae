use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

use super::{AircraftConfig, EngineMounts};
use crate::utils::{BATTERY_EMPTY, BATTERY_FULL};

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    FileError(#[from] std::io::Error),
    #[error("Failed to parse YAML: {0}")]
    YamlError(#[from] serde_yaml::Error),
    #[error("Invalid aircraft configuration: {0}")]
    ValidationError(String),
}

/// Everything needed to build a flight controller for one aircraft.
///
/// Missing fields fall back to the defaults, so a YAML file only needs to list
/// what differs from the reference twin-jet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AircraftDefinition {
    pub name: String,
    pub aircraft: AircraftConfig,
    pub engines: EngineMounts,
    /// Fuel on board at start (kg).
    pub initial_fuel_mass: f64,
    /// Battery state of charge at start (%).
    pub initial_battery_charge: f64,
}

impl Default for AircraftDefinition {
    fn default() -> Self {
        Self {
            name: "TwinJet".to_string(),
            aircraft: AircraftConfig::default(),
            engines: EngineMounts::default(),
            initial_fuel_mass: 10_000.0,
            initial_battery_charge: BATTERY_FULL,
        }
    }
}

impl AircraftDefinition {
    /// Loads a definition from a YAML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let file_contents = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&file_contents)
    }

    /// Parses and validates a definition from a YAML document.
    pub fn from_yaml_str(contents: &str) -> Result<Self, ConfigError> {
        let definition: AircraftDefinition = serde_yaml::from_str(contents)?;
        definition.validate()?;
        Ok(definition)
    }

    pub fn to_yaml_string(&self) -> Result<String, ConfigError> {
        Ok(serde_yaml::to_string(self)?)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.aircraft
            .validate()
            .map_err(|e| ConfigError::ValidationError(e.to_string()))?;

        if !self.initial_fuel_mass.is_finite() || self.initial_fuel_mass < 0.0 {
            return Err(ConfigError::ValidationError(format!(
                "initial_fuel_mass must be non-negative, got {}",
                self.initial_fuel_mass
            )));
        }

        if !(BATTERY_EMPTY..=BATTERY_FULL).contains(&self.initial_battery_charge) {
            return Err(ConfigError::ValidationError(format!(
                "initial_battery_charge must be within [{}, {}], got {}",
                BATTERY_EMPTY, BATTERY_FULL, self.initial_battery_charge
            )));
        }

        let mounts = [self.engines.left, self.engines.right];
        if mounts.iter().any(|m| m.iter().any(|v| !v.is_finite())) {
            return Err(ConfigError::ValidationError(
                "engine mount offsets must be finite".to_string(),
            ));
        }

        Ok(())
    }
}
