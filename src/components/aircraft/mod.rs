mod air_data;
pub mod config;

pub use air_data::AirData;
pub use config::{AircraftConfig, AircraftDefinition, ConfigError, EngineMounts};
