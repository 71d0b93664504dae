mod aircraft;
mod loader;
mod propulsion;

pub use aircraft::AircraftConfig;
pub use loader::{AircraftDefinition, ConfigError};
pub use propulsion::EngineMounts;
