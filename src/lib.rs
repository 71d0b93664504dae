pub mod components;
pub mod physics;
pub mod plugins;
pub mod resources;
pub mod systems;
pub mod utils;

pub use components::{AircraftConfig, AircraftDefinition, FlightCommand, FlightController};
pub use physics::PhysicalBody;
pub use plugins::{FlightPlugin, FlightSet};
pub use systems::{AeroModel, AerodynamicResult, FlightCommandEvent};
pub use utils::FlightError;
