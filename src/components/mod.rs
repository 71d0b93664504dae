pub mod aircraft;
pub mod autopilot;
pub mod controller;
pub mod physics;
pub mod propulsion;
pub mod spatial;

pub use aircraft::{AirData, AircraftConfig, AircraftDefinition, ConfigError, EngineMounts};
pub use autopilot::{AutopilotTarget, ALTITUDE_GAIN, VELOCITY_GAIN};
pub use controller::{FlightCommand, FlightController, TickReport};
pub use physics::{Force, Moment, PhysicsComponent, ReferenceFrame};
pub use propulsion::{EngineId, PropulsionState};
pub use spatial::{GroundContact, SpatialComponent};
