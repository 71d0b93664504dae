use bevy::prelude::*;

use crate::resources::PhysicsConfig;
use crate::systems::{
    flight_controller_system, force_calculator_system, queue_flight_commands, FlightCommandEvent,
};

/// Flight simulation stages, run in order each fixed step
#[derive(Debug, Hash, PartialEq, Eq, Clone, SystemSet)]
pub enum FlightSet {
    Commands,
    Control,
    ForceCalculation,
}

/// Wires the flight controller into the fixed-timestep schedule.
///
/// The host still owns integration and should run it after
/// `FlightSet::ForceCalculation`.
#[derive(Default)]
pub struct FlightPlugin {
    pub config: PhysicsConfig,
}

impl FlightPlugin {
    pub fn with_config(config: PhysicsConfig) -> Self {
        Self { config }
    }
}

impl Plugin for FlightPlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(self.config.clone())
            .insert_resource(Time::<Fixed>::from_seconds(self.config.timestep))
            .add_event::<FlightCommandEvent>();

        app.configure_sets(
            FixedUpdate,
            (
                FlightSet::Commands,
                FlightSet::Control,
                FlightSet::ForceCalculation,
            )
                .chain(),
        );

        app.add_systems(
            FixedUpdate,
            (
                queue_flight_commands.in_set(FlightSet::Commands),
                flight_controller_system.in_set(FlightSet::Control),
                force_calculator_system.in_set(FlightSet::ForceCalculation),
            ),
        );
    }
}
