use bevy::prelude::*;

use crate::components::{
    AirData, FlightCommand, FlightController, GroundContact, PhysicsComponent, SpatialComponent,
};
use crate::physics::BodyHandle;
use crate::resources::PhysicsConfig;

/// A pilot command addressed to one aircraft.
#[derive(Event, Debug, Clone, Copy)]
pub struct FlightCommandEvent {
    pub target: Entity,
    pub command: FlightCommand,
}

/// Moves incoming command events onto each controller's queue, preserving order.
pub fn queue_flight_commands(
    mut events: EventReader<FlightCommandEvent>,
    mut controllers: Query<&mut FlightController>,
) {
    for event in events.read() {
        match controllers.get_mut(event.target) {
            Ok(mut controller) => controller.queue_command(event.command),
            Err(_) => warn!(
                "Dropping {:?}: entity {:?} has no flight controller",
                event.command, event.target
            ),
        }
    }
}

/// Runs one controller tick per aircraft, rebuilding its force accumulator.
pub fn flight_controller_system(
    mut query: Query<(
        &mut FlightController,
        &SpatialComponent,
        &mut PhysicsComponent,
        Option<&GroundContact>,
        Option<&mut AirData>,
    )>,
    config: Res<PhysicsConfig>,
) {
    let dt = config.timestep;

    for (mut controller, spatial, mut physics, ground, air_data) in query.iter_mut() {
        physics.clear_forces();

        let on_ground = ground.is_some_and(|g| g.on_ground);
        let mut body = BodyHandle::new(spatial, &mut physics, on_ground);
        let report = controller.tick(&mut body, dt);

        if let Some(mut air_data) = air_data {
            *air_data = report.air_data.into();
        }
    }
}
