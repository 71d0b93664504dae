use approx::assert_relative_eq;
use bevy::prelude::{Fixed, Time};
use jetsim::{
    components::{
        AirData, EngineId, FlightCommand, PhysicsComponent, ReferenceFrame, SpatialComponent,
    },
    resources::PhysicsConfig,
};
use nalgebra::Vector3;

use crate::common::{
    assert_physics_valid, assert_propulsion_valid, create_test_definition, cruise_spatial,
    parked_spatial, TestAppBuilder, TEST_MASS,
};

#[test]
fn test_parked_aircraft_only_feels_gravity() {
    let mut app = TestAppBuilder::new()
        .with_aircraft(create_test_definition(5_000.0, 80.0), parked_spatial(), true)
        .build();
    let aircraft = app.aircraft(0);

    app.run_steps(120);

    let physics = app.get::<PhysicsComponent>(aircraft);
    assert_physics_valid(physics);
    let gravity = PhysicsConfig::default().gravity * TEST_MASS;
    assert_relative_eq!(physics.net_force.z, gravity.z, epsilon = 1e-6);
    assert_relative_eq!(physics.net_force.x, 0.0, epsilon = 1e-6);
    assert_relative_eq!(physics.net_moment.norm(), 0.0, epsilon = 1e-6);

    let state = app.controller(aircraft).state();
    assert_propulsion_valid(state);
    assert_eq!(state.fuel_mass, 5_000.0);
    assert_eq!(state.battery_charge, 80.0);
}

#[test]
fn test_throttle_command_burns_fuel() {
    let mut app = TestAppBuilder::new()
        .with_aircraft(
            create_test_definition(10_000.0, 100.0),
            cruise_spatial(1000.0, 120.0),
            false,
        )
        .with_physics(PhysicsConfig::with_timestep(0.1))
        .build();
    let aircraft = app.aircraft(0);

    app.send_command(aircraft, FlightCommand::SetThrottle(1.0));
    app.run_steps(10);

    // One second at full power on both engines
    let expected = 10_000.0 - 2.0 * 200_000.0 * 0.0001;
    let state = app.controller(aircraft).state();
    assert_relative_eq!(state.fuel_mass, expected, epsilon = 1e-6);
    assert_propulsion_valid(state);
}

#[test]
fn test_cruise_loads_reach_accumulator() {
    let mut app = TestAppBuilder::new()
        .with_aircraft(
            create_test_definition(10_000.0, 100.0),
            cruise_spatial(2000.0, 150.0),
            false,
        )
        .build();
    let aircraft = app.aircraft(0);

    app.send_command(aircraft, FlightCommand::SetThrottle(0.5));
    app.run_steps(1);

    let physics = app.get::<PhysicsComponent>(aircraft);
    assert_physics_valid(physics);

    // Two engine point forces plus one body-frame aero force
    let point_forces = physics.forces.iter().filter(|f| f.point.is_some()).count();
    assert_eq!(point_forces, 2);
    let aero_forces: Vec<_> = physics
        .forces
        .iter()
        .filter(|f| f.frame == ReferenceFrame::Body)
        .collect();
    assert_eq!(aero_forces.len(), 1);
    assert!(aero_forces[0].vector.x < 0.0, "drag must oppose motion");
    assert_eq!(physics.moments.len(), 1);

    // Symmetric thrust: 200 kN forward minus drag, no yaw from the engines
    assert!(physics.net_force.x < 200_000.0);
    assert!(physics.net_force.x > 0.0);
    assert_relative_eq!(physics.net_moment.z, 0.0, epsilon = 1e-6);

    let air_data = app.get::<AirData>(aircraft);
    assert_relative_eq!(air_data.true_airspeed, 150.0, epsilon = 1e-9);
    assert!(air_data.density < 1.225);
}

#[test]
fn test_single_right_engine_yaws_nose_left() {
    let mut app = TestAppBuilder::new()
        .with_aircraft(
            create_test_definition(10_000.0, 100.0),
            cruise_spatial(2000.0, 0.0),
            false,
        )
        .build();
    let aircraft = app.aircraft(0);

    app.send_command(aircraft, FlightCommand::SetThrottle(1.0));
    app.send_command(aircraft, FlightCommand::ToggleEngine(EngineId::Left));
    app.run_steps(1);

    // Right engine alone swings the nose left, towards +y
    let physics = app.get::<PhysicsComponent>(aircraft);
    assert_eq!(physics.forces.iter().filter(|f| f.point.is_some()).count(), 1);
    assert!(physics.net_moment.z > 1.0);
}

#[test]
fn test_single_left_engine_yaws_nose_right() {
    let mut app = TestAppBuilder::new()
        .with_aircraft(
            create_test_definition(10_000.0, 100.0),
            cruise_spatial(2000.0, 0.0),
            false,
        )
        .build();
    let aircraft = app.aircraft(0);

    app.send_command(aircraft, FlightCommand::SetThrottle(1.0));
    app.send_command(aircraft, FlightCommand::ToggleEngine(EngineId::Right));
    app.run_steps(1);

    let physics = app.get::<PhysicsComponent>(aircraft);
    assert!(physics.net_moment.z < -1.0);
}

#[test]
fn test_plugin_sets_fixed_timestep() {
    let app = TestAppBuilder::new()
        .with_physics(PhysicsConfig::with_timestep(0.05))
        .build();

    let time = app.app.world().resource::<Time<Fixed>>();
    assert_relative_eq!(time.timestep().as_secs_f64(), 0.05, epsilon = 1e-9);
    assert_relative_eq!(
        app.app.world().resource::<PhysicsConfig>().timestep,
        0.05
    );
}

#[test]
fn test_nan_throttle_event_is_ignored() {
    let mut app = TestAppBuilder::new()
        .with_aircraft(
            create_test_definition(10_000.0, 100.0),
            cruise_spatial(1000.0, 100.0),
            false,
        )
        .with_physics(PhysicsConfig::with_timestep(0.1))
        .build();
    let aircraft = app.aircraft(0);

    app.send_command(aircraft, FlightCommand::SetThrottle(f64::NAN));
    app.run_steps(10);

    let state = app.controller(aircraft).state();
    assert_eq!(state.throttle, 0.0);
    assert_eq!(state.fuel_mass, 10_000.0);
    assert_physics_valid(app.get::<PhysicsComponent>(aircraft));
}

#[test]
fn test_forces_rebuilt_every_step() {
    let mut app = TestAppBuilder::new()
        .with_aircraft(
            create_test_definition(10_000.0, 100.0),
            cruise_spatial(1000.0, 100.0),
            false,
        )
        .build();
    let aircraft = app.aircraft(0);

    app.run_steps(5);
    let count = app.get::<PhysicsComponent>(aircraft).forces.len();
    app.run_steps(5);
    assert_eq!(app.get::<PhysicsComponent>(aircraft).forces.len(), count);
}

#[test]
fn test_non_finite_velocity_skips_aero_and_continues() {
    let mut app = TestAppBuilder::new()
        .with_aircraft(
            create_test_definition(10_000.0, 100.0),
            cruise_spatial(1000.0, 100.0),
            false,
        )
        .build();
    let aircraft = app.aircraft(0);

    app.get_mut::<SpatialComponent>(aircraft).velocity = Vector3::new(f64::NAN, 0.0, 0.0);
    app.run_steps(3);

    let physics = app.get::<PhysicsComponent>(aircraft);
    assert!(physics
        .forces
        .iter()
        .all(|f| f.frame != ReferenceFrame::Body));
    assert!(physics.moments.is_empty());
    assert_eq!(app.controller(aircraft).rejected_aero_ticks(), 3);

    app.get_mut::<SpatialComponent>(aircraft).velocity = Vector3::new(100.0, 0.0, 0.0);
    app.run_steps(1);
    assert_eq!(app.controller(aircraft).rejected_aero_ticks(), 3);
    assert_physics_valid(app.get::<PhysicsComponent>(aircraft));
}

#[test]
fn test_command_for_unknown_entity_is_dropped() {
    let mut app = TestAppBuilder::new()
        .with_aircraft(
            create_test_definition(10_000.0, 100.0),
            cruise_spatial(1000.0, 100.0),
            false,
        )
        .build();
    let aircraft = app.aircraft(0);
    let stranger = app.app.world_mut().spawn_empty().id();

    app.send_command(stranger, FlightCommand::SetThrottle(1.0));
    app.run_steps(2);

    assert_eq!(app.controller(aircraft).state().throttle, 0.0);
}

#[test]
fn test_aircraft_are_independent() {
    let mut app = TestAppBuilder::new()
        .with_aircraft(
            create_test_definition(1_000.0, 100.0),
            cruise_spatial(1000.0, 100.0),
            false,
        )
        .with_aircraft(
            create_test_definition(1_000.0, 100.0),
            cruise_spatial(3000.0, 200.0),
            false,
        )
        .with_physics(PhysicsConfig::with_timestep(1.0))
        .build();
    let (first, second) = (app.aircraft(0), app.aircraft(1));

    app.send_command(second, FlightCommand::SetThrottle(0.5));
    app.run_steps(1);

    assert_eq!(app.controller(first).state().fuel_mass, 1_000.0);
    assert_relative_eq!(app.controller(second).state().fuel_mass, 980.0, epsilon = 1e-9);
}
