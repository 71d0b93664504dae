use approx::assert_relative_eq;
use jetsim::{
    components::{FlightCommand, GroundContact},
    resources::PhysicsConfig,
};

use crate::common::{
    assert_propulsion_valid, create_test_definition, cruise_spatial, parked_spatial,
    TestAppBuilder,
};

#[test]
fn test_apu_recharges_on_ground() {
    let mut app = TestAppBuilder::new()
        .with_aircraft(create_test_definition(10_000.0, 40.0), parked_spatial(), true)
        .with_physics(PhysicsConfig::with_timestep(0.25))
        .build();
    let aircraft = app.aircraft(0);

    app.send_command(aircraft, FlightCommand::ToggleApu);
    app.run_steps(8);

    let state = app.controller(aircraft).state();
    assert!(state.apu_on);
    assert_relative_eq!(state.battery_charge, 42.0, epsilon = 1e-9);
}

#[test]
fn test_apu_does_not_charge_airborne() {
    let mut app = TestAppBuilder::new()
        .with_aircraft(
            create_test_definition(10_000.0, 40.0),
            cruise_spatial(1000.0, 100.0),
            false,
        )
        .with_physics(PhysicsConfig::with_timestep(0.25))
        .build();
    let aircraft = app.aircraft(0);

    app.send_command(aircraft, FlightCommand::ToggleApu);
    app.run_steps(8);
    assert_eq!(app.controller(aircraft).state().battery_charge, 40.0);

    // Touchdown reported by the host's ground contact check
    app.get_mut::<GroundContact>(aircraft).on_ground = true;
    app.run_steps(4);
    assert_relative_eq!(
        app.controller(aircraft).state().battery_charge,
        41.0,
        epsilon = 1e-9
    );
}

#[test]
fn test_battery_caps_at_full() {
    let mut app = TestAppBuilder::new()
        .with_aircraft(create_test_definition(10_000.0, 99.5), parked_spatial(), true)
        .with_physics(PhysicsConfig::with_timestep(1.0))
        .build();
    let aircraft = app.aircraft(0);

    app.send_command(aircraft, FlightCommand::ToggleApu);
    app.run_steps(3);

    let state = app.controller(aircraft).state();
    assert_eq!(state.battery_charge, 100.0);
    assert_propulsion_valid(state);
}

#[test]
fn test_empty_tank_keeps_engines_running() {
    let mut app = TestAppBuilder::new()
        .with_aircraft(
            create_test_definition(30.0, 100.0),
            cruise_spatial(1000.0, 100.0),
            false,
        )
        .with_physics(PhysicsConfig::with_timestep(0.5))
        .build();
    let aircraft = app.aircraft(0);

    app.send_command(aircraft, FlightCommand::SetThrottle(1.0));
    app.run_steps(4);

    let state = app.controller(aircraft).state();
    assert_eq!(state.fuel_mass, 0.0);
    assert_eq!(state.engines_on, [true, true]);
    assert_propulsion_valid(state);
}
