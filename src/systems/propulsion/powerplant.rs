use nalgebra::Vector3;

use crate::components::{AircraftConfig, PropulsionState};

/// Thrust of a single running engine at the current throttle (N).
pub fn engine_thrust(config: &AircraftConfig, state: &PropulsionState) -> f64 {
    config.max_engine_thrust * state.throttle
}

/// Body-frame thrust vector of a single running engine, along the forward axis.
pub fn engine_thrust_vector(config: &AircraftConfig, state: &PropulsionState) -> Vector3<f64> {
    Vector3::x() * engine_thrust(config, state)
}

/// Combined thrust of every running engine (N).
pub fn total_thrust(config: &AircraftConfig, state: &PropulsionState) -> f64 {
    state.running_engines().count() as f64 * engine_thrust(config, state)
}

/// Burns fuel for `dt` seconds of the current thrust and returns the mass burned.
///
/// Fuel is floored at zero. An empty tank does not stop the engines.
pub fn update_fuel(state: &mut PropulsionState, config: &AircraftConfig, dt: f64) -> f64 {
    let demand = total_thrust(config, state) * config.fuel_consumption_rate * dt;
    let remaining = (state.fuel_mass - demand).max(0.0);
    let burned = state.fuel_mass - remaining;
    state.fuel_mass = remaining;
    burned
}
