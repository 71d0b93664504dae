pub mod aerodynamics;
mod flight;
pub mod physics;
pub mod propulsion;

pub use aerodynamics::{
    air_density, angle_of_attack, sideslip_angle, AeroModel, AerodynamicResult, AirDataValues,
};
pub use flight::{flight_controller_system, queue_flight_commands, FlightCommandEvent};
pub use physics::{calculate_net_forces_moments, force_calculator_system};
pub use propulsion::{
    engine_thrust, engine_thrust_vector, enforce_power_interlock, total_thrust, update_battery,
    update_fuel,
};
