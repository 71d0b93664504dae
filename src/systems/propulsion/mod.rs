mod power;
mod powerplant;

pub use power::{enforce_power_interlock, update_battery};
pub use powerplant::{engine_thrust, engine_thrust_vector, total_thrust, update_fuel};
