mod air_data;
mod force_calculator;

pub use air_data::{air_density, angle_of_attack, sideslip_angle, AirDataValues};
pub use force_calculator::{AeroModel, AerodynamicResult};
