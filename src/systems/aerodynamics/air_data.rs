use nalgebra::Vector3;

use crate::utils::DENSITY_SCALE_HEIGHT;

/// Air data derived from the body-frame velocity and altitude.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct AirDataValues {
    pub airspeed: f64,
    pub alpha: f64,
    pub beta: f64,
    pub density: f64,
    pub dynamic_pressure: f64,
}

impl AirDataValues {
    pub fn calculate(velocity_body: &Vector3<f64>, altitude: f64, sea_level_density: f64) -> Self {
        let airspeed = velocity_body.norm();
        let density = air_density(sea_level_density, altitude);
        // Still air carries no load even where the density model saturates
        let dynamic_pressure = if airspeed == 0.0 {
            0.0
        } else {
            0.5 * density * airspeed * airspeed
        };

        Self {
            airspeed,
            alpha: angle_of_attack(velocity_body),
            beta: sideslip_angle(velocity_body),
            density,
            dynamic_pressure,
        }
    }
}

/// Exponential atmosphere: ρ = ρ₀ · exp(−h / 8500).
///
/// Below zero altitude this returns more than the sea-level density, which the
/// model accepts. The exponential saturates far outside the atmosphere: the
/// result is `inf` below roughly -6e6 m and exactly 0 above roughly +6.3e6 m.
pub fn air_density(sea_level_density: f64, altitude: f64) -> f64 {
    sea_level_density * (-altitude / DENSITY_SCALE_HEIGHT).exp()
}

/// Angle between the forward axis and the airflow in the vertical plane.
pub fn angle_of_attack(velocity_body: &Vector3<f64>) -> f64 {
    velocity_body.z.atan2(velocity_body.x)
}

/// Angle between the forward axis and the airflow in the lateral plane.
///
/// Zero at zero airspeed; the asin argument is clamped so rounding can never
/// push it outside [-1, 1].
pub fn sideslip_angle(velocity_body: &Vector3<f64>) -> f64 {
    let airspeed = velocity_body.norm();
    if airspeed == 0.0 {
        return 0.0;
    }
    (velocity_body.y / airspeed).clamp(-1.0, 1.0).asin()
}
