use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

/// Proportional gain of the altitude hold (N/m).
pub const ALTITUDE_GAIN: f64 = 10.0;
/// Proportional gain of the velocity hold (N·s/m).
pub const VELOCITY_GAIN: f64 = 5.0;

/// Altitude and world-frame velocity the autopilot steers back toward.
///
/// Captured from the body when the autopilot is switched on and left untouched
/// until the next engagement.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct AutopilotTarget {
    pub altitude: f64,
    pub velocity: Vector3<f64>,
}

impl AutopilotTarget {
    pub fn capture(altitude: f64, velocity: Vector3<f64>) -> Self {
        Self { altitude, velocity }
    }

    /// World-frame altitude hold force along world up.
    pub fn altitude_correction(&self, altitude: f64) -> Vector3<f64> {
        Vector3::z() * ((self.altitude - altitude) * ALTITUDE_GAIN)
    }

    /// World-frame velocity hold force.
    pub fn velocity_correction(&self, velocity: &Vector3<f64>) -> Vector3<f64> {
        (self.velocity - velocity) * VELOCITY_GAIN
    }
}
