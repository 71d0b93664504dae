use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::systems::AirDataValues;
use crate::utils::SEA_LEVEL_AIR_DENSITY;

/// Air data seen by the aircraft during the most recent tick.
#[derive(Component, Debug, Clone, Serialize, Deserialize)]
pub struct AirData {
    /// True airspeed of the aircraft (m/s).
    pub true_airspeed: f64,
    /// Angle of attack (α) in radians.
    pub alpha: f64,
    /// Sideslip angle (β) in radians.
    pub beta: f64,
    /// Dynamic pressure acting on the aircraft (Pa).
    pub dynamic_pressure: f64,
    /// Air density (kg/m³).
    pub density: f64,
}

impl Default for AirData {
    /// Zero airspeed at sea level.
    fn default() -> Self {
        Self {
            true_airspeed: 0.0,
            alpha: 0.0,
            beta: 0.0,
            dynamic_pressure: 0.0,
            density: SEA_LEVEL_AIR_DENSITY,
        }
    }
}

impl From<AirDataValues> for AirData {
    fn from(values: AirDataValues) -> Self {
        Self {
            true_airspeed: values.airspeed,
            alpha: values.alpha,
            beta: values.beta,
            dynamic_pressure: values.dynamic_pressure,
            density: values.density,
        }
    }
}
