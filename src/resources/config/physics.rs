use bevy::prelude::*;
use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

use crate::utils::{DEFAULT_TIMESTEP, GRAVITY};

/// Fixed-step settings shared by the flight and force systems.
#[derive(Resource, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PhysicsConfig {
    /// Length of one simulation tick (s)
    pub timestep: f64,
    /// World-frame gravitational acceleration, z up (m/s²)
    pub gravity: Vector3<f64>,
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        Self {
            timestep: DEFAULT_TIMESTEP,
            gravity: Vector3::new(0.0, 0.0, -GRAVITY),
        }
    }
}

impl PhysicsConfig {
    pub fn with_timestep(timestep: f64) -> Self {
        Self {
            timestep,
            ..Default::default()
        }
    }
}
