use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

use crate::components::EngineId;

/// Engine attachment points, as body-frame offsets from the centre of mass (m).
///
/// Body axes are x forward, y left, z up, so the left engine sits at +y.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineMounts {
    pub left: Vector3<f64>,
    pub right: Vector3<f64>,
}

impl Default for EngineMounts {
    fn default() -> Self {
        Self::twin(2.5, 5.8, -1.4)
    }
}

impl EngineMounts {
    /// Creates a symmetric pair of mounts either side of the fuselage.
    pub fn twin(x_offset: f64, y_offset: f64, z_offset: f64) -> Self {
        Self {
            left: Vector3::new(x_offset, y_offset, z_offset),
            right: Vector3::new(x_offset, -y_offset, z_offset),
        }
    }

    pub fn position(&self, engine: EngineId) -> Vector3<f64> {
        match engine {
            EngineId::Left => self.left,
            EngineId::Right => self.right,
        }
    }
}
