use nalgebra::{UnitQuaternion, Vector3};

use crate::components::ReferenceFrame;

/// The rigid body a flight controller drives.
///
/// The host physics engine owns mass, integration and collision; the flight
/// model only reads kinematics and submits forces and torques.
pub trait PhysicalBody {
    /// World position, z up (m).
    fn position(&self) -> Vector3<f64>;
    /// World linear velocity (m/s).
    fn velocity(&self) -> Vector3<f64>;
    /// Rotation from body to world frame.
    fn attitude(&self) -> UnitQuaternion<f64>;
    fn on_ground(&self) -> bool;

    /// Applies a force through the centre of mass.
    fn apply_force(&mut self, force: Vector3<f64>, frame: ReferenceFrame);
    /// Applies a world-frame force at a world-frame point.
    fn apply_force_at_point(&mut self, force: Vector3<f64>, point: Vector3<f64>);
    /// Applies a body-frame torque.
    fn apply_torque(&mut self, torque: Vector3<f64>);

    fn altitude(&self) -> f64 {
        self.position().z
    }

    fn velocity_body(&self) -> Vector3<f64> {
        self.attitude().inverse_transform_vector(&self.velocity())
    }

    /// Converts a body-frame offset from the centre of mass to a world point.
    fn body_to_world_point(&self, offset: &Vector3<f64>) -> Vector3<f64> {
        self.position() + self.attitude().transform_vector(offset)
    }
}
