use nalgebra::{UnitQuaternion, Vector3};

use super::PhysicalBody;
use crate::components::{Force, Moment, PhysicsComponent, ReferenceFrame, SpatialComponent};

/// `PhysicalBody` view over an entity's spatial state and force accumulator.
pub struct BodyHandle<'a> {
    spatial: &'a SpatialComponent,
    physics: &'a mut PhysicsComponent,
    on_ground: bool,
}

impl<'a> BodyHandle<'a> {
    pub fn new(
        spatial: &'a SpatialComponent,
        physics: &'a mut PhysicsComponent,
        on_ground: bool,
    ) -> Self {
        Self {
            spatial,
            physics,
            on_ground,
        }
    }
}

impl PhysicalBody for BodyHandle<'_> {
    fn position(&self) -> Vector3<f64> {
        self.spatial.position
    }

    fn velocity(&self) -> Vector3<f64> {
        self.spatial.velocity
    }

    fn attitude(&self) -> UnitQuaternion<f64> {
        self.spatial.attitude
    }

    fn on_ground(&self) -> bool {
        self.on_ground
    }

    fn apply_force(&mut self, force: Vector3<f64>, frame: ReferenceFrame) {
        self.physics.add_force(Force {
            vector: force,
            point: None,
            frame,
        });
    }

    fn apply_force_at_point(&mut self, force: Vector3<f64>, point: Vector3<f64>) {
        // The accumulator stores application points relative to the centre of mass
        let offset = self
            .spatial
            .attitude
            .inverse_transform_vector(&(point - self.spatial.position));
        self.physics.add_force(Force {
            vector: force,
            point: Some(offset),
            frame: ReferenceFrame::Inertial,
        });
    }

    fn apply_torque(&mut self, torque: Vector3<f64>) {
        self.physics.add_moment(Moment {
            vector: torque,
            frame: ReferenceFrame::Body,
        });
    }
}
