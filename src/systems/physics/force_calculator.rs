use bevy::prelude::*;
use nalgebra::{UnitQuaternion, Vector3};

use crate::components::{PhysicsComponent, ReferenceFrame, SpatialComponent};
use crate::resources::PhysicsConfig;

/// Folds the accumulated forces and moments into world-frame net values,
/// ready for the host integrator.
pub fn force_calculator_system(
    mut query: Query<(&mut PhysicsComponent, &SpatialComponent)>,
    config: Res<PhysicsConfig>,
) {
    for (mut physics, spatial) in query.iter_mut() {
        let (net_force, net_moment) =
            calculate_net_forces_moments(&physics, &spatial.attitude, &config.gravity);
        physics.net_force = net_force;
        physics.net_moment = net_moment;
    }
}

/// Net world-frame force (including gravity) and moment about the centre of mass.
pub fn calculate_net_forces_moments(
    physics: &PhysicsComponent,
    attitude: &UnitQuaternion<f64>,
    gravity: &Vector3<f64>,
) -> (Vector3<f64>, Vector3<f64>) {
    let mut net_force = gravity * physics.mass;
    let mut net_moment = Vector3::zeros();

    for force in &physics.forces {
        let force_inertial = match force.frame {
            ReferenceFrame::Body => attitude * force.vector,
            ReferenceFrame::Inertial => force.vector,
        };

        net_force += force_inertial;

        if let Some(point) = force.point {
            let point_inertial = attitude * point;
            net_moment += point_inertial.cross(&force_inertial);
        }
    }

    for moment in &physics.moments {
        net_moment += match moment.frame {
            ReferenceFrame::Body => attitude * moment.vector,
            ReferenceFrame::Inertial => moment.vector,
        };
    }

    (net_force, net_moment)
}
