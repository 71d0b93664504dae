use nalgebra::Vector3;
use std::f64::consts::PI;

use super::air_data::{air_density, AirDataValues};
use crate::components::AircraftConfig;
use crate::utils::{
    FlightError, Result, PITCH_MOMENT_ARM, ROLL_MOMENT_FACTOR, SIDE_FORCE_SLOPE,
    YAW_MOMENT_FACTOR,
};

/// Aerodynamic force and moment in body axes for a single tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AerodynamicResult {
    /// (drag axis, side force, lift) along (forward, lateral, vertical)
    pub force: Vector3<f64>,
    /// (roll, pitch, yaw)
    pub moment: Vector3<f64>,
}

impl AerodynamicResult {
    pub fn zero() -> Self {
        Self {
            force: Vector3::zeros(),
            moment: Vector3::zeros(),
        }
    }

    pub fn is_finite(&self) -> bool {
        self.force.iter().chain(self.moment.iter()).all(|v| v.is_finite())
    }

    /// Rejects results carrying NaN or infinite components.
    pub fn validate(self) -> Result<Self> {
        if self.is_finite() {
            Ok(self)
        } else {
            Err(FlightError::NonFiniteAerodynamics {
                force: self.force,
                moment: self.moment,
            })
        }
    }
}

/// Stateless aerodynamic model over a fixed set of aircraft coefficients.
#[derive(Debug, Clone, Copy)]
pub struct AeroModel<'a> {
    config: &'a AircraftConfig,
}

impl<'a> AeroModel<'a> {
    pub fn new(config: &'a AircraftConfig) -> Self {
        Self { config }
    }

    pub fn air_density(&self, altitude: f64) -> f64 {
        air_density(self.config.sea_level_air_density, altitude)
    }

    pub fn air_data(&self, velocity_body: &Vector3<f64>, altitude: f64) -> AirDataValues {
        AirDataValues::calculate(velocity_body, altitude, self.config.sea_level_air_density)
    }

    /// Linear lift below the stall angle, none at or beyond it.
    pub fn lift_coefficient(&self, alpha: f64) -> f64 {
        if alpha < self.config.stall_angle {
            self.config.lift_slope * alpha
        } else {
            0.0
        }
    }

    /// Parasitic plus lift-induced drag.
    pub fn drag_coefficient(&self, c_l: f64) -> f64 {
        let induced =
            c_l.powi(2) / (PI * self.config.aspect_ratio() * self.config.oswald_efficiency);
        self.config.zero_lift_drag + induced
    }

    pub fn side_force_coefficient(&self, beta: f64) -> f64 {
        SIDE_FORCE_SLOPE * beta
    }

    /// Force and moment for the given body-frame velocity and world altitude.
    pub fn compute_forces(&self, velocity_body: &Vector3<f64>, altitude: f64) -> AerodynamicResult {
        self.compute_with_air_data(&self.air_data(velocity_body, altitude))
    }

    pub fn compute_with_air_data(&self, air_data: &AirDataValues) -> AerodynamicResult {
        let q_s = air_data.dynamic_pressure * self.config.wing_area;

        let c_l = self.lift_coefficient(air_data.alpha);
        let c_d = self.drag_coefficient(c_l);
        let c_y = self.side_force_coefficient(air_data.beta);

        let force = Vector3::new(-q_s * c_d, q_s * c_y, q_s * c_l);

        let moment = Vector3::new(
            air_data.beta * q_s * self.config.mean_chord * ROLL_MOMENT_FACTOR,
            -c_l * q_s * self.config.mean_chord * PITCH_MOMENT_ARM,
            -air_data.beta * q_s * self.config.wing_span * YAW_MOMENT_FACTOR,
        );

        AerodynamicResult { force, moment }
    }
}
