use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

use crate::utils::{FlightError, Result, SEA_LEVEL_AIR_DENSITY};

/// Fixed aircraft coefficients shared by the aero model and the flight controller.
///
/// All values are set once at construction and never mutated by the simulation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AircraftConfig {
    /// Reference wing area (m²).
    pub wing_area: f64,
    /// Wing span (m).
    pub wing_span: f64,
    /// Mean aerodynamic chord (m).
    pub mean_chord: f64,
    /// Air density at zero altitude (kg/m³).
    pub sea_level_air_density: f64,
    /// Angle of attack at which lift collapses to zero (rad).
    pub stall_angle: f64,
    /// Lift curve slope (1/rad).
    pub lift_slope: f64,
    /// Oswald span efficiency factor.
    pub oswald_efficiency: f64,
    /// Parasitic drag coefficient at zero lift.
    pub zero_lift_drag: f64,
    /// Maximum thrust of a single engine (N).
    pub max_engine_thrust: f64,
    /// Fuel burned per unit of impulse (kg per N·s).
    pub fuel_consumption_rate: f64,
    /// Battery drain while the autopilot is engaged (%/s).
    pub battery_drain_rate: f64,
    /// Battery charge while the APU runs on the ground (%/s).
    pub battery_charge_rate: f64,
}

impl Default for AircraftConfig {
    fn default() -> Self {
        Self {
            wing_area: 124.0,
            wing_span: 34.3,
            mean_chord: 4.3,
            sea_level_air_density: SEA_LEVEL_AIR_DENSITY,
            stall_angle: 15.0_f64.to_radians(),
            lift_slope: 2.0 * PI,
            oswald_efficiency: 0.85,
            zero_lift_drag: 0.02,
            max_engine_thrust: 200_000.0,
            fuel_consumption_rate: 0.0001,
            battery_drain_rate: 1.0,
            battery_charge_rate: 1.0,
        }
    }
}

impl AircraftConfig {
    /// Wing aspect ratio, b² / S.
    pub fn aspect_ratio(&self) -> f64 {
        self.wing_span.powi(2) / self.wing_area
    }

    /// Checks the coefficients describe a physically meaningful aircraft.
    pub fn validate(&self) -> Result<()> {
        let positive = [
            ("wing_area", self.wing_area),
            ("wing_span", self.wing_span),
            ("mean_chord", self.mean_chord),
            ("sea_level_air_density", self.sea_level_air_density),
            ("oswald_efficiency", self.oswald_efficiency),
            ("max_engine_thrust", self.max_engine_thrust),
        ];
        for (name, value) in positive {
            if !value.is_finite() || value <= 0.0 {
                return Err(FlightError::InvalidConfig(format!(
                    "{} must be positive and finite, got {}",
                    name, value
                )));
            }
        }

        let non_negative = [
            ("zero_lift_drag", self.zero_lift_drag),
            ("fuel_consumption_rate", self.fuel_consumption_rate),
            ("battery_drain_rate", self.battery_drain_rate),
            ("battery_charge_rate", self.battery_charge_rate),
        ];
        for (name, value) in non_negative {
            if !value.is_finite() || value < 0.0 {
                return Err(FlightError::InvalidConfig(format!(
                    "{} must be non-negative and finite, got {}",
                    name, value
                )));
            }
        }

        if !self.stall_angle.is_finite() || !self.lift_slope.is_finite() {
            return Err(FlightError::InvalidConfig(
                "stall_angle and lift_slope must be finite".to_string(),
            ));
        }

        Ok(())
    }
}
