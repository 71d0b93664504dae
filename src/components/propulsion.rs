use bevy::log::warn;
use serde::{Deserialize, Serialize};

use crate::utils::{BATTERY_EMPTY, BATTERY_FULL};

/// Identifies one of the two wing-mounted engines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EngineId {
    Left,
    Right,
}

impl EngineId {
    pub const ALL: [EngineId; 2] = [EngineId::Left, EngineId::Right];

    fn index(self) -> usize {
        match self {
            EngineId::Left => 0,
            EngineId::Right => 1,
        }
    }
}

/// Mutable propulsion, power and autopilot switch state of an aircraft.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PropulsionState {
    /// Power lever setting shared by both engines (0.0 to 1.0)
    pub throttle: f64,
    /// Running status of each engine, indexed by `EngineId`
    pub engines_on: [bool; 2],
    pub apu_on: bool,
    pub autopilot_on: bool,
    /// Fuel on board (kg), never negative
    pub fuel_mass: f64,
    /// Battery state of charge (%), within [0, 100]
    pub battery_charge: f64,
}

impl Default for PropulsionState {
    fn default() -> Self {
        Self::new(0.0, BATTERY_FULL)
    }
}

impl PropulsionState {
    /// Engines running, APU and autopilot off, throttle closed.
    pub fn new(fuel_mass: f64, battery_charge: f64) -> Self {
        Self {
            throttle: 0.0,
            engines_on: [true, true],
            apu_on: false,
            autopilot_on: false,
            fuel_mass: fuel_mass.max(0.0),
            battery_charge: battery_charge.clamp(BATTERY_EMPTY, BATTERY_FULL),
        }
    }

    pub fn engine_on(&self, engine: EngineId) -> bool {
        self.engines_on[engine.index()]
    }

    pub fn toggle_engine(&mut self, engine: EngineId) {
        let on = &mut self.engines_on[engine.index()];
        *on = !*on;
    }

    /// Engines currently running, in `EngineId::ALL` order.
    pub fn running_engines(&self) -> impl Iterator<Item = EngineId> + '_ {
        EngineId::ALL.into_iter().filter(|e| self.engine_on(*e))
    }

    /// Sets the throttle, clamped to [0, 1]. Non-finite input is ignored.
    pub fn set_throttle(&mut self, throttle: f64) {
        if !throttle.is_finite() {
            warn!("Ignoring non-finite throttle setting {}", throttle);
            return;
        }
        self.throttle = throttle.clamp(0.0, 1.0);
    }

    pub fn adjust_throttle(&mut self, delta: f64) {
        if !delta.is_finite() {
            warn!("Ignoring non-finite throttle adjustment {}", delta);
            return;
        }
        self.set_throttle(self.throttle + delta);
    }

    pub fn fuel_exhausted(&self) -> bool {
        self.fuel_mass <= 0.0
    }

    pub fn battery_depleted(&self) -> bool {
        self.battery_charge <= BATTERY_EMPTY
    }
}
