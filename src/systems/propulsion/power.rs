use crate::components::{AircraftConfig, PropulsionState};
use crate::utils::{BATTERY_EMPTY, BATTERY_FULL};

/// Drains the battery while the autopilot is engaged and charges it while the
/// APU runs on the ground. Both apply when both conditions hold.
pub fn update_battery(
    state: &mut PropulsionState,
    config: &AircraftConfig,
    on_ground: bool,
    dt: f64,
) {
    if state.autopilot_on {
        state.battery_charge =
            (state.battery_charge - config.battery_drain_rate * dt).max(BATTERY_EMPTY);
    }
    if state.apu_on && on_ground {
        state.battery_charge =
            (state.battery_charge + config.battery_charge_rate * dt).min(BATTERY_FULL);
    }
}

/// Switches the autopilot off when the battery is flat.
///
/// Returns true only when this call disengaged an engaged autopilot.
pub fn enforce_power_interlock(state: &mut PropulsionState) -> bool {
    if state.battery_depleted() && state.autopilot_on {
        state.autopilot_on = false;
        return true;
    }
    false
}
