use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

use crate::components::{
    AircraftConfig, AircraftDefinition, AutopilotTarget, EngineId, EngineMounts, PropulsionState,
    ReferenceFrame,
};
use crate::physics::PhysicalBody;
use crate::systems::{
    engine_thrust_vector, enforce_power_interlock, total_thrust, update_battery, update_fuel,
    AeroModel, AerodynamicResult, AirDataValues,
};

/// Discrete pilot input, applied off the physics clock.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum FlightCommand {
    ToggleEngine(EngineId),
    ToggleApu,
    ToggleAutopilot,
    SetThrottle(f64),
    AdjustThrottle(f64),
}

/// What a single tick did.
#[derive(Debug, Clone, PartialEq)]
pub struct TickReport {
    pub fuel_burned: f64,
    pub total_thrust: f64,
    pub air_data: AirDataValues,
    /// `None` when the aerodynamic result was rejected for this tick
    pub aero: Option<AerodynamicResult>,
    pub autopilot_disengaged: bool,
}

/// Owns propulsion, power and autopilot state and drives a `PhysicalBody`.
#[derive(Component, Debug, Clone)]
pub struct FlightController {
    config: AircraftConfig,
    engines: EngineMounts,
    state: PropulsionState,
    target: AutopilotTarget,
    pending: VecDeque<FlightCommand>,
    rejected_aero_ticks: u64,
}

impl FlightController {
    pub fn new(config: AircraftConfig, engines: EngineMounts, state: PropulsionState) -> Self {
        Self {
            config,
            engines,
            state,
            target: AutopilotTarget::default(),
            pending: VecDeque::new(),
            rejected_aero_ticks: 0,
        }
    }

    pub fn from_definition(definition: &AircraftDefinition) -> Self {
        Self::new(
            definition.aircraft.clone(),
            definition.engines.clone(),
            PropulsionState::new(
                definition.initial_fuel_mass,
                definition.initial_battery_charge,
            ),
        )
    }

    pub fn config(&self) -> &AircraftConfig {
        &self.config
    }

    pub fn engines(&self) -> &EngineMounts {
        &self.engines
    }

    pub fn state(&self) -> &PropulsionState {
        &self.state
    }

    pub fn target(&self) -> &AutopilotTarget {
        &self.target
    }

    pub fn aero_model(&self) -> AeroModel<'_> {
        AeroModel::new(&self.config)
    }

    /// Number of ticks whose aerodynamic contribution was discarded.
    pub fn rejected_aero_ticks(&self) -> u64 {
        self.rejected_aero_ticks
    }

    pub fn pending_commands(&self) -> usize {
        self.pending.len()
    }

    /// Defers a command to the start of the next tick.
    pub fn queue_command(&mut self, command: FlightCommand) {
        self.pending.push_back(command);
    }

    /// Applies a command now, reading body state for any autopilot capture.
    pub fn apply_command<B: PhysicalBody + ?Sized>(&mut self, command: FlightCommand, body: &B) {
        match command {
            FlightCommand::ToggleEngine(engine) => self.state.toggle_engine(engine),
            FlightCommand::ToggleApu => self.state.apu_on = !self.state.apu_on,
            FlightCommand::ToggleAutopilot => {
                self.state.autopilot_on = !self.state.autopilot_on;
                if self.state.autopilot_on {
                    self.target = AutopilotTarget::capture(body.altitude(), body.velocity());
                    info!(
                        "Autopilot engaged: holding altitude {:.1} m, velocity {:?}",
                        self.target.altitude, self.target.velocity
                    );
                }
            }
            FlightCommand::SetThrottle(throttle) => self.state.set_throttle(throttle),
            FlightCommand::AdjustThrottle(delta) => self.state.adjust_throttle(delta),
        }
    }

    /// Advances propulsion, power and autopilot by `dt` seconds and submits
    /// thrust, aerodynamic and autopilot loads to `body`.
    pub fn tick<B: PhysicalBody + ?Sized>(&mut self, body: &mut B, dt: f64) -> TickReport {
        while let Some(command) = self.pending.pop_front() {
            self.apply_command(command, body);
        }

        let fuel_burned = update_fuel(&mut self.state, &self.config, dt);
        update_battery(&mut self.state, &self.config, body.on_ground(), dt);

        let autopilot_disengaged = enforce_power_interlock(&mut self.state);
        if autopilot_disengaged {
            info!("Battery depleted, autopilot disengaged");
        }

        self.apply_thrust(body);

        let model = AeroModel::new(&self.config);
        let air_data = model.air_data(&body.velocity_body(), body.altitude());
        let aero = match model.compute_with_air_data(&air_data).validate() {
            Ok(result) => {
                body.apply_force(result.force, ReferenceFrame::Body);
                body.apply_torque(result.moment);
                Some(result)
            }
            Err(e) => {
                self.rejected_aero_ticks += 1;
                warn!("Skipping aerodynamic contribution for this tick: {}", e);
                None
            }
        };

        if self.state.autopilot_on {
            self.apply_autopilot(body);
        }

        TickReport {
            fuel_burned,
            total_thrust: total_thrust(&self.config, &self.state),
            air_data,
            aero,
            autopilot_disengaged,
        }
    }

    fn apply_thrust<B: PhysicalBody + ?Sized>(&self, body: &mut B) {
        let thrust_world = body
            .attitude()
            .transform_vector(&engine_thrust_vector(&self.config, &self.state));

        for engine in self.state.running_engines() {
            let point = body.body_to_world_point(&self.engines.position(engine));
            body.apply_force_at_point(thrust_world, point);
        }
    }

    fn apply_autopilot<B: PhysicalBody + ?Sized>(&self, body: &mut B) {
        let altitude_hold = self.target.altitude_correction(body.altitude());
        let velocity_hold = self.target.velocity_correction(&body.velocity());
        body.apply_force(altitude_hold, ReferenceFrame::Inertial);
        body.apply_force(velocity_hold, ReferenceFrame::Inertial);
    }
}

impl Default for FlightController {
    fn default() -> Self {
        Self::from_definition(&AircraftDefinition::default())
    }
}
