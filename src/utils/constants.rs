pub const GRAVITY: f64 = 9.80665; // m/s^2
pub const SEA_LEVEL_AIR_DENSITY: f64 = 1.225; // kg/m^3

/// Scale height of the exponential density model (m).
pub const DENSITY_SCALE_HEIGHT: f64 = 8500.0;

// Linearised lateral and moment terms of the aero model
pub const SIDE_FORCE_SLOPE: f64 = 0.9; // per rad of sideslip
pub const PITCH_MOMENT_ARM: f64 = 0.25; // fraction of mean chord
pub const ROLL_MOMENT_FACTOR: f64 = 0.1; // fraction of mean chord
pub const YAW_MOMENT_FACTOR: f64 = 0.1; // fraction of wing span

// Power system bounds
pub const BATTERY_EMPTY: f64 = 0.0; // %
pub const BATTERY_FULL: f64 = 100.0; // %

pub const DEFAULT_TIMESTEP: f64 = 1.0 / 120.0; // s
