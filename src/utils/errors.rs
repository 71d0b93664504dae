use nalgebra::Vector3;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum FlightError {
    #[error("Non-finite aerodynamic output: force {force:?}, moment {moment:?}")]
    NonFiniteAerodynamics {
        force: Vector3<f64>,
        moment: Vector3<f64>,
    },

    #[error("Config error: {0}")]
    InvalidConfig(String),
}

pub type Result<T> = std::result::Result<T, FlightError>;
