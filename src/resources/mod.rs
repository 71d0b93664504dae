pub mod config;

pub use config::physics::PhysicsConfig;
