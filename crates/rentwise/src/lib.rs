//! Household rent affordability and rental estimation calculators.

pub mod config;
pub mod error;
pub mod financial;
pub mod roll;
pub mod service;
pub mod telemetry;
