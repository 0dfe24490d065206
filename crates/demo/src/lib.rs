//! Demonstration entry point: configuration plus a fixed inventory scenario.

pub mod config;
pub mod scenario;

pub use config::DemoConfig;
