//! Configuration loading and management for the payroll engine.
//!
//! This module provides functionality to load engine configuration from a
//! YAML file, currently the supervision pooling settings.
//!
//! # Example
//!
//! ```no_run
//! use payroll_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/engine.yaml").unwrap();
//! println!("Supervision configured: {}", config.supervision().is_some());
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{EngineConfig, SupervisionConfig};
