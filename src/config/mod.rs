//! Configuration loading and management for the Tardiness Engine.
//!
//! This module loads institutional policy settings (cutoff, timezone and
//! submission policy) from a YAML file.
//!
//! # Example
//!
//! ```no_run
//! use tardiness_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/policy.yaml").unwrap();
//! println!("Cutoff: {}", config.cutoff());
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{PolicyFile, PolicySettings, PolicyView};
