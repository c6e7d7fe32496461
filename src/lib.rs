//! UI Input Router
//!
//! Per-frame input abstraction for interactive applications, built on winit.

/// Router configuration (profiles, environment overrides)
pub mod config;

/// Device sampling, edge detection, auto-repeat and event routing
pub mod input;

pub use config::RouterConfig;
pub use input::{InputCollector, InputRouter, UiHost, UiRoot};
