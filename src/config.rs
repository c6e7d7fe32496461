//! Router configuration
//!
//! Supports multiple profiles (debug, release) with different settings.

use std::path::PathBuf;

use config::{Config, ConfigError, Environment, File};
use serde::{Deserialize, Serialize};

use crate::input::{DeviceClassifier, RepeatPolicy};

/// Auto-repeat timing in seconds
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RepeatConfig {
    /// Delay before a held input starts repeating
    pub initial_delay: f32,
    /// Interval between repeats
    pub repeat_interval: f32,
}

/// Input router configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RouterConfig {
    /// The active profile (debug, release, etc.)
    pub profile: String,
    pub repeat: RepeatConfig,
    /// Stick deflection in `[0, 1]` treated as a digital direction
    pub analog_threshold: f32,
    /// Whether this platform has pointer input
    pub pointer_enabled: bool,
}

impl RouterConfig {
    /// Loads configuration based on the specified profile
    ///
    /// Sources, later ones overriding earlier ones:
    /// 1. Built-in defaults
    /// 2. config/{profile}.toml
    /// 3. Environment variables with prefix INPUT_ (e.g., INPUT_REPEAT__INITIAL_DELAY=0.3)
    ///
    /// Config files are searched for next to the executable, then in ./config
    pub fn load(profile: &str) -> Result<Self, ConfigError> {
        let mut builder = Config::builder()
            .set_default(
                "repeat.initial_delay",
                f64::from(RepeatPolicy::DEFAULT_INITIAL_DELAY),
            )?
            .set_default(
                "repeat.repeat_interval",
                f64::from(RepeatPolicy::DEFAULT_REPEAT_INTERVAL),
            )?
            .set_default(
                "analog_threshold",
                f64::from(DeviceClassifier::DEFAULT_ANALOG_THRESHOLD),
            )?
            .set_default("pointer_enabled", true)?;

        builder = match Self::find_config_dir() {
            Some(dir) => {
                let profile_path = dir.join(profile);
                builder.add_source(File::from(profile_path.as_path()).required(false))
            }
            None => {
                builder.add_source(File::with_name(&format!("config/{profile}")).required(false))
            }
        };

        // Use __ as separator for nested fields (e.g., INPUT_REPEAT__REPEAT_INTERVAL)
        builder = builder.add_source(
            Environment::with_prefix("INPUT")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        builder
            .set_override("profile", profile)?
            .build()?
            .try_deserialize()
    }

    /// Loads configuration using the INPUT_PROFILE environment variable,
    /// defaulting to "release"
    pub fn load_from_env() -> Result<Self, ConfigError> {
        let profile = std::env::var("INPUT_PROFILE").unwrap_or_else(|_| "release".to_string());
        Self::load(&profile)
    }

    /// Finds the config directory by searching in multiple locations
    fn find_config_dir() -> Option<PathBuf> {
        if let Ok(exe_path) = std::env::current_exe()
            && let Some(exe_dir) = exe_path.parent()
        {
            let config_dir = exe_dir.join("config");
            if config_dir.exists() {
                return Some(config_dir);
            }
        }

        let cwd_config = PathBuf::from("config");
        cwd_config.exists().then_some(cwd_config)
    }

    /// Repeat timing with negative durations clamped to zero
    pub fn repeat_policy(&self) -> RepeatPolicy {
        RepeatPolicy::new(self.repeat.initial_delay, self.repeat.repeat_interval)
    }

    /// Classifier with the threshold clamped into `[0, 1]`
    pub fn classifier(&self) -> DeviceClassifier {
        DeviceClassifier::new(self.analog_threshold)
    }
}

impl Default for RouterConfig {
    fn default() -> Self {
        Self {
            profile: "release".to_string(),
            repeat: RepeatConfig {
                initial_delay: RepeatPolicy::DEFAULT_INITIAL_DELAY,
                repeat_interval: RepeatPolicy::DEFAULT_REPEAT_INTERVAL,
            },
            analog_threshold: DeviceClassifier::DEFAULT_ANALOG_THRESHOLD,
            pointer_enabled: true,
        }
    }
}
