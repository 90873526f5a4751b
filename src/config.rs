//! # Configuration Module
//!
//! Handles loading and validating configuration from TOML files.
//!
//! Every key falls back to a compiled-in default when missing, so a partial
//! (or entirely absent) file never fails to load. Validation, on the other
//! hand, is strict: a configured index that cannot possibly resolve against
//! the expected joystick layout is rejected before any sample is processed.

use serde::de::Error;
use serde::Deserialize;
use std::fs;
use std::path::Path;

use crate::error::Result;

/// Main configuration structure
#[derive(Debug, Deserialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub mapping: MappingConfig,

    #[serde(default)]
    pub joystick: JoystickConfig,
}

/// Axis/button assignments and scale factors for the mapper.
///
/// Axis indices point into the sample's `axes` sequence, `mode_select` into
/// its `buttons` sequence. Scale factors convert a normalized axis value in
/// [-1, 1] into a channel deflection around the channel's center pulse.
#[derive(Debug, Deserialize, Clone)]
pub struct MappingConfig {
    #[serde(default = "default_axis_roll")]
    pub axis_roll: usize,

    #[serde(default = "default_axis_pitch")]
    pub axis_pitch: usize,

    #[serde(default = "default_axis_throttle")]
    pub axis_throttle: usize,

    #[serde(default = "default_axis_yaw")]
    pub axis_yaw: usize,

    #[serde(default = "default_scale")]
    pub scale_roll: f64,

    #[serde(default = "default_scale")]
    pub scale_pitch: f64,

    #[serde(default = "default_scale")]
    pub scale_throttle: f64,

    #[serde(default = "default_scale")]
    pub scale_yaw: f64,

    #[serde(default = "default_mode_select")]
    pub mode_select: usize,
}

/// Expected joystick layout, used for startup validation of the configured
/// indices. The input source must deliver samples with at least this many
/// axes and buttons.
#[derive(Debug, Deserialize, Clone)]
pub struct JoystickConfig {
    #[serde(default = "default_expected_axes")]
    pub expected_axes: usize,

    #[serde(default = "default_expected_buttons")]
    pub expected_buttons: usize,
}

// Default value functions
fn default_axis_roll() -> usize { 1 }
fn default_axis_pitch() -> usize { 2 }
fn default_axis_throttle() -> usize { 3 }
fn default_axis_yaw() -> usize { 4 }
fn default_scale() -> f64 { 0.0 }
fn default_mode_select() -> usize { 5 }

fn default_expected_axes() -> usize { 5 }
fn default_expected_buttons() -> usize { 6 }

impl Default for MappingConfig {
    fn default() -> Self {
        Self {
            axis_roll: default_axis_roll(),
            axis_pitch: default_axis_pitch(),
            axis_throttle: default_axis_throttle(),
            axis_yaw: default_axis_yaw(),
            scale_roll: default_scale(),
            scale_pitch: default_scale(),
            scale_throttle: default_scale(),
            scale_yaw: default_scale(),
            mode_select: default_mode_select(),
        }
    }
}

impl Default for JoystickConfig {
    fn default() -> Self {
        Self {
            expected_axes: default_expected_axes(),
            expected_buttons: default_expected_buttons(),
        }
    }
}

impl Config {
    /// Load configuration from a TOML file
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the configuration file
    ///
    /// # Returns
    ///
    /// * `Result<Config>` - Loaded and validated configuration
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - File cannot be read
    /// - TOML parsing fails
    /// - Validation fails
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use joy2rc::config::Config;
    ///
    /// let config = Config::load("config/default.toml")?;
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        let config: Config = toml::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration values
    ///
    /// # Errors
    ///
    /// Returns error if a configured index cannot resolve against the
    /// expected joystick layout, or a scale factor would push a channel
    /// outside the RC pulse convention.
    pub fn validate(&self) -> Result<()> {
        // Every configured axis index must resolve against the expected layout
        for (name, index) in [
            ("axis_roll", self.mapping.axis_roll),
            ("axis_pitch", self.mapping.axis_pitch),
            ("axis_throttle", self.mapping.axis_throttle),
            ("axis_yaw", self.mapping.axis_yaw),
        ] {
            if index >= self.joystick.expected_axes {
                return Err(crate::error::Joy2RcError::Config(toml::de::Error::custom(
                    format!(
                        "{} = {} is out of range for a joystick with {} axes",
                        name, index, self.joystick.expected_axes
                    ),
                )));
            }
        }

        if self.mapping.mode_select >= self.joystick.expected_buttons {
            return Err(crate::error::Joy2RcError::Config(toml::de::Error::custom(
                format!(
                    "mode_select = {} is out of range for a joystick with {} buttons",
                    self.mapping.mode_select, self.joystick.expected_buttons
                ),
            )));
        }

        // Scale bounds keep every channel inside the [1000, 2000] pulse
        // convention: 1500 +/- 500 for the symmetric sticks, 1300 - 300 to
        // 1300 + 700 for the idle-biased throttle.
        for (name, value) in [
            ("scale_roll", self.mapping.scale_roll),
            ("scale_pitch", self.mapping.scale_pitch),
            ("scale_yaw", self.mapping.scale_yaw),
        ] {
            if !(-500.0..=500.0).contains(&value) {
                return Err(crate::error::Joy2RcError::Config(toml::de::Error::custom(
                    format!("{} must be between -500 and 500", name),
                )));
            }
        }

        if !(-300.0..=700.0).contains(&self.mapping.scale_throttle) {
            return Err(crate::error::Joy2RcError::Config(toml::de::Error::custom(
                "scale_throttle must be between -300 and 700",
            )));
        }

        Ok(())
    }
}
