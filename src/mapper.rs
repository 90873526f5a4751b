//! # Joystick-to-RC Mapper Module
//!
//! The core transform of the crate: one normalized joystick sample in, one
//! 8-channel RC command frame out.
//!
//! ## Transform
//!
//! | Channel | Value |
//! |---------|-------|
//! | 0 (roll) | trunc(1500 + scale_roll * axes[axis_roll]) |
//! | 1 (pitch) | trunc(1500 + scale_pitch * axes[axis_pitch]) |
//! | 2 (throttle) | trunc(1300 + scale_throttle * axes[axis_throttle]) |
//! | 3 (yaw) | trunc(1500 + scale_yaw * axes[axis_yaw]) |
//! | 4 (mode) | 1150 (stabilize) or 1650 (altitude hold) |
//! | 5-7 | 0 (reserved) |
//!
//! The mode is re-read from `buttons[mode_select]` on every call: 1 selects
//! altitude hold, 0 selects stabilize, and any other value falls back to
//! stabilize, the most conservative flight mode. There is no persistent mode
//! state and no hysteresis.
//!
//! Fractional channel values are truncated toward zero when narrowed to an
//! integer, not rounded to nearest. Changing this would shift output by up to
//! one pulse unit near center.
//!
//! ## Usage
//!
//! ```
//! use joy2rc::config::MappingConfig;
//! use joy2rc::joystick::JoystickSample;
//! use joy2rc::mapper::Mapper;
//!
//! let mut config = MappingConfig::default();
//! config.scale_roll = 100.0;
//!
//! let sample = JoystickSample {
//!     axes: vec![0.0, 0.5, 0.0, 0.0, 0.0],
//!     buttons: vec![0, 0, 0, 0, 0, 0],
//! };
//!
//! let mapper = Mapper::new(config);
//! let command = mapper.map(&sample)?;
//! assert_eq!(command.channel[0], 1550);
//! # Ok::<(), joy2rc::error::Joy2RcError>(())
//! ```

use crate::config::MappingConfig;
use crate::error::Result;
use crate::joystick::JoystickSample;
use crate::rc::{
    channels, RcCommand, MODE_ALT_HOLD, MODE_STABILIZE, RC_NUM_CHANNELS, STICK_CENTER,
    THROTTLE_CENTER,
};

/// Maps joystick samples to RC command frames.
///
/// Holds the immutable [`MappingConfig`] for the process lifetime and exposes
/// a single stateless transform, [`map`](Mapper::map). Identical inputs
/// always produce identical output.
#[derive(Debug, Clone)]
pub struct Mapper {
    config: MappingConfig,
}

impl Mapper {
    /// Creates a mapper from a mapping configuration.
    #[must_use]
    pub fn new(config: MappingConfig) -> Self {
        Self { config }
    }

    /// Maps one joystick sample to one RC command frame.
    ///
    /// # Errors
    ///
    /// Returns [`IndexOutOfRange`](crate::error::Joy2RcError::IndexOutOfRange)
    /// if the sample carries fewer axes or buttons than the configured
    /// indices require. The caller is expected to drop the sample and keep
    /// the session running.
    pub fn map(&self, sample: &JoystickSample) -> Result<RcCommand> {
        let cfg = &self.config;
        let mut channel = [0i32; RC_NUM_CHANNELS];

        // Mode first. An unrecognized button value degrades to stabilize
        // rather than failing.
        channel[channels::MODE] = match sample.button(cfg.mode_select)? {
            0 => MODE_STABILIZE,
            1 => MODE_ALT_HOLD,
            _ => MODE_STABILIZE,
        };

        channel[channels::ROLL] =
            scale_axis(STICK_CENTER, cfg.scale_roll, sample.axis(cfg.axis_roll)?);
        channel[channels::PITCH] =
            scale_axis(STICK_CENTER, cfg.scale_pitch, sample.axis(cfg.axis_pitch)?);
        channel[channels::THROTTLE] = scale_axis(
            THROTTLE_CENTER,
            cfg.scale_throttle,
            sample.axis(cfg.axis_throttle)?,
        );
        channel[channels::YAW] =
            scale_axis(STICK_CENTER, cfg.scale_yaw, sample.axis(cfg.axis_yaw)?);

        // Channels 5-7 are reserved option outputs, always 0.

        Ok(RcCommand { channel })
    }
}

/// Scales a normalized axis deflection around a channel center pulse.
///
/// The `as` cast truncates toward zero when narrowing to an integer,
/// deliberately not round-to-nearest.
#[inline]
fn scale_axis(center: f64, scale: f64, value: f64) -> i32 {
    (center + scale * value) as i32
}
