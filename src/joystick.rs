//! # Joystick Sample Module
//!
//! The normalized sample delivered by the external joystick source.
//!
//! Axes arrive as floats in [-1.0, 1.0] and buttons as 0/1 integers, both
//! indexed positionally; which position means what is decided entirely by
//! [`MappingConfig`](crate::config::MappingConfig). Access goes through
//! bounds-checked accessors so a misconfigured or misbehaving source surfaces
//! a named [`IndexOutOfRange`](crate::error::Joy2RcError::IndexOutOfRange)
//! error instead of a panic.

use serde::Deserialize;

use crate::error::{InputKind, Joy2RcError, Result};

/// One normalized joystick sample.
///
/// # Examples
///
/// ```
/// use joy2rc::joystick::JoystickSample;
///
/// let sample: JoystickSample =
///     serde_json::from_str(r#"{"axes": [0.0, 0.5], "buttons": [1]}"#)?;
/// assert_eq!(sample.axis(1)?, 0.5);
/// assert_eq!(sample.button(0)?, 1);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct JoystickSample {
    /// Axis values in [-1.0, 1.0], indexed positionally.
    #[serde(default)]
    pub axes: Vec<f64>,

    /// Button states (0 or 1), indexed positionally.
    #[serde(default)]
    pub buttons: Vec<i32>,
}

impl JoystickSample {
    /// Returns the axis value at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`Joy2RcError::IndexOutOfRange`] if the sample carries fewer
    /// than `index + 1` axes.
    pub fn axis(&self, index: usize) -> Result<f64> {
        self.axes
            .get(index)
            .copied()
            .ok_or(Joy2RcError::IndexOutOfRange {
                kind: InputKind::Axis,
                index,
                len: self.axes.len(),
            })
    }

    /// Returns the button state at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`Joy2RcError::IndexOutOfRange`] if the sample carries fewer
    /// than `index + 1` buttons.
    pub fn button(&self, index: usize) -> Result<i32> {
        self.buttons
            .get(index)
            .copied()
            .ok_or(Joy2RcError::IndexOutOfRange {
                kind: InputKind::Button,
                index,
                len: self.buttons.len(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_axis_in_bounds() {
        let sample = JoystickSample {
            axes: vec![0.0, -0.25, 1.0],
            buttons: vec![],
        };
        assert_eq!(sample.axis(0).unwrap(), 0.0);
        assert_eq!(sample.axis(1).unwrap(), -0.25);
        assert_eq!(sample.axis(2).unwrap(), 1.0);
    }

    #[test]
    fn test_axis_out_of_bounds() {
        let sample = JoystickSample {
            axes: vec![0.0, 0.0],
            buttons: vec![],
        };
        match sample.axis(2) {
            Err(Joy2RcError::IndexOutOfRange { kind, index, len }) => {
                assert_eq!(kind, InputKind::Axis);
                assert_eq!(index, 2);
                assert_eq!(len, 2);
            }
            other => panic!("expected IndexOutOfRange, got {:?}", other),
        }
    }

    #[test]
    fn test_button_in_bounds() {
        let sample = JoystickSample {
            axes: vec![],
            buttons: vec![0, 1],
        };
        assert_eq!(sample.button(0).unwrap(), 0);
        assert_eq!(sample.button(1).unwrap(), 1);
    }

    #[test]
    fn test_button_out_of_bounds() {
        let sample = JoystickSample::default();
        match sample.button(5) {
            Err(Joy2RcError::IndexOutOfRange { kind, index, len }) => {
                assert_eq!(kind, InputKind::Button);
                assert_eq!(index, 5);
                assert_eq!(len, 0);
            }
            other => panic!("expected IndexOutOfRange, got {:?}", other),
        }
    }

    #[test]
    fn test_deserialize_missing_fields_default_to_empty() {
        let sample: JoystickSample = serde_json::from_str("{}").unwrap();
        assert!(sample.axes.is_empty());
        assert!(sample.buttons.is_empty());
    }

    #[test]
    fn test_deserialize_full_sample() {
        let sample: JoystickSample =
            serde_json::from_str(r#"{"axes": [0.0, 1.0, -1.0], "buttons": [0, 1]}"#).unwrap();
        assert_eq!(sample.axes, vec![0.0, 1.0, -1.0]);
        assert_eq!(sample.buttons, vec![0, 1]);
    }
}
