//! # RC Command Frame
//!
//! Constants and types for the 8-channel RC command frame consumed by the
//! flight controller.
//!
//! ## Channel Assignments
//!
//! | Channel | Function | Center |
//! |---------|----------|--------|
//! | 0 | Roll | 1500 |
//! | 1 | Pitch | 1500 |
//! | 2 | Throttle | 1300 |
//! | 3 | Yaw | 1500 |
//! | 4 | Flight mode | 1150 / 1650 |
//! | 5 | Option 1 | reserved, always 0 |
//! | 6 | Option 2 | reserved, always 0 |
//! | 7 | Option 3 | reserved, always 0 |
//!
//! Channel values follow the standard RC pulse-width convention of
//! [1000, 2000] microseconds. The throttle center sits at 1300 rather than
//! 1500: throttle is idle-biased, not symmetric around hover.

use serde::{Deserialize, Serialize};

/// Number of channels in an RC command frame
pub const RC_NUM_CHANNELS: usize = 8;

/// Lower bound of the RC pulse-width convention
pub const RC_PULSE_MIN: i32 = 1000;

/// Upper bound of the RC pulse-width convention
pub const RC_PULSE_MAX: i32 = 2000;

/// Center pulse for the symmetric sticks (roll, pitch, yaw)
pub const STICK_CENTER: f64 = 1500.0;

/// Center pulse for throttle (idle-biased)
pub const THROTTLE_CENTER: f64 = 1300.0;

/// Mode channel pulse for stabilize mode
pub const MODE_STABILIZE: i32 = 1150;

/// Mode channel pulse for altitude-hold mode
pub const MODE_ALT_HOLD: i32 = 1650;

/// Channel indices for semantic access.
pub mod channels {
    /// Roll stick
    pub const ROLL: usize = 0;
    /// Pitch stick
    pub const PITCH: usize = 1;
    /// Throttle stick
    pub const THROTTLE: usize = 2;
    /// Yaw stick
    pub const YAW: usize = 3;
    /// Flight mode switch
    pub const MODE: usize = 4;
    /// Reserved option output
    pub const OPTION1: usize = 5;
    /// Reserved option output
    pub const OPTION2: usize = 6;
    /// Reserved option output
    pub const OPTION3: usize = 7;
}

/// One RC command frame.
///
/// Created, fully populated, and handed off in a single
/// [`Mapper::map`](crate::mapper::Mapper::map) call; nothing is retained
/// between calls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RcCommand {
    /// The 8 channel values.
    pub channel: [i32; RC_NUM_CHANNELS],
}
