//! # joy2rc Library
//!
//! Bridge normalized joystick input to 8-channel RC command frames for an
//! autopilot flight controller.
//!
//! The core is a single stateless transform, [`mapper::Mapper::map`]: one
//! joystick sample in, one RC command frame out, driven by an immutable
//! configuration loaded once at startup. Everything else is plumbing around
//! that transform.

pub mod bridge;
pub mod config;
pub mod error;
pub mod joystick;
pub mod mapper;
pub mod rc;
pub mod transport;
