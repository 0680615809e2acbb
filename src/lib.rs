//! Wheel Spinner - a spinning "wheel of exercises"
//!
//! Core modules:
//! - `sim`: Deterministic wheel simulation (spin, segment lookup, countdown)
//! - `settings`: Tunable wheel parameters with JSON load/save

pub mod settings;
pub mod sim;

pub use settings::{LandingMode, Settings};
pub use sim::{TickInput, WheelEvent, WheelPhase, WheelState, tick};

use glam::Quat;

/// Wheel configuration constants
pub mod consts {
    /// Fixed simulation timestep used by the native driver (60 Hz, one tick per frame)
    pub const SIM_DT: f32 = 1.0 / 60.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;

    /// Initial angular velocity of a spin (degrees/s)
    pub const SPIN_SPEED: f32 = 500.0;
    /// Linear deceleration while spinning (degrees/s²)
    pub const DECELERATION_RATE: f32 = 50.0;

    /// Random total rotation picked per spin, guarantees several full turns
    pub const MIN_TARGET_ROTATION: f32 = 1080.0;
    pub const MAX_TARGET_ROTATION: f32 = 1800.0;

    /// Countdown length (seconds)
    pub const TIMER_DURATION: f32 = 60.0;

    pub const FULL_TURN: f32 = 360.0;
}

/// Normalize an angle in degrees to [0, 360)
#[inline]
pub fn normalize_degrees(angle: f32) -> f32 {
    let wrapped = (angle % consts::FULL_TURN + consts::FULL_TURN) % consts::FULL_TURN;
    // -1e-6 % 360 + 360 rounds to exactly 360.0 in f32
    if wrapped >= consts::FULL_TURN {
        0.0
    } else {
        wrapped
    }
}

/// Wheel orientation as a rotation about the Z axis (angle in degrees)
#[inline]
pub fn wheel_rotation(angle: f32) -> Quat {
    Quat::from_rotation_z(angle.to_radians())
}
