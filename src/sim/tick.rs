//! Per-frame wheel update
//!
//! The host calls `tick` once per frame with the elapsed time and any button
//! presses collected since the previous frame.

use super::state::WheelState;

/// Button presses for a single tick (one-shot)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    /// Spin button
    pub spin: bool,
    /// Reset button
    pub reset: bool,
    /// Start-timer button
    pub start_timer: bool,
}

impl TickInput {
    pub const SPIN: TickInput = TickInput {
        spin: true,
        reset: false,
        start_timer: false,
    };
    pub const RESET: TickInput = TickInput {
        spin: false,
        reset: true,
        start_timer: false,
    };
    pub const START_TIMER: TickInput = TickInput {
        spin: false,
        reset: false,
        start_timer: true,
    };
}

/// Advance the wheel by `dt` seconds
pub fn tick(state: &mut WheelState, input: &TickInput, dt: f32) {
    // Presses land before time moves, reset first so "reset + spin" spins from the new angle
    if input.reset {
        state.reset_wheel();
    }
    if input.spin {
        state.spin();
    }
    if input.start_timer {
        state.start_timer();
    }

    let dt = if dt.is_finite() { dt.max(0.0) } else { 0.0 };
    state.time_ticks += 1;

    // A spin that stops this frame lands in Idle, so the timer can't start
    // until the next frame's input
    state.advance_spin(dt);
    state.advance_timer(dt);
}
