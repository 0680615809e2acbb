//! Workout countdown
//!
//! Runs independently of the wheel angle; only the phase machine in `state`
//! decides when a countdown may start.

use serde::{Deserialize, Serialize};

/// What the timer text sink should show
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TimerDisplay {
    /// Nothing (initial state and after a reset)
    #[default]
    Hidden,
    /// Whole seconds left, rounded up
    Counting(u32),
    /// Countdown finished
    Expired,
}

impl TimerDisplay {
    pub fn text(&self) -> String {
        match self {
            TimerDisplay::Hidden => String::new(),
            TimerDisplay::Counting(secs) => format!("Time Left: {}s", secs),
            TimerDisplay::Expired => "Time's Up!".to_string(),
        }
    }
}

/// Result of advancing a countdown
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Countdown {
    Running { remaining: f32 },
    Expired,
}

/// Advance a countdown by `dt` seconds
pub fn advance(remaining: f32, dt: f32) -> Countdown {
    let remaining = remaining - dt;
    if remaining <= 0.0 {
        Countdown::Expired
    } else {
        Countdown::Running { remaining }
    }
}

/// Seconds shown while counting: ceil of what is left
#[inline]
pub fn display_seconds(remaining: f32) -> u32 {
    remaining.max(0.0).ceil() as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_text() {
        assert_eq!(TimerDisplay::Hidden.text(), "");
        assert_eq!(TimerDisplay::Counting(42).text(), "Time Left: 42s");
        assert_eq!(TimerDisplay::Expired.text(), "Time's Up!");
    }

    #[test]
    fn test_display_seconds_rounds_up() {
        assert_eq!(display_seconds(60.0), 60);
        assert_eq!(display_seconds(59.99), 60);
        assert_eq!(display_seconds(59.0), 59);
        assert_eq!(display_seconds(0.01), 1);
        assert_eq!(display_seconds(-3.0), 0);
    }

    #[test]
    fn test_advance() {
        assert_eq!(advance(60.0, 0.5), Countdown::Running { remaining: 59.5 });
        assert_eq!(advance(0.5, 0.5), Countdown::Expired);
        assert_eq!(advance(60.0, 60.0), Countdown::Expired);
        assert_eq!(advance(1.0, 5.0), Countdown::Expired);
    }
}
