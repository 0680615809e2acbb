//! Wheel state and the spin/timer phase machine
//!
//! Everything the host needs to draw the widget is readable from here: the
//! wheel angle, the selected label, the timer text and which controls are
//! enabled.

use glam::Quat;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::segments::SegmentSet;
use super::timer::{self, Countdown, TimerDisplay};
use crate::consts::*;
use crate::settings::Settings;
use crate::{normalize_degrees, wheel_rotation};

/// Current phase of the wheel
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum WheelPhase {
    /// At rest, waiting for input
    Idle,
    /// Decelerating toward a stop
    Spinning {
        /// Angular velocity (degrees/s, never negative)
        velocity: f32,
        /// Deceleration for this spin (degrees/s²)
        deceleration: f32,
        /// Random total rotation picked when the spin started
        target_rotation: f32,
        /// Degrees turned so far
        travelled: f32,
    },
    /// Workout countdown in progress
    TimerRunning {
        /// Seconds left (always > 0 while in this phase)
        remaining: f32,
    },
}

/// Which controls the host should leave interactable
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Controls {
    pub spin: bool,
    pub reset: bool,
    pub start_timer: bool,
}

impl Controls {
    /// Fresh wheel: nothing selected yet, so no timer
    pub const INITIAL: Controls = Controls {
        spin: true,
        reset: true,
        start_timer: false,
    };
    pub const ALL: Controls = Controls {
        spin: true,
        reset: true,
        start_timer: true,
    };
    pub const NONE: Controls = Controls {
        spin: false,
        reset: false,
        start_timer: false,
    };
}

impl Default for Controls {
    fn default() -> Self {
        Self::INITIAL
    }
}

/// Something the host may want to react to (sound, analytics, text sinks)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum WheelEvent {
    SpinStarted { target_rotation: f32 },
    SpinStopped { angle: f32, segment: usize, label: String },
    TimerStarted { duration: f32 },
    TimerExpired,
    WheelReset { angle: f32 },
}

/// RNG state wrapper for serialization
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RngState {
    pub seed: u64,
    /// Generator at its current position
    rng: Pcg32,
}

impl RngState {
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    /// Uniform value in `[low, high)`
    pub fn range(&mut self, low: f32, high: f32) -> f32 {
        self.rng.random_range(low..high)
    }
}

/// Complete wheel state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WheelState {
    /// Seed for reproducibility
    pub seed: u64,
    /// RNG state
    pub rng_state: RngState,
    /// Tunables this wheel was built with
    pub settings: Settings,
    /// Wheel face
    pub segments: SegmentSet,
    /// Current angle (degrees); in [0, 360) whenever not spinning
    pub angle: f32,
    /// Current phase
    pub phase: WheelPhase,
    /// Segment picked by the last completed spin
    pub selection: Option<usize>,
    /// Timer text state
    pub timer_display: TimerDisplay,
    /// Control availability
    pub controls: Controls,
    /// Simulation tick counter
    pub time_ticks: u64,
    /// Events since the last drain
    #[serde(skip)]
    events: Vec<WheelEvent>,
}

impl WheelState {
    /// Create a wheel with default settings, resting at `initial_angle` degrees
    pub fn new(seed: u64, initial_angle: f32) -> Self {
        Self::with_settings(seed, initial_angle, Settings::default())
    }

    pub fn with_settings(seed: u64, initial_angle: f32, settings: Settings) -> Self {
        let settings = settings.validated();
        let segments = settings.segment_set();
        let angle = if initial_angle.is_finite() {
            normalize_degrees(initial_angle)
        } else {
            0.0
        };
        Self {
            seed,
            rng_state: RngState::new(seed),
            settings,
            segments,
            angle,
            phase: WheelPhase::Idle,
            selection: None,
            timer_display: TimerDisplay::Hidden,
            controls: Controls::INITIAL,
            time_ticks: 0,
            events: Vec::new(),
        }
    }

    // === Actions ===

    /// Start a spin. Ignored unless the wheel is idle.
    pub fn spin(&mut self) {
        if self.phase != WheelPhase::Idle {
            log::debug!("Spin ignored in {:?}", self.phase);
            return;
        }

        let target_rotation = self
            .rng_state
            .range(MIN_TARGET_ROTATION, MAX_TARGET_ROTATION);
        let velocity = self.settings.spin_speed;
        let deceleration = self.settings.landing.deceleration(
            velocity,
            self.settings.deceleration_rate,
            target_rotation,
        );

        self.phase = WheelPhase::Spinning {
            velocity,
            deceleration,
            target_rotation,
            travelled: 0.0,
        };
        self.controls.reset = false;
        self.controls.start_timer = false;
        self.events.push(WheelEvent::SpinStarted { target_rotation });
    }

    /// Start the workout countdown. Ignored while spinning or already counting.
    pub fn start_timer(&mut self) {
        if self.phase != WheelPhase::Idle {
            log::debug!("Timer start ignored in {:?}", self.phase);
            return;
        }

        let duration = self.settings.timer_duration;
        self.phase = WheelPhase::TimerRunning {
            remaining: duration,
        };
        self.timer_display = TimerDisplay::Counting(timer::display_seconds(duration));
        self.controls = Controls::NONE;
        self.events.push(WheelEvent::TimerStarted { duration });
    }

    /// Put the wheel at a random angle with no selection and no timer
    pub fn reset_wheel(&mut self) {
        if matches!(self.phase, WheelPhase::Spinning { .. }) {
            log::debug!("Reset aborts spin in progress");
        }

        self.angle = normalize_degrees(self.rng_state.range(0.0, FULL_TURN));
        self.phase = WheelPhase::Idle;
        self.selection = None;
        self.timer_display = TimerDisplay::Hidden;
        self.controls = Controls::INITIAL;
        self.events.push(WheelEvent::WheelReset { angle: self.angle });
        log::info!("Wheel reset to {:.1} degrees", self.angle);
    }

    // === Per-frame updates (called from `tick`) ===

    /// Advance the spin by `dt` seconds
    pub(crate) fn advance_spin(&mut self, dt: f32) {
        let WheelPhase::Spinning {
            ref mut velocity,
            deceleration,
            ref mut travelled,
            ..
        } = self.phase
        else {
            return;
        };

        *velocity = (*velocity - deceleration * dt).max(0.0);
        let step = *velocity * dt;
        *travelled += step;
        // Clockwise
        self.angle -= step;

        if *velocity <= 0.0 {
            self.angle = normalize_degrees(self.angle);
            self.phase = WheelPhase::Idle;
            self.on_spin_stop();
        }
    }

    fn on_spin_stop(&mut self) {
        let segment = self.segments.index_at(self.angle);
        let label = self.segments.resolve(self.angle).to_string();

        log::info!(
            "Wheel stopped at: {} degrees. Selected exercise: {}",
            self.angle,
            label
        );

        self.selection = Some(segment);
        self.controls.reset = true;
        self.controls.start_timer = true;
        self.events.push(WheelEvent::SpinStopped {
            angle: self.angle,
            segment,
            label,
        });
    }

    /// Advance the countdown by `dt` seconds
    pub(crate) fn advance_timer(&mut self, dt: f32) {
        let WheelPhase::TimerRunning { remaining } = self.phase else {
            return;
        };

        match timer::advance(remaining, dt) {
            Countdown::Running { remaining } => {
                self.phase = WheelPhase::TimerRunning { remaining };
                self.timer_display = TimerDisplay::Counting(timer::display_seconds(remaining));
            }
            Countdown::Expired => {
                self.phase = WheelPhase::Idle;
                self.timer_display = TimerDisplay::Expired;
                self.controls = Controls::ALL;
                self.events.push(WheelEvent::TimerExpired);
                log::info!("Timer expired");
            }
        }
    }

    // === Sinks ===

    pub fn is_spinning(&self) -> bool {
        matches!(self.phase, WheelPhase::Spinning { .. })
    }

    pub fn is_timer_running(&self) -> bool {
        matches!(self.phase, WheelPhase::TimerRunning { .. })
    }

    /// Current angular velocity (0 unless spinning)
    pub fn angular_velocity(&self) -> f32 {
        match self.phase {
            WheelPhase::Spinning { velocity, .. } => velocity,
            _ => 0.0,
        }
    }

    /// Target rotation of the spin in progress
    pub fn target_rotation(&self) -> Option<f32> {
        match self.phase {
            WheelPhase::Spinning {
                target_rotation, ..
            } => Some(target_rotation),
            _ => None,
        }
    }

    /// Seconds left on the countdown (0 unless running)
    pub fn timer_remaining(&self) -> f32 {
        match self.phase {
            WheelPhase::TimerRunning { remaining } => remaining,
            _ => 0.0,
        }
    }

    /// Wheel orientation for the rotation sink
    pub fn rotation(&self) -> Quat {
        wheel_rotation(self.angle)
    }

    pub fn selected_label(&self) -> Option<&str> {
        self.selection.and_then(|i| self.segments.label(i))
    }

    pub fn timer_text(&self) -> String {
        self.timer_display.text()
    }

    pub fn controls(&self) -> Controls {
        self.controls
    }

    /// Take all events published since the last call
    pub fn drain_events(&mut self) -> Vec<WheelEvent> {
        std::mem::take(&mut self.events)
    }
}
