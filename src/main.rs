//! Wheel Spinner entry point
//!
//! Headless driver: runs one scripted session (spin, start timer, wait for
//! the countdown, reset) through the fixed-step loop and logs what a UI
//! would show.
//!
//! Usage: `wheel-spinner [settings.json] [seed] [decelerate|target]`

use std::time::{SystemTime, UNIX_EPOCH};

use wheel_spinner::{LandingMode, Settings};
use wheel_spinner::consts::*;
use wheel_spinner::sim::{Controls, TickInput, WheelEvent, WheelState, tick};

/// Simulated frame time (30 fps host, two sim steps per frame)
const FRAME_DT: f32 = 1.0 / 30.0;
/// Stop the session after this much simulated time no matter what
const MAX_SESSION_SECS: f32 = 600.0;

/// Scripted host state
struct Session {
    state: WheelState,
    accumulator: f32,
    input: TickInput,
    elapsed: f32,
    last_timer_text: String,
    last_controls: Controls,
    done: bool,
}

impl Session {
    fn new(state: WheelState) -> Self {
        let last_controls = state.controls();
        Self {
            state,
            accumulator: 0.0,
            input: TickInput::SPIN,
            elapsed: 0.0,
            last_timer_text: String::new(),
            last_controls,
            done: false,
        }
    }

    /// Run simulation ticks for one frame
    fn update(&mut self, dt: f32) {
        let dt = dt.min(0.1);
        self.accumulator += dt;
        self.elapsed += dt;

        let mut substeps = 0;
        while self.accumulator >= SIM_DT && substeps < MAX_SUBSTEPS {
            let input = self.input;
            tick(&mut self.state, &input, SIM_DT);
            self.accumulator -= SIM_DT;
            substeps += 1;

            // Clear one-shot inputs after processing
            self.input = TickInput::default();

            for event in self.state.drain_events() {
                self.on_event(event);
            }
        }

        self.publish();
    }

    /// Scripted "user": press the next button once the previous step finished
    fn on_event(&mut self, event: WheelEvent) {
        match event {
            WheelEvent::SpinStarted { target_rotation } => {
                log::info!("Spin started (target rotation {:.0} degrees)", target_rotation);
            }
            WheelEvent::SpinStopped { label, .. } => {
                println!("Selected exercise: {}", label);
                self.input.start_timer = true;
            }
            WheelEvent::TimerStarted { duration } => {
                log::info!("Timer started ({}s)", duration);
            }
            WheelEvent::TimerExpired => {
                self.input.reset = true;
            }
            WheelEvent::WheelReset { angle } => {
                println!("Wheel reset to {:.1} degrees", angle);
                self.done = true;
            }
        }
    }

    /// Push changed sink values to the "UI" (stdout)
    fn publish(&mut self) {
        let text = self.state.timer_text();
        if text != self.last_timer_text {
            if !text.is_empty() {
                println!("{}", text);
            }
            self.last_timer_text = text;
        }

        let controls = self.state.controls();
        if controls != self.last_controls {
            log::debug!(
                "Controls: spin={} reset={} start_timer={}",
                controls.spin,
                controls.reset,
                controls.start_timer
            );
            self.last_controls = controls;
        }
    }
}

fn main() {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let mut settings = match args.next() {
        Some(path) => Settings::load(path),
        None => Settings::default(),
    };
    let seed = args
        .next()
        .and_then(|s| s.parse::<u64>().ok())
        .unwrap_or_else(|| {
            SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|d| d.as_nanos() as u64)
                .unwrap_or(0)
        });
    if let Some(mode) = args.next() {
        match mode.parse::<LandingMode>() {
            Ok(landing) => settings.landing = landing,
            Err(e) => log::warn!("{}, keeping {}", e, settings.landing),
        }
    }

    log::info!(
        "Wheel Spinner starting (seed {}, landing {})",
        seed,
        settings.landing
    );
    let state = WheelState::with_settings(seed, 0.0, settings);
    log::info!("Segments: {}", state.segments.labels().join(", "));

    let mut session = Session::new(state);
    while !session.done && session.elapsed < MAX_SESSION_SECS {
        session.update(FRAME_DT);
    }

    if !session.done {
        log::warn!("Session did not finish within {}s", MAX_SESSION_SECS);
    }
}
