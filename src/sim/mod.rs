//! Deterministic wheel simulation
//!
//! All widget logic lives here. This module must stay pure and deterministic:
//! - Time only advances through `tick`
//! - Seeded RNG only
//! - No rendering, input or platform dependencies

pub mod segments;
pub mod state;
pub mod tick;
pub mod timer;

pub use segments::{SegmentError, SegmentSet, resolve_segment};
pub use state::{Controls, RngState, WheelEvent, WheelPhase, WheelState};
pub use tick::{TickInput, tick};
pub use timer::TimerDisplay;
