//! Input-handling core for the volley scoreboard remote.
//!
//! All ten buttons of the remote share one interrupt line, so the edge
//! detector only ever learns "something is pressed" or "nothing is pressed";
//! which button is down is resolved later by level-reading each button's own
//! pin during a dispatch scan. This crate holds that whole pipeline (shared
//! press state, debounce, the accelerating auto-repeat schedule, the
//! priority-ordered command scan and the buzzer feedback) behind three small
//! hardware capabilities, so the firmware wires it to the HAL and the test
//! suite wires it to fakes.

#![no_std]

pub mod buttons;
pub mod dispatch;
pub mod edge;
pub mod feedback;
pub mod repeat;
pub mod state;

pub use crate::buttons::{Button, Command};
pub use crate::dispatch::Dispatcher;
pub use crate::feedback::Beeper;
pub use crate::state::SharedInputState;

/// Base delay before the first hold-repeat, in scheduler milliseconds.
pub const BASE_DELAY: u32 = 700;
/// Minimum time between accepted edges for a press to be trusted as real.
pub const DEBOUNCE_WINDOW: u32 = 120;
/// Buzzer on-time per accepted command.
pub const FEEDBACK_DURATION: u32 = 20;
/// Exponent of the hyperbolic auto-repeat decay, in (0, 1).
pub const ACCEL_EXPONENT: f32 = 0.5;
/// Hard floor on the repeat delay.
pub const MIN_DELAY: u32 = 50;

/// Level-readable button input (one dedicated pin per button).
pub trait ButtonInput {
    /// Live level of the button's pin; `true` while the button is held.
    fn is_active(&self) -> bool;
}

/// On/off output: the status LED and the buzzer.
pub trait SignalOutput {
    fn set_active(&mut self, active: bool);
}

/// Destination for command bytes. Bytes are sent immediately; there is no
/// framing, acknowledgement or buffering contract.
pub trait ByteSink {
    fn send(&mut self, byte: u8);
}
