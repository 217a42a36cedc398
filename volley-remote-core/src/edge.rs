//! Edge detector: the interrupt-side reaction to transitions of the shared
//! line.
//!
//! The platform has a single change-type interrupt for the line, so both
//! directions arrive at the same handler and the caller classifies the
//! transition by the line's level. This path runs at interrupt priority: it
//! only toggles flags and writes the one cancel byte, and must never scan
//! buttons or wait.

use crate::buttons::Command;
use crate::state::SharedInputState;
use crate::{ByteSink, SignalOutput};

/// React to a transition of the shared interrupt line. `asserted` is the
/// level after the transition: `true` while any button holds the line.
///
/// A release edge unconditionally cancels any in-flight repeat sequence and
/// fires the one-way siren-cancel notification.
pub fn handle_edge<L, S>(
    asserted: bool,
    state: &SharedInputState,
    indicator: &mut L,
    sink: &mut S,
    now: u32,
) where
    L: SignalOutput,
    S: ByteSink,
{
    if asserted {
        state.press_edge(now);
        indicator.set_active(true);
    } else {
        indicator.set_active(false);
        state.release_edge();
        sink.send(Command::RepeatCancel.byte());
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use self::std::vec::Vec;
    use super::*;

    struct Lamp(bool);

    impl SignalOutput for Lamp {
        fn set_active(&mut self, active: bool) {
            self.0 = active;
        }
    }

    struct Wire(Vec<u8>);

    impl ByteSink for Wire {
        fn send(&mut self, byte: u8) {
            self.0.push(byte);
        }
    }

    #[test]
    fn release_emits_the_cancel_byte_exactly_once() {
        let state = SharedInputState::new();
        let mut lamp = Lamp(false);
        let mut wire = Wire(Vec::new());
        handle_edge(true, &state, &mut lamp, &mut wire, 500);
        assert!(wire.0.is_empty());
        handle_edge(false, &state, &mut lamp, &mut wire, 560);
        assert_eq!(wire.0, [b'e']);
    }

    #[test]
    fn indicator_follows_the_line_level() {
        let state = SharedInputState::new();
        let mut lamp = Lamp(false);
        let mut wire = Wire(Vec::new());
        handle_edge(true, &state, &mut lamp, &mut wire, 500);
        assert!(lamp.0);
        assert!(state.is_pressed());
        handle_edge(false, &state, &mut lamp, &mut wire, 560);
        assert!(!lamp.0);
        assert!(!state.is_pressed());
    }
}
