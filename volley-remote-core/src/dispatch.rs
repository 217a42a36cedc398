//! Command dispatcher: fixed-priority scan of the two button chains.

use crate::buttons::Button;
use crate::feedback::Beeper;
use crate::{ByteSink, SignalOutput};

/// The two disjoint priority chains. Within a chain the first active input
/// wins and the rest are not examined, so simultaneous presses resolve by
/// chain order and are never combined.
pub struct Dispatcher<'a> {
    score: &'a [Button<'a>],
    momentary: &'a [Button<'a>],
}

impl<'a> Dispatcher<'a> {
    pub fn new(score: &'a [Button<'a>], momentary: &'a [Button<'a>]) -> Dispatcher<'a> {
        Dispatcher { score, momentary }
    }

    /// Level-read the chains and emit at most one byte per chain. The
    /// momentary chain is eligible only on the first accepted event of a
    /// press (`repeat_count == 0`); the score chain on every call. Each
    /// emitted byte also arms the beeper.
    pub fn dispatch<S, P>(&self, repeat_count: u8, sink: &mut S, beeper: &mut Beeper<P>, now: u32)
    where
        S: ByteSink,
        P: SignalOutput,
    {
        if let Some(button) = self.score.iter().find(|b| b.input.is_active()) {
            sink.send(button.command.byte());
            beeper.arm(now);
        }
        if repeat_count == 0 {
            if let Some(button) = self.momentary.iter().find(|b| b.input.is_active()) {
                sink.send(button.command.byte());
                beeper.arm(now);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use self::std::cell::Cell;
    use self::std::vec::Vec;
    use super::*;
    use crate::buttons::Command;
    use crate::ButtonInput;

    struct Level(Cell<bool>);

    impl Level {
        fn new() -> Level {
            Level(Cell::new(false))
        }

        fn set(&self, active: bool) {
            self.0.set(active);
        }
    }

    impl ButtonInput for Level {
        fn is_active(&self) -> bool {
            self.0.get()
        }
    }

    struct Quiet;

    impl SignalOutput for Quiet {
        fn set_active(&mut self, _active: bool) {}
    }

    struct Wire(Vec<u8>);

    impl ByteSink for Wire {
        fn send(&mut self, byte: u8) {
            self.0.push(byte);
        }
    }

    #[test]
    fn higher_priority_momentary_button_wins() {
        let serve_local = Level::new();
        let reset = Level::new();
        let momentary = [
            Button::new(&serve_local, Command::ServeLocal),
            Button::new(&reset, Command::Reset),
        ];
        let dispatcher = Dispatcher::new(&[], &momentary);
        let mut wire = Wire(Vec::new());
        let mut beeper = Beeper::new(Quiet);

        serve_local.set(true);
        reset.set(true);
        dispatcher.dispatch(0, &mut wire, &mut beeper, 100);
        assert_eq!(wire.0, [b'g']);
    }

    #[test]
    fn momentary_chain_is_first_press_only() {
        let reset = Level::new();
        let momentary = [Button::new(&reset, Command::Reset)];
        let dispatcher = Dispatcher::new(&[], &momentary);
        let mut wire = Wire(Vec::new());
        let mut beeper = Beeper::new(Quiet);

        reset.set(true);
        dispatcher.dispatch(0, &mut wire, &mut beeper, 100);
        dispatcher.dispatch(1, &mut wire, &mut beeper, 600);
        dispatcher.dispatch(7, &mut wire, &mut beeper, 1100);
        assert_eq!(wire.0, [b'j']);
    }

    #[test]
    fn score_chain_repeats_and_respects_priority() {
        let inc_local = Level::new();
        let dec_visitor = Level::new();
        let score = [
            Button::new(&inc_local, Command::ScoreUpLocal),
            Button::new(&dec_visitor, Command::ScoreDownVisitor),
        ];
        let dispatcher = Dispatcher::new(&score, &[]);
        let mut wire = Wire(Vec::new());
        let mut beeper = Beeper::new(Quiet);

        inc_local.set(true);
        dec_visitor.set(true);
        dispatcher.dispatch(0, &mut wire, &mut beeper, 100);
        dispatcher.dispatch(1, &mut wire, &mut beeper, 600);
        assert_eq!(wire.0, [b'a', b'a']);
    }

    #[test]
    fn one_byte_per_chain_when_both_are_held() {
        let inc_local = Level::new();
        let siren = Level::new();
        let score = [Button::new(&inc_local, Command::ScoreUpLocal)];
        let momentary = [Button::new(&siren, Command::SirenOn)];
        let dispatcher = Dispatcher::new(&score, &momentary);
        let mut wire = Wire(Vec::new());
        let mut beeper = Beeper::new(Quiet);

        inc_local.set(true);
        siren.set(true);
        dispatcher.dispatch(0, &mut wire, &mut beeper, 100);
        assert_eq!(wire.0, [b'a', b'f']);
        assert!(beeper.is_active());
    }

    #[test]
    fn nothing_active_emits_nothing() {
        let inc_local = Level::new();
        let score = [Button::new(&inc_local, Command::ScoreUpLocal)];
        let dispatcher = Dispatcher::new(&score, &[]);
        let mut wire = Wire(Vec::new());
        let mut beeper = Beeper::new(Quiet);

        dispatcher.dispatch(0, &mut wire, &mut beeper, 100);
        assert!(wire.0.is_empty());
        assert!(!beeper.is_active());
    }
}
