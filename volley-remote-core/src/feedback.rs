//! Buzzer feedback: fixed on-time, driven by its own scheduler check so the
//! main loop never blocks on it.

use crate::{SignalOutput, FEEDBACK_DURATION};

pub struct Beeper<P: SignalOutput> {
    output: P,
    active: bool,
    off_at: u32,
}

impl<P: SignalOutput> Beeper<P> {
    pub fn new(output: P) -> Beeper<P> {
        Beeper {
            output,
            active: false,
            off_at: 0,
        }
    }

    /// Sound the buzzer for `FEEDBACK_DURATION` from `now`. Re-arming while
    /// already sounding only pushes the off time out; the output is not
    /// asserted a second time.
    pub fn arm(&mut self, now: u32) {
        self.off_at = now.wrapping_add(FEEDBACK_DURATION);
        if !self.active {
            self.output.set_active(true);
            self.active = true;
        }
    }

    /// Scheduler tick: switch off once the on-time has elapsed.
    pub fn poll(&mut self, now: u32) {
        if self.active && now >= self.off_at {
            self.output.set_active(false);
            self.active = false;
        }
    }

    pub fn is_active(&self) -> bool {
        self.active
    }
}
