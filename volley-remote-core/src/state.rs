//! Press state shared between the edge-detector interrupt and the main loop.
//!
//! The edge detector is the writer of `pressed` and the one who arms
//! `next_eligible` on a press edge; the repeat engine reads the flag and
//! advances the fields it owns (`repeat_count`, `last_accepted`,
//! `next_eligible` re-arms). Timestamps are u32 milliseconds, wider than the
//! AVR's native atomic width, so everything goes through `portable-atomic`
//! (interrupt-masked on this platform).

use portable_atomic::{AtomicBool, AtomicU32, AtomicU8, Ordering};

use crate::DEBOUNCE_WINDOW;

pub struct SharedInputState {
    pressed: AtomicBool,
    repeat_count: AtomicU8,
    next_eligible: AtomicU32,
    last_accepted: AtomicU32,
}

impl SharedInputState {
    pub const fn new() -> SharedInputState {
        SharedInputState {
            pressed: AtomicBool::new(false),
            repeat_count: AtomicU8::new(0),
            next_eligible: AtomicU32::new(0),
            last_accepted: AtomicU32::new(0),
        }
    }

    // ---- edge-detector side ----

    /// The shared line was asserted: arm the debounce deadline and mark the
    /// line held. The deadline is published before the flag so the engine
    /// never fires on a stale deadline.
    pub fn press_edge(&self, now: u32) {
        self.next_eligible
            .store(now.wrapping_add(DEBOUNCE_WINDOW), Ordering::Release);
        self.pressed.store(true, Ordering::Release);
    }

    /// The shared line was deasserted: back to pristine.
    pub fn release_edge(&self) {
        self.pressed.store(false, Ordering::Release);
        self.repeat_count.store(0, Ordering::Release);
    }

    // ---- repeat-engine side ----

    pub fn is_pressed(&self) -> bool {
        self.pressed.load(Ordering::Acquire)
    }

    pub fn repeat_count(&self) -> u8 {
        self.repeat_count.load(Ordering::Acquire)
    }

    /// The armed deadline has passed.
    pub fn is_due(&self, now: u32) -> bool {
        now >= self.next_eligible.load(Ordering::Acquire)
    }

    /// Too close to the previously accepted event to be a genuine one.
    pub fn within_debounce(&self, now: u32) -> bool {
        now.wrapping_sub(self.last_accepted.load(Ordering::Acquire)) <= DEBOUNCE_WINDOW
    }

    /// Record an accepted event: bump the counter (saturating, never wraps)
    /// and remember `now`. Returns the new count.
    pub fn advance(&self, now: u32) -> u8 {
        let count = self.repeat_count.load(Ordering::Acquire).saturating_add(1);
        self.repeat_count.store(count, Ordering::Release);
        self.last_accepted.store(now, Ordering::Release);
        count
    }

    /// Arm the next repeat deadline.
    pub fn schedule(&self, now: u32, delay: u32) {
        self.next_eligible
            .store(now.wrapping_add(delay), Ordering::Release);
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;

    #[test]
    fn press_edge_arms_the_debounce_deadline() {
        let state = SharedInputState::new();
        assert!(!state.is_pressed());
        state.press_edge(1000);
        assert!(state.is_pressed());
        assert!(!state.is_due(1000 + DEBOUNCE_WINDOW - 1));
        assert!(state.is_due(1000 + DEBOUNCE_WINDOW));
    }

    #[test]
    fn release_resets_to_pristine() {
        let state = SharedInputState::new();
        state.press_edge(1000);
        state.advance(1120);
        state.advance(1614);
        state.release_edge();
        assert!(!state.is_pressed());
        assert_eq!(state.repeat_count(), 0);
    }

    #[test]
    fn repeat_count_saturates_and_never_wraps() {
        let state = SharedInputState::new();
        state.press_edge(0);
        for now in 0..600 {
            state.advance(now);
        }
        assert_eq!(state.repeat_count(), u8::MAX);
    }

    #[test]
    fn debounce_guard_tracks_the_last_accepted_event() {
        let state = SharedInputState::new();
        state.press_edge(1000);
        // nothing accepted yet since power-up
        assert!(!state.within_debounce(1120));
        state.advance(1120);
        assert!(state.within_debounce(1120 + DEBOUNCE_WINDOW));
        assert!(!state.within_debounce(1120 + DEBOUNCE_WINDOW + 1));
    }
}
