//! Auto-repeat engine: the per-tick debounce guard and the accelerating
//! repeat schedule.

use libm::powf;

use crate::dispatch::Dispatcher;
use crate::feedback::Beeper;
use crate::state::SharedInputState;
use crate::{ByteSink, SignalOutput, ACCEL_EXPONENT, BASE_DELAY, MIN_DELAY};

/// Delay until the next repeat after `count` accepted events:
/// `BASE_DELAY / (count + 1)^ACCEL_EXPONENT`, floored at `MIN_DELAY`.
/// Hyperbolic, so the repeat rate rises smoothly the longer a button is held.
pub fn repeat_delay(count: u8) -> u32 {
    let delay = BASE_DELAY as f32 / powf(count as f32 + 1.0, ACCEL_EXPONENT);
    if delay >= MIN_DELAY as f32 {
        delay as u32
    } else {
        MIN_DELAY
    }
}

/// One scheduler tick of the engine. Fires only while the line is held and
/// the armed deadline has passed. A fire landing inside the debounce window
/// of the previously accepted event is discarded as bounce, with no dispatch
/// and no state change; the next tick re-evaluates.
pub fn poll<S, P>(
    state: &SharedInputState,
    dispatcher: &Dispatcher,
    sink: &mut S,
    beeper: &mut Beeper<P>,
    now: u32,
) where
    S: ByteSink,
    P: SignalOutput,
{
    if !state.is_pressed() || !state.is_due(now) {
        return;
    }
    if state.within_debounce(now) {
        return;
    }
    dispatcher.dispatch(state.repeat_count(), sink, beeper, now);
    let count = state.advance(now);
    state.schedule(now, repeat_delay(count));
}
