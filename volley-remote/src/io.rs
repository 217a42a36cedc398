//! adapters tying the core's hardware capabilities to the HAL: level
//! adapters for the button and feedback pins, and the byte sink over the
//! shared serial handle

use avr_device::interrupt;
use core::ops::DerefMut;
use embedded_hal::digital::v2::{InputPin, OutputPin};
use embedded_hal::serial::Write;

use volley_remote_core::{ButtonInput, ByteSink, SignalOutput};

use crate::SERIALHANDLE;

/// Button pin read as active high (a held button pulls its pin up).
pub struct ActiveHigh<P>(pub P);

impl<P: InputPin> ButtonInput for ActiveHigh<P> {
    fn is_active(&self) -> bool {
        self.0.is_high().unwrap_or(false)
    }
}

/// Push-pull output driven as a plain on/off signal (LED, buzzer).
pub struct DrivePin<P>(pub P);

impl<P: OutputPin> SignalOutput for DrivePin<P> {
    fn set_active(&mut self, active: bool) {
        // pin writes on this board cannot fail
        let result = if active {
            self.0.set_high()
        } else {
            self.0.set_low()
        };
        result.ok();
    }
}

/// Byte sink over the shared USART handle. Blocks until the data register is
/// free, at most one byte time at 9600 baud.
pub struct SerialSink;

impl ByteSink for SerialSink {
    fn send(&mut self, byte: u8) {
        // unneeded interrupt context when called from an ISR, required when
        // called from the main loop
        interrupt::free(|cs| {
            if let Some(ref mut serial) = SERIALHANDLE.borrow(cs).borrow_mut().deref_mut() {
                nb::block!(serial.write(byte)).ok();
            }
        });
    }
}
