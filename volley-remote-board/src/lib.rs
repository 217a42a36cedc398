//! Board Support Crate for the volley scoreboard remote.
//!
//! The remote is an ATmega328P board (Arduino-Nano-class, 16 MHz) carrying
//! ten momentary buttons, a status LED, a piezo buzzer and a serial link to
//! the scoreboard unit. This crate re-exports the underlying HAL in ways that
//! make sense for this particular board: the pins are named by the control
//! wired to them instead of the MCU names.
//!
//! Every button input has an external pull-down and reads high while held.
//! All buttons are additionally diode-OR'ed onto the `IRQ` line (external
//! pull-up, active low), which is the board's single shared interrupt source.
//!
//! # Getting Started
//! A rough skeleton for an application looks like this:
//!
//! ```no_run
//! #![no_std]
//! #![no_main]
//!
//! // Pull in the panic handler from panic-halt
//! extern crate panic_halt;
//!
//! use volley_remote_board::prelude::*;
//!
//! // Define the entry-point for the application.  This can only be
//! // done once in the entire dependency tree.
//! #[volley_remote_board::entry]
//! fn main() -> ! {
//!     // Get the peripheral singletons for interacting with them.
//!     let dp = volley_remote_board::Peripherals::take().unwrap();
//!
//!     unimplemented!()
//! }
//! ```

#![no_std]

// Expose hal & pac crates
pub use atmega328p_hal as hal;
pub use crate::hal::pac;

/// See [`avr_device::entry`](https://docs.rs/avr-device/latest/avr_device/attr.entry.html).
pub use crate::hal::entry;

pub use crate::pac::Peripherals;

mod pins;
pub use crate::pins::*;

pub mod prelude {
    pub use crate::hal::prelude::*;
    pub use crate::hal::usart::BaudrateArduinoExt as _;
}

/// Serial (UART) interface on pins `RX` and `TX`, the link to the scoreboard
/// unit
///
/// # Example
/// ```no_run
/// use volley_remote_board::prelude::*;
///
/// let dp = volley_remote_board::Peripherals::take().unwrap();
///
/// let mut pins = volley_remote_board::Pins::new(dp.PORTB, dp.PORTC, dp.PORTD);
///
/// let mut serial = volley_remote_board::Serial::new(
///     dp.USART0,
///     pins.rx,
///     pins.tx.into_output(&mut pins.ddr),
///     9600.into_baudrate(),
/// );
/// ```
pub type Serial<IMODE> = hal::usart::Usart0<hal::clock::MHz16, IMODE>;
