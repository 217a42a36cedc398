//! firmware for the volley scoreboard remote
//! reads ten momentary buttons behind one shared interrupt line, debounces
//! them, and sends one command byte per accepted press over the serial link,
//! with accelerating auto-repeat for the four score buttons

#![no_std]
#![no_main]
#![feature(abi_avr_interrupt)]

extern crate panic_halt;

use avr_device::interrupt;
use core::cell::{RefCell, UnsafeCell};
use core::ops::{Deref, DerefMut};

use volley_remote_board::hal as hal;
use volley_remote_board::prelude::*;
use hal::port::mode::{Floating, Input, Output};

use volley_remote_core::buttons::{Button, Command};
use volley_remote_core::{edge, repeat, Beeper, Dispatcher, SharedInputState};

//==========================================================

mod io;
use crate::io::{ActiveHigh, DrivePin, SerialSink};

mod utility;
use crate::utility::*;

//==========================================================

const VERSION: &str = env!("CARGO_PKG_VERSION");

//==========================================================
// Scheduler clock

// shared counter of TIMER0 overflows, one every 1.024ms at 16MHz with clk/64;
// this tick is the scheduler's "millisecond"
struct TickCounter(UnsafeCell<u32>);

const TICK_COUNTER_INIT: TickCounter = TickCounter(UnsafeCell::new(0));

impl TickCounter {
    pub fn increment(&self, _cs: &interrupt::CriticalSection) {
        unsafe { *self.0.get() = (*self.0.get()).wrapping_add(1) };
    }

    pub fn get(&self, _cs: &interrupt::CriticalSection) -> u32 {
        unsafe { *self.0.get() }
    }
}

unsafe impl Sync for TickCounter {}

static MILLIS: TickCounter = TICK_COUNTER_INIT;

//==========================================================
// Shared input state

// written by the INT0 edge detector, polled by the main loop; lock-free
static INPUT_STATE: SharedInputState = SharedInputState::new();

//==========================================================
// Handles for the resources the INT0 handler touches

type IrqPin = hal::port::portd::PD2<Input<Floating>>;
type StatusLed = DrivePin<hal::port::portb::PB5<Output>>;

static IRQPINHANDLE: interrupt::Mutex<RefCell<Option<IrqPin>>> =
    interrupt::Mutex::new(RefCell::new(None));

static LEDHANDLE: interrupt::Mutex<RefCell<Option<StatusLed>>> =
    interrupt::Mutex::new(RefCell::new(None));

static SERIALHANDLE: interrupt::Mutex<RefCell<Option<volley_remote_board::Serial<Floating>>>> =
    interrupt::Mutex::new(RefCell::new(None));

//==========================================================

#[hal::entry]
fn main() -> ! {
    let dp = volley_remote_board::Peripherals::take().unwrap();

    // turn off the modules this remote never uses
    let cpu = dp.CPU;
    cpu.prr.write(|w| {
        w.prtim1().set_bit();
        w.prtim2().set_bit();
        w.prtwi().set_bit();
        w.prspi().set_bit();
        w.pradc().set_bit()
    });
    // turn off analog comparator
    let ac = dp.AC;
    ac.acsr.write(|w| w.acd().set_bit());

    let exint = dp.EXINT;

    let mut pins = volley_remote_board::Pins::new(dp.PORTB, dp.PORTC, dp.PORTD);

    // feedback outputs
    let buzzer = pins.buzzer.into_output(&mut pins.ddr);
    let led = pins.led.into_output(&mut pins.ddr);

    // button inputs stay floating, the board has external pull-downs
    let inc_local = ActiveHigh(pins.inc_local);
    let dec_local = ActiveHigh(pins.dec_local);
    let inc_visitor = ActiveHigh(pins.inc_visitor);
    let dec_visitor = ActiveHigh(pins.dec_visitor);
    let serve_local = ActiveHigh(pins.serve_local);
    let serve_visitor = ActiveHigh(pins.serve_visitor);
    let resume = ActiveHigh(pins.resume);
    let invert = ActiveHigh(pins.invert);
    let reset = ActiveHigh(pins.reset);
    let siren = ActiveHigh(pins.siren);

    // the two priority chains, highest priority first
    let score_chain = [
        Button::new(&inc_local, Command::ScoreUpLocal),
        Button::new(&dec_local, Command::ScoreDownLocal),
        Button::new(&inc_visitor, Command::ScoreUpVisitor),
        Button::new(&dec_visitor, Command::ScoreDownVisitor),
    ];
    let momentary_chain = [
        Button::new(&serve_local, Command::ServeLocal),
        Button::new(&serve_visitor, Command::ServeVisitor),
        Button::new(&resume, Command::Resume),
        Button::new(&invert, Command::InvertSides),
        Button::new(&reset, Command::Reset),
        Button::new(&siren, Command::SirenOn),
    ];
    let dispatcher = Dispatcher::new(&score_chain, &momentary_chain);

    let mut beeper = Beeper::new(DrivePin(buzzer));
    let mut sink = SerialSink;

    // setup Timer0, CK/64, overflow interrupt enabled
    let timer0 = dp.TC0;
    timer0.tccr0b.write(|w| w.cs0().prescale_64());
    timer0.timsk0.write(|w| w.toie0().set_bit());

    // INT0 on any logical change, the shared line needs both edges
    exint.eicra.modify(|_, w| w.isc0().bits(0x01));
    exint.eimsk.modify(|_, w| w.int0().set_bit());

    // setup serial
    let mut serial = volley_remote_board::Serial::<Floating>::new(
        dp.USART0,
        pins.rx,
        pins.tx.into_output(&mut pins.ddr),
        9600.into_baudrate(),
    );

    ufmt::uwriteln!(&mut serial, "volley-remote {}\r", VERSION).void_unwrap();

    #[cfg(debug_assertions)]
    ufmt::uwrite!(serial, "eimsk:").void_unwrap();
    #[cfg(debug_assertions)]
    send_reg(&mut serial, 0x3d);
    #[cfg(debug_assertions)]
    ufmt::uwrite!(serial, "eicra:").void_unwrap();
    #[cfg(debug_assertions)]
    send_reg(&mut serial, 0x69);

    interrupt::free(|cs| {
        // transfer shared resources to their handles
        IRQPINHANDLE.borrow(cs).replace(Some(pins.irq));
        LEDHANDLE.borrow(cs).replace(Some(DrivePin(led)));
        SERIALHANDLE.borrow(cs).replace(Some(serial));
    });

    // enable interrupts
    unsafe {
        interrupt::enable();
    }

    loop {
        let now = interrupt::free(|cs| MILLIS.get(cs));
        repeat::poll(&INPUT_STATE, &dispatcher, &mut sink, &mut beeper, now);
        beeper.poll(now);
    }
}

//==========================================================

// interrupt handler for Timer0 overflow, the scheduler clock
#[interrupt(atmega328p)]
fn TIMER0_OVF() {
    // create unneeded interrupt context for static functions
    // unneeded because we are in interrupt and can't be interrupted
    // again in avr
    interrupt::free(move |cs| {
        MILLIS.increment(cs);
    });
}

//==========================================================

// interrupt handler for INT0, the shared button line; fires on both edges
// and the line level tells them apart
#[interrupt(atmega328p)]
fn INT0() {
    interrupt::free(move |cs| {
        let now = MILLIS.get(cs);
        let asserted = if let Some(irq) = IRQPINHANDLE.borrow(cs).borrow().deref() {
            // the shared line is active low
            irq.is_low().unwrap_or(false)
        } else {
            false
        };
        if let Some(ref mut led) = LEDHANDLE.borrow(cs).borrow_mut().deref_mut() {
            edge::handle_edge(asserted, &INPUT_STATE, led, &mut SerialSink, now);
        }
    });
}
