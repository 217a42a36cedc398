use crate::hal::port::PortExt;

avr_hal_generic::impl_board_pins! {
    #[port_defs]
    use crate::hal::port;

    /// Generic DDR that works for all ports
    pub struct DDR {
        portb: crate::pac::PORTB,
        portc: crate::pac::PORTC,
        portd: crate::pac::PORTD,
    }

    /// Reexport of the remote's pins, with the names of the controls wired
    /// to them on the board
    pub struct Pins {
        /// `RX` (D0)
        ///
        /// * USART0 receive, from the scoreboard unit (unused by the protocol)
        pub rx: portd::pd0::PD0,
        /// `TX` (D1)
        ///
        /// * USART0 transmit, command bytes to the scoreboard unit
        pub tx: portd::pd1::PD1,
        /// `IRQ` (D2), the shared button line
        ///
        /// Every button pulls this line low through the diode network;
        /// external pull-up.
        ///
        /// * INT0 (external interrupt 0)
        pub irq: portd::pd2::PD2,
        /// `SIREN` (D3), siren-on button
        pub siren: portd::pd3::PD3,
        /// `RESET` (D4), reset button
        pub reset: portd::pd4::PD4,
        /// `INVERT` (D5), invert-sides button
        pub invert: portd::pd5::PD5,
        /// `RESUME` (D6), continue button
        pub resume: portd::pd6::PD6,
        /// `SERVE_V` (D7), assign-serve-visitor button
        pub serve_visitor: portd::pd7::PD7,
        /// `SERVE_L` (D8), assign-serve-local button
        pub serve_local: portb::pb0::PB0,
        /// `DEC_V` (D9), score -1 visitor button
        pub dec_visitor: portb::pb1::PB1,
        /// `INC_V` (D10), score +1 visitor button
        pub inc_visitor: portb::pb2::PB2,
        /// `DEC_L` (D11), score -1 local button
        pub dec_local: portb::pb3::PB3,
        /// `INC_L` (D12), score +1 local button
        pub inc_local: portb::pb4::PB4,
        /// `LED` (D13), status indicator, on while anything is pressed
        pub led: portb::pb5::PB5,
        /// `BUZZER` (A0), feedback beep on every accepted command
        pub buzzer: portc::pc0::PC0,
    }
}
