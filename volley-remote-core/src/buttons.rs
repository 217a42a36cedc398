//! Button configuration table: the wire commands and the descriptor tying a
//! command to its input pin.

use crate::ButtonInput;

/// Command bytes understood by the scoreboard unit.
///
/// One byte per logical action, sent raw over the serial link. The values
/// are part of the wire protocol and must not change.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[repr(u8)]
pub enum Command {
    ScoreUpLocal = b'a',
    ScoreDownLocal = b'b',
    ScoreUpVisitor = b'c',
    ScoreDownVisitor = b'd',
    /// Sent once on every release edge; tells the receiver to stop a
    /// sustained siren.
    RepeatCancel = b'e',
    SirenOn = b'f',
    ServeLocal = b'g',
    ServeVisitor = b'h',
    InvertSides = b'i',
    Reset = b'j',
    /// Continue / advance the match state.
    Resume = b'k',
}

impl Command {
    pub fn byte(self) -> u8 {
        self as u8
    }
}

/// One physical control: its input capability and its assigned command.
///
/// Built once at startup; the dummy identities (buzzer, status LED, shared
/// interrupt line) are plain board pins and never appear in a chain.
pub struct Button<'a> {
    pub input: &'a dyn ButtonInput,
    pub command: Command,
}

impl<'a> Button<'a> {
    pub fn new(input: &'a dyn ButtonInput, command: Command) -> Button<'a> {
        Button { input, command }
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;

    #[test]
    fn wire_bytes_match_the_protocol_table() {
        assert_eq!(Command::ScoreUpLocal.byte(), b'a');
        assert_eq!(Command::ScoreDownLocal.byte(), b'b');
        assert_eq!(Command::ScoreUpVisitor.byte(), b'c');
        assert_eq!(Command::ScoreDownVisitor.byte(), b'd');
        assert_eq!(Command::RepeatCancel.byte(), b'e');
        assert_eq!(Command::SirenOn.byte(), b'f');
        assert_eq!(Command::ServeLocal.byte(), b'g');
        assert_eq!(Command::ServeVisitor.byte(), b'h');
        assert_eq!(Command::InvertSides.byte(), b'i');
        assert_eq!(Command::Reset.byte(), b'j');
        assert_eq!(Command::Resume.byte(), b'k');
    }
}
