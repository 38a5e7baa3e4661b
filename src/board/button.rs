//! Button definitions for the demo board.
//!
//! Two discrete push buttons, both active LOW with internal pull-ups.
//! Button A doubles as the ESP32-C3 BOOT key, which is free for use as
//! a plain GPIO once the chip has booted.

/// All physical buttons on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Button {
    A,
    B,
}

impl Button {
    pub const fn name(self) -> &'static str {
        match self {
            Button::A => "A",
            Button::B => "B",
        }
    }
}

impl core::fmt::Display for Button {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.name())
    }
}
