// Peripheral drivers — wrap the board's hardware bundles in the small
// vocabulary the tasks speak: colors, tone on/off, debounced presses.
//
// Pin assignments and PWM wiring live in board/; nothing here knows a
// GPIO number.

pub mod buttons;
pub mod buzzer;
pub mod rgb;
