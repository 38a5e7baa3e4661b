//! GPIO |   Function   |      Notes
//! -----+--------------+----------------------------------
//!  3   | LED Red      | Push-pull output, active HIGH
//!  4   | LED Green    | Push-pull output, active HIGH
//!  5   | LED Blue     | Push-pull output, active HIGH
//!  6   | Buzzer PWM   | LEDC low-speed channel 0, passive buzzer
//!  9   | Button A     | BOOT key, active LOW, internal pullup
//! 10   | Button B     | Active LOW, internal pullup

// ----- RGB LED (common cathode) -----
pub const LED_R: u8 = 3;
pub const LED_G: u8 = 4;
pub const LED_B: u8 = 5;

// ----- Buzzer -----
pub const BUZZER_PWM: u8 = 6;

// ----- Buttons -----
pub const BTN_A: u8 = 9; // BOOT key, digital, active LOW
pub const BTN_B: u8 = 10; // digital, active LOW
