// RGB LED control
//
// Three discrete legs, common cathode, active high. The blink task
// lights one leg per phase and darkens it before advancing, so at most
// one leg is ever high.

use tricycle_core::cycle::Color;

use crate::board::{LedPin, RgbHw};

pub struct RgbLed {
    hw: RgbHw,
}

impl RgbLed {
    pub fn new(hw: RgbHw) -> Self {
        Self { hw }
    }

    pub fn light(&mut self, color: Color) {
        self.leg(color).set_high();
    }

    pub fn darken(&mut self, color: Color) {
        self.leg(color).set_low();
    }

    fn leg(&mut self, color: Color) -> &mut LedPin {
        match color {
            Color::Red => &mut self.hw.red,
            Color::Green => &mut self.hw.green,
            Color::Blue => &mut self.hw.blue,
        }
    }
}
