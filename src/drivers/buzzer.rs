// Passive buzzer tone switching
//
// The LEDC timer holds the tone frequency (fixed at board init);
// sounding and silence are duty swaps. 50% duty carries the tone,
// 0% parks the pin low.

use esp_hal::ledc::channel::ChannelIFace;

use crate::board::BuzzerHw;

const BEEP_DUTY_PCT: u8 = 50;

pub struct Buzzer {
    hw: BuzzerHw,
}

impl Buzzer {
    pub fn new(hw: BuzzerHw) -> Self {
        Self { hw }
    }

    /// Switch the tone on or off.
    pub fn drive(&mut self, sounding: bool) {
        let duty = if sounding { BEEP_DUTY_PCT } else { 0 };
        // set_duty only fails for duty > 100
        self.hw.pwm.set_duty(duty).unwrap();
    }
}
