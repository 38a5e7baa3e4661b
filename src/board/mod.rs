//! Demo board support package
//!
//! This module provides hardware abstraction for the three-task demo
//! board. It maps physical hardware to named subsystems so that driver
//! and task code doesn't need to know GPIO numbers or peripheral
//! details: an RGB LED on three push-pull outputs, a passive buzzer on
//! a LEDC PWM channel, and two active-low push buttons.

pub mod button;
pub mod pins;

pub use button::Button;

use esp_hal::{
    gpio::{Input, InputConfig, Level, Output, OutputConfig, Pull},
    ledc::{
        LSGlobalClkSource, Ledc, LowSpeed,
        channel::{self, ChannelIFace},
        timer::{self, TimerIFace},
    },
    peripherals::Peripherals,
    time::Rate,
};
use static_cell::StaticCell;

// Type Aliases
pub type LedPin = Output<'static>;
pub type ButtonPin = Input<'static>;
pub type BuzzerPwm = channel::Channel<'static, LowSpeed>;

/// Tone frequency of the passive buzzer while sounding.
pub const BEEP_FREQ_KHZ: u32 = 2;

// The LEDC channel borrows its timer for 'static, so the peripheral
// driver and the configured tone timer both live in statics.
static LEDC: StaticCell<Ledc<'static>> = StaticCell::new();
static TONE_TIMER: StaticCell<timer::Timer<'static, LowSpeed>> = StaticCell::new();

// Hardware Bundles
/// RGB LED subsystem hardware: one push-pull output per leg, active high.
pub struct RgbHw {
    pub red: LedPin,
    pub green: LedPin,
    pub blue: LedPin,
}

/// Buzzer subsystem hardware: a LEDC channel with the tone timer bound.
pub struct BuzzerHw {
    pub pwm: BuzzerPwm,
}

/// Button subsystem hardware: two pulled-up, active-low inputs.
pub struct ButtonsHw {
    pub a: ButtonPin,
    pub b: ButtonPin,
}

/// Complete board hardware, ready for driver initialization.
pub struct Board {
    pub rgb: RgbHw,
    pub buzzer: BuzzerHw,
    pub buttons: ButtonsHw,
}

impl Board {
    /// Bring every output up in its inactive state: LED legs low (dark),
    /// buzzer duty zero (silent).
    pub fn init(p: Peripherals) -> Self {
        let rgb = Self::init_rgb(&p);
        let buttons = Self::init_buttons(&p);
        let buzzer = Self::init_buzzer(p);
        Board {
            rgb,
            buzzer,
            buttons,
        }
    }

    fn init_rgb(p: &Peripherals) -> RgbHw {
        let red = Output::new(
            unsafe { p.GPIO3.clone_unchecked() },
            Level::Low,
            OutputConfig::default(),
        );
        let green = Output::new(
            unsafe { p.GPIO4.clone_unchecked() },
            Level::Low,
            OutputConfig::default(),
        );
        let blue = Output::new(
            unsafe { p.GPIO5.clone_unchecked() },
            Level::Low,
            OutputConfig::default(),
        );

        RgbHw { red, green, blue }
    }

    fn init_buttons(p: &Peripherals) -> ButtonsHw {
        let a = Input::new(
            unsafe { p.GPIO9.clone_unchecked() },
            InputConfig::default().with_pull(Pull::Up),
        );
        let b = Input::new(
            unsafe { p.GPIO10.clone_unchecked() },
            InputConfig::default().with_pull(Pull::Up),
        );

        ButtonsHw { a, b }
    }

    fn init_buzzer(p: Peripherals) -> BuzzerHw {
        let ledc = LEDC.init(Ledc::new(p.LEDC));
        ledc.set_global_slow_clock(LSGlobalClkSource::APBClk);

        let tone_timer = TONE_TIMER.init(ledc.timer::<LowSpeed>(timer::Number::Timer0));
        tone_timer
            .configure(timer::config::Config {
                duty: timer::config::Duty::Duty12Bit,
                clock_source: timer::LSClockSource::APBClk,
                frequency: Rate::from_khz(BEEP_FREQ_KHZ),
            })
            .unwrap();

        let mut pwm = ledc.channel::<LowSpeed>(channel::Number::Channel0, p.GPIO6);
        pwm.configure(channel::config::Config {
            timer: tone_timer,
            duty_pct: 0,
            pin_config: channel::config::PinConfig::PushPull,
        })
        .unwrap();

        BuzzerHw { pwm }
    }
}
