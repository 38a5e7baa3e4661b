// Embassy spawned tasks — the two actuators and the input monitor
//
// Each actuator owns its output driver plus a RunGate handle received
// at spawn; the monitor owns the button poller and the writer end of
// both gates. No task touches another task's hardware, and the gates
// are the only shared state.
//
//   • `blink_task`    — steps the RGB LED red -> green -> blue, one
//                       color per 500 ms phase.
//
//   • `beep_task`     — 200 ms tone, 800 ms silence.
//
//   • `monitor_task`  — polls the buttons every 50 ms; button A toggles
//                       the blinker's gate, button B the beeper's.
//
// Pausing freezes an actuator in place: `gate_sleep` stops the phase
// timer with the remaining time banked, and the output pins hold
// whatever level they had. Resume finishes the interrupted phase before
// the actuator advances.

use embassy_futures::select::{Either, select};
use embassy_time::{Duration, Instant, Ticker, Timer};
use log::{debug, info};

use tricycle_core::cadence::BeepCadence;
use tricycle_core::cycle::ColorCycle;
use tricycle_core::run::RunGate;

use crate::board::Button;
use crate::drivers::buttons::ButtonPoller;
use crate::drivers::buzzer::Buzzer;
use crate::drivers::rgb::RgbLed;

/// Time each color stays lit.
const LED_PHASE: Duration = Duration::from_millis(500);

/// Sounding segment of the beep cadence.
const BEEP_ON_MS: u64 = 200;

/// Silent segment of the beep cadence.
const BEEP_OFF_MS: u64 = 800;

/// Button sampling interval.
const POLL_INTERVAL: Duration = Duration::from_millis(50);

#[embassy_executor::task]
pub async fn blink_task(mut led: RgbLed, gate: &'static RunGate) -> ! {
    let mut cycle = ColorCycle::new();

    loop {
        gate.until_running().await;

        let color = cycle.current();
        led.light(color);
        debug!("led: {}", color);

        gate_sleep(gate, LED_PHASE).await;

        led.darken(color);
        cycle.advance();
    }
}

#[embassy_executor::task]
pub async fn beep_task(mut buzzer: Buzzer, gate: &'static RunGate) -> ! {
    let mut cadence = BeepCadence::new(BEEP_ON_MS, BEEP_OFF_MS);

    loop {
        gate.until_running().await;

        let seg = cadence.current();
        buzzer.drive(seg.sounding);

        gate_sleep(gate, Duration::from_millis(seg.len_ms)).await;

        cadence.advance();
    }
}

#[embassy_executor::task]
pub async fn monitor_task(
    mut buttons: ButtonPoller,
    blink_gate: &'static RunGate,
    beep_gate: &'static RunGate,
) -> ! {
    let mut ticker = Ticker::every(POLL_INTERVAL);

    loop {
        ticker.next().await;

        let Some(btn) = buttons.poll() else {
            continue;
        };

        let (name, gate) = match btn {
            Button::A => ("blinker", blink_gate),
            Button::B => ("beeper", beep_gate),
        };
        info!("button {}: {} {}", btn, name, gate.toggle());
    }
}

/// Sleep that honours the caller's gate.
///
/// Races the phase timer against the gate's transitions. A pause
/// landing mid-sleep banks the remaining time and parks the task;
/// resume picks the countdown back up where it stopped. The caller's
/// output pins are untouched the whole while, which is what freezes
/// the actuator in place.
async fn gate_sleep(gate: &RunGate, duration: Duration) {
    let mut remaining = duration;

    loop {
        gate.until_running().await;

        let started = Instant::now();
        match select(Timer::after(remaining), gate.changed()).await {
            Either::First(()) => return,
            Either::Second(_) => {
                remaining = remaining
                    .checked_sub(started.elapsed())
                    .unwrap_or(Duration::from_ticks(0));
            }
        }
    }
}
