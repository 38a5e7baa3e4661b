// tricycle entry point
//
// Boot sequence: logger -> clocks/heap -> esp-rtos -> board -> tasks
//
// The two actuators share the thread-mode executor on equal footing;
// the input monitor runs on an InterruptExecutor at Priority1 so a
// button press gets sampled on schedule even while both actuators are
// runnable. Suspend/resume travels through two RunGate statics, one
// per actuator, handed to the tasks at spawn: the monitor holds the
// writer end of both, each actuator the reader end of its own, and
// nothing else is shared.

#![no_std]
#![no_main]

use embassy_executor::Spawner;
use embassy_time::{Duration, Timer};
use esp_backtrace as _;
use esp_hal::clock::CpuClock;
use esp_hal::interrupt::Priority;
use esp_hal::interrupt::software::SoftwareInterruptControl;
use esp_hal::timer::timg::TimerGroup;
use esp_rtos::embassy::InterruptExecutor;
use log::{debug, info};
use static_cell::StaticCell;

use tricycle::board::Board;
use tricycle::drivers::buttons::ButtonPoller;
use tricycle::drivers::buzzer::Buzzer;
use tricycle::drivers::rgb::RgbLed;
use tricycle::tasks::{beep_task, blink_task, monitor_task};
use tricycle_core::run::RunGate;

esp_bootloader_esp_idf::esp_app_desc!();

const HEAP_BYTES: usize = 64 * 1024;

// One gate per actuator. The monitor writes, the owning actuator reads.
static BLINK_GATE: RunGate = RunGate::new();
static BEEP_GATE: RunGate = RunGate::new();

static MONITOR_EXECUTOR: StaticCell<InterruptExecutor<1>> = StaticCell::new();

#[esp_rtos::main]
async fn main(spawner: Spawner) {
    esp_println::logger::init_logger_from_env();
    let config = esp_hal::Config::default().with_cpu_clock(CpuClock::max());
    let peripherals = esp_hal::init(config);
    esp_alloc::heap_allocator!(size: HEAP_BYTES);

    info!("booting...");

    let timg0 = TimerGroup::new(unsafe { peripherals.TIMG0.clone_unchecked() });
    let sw_int =
        SoftwareInterruptControl::new(unsafe { peripherals.SW_INTERRUPT.clone_unchecked() });
    esp_rtos::start(timg0.timer0, sw_int.software_interrupt0);
    info!("kernel started.");

    let board = Board::init(peripherals);
    let led = RgbLed::new(board.rgb);
    let buzzer = Buzzer::new(board.buzzer);
    let buttons = ButtonPoller::new(board.buttons);
    info!("hardware initialized.");

    let monitor_executor =
        MONITOR_EXECUTOR.init(InterruptExecutor::new(sw_int.software_interrupt1));
    let monitor_spawner = monitor_executor.start(Priority::Priority1);
    monitor_spawner.must_spawn(monitor_task(buttons, &BLINK_GATE, &BEEP_GATE));

    spawner.must_spawn(blink_task(led, &BLINK_GATE));
    spawner.must_spawn(beep_task(buzzer, &BEEP_GATE));
    info!("tasks running.");

    loop {
        Timer::after(Duration::from_secs(60)).await;
        let stats = esp_alloc::HEAP.stats();
        debug!("heap: {} of {} bytes used", stats.current_usage, HEAP_BYTES);
    }
}
