// Debounced polling of the two push buttons
//
// Active low: a pulled-up pin reads low while pressed. Each button has
// its own debounce latch, so chatter on one never delays sampling the
// other. 200ms hold window per press.
//
// At most one event is returned per poll; when both buttons fire on the
// same tick the second waits in the queue for the next poll.

use embassy_time::Instant;

use tricycle_core::debounce::DebouncedButton;

use crate::board::{Button, ButtonsHw};

const DEBOUNCE_MS: u64 = 200;

struct EventQueue {
    buf: [Option<Button>; 2],
}

impl EventQueue {
    const fn new() -> Self {
        Self { buf: [None; 2] }
    }

    fn push(&mut self, btn: Button) {
        for slot in self.buf.iter_mut() {
            if slot.is_none() {
                *slot = Some(btn);
                return;
            }
        }
    }

    fn pop(&mut self) -> Option<Button> {
        for slot in self.buf.iter_mut() {
            if let Some(btn) = slot.take() {
                return Some(btn);
            }
        }
        None
    }
}

pub struct ButtonPoller {
    hw: ButtonsHw,
    a: DebouncedButton,
    b: DebouncedButton,
    queue: EventQueue,
}

impl ButtonPoller {
    pub fn new(hw: ButtonsHw) -> Self {
        Self {
            hw,
            a: DebouncedButton::new(DEBOUNCE_MS),
            b: DebouncedButton::new(DEBOUNCE_MS),
            queue: EventQueue::new(),
        }
    }

    /// Sample both buttons. Returns at most one debounced press.
    pub fn poll(&mut self) -> Option<Button> {
        if let Some(btn) = self.queue.pop() {
            return Some(btn);
        }

        let now_ms = Instant::now().as_millis();

        if self.a.update(now_ms, self.hw.a.is_low()) {
            self.queue.push(Button::A);
        }
        if self.b.update(now_ms, self.hw.b.is_low()) {
            self.queue.push(Button::B);
        }

        self.queue.pop()
    }
}
