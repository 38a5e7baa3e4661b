//! One-event-per-press button latch.
//!
//! Idle until a pressed sample arrives, emit, then hold for a fixed
//! window during which every sample is discarded (mechanical bounce).
//! After the window a still-held button stays latched; only a released
//! sample re-arms the machine. Time comes in as a caller-supplied
//! millisecond clock so the machine can be driven from any timebase.

/// Debounce latch for one push button.
pub struct DebouncedButton {
    pressed: bool,
    hold_until: Option<u64>,
    hold_ms: u64,
}

impl DebouncedButton {
    pub const fn new(hold_ms: u64) -> Self {
        Self {
            pressed: false,
            hold_until: None,
            hold_ms,
        }
    }

    /// Feed one sample. Returns `true` exactly once per physical press.
    ///
    /// `active` is the raw level already mapped to "pressed" (for an
    /// active-low button, pin reads low). Samples taken inside the hold
    /// window are discarded without touching the latch.
    pub fn update(&mut self, now_ms: u64, active: bool) -> bool {
        if let Some(until) = self.hold_until {
            if now_ms < until {
                return false;
            }
            self.hold_until = None;
        }

        if !active {
            self.pressed = false;
            return false;
        }

        if self.pressed {
            return false;
        }

        self.pressed = true;
        self.hold_until = Some(now_ms + self.hold_ms);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const HOLD: u64 = 200;

    #[test]
    fn press_emits_exactly_once() {
        let mut btn = DebouncedButton::new(HOLD);
        assert!(btn.update(0, true));
        assert!(!btn.update(50, true));
    }

    #[test]
    fn bounce_inside_the_window_is_discarded() {
        let mut btn = DebouncedButton::new(HOLD);
        assert!(btn.update(0, true));
        // contact chatter right after the edge
        assert!(!btn.update(3, false));
        assert!(!btn.update(7, true));
        assert!(!btn.update(12, false));
        assert!(!btn.update(18, true));
    }

    #[test]
    fn held_button_never_repeats() {
        let mut btn = DebouncedButton::new(HOLD);
        assert!(btn.update(0, true));
        for t in (250..2000).step_by(50) {
            assert!(!btn.update(t, true));
        }
    }

    #[test]
    fn release_and_press_after_the_window_is_a_second_press() {
        let mut btn = DebouncedButton::new(HOLD);
        assert!(btn.update(0, true));
        assert!(!btn.update(250, false));
        assert!(btn.update(300, true));
    }

    #[test]
    fn two_taps_inside_one_window_count_as_one() {
        let mut btn = DebouncedButton::new(HOLD);
        assert!(btn.update(0, true));
        assert!(!btn.update(80, false));
        assert!(!btn.update(120, true));
        // window over and released: re-armed without an extra event
        assert!(!btn.update(210, false));
        assert!(btn.update(260, true));
    }

    #[test]
    fn release_bounce_at_the_window_edge_stays_latched() {
        let mut btn = DebouncedButton::new(HOLD);
        assert!(btn.update(0, true));
        assert!(!btn.update(199, false));
        assert!(!btn.update(200, true));
    }
}
