//! Single-writer run/pause gate.
//!
//! [`RunGate`] is the one piece of state shared between the input monitor
//! and an actuator task: the monitor flips it, the actuator observes it.
//! One gate per actuator; gates never interact.
//!
//! The flag itself is an [`AtomicBool`] accessed with plain load/store
//! (riscv32imc has no atomic RMW, and with a single writer none is
//! needed). Every transition is additionally latched into a [`Signal`],
//! so a parked actuator wakes without polling and a resume can never
//! slip between its state check and its wait.

use core::sync::atomic::{AtomicBool, Ordering};

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::signal::Signal;

/// Whether the gated actuator should be doing work.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunState {
    Running,
    Paused,
}

impl RunState {
    /// The opposite state.
    pub const fn flipped(self) -> RunState {
        match self {
            RunState::Running => RunState::Paused,
            RunState::Paused => RunState::Running,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            RunState::Running => "running",
            RunState::Paused => "paused",
        }
    }
}

impl core::fmt::Display for RunState {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.name())
    }
}

/// Pause/resume gate between the input monitor and one actuator.
///
/// Single writer (the monitor), single reader (the actuator). A gate
/// starts [`RunState::Running`].
pub struct RunGate {
    paused: AtomicBool,
    transitions: Signal<CriticalSectionRawMutex, RunState>,
}

impl RunGate {
    pub const fn new() -> Self {
        Self {
            paused: AtomicBool::new(false),
            transitions: Signal::new(),
        }
    }

    /// Current state as last written by the monitor.
    pub fn state(&self) -> RunState {
        if self.is_paused() {
            RunState::Paused
        } else {
            RunState::Running
        }
    }

    pub fn is_paused(&self) -> bool {
        self.paused.load(Ordering::Acquire)
    }

    /// Flip the state and return the new value. Writer side.
    ///
    /// Load-then-store, which is sound only because the monitor is the
    /// sole writer.
    pub fn toggle(&self) -> RunState {
        let next = self.state().flipped();
        self.set(next);
        next
    }

    /// Force [`RunState::Paused`]. Writer side.
    pub fn pause(&self) {
        self.set(RunState::Paused);
    }

    /// Force [`RunState::Running`]. Writer side.
    pub fn resume(&self) {
        self.set(RunState::Running);
    }

    fn set(&self, state: RunState) {
        self.paused
            .store(matches!(state, RunState::Paused), Ordering::Release);
        self.transitions.signal(state);
    }

    /// Wait until the gate is open. Reader side.
    ///
    /// Returns immediately while running. While paused, parks on the
    /// transition signal and re-checks; a resume latched before the wait
    /// began is picked up, not lost.
    pub async fn until_running(&self) {
        while self.is_paused() {
            self.transitions.wait().await;
        }
    }

    /// Wait for the next state transition and return it. Reader side.
    ///
    /// Consumes the latched transition if one is already pending.
    pub async fn changed(&self) -> RunState {
        self.transitions.wait().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use core::future::Future;
    use core::pin::{Pin, pin};
    use core::task::{Context, Poll, Waker};

    fn poll_once<F: Future>(fut: Pin<&mut F>) -> Poll<F::Output> {
        let mut cx = Context::from_waker(Waker::noop());
        fut.poll(&mut cx)
    }

    #[test]
    fn starts_running() {
        let gate = RunGate::new();
        assert_eq!(gate.state(), RunState::Running);
        assert!(!gate.is_paused());
    }

    #[test]
    fn toggle_flips_and_reports_the_new_state() {
        let gate = RunGate::new();
        assert_eq!(gate.toggle(), RunState::Paused);
        assert!(gate.is_paused());
        assert_eq!(gate.toggle(), RunState::Running);
        assert!(!gate.is_paused());
    }

    #[test]
    fn until_running_is_ready_while_running() {
        let gate = RunGate::new();
        let mut fut = pin!(gate.until_running());
        assert_eq!(poll_once(fut.as_mut()), Poll::Ready(()));
    }

    #[test]
    fn until_running_parks_until_resume() {
        let gate = RunGate::new();
        gate.pause();

        let mut fut = pin!(gate.until_running());
        assert_eq!(poll_once(fut.as_mut()), Poll::Pending);

        gate.resume();
        assert_eq!(poll_once(fut.as_mut()), Poll::Ready(()));
    }

    #[test]
    fn resume_latched_before_the_wait_is_not_lost() {
        let gate = RunGate::new();
        gate.pause();
        gate.resume();

        let mut fut = pin!(gate.changed());
        assert_eq!(poll_once(fut.as_mut()), Poll::Ready(RunState::Running));
    }

    #[test]
    fn changed_consumes_the_latched_transition() {
        let gate = RunGate::new();
        gate.pause();
        {
            let mut fut = pin!(gate.changed());
            assert_eq!(poll_once(fut.as_mut()), Poll::Ready(RunState::Paused));
        }

        let mut fut = pin!(gate.changed());
        assert_eq!(poll_once(fut.as_mut()), Poll::Pending);
    }

    #[test]
    fn gates_are_independent() {
        let blink = RunGate::new();
        let beep = RunGate::new();

        blink.toggle();
        assert!(blink.is_paused());
        assert!(!beep.is_paused());

        beep.toggle();
        blink.toggle();
        assert!(!blink.is_paused());
        assert!(beep.is_paused());
    }
}
