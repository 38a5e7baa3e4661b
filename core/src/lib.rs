// tricycle-core: hardware-independent control logic for the tricycle demo.
// run:      single-writer run/pause gate with async waiting
// debounce: one-event-per-press button latch with a bounce hold window
// cycle:    red -> green -> blue phase sequencer
// cadence:  short-on / long-off beep duty pattern

#![no_std]

pub mod cadence;
pub mod cycle;
pub mod debounce;
pub mod run;
