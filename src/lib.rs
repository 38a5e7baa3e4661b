// three-task suspend/resume demo for the ESP32-C3 (RGB LED, buzzer, buttons)

#![no_std]

pub mod board;
pub mod drivers;
pub mod tasks;
