// LCD keypad shield demo firmware (ESP32-C3)

#![no_std]

pub mod board;
pub mod drivers;
