//! Encode and decode XBee API frames, and talk to a device over a
//! serial port.

mod client;
pub use client::*;

pub mod protocol;
