// ABOUTME: Validated domain types shared across the crate.
// ABOUTME: Serial numbers are the only external identity handle for containers.

mod serial;

pub use serial::{KindCode, SerialNumber, SerialNumberError};
