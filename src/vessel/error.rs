// ABOUTME: Error types for vessel admission and unregistration.
// ABOUTME: Admission rejections carry the numbers that drove the decision.

use crate::types::SerialNumber;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum VesselError {
    #[error("no free container slots on {vessel} (capacity {max_slots})")]
    CapacityExceeded { vessel: String, max_slots: usize },

    #[error(
        "registering {serial} would put {attempted_kg} kg aboard {vessel}, \
         over the {max_kg} kg limit"
    )]
    WeightExceeded {
        vessel: String,
        serial: SerialNumber,
        attempted_kg: f64,
        max_kg: f64,
    },

    #[error("container {serial} is already registered to {vessel}")]
    AlreadyRegistered {
        serial: SerialNumber,
        vessel: String,
    },

    #[error("container {serial} is not registered to {vessel}")]
    NotFound {
        serial: SerialNumber,
        vessel: String,
    },
}
