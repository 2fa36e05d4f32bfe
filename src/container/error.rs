// ABOUTME: Error types for container creation and cargo operations.
// ABOUTME: Overfill carries the attempted mass and the computed limit.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ContainerError {
    #[error("max payload must be positive, got {0} kg")]
    InvalidPayload(f64),

    #[error("cargo mass must be positive, got {0} kg")]
    InvalidMass(f64),

    #[error("loading {attempted_kg} kg exceeds the allowed limit of {limit_kg} kg")]
    Overfill { attempted_kg: f64, limit_kg: f64 },
}
