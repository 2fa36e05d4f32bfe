// ABOUTME: The cargo container entity and its shared handle.
// ABOUTME: Enforces the per-kind fill-limit invariant on every load.

mod error;
pub mod hazard;
mod kind;
mod serial;

pub use error::ContainerError;
pub use hazard::HazardNotifier;
pub use kind::ContainerKind;
pub use serial::SerialAllocator;

use crate::types::SerialNumber;
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Shared handle to a container.
///
/// A vessel holds a clone of the handle while the container is aboard; the
/// caller keeps theirs, so unregistering never destroys the container. Cargo
/// mutation goes through the handle's lock.
pub type SharedContainer = Arc<Mutex<Container>>;

/// A cargo container of a fixed kind and payload capacity.
///
/// Cargo never exceeds `max_payload_kg * fill_limit_fraction` for the
/// container's kind. Loads are all-or-nothing.
#[derive(Debug)]
pub struct Container {
    serial: SerialNumber,
    kind: ContainerKind,
    max_payload_kg: f64,
    current_cargo_kg: f64,
    berth: Option<String>,
}

/// What an empty operation removed and what the kind policy left behind.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EmptyReceipt {
    pub prior_kg: f64,
    pub remaining_kg: f64,
}

/// Read-only snapshot of a container, serializable for persistence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContainerSnapshot {
    pub serial: SerialNumber,
    #[serde(flatten)]
    pub kind: ContainerKind,
    pub max_payload_kg: f64,
    pub current_cargo_kg: f64,
}

impl Container {
    /// Create an empty container with a freshly allocated serial number.
    pub fn new(
        kind: ContainerKind,
        max_payload_kg: f64,
        serials: &SerialAllocator,
    ) -> Result<Self, ContainerError> {
        if max_payload_kg <= 0.0 {
            return Err(ContainerError::InvalidPayload(max_payload_kg));
        }

        let serial = serials.next(kind.code());
        tracing::debug!(%serial, "container created");

        Ok(Self {
            serial,
            kind,
            max_payload_kg,
            current_cargo_kg: 0.0,
            berth: None,
        })
    }

    /// Load cargo, all-or-nothing.
    ///
    /// Fails when the new total would exceed the kind's fill limit, leaving
    /// the current cargo untouched. Returns the new total on success.
    pub fn load_cargo(&mut self, mass_kg: f64) -> Result<f64, ContainerError> {
        if mass_kg <= 0.0 {
            return Err(ContainerError::InvalidMass(mass_kg));
        }

        let limit_kg = self.fill_limit_kg();
        if self.current_cargo_kg + mass_kg > limit_kg {
            return Err(ContainerError::Overfill {
                attempted_kg: mass_kg,
                limit_kg,
            });
        }

        self.current_cargo_kg += mass_kg;
        tracing::debug!(
            serial = %self.serial,
            loaded_kg = mass_kg,
            total_kg = self.current_cargo_kg,
            "cargo loaded"
        );
        Ok(self.current_cargo_kg)
    }

    /// Empty the container, leaving the kind's residual fraction behind.
    ///
    /// Gas containers keep 5% of the cargo present at empty time, so repeated
    /// empties compound instead of reaching zero. Always succeeds.
    pub fn empty_cargo(&mut self) -> EmptyReceipt {
        let prior_kg = self.current_cargo_kg;
        let remaining_kg = prior_kg * self.kind.residual_fraction();
        self.current_cargo_kg = remaining_kg;
        tracing::debug!(
            serial = %self.serial,
            prior_kg,
            remaining_kg,
            "container emptied"
        );
        EmptyReceipt {
            prior_kg,
            remaining_kg,
        }
    }

    /// Read-only snapshot for listing and persistence. No side effects.
    pub fn snapshot(&self) -> ContainerSnapshot {
        ContainerSnapshot {
            serial: self.serial,
            kind: self.kind.clone(),
            max_payload_kg: self.max_payload_kg,
            current_cargo_kg: self.current_cargo_kg,
        }
    }

    pub fn serial(&self) -> SerialNumber {
        self.serial
    }

    pub fn kind(&self) -> &ContainerKind {
        &self.kind
    }

    pub fn max_payload_kg(&self) -> f64 {
        self.max_payload_kg
    }

    pub fn current_cargo_kg(&self) -> f64 {
        self.current_cargo_kg
    }

    /// Maximum cargo this container may hold under its kind policy.
    pub fn fill_limit_kg(&self) -> f64 {
        self.max_payload_kg * self.kind.fill_limit_fraction()
    }

    /// Name of the vessel this container is registered to, if any.
    pub fn berth(&self) -> Option<&str> {
        self.berth.as_deref()
    }

    pub(crate) fn set_berth(&mut self, vessel: Option<String>) {
        self.berth = vessel;
    }

    /// Wrap into the shared handle used for vessel registration.
    pub fn into_shared(self) -> SharedContainer {
        Arc::new(Mutex::new(self))
    }
}
