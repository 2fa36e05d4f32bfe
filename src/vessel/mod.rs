// ABOUTME: Vessel registry owning the collection of registered containers.
// ABOUTME: Admission control checks slots first, then aggregate cargo weight.

mod error;

pub use error::VesselError;

use crate::container::{ContainerSnapshot, SharedContainer};
use crate::types::SerialNumber;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

const KG_PER_TON: f64 = 1000.0;

/// A vessel with a fixed number of container slots and a total weight budget.
///
/// Containers are kept in registration order; positions are append-only.
#[derive(Debug)]
pub struct Vessel {
    name: String,
    max_speed_knots: f64,
    max_container_slots: usize,
    max_total_weight_tons: f64,
    containers: Vec<SharedContainer>,
}

/// Read-only listing of a vessel and its registered containers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VesselSnapshot {
    pub name: String,
    pub max_speed_knots: f64,
    pub max_container_slots: usize,
    pub max_total_weight_tons: f64,
    pub total_cargo_kg: f64,
    pub containers: Vec<ContainerSnapshot>,
    pub taken_at: DateTime<Utc>,
}

impl Vessel {
    pub fn new(
        name: impl Into<String>,
        max_speed_knots: f64,
        max_container_slots: usize,
        max_total_weight_tons: f64,
    ) -> Self {
        Self {
            name: name.into(),
            max_speed_knots,
            max_container_slots,
            max_total_weight_tons,
            containers: Vec::new(),
        }
    }

    /// Register a container, re-validating vessel-level constraints.
    ///
    /// Checks run in a fixed order: free slots first, then whether the
    /// container is already aboard a vessel, then the aggregate weight of
    /// cargo already aboard plus the candidate's. The weight check trusts
    /// each container's own fill-limit invariant, which was enforced at load
    /// time. On success the container is appended and the vessel holds a
    /// handle alongside the caller's.
    pub fn register(&mut self, container: &SharedContainer) -> Result<(), VesselError> {
        if self.containers.len() >= self.max_container_slots {
            return Err(VesselError::CapacityExceeded {
                vessel: self.name.clone(),
                max_slots: self.max_container_slots,
            });
        }

        // Lock order: vessel state is exclusive through &mut self, container
        // locks are only taken afterwards.
        let mut candidate = container.lock();

        if let Some(berth) = candidate.berth() {
            return Err(VesselError::AlreadyRegistered {
                serial: candidate.serial(),
                vessel: berth.to_string(),
            });
        }

        let aboard_kg = self.total_cargo_kg();
        let attempted_kg = aboard_kg + candidate.current_cargo_kg();
        let max_kg = self.max_total_weight_kg();
        if attempted_kg > max_kg {
            return Err(VesselError::WeightExceeded {
                vessel: self.name.clone(),
                serial: candidate.serial(),
                attempted_kg,
                max_kg,
            });
        }

        candidate.set_berth(Some(self.name.clone()));
        tracing::info!(
            serial = %candidate.serial(),
            vessel = %self.name,
            aboard_kg = attempted_kg,
            "container registered"
        );
        drop(candidate);

        self.containers.push(container.clone());
        Ok(())
    }

    /// Remove the container with the given serial and return its handle.
    ///
    /// The container itself is not destroyed; the caller retains it and may
    /// register it elsewhere.
    pub fn unregister(&mut self, serial: SerialNumber) -> Result<SharedContainer, VesselError> {
        let position = self
            .containers
            .iter()
            .position(|c| c.lock().serial() == serial)
            .ok_or_else(|| VesselError::NotFound {
                serial,
                vessel: self.name.clone(),
            })?;

        let container = self.containers.remove(position);
        container.lock().set_berth(None);
        tracing::info!(%serial, vessel = %self.name, "container unregistered");
        Ok(container)
    }

    /// Read-only listing of the vessel and its containers. No side effects.
    pub fn snapshot(&self) -> VesselSnapshot {
        VesselSnapshot {
            name: self.name.clone(),
            max_speed_knots: self.max_speed_knots,
            max_container_slots: self.max_container_slots,
            max_total_weight_tons: self.max_total_weight_tons,
            total_cargo_kg: self.total_cargo_kg(),
            containers: self.containers.iter().map(|c| c.lock().snapshot()).collect(),
            taken_at: Utc::now(),
        }
    }

    /// Aggregate cargo weight across registered containers, in kilograms.
    pub fn total_cargo_kg(&self) -> f64 {
        self.containers
            .iter()
            .map(|c| c.lock().current_cargo_kg())
            .sum()
    }

    pub fn container_count(&self) -> usize {
        self.containers.len()
    }

    pub fn max_total_weight_kg(&self) -> f64 {
        self.max_total_weight_tons * KG_PER_TON
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn max_speed_knots(&self) -> f64 {
        self.max_speed_knots
    }

    pub fn max_container_slots(&self) -> usize {
        self.max_container_slots
    }
}
