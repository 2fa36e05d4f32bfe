// ABOUTME: Stowage plan execution: create, load, and admit containers in order.
// ABOUTME: Rejections are reported in the outcome, not raised as errors.

use crate::container::{Container, ContainerError, SerialAllocator};
use crate::error::{Error, Result};
use crate::manifest::Manifest;
use crate::types::SerialNumber;
use crate::vessel::{Vessel, VesselSnapshot};
use serde::Serialize;

/// Result of executing a stowage plan.
///
/// `stowed` and `rejected` together cover every container entry in manifest
/// order. A rejection (overfilled load or failed admission) does not abort
/// the plan; only a malformed manifest does.
#[derive(Debug, Serialize)]
pub struct PlanOutcome {
    pub vessel: VesselSnapshot,
    pub stowed: Vec<SerialNumber>,
    pub rejected: Vec<RejectedContainer>,
}

#[derive(Debug, Clone, Serialize)]
pub struct RejectedContainer {
    pub serial: SerialNumber,
    pub reason: String,
}

impl PlanOutcome {
    pub fn all_stowed(&self) -> bool {
        self.rejected.is_empty()
    }
}

/// Execute a stowage plan against a fresh vessel.
///
/// Serial numbers are allocated from a fresh per-plan allocator, so the same
/// manifest always produces the same serials.
pub fn execute(manifest: &Manifest) -> Result<PlanOutcome> {
    let serials = SerialAllocator::new();
    let spec = &manifest.vessel;
    let mut vessel = Vessel::new(
        &spec.name,
        spec.max_speed_knots,
        spec.max_container_slots,
        spec.max_total_weight_tons,
    );

    let mut stowed = Vec::new();
    let mut rejected = Vec::new();

    for entry in &manifest.containers {
        let mut container = Container::new(entry.kind.clone(), entry.max_payload_kg, &serials)
            .map_err(|e| Error::InvalidManifest(e.to_string()))?;
        let serial = container.serial();

        if let Some(load_kg) = entry.load_kg {
            match container.load_cargo(load_kg) {
                Ok(_) => {}
                Err(e @ ContainerError::InvalidMass(_)) => {
                    return Err(Error::InvalidManifest(e.to_string()));
                }
                Err(e) => {
                    tracing::warn!(%serial, "load rejected: {e}");
                    rejected.push(RejectedContainer {
                        serial,
                        reason: e.to_string(),
                    });
                    continue;
                }
            }
        }

        let handle = container.into_shared();
        match vessel.register(&handle) {
            Ok(()) => stowed.push(serial),
            Err(e) => {
                tracing::warn!(%serial, "admission rejected: {e}");
                rejected.push(RejectedContainer {
                    serial,
                    reason: e.to_string(),
                });
            }
        }
    }

    Ok(PlanOutcome {
        vessel: vessel.snapshot(),
        stowed,
        rejected,
    })
}
