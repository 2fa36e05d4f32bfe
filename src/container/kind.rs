// ABOUTME: Container kind policy: fill limits and empty-residual behavior.
// ABOUTME: A closed set of tagged variants, no subclassing or virtual dispatch.

use crate::types::KindCode;
use serde::{Deserialize, Serialize};

/// Default fill limit: containers may hold 90% of their max payload.
const DEFAULT_FILL_LIMIT: f64 = 0.90;

/// Hazardous liquids are capped at half the max payload.
const HAZARDOUS_LIQUID_FILL_LIMIT: f64 = 0.50;

/// Gas containers keep 5% of their cargo on every empty.
const GAS_EMPTY_RESIDUAL: f64 = 0.05;

/// The physical kind of a container, with its kind-specific attributes.
///
/// The kind fixes the fill-limit and empty-residual policy at creation time.
/// Refrigerated containers carry product and temperature attributes; checking
/// product/temperature consistency on load is an extension point the baseline
/// policy does not enforce.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum ContainerKind {
    Liquid {
        #[serde(default)]
        hazardous: bool,
    },
    Gas {
        pressure_atm: f64,
    },
    Refrigerated {
        height_cm: f64,
        depth_cm: f64,
        tare_weight_kg: f64,
        product_type: String,
        temperature_c: f64,
    },
}

impl ContainerKind {
    /// The one-letter code embedded in this kind's serial numbers.
    pub fn code(&self) -> KindCode {
        match self {
            ContainerKind::Liquid { .. } => KindCode::Liquid,
            ContainerKind::Gas { .. } => KindCode::Gas,
            ContainerKind::Refrigerated { .. } => KindCode::Refrigerated,
        }
    }

    /// Maximum proportion of the max payload this kind may hold at once.
    pub fn fill_limit_fraction(&self) -> f64 {
        match self {
            ContainerKind::Liquid { hazardous: true } => HAZARDOUS_LIQUID_FILL_LIMIT,
            _ => DEFAULT_FILL_LIMIT,
        }
    }

    /// Proportion of the cargo present at empty time that stays behind.
    pub fn residual_fraction(&self) -> f64 {
        match self {
            ContainerKind::Gas { .. } => GAS_EMPTY_RESIDUAL,
            _ => 0.0,
        }
    }

    /// Human-readable kind name, matching the manifest tag.
    pub fn label(&self) -> &'static str {
        match self {
            ContainerKind::Liquid { .. } => "liquid",
            ContainerKind::Gas { .. } => "gas",
            ContainerKind::Refrigerated { .. } => "refrigerated",
        }
    }
}
