// ABOUTME: Stowage plan manifest types and parsing for stowage.yml.
// ABOUTME: Handles YAML parsing, file discovery, and the scaffolding template.

mod init;

pub use init::init_manifest;

use crate::container::ContainerKind;
use crate::error::{Error, Result};
use nonempty::NonEmpty;
use serde::Deserialize;
use std::path::Path;

pub const MANIFEST_FILENAME: &str = "stowage.yml";
pub const MANIFEST_FILENAME_ALT: &str = "stowage.yaml";
pub const MANIFEST_FILENAME_DIR: &str = ".stowage/plan.yml";

/// A stowage plan: one vessel and the containers to load onto it, in order.
#[derive(Debug, Clone, Deserialize)]
pub struct Manifest {
    pub vessel: VesselSpec,

    #[serde(deserialize_with = "deserialize_containers")]
    pub containers: NonEmpty<ContainerSpec>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct VesselSpec {
    pub name: String,

    #[serde(default = "default_max_speed")]
    pub max_speed_knots: f64,

    pub max_container_slots: usize,

    pub max_total_weight_tons: f64,
}

/// One container entry: its kind attributes, capacity, and declared load.
#[derive(Debug, Clone, Deserialize)]
pub struct ContainerSpec {
    #[serde(flatten)]
    pub kind: ContainerKind,

    pub max_payload_kg: f64,

    #[serde(default)]
    pub load_kg: Option<f64>,
}

fn default_max_speed() -> f64 {
    10.0
}

fn deserialize_containers<'de, D>(
    deserializer: D,
) -> std::result::Result<NonEmpty<ContainerSpec>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let values: Vec<ContainerSpec> = Vec::deserialize(deserializer)?;
    NonEmpty::from_vec(values)
        .ok_or_else(|| serde::de::Error::custom("at least one container is required"))
}

impl Manifest {
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        serde_yaml::from_str(yaml).map_err(Error::from)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    pub fn discover(dir: &Path) -> Result<Self> {
        let candidates = [
            dir.join(MANIFEST_FILENAME),
            dir.join(MANIFEST_FILENAME_ALT),
            dir.join(MANIFEST_FILENAME_DIR),
        ];

        for path in &candidates {
            if path.exists() {
                return Self::load(path);
            }
        }

        Err(Error::ManifestNotFound(dir.to_path_buf()))
    }

    /// Template plan used by `init` scaffolding and tests.
    pub fn template() -> Self {
        Manifest {
            vessel: VesselSpec {
                name: "Ship 1".to_string(),
                max_speed_knots: 10.0,
                max_container_slots: 100,
                max_total_weight_tons: 40_000.0,
            },
            containers: NonEmpty::from((
                ContainerSpec {
                    kind: ContainerKind::Liquid { hazardous: true },
                    max_payload_kg: 10_000.0,
                    load_kg: Some(4_000.0),
                },
                vec![
                    ContainerSpec {
                        kind: ContainerKind::Gas { pressure_atm: 2.5 },
                        max_payload_kg: 8_000.0,
                        load_kg: Some(7_000.0),
                    },
                    ContainerSpec {
                        kind: ContainerKind::Refrigerated {
                            height_cm: 250.0,
                            depth_cm: 150.0,
                            tare_weight_kg: 3_000.0,
                            product_type: "milk".to_string(),
                            temperature_c: 4.0,
                        },
                        max_payload_kg: 12_000.0,
                        load_kg: Some(10_000.0),
                    },
                ],
            )),
        }
    }

    /// Total declared load across all container entries, in kilograms.
    pub fn declared_load_kg(&self) -> f64 {
        self.containers.iter().filter_map(|c| c.load_kg).sum()
    }
}
