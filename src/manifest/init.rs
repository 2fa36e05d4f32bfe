// ABOUTME: Manifest scaffolding for new projects.
// ABOUTME: Creates stowage.yml template files.

use std::path::Path;

use crate::error::{Error, Result};

use super::{MANIFEST_FILENAME, Manifest};

pub fn init_manifest(dir: &Path, vessel_name: Option<&str>, force: bool) -> Result<()> {
    let manifest_path = dir.join(MANIFEST_FILENAME);

    if manifest_path.exists() && !force {
        return Err(Error::AlreadyExists(manifest_path));
    }

    let mut manifest = Manifest::template();

    if let Some(name) = vessel_name {
        if name.trim().is_empty() {
            return Err(Error::InvalidManifest(
                "vessel name cannot be empty".to_string(),
            ));
        }
        manifest.vessel.name = name.to_string();
    }

    let yaml = generate_template_yaml(&manifest);
    std::fs::write(&manifest_path, yaml)?;

    Ok(())
}

fn generate_template_yaml(manifest: &Manifest) -> String {
    let vessel = &manifest.vessel;
    format!(
        r#"vessel:
  name: {}
  max_speed_knots: {}
  max_container_slots: {}
  max_total_weight_tons: {}

containers:
  # Hazardous liquids are capped at 50% of max payload, everything else at 90%.
  - kind: liquid
    hazardous: true
    max_payload_kg: 10000
    load_kg: 4000

  - kind: gas
    pressure_atm: 2.5
    max_payload_kg: 8000
    load_kg: 7000

  - kind: refrigerated
    height_cm: 250
    depth_cm: 150
    tare_weight_kg: 3000
    product_type: milk
    temperature_c: 4
    max_payload_kg: 12000
    load_kg: 10000
"#,
        vessel.name,
        vessel.max_speed_knots,
        vessel.max_container_slots,
        vessel.max_total_weight_tons,
    )
}
