// ABOUTME: Integration tests for stowage plan execution.
// ABOUTME: Verifies stowed/rejected reporting and manifest-order admission.

use stowage::error::Error;
use stowage::manifest::Manifest;
use stowage::plan;

#[test]
fn template_plan_stows_every_container() {
    let manifest = Manifest::template();
    let outcome = plan::execute(&manifest).unwrap();

    assert!(outcome.all_stowed());
    assert_eq!(outcome.stowed.len(), 3);
    assert_eq!(outcome.vessel.containers.len(), 3);
    assert_eq!(outcome.vessel.total_cargo_kg, 21_000.0);
}

#[test]
fn serials_are_assigned_in_manifest_order() {
    let manifest = Manifest::template();
    let outcome = plan::execute(&manifest).unwrap();

    let serials: Vec<String> = outcome.stowed.iter().map(|s| s.to_string()).collect();
    assert_eq!(serials, vec!["KON-L-1", "KON-G-1", "KON-C-1"]);
}

#[test]
fn the_same_manifest_always_yields_the_same_serials() {
    let manifest = Manifest::template();
    let first = plan::execute(&manifest).unwrap();
    let second = plan::execute(&manifest).unwrap();

    assert_eq!(first.stowed, second.stowed);
}

#[test]
fn overfilled_declared_load_is_rejected_not_fatal() {
    let yaml = r#"
vessel:
  name: Ship 1
  max_container_slots: 4
  max_total_weight_tons: 20

containers:
  # 90% of 8000 is 7200, so 7500 overfills.
  - kind: gas
    pressure_atm: 1.0
    max_payload_kg: 8000
    load_kg: 7500

  - kind: liquid
    max_payload_kg: 5000
    load_kg: 4000
"#;
    let manifest = Manifest::from_yaml(yaml).unwrap();
    let outcome = plan::execute(&manifest).unwrap();

    assert_eq!(outcome.stowed.len(), 1);
    assert_eq!(outcome.rejected.len(), 1);
    assert_eq!(outcome.rejected[0].serial.to_string(), "KON-G-1");
    assert!(outcome.rejected[0].reason.contains("7200"));
}

#[test]
fn admission_rejections_are_reported_in_the_outcome() {
    let yaml = r#"
vessel:
  name: Ship 1
  max_container_slots: 1
  max_total_weight_tons: 20

containers:
  - kind: liquid
    max_payload_kg: 5000
    load_kg: 1000

  - kind: liquid
    max_payload_kg: 5000
    load_kg: 1000
"#;
    let manifest = Manifest::from_yaml(yaml).unwrap();
    let outcome = plan::execute(&manifest).unwrap();

    assert_eq!(outcome.stowed.len(), 1);
    assert_eq!(outcome.rejected.len(), 1);
    assert!(outcome.rejected[0].reason.contains("slots"));
    assert_eq!(outcome.vessel.containers.len(), 1);
}

#[test]
fn non_positive_payload_fails_the_plan() {
    let yaml = r#"
vessel:
  name: Ship 1
  max_container_slots: 4
  max_total_weight_tons: 20

containers:
  - kind: liquid
    max_payload_kg: -100
"#;
    let manifest = Manifest::from_yaml(yaml).unwrap();
    assert!(matches!(
        plan::execute(&manifest),
        Err(Error::InvalidManifest(_))
    ));
}

#[test]
fn non_positive_load_fails_the_plan() {
    let yaml = r#"
vessel:
  name: Ship 1
  max_container_slots: 4
  max_total_weight_tons: 20

containers:
  - kind: liquid
    max_payload_kg: 5000
    load_kg: -10
"#;
    let manifest = Manifest::from_yaml(yaml).unwrap();
    assert!(matches!(
        plan::execute(&manifest),
        Err(Error::InvalidManifest(_))
    ));
}

#[test]
fn outcome_serializes_for_json_output() {
    let manifest = Manifest::template();
    let outcome = plan::execute(&manifest).unwrap();

    let json = serde_json::to_string_pretty(&outcome).unwrap();
    assert!(json.contains("\"stowed\""));
    assert!(json.contains("KON-L-1"));
}
