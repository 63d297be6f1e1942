//! Scenario tests for the MAC vendor filter.

use crate::common::{JsonEvent, event, register, register_fixture};
use serde_json::json;
use std::io::Write;
use tempfile::NamedTempFile;
use vf_enrichment::{MacAddress, load_vendor_table};
use vf_traits::{Concurrency, Filter};

fn run(events: Vec<JsonEvent>) -> Vec<JsonEvent> {
    let filter = register_fixture();
    events
        .into_iter()
        .flat_map(|e| filter.filter(e))
        .collect()
}

#[test]
fn test_standard_flow() {
    let out = run(vec![event(json!({ "sourcefield": "00:50:C2:7A:50:01" }))]);

    assert_eq!(out.len(), 1);
    assert_eq!(
        out[0].get("targetfield"),
        Some(&json!("Quantum Medical Imaging"))
    );
}

#[test]
fn test_not_in_map() {
    let out = run(vec![event(json!({ "sourcefield": "DE:AD:ED:BE:EE:EF" }))]);

    assert_eq!(out.len(), 1);
    assert!(out[0].get("targetfield").is_none());
}

#[test]
fn test_bad_input_string() {
    let out = run(vec![event(json!({ "sourcefield": "not a mac address" }))]);

    assert_eq!(out.len(), 1);
    assert!(out[0].get("targetfield").is_none());
}

#[test]
fn test_missing_field() {
    let out = run(vec![event(json!({}))]);

    assert_eq!(out, vec![event(json!({}))]);
}

#[test]
fn test_separator_styles_resolve_identically() {
    let out = run(vec![
        event(json!({ "sourcefield": "00:50:C2:7A:50:01" })),
        event(json!({ "sourcefield": "00-50-C2-7A-50-01" })),
        event(json!({ "sourcefield": "00.50.C2.7A.50.01" })),
        event(json!({ "sourcefield": "00:50-c2.7a:50-01" })),
    ]);

    assert_eq!(out.len(), 4);
    for e in &out {
        assert_eq!(e.get("targetfield"), Some(&json!("Quantum Medical Imaging")));
    }
}

#[test]
fn test_case_insensitive_lookup() {
    assert_eq!(
        MacAddress::parse("aa:bb:cc:dd:ee:ff"),
        MacAddress::parse("AA:BB:CC:DD:EE:FF")
    );

    let out = run(vec![event(json!({ "sourcefield": "70:b3:d5:f2:e1:23" }))]);
    assert_eq!(
        out[0].get("targetfield"),
        Some(&json!("Hilscher Gesellschaft für Systemautomation mbH"))
    );
}

#[test]
fn test_miss_paths_leave_event_identical() {
    let inputs = vec![
        json!({ "sourcefield": "DE:AD:ED:BE:EE:EF", "targetfield": "Preexisting" }),
        json!({ "sourcefield": "garbage", "targetfield": "Preexisting" }),
        json!({ "targetfield": "Preexisting" }),
        json!({ "sourcefield": ["00:50:C2:7A:50:01"] }),
    ];

    let out = run(inputs.iter().cloned().map(event).collect());

    assert_eq!(out, inputs.into_iter().map(event).collect::<Vec<_>>());
}

#[test]
fn test_no_table_passthrough() {
    let filter = register("/nonexistent/ics_macs.yaml");

    assert!(!filter.has_table());
    for input in [
        json!({ "sourcefield": "00:50:C2:7A:50:01" }),
        json!({ "sourcefield": "DE:AD:ED:BE:EE:EF" }),
        json!({ "sourcefield": "not a mac address" }),
        json!({}),
    ] {
        assert_eq!(filter.filter(event(input.clone())), vec![event(input)]);
    }
}

#[test]
fn test_first_match_tie_break() {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(
        br#"
- { low: "00:50:C2:00:00:00", high: "00:50:C2:FF:FF:FF", name: "IEEE Registration Authority" }
- { low: "00:50:C2:7A:50:00", high: "00:50:C2:7A:50:FF", name: "Quantum Medical Imaging" }
"#,
    )
    .unwrap();

    let filter = register(file.path().to_str().unwrap());
    let out = filter.filter(event(json!({ "sourcefield": "00:50:C2:7A:50:01" })));

    assert_eq!(
        out[0].get("targetfield"),
        Some(&json!("IEEE Registration Authority"))
    );
}

#[test]
fn test_fixture_has_no_overlapping_ranges() {
    let table = load_vendor_table(crate::common::fixture_map_path()).unwrap();

    assert_eq!(table.len(), 9);
    assert!(table.overlapping_pairs().is_empty());
}

#[test]
fn test_filter_declares_shared_concurrency() {
    let filter = register_fixture();
    assert_eq!(Filter::<JsonEvent>::concurrency(&filter), Concurrency::Shared);
}
