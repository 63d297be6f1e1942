//! Common utilities for integration tests.

use hashbrown::HashMap;
use serde_json::{Map, Value};
use std::path::PathBuf;
use vf_enrichment::{FilterConfig, MacVendorFilter};

pub type JsonEvent = Map<String, Value>;

/// Path to the fixture vendor mapping document.
pub fn fixture_map_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("fixtures/ics_macs.yaml")
}

/// Plugin parameters as a pipeline would pass them.
pub fn plugin_params(map_path: &str) -> HashMap<String, String> {
    [
        ("source", "sourcefield"),
        ("target", "targetfield"),
        ("map_path", map_path),
    ]
    .into_iter()
    .map(|(k, v)| (k.to_string(), v.to_string()))
    .collect()
}

/// Registers a filter the way the pipeline does, from raw parameters.
pub fn register(map_path: &str) -> MacVendorFilter {
    let config = FilterConfig::from_params(&plugin_params(map_path)).unwrap();
    MacVendorFilter::register(&config)
}

/// Registers a filter against the fixture document.
pub fn register_fixture() -> MacVendorFilter {
    register(fixture_map_path().to_str().unwrap())
}

/// Converts a `json!` object literal into an event.
pub fn event(value: Value) -> JsonEvent {
    match value {
        Value::Object(map) => map,
        _ => panic!("test event must be an object"),
    }
}
