//! MacVendorFilter - annotates events with the vendor owning a MAC address.

use crate::loader::{load_vendor_table, load_vendor_table_async};
use crate::{FilterConfig, MacAddress, RangeTable};
use serde_json::Value;
use tracing::{debug, info, trace, warn};
use vf_error::Result;
use vf_traits::{Concurrency, Event, FieldRef, Filter};

/// What happened to one event in [`MacVendorFilter::enrich`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnrichOutcome {
    /// Vendor found; target field written.
    Hit,
    /// Valid MAC with no covering range.
    Miss,
    /// Source field present but not a canonical MAC string.
    Malformed,
    /// Source field absent or null.
    MissingField,
    /// Filter is in passthrough mode because no table was loaded.
    NoTable,
}

/// Filter that resolves a MAC address field to a vendor name.
///
/// The vendor table is loaded once at registration and is read-only
/// afterwards, so one instance can be shared by every pipeline worker.
/// Every failure path leaves the event untouched.
pub struct MacVendorFilter {
    source: FieldRef,
    target: FieldRef,

    /// `None` when the mapping document could not be loaded.
    table: Option<RangeTable>,

    name: String,
}

impl std::fmt::Debug for MacVendorFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MacVendorFilter")
            .field("source", &self.source)
            .field("target", &self.target)
            .field("entries", &self.table.as_ref().map(RangeTable::len))
            .finish_non_exhaustive()
    }
}

impl MacVendorFilter {
    /// Creates a filter around an already-built table.
    ///
    /// Passing `None` gives a filter that passes every event through.
    pub fn new(source: FieldRef, target: FieldRef, table: Option<RangeTable>) -> Self {
        Self {
            source,
            target,
            table,
            name: "mac_vendor".to_string(),
        }
    }

    /// Registers a filter from configuration, loading the mapping document.
    ///
    /// Never fails: if the document cannot be loaded the filter runs in
    /// passthrough mode.
    pub fn register(config: &FilterConfig) -> Self {
        let table = Self::table_or_passthrough(config, load_vendor_table(&config.map_path));
        Self::new(config.source_field(), config.target_field(), table)
    }

    /// Async variant of [`MacVendorFilter::register`].
    pub async fn register_async(config: &FilterConfig) -> Self {
        let loaded = load_vendor_table_async(&config.map_path).await;
        let table = Self::table_or_passthrough(config, loaded);
        Self::new(config.source_field(), config.target_field(), table)
    }

    fn table_or_passthrough(
        config: &FilterConfig,
        loaded: Result<RangeTable>,
    ) -> Option<RangeTable> {
        match loaded {
            Ok(table) => {
                debug!(
                    source = %config.source,
                    target = %config.target,
                    entries = table.len(),
                    "Registered MacVendorFilter"
                );
                Some(table)
            }
            Err(e) if e.is_not_found() => {
                info!(
                    map_path = %config.map_path.display(),
                    "Vendor mapping not found, MacVendorFilter will pass events through"
                );
                None
            }
            Err(e) => {
                warn!(
                    map_path = %config.map_path.display(),
                    error = %e,
                    "Failed to load vendor mapping, MacVendorFilter will pass events through"
                );
                None
            }
        }
    }

    /// Sets the filter name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Enriches one event in place.
    ///
    /// Writes the vendor name to the target field only on a hit. An existing
    /// target value is never cleared or overwritten on any other outcome.
    pub fn enrich<E: Event>(&self, event: &mut E) -> EnrichOutcome {
        let Some(value) = event.get(&self.source).filter(|v| !v.is_null()) else {
            return EnrichOutcome::MissingField;
        };
        let Some(table) = &self.table else {
            return EnrichOutcome::NoTable;
        };
        let Some(mac) = value.as_str().and_then(MacAddress::parse) else {
            trace!(field = %self.source, "Source value is not a MAC address");
            return EnrichOutcome::Malformed;
        };

        match table.lookup(mac) {
            Some(vendor) => {
                trace!(mac = %mac, vendor = %vendor, "Vendor range hit");
                event.set(&self.target, Value::String(vendor.to_string()));
                EnrichOutcome::Hit
            }
            None => {
                trace!(mac = %mac, "No vendor range covers address");
                EnrichOutcome::Miss
            }
        }
    }

    /// Returns true if a vendor table was loaded.
    pub fn has_table(&self) -> bool {
        self.table.is_some()
    }

    /// Returns the loaded vendor table, if any.
    pub fn table(&self) -> Option<&RangeTable> {
        self.table.as_ref()
    }

    pub fn source(&self) -> &FieldRef {
        &self.source
    }

    pub fn target(&self) -> &FieldRef {
        &self.target
    }
}

impl<E: Event> Filter<E> for MacVendorFilter {
    fn filter(&self, mut event: E) -> Vec<E> {
        self.enrich(&mut event);
        vec![event]
    }

    fn concurrency(&self) -> Concurrency {
        Concurrency::Shared
    }

    fn name(&self) -> &str {
        &self.name
    }
}
