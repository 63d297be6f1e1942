//! MAC vendor enrichment for vendorflow pipelines.
//!
//! This crate resolves a MAC address carried by an event to the vendor that
//! owns its address block:
//! - [`MacAddress`] - Strict canonical-form validation and integer conversion
//! - [`RangeTable`] - Ordered `[low, high] -> name` ranges with first-match lookup
//! - [`MacVendorFilter`] - Per-event filter that writes the vendor name
//!
//! # Example
//!
//! ```rust,ignore
//! use vf_enrichment::{FilterConfig, MacVendorFilter};
//! use vf_traits::Filter;
//!
//! let config = FilterConfig::new("src_mac", "src_vendor", "/etc/ics_macs.yaml");
//! let filter = MacVendorFilter::register(&config);
//!
//! let events = filter.filter(event);
//! ```

mod config;
mod filter;
mod loader;
mod mac;
mod range_table;

pub use config::FilterConfig;
pub use filter::{EnrichOutcome, MacVendorFilter};
pub use loader::{load_vendor_table, load_vendor_table_async, parse_vendor_table};
pub use mac::{MacAddress, ParseMacError};
pub use range_table::{RangeTable, VendorRange, VendorRecord};
