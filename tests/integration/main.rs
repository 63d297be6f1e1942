//! Integration tests for vendorflow.
//!
//! These tests register [`vf_enrichment::MacVendorFilter`] against the
//! fixture mapping document in `tests/fixtures` and drive it through the
//! [`vf_traits::Filter`] contract the way a pipeline would.

mod common;
mod filter_test;
