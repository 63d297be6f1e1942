//! Core contracts for vendorflow pipelines.
//!
//! This crate defines the seams between the pipeline and its plugins:
//! - [`Event`] - Capability trait for reading and writing event fields
//! - [`FieldRef`] - Field reference in `name` or `[outer][inner]` notation
//! - [`Filter`] - Per-event transform invoked by the pipeline
//! - [`Concurrency`] - Whether one filter instance may be shared across workers

mod event;
mod filter;

pub use event::{Event, FieldRef};
pub use filter::{Concurrency, Filter, FilterChain, PassthroughFilter};
