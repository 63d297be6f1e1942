//! Filter trait for per-event processing.

use crate::Event;

/// How a pipeline may schedule calls into one filter instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Concurrency {
    /// One instance may be invoked from many workers at once.
    #[default]
    Shared,

    /// Calls into one instance must be serialized.
    Single,
}

/// Trait for per-event filters.
///
/// A filter receives an owned event and returns the events to emit
/// downstream. Most filters are 1-to-1 and return exactly the input event,
/// possibly mutated.
///
/// # Thread Safety
///
/// Filters must be `Send + Sync`. A filter reporting [`Concurrency::Shared`]
/// keeps no mutable state between calls, so the pipeline may hand the same
/// instance to every worker.
pub trait Filter<E: Event>: Send + Sync {
    /// Processes one event.
    fn filter(&self, event: E) -> Vec<E>;

    /// Declares whether this instance may be invoked concurrently.
    fn concurrency(&self) -> Concurrency {
        Concurrency::Shared
    }

    /// Returns the name of this filter for logging.
    fn name(&self) -> &str {
        "filter"
    }
}

/// A chain of filters applied in sequence.
///
/// Every event emitted by one filter is fed to the next.
pub struct FilterChain<E: Event> {
    filters: Vec<Box<dyn Filter<E>>>,
    name: String,
}

impl<E: Event> FilterChain<E> {
    /// Creates a new empty filter chain.
    pub fn new() -> Self {
        Self {
            filters: Vec::new(),
            name: "chain".to_string(),
        }
    }

    /// Adds a filter to the chain.
    pub fn push(mut self, filter: Box<dyn Filter<E>>) -> Self {
        self.filters.push(filter);
        self
    }

    /// Sets the name of this chain.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Returns true if the chain has no filters.
    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }

    /// Returns the number of filters in the chain.
    pub fn len(&self) -> usize {
        self.filters.len()
    }
}

impl<E: Event> Default for FilterChain<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: Event> Filter<E> for FilterChain<E> {
    fn filter(&self, event: E) -> Vec<E> {
        let mut events = vec![event];
        for filter in &self.filters {
            events = events
                .into_iter()
                .flat_map(|event| filter.filter(event))
                .collect();
        }
        events
    }

    fn concurrency(&self) -> Concurrency {
        if self
            .filters
            .iter()
            .any(|f| f.concurrency() == Concurrency::Single)
        {
            Concurrency::Single
        } else {
            Concurrency::Shared
        }
    }

    fn name(&self) -> &str {
        &self.name
    }
}

/// A filter that emits its input unchanged.
pub struct PassthroughFilter;

impl<E: Event> Filter<E> for PassthroughFilter {
    fn filter(&self, event: E) -> Vec<E> {
        vec![event]
    }

    fn name(&self) -> &str {
        "passthrough"
    }
}
