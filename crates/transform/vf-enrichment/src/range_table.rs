//! RangeTable - ordered MAC range table with first-match lookup.

use crate::MacAddress;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// One record of a vendor mapping document, before conversion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VendorRecord {
    /// Lowest address in the range (inclusive).
    pub low: String,

    /// Highest address in the range (inclusive).
    pub high: String,

    /// Vendor or owner name.
    pub name: String,
}

/// A contiguous block of MAC addresses attributed to one vendor.
///
/// Invariant: `low <= high`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VendorRange {
    low: MacAddress,
    high: MacAddress,
    name: String,
}

impl VendorRange {
    /// Creates a range, or `None` if `low > high`.
    pub fn new(low: MacAddress, high: MacAddress, name: impl Into<String>) -> Option<Self> {
        (low <= high).then(|| Self {
            low,
            high,
            name: name.into(),
        })
    }

    /// Returns true if `mac` lies within `[low, high]`.
    pub fn contains(&self, mac: MacAddress) -> bool {
        self.low <= mac && mac <= self.high
    }

    /// Returns true if the two ranges share at least one address.
    pub fn overlaps(&self, other: &VendorRange) -> bool {
        self.low <= other.high && other.low <= self.high
    }

    pub fn low(&self) -> MacAddress {
        self.low
    }

    pub fn high(&self) -> MacAddress {
        self.high
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl TryFrom<&VendorRecord> for VendorRange {
    type Error = String;

    fn try_from(record: &VendorRecord) -> Result<Self, Self::Error> {
        let low = MacAddress::strip_to_integer(&record.low)
            .ok_or_else(|| format!("Invalid low boundary: {}", record.low))?;
        let high = MacAddress::strip_to_integer(&record.high)
            .ok_or_else(|| format!("Invalid high boundary: {}", record.high))?;

        Self::new(
            MacAddress::from_u64(low),
            MacAddress::from_u64(high),
            record.name.clone(),
        )
        .ok_or_else(|| format!("Range low {} exceeds high {}", record.low, record.high))
    }
}

/// Ordered table of vendor ranges.
///
/// Entries keep their load order. Ranges may overlap; a lookup returns the
/// first entry in load order that covers the address. Lookup is a linear
/// scan, which is fast enough for tables of a few hundred ranges.
#[derive(Debug, Clone, Default)]
pub struct RangeTable {
    ranges: Vec<VendorRange>,
}

impl RangeTable {
    /// Creates a new empty table.
    pub fn new() -> Self {
        Self { ranges: Vec::new() }
    }

    /// Builds a table from document records, preserving their order.
    ///
    /// Records that fail to convert are skipped.
    pub fn build<'a>(records: impl IntoIterator<Item = &'a VendorRecord>) -> Self {
        let mut table = Self::new();
        for (index, record) in records.into_iter().enumerate() {
            if let Err(e) = table.insert(record) {
                debug!(record = index + 1, error = %e, "Skipping invalid vendor range");
            }
        }
        table
    }

    /// Converts a record and appends it after all existing entries.
    pub fn insert(&mut self, record: &VendorRecord) -> Result<(), String> {
        let range = VendorRange::try_from(record)?;
        self.ranges.push(range);
        Ok(())
    }

    /// Appends an already-validated range.
    pub fn push(&mut self, range: VendorRange) {
        self.ranges.push(range);
    }

    /// Returns the name of the first range, in load order, covering `mac`.
    pub fn lookup(&self, mac: MacAddress) -> Option<&str> {
        self.ranges
            .iter()
            .find(|range| range.contains(mac))
            .map(VendorRange::name)
    }

    /// Returns every pair of overlapping entries as `(earlier, later)` load
    /// indices, sorted.
    ///
    /// Overlaps are legal; this exists so callers can audit mapping data.
    pub fn overlapping_pairs(&self) -> Vec<(usize, usize)> {
        let mut order: Vec<usize> = (0..self.ranges.len()).collect();
        order.sort_by_key(|&i| (self.ranges[i].low, i));

        let mut pairs = Vec::new();
        for (pos, &i) in order.iter().enumerate() {
            let current = &self.ranges[i];
            for &j in &order[pos + 1..] {
                // Sorted by low, so the first non-overlapping entry ends the run.
                if !current.overlaps(&self.ranges[j]) {
                    break;
                }
                pairs.push((i.min(j), i.max(j)));
            }
        }

        pairs.sort_unstable();
        pairs
    }

    /// Returns the entries in load order.
    pub fn iter(&self) -> impl Iterator<Item = &VendorRange> {
        self.ranges.iter()
    }

    /// Returns the number of entries in the table.
    pub fn len(&self) -> usize {
        self.ranges.len()
    }

    /// Returns true if the table is empty.
    pub fn is_empty(&self) -> bool {
        self.ranges.is_empty()
    }
}
