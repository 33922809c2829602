//! AddressRange type for binary analysis.
//!
//! A half-open contiguous region starting at an address (inclusive) and
//! extending for a given size (exclusive). Used here for function extents.

use crate::core::address::Address;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A half-open contiguous memory region.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AddressRange {
    /// The starting address of the range (inclusive)
    pub start: Address,
    /// The size of the range in bytes
    pub size: u64,
}

impl AddressRange {
    /// Create a new range from its start address and size.
    pub fn new(start: Address, size: u64) -> Self {
        AddressRange { start, size }
    }

    /// The end address of the range (exclusive).
    pub fn end(&self) -> Address {
        Address::new(self.start.value().saturating_add(self.size))
    }

    /// Check whether the range contains the given address.
    pub fn contains(&self, address: Address) -> bool {
        address >= self.start && address < self.end()
    }
}

impl fmt::Display for AddressRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {})", self.start, self.end())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains_is_half_open() {
        let range = AddressRange::new(Address::new(0x1000), 0x20);
        assert!(range.contains(Address::new(0x1000)));
        assert!(range.contains(Address::new(0x101f)));
        assert!(!range.contains(Address::new(0x1020)));
        assert!(!range.contains(Address::new(0xfff)));
    }

    #[test]
    fn test_end_saturates() {
        let range = AddressRange::new(Address::new(u64::MAX - 1), 0x10);
        assert_eq!(range.end(), Address::new(u64::MAX));
    }

    #[test]
    fn test_display() {
        let range = AddressRange::new(Address::new(0x1000), 0x20);
        assert_eq!(range.to_string(), "[0x1000, 0x1020)");
    }
}
