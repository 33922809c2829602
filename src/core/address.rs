//! Address type for binary analysis.
//!
//! A virtual address in the analyzed binary's address space. This is the
//! foundation for all location references in stackchars.

use crate::error::StackCharsError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A virtual address in the analyzed binary.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default,
)]
#[serde(transparent)]
pub struct Address(pub u64);

impl Address {
    /// Create an address from its numeric value.
    pub fn new(value: u64) -> Self {
        Address(value)
    }

    /// The numeric value of the address.
    pub fn value(&self) -> u64 {
        self.0
    }

    /// Parse an address the way the host's address input field does:
    /// hexadecimal, with or without a `0x` prefix.
    pub fn parse(text: &str) -> Result<Self, StackCharsError> {
        let trimmed = text.trim();
        let digits = trimmed
            .strip_prefix("0x")
            .or_else(|| trimmed.strip_prefix("0X"))
            .unwrap_or(trimmed);

        if digits.is_empty() {
            return Err(StackCharsError::InvalidAddress(text.to_string()));
        }

        u64::from_str_radix(digits, 16)
            .map(Address)
            .map_err(|_| StackCharsError::InvalidAddress(text.to_string()))
    }
}

impl From<u64> for Address {
    fn from(value: u64) -> Self {
        Address(value)
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#x}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_hex() {
        assert_eq!(Address::new(0x401000).to_string(), "0x401000");
        assert_eq!(Address::new(0).to_string(), "0x0");
    }

    #[test]
    fn test_parse_prefixed_and_bare() {
        assert_eq!(Address::parse("0x401000").unwrap(), Address::new(0x401000));
        assert_eq!(Address::parse("401000").unwrap(), Address::new(0x401000));
        assert_eq!(Address::parse("  0X10  ").unwrap(), Address::new(0x10));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(Address::parse("").is_err());
        assert!(Address::parse("0x").is_err());
        assert!(Address::parse("main+4").is_err());
    }

    #[test]
    fn test_ordering() {
        assert!(Address::new(0x10) < Address::new(0x14));
    }
}
