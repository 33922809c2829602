//! Function type for binary analysis.
//!
//! Represents a contiguous analyzed routine with its low-level IL blocks.
//! Identity is the entry-point address, not object reference equality, so
//! two fetches of the same logical function from the host's database
//! compare equal.

use crate::core::address::Address;
use crate::core::address_range::AddressRange;
use crate::core::basic_block::LowLevelBlock;
use crate::error::StackCharsError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Stable unique identifier for a function within the analysis database.
///
/// The host assigns one entry point per function, so the entry address
/// doubles as the identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct FunctionId(pub Address);

impl fmt::Display for FunctionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "sub_{:x}", self.0.value())
    }
}

/// An analyzed routine with its low-level IL representation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Function {
    /// Function name
    pub name: String,
    /// Entry point address
    pub entry_point: Address,
    /// Address range of the function
    pub range: AddressRange,
    /// Low-level IL basic blocks, first block first
    pub blocks: Vec<LowLevelBlock>,
}

impl Function {
    /// Create a new function.
    pub fn new(
        name: impl Into<String>,
        entry_point: Address,
        size: u64,
        blocks: Vec<LowLevelBlock>,
    ) -> Self {
        Function {
            name: name.into(),
            entry_point,
            range: AddressRange::new(entry_point, size),
            blocks,
        }
    }

    /// The function's stable identity within the analysis database.
    pub fn id(&self) -> FunctionId {
        FunctionId(self.entry_point)
    }

    /// Whether the function's extent contains the given address.
    pub fn contains(&self, address: Address) -> bool {
        self.range.contains(address)
    }

    /// The function's low-level IL blocks.
    pub fn low_level_il(&self) -> &[LowLevelBlock] {
        &self.blocks
    }

    /// The first basic block of the low-level IL, if any.
    pub fn first_block(&self) -> Option<&LowLevelBlock> {
        self.blocks.first()
    }

    /// Serialize to JSON string
    pub fn to_json_string(&self) -> Result<String, StackCharsError> {
        serde_json::to_string(self).map_err(|e| StackCharsError::Serialization(e.to_string()))
    }

    /// Deserialize from JSON string
    pub fn from_json_str(json_str: &str) -> Result<Self, StackCharsError> {
        serde_json::from_str(json_str).map_err(|e| StackCharsError::Serialization(e.to_string()))
    }
}

impl fmt::Display for Function {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{}", self.name, self.entry_point)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::instruction::LowLevelInstruction;

    fn sample() -> Function {
        let block = LowLevelBlock::new(vec![
            LowLevelInstruction::store_constant(Address::new(0x401000), "[ebp-0x4]", 0x41),
            LowLevelInstruction::store_constant(Address::new(0x401004), "[ebp-0x8]", 0x42),
        ]);
        Function::new("test_func", Address::new(0x401000), 0x40, vec![block])
    }

    #[test]
    fn test_function_creation() {
        let func = sample();
        assert_eq!(func.name, "test_func");
        assert_eq!(func.entry_point, Address::new(0x401000));
        assert_eq!(func.low_level_il().len(), 1);
        assert_eq!(func.first_block().unwrap().len(), 2);
    }

    #[test]
    fn test_identity_is_entry_point() {
        let a = sample();
        let mut b = sample();
        b.name = "refetched".to_string();
        // Same logical function fetched twice still names the same unit.
        assert_eq!(a.id(), b.id());
    }

    #[test]
    fn test_contains_uses_extent() {
        let func = sample();
        assert!(func.contains(Address::new(0x401000)));
        assert!(func.contains(Address::new(0x40103f)));
        assert!(!func.contains(Address::new(0x401040)));
    }

    #[test]
    fn test_json_serialization() {
        let func = sample();
        let json = func.to_json_string().unwrap();
        let func2 = Function::from_json_str(&json).unwrap();
        assert_eq!(func, func2);
    }
}
