//! Low-level IL basic block.
//!
//! A maximal straight-line sequence of IL instructions with a single entry
//! and exit, in the host's natural instruction order.

use serde::{Deserialize, Serialize};

use crate::core::address::Address;
use crate::core::instruction::LowLevelInstruction;

/// A straight-line region of low-level IL instructions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LowLevelBlock {
    /// Starting address of the basic block
    pub start_address: Address,
    /// Instructions in block order
    pub instructions: Vec<LowLevelInstruction>,
}

impl LowLevelBlock {
    /// Create a block from its instructions. The start address is taken
    /// from the first instruction; an empty block starts at 0.
    pub fn new(instructions: Vec<LowLevelInstruction>) -> Self {
        let start_address = instructions
            .first()
            .map(|inst| inst.address)
            .unwrap_or_default();
        Self {
            start_address,
            instructions,
        }
    }

    /// Number of instructions in this block.
    pub fn len(&self) -> usize {
        self.instructions.len()
    }

    /// Whether the block has no instructions.
    pub fn is_empty(&self) -> bool {
        self.instructions.is_empty()
    }

    /// The ordered sub-sequence of instructions whose address lies within
    /// the inclusive range `[start, end]`.
    pub fn instructions_in(
        &self,
        start: Address,
        end: Address,
    ) -> impl Iterator<Item = &LowLevelInstruction> {
        self.instructions
            .iter()
            .filter(move |inst| inst.address >= start && inst.address <= end)
    }
}
