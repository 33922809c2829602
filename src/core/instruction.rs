//! Low-level IL instruction and operand types.
//!
//! One level above raw bytes: each instruction carries an address, an
//! operation tag, and structured operands. The command only ever reads the
//! source operand's inner constant value.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::core::address::Address;

/// Types of operands that can appear in low-level IL instructions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OperandKind {
    /// Register operand
    Register,
    /// Constant value operand
    Constant,
    /// Memory reference operand
    Memory,
}

impl fmt::Display for OperandKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OperandKind::Register => write!(f, "Register"),
            OperandKind::Constant => write!(f, "Constant"),
            OperandKind::Memory => write!(f, "Memory"),
        }
    }
}

/// Structured operand representation for low-level IL instructions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Operand {
    /// Type of operand
    pub kind: OperandKind,
    /// String representation of the operand (fallback)
    pub text: String,
    /// Register name (for Register operands)
    pub register: Option<String>,
    /// Constant value (for Constant operands)
    pub constant: Option<i64>,
}

impl Operand {
    /// Create a new register operand
    pub fn register(name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            kind: OperandKind::Register,
            text: name.clone(),
            register: Some(name),
            constant: None,
        }
    }

    /// Create a new constant operand
    pub fn constant(value: i64) -> Self {
        Self {
            kind: OperandKind::Constant,
            text: format!("{:#x}", value),
            register: None,
            constant: Some(value),
        }
    }

    /// Create a new memory operand
    pub fn memory(text: impl Into<String>) -> Self {
        Self {
            kind: OperandKind::Memory,
            text: text.into(),
            register: None,
            constant: None,
        }
    }

    /// The inner constant numeric value, if this operand carries one.
    pub fn constant_value(&self) -> Option<i64> {
        self.constant
    }
}

impl fmt::Display for Operand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

/// Operation tag for a low-level IL instruction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LowLevelOperation {
    /// Write a value to a register
    SetReg,
    /// Write a value to memory
    Store,
    /// Push a value onto the stack
    Push,
    /// Call a subroutine
    Call,
    /// Return from a subroutine
    Ret,
    /// Anything the command does not care to distinguish
    Other,
}

/// A decoded low-level IL instruction at a specific address
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LowLevelInstruction {
    /// Address of the instruction
    pub address: Address,
    /// Operation performed
    pub operation: LowLevelOperation,
    /// Destination operand, when the operation has one
    pub dest: Option<Operand>,
    /// Source operand
    pub src: Operand,
}

impl LowLevelInstruction {
    /// Create a new instruction.
    pub fn new(
        address: Address,
        operation: LowLevelOperation,
        dest: Option<Operand>,
        src: Operand,
    ) -> Self {
        Self {
            address,
            operation,
            dest,
            src,
        }
    }

    /// Convenience constructor for the common store-constant shape
    /// (`mov [ebp-N], imm`).
    pub fn store_constant(address: Address, dest: impl Into<String>, value: i64) -> Self {
        Self::new(
            address,
            LowLevelOperation::Store,
            Some(Operand::memory(dest)),
            Operand::constant(value),
        )
    }
}

impl fmt::Display for LowLevelInstruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.dest {
            Some(dest) => write!(f, "{}: {:?} {} <- {}", self.address, self.operation, dest, self.src),
            None => write!(f, "{}: {:?} {}", self.address, self.operation, self.src),
        }
    }
}
