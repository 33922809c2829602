//! Integer display types.
//!
//! Display annotations control how an operand's numeric value is rendered
//! in the host's disassembly view without altering the underlying value.

use serde::{Deserialize, Serialize};
use std::fmt;

/// How an integer operand is rendered in the disassembly view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum IntegerDisplayType {
    /// Host-chosen default rendering
    #[default]
    Default,
    /// Binary
    Binary,
    /// Signed decimal
    SignedDecimal,
    /// Unsigned decimal
    UnsignedDecimal,
    /// Signed hexadecimal
    SignedHexadecimal,
    /// Unsigned hexadecimal
    UnsignedHexadecimal,
    /// Character literal, e.g. 0x41 rendered as 'A'
    CharacterConstant,
    /// Pointer
    Pointer,
}

impl fmt::Display for IntegerDisplayType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            IntegerDisplayType::Default => "Default",
            IntegerDisplayType::Binary => "Binary",
            IntegerDisplayType::SignedDecimal => "SignedDecimal",
            IntegerDisplayType::UnsignedDecimal => "UnsignedDecimal",
            IntegerDisplayType::SignedHexadecimal => "SignedHexadecimal",
            IntegerDisplayType::UnsignedHexadecimal => "UnsignedHexadecimal",
            IntegerDisplayType::CharacterConstant => "CharacterConstant",
            IntegerDisplayType::Pointer => "Pointer",
        };
        write!(f, "{}", name)
    }
}
