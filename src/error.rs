//! Error types for the stackchars command.

use thiserror::Error;

/// Main error type for stackchars operations.
#[derive(Debug, Error)]
pub enum StackCharsError {
    /// Both validation failures share this message: an address with no
    /// containing function, or two addresses in different functions.
    #[error("Specified address range not contiguous within a single function.")]
    RangeNotContiguous,

    /// The annotation loop reached an instruction whose source operand
    /// carries no constant value.
    #[error("No constant source operand at {address:#x}")]
    NonConstantSource { address: u64 },

    /// Address field input that does not parse as an address
    #[error("Invalid address: {0}")]
    InvalidAddress(String),

    /// Command name not present in the registry
    #[error("Unknown command: {0}")]
    UnknownCommand(String),

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Result type alias for stackchars operations
pub type Result<T> = std::result::Result<T, StackCharsError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = StackCharsError::RangeNotContiguous;
        assert_eq!(
            err.to_string(),
            "Specified address range not contiguous within a single function."
        );

        let err = StackCharsError::NonConstantSource { address: 0x1234 };
        assert_eq!(err.to_string(), "No constant source operand at 0x1234");
    }
}
