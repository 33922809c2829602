//! Reveal stack characters.
//!
//! A range command for an interactive disassembler: given a start and end
//! address, confirm both fall in the same function, then mark the source
//! operand of every low-level IL instruction in that range (first basic
//! block only) for character-constant display.
//!
//! The host application surface (analysis view, annotation store, and the
//! modal address prompt) is expressed as traits in [`host`], with an
//! in-memory view for headless use. The command itself lives in [`plugin`]
//! and is generic over any view implementation.

/// Core data types module
pub mod core;

/// Error types
pub mod error;

/// Host application surface: analysis view and interaction
pub mod host;

/// Logging and tracing infrastructure
pub mod logging;

/// Command registration and the range annotator
pub mod plugin;

pub use error::{Result, StackCharsError};
