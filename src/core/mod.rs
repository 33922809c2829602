//! Core data types for the stackchars command.
//!
//! These mirror the host-owned analysis objects the command consumes:
//! addresses, functions, low-level IL blocks and instructions, and the
//! integer display-type tags. The host materializes these; this crate only
//! reads them and mutates one display attribute per instruction.

pub mod address;
pub mod address_range;
pub mod basic_block;
pub mod display;
pub mod function;
pub mod instruction;
