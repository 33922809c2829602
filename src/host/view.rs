//! Analysis view trait.
//!
//! The seam between the command and the host's analysis database. The host
//! owns functions, IL, and the persisted display-annotation mapping; the
//! command only queries membership and writes display types.

use serde::{Deserialize, Serialize};

use crate::core::address::Address;
use crate::core::display::IntegerDisplayType;
use crate::core::function::{Function, FunctionId};

/// One persisted entry in the display-annotation mapping: the operand's
/// value at annotation time and the requested rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayAnnotation {
    /// The constant value, passed through unchanged
    pub value: i64,
    /// The requested rendering
    pub display_type: IntegerDisplayType,
}

/// Read access to the host's analysis database plus one mutation: setting
/// the display type of an operand at an instruction address.
pub trait AnalysisView {
    /// The functions whose extent contains the given address, in the
    /// host's preference order. Empty when the address is unmapped.
    fn functions_containing(&self, address: Address) -> Vec<&Function>;

    /// Insert or overwrite the display-annotation entry for the operand at
    /// `operand` index of the instruction at `address` within `function`.
    fn set_int_display_type(
        &mut self,
        function: FunctionId,
        address: Address,
        operand: usize,
        value: i64,
        display_type: IntegerDisplayType,
    );
}
