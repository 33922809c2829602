//! The "Reveal stack characters" range command.
//!
//! Takes a range of addresses from user input and sets the integer display
//! type to [`IntegerDisplayType::CharacterConstant`] for each low-level IL
//! instruction found. The address range must be within a single function;
//! only the function's first basic block is scanned.

use tracing::{debug, error};

use crate::core::address::Address;
use crate::core::display::IntegerDisplayType;
use crate::error::{Result, StackCharsError};
use crate::host::interaction::FormInput;
use crate::host::view::AnalysisView;
use crate::plugin::RangeCommand;

/// Operand index the character-constant display is applied to.
const OPERAND_INDEX: usize = 1;

/// Annotate every instruction of `view`'s enclosing function whose address
/// lies in the inclusive range `[start, end]`.
///
/// Both addresses must resolve to the same function (compared by identity,
/// not range overlap) or nothing is mutated. Only the first basic block of
/// the function's low-level IL is scanned. Annotations are applied in block
/// order and are not transactional: a non-constant source operand stops the
/// loop but leaves earlier annotations in place.
///
/// Returns the number of annotations applied.
pub fn annotate_range<V: AnalysisView>(view: &mut V, start: Address, end: Address) -> Result<usize> {
    let (function, pending) = {
        let start_funcs = view.functions_containing(start);
        let end_funcs = view.functions_containing(end);

        let first = start_funcs
            .first()
            .ok_or(StackCharsError::RangeNotContiguous)?;
        let second = end_funcs
            .first()
            .ok_or(StackCharsError::RangeNotContiguous)?;

        if first.id() != second.id() {
            return Err(StackCharsError::RangeNotContiguous);
        }

        let pending: Vec<(Address, Option<i64>)> = match first.first_block() {
            Some(block) => block
                .instructions_in(start, end)
                .map(|inst| (inst.address, inst.src.constant_value()))
                .collect(),
            None => Vec::new(),
        };

        (first.id(), pending)
    };

    let mut applied = 0;
    for (address, value) in pending {
        let value = value.ok_or(StackCharsError::NonConstantSource {
            address: address.value(),
        })?;
        view.set_int_display_type(
            function,
            address,
            OPERAND_INDEX,
            value,
            IntegerDisplayType::CharacterConstant,
        );
        applied += 1;
    }

    Ok(applied)
}

/// The registered command: prompt for a range, then annotate it.
pub struct RevealStackChars;

impl<V: AnalysisView> RangeCommand<V> for RevealStackChars {
    fn name(&self) -> &'static str {
        "Reveal stack characters"
    }

    fn description(&self) -> &'static str {
        "Convert all selected integer args to character constants"
    }

    fn run(&self, view: &mut V, form: &mut dyn FormInput) -> Result<()> {
        let Some((start, end)) =
            form.address_range("Reveal stack characters", "Start address", "End address")
        else {
            // Cancelled: no lookup, no mutation, no error.
            return Ok(());
        };

        match annotate_range(view, start, end) {
            Ok(count) => {
                debug!(%start, %end, count, "revealed stack characters");
                Ok(())
            }
            Err(err @ StackCharsError::RangeNotContiguous) => {
                error!("{err}");
                Ok(())
            }
            // Failures inside the annotation loop propagate to the host's
            // invocation harness.
            Err(err) => Err(err),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::basic_block::LowLevelBlock;
    use crate::core::function::Function;
    use crate::core::instruction::{LowLevelInstruction, LowLevelOperation, Operand};
    use crate::host::memory::MemoryView;

    fn store(addr: u64, value: i64) -> LowLevelInstruction {
        LowLevelInstruction::store_constant(Address::new(addr), "[ebp-0x4]", value)
    }

    fn single_function_view() -> MemoryView {
        let block = LowLevelBlock::new(vec![
            store(0x10, 0x41),
            store(0x14, 0x42),
            store(0x18, 0x43),
            store(0x1c, 0x44),
        ]);
        let mut view = MemoryView::new();
        view.add_function(Function::new("f", Address::new(0x10), 0x40, vec![block]));
        view
    }

    #[test]
    fn test_inclusive_range_filter() {
        let mut view = single_function_view();
        let applied =
            annotate_range(&mut view, Address::new(0x14), Address::new(0x18)).unwrap();
        assert_eq!(applied, 2);

        let annotated: Vec<u64> = view
            .journal()
            .iter()
            .map(|rec| rec.address.value())
            .collect();
        assert_eq!(annotated, vec![0x14, 0x18]);
    }

    #[test]
    fn test_unmapped_address_is_rejected_without_mutation() {
        let mut view = single_function_view();
        let err = annotate_range(&mut view, Address::new(0x14), Address::new(0x5000)).unwrap_err();
        assert!(matches!(err, StackCharsError::RangeNotContiguous));
        assert!(view.journal().is_empty());
    }

    #[test]
    fn test_reversed_range_annotates_nothing() {
        let mut view = single_function_view();
        let applied =
            annotate_range(&mut view, Address::new(0x18), Address::new(0x14)).unwrap();
        assert_eq!(applied, 0);
        assert!(view.journal().is_empty());
    }

    #[test]
    fn test_non_constant_source_keeps_earlier_annotations() {
        let block = LowLevelBlock::new(vec![
            store(0x10, 0x41),
            LowLevelInstruction::new(
                Address::new(0x14),
                LowLevelOperation::SetReg,
                Some(Operand::register("eax")),
                Operand::register("ebx"),
            ),
            store(0x18, 0x43),
        ]);
        let mut view = MemoryView::new();
        view.add_function(Function::new("f", Address::new(0x10), 0x40, vec![block]));

        let err = annotate_range(&mut view, Address::new(0x10), Address::new(0x18)).unwrap_err();
        assert!(matches!(
            err,
            StackCharsError::NonConstantSource { address: 0x14 }
        ));
        // Not transactional: the first annotation stays.
        assert_eq!(view.journal().len(), 1);
        assert_eq!(view.journal()[0].address, Address::new(0x10));
    }

    #[test]
    fn test_function_with_no_blocks_annotates_nothing() {
        let mut view = MemoryView::new();
        view.add_function(Function::new("empty", Address::new(0x10), 0x40, vec![]));
        let applied =
            annotate_range(&mut view, Address::new(0x10), Address::new(0x20)).unwrap();
        assert_eq!(applied, 0);
    }
}
