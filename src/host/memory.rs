//! In-memory analysis view.
//!
//! Holds a function table and the display-annotation store. Functions are
//! returned in ascending entry-point order, annotations are keyed by
//! (function, address, operand) so re-setting the same entry overwrites in
//! place. A journal records every annotation call in order, which is how
//! ordering and idempotence stay observable headless.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::address::Address;
use crate::core::display::IntegerDisplayType;
use crate::core::function::{Function, FunctionId};
use crate::error::StackCharsError;
use crate::host::view::{AnalysisView, DisplayAnnotation};

/// Key into the annotation store
pub type AnnotationKey = (FunctionId, Address, usize);

/// One recorded annotation call
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnnotationRecord {
    /// Function the annotation belongs to
    pub function: FunctionId,
    /// Instruction address
    pub address: Address,
    /// Operand index
    pub operand: usize,
    /// The persisted entry
    pub annotation: DisplayAnnotation,
}

/// An in-memory analysis database implementing [`AnalysisView`]
#[derive(Debug, Default)]
pub struct MemoryView {
    functions: BTreeMap<FunctionId, Function>,
    annotations: BTreeMap<AnnotationKey, DisplayAnnotation>,
    journal: Vec<AnnotationRecord>,
}

impl MemoryView {
    /// Create an empty view.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a function to the view's function table.
    pub fn add_function(&mut self, function: Function) -> FunctionId {
        let id = function.id();
        self.functions.insert(id, function);
        id
    }

    /// Look up a function by identity.
    pub fn function(&self, id: FunctionId) -> Option<&Function> {
        self.functions.get(&id)
    }

    /// The persisted annotation for one operand, if any.
    pub fn annotation(
        &self,
        function: FunctionId,
        address: Address,
        operand: usize,
    ) -> Option<&DisplayAnnotation> {
        self.annotations.get(&(function, address, operand))
    }

    /// The full annotation store, in key order.
    pub fn annotations(&self) -> &BTreeMap<AnnotationKey, DisplayAnnotation> {
        &self.annotations
    }

    /// Every annotation call made against this view, in call order.
    pub fn journal(&self) -> &[AnnotationRecord] {
        &self.journal
    }

    /// Serialize the annotation call journal to JSON, in call order.
    /// Duplicate calls the store has collapsed appear once per call.
    pub fn journal_to_json(&self) -> Result<String, StackCharsError> {
        serde_json::to_string(&self.journal)
            .map_err(|e| StackCharsError::Serialization(e.to_string()))
    }
}

impl AnalysisView for MemoryView {
    fn functions_containing(&self, address: Address) -> Vec<&Function> {
        self.functions
            .values()
            .filter(|func| func.contains(address))
            .collect()
    }

    fn set_int_display_type(
        &mut self,
        function: FunctionId,
        address: Address,
        operand: usize,
        value: i64,
        display_type: IntegerDisplayType,
    ) {
        debug!(%function, %address, operand, value, %display_type, "set display type");
        let annotation = DisplayAnnotation {
            value,
            display_type,
        };
        self.annotations
            .insert((function, address, operand), annotation);
        self.journal.push(AnnotationRecord {
            function,
            address,
            operand,
            annotation,
        });
    }
}
