//! Host application surface.
//!
//! Everything the command needs from the embedding disassembler: the
//! analysis view (function lookups and the display-annotation store) and
//! the modal address prompt. Each is a trait so the command stays generic
//! over the actual host; [`MemoryView`] is the in-memory implementation
//! used headless and in tests.

pub mod interaction;
pub mod memory;
pub mod view;

pub use interaction::{Cancelled, FixedRange, FormInput};
pub use memory::MemoryView;
pub use view::{AnalysisView, DisplayAnnotation};
