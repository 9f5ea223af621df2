// Check rules - one module per independent style concern:
// - font.rs: run-level font family and size checks
// - alignment.rs: paragraph alignment, captions, indentation, line spacing
// - margins.rs: section page margins
//
// Every rule walks the shared document tree in the same order and returns
// its own violation records; the processor concatenates them in a fixed
// order. Rules never see each other's findings.

pub mod font;
pub mod alignment;
pub mod margins;

pub use font::FontRule;
pub use alignment::AlignmentRule;
pub use margins::MarginRule;

use crate::types::{Document, Violation};

/// Shared shape of the check rules. `check` may mutate the tree, but only
/// through the named highlight operations on runs and paragraphs.
pub trait StyleRule {
    fn check(&self, document: &mut Document) -> Vec<Violation>;
    fn name(&self) -> &str;
}
