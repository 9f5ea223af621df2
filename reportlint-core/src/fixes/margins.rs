use super::FixRule;
use crate::config::StyleConfig;
use crate::types::Document;

/// Sets all four margins of every section to the canonical values.
pub struct MarginFix<'a> {
    config: &'a StyleConfig,
}

impl<'a> MarginFix<'a> {
    pub fn new(config: &'a StyleConfig) -> Self {
        Self { config }
    }
}

impl<'a> FixRule for MarginFix<'a> {
    fn apply(&self, document: &mut Document) {
        let canonical = &self.config.margins;
        for section in &mut document.sections {
            section.top_margin_cm = canonical.top_cm;
            section.bottom_margin_cm = canonical.bottom_cm;
            section.left_margin_cm = canonical.left_cm;
            section.right_margin_cm = canonical.right_cm;
        }
    }

    fn name(&self) -> &str {
        "MarginFix"
    }
}
