use super::StyleRule;
use crate::config::StyleConfig;
use crate::types::{Document, Paragraph, Run, Violation};

/// Checks every run in body paragraphs and table cells for an explicit
/// font family or size that deviates from the house style, and highlights
/// the offending run at the moment of flagging.
///
/// Runs with no explicit family or size inherit from their style and are
/// never flagged. A single run can contribute up to two records from one
/// pass (family and size).
pub struct FontRule<'a> {
    config: &'a StyleConfig,
}

impl<'a> FontRule<'a> {
    pub fn new(config: &'a StyleConfig) -> Self {
        Self { config }
    }

    fn check_run(&self, run: &mut Run, paragraph_text: &str, violations: &mut Vec<Violation>) {
        let font = &self.config.font;

        // Font family check — case-sensitive exact match against the target
        if let Some(family) = run.font_family.clone() {
            if family != font.target_family {
                run.highlight();
                violations.push(Violation::new(
                    Some(run.id),
                    paragraph_text.to_string(),
                    format!(
                        "Wrong font family: {} (expected {})",
                        family, font.target_family
                    ),
                ));
            }
        }

        // Font size check — inclusive bounds
        if let Some(size) = run.font_size_pt {
            if size < font.min_size_pt || size > font.max_size_pt {
                run.highlight();
                violations.push(Violation::new(
                    Some(run.id),
                    paragraph_text.to_string(),
                    format!(
                        "Text should be {}-{} pt (found {} pt)",
                        font.min_size_pt, font.max_size_pt, size
                    ),
                ));
            }
        }
    }

    fn check_paragraph(&self, paragraph: &mut Paragraph, violations: &mut Vec<Violation>) {
        let paragraph_text = paragraph.text();
        for run in &mut paragraph.runs {
            self.check_run(run, &paragraph_text, violations);
        }
    }
}

impl<'a> StyleRule for FontRule<'a> {
    fn check(&self, document: &mut Document) -> Vec<Violation> {
        let mut violations = Vec::new();

        for paragraph in &mut document.paragraphs {
            self.check_paragraph(paragraph, &mut violations);
        }

        for table in &mut document.tables {
            for paragraph in table.cell_paragraphs_mut() {
                self.check_paragraph(paragraph, &mut violations);
            }
        }

        violations
    }

    fn name(&self) -> &str {
        "FontRule"
    }
}
