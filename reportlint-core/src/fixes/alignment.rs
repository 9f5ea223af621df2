use super::FixRule;
use crate::classifier::{ParagraphClass, ParagraphClassifier};
use crate::config::StyleConfig;
use crate::types::{Alignment, Document, Paragraph};

/// Forces alignment by paragraph class, strips emphasis from captions, and
/// sets first-line/left/right indent and line spacing to canonical values
/// for every non-title, non-empty body paragraph. Table cell paragraphs
/// get left/right indent and spacing forced, but keep their alignment and
/// never receive a first-line indent.
pub struct AlignmentFix<'a> {
    config: &'a StyleConfig,
    classifier: &'a ParagraphClassifier,
}

impl<'a> AlignmentFix<'a> {
    pub fn new(config: &'a StyleConfig, classifier: &'a ParagraphClassifier) -> Self {
        Self { config, classifier }
    }

    fn fix_paragraph_format(&self, paragraph: &mut Paragraph, fix_first_line: bool) {
        let canonical = &self.config.paragraph;
        if fix_first_line {
            paragraph.first_line_indent_cm = Some(canonical.first_line_indent_cm);
        }
        paragraph.left_indent_cm = Some(canonical.left_indent_cm);
        paragraph.right_indent_cm = Some(canonical.right_indent_cm);
        paragraph.line_spacing = Some(canonical.line_spacing);
    }
}

impl<'a> FixRule for AlignmentFix<'a> {
    fn apply(&self, document: &mut Document) {
        let body_start = self
            .classifier
            .title_page_boundary(&document.paragraphs)
            .map_or(0, |boundary| boundary + 1);

        for paragraph in document.paragraphs.iter_mut().skip(body_start) {
            if paragraph.text().trim().is_empty() {
                continue;
            }

            let class = self.classifier.classify(paragraph);
            paragraph.alignment = Some(match class {
                ParagraphClass::ImageCaption => Alignment::Center,
                ParagraphClass::TableCaption => Alignment::Right,
                ParagraphClass::Normal => Alignment::Justify,
            });

            // Captions must be plain text
            if class != ParagraphClass::Normal {
                for run in &mut paragraph.runs {
                    run.bold = false;
                    run.italic = false;
                    run.underline = false;
                }
            }

            self.fix_paragraph_format(paragraph, true);
        }

        for table in &mut document.tables {
            for paragraph in table.cell_paragraphs_mut() {
                self.fix_paragraph_format(paragraph, false);
            }
        }
    }

    fn name(&self) -> &str {
        "AlignmentFix"
    }
}
