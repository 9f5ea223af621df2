use super::StyleRule;
use crate::classifier::{ParagraphClass, ParagraphClassifier};
use crate::config::{StyleConfig, MEASURE_TOLERANCE};
use crate::types::{Alignment, Document, Paragraph, Violation};

/// Checks paragraph alignment, caption formatting, indentation, and line
/// spacing for every body paragraph past the title page, then the reduced
/// subset (left/right indent and spacing only) for table cell paragraphs.
///
/// Whole-paragraph findings highlight every run of the paragraph and
/// reference its first run, so the flagged text stands out as a block in
/// the checked copy.
pub struct AlignmentRule<'a> {
    config: &'a StyleConfig,
    classifier: &'a ParagraphClassifier,
}

impl<'a> AlignmentRule<'a> {
    pub fn new(config: &'a StyleConfig, classifier: &'a ParagraphClassifier) -> Self {
        Self { config, classifier }
    }

    /// Highlight the whole paragraph and record one violation against it.
    fn flag_paragraph(paragraph: &mut Paragraph, reason: &str, violations: &mut Vec<Violation>) {
        paragraph.highlight_runs();
        violations.push(Violation::new(
            paragraph.runs.first().map(|run| run.id),
            paragraph.text(),
            reason.to_string(),
        ));
    }

    fn check_alignment(
        &self,
        paragraph: &mut Paragraph,
        class: ParagraphClass,
        violations: &mut Vec<Violation>,
    ) {
        let (required, reason) = match class {
            ParagraphClass::ImageCaption => (
                Alignment::Center,
                "Caption under image should be center aligned",
            ),
            ParagraphClass::TableCaption => (
                Alignment::Right,
                "Caption above table should be right aligned",
            ),
            ParagraphClass::Normal => (Alignment::Justify, "Normal text should be justified"),
        };

        // An unset alignment is a default (left) layout — not the required one
        if paragraph.alignment != Some(required) {
            Self::flag_paragraph(paragraph, reason, violations);
        }
    }

    /// Caption content and plainness checks. Returns false when the caption
    /// is malformed, in which case the remaining checks for this paragraph
    /// are skipped to avoid cascading false positives.
    fn check_caption(
        &self,
        paragraph: &mut Paragraph,
        class: ParagraphClass,
        violations: &mut Vec<Violation>,
    ) -> bool {
        if self.classifier.caption_content(paragraph, class).is_none() {
            Self::flag_paragraph(paragraph, "Caption must contain text after number", violations);
            return false;
        }

        // Caption text must be plain — one record per paragraph, on the
        // first emphasized run
        if paragraph.runs.iter().any(|run| run.has_emphasis()) {
            Self::flag_paragraph(
                paragraph,
                "Caption text must be plain (not bold, italic, or underlined)",
                violations,
            );
        }

        true
    }

    /// Indentation and line spacing checks. Table cell paragraphs never get
    /// the first-line check.
    fn check_paragraph_format(
        &self,
        paragraph: &mut Paragraph,
        check_first_line: bool,
        violations: &mut Vec<Violation>,
    ) {
        let expected = &self.config.paragraph;

        if check_first_line {
            let actual = paragraph.first_line_indent_or_default();
            if (actual - expected.first_line_indent_cm).abs() > MEASURE_TOLERANCE {
                Self::flag_paragraph(
                    paragraph,
                    &format!(
                        "First-line indentation should be {} cm (found {:.2} cm)",
                        expected.first_line_indent_cm, actual
                    ),
                    violations,
                );
            }
        }

        let actual = paragraph.left_indent_or_default();
        if (actual - expected.left_indent_cm).abs() > MEASURE_TOLERANCE {
            Self::flag_paragraph(
                paragraph,
                &format!(
                    "Left indent should be {} cm (found {:.2} cm)",
                    expected.left_indent_cm, actual
                ),
                violations,
            );
        }

        let actual = paragraph.right_indent_or_default();
        if (actual - expected.right_indent_cm).abs() > MEASURE_TOLERANCE {
            Self::flag_paragraph(
                paragraph,
                &format!(
                    "Right indent should be {} cm (found {:.2} cm)",
                    expected.right_indent_cm, actual
                ),
                violations,
            );
        }

        let actual = paragraph.line_spacing_or_default();
        if (actual - expected.line_spacing).abs() > MEASURE_TOLERANCE {
            Self::flag_paragraph(
                paragraph,
                &format!(
                    "Line spacing should be {} (found {:.2})",
                    expected.line_spacing, actual
                ),
                violations,
            );
        }
    }
}

impl<'a> StyleRule for AlignmentRule<'a> {
    fn check(&self, document: &mut Document) -> Vec<Violation> {
        let mut violations = Vec::new();

        // Everything up to and including the first date-stamp match is the
        // title page and is exempt from all of these checks
        let body_start = self
            .classifier
            .title_page_boundary(&document.paragraphs)
            .map_or(0, |boundary| boundary + 1);

        for paragraph in document.paragraphs.iter_mut().skip(body_start) {
            if paragraph.text().trim().is_empty() {
                continue;
            }

            let class = self.classifier.classify(paragraph);
            self.check_alignment(paragraph, class, &mut violations);

            if class != ParagraphClass::Normal
                && !self.check_caption(paragraph, class, &mut violations)
            {
                // Malformed caption — skip the format checks for it too
                continue;
            }

            self.check_paragraph_format(paragraph, true, &mut violations);
        }

        // Table cell paragraphs: indents and spacing only. No alignment,
        // caption, or first-line checks, and no title-page or emptiness
        // filtering.
        for table in &mut document.tables {
            for paragraph in table.cell_paragraphs_mut() {
                self.check_paragraph_format(paragraph, false, &mut violations);
            }
        }

        violations
    }

    fn name(&self) -> &str {
        "AlignmentRule"
    }
}
