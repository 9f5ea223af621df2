use super::FixRule;
use crate::config::StyleConfig;
use crate::types::{Document, Paragraph, Run};

/// Sets every run (body and table cells) to the target family at the
/// minimum accepted size, clears any explicit color (including a previous
/// highlight), and strips bold/italic/underline. Not scoped to violations:
/// emphasis that was never flagged is normalized away too.
pub struct FontFix<'a> {
    config: &'a StyleConfig,
}

impl<'a> FontFix<'a> {
    pub fn new(config: &'a StyleConfig) -> Self {
        Self { config }
    }

    fn fix_run(&self, run: &mut Run) {
        run.font_family = Some(self.config.font.target_family.clone());
        run.font_size_pt = Some(self.config.font.min_size_pt);
        run.clear_color();
        run.bold = false;
        run.italic = false;
        run.underline = false;
    }

    fn fix_paragraph(&self, paragraph: &mut Paragraph) {
        for run in &mut paragraph.runs {
            self.fix_run(run);
        }
    }
}

impl<'a> FixRule for FontFix<'a> {
    fn apply(&self, document: &mut Document) {
        for paragraph in &mut document.paragraphs {
            self.fix_paragraph(paragraph);
        }

        for table in &mut document.tables {
            for paragraph in table.cell_paragraphs_mut() {
                self.fix_paragraph(paragraph);
            }
        }
    }

    fn name(&self) -> &str {
        "FontFix"
    }
}
