use crate::config::PatternConfig;
use crate::types::Paragraph;
use anyhow::{Context, Result};
use regex::Regex;

/// What kind of paragraph a rule is looking at. Mutually exclusive, in
/// priority order: image caption wins over table caption wins over normal.
/// Title-page membership is a positional property, not a class — see
/// [`ParagraphClassifier::title_page_boundary`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParagraphClass {
    ImageCaption,
    TableCaption,
    Normal,
}

/// Compiles the classification patterns once and answers the questions the
/// alignment rule and its fix mirror both need: where does the title page
/// end, what kind of paragraph is this, and does a caption carry text
/// after its number.
#[derive(Debug)]
pub struct ParagraphClassifier {
    title_page: Regex,
    image_marker: Regex,
    table_marker: Regex,
    image_content: Regex,
    table_content: Regex,
}

impl ParagraphClassifier {
    pub fn new(patterns: &PatternConfig) -> Result<Self> {
        Ok(Self {
            title_page: Regex::new(&patterns.title_page)
                .context("invalid title page pattern")?,
            image_marker: Regex::new(&patterns.image_caption_marker)
                .context("invalid image caption marker pattern")?,
            table_marker: Regex::new(&patterns.table_caption_marker)
                .context("invalid table caption marker pattern")?,
            image_content: Regex::new(&patterns.image_caption_content)
                .context("invalid image caption content pattern")?,
            table_content: Regex::new(&patterns.table_caption_content)
                .context("invalid table caption content pattern")?,
        })
    }

    /// Index of the paragraph that ends the title page: the first one
    /// (scanning from the start) whose text matches the date-stamp
    /// pattern. That paragraph and everything before it is excluded from
    /// formatting checks. None when the document has no title page.
    pub fn title_page_boundary(&self, paragraphs: &[Paragraph]) -> Option<usize> {
        paragraphs
            .iter()
            .position(|p| self.title_page.is_match(p.text().trim()))
    }

    pub fn classify(&self, paragraph: &Paragraph) -> ParagraphClass {
        let text = paragraph.text();
        let text = text.trim();
        if self.image_marker.is_match(text) {
            ParagraphClass::ImageCaption
        } else if self.table_marker.is_match(text) {
            ParagraphClass::TableCaption
        } else {
            ParagraphClass::Normal
        }
    }

    /// The caption text after "marker + number + period", or None when the
    /// caption is malformed (marker without number, or nothing after the
    /// period). Only meaningful for caption classes.
    pub fn caption_content(&self, paragraph: &Paragraph, class: ParagraphClass) -> Option<String> {
        let text = paragraph.text();
        let text = text.trim();
        let content = match class {
            ParagraphClass::ImageCaption => &self.image_content,
            ParagraphClass::TableCaption => &self.table_content,
            ParagraphClass::Normal => return None,
        };
        content
            .captures(text)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str().to_string())
    }
}
