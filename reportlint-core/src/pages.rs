// Page analysis — locate which physical pages of a rendered document may
// carry flagged text.
//
// Rasterizing a word-processing document into page texts is an external
// service (print pipeline, PDF converter). This module only defines that
// boundary and the heuristic that runs on its output.

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Boundary to the page-rasterization service: document path in, ordered
/// page texts out.
pub trait PageRasterizer {
    fn page_texts(&self, document_path: &Path) -> Result<Vec<String>>;

    /// Backend name for status output
    fn name(&self) -> &str;
}

/// Backend that reads a pre-rendered plain-text version of the document
/// with pages separated by form-feed characters.
pub struct TextFileRasterizer;

impl PageRasterizer for TextFileRasterizer {
    fn page_texts(&self, document_path: &Path) -> Result<Vec<String>> {
        let text = fs::read_to_string(document_path).with_context(|| {
            format!(
                "Failed to read rendered page text: {}",
                document_path.display()
            )
        })?;
        Ok(text.split('\u{0C}').map(str::to_string).collect())
    }

    fn name(&self) -> &str {
        "TextFileRasterizer"
    }
}

/// 1-based numbers of pages that may contain flagged text, ascending.
/// Simple heuristic: any page carrying text at all is a candidate.
pub fn pages_with_issues(pages: &[String]) -> Vec<u32> {
    pages
        .iter()
        .enumerate()
        .filter(|(_, page)| !page.trim().is_empty())
        .map(|(index, _)| (index + 1) as u32)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_pages_are_skipped() {
        let pages = vec![
            "Title page".to_string(),
            "   \n".to_string(),
            "Body text".to_string(),
        ];
        assert_eq!(pages_with_issues(&pages), vec![1, 3]);
    }

    #[test]
    fn test_rasterizer_splits_on_form_feed() {
        let path = std::env::temp_dir().join("reportlint_pages_test.txt");
        std::fs::write(&path, "page one\u{0C}page two\u{0C}").unwrap();

        let pages = TextFileRasterizer.page_texts(&path).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(pages.len(), 3);
        assert_eq!(pages_with_issues(&pages), vec![1, 2]);
    }
}
