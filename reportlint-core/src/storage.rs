use crate::types::Document;
use anyhow::{anyhow, Context, Result};
use std::fs;
use std::path::Path;

// Persistence for the document tree. The on-disk format is the serde JSON
// form of the in-memory tree; loading and saving are the only I/O the
// checking pipeline performs, and they never interleave with rule logic.

pub fn load_document(path: &Path) -> Result<Document> {
    let json = fs::read_to_string(path)
        .with_context(|| format!("Failed to read document: {}", path.display()))?;
    let document: Document = serde_json::from_str(&json)
        .map_err(|e| anyhow!("Failed to deserialize document {}: {}", path.display(), e))?;
    Ok(document)
}

/// Write the tree as pretty JSON. A failed save leaves any in-memory
/// analysis results intact — the caller already holds them.
pub fn save_document(document: &Document, path: &Path) -> Result<()> {
    let json = serde_json::to_string_pretty(document)
        .map_err(|e| anyhow!("Failed to serialize document: {}", e))?;
    fs::write(path, json).with_context(|| format!("Failed to write document: {}", path.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Paragraph, Run, Section};

    #[test]
    fn test_document_roundtrip_preserves_run_ids() {
        let mut document = Document::default();
        let mut paragraph = Paragraph::new();
        paragraph.runs.push(Run::new("hello"));
        let run_id = paragraph.runs[0].id;
        document.paragraphs.push(paragraph);
        document.sections.push(Section::new(2.0, 2.0, 3.0, 1.5));

        let path = std::env::temp_dir().join("reportlint_roundtrip_test.json");
        save_document(&document, &path).unwrap();
        let loaded = load_document(&path).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(loaded.paragraphs.len(), 1);
        assert_eq!(loaded.paragraphs[0].runs[0].id, run_id);
        assert_eq!(loaded.paragraphs[0].runs[0].text, "hello");
        assert_eq!(loaded.sections[0].left_margin_cm, 3.0);
    }

    #[test]
    fn test_load_missing_document_fails() {
        let path = std::env::temp_dir().join("reportlint_does_not_exist.json");
        assert!(load_document(&path).is_err());
    }
}
