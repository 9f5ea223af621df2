use crate::types::{Document, Violation};
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Shown in place of the offending text for records with no associated
/// run (section-level findings, flagged paragraphs without runs).
const NO_RUN_PLACEHOLDER: &str = "-";

/// Render the plain-text violation report: a total count line, then one
/// block per record with the offending run text, the reason, and the full
/// text of the containing paragraph. The document resolves run references
/// back to their text.
pub fn render_report(violations: &[Violation], document: &Document) -> String {
    let mut out = String::new();
    out.push_str(&format!("Total violations: {}\n", violations.len()));

    for violation in violations {
        let run_text = violation
            .run_id
            .and_then(|id| document.find_run(id))
            .map(|run| run.text.as_str())
            .unwrap_or(NO_RUN_PLACEHOLDER);

        out.push('\n');
        out.push_str(&format!("text: {}\n", run_text));
        out.push_str(&format!("reason: {}\n", violation.reason));
        out.push_str(&format!("paragraph: {}\n", violation.paragraph_text));
    }

    out
}

pub fn write_report(violations: &[Violation], document: &Document, path: &Path) -> Result<()> {
    let report = render_report(violations, document);
    fs::write(path, report)
        .with_context(|| format!("Failed to write report: {}", path.display()))?;
    Ok(())
}
