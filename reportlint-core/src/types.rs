use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub type RunId = Uuid;

/// Foreground color applied to runs belonging to flagged text.
/// CSS hex form so it survives serialization unambiguously.
pub const ALERT_COLOR: &str = "#FF0000";

// ===== DOCUMENT TREE =====
// The in-memory document model the checker operates on. Loaded once per
// analysis, mutated in place by highlight/fix operations, written back at
// most once per output path. Read access for checking goes through plain
// field reads and the *_or_default accessors; mutation goes through the
// named operations below.

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Document {
    /// Body paragraphs in document order
    pub paragraphs: Vec<Paragraph>,
    /// Tables in document order; cell paragraphs are traversed row-major
    pub tables: Vec<Table>,
    /// Page sections, each carrying its own margins
    pub sections: Vec<Section>,
}

impl Document {
    /// Look up a run anywhere in the tree — body paragraphs first, then
    /// table cells row-major, matching the traversal order of the rules.
    pub fn find_run(&self, id: RunId) -> Option<&Run> {
        let body = self.paragraphs.iter();
        let cells = self
            .tables
            .iter()
            .flat_map(|table| table.rows.iter())
            .flat_map(|row| row.cells.iter())
            .flat_map(|cell| cell.paragraphs.iter());

        body.chain(cells)
            .flat_map(|paragraph| paragraph.runs.iter())
            .find(|run| run.id == id)
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Paragraph {
    pub runs: Vec<Run>,
    /// None = inherited from the paragraph style (not an explicit override)
    pub alignment: Option<Alignment>,
    pub first_line_indent_cm: Option<f64>,
    pub left_indent_cm: Option<f64>,
    pub right_indent_cm: Option<f64>,
    /// Line spacing as a multiplier of single spacing
    pub line_spacing: Option<f64>,
}

impl Paragraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Convenience constructor: a paragraph holding a single plain run.
    pub fn with_text(text: &str) -> Self {
        Self {
            runs: vec![Run::new(text)],
            ..Self::default()
        }
    }

    /// Full visible text of the paragraph (run texts concatenated).
    pub fn text(&self) -> String {
        self.runs.iter().map(|r| r.text.as_str()).collect()
    }

    /// Unset indents read as 0 cm — the format's defined default.
    pub fn first_line_indent_or_default(&self) -> f64 {
        self.first_line_indent_cm.unwrap_or(0.0)
    }

    pub fn left_indent_or_default(&self) -> f64 {
        self.left_indent_cm.unwrap_or(0.0)
    }

    pub fn right_indent_or_default(&self) -> f64 {
        self.right_indent_cm.unwrap_or(0.0)
    }

    /// Unset spacing reads as single spacing.
    pub fn line_spacing_or_default(&self) -> f64 {
        self.line_spacing.unwrap_or(1.0)
    }

    /// Highlight every run of this paragraph with the alert color — the
    /// side effect of whole-paragraph findings (alignment, captions,
    /// indentation). The font rule highlights single runs instead.
    pub fn highlight_runs(&mut self) {
        for run in &mut self.runs {
            run.highlight();
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Run {
    pub id: RunId,
    pub text: String,
    /// None = inherits the style's font — always compliant
    pub font_family: Option<String>,
    /// None = inherits the style's size — always compliant
    pub font_size_pt: Option<f64>,
    pub bold: bool,
    pub italic: bool,
    pub underline: bool,
    /// Explicit foreground color (CSS hex value, e.g. "#FF0000")
    pub color: Option<String>,
}

impl Run {
    pub fn new(text: &str) -> Self {
        Self {
            id: Uuid::new_v4(),
            text: text.to_string(),
            font_family: None,
            font_size_pt: None,
            bold: false,
            italic: false,
            underline: false,
            color: None,
        }
    }

    /// Set the alert color on this run. Named mutation entry point — the
    /// only way check passes touch the tree.
    pub fn highlight(&mut self) {
        self.color = Some(ALERT_COLOR.to_string());
    }

    /// Remove any explicit foreground color (undoes a previous highlight).
    pub fn clear_color(&mut self) {
        self.color = None;
    }

    pub fn is_highlighted(&self) -> bool {
        self.color.as_deref() == Some(ALERT_COLOR)
    }

    /// Any explicit emphasis set on this run.
    pub fn has_emphasis(&self) -> bool {
        self.bold || self.italic || self.underline
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Alignment {
    Left,
    Center,
    Right,
    Justify,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Table {
    pub rows: Vec<TableRow>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TableRow {
    pub cells: Vec<TableCell>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TableCell {
    pub paragraphs: Vec<Paragraph>,
}

impl Table {
    /// All cell paragraphs, row-major — shared traversal order for the
    /// table legs of the check and fix passes.
    pub fn cell_paragraphs_mut(&mut self) -> impl Iterator<Item = &mut Paragraph> {
        self.rows
            .iter_mut()
            .flat_map(|row| row.cells.iter_mut())
            .flat_map(|cell| cell.paragraphs.iter_mut())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Section {
    pub top_margin_cm: f64,
    pub bottom_margin_cm: f64,
    pub left_margin_cm: f64,
    pub right_margin_cm: f64,
}

impl Section {
    pub fn new(top_cm: f64, bottom_cm: f64, left_cm: f64, right_cm: f64) -> Self {
        Self {
            top_margin_cm: top_cm,
            bottom_margin_cm: bottom_cm,
            left_margin_cm: left_cm,
            right_margin_cm: right_cm,
        }
    }
}

// ===== VIOLATION RECORDS =====

/// One reported formatting discrepancy. The stable data contract between
/// the rule modules and every consumer (report writer, CLI, tests).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Violation {
    /// The offending run, when the finding points at one. None for
    /// section-level findings and for flagged paragraphs with no runs.
    /// When present, the run belongs to the paragraph whose text is
    /// recorded below.
    pub run_id: Option<RunId>,
    /// Full text of the containing paragraph at evaluation time
    pub paragraph_text: String,
    /// Human-readable description: the violated rule plus expected vs. found
    pub reason: String,
}

impl Violation {
    pub fn new(run_id: Option<RunId>, paragraph_text: String, reason: String) -> Self {
        Self {
            run_id,
            paragraph_text,
            reason,
        }
    }
}

/// Everything one analysis call produces: the violation list, the checked
/// (highlighted) tree, and optionally a separately corrected tree.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Analysis {
    pub violations: Vec<Violation>,
    pub checked: Document,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fixed: Option<Document>,
    pub checked_at: DateTime<Utc>,
}

impl Analysis {
    pub fn total_violations(&self) -> usize {
        self.violations.len()
    }

    pub fn is_compliant(&self) -> bool {
        self.violations.is_empty()
    }
}
