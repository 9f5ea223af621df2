use serde::{Deserialize, Serialize};

/// Absolute tolerance for indent and line-spacing comparisons, in the
/// measured unit (cm for indents, multiplier for spacing).
///
/// The margin rule deliberately does NOT use this — it rounds to two
/// decimals and compares exactly, which is slightly stricter at the
/// boundary (2.004 cm rounds to compliant here but would fail a plain
/// tolerance comparison). The two behaviors are kept distinct on purpose.
pub const MEASURE_TOLERANCE: f64 = 0.01;

// Default value functions for serde
fn default_target_family() -> String {
    "Times New Roman".to_string()
}

/// The house style every rule checks against. Fixed constants — the
/// `Default` impls ARE the style; nothing reads these from disk at runtime.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StyleConfig {
    #[serde(default)]
    pub font: FontConfig,
    #[serde(default)]
    pub paragraph: ParagraphConfig,
    #[serde(default)]
    pub margins: MarginConfig,
    #[serde(default)]
    pub patterns: PatternConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FontConfig {
    /// Required font family for every run with an explicit font
    #[serde(default = "default_target_family")]
    pub target_family: String,
    /// Accepted size range in points, inclusive on both ends
    pub min_size_pt: f64,
    pub max_size_pt: f64,
}

impl Default for FontConfig {
    fn default() -> Self {
        Self {
            target_family: default_target_family(),
            min_size_pt: 12.0,
            max_size_pt: 14.0,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParagraphConfig {
    /// First-line indent for body paragraphs, in cm
    pub first_line_indent_cm: f64,
    pub left_indent_cm: f64,
    pub right_indent_cm: f64,
    /// Line spacing as a multiplier of single spacing
    pub line_spacing: f64,
}

impl Default for ParagraphConfig {
    fn default() -> Self {
        Self {
            first_line_indent_cm: 1.25,
            left_indent_cm: 0.0,
            right_indent_cm: 0.0,
            line_spacing: 1.5,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MarginConfig {
    pub top_cm: f64,
    pub bottom_cm: f64,
    pub left_cm: f64,
    pub right_cm: f64,
}

impl Default for MarginConfig {
    fn default() -> Self {
        Self {
            top_cm: 2.0,
            bottom_cm: 2.0,
            left_cm: 3.0,
            right_cm: 1.5,
        }
    }
}

/// Regex pattern strings for paragraph classification. Held as strings
/// here and compiled once by the classifier.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PatternConfig {
    /// Date stamp that marks the last title-page paragraph (searched
    /// anywhere in the text, not anchored)
    pub title_page: String,
    /// Caption marker under an image, number optional
    pub image_caption_marker: String,
    /// Caption marker above a table, number optional
    pub table_caption_marker: String,
    /// Well-formed image caption: marker, number, period, then text
    pub image_caption_content: String,
    /// Well-formed table caption: marker, number, period, then text
    pub table_caption_content: String,
}

impl Default for PatternConfig {
    fn default() -> Self {
        Self {
            title_page: r"(?:19|20)\d{2}\s*г\.".to_string(),
            image_caption_marker: r"^Рис\.\s*\d*".to_string(),
            table_caption_marker: r"^Табл\.\s*\d*".to_string(),
            image_caption_content: r"^Рис\.\s*\d+\.\s*(\S.*)$".to_string(),
            table_caption_content: r"^Табл\.\s*\d+\.\s*(\S.*)$".to_string(),
        }
    }
}
