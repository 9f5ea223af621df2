use crate::classifier::ParagraphClassifier;
use crate::config::StyleConfig;
use crate::fixes::{AlignmentFix, FixRule, FontFix, MarginFix};
use crate::rules::{AlignmentRule, FontRule, MarginRule, StyleRule};
use crate::storage;
use crate::types::{Analysis, Document, Violation};
use anyhow::Result;
use chrono::Utc;
use std::path::Path;

/// Orchestrates the rule modules over one document tree.
///
/// Check order is fixed: fonts, then alignment/indentation, then margins.
/// Each rule returns its own records and the checker concatenates them, so
/// the modules share nothing but the tree. The fix mirrors run in the same
/// order and never consult the violation list.
pub struct DocumentChecker {
    config: StyleConfig,
    classifier: ParagraphClassifier,
}

impl DocumentChecker {
    /// Checker for the built-in house style.
    pub fn new() -> Result<Self> {
        Self::with_config(StyleConfig::default())
    }

    pub fn with_config(config: StyleConfig) -> Result<Self> {
        let classifier = ParagraphClassifier::new(&config.patterns)?;
        Ok(Self { config, classifier })
    }

    pub fn config(&self) -> &StyleConfig {
        &self.config
    }

    /// Run the three check modules against the tree, highlighting flagged
    /// text as a side effect. Records come back in document traversal
    /// order within each rule.
    pub fn check(&self, document: &mut Document) -> Vec<Violation> {
        let mut violations = Vec::new();
        self.apply_rule(&FontRule::new(&self.config), document, &mut violations);
        self.apply_rule(
            &AlignmentRule::new(&self.config, &self.classifier),
            document,
            &mut violations,
        );
        self.apply_rule(&MarginRule::new(&self.config), document, &mut violations);
        violations
    }

    fn apply_rule(
        &self,
        rule: &dyn StyleRule,
        document: &mut Document,
        violations: &mut Vec<Violation>,
    ) {
        let found = rule.check(document);
        println!("   🔍 {} findings from {}", found.len(), rule.name());
        violations.extend(found);
    }

    /// Run the three fix mirrors — unconditional normalization to the
    /// canonical values, not scoped to any violation list.
    pub fn fix(&self, document: &mut Document) {
        self.apply_fix(&FontFix::new(&self.config), document);
        self.apply_fix(
            &AlignmentFix::new(&self.config, &self.classifier),
            document,
        );
        self.apply_fix(&MarginFix::new(&self.config), document);
    }

    fn apply_fix(&self, fix: &dyn FixRule, document: &mut Document) {
        fix.apply(document);
        println!("   🔧 Applied {}", fix.name());
    }

    /// Load the document once, check it, and hand back the violation list
    /// together with the highlighted tree for the caller to persist.
    pub fn analyze_file(&self, input: &Path) -> Result<Analysis> {
        println!("📄 Checking: {}", input.display());
        let mut checked = storage::load_document(input)?;
        let violations = self.check(&mut checked);
        println!("📊 Total violations: {}", violations.len());

        Ok(Analysis {
            violations,
            checked,
            fixed: None,
            checked_at: Utc::now(),
        })
    }

    /// Check and fix in one call. The document is loaded a second time so
    /// the checked copy keeps its highlighting while the fixed copy starts
    /// from the pristine tree.
    pub fn analyze_file_with_fix(&self, input: &Path) -> Result<Analysis> {
        let mut analysis = self.analyze_file(input)?;

        let mut fixed = storage::load_document(input)?;
        self.fix(&mut fixed);
        analysis.fixed = Some(fixed);

        Ok(analysis)
    }
}
