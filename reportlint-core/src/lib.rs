// Reportlint Core Library
//
// Checks word-processing documents against a fixed house style and
// produces violation reports, highlighted copies, and auto-fixed copies.

pub mod types;
pub mod config;
pub mod classifier;
pub mod rules;
pub mod fixes;
pub mod processor;
pub mod storage;
pub mod report;
pub mod pages;

// Re-export main types and functions for easy use
pub use types::*;
pub use config::StyleConfig;
pub use classifier::{ParagraphClass, ParagraphClassifier};
pub use processor::DocumentChecker;
pub use pages::{PageRasterizer, TextFileRasterizer};
