use anyhow::Result;
use clap::Parser;
use std::path::{Path, PathBuf};

// Import from reportlint-core
use reportlint_core::{pages, report, storage, DocumentChecker, PageRasterizer, TextFileRasterizer};

#[derive(Parser)]
#[command(name = "reportlint")]
#[command(about = "Check a document against the house style, highlight and auto-fix violations")]
struct Args {
    /// Path to the document file to check (JSON document tree)
    #[arg(short, long)]
    input: PathBuf,

    /// Where to save the checked (highlighted) copy.
    /// Defaults to "<input stem>_checked.json" next to the input
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Also produce an auto-fixed copy at this path
    #[arg(long)]
    fix_output: Option<PathBuf>,

    /// Write a plain-text violation report to this path
    #[arg(short, long)]
    report: Option<PathBuf>,

    /// Pre-rendered page texts of the document (form-feed separated),
    /// used to list the pages that contain flagged text
    #[arg(long)]
    page_text: Option<PathBuf>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    println!("📝 Reportlint Document Checker");

    // Check if input file exists
    if !args.input.exists() {
        eprintln!("❌ Input document not found at: {}", args.input.display());
        eprintln!("   Please check the file path.");
        std::process::exit(1);
    }

    let checker = DocumentChecker::new()?;

    let analysis = if args.fix_output.is_some() {
        checker.analyze_file_with_fix(&args.input)?
    } else {
        checker.analyze_file(&args.input)?
    };

    // Save the checked (highlighted) copy
    let output_path = args
        .output
        .clone()
        .unwrap_or_else(|| default_output_path(&args.input));
    storage::save_document(&analysis.checked, &output_path)?;
    println!("💾 Checked copy saved to: {}", output_path.display());

    // Save the fixed copy when requested
    if let (Some(fix_path), Some(fixed)) = (&args.fix_output, &analysis.fixed) {
        storage::save_document(fixed, fix_path)?;
        println!("💾 Fixed copy saved to: {}", fix_path.display());
    }

    // Write the plain-text report when requested
    if let Some(report_path) = &args.report {
        report::write_report(&analysis.violations, &analysis.checked, report_path)?;
        println!("💾 Report saved to: {}", report_path.display());
    }

    if analysis.is_compliant() {
        println!("✅ The document fully conforms to the house style.");
    } else {
        println!(
            "⚠️  Total violations found: {}",
            analysis.total_violations()
        );
        println!("   All problematic text has been highlighted.");

        if let Some(page_text) = &args.page_text {
            report_pages(page_text)?;
        }
    }

    Ok(())
}

fn default_output_path(input: &Path) -> PathBuf {
    let stem = input
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("output");
    input.with_file_name(format!("{stem}_checked.json"))
}

/// Feed the rendered page texts through the rasterizer seam and print one
/// line per page that may contain flagged text.
fn report_pages(page_text: &Path) -> Result<()> {
    let rasterizer = TextFileRasterizer;
    println!("📄 Page analysis via {}", rasterizer.name());

    let pages = rasterizer.page_texts(page_text)?;
    for page_number in pages::pages_with_issues(&pages) {
        println!("   Issue detected on page {page_number}");
    }

    Ok(())
}
