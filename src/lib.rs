//! # docfill
//!
//! DOCX template filling with per-field formatting and font availability
//! checks.
//!
//! The crate takes a Word template containing known placeholder paragraphs
//! (a recipient name, a company, a date), replaces them with configured
//! values, formats the replaced paragraphs (alignment, font, size, weight,
//! letter spacing), and writes a new document. Requested fonts are checked
//! against a catalog of available families and silently degrade to a safe
//! fallback when missing.
//!
//! ## Quick Start
//!
//! ```no_run
//! use docfill::{FillConfig, TemplateFiller};
//!
//! fn main() -> docfill::Result<()> {
//!     let config = FillConfig::with_values("John Doe", "ACME Corporation", "DECEMBER 15 - 16, 2024");
//!     let report = TemplateFiller::new(config).fill_file("t.docx", "certificate_formatted.docx")?;
//!     println!("Replacements: {}", report.total());
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! - **Exact and substring placeholders**: whole-paragraph replacement for
//!   name and date, in-place substitution for the company line
//! - **Per-field formatting**: alignment, font size, font family, bold,
//!   character spacing
//! - **Font advisory**: builtin and system font catalogs with safe fallback
//! - **Inspection**: dump paragraph and table texts to find placeholders

pub mod demo;
pub mod document;
pub mod error;
pub mod fill;
pub mod fonts;
pub mod format;
pub mod inspect;

// Re-export commonly used types
pub use demo::{font_demo_docx, write_font_demo, DEMO_FONTS};
pub use document::{load_docx, paragraph_text, paragraphs, save_docx, set_paragraph_text};
pub use error::{Error, Result};
pub use fill::{
    find_and_replace, FieldConfig, FillConfig, FillReport, MatchMode, Matcher, TemplateFiller,
    COMPANY_PLACEHOLDER, DATE_PLACEHOLDER, NAME_PLACEHOLDER,
};
pub use fonts::{
    builtin_fonts, is_available_advanced, is_available_basic, resolve_safe_font, CatalogSource,
    FontCatalog, DEFAULT_FALLBACK_FONT,
};
pub use format::{apply_format, Alignment, FormatSpec};
pub use inspect::DocumentSummary;

// The document object model callers receive from `load_docx`.
pub use docx_rs::Docx;

use std::path::Path;

/// Fill a template with the default configuration's placeholders and values.
///
/// # Arguments
///
/// * `input` - Path to the template DOCX
/// * `output` - Path the filled document is written to
///
/// # Example
///
/// ```no_run
/// use docfill::fill_file;
///
/// let report = fill_file("t.docx", "certificate_formatted.docx").unwrap();
/// println!("Replacements: {}", report.total());
/// ```
pub fn fill_file<P: AsRef<Path>, Q: AsRef<Path>>(input: P, output: Q) -> Result<FillReport> {
    fill_file_with_config(input, output, FillConfig::default())
}

/// Fill a template with a custom configuration.
///
/// # Example
///
/// ```no_run
/// use docfill::{fill_file_with_config, FillConfig};
///
/// let config = FillConfig::default().with_name("Jane Roe");
/// let report = fill_file_with_config("t.docx", "out.docx", config).unwrap();
/// ```
pub fn fill_file_with_config<P: AsRef<Path>, Q: AsRef<Path>>(
    input: P,
    output: Q,
    config: FillConfig,
) -> Result<FillReport> {
    TemplateFiller::new(config).fill_file(input, output)
}

/// Load a document and summarize its textual content.
///
/// # Example
///
/// ```no_run
/// use docfill::inspect_file;
///
/// let summary = inspect_file("t.docx").unwrap();
/// for p in &summary.paragraphs {
///     println!("Paragraph {}: '{}'", p.index, p.text);
/// }
/// ```
pub fn inspect_file<P: AsRef<Path>>(path: P) -> Result<DocumentSummary> {
    let docx = load_docx(path)?;
    Ok(DocumentSummary::scan(&docx))
}
