//! Generated demo document showing font availability and safe resolution.

use std::path::Path;

use docx_rs::{AlignmentType, Docx, Paragraph, Run};

use crate::document::save_docx;
use crate::error::Result;
use crate::fonts::FontCatalog;
use crate::format::points_to_half_points;

/// Sample fonts rendered in the demo document, with a blurb for each.
pub const DEMO_FONTS: &[(&str, &str)] = &[
    ("Arial", "Arial is a clean, readable sans-serif font"),
    ("Times New Roman", "Times New Roman is a classic serif font"),
    ("Calibri", "Calibri is a modern sans-serif font"),
    ("Georgia", "Georgia is an elegant serif font"),
    ("Comic Sans MS", "Comic Sans MS is a casual, friendly font"),
    ("Courier New", "Courier New is a monospace font"),
    ("Impact", "Impact is a bold, attention-grabbing font"),
    ("Poppins", "Poppins might not be available (will fallback to Arial)"),
    ("Garet", "Garet might not be available (will fallback to Arial)"),
];

/// Build the demo document in memory.
///
/// One paragraph per sample font: a bold "mark + name" prefix and a
/// description run set in the safely-resolved font, so opening the file
/// shows at a glance which families render as themselves and which fell
/// back.
pub fn font_demo_docx(catalog: &FontCatalog) -> Docx {
    let mut docx = Docx::new().add_paragraph(
        Paragraph::new()
            .add_run(Run::new().add_text("Font Demo Document").size(32).bold())
            .align(AlignmentType::Center),
    );

    for (name, description) in DEMO_FONTS {
        let mark = if catalog.contains(name) { "✓" } else { "✗" };
        let safe_name = catalog.resolve_safe(name, crate::fonts::DEFAULT_FALLBACK_FONT);

        docx = docx.add_paragraph(
            Paragraph::new()
                .add_run(Run::new().add_text(format!("{mark} {name}: ")).bold())
                .add_run(
                    Run::new()
                        .add_text(*description)
                        .fonts(
                            docx_rs::RunFonts::new()
                                .ascii(safe_name.as_str())
                                .hi_ansi(safe_name.as_str()),
                        )
                        .size(points_to_half_points(12.0)),
                ),
        );
    }

    docx = docx
        .add_paragraph(
            Paragraph::new().add_run(Run::new().add_text("Font Availability Information").bold()),
        )
        .add_paragraph(
            Paragraph::new()
                .add_run(Run::new().add_text("Font checking methods:").bold())
                .add_run(
                    Run::new()
                        .add_break(docx_rs::BreakType::TextWrapping)
                        .add_text("1. Basic check: a predefined list of common fonts")
                        .add_break(docx_rs::BreakType::TextWrapping)
                        .add_text("2. Advanced check: the system's installed font families")
                        .add_break(docx_rs::BreakType::TextWrapping)
                        .add_text("3. Safe usage: unavailable fonts fall back to Arial"),
                ),
        );

    docx
}

/// Write the demo document to `path`.
pub fn write_font_demo<P: AsRef<Path>>(path: P, catalog: &FontCatalog) -> Result<()> {
    save_docx(font_demo_docx(catalog), path)
}
