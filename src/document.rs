//! Loading, saving, and flattened-text access for DOCX documents.
//!
//! The object model belongs to `docx-rs`; this module owns the file edges
//! (read the template, pack the result) and the text view used for
//! placeholder matching. A paragraph's "text" is the concatenation of its
//! runs' text children, the same view a reader sees.

use std::fs::{self, File};
use std::path::Path;

use docx_rs::{read_docx, Docx, DocumentChild, Paragraph, ParagraphChild, Run, RunChild};

use crate::error::{Error, Result};

/// Load a DOCX template from `path`.
///
/// Returns [`Error::TemplateNotFound`] when the path does not exist and
/// [`Error::DocxRead`] when the file is not a readable DOCX package.
pub fn load_docx<P: AsRef<Path>>(path: P) -> Result<Docx> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(Error::TemplateNotFound(path.to_path_buf()));
    }

    log::debug!("loading template: {}", path.display());
    let bytes = fs::read(path)?;
    Ok(read_docx(&bytes)?)
}

/// Pack `docx` and write it to `path`, overwriting any existing file.
pub fn save_docx<P: AsRef<Path>>(mut docx: Docx, path: P) -> Result<()> {
    let path = path.as_ref();
    let mut file = File::create(path).map_err(|source| Error::Write {
        path: path.to_path_buf(),
        source,
    })?;

    docx.build()
        .pack(&mut file)
        .map_err(|e| Error::DocxWrite(e.to_string()))?;

    log::debug!("saved document: {}", path.display());
    Ok(())
}

/// Iterate the document's top-level paragraphs in order.
///
/// Paragraphs inside tables are not included; table content is read-only
/// in this crate (see the `inspect` module).
pub fn paragraphs(docx: &Docx) -> impl Iterator<Item = &Paragraph> {
    docx.document.children.iter().filter_map(|child| match child {
        DocumentChild::Paragraph(p) => Some(p.as_ref()),
        _ => None,
    })
}

/// Iterate the document's top-level paragraphs mutably, in order.
pub fn paragraphs_mut(docx: &mut Docx) -> impl Iterator<Item = &mut Paragraph> {
    docx.document
        .children
        .iter_mut()
        .filter_map(|child| match child {
            DocumentChild::Paragraph(p) => Some(p.as_mut()),
            _ => None,
        })
}

/// Concatenated text of every run in the paragraph.
///
/// Tabs and breaks flatten to `\t` and `\n`; non-text children (drawings,
/// field codes) contribute nothing.
pub fn paragraph_text(paragraph: &Paragraph) -> String {
    let mut text = String::new();
    for child in &paragraph.children {
        if let ParagraphChild::Run(run) = child {
            for run_child in &run.children {
                match run_child {
                    RunChild::Text(t) => text.push_str(&t.text),
                    RunChild::Tab(_) => text.push('\t'),
                    RunChild::Break(_) => text.push('\n'),
                    _ => {}
                }
            }
        }
    }
    text
}

/// Replace the paragraph's content with a single unstyled run holding `text`.
///
/// Run-level formatting of the previous content is dropped; paragraph-level
/// properties (alignment, style) are kept. Callers that need run formatting
/// apply it afterwards, see `format::apply_format`.
pub fn set_paragraph_text(paragraph: &mut Paragraph, text: impl Into<String>) {
    paragraph.children.clear();
    paragraph
        .children
        .push(ParagraphChild::Run(Box::new(Run::new().add_text(text))));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paragraph_text_concatenates_runs() {
        let paragraph = Paragraph::new()
            .add_run(Run::new().add_text("Hello "))
            .add_run(Run::new().add_text("world"));
        assert_eq!(paragraph_text(&paragraph), "Hello world");
    }

    #[test]
    fn test_paragraph_text_empty() {
        assert_eq!(paragraph_text(&Paragraph::new()), "");
    }

    #[test]
    fn test_set_paragraph_text_collapses_runs() {
        let mut paragraph = Paragraph::new()
            .add_run(Run::new().add_text("old "))
            .add_run(Run::new().add_text("content"));
        set_paragraph_text(&mut paragraph, "new content");

        assert_eq!(paragraph.children.len(), 1);
        assert_eq!(paragraph_text(&paragraph), "new content");
    }

    #[test]
    fn test_paragraph_iteration_skips_tables() {
        let docx = Docx::new()
            .add_paragraph(Paragraph::new().add_run(Run::new().add_text("first")))
            .add_table(docx_rs::Table::new(vec![]))
            .add_paragraph(Paragraph::new().add_run(Run::new().add_text("second")));

        let texts: Vec<String> = paragraphs(&docx).map(paragraph_text).collect();
        assert_eq!(texts, vec!["first", "second"]);
    }

    #[test]
    fn test_load_missing_template() {
        let err = load_docx("definitely/not/here.docx").unwrap_err();
        assert!(matches!(err, Error::TemplateNotFound(_)));
    }
}
