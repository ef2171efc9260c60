//! Integration tests for template filling against real DOCX files on disk.

use std::fs;
use std::path::PathBuf;

use docx_rs::{Bold, Justification, Paragraph, ParagraphChild, Run, Sz, Table, TableCell, TableRow};
use tempfile::tempdir;

use docfill::{
    inspect_file, load_docx, paragraph_text, paragraphs, save_docx, write_font_demo, Docx, Error,
    FillConfig, FontCatalog, TemplateFiller, DEMO_FONTS,
};

fn certificate_template() -> Docx {
    Docx::new()
        .add_paragraph(Paragraph::new().add_run(Run::new().add_text("CERTIFICATE OF ATTENDANCE")))
        .add_paragraph(Paragraph::new().add_run(Run::new().add_text("Ally  Farah")))
        .add_paragraph(Paragraph::new().add_run(Run::new().add_text("Visit JEBSEN GROUP today")))
        .add_paragraph(Paragraph::new().add_run(Run::new().add_text("AUGUST 7 – 8 , 2025")))
}

fn write_template(dir: &std::path::Path) -> PathBuf {
    let path = dir.join("t.docx");
    save_docx(certificate_template(), &path).expect("template should save");
    path
}

fn arial_only_filler(config: FillConfig) -> TemplateFiller {
    TemplateFiller::new(config).with_font_catalog(FontCatalog::from_names(["Arial"]))
}

fn body_texts(docx: &Docx) -> Vec<String> {
    paragraphs(docx).map(paragraph_text).collect()
}

#[test]
fn test_fill_file_round_trip() {
    let dir = tempdir().unwrap();
    let template = write_template(dir.path());
    let output = dir.path().join("certificate_formatted.docx");

    let report = arial_only_filler(FillConfig::default())
        .fill_file(&template, &output)
        .unwrap();

    assert_eq!(report.name, 1);
    assert_eq!(report.company, 1);
    assert_eq!(report.date, 1);
    assert_eq!(report.total(), 3);

    let filled = load_docx(&output).unwrap();
    let texts = body_texts(&filled);
    assert_eq!(texts[0], "CERTIFICATE OF ATTENDANCE");
    assert_eq!(texts[1], "John Doe");
    assert_eq!(texts[2], "Visit ACME Corporation today");
    assert_eq!(texts[3], "DECEMBER 15 - 16, 2024");

    // The input template keeps its placeholders.
    let original = load_docx(&template).unwrap();
    assert_eq!(body_texts(&original)[1], "Ally  Farah");
}

#[test]
fn test_formatting_survives_round_trip() {
    let dir = tempdir().unwrap();
    let template = write_template(dir.path());
    let output = dir.path().join("out.docx");

    arial_only_filler(FillConfig::default())
        .fill_file(&template, &output)
        .unwrap();

    let filled = load_docx(&output).unwrap();
    let name_paragraph = paragraphs(&filled)
        .find(|p| paragraph_text(p) == "John Doe")
        .expect("name paragraph should exist");

    assert_eq!(
        name_paragraph.property.alignment,
        Some(Justification::new("center"))
    );

    let mut runs = 0;
    for child in &name_paragraph.children {
        if let ParagraphChild::Run(run) = child {
            runs += 1;
            // Default name format: 24 pt bold.
            assert_eq!(run.run_property.sz, Some(Sz::new(48)));
            assert_eq!(run.run_property.bold, Some(Bold::new()));
        }
    }
    assert_eq!(runs, 1);
}

#[test]
fn test_custom_values_are_written() {
    let dir = tempdir().unwrap();
    let template = write_template(dir.path());
    let output = dir.path().join("out.docx");

    let config = FillConfig::with_values("Jane Roe", "Initech", "JANUARY 1, 2026");
    arial_only_filler(config).fill_file(&template, &output).unwrap();

    let texts = body_texts(&load_docx(&output).unwrap());
    assert_eq!(texts[1], "Jane Roe");
    assert_eq!(texts[2], "Visit Initech today");
    assert_eq!(texts[3], "JANUARY 1, 2026");
}

#[test]
fn test_fill_without_matches_still_writes_output() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("plain.docx");
    let docx =
        Docx::new().add_paragraph(Paragraph::new().add_run(Run::new().add_text("just a letter")));
    save_docx(docx, &path).unwrap();

    let output = dir.path().join("out.docx");
    let report = arial_only_filler(FillConfig::default())
        .fill_file(&path, &output)
        .unwrap();

    assert!(report.is_empty());
    assert!(output.exists());
    assert_eq!(body_texts(&load_docx(&output).unwrap())[0], "just a letter");
}

#[test]
fn test_write_error_when_output_is_directory() {
    let dir = tempdir().unwrap();
    let template = write_template(dir.path());
    let before = fs::read(&template).unwrap();

    // The tempdir itself is not a creatable file path.
    let result = arial_only_filler(FillConfig::default()).fill_file(&template, dir.path());

    assert!(matches!(result, Err(Error::Write { .. })));
    // A failed save leaves the input untouched.
    assert_eq!(fs::read(&template).unwrap(), before);
}

#[test]
fn test_missing_template_error() {
    let dir = tempdir().unwrap();
    let missing = dir.path().join("nope.docx");

    let result = arial_only_filler(FillConfig::default())
        .fill_file(&missing, dir.path().join("out.docx"));

    assert!(matches!(result, Err(Error::TemplateNotFound(_))));
}

#[test]
fn test_unreadable_template_error() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("broken.docx");
    fs::write(&path, b"this is not a zip archive").unwrap();

    let result = load_docx(&path);
    assert!(matches!(result, Err(Error::DocxRead(_))));
}

#[test]
fn test_inspect_file_reads_paragraphs_and_tables() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("tabled.docx");

    let cell = TableCell::new()
        .add_paragraph(Paragraph::new().add_run(Run::new().add_text("inside a cell")));
    let docx = certificate_template().add_table(Table::new(vec![TableRow::new(vec![cell])]));
    save_docx(docx, &path).unwrap();

    let summary = inspect_file(&path).unwrap();
    assert_eq!(summary.paragraph_count, 4);
    assert_eq!(summary.table_count, 1);
    assert!(summary
        .paragraphs
        .iter()
        .any(|p| p.text == "Ally  Farah"));
    assert_eq!(summary.tables[0].cells[0].text, "inside a cell");
}

#[test]
fn test_font_demo_round_trip() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("font_demo_output.docx");

    write_font_demo(&path, &FontCatalog::builtin()).unwrap();

    let demo = load_docx(&path).unwrap();
    let texts = body_texts(&demo);
    assert_eq!(texts[0], "Font Demo Document");
    assert!(texts.len() > DEMO_FONTS.len());
}
