//! Read-only inspection of a document's textual content.
//!
//! Templates often hide placeholders in unexpected paragraphs or table
//! cells; the summary produced here shows every non-empty text with its
//! position so the right placeholder strings can be configured. Nothing
//! in this module mutates the document.

use docx_rs::{Docx, DocumentChild, Table, TableCellContent, TableChild, TableRowChild};
use serde::{Deserialize, Serialize};

use crate::document::paragraph_text;
use crate::error::{Error, Result};

/// A non-empty paragraph with its position in the document body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParagraphEntry {
    /// Index among all top-level paragraphs
    pub index: usize,
    /// Trimmed paragraph text
    pub text: String,
}

/// A non-empty table cell with its grid position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CellEntry {
    /// Row index within the table
    pub row: usize,
    /// Column index within the row
    pub column: usize,
    /// Trimmed cell text, paragraphs joined with newlines
    pub text: String,
}

/// Non-empty cells of one table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableSummary {
    /// Index among all tables in the document
    pub index: usize,
    /// Non-empty cells in row-major order
    pub cells: Vec<CellEntry>,
}

/// Flattened view of a document's textual content.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentSummary {
    /// Total top-level paragraphs, including empty ones
    pub paragraph_count: usize,
    /// Total tables in the document body
    pub table_count: usize,
    /// Non-empty paragraphs in document order
    pub paragraphs: Vec<ParagraphEntry>,
    /// Tables with their non-empty cells
    pub tables: Vec<TableSummary>,
}

impl DocumentSummary {
    /// Scan `docx` and collect its non-empty texts.
    pub fn scan(docx: &Docx) -> Self {
        let mut summary = Self::default();

        for child in &docx.document.children {
            match child {
                DocumentChild::Paragraph(paragraph) => {
                    let index = summary.paragraph_count;
                    summary.paragraph_count += 1;

                    let text = paragraph_text(paragraph);
                    let trimmed = text.trim();
                    if !trimmed.is_empty() {
                        summary.paragraphs.push(ParagraphEntry {
                            index,
                            text: trimmed.to_string(),
                        });
                    }
                }
                DocumentChild::Table(table) => {
                    let index = summary.table_count;
                    summary.table_count += 1;
                    summary.tables.push(scan_table(table, index));
                }
                _ => {}
            }
        }

        summary
    }

    /// Whether the document has no visible text at all.
    pub fn is_empty(&self) -> bool {
        self.paragraphs.is_empty() && self.tables.iter().all(|t| t.cells.is_empty())
    }

    /// Render the summary as JSON.
    pub fn to_json(&self, pretty: bool) -> Result<String> {
        let result = if pretty {
            serde_json::to_string_pretty(self)
        } else {
            serde_json::to_string(self)
        };
        result.map_err(|e| Error::Serialize(e.to_string()))
    }
}

fn scan_table(table: &Table, index: usize) -> TableSummary {
    let mut summary = TableSummary {
        index,
        cells: Vec::new(),
    };

    for (row_index, row_child) in table.rows.iter().enumerate() {
        if let TableChild::TableRow(row) = row_child {
            for (column, cell_child) in row.cells.iter().enumerate() {
                if let TableRowChild::TableCell(cell) = cell_child {
                    let mut parts: Vec<String> = Vec::new();
                    for content in &cell.children {
                        if let TableCellContent::Paragraph(paragraph) = content {
                            let text = paragraph_text(paragraph);
                            let trimmed = text.trim();
                            if !trimmed.is_empty() {
                                parts.push(trimmed.to_string());
                            }
                        }
                    }

                    if !parts.is_empty() {
                        summary.cells.push(CellEntry {
                            row: row_index,
                            column,
                            text: parts.join("\n"),
                        });
                    }
                }
            }
        }
    }

    summary
}
