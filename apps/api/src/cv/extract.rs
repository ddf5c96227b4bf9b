//! Upload Extractor — pulls plain text out of an uploaded `.docx`.
//!
//! A `.docx` is a ZIP of XML parts; `docx-rs` parses it into
//!   Document → Paragraph → Run → Text
//! and we walk that tree, one output line per non-empty paragraph.
//! Formatting is discarded. Table cells and hyperlinks are walked too.

use docx_rs::{
    read_docx, DocumentChild, Paragraph, ParagraphChild, RunChild, Table, TableCellContent,
    TableChild, TableRowChild,
};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("Uploaded file is not a readable docx: {0}")]
    InvalidDocument(String),
}

/// Narrow extraction seam: document bytes in, plain text out.
///
/// Carried in `AppState` as `Arc<dyn TextExtractor>`. Implementations are
/// synchronous; callers move them onto the blocking pool.
pub trait TextExtractor: Send + Sync {
    fn extract_text(&self, bytes: &[u8]) -> Result<String, ExtractError>;
}

/// Default extractor backed by `docx-rs`. No format sniffing, no fallback.
#[derive(Debug, Clone, Copy, Default)]
pub struct DocxTextExtractor;

impl TextExtractor for DocxTextExtractor {
    fn extract_text(&self, bytes: &[u8]) -> Result<String, ExtractError> {
        let docx = read_docx(bytes).map_err(|e| ExtractError::InvalidDocument(format!("{e:?}")))?;

        let mut lines = Vec::new();
        for child in &docx.document.children {
            match child {
                DocumentChild::Paragraph(para) => push_paragraph(para, &mut lines),
                DocumentChild::Table(table) => push_table(table, &mut lines),
                // Section breaks, bookmarks, TOCs etc. carry no body text
                _ => {}
            }
        }

        tracing::debug!("Extracted {} lines from uploaded docx", lines.len());
        Ok(lines.join("\n"))
    }
}

fn push_paragraph(para: &Paragraph, lines: &mut Vec<String>) {
    let mut text = String::new();
    collect_paragraph_text(&para.children, &mut text);
    if !text.trim().is_empty() {
        lines.push(text);
    }
}

#[allow(irrefutable_let_patterns)]
fn push_table(table: &Table, lines: &mut Vec<String>) {
    for row in &table.rows {
        let TableChild::TableRow(row) = row else { continue };
        for cell in &row.cells {
            let TableRowChild::TableCell(cell) = cell else { continue };
            for content in &cell.children {
                match content {
                    TableCellContent::Paragraph(para) => push_paragraph(para, lines),
                    TableCellContent::Table(inner) => push_table(inner, lines),
                    _ => {}
                }
            }
        }
    }
}

/// Runs are concatenated with no separator; they are parts of the same sentence.
fn collect_paragraph_text(children: &[ParagraphChild], out: &mut String) {
    for child in children {
        match child {
            ParagraphChild::Run(run) => {
                for rc in &run.children {
                    match rc {
                        RunChild::Text(t) => out.push_str(&t.text),
                        RunChild::Tab(_) => out.push('\t'),
                        RunChild::Break(_) => out.push('\n'),
                        _ => {}
                    }
                }
            }
            ParagraphChild::Hyperlink(link) => collect_paragraph_text(&link.children, out),
            _ => {}
        }
    }
}
