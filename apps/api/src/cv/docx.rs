//! Document Packager — maps formatted blocks 1:1 onto `.docx` paragraphs.
//!
//! Serialization is CPU-bound; callers run `render_docx` inside
//! `tokio::task::spawn_blocking`.

use std::io::Cursor;

use docx_rs::{
    AbstractNumbering, Docx, IndentLevel, Level, LevelJc, LevelText, LineSpacing, NumberFormat,
    Numbering, NumberingId, Paragraph, Run, RunFonts, SpecialIndentType, Start,
};
use thiserror::Error;

use crate::cv::formatter::Block;

pub const DOCX_CONTENT_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document";
pub const GENERATED_FILENAME: &str = "generated_cv.docx";
pub const TAILORED_FILENAME: &str = "tailored_cv.docx";

const FONT: &str = "Calibri";
/// Run sizes are in half-points.
const HEADING1_SIZE: usize = 32;
const HEADING2_SIZE: usize = 28;
const BODY_SIZE: usize = 24;
/// Paragraph spacing is in twentieths of a point.
const HEADING_SPACING_AFTER: u32 = 160;
const BODY_SPACING_AFTER: u32 = 100;
const BULLET_NUMBERING_ID: usize = 1;

#[derive(Debug, Error)]
pub enum DocumentError {
    #[error("Failed to pack docx: {0}")]
    Pack(String),
}

/// Renders the block list into a complete `.docx` payload.
pub fn render_docx(blocks: &[Block]) -> Result<Vec<u8>, DocumentError> {
    let docx = blocks.iter().fold(bullet_numbering(Docx::new()), |docx, block| {
        docx.add_paragraph(block_paragraph(block))
    });

    let mut buf = Cursor::new(Vec::new());
    docx.build()
        .pack(&mut buf)
        .map_err(|e| DocumentError::Pack(e.to_string()))?;
    Ok(buf.into_inner())
}

/// Registers the single-level `•` list used by every bullet block.
fn bullet_numbering(docx: Docx) -> Docx {
    docx.add_abstract_numbering(
        AbstractNumbering::new(BULLET_NUMBERING_ID).add_level(
            Level::new(
                0,
                Start::new(1),
                NumberFormat::new("bullet"),
                LevelText::new("•"),
                LevelJc::new("left"),
            )
            .indent(Some(720), Some(SpecialIndentType::Hanging(360)), None, None),
        ),
    )
    .add_numbering(Numbering::new(BULLET_NUMBERING_ID, BULLET_NUMBERING_ID))
}

fn block_paragraph(block: &Block) -> Paragraph {
    match block {
        Block::Heading1(text) => Paragraph::new()
            .add_run(styled_run(text, HEADING1_SIZE).bold())
            .line_spacing(LineSpacing::new().after(HEADING_SPACING_AFTER)),
        Block::Heading2(text) => Paragraph::new()
            .add_run(styled_run(text, HEADING2_SIZE).bold())
            .line_spacing(LineSpacing::new().after(HEADING_SPACING_AFTER)),
        Block::Bullet(text) => Paragraph::new()
            .add_run(styled_run(text, BODY_SIZE))
            .numbering(NumberingId::new(BULLET_NUMBERING_ID), IndentLevel::new(0))
            .line_spacing(LineSpacing::new().after(BODY_SPACING_AFTER)),
        Block::Paragraph(text) => Paragraph::new()
            .add_run(styled_run(text, BODY_SIZE))
            .line_spacing(LineSpacing::new().after(BODY_SPACING_AFTER)),
    }
}

fn styled_run(text: &str, size: usize) -> Run {
    Run::new()
        .add_text(text)
        .size(size)
        .fonts(RunFonts::new().ascii(FONT).hi_ansi(FONT))
}
