//! Text-to-Document Formatter — classifies completion lines into typed blocks.
//!
//! Classification is stateless and line-local. Anything that does not match
//! a heading or bullet marker exactly is a plain paragraph.

/// One classified unit of completion text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    Heading1(String),
    Heading2(String),
    Bullet(String),
    Paragraph(String),
}

/// Classifies a single line. Returns `None` for blank lines.
pub fn classify_line(line: &str) -> Option<Block> {
    let line = line.trim();
    if line.is_empty() {
        return None;
    }

    if let Some(rest) = line.strip_prefix("# ") {
        return Some(Block::Heading1(rest.trim().to_string()));
    }
    if let Some(rest) = line.strip_prefix("## ") {
        return Some(Block::Heading2(rest.trim().to_string()));
    }
    if let Some(rest) = strip_bullet_marker(line) {
        return Some(Block::Bullet(rest.trim().to_string()));
    }

    Some(Block::Paragraph(line.to_string()))
}

/// Splits a completion into lines and classifies each one, dropping blanks.
pub fn format_completion(text: &str) -> Vec<Block> {
    text.lines().filter_map(classify_line).collect()
}

/// `-` or `*` followed by whitespace. `**bold**` and `-1` are not bullets.
fn strip_bullet_marker(line: &str) -> Option<&str> {
    let rest = line.strip_prefix(|c: char| c == '-' || c == '*')?;
    rest.starts_with(char::is_whitespace).then_some(rest)
}
