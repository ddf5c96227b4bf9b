// Shared prompt fragments.
// Each flow's own templates live in cv/prompts.rs.

/// Output-shape directive appended to every CV prompt.
/// The formatter in cv/formatter.rs depends on exactly these markers.
pub const FORMAT_INSTRUCTION: &str = "\
Format the CV as plain text using these markers only:
- Start each top-level section title with \"# \" (for example \"# Experience\").
- Start each subsection title with \"## \" (for example \"## Senior Engineer, Acme\").
- Start each list item with \"- \".
- Write every other line as a plain paragraph.";

/// Keeps the completion free of preamble so it can be rendered as-is.
pub const FINAL_CONTENT_INSTRUCTION: &str = "\
Return only the final, ready-to-use CV content. \
Do NOT include commentary, explanations, notes to the user, or placeholders. \
Do NOT wrap the output in code fences.";
