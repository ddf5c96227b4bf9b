// CV generation and tailoring.
// Prompt building, line formatting, docx packaging and upload extraction.
// All LLM calls go through llm_client — no direct Gemini calls here.

pub mod builder;
pub mod docx;
pub mod extract;
pub mod formatter;
pub mod generator;
pub mod handlers;
pub mod prompts;
