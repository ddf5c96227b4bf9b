//! Prompt Builder — interpolates caller input into the CV prompt templates.
//!
//! Input is embedded verbatim: no validation, escaping or length limit.

use crate::cv::prompts::{GENERATION_PROMPT_TEMPLATE, TAILORING_PROMPT_TEMPLATE};
use crate::llm_client::prompts::{FINAL_CONTENT_INSTRUCTION, FORMAT_INSTRUCTION};
use crate::models::cv::CvInput;

/// Builds the prompt for generating a CV from the four form fields.
pub fn build_generation_prompt(input: &CvInput) -> String {
    fill_template(
        GENERATION_PROMPT_TEMPLATE,
        &[
            ("personal_details", input.personal_details.as_str()),
            ("work_experience", input.work_experience.as_str()),
            ("education", input.education.as_str()),
            ("skills", input.skills.as_str()),
            ("format_instruction", FORMAT_INSTRUCTION),
            ("final_content_instruction", FINAL_CONTENT_INSTRUCTION),
        ],
    )
}

/// Builds the prompt for tailoring extracted CV text to a job description.
pub fn build_tailoring_prompt(cv_text: &str, job_description: &str) -> String {
    fill_template(
        TAILORING_PROMPT_TEMPLATE,
        &[
            ("cv_text", cv_text),
            ("job_description", job_description),
            ("format_instruction", FORMAT_INSTRUCTION),
            ("final_content_instruction", FINAL_CONTENT_INSTRUCTION),
        ],
    )
}

/// Single-pass `{key}` substitution over the template only.
///
/// Substituted values are never rescanned, so braces in user text survive
/// untouched. Unknown placeholders are left as-is.
fn fill_template(template: &str, values: &[(&str, &str)]) -> String {
    let extra: usize = values.iter().map(|(_, v)| v.len()).sum();
    let mut out = String::with_capacity(template.len() + extra);
    let mut rest = template;

    while let Some(start) = rest.find('{') {
        out.push_str(&rest[..start]);
        let tail = &rest[start..];

        let hit = values.iter().find_map(|(key, value)| {
            let placeholder = format!("{{{key}}}");
            tail.starts_with(&placeholder)
                .then_some((placeholder.len(), *value))
        });

        match hit {
            Some((len, value)) => {
                out.push_str(value);
                rest = &tail[len..];
            }
            None => {
                out.push('{');
                rest = &tail[1..];
            }
        }
    }

    out.push_str(rest);
    out
}
