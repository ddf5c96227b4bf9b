// All LLM prompt templates for the CV flows.
// Reuses cross-cutting fragments from llm_client::prompts.

/// CV generation prompt template.
/// Replace: {personal_details}, {work_experience}, {education}, {skills},
///          {format_instruction}, {final_content_instruction}
pub const GENERATION_PROMPT_TEMPLATE: &str = r#"You are an expert CV writer. Generate a professional CV based on the following information.

Personal Details:
{personal_details}

Work Experience:
{work_experience}

Education:
{education}

Skills:
{skills}

{format_instruction}

{final_content_instruction}"#;

/// CV tailoring prompt template.
/// Replace: {cv_text}, {job_description}, {format_instruction},
///          {final_content_instruction}
pub const TAILORING_PROMPT_TEMPLATE: &str = r#"You are an AI CV tailoring assistant. Given the following CV content and job description, tailor the CV to better match the job description. Focus on highlighting relevant skills and experiences, and rephrase sections to align with the job's requirements. Maintain a professional tone and the overall structure of a CV.

CV Content:
{cv_text}

Job Description:
{job_description}

{format_instruction}

{final_content_instruction}

Tailored CV:"#;
