//! CV pipeline — orchestrates prompt → completion → blocks → `.docx`.
//!
//! Flow (generate): build_generation_prompt → generate → format → render_docx
//! Flow (tailor):   extract_text → build_tailoring_prompt → generate → format → render_docx
//!
//! Any stage failing discards the whole request. Nothing is retried.

use std::sync::Arc;

use thiserror::Error;
use tracing::info;

use crate::cv::builder::{build_generation_prompt, build_tailoring_prompt};
use crate::cv::docx::{render_docx, DocumentError};
use crate::cv::extract::{ExtractError, TextExtractor};
use crate::cv::formatter::format_completion;
use crate::llm_client::{LlmError, TextGenerator};
use crate::models::cv::{CvInput, TailorInput};

#[derive(Debug, Error)]
pub enum CvError {
    #[error("Generation failed: {0}")]
    Llm(#[from] LlmError),

    #[error("Extraction failed: {0}")]
    Extract(#[from] ExtractError),

    #[error("Packaging failed: {0}")]
    Document(#[from] DocumentError),

    #[error("Invalid request body: {0}")]
    Body(String),

    #[error("Blocking task failed: {0}")]
    Join(#[from] tokio::task::JoinError),
}

/// Generates a fresh CV from the four form fields.
pub async fn generate_cv(
    generator: &dyn TextGenerator,
    input: &CvInput,
) -> Result<Vec<u8>, CvError> {
    let prompt = build_generation_prompt(input);
    render_cv(generator, &prompt).await
}

/// Tailors an uploaded CV to a job description.
pub async fn tailor_cv(
    generator: &dyn TextGenerator,
    extractor: Arc<dyn TextExtractor>,
    input: TailorInput,
) -> Result<Vec<u8>, CvError> {
    let TailorInput {
        cv_file,
        job_description,
    } = input;

    let cv_text =
        tokio::task::spawn_blocking(move || extractor.extract_text(&cv_file)).await??;
    info!("Extracted {} chars from uploaded CV", cv_text.len());

    let prompt = build_tailoring_prompt(&cv_text, &job_description);
    render_cv(generator, &prompt).await
}

/// Sends `prompt` to the generator and packages the completion as `.docx`.
pub async fn render_cv(generator: &dyn TextGenerator, prompt: &str) -> Result<Vec<u8>, CvError> {
    let completion = generator.generate(prompt).await?;

    let blocks = format_completion(&completion);
    info!(
        "Completion of {} chars formatted into {} blocks",
        completion.len(),
        blocks.len()
    );

    let bytes = tokio::task::spawn_blocking(move || render_docx(&blocks)).await??;
    Ok(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::Mutex;

    use crate::cv::extract::DocxTextExtractor;
    use crate::cv::formatter::Block;

    /// Returns a fixed completion and remembers the last prompt.
    struct RecordingGenerator {
        completion: &'static str,
        last_prompt: Mutex<Option<String>>,
    }

    impl RecordingGenerator {
        fn new(completion: &'static str) -> Self {
            Self {
                completion,
                last_prompt: Mutex::new(None),
            }
        }

        fn last_prompt(&self) -> String {
            self.last_prompt.lock().unwrap().clone().unwrap_or_default()
        }
    }

    #[async_trait]
    impl TextGenerator for RecordingGenerator {
        async fn generate(&self, prompt: &str) -> Result<String, LlmError> {
            *self.last_prompt.lock().unwrap() = Some(prompt.to_string());
            Ok(self.completion.to_string())
        }
    }

    struct FailingGenerator;

    #[async_trait]
    impl TextGenerator for FailingGenerator {
        async fn generate(&self, _prompt: &str) -> Result<String, LlmError> {
            Err(LlmError::Api {
                status: 429,
                message: "quota exhausted".to_string(),
            })
        }
    }

    fn extracted(bytes: &[u8]) -> String {
        DocxTextExtractor.extract_text(bytes).unwrap()
    }

    #[tokio::test]
    async fn test_generate_cv_renders_formatted_completion() {
        let generator = RecordingGenerator::new("# Jane Doe\n\n- Rust\nBuilt things.");
        let input = CvInput {
            skills: "Rust".to_string(),
            ..CvInput::default()
        };

        let bytes = generate_cv(&generator, &input).await.unwrap();

        assert_eq!(extracted(&bytes), "Jane Doe\nRust\nBuilt things.");
        assert!(generator.last_prompt().contains("Skills:\nRust"));
    }

    #[tokio::test]
    async fn test_tailor_cv_feeds_extracted_text_and_job_description() {
        let upload = render_docx(&[
            Block::Heading1("Jane Doe".into()),
            Block::Paragraph("Backend engineer at Acme".into()),
        ])
        .unwrap();
        let generator = RecordingGenerator::new("# Tailored\n- Kafka");

        let bytes = tailor_cv(
            &generator,
            Arc::new(DocxTextExtractor),
            TailorInput {
                cv_file: upload.into(),
                job_description: "Streaming engineer, Kafka required".to_string(),
            },
        )
        .await
        .unwrap();

        let prompt = generator.last_prompt();
        assert!(prompt.contains("CV Content:\nJane Doe\nBackend engineer at Acme"));
        assert!(prompt.contains("Job Description:\nStreaming engineer, Kafka required"));
        assert_eq!(extracted(&bytes), "Tailored\nKafka");
    }

    #[tokio::test]
    async fn test_tailor_cv_aborts_on_invalid_upload() {
        let generator = RecordingGenerator::new("unused");

        let err = tailor_cv(
            &generator,
            Arc::new(DocxTextExtractor),
            TailorInput {
                cv_file: bytes::Bytes::from_static(b"not a docx"),
                job_description: "anything".to_string(),
            },
        )
        .await
        .unwrap_err();

        assert!(matches!(err, CvError::Extract(_)));
        assert!(generator.last_prompt().is_empty());
    }

    #[tokio::test]
    async fn test_generation_failure_propagates() {
        let err = generate_cv(&FailingGenerator, &CvInput::default())
            .await
            .unwrap_err();
        assert!(matches!(err, CvError::Llm(LlmError::Api { status: 429, .. })));
    }
}
