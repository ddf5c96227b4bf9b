use bytes::Bytes;
use serde::Deserialize;

/// JSON body of `POST /api/generate-cv`.
/// Every field is free text; a missing field is treated as empty.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CvInput {
    pub personal_details: String,
    pub work_experience: String,
    pub education: String,
    pub skills: String,
}

/// Multipart body of `POST /api/tailor-cv`.
#[derive(Debug, Clone)]
pub struct TailorInput {
    /// Raw bytes of the uploaded `.docx`.
    pub cv_file: Bytes,
    pub job_description: String,
}
