// src/types.rs
use serde::{Deserialize, Serialize};
use std::path::Path;

use anyhow::{Context, Result};

// ===== Request Types =====

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobSubmission {
    pub job_title: String,
    pub description: String,
}

impl JobSubmission {
    pub fn new(job_title: &str, description: &str) -> Self {
        Self {
            job_title: job_title.to_string(),
            description: description.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchRequest {
    pub job_id: String,
    pub resume_text: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InterviewInvite {
    pub candidate_email: String,
    pub candidate_name: String,
}

/// A resume file picked by the user, read into memory for one upload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResumeUpload {
    pub file_name: String,
    pub content_type: &'static str,
    pub bytes: Vec<u8>,
}

impl ResumeUpload {
    pub async fn from_path(path: &Path) -> Result<Self> {
        let file_name = path
            .file_name()
            .and_then(|n| n.to_str())
            .map(str::to_string)
            .with_context(|| format!("Invalid resume file name: {}", path.display()))?;

        let bytes = tokio::fs::read(path)
            .await
            .with_context(|| format!("Failed to read file: {}", path.display()))?;

        Ok(Self {
            content_type: content_type_for(&file_name),
            file_name,
            bytes,
        })
    }
}

/// Content type sent with the multipart `file` part
pub fn content_type_for(file_name: &str) -> &'static str {
    let lower_name = file_name.to_lowercase();
    if lower_name.ends_with(".pdf") {
        "application/pdf"
    } else if lower_name.ends_with(".docx") {
        "application/vnd.openxmlformats-officedocument.wordprocessingml.document"
    } else if lower_name.ends_with(".doc") {
        "application/msword"
    } else if lower_name.ends_with(".txt") {
        "text/plain"
    } else {
        "application/octet-stream"
    }
}

// ===== Response Types =====

/// Body returned by `/upload_job` and `/schedule_interview`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: Option<String>,
    pub error: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResumeUploadResponse {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub extracted_text: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchResponse {
    #[serde(default)]
    pub match_score: Option<f64>,
    #[serde(default)]
    pub error: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum MatchOutcome {
    Score(f64),
    Rejected(String),
}

impl TryFrom<MatchResponse> for MatchOutcome {
    type Error = anyhow::Error;

    fn try_from(response: MatchResponse) -> Result<Self> {
        // A non-empty `error` wins even when a score is also present
        let error = response.error.filter(|e| !e.is_empty());
        match (error, response.match_score) {
            (Some(error), _) => Ok(MatchOutcome::Rejected(error)),
            (None, Some(score)) => Ok(MatchOutcome::Score(score)),
            (None, None) => anyhow::bail!("Match response has neither match_score nor error"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobListing {
    pub id: i64,
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobListingsResponse {
    pub job_listings: Vec<JobListing>,
}
