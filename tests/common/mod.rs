#![allow(dead_code)]

use anyhow::Result;
use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::Mutex;

use job_screening::core::BackendApi;
use job_screening::types::{
    InterviewInvite, JobListing, JobSubmission, MatchOutcome, MatchRequest, MessageResponse,
    ResumeUpload, ResumeUploadResponse,
};

#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    UploadJob(JobSubmission),
    UploadResume { file_name: String, content_type: String },
    MatchResume(MatchRequest),
    ListJobs,
    ScheduleInterview(InterviewInvite),
}

/// In-memory backend that records every request it receives
#[derive(Default)]
pub struct FakeBackend {
    pub calls: Mutex<Vec<Call>>,
    pub offline: bool,
    pub job_response: MessageResponse,
    pub resume_responses: Mutex<VecDeque<ResumeUploadResponse>>,
    pub match_outcomes: Mutex<VecDeque<MatchOutcome>>,
    pub listings: Vec<JobListing>,
}

impl FakeBackend {
    pub fn offline() -> Self {
        Self {
            offline: true,
            ..Default::default()
        }
    }

    /// Answer the next resume upload with `response`
    pub fn with_resume(self, response: ResumeUploadResponse) -> Self {
        self.resume_responses.lock().unwrap().push_back(response);
        self
    }

    /// Answer the next match request with `outcome`
    pub fn with_match(self, outcome: MatchOutcome) -> Self {
        self.match_outcomes.lock().unwrap().push_back(outcome);
        self
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: Call) -> Result<()> {
        self.calls.lock().unwrap().push(call);
        if self.offline {
            anyhow::bail!("connection refused");
        }
        Ok(())
    }
}

#[async_trait]
impl BackendApi for FakeBackend {
    async fn upload_job(&self, job: &JobSubmission) -> Result<MessageResponse> {
        self.record(Call::UploadJob(job.clone()))?;
        Ok(self.job_response.clone())
    }

    async fn upload_resume(&self, resume: &ResumeUpload) -> Result<ResumeUploadResponse> {
        self.record(Call::UploadResume {
            file_name: resume.file_name.clone(),
            content_type: resume.content_type.to_string(),
        })?;
        self.resume_responses
            .lock()
            .unwrap()
            .pop_front()
            .ok_or_else(|| anyhow::anyhow!("Failed to parse response"))
    }

    async fn match_resume(&self, request: &MatchRequest) -> Result<MatchOutcome> {
        self.record(Call::MatchResume(request.clone()))?;
        self.match_outcomes
            .lock()
            .unwrap()
            .pop_front()
            .ok_or_else(|| anyhow::anyhow!("Match response has neither match_score nor error"))
    }

    async fn list_jobs(&self) -> Result<Vec<JobListing>> {
        self.record(Call::ListJobs)?;
        Ok(self.listings.clone())
    }

    async fn schedule_interview(&self, invite: &InterviewInvite) -> Result<MessageResponse> {
        self.record(Call::ScheduleInterview(invite.clone()))?;
        Ok(self.job_response.clone())
    }
}

pub fn message(text: &str) -> MessageResponse {
    MessageResponse {
        message: Some(text.to_string()),
        error: None,
    }
}

pub fn extracted(text: &str) -> ResumeUploadResponse {
    ResumeUploadResponse {
        message: Some("Resume uploaded successfully".to_string()),
        extracted_text: Some(text.to_string()),
        error: None,
    }
}

/// Writes a small resume file and keeps its directory alive
pub fn resume_file(name: &str) -> (tempfile::TempDir, std::path::PathBuf) {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(name);
    std::fs::write(&path, b"%PDF-1.4 Jane Doe, Rust engineer").unwrap();
    (dir, path)
}
