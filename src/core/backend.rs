// src/core/backend.rs
//! Backend seam shared by both presentation surfaces

use anyhow::Result;
use async_trait::async_trait;

use crate::types::{
    InterviewInvite, JobListing, JobSubmission, MatchOutcome, MatchRequest, MessageResponse,
    ResumeUpload, ResumeUploadResponse,
};

pub const UPLOAD_JOB_ENDPOINT: &str = "/upload_job";
pub const UPLOAD_RESUME_ENDPOINT: &str = "/upload_resume";
pub const MATCH_RESUME_ENDPOINT: &str = "/match_resume";
pub const JOB_LISTINGS_ENDPOINT: &str = "/get_job_listings";
pub const SCHEDULE_INTERVIEW_ENDPOINT: &str = "/schedule_interview";

/// Every call the screening backend exposes to this client.
///
/// An `Err` means the exchange itself failed (request construction, network,
/// or a body that is not the expected JSON). Application-level refusals come
/// back as `Ok` values carrying the server's `error` field.
#[async_trait]
pub trait BackendApi: Send + Sync {
    async fn upload_job(&self, job: &JobSubmission) -> Result<MessageResponse>;

    async fn upload_resume(&self, resume: &ResumeUpload) -> Result<ResumeUploadResponse>;

    async fn match_resume(&self, request: &MatchRequest) -> Result<MatchOutcome>;

    async fn list_jobs(&self) -> Result<Vec<JobListing>>;

    async fn schedule_interview(&self, invite: &InterviewInvite) -> Result<MessageResponse>;
}
