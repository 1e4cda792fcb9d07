// src/core/service_client.rs
//! HTTP client for the screening backend - JSON for everything except the resume upload

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use serde::de::DeserializeOwned;
use tracing::{debug, error, info};

use super::backend::{
    BackendApi, JOB_LISTINGS_ENDPOINT, MATCH_RESUME_ENDPOINT, SCHEDULE_INTERVIEW_ENDPOINT,
    UPLOAD_JOB_ENDPOINT, UPLOAD_RESUME_ENDPOINT,
};
use super::config_manager::ClientConfig;
use crate::types::{
    InterviewInvite, JobListing, JobListingsResponse, JobSubmission, MatchOutcome, MatchRequest,
    MatchResponse, MessageResponse, ResumeUpload, ResumeUploadResponse,
};

const RESUME_FIELD: &str = "file";

pub struct ApiClient {
    client: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    /// Create new client; no timeout unless the config sets one
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(secs) = config.timeout_seconds {
            builder = builder.timeout(std::time::Duration::from_secs(secs));
        }
        let client = builder.build().context("Failed to create HTTP client")?;

        Ok(Self {
            client,
            base_url: config.base_url.clone(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn endpoint_url(&self, endpoint: &str) -> String {
        format!("{}{}", self.base_url, endpoint)
    }

    /// POST a JSON payload and decode the JSON body
    pub async fn post_json<T, R>(&self, endpoint: &str, payload: &T) -> Result<R>
    where
        T: serde::Serialize + ?Sized,
        R: DeserializeOwned,
    {
        let url = self.endpoint_url(endpoint);
        debug!("POST {}", url);

        let response = self
            .client
            .post(&url)
            .json(payload)
            .send()
            .await
            .with_context(|| format!("Failed to POST to {}", url))?;

        decode_body(response).await
    }

    /// GET and decode the JSON body
    pub async fn get<R>(&self, endpoint: &str) -> Result<R>
    where
        R: DeserializeOwned,
    {
        let url = self.endpoint_url(endpoint);
        debug!("GET {}", url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .with_context(|| format!("Failed to GET from {}", url))?;

        decode_body(response).await
    }
}

/// The body is decoded whatever the status: the backend reports refusals as
/// JSON `error` fields on 4xx responses.
async fn decode_body<R: DeserializeOwned>(response: reqwest::Response) -> Result<R> {
    let status = response.status();
    let response_text = response
        .text()
        .await
        .context("Failed to read response text")?;

    if !status.is_success() {
        error!("Backend returned {}: {}", status, response_text);
    }

    serde_json::from_str(&response_text).with_context(|| {
        format!(
            "Failed to parse response (status {}). Raw response: {}",
            status, response_text
        )
    })
}

#[async_trait]
impl BackendApi for ApiClient {
    async fn upload_job(&self, job: &JobSubmission) -> Result<MessageResponse> {
        info!("Uploading job description: {}", job.job_title);
        self.post_json(UPLOAD_JOB_ENDPOINT, job).await
    }

    async fn upload_resume(&self, resume: &ResumeUpload) -> Result<ResumeUploadResponse> {
        let url = self.endpoint_url(UPLOAD_RESUME_ENDPOINT);

        let form = Form::new().part(
            RESUME_FIELD,
            Part::bytes(resume.bytes.clone())
                .file_name(resume.file_name.clone())
                .mime_str(resume.content_type)
                .context("Failed to create multipart")?,
        );

        info!(
            "Uploading resume {} ({} bytes) to {}",
            resume.file_name,
            resume.bytes.len(),
            url
        );

        let response = self
            .client
            .post(&url)
            .multipart(form)
            .send()
            .await
            .context("HTTP request failed")?;

        decode_body(response).await
    }

    async fn match_resume(&self, request: &MatchRequest) -> Result<MatchOutcome> {
        info!("Requesting match score for job {}", request.job_id);
        let response: MatchResponse = self.post_json(MATCH_RESUME_ENDPOINT, request).await?;
        MatchOutcome::try_from(response)
    }

    async fn list_jobs(&self) -> Result<Vec<JobListing>> {
        let response: JobListingsResponse = self.get(JOB_LISTINGS_ENDPOINT).await?;
        Ok(response.job_listings)
    }

    async fn schedule_interview(&self, invite: &InterviewInvite) -> Result<MessageResponse> {
        info!("Scheduling interview for {}", invite.candidate_email);
        self.post_json(SCHEDULE_INTERVIEW_ENDPOINT, invite).await
    }
}
