// src/workflow.rs
//! Form-driven workflow: job upload, resume upload, match request.
//!
//! The three flows are independent; the only state they share is the
//! extracted resume text kept in the controller's [`SessionStore`]. Each
//! handler validates first, awaits at most one backend call, then notifies.

use std::path::Path;
use std::sync::Arc;

use tracing::{error, info, warn};

use crate::core::BackendApi;
use crate::error::WorkflowError;
use crate::notify::{Notification, Notifier};
use crate::session::SessionStore;
use crate::types::{
    InterviewInvite, JobListing, JobSubmission, MatchOutcome, MatchRequest, MessageResponse,
    ResumeUpload,
};

pub const MISSING_JOB_FIELDS: &str = "Please enter a job title and description.";
pub const MISSING_RESUME_FILE: &str = "Please select a PDF resume.";
pub const MISSING_JOB_ID: &str = "Please enter a Job ID.";
pub const MISSING_RESUME_TEXT: &str = "Please upload a resume first.";
pub const MISSING_CANDIDATE_EMAIL: &str = "Candidate email is required";

pub const JOB_UPLOAD_FAILED: &str = "Failed to upload job description. Try again.";
pub const RESUME_UPLOAD_FAILED: &str = "Failed to upload resume. Ensure your backend is running.";
pub const MATCH_FAILED: &str = "Failed to match resume. Try again.";
pub const LIST_JOBS_FAILED: &str = "Failed to load job listings. Try again.";
pub const INTERVIEW_FAILED: &str = "Failed to schedule interview. Try again.";

/// Text written into the result area for a score
pub fn format_match_score(score: f64) -> String {
    format!("Match Score: {}%", score)
}

pub struct WorkflowController {
    api: Arc<dyn BackendApi>,
    notifier: Arc<dyn Notifier>,
    session: SessionStore,
    result_area: Option<String>,
}

impl WorkflowController {
    pub fn new(api: Arc<dyn BackendApi>, notifier: Arc<dyn Notifier>) -> Self {
        Self {
            api,
            notifier,
            session: SessionStore::new(),
            result_area: None,
        }
    }

    pub fn session(&self) -> &SessionStore {
        &self.session
    }

    /// Current content of the match result area
    pub fn result_area(&self) -> Option<&str> {
        self.result_area.as_deref()
    }

    fn fail(&self, err: WorkflowError) -> WorkflowError {
        self.notifier
            .notify(Notification::alert(err.user_message().to_string()));
        err
    }

    /// Alert the server's message, or its error when there is no message
    fn report(&self, response: MessageResponse) -> Result<String, WorkflowError> {
        let error = response.error.filter(|e| !e.is_empty());
        match (response.message, error) {
            (Some(message), _) => {
                self.notifier.notify(Notification::alert(message.clone()));
                Ok(message)
            }
            (None, Some(err)) => Err(self.fail(WorkflowError::Application(err))),
            (None, None) => {
                self.notifier.notify(Notification::alert(""));
                Ok(String::new())
            }
        }
    }

    pub async fn submit_job(
        &mut self,
        job_title: &str,
        description: &str,
    ) -> Result<String, WorkflowError> {
        let job_title = job_title.trim();
        let description = description.trim();

        if job_title.is_empty() || description.is_empty() {
            return Err(self.fail(WorkflowError::validation(MISSING_JOB_FIELDS)));
        }

        let job = JobSubmission::new(job_title, description);
        match self.api.upload_job(&job).await {
            Ok(response) => self.report(response),
            Err(e) => {
                error!("Error uploading job: {:#}", e);
                Err(self.fail(WorkflowError::transport(JOB_UPLOAD_FAILED, e)))
            }
        }
    }

    /// Upload the chosen resume and cache the text the backend extracted
    pub async fn submit_resume(&mut self, file: Option<&Path>) -> Result<String, WorkflowError> {
        let Some(path) = file.filter(|p| !p.as_os_str().is_empty()) else {
            return Err(self.fail(WorkflowError::validation(MISSING_RESUME_FILE)));
        };

        let upload = match ResumeUpload::from_path(path).await {
            Ok(upload) => upload,
            Err(e) => {
                error!("Error preparing resume upload: {:#}", e);
                return Err(self.fail(WorkflowError::transport(RESUME_UPLOAD_FAILED, e)));
            }
        };

        let response = match self.api.upload_resume(&upload).await {
            Ok(response) => response,
            Err(e) => {
                error!("Error uploading resume: {:#}", e);
                return Err(self.fail(WorkflowError::transport(RESUME_UPLOAD_FAILED, e)));
            }
        };

        // A text-less upload must not leave an older resume matchable
        match response.extracted_text {
            Some(text) => {
                info!("Cached {} characters of resume text", text.len());
                self.session.store_resume_text(text);
            }
            None => {
                warn!("Resume upload response carried no extracted_text, clearing cached text");
                self.session.clear();
            }
        }

        self.report(MessageResponse {
            message: response.message,
            error: response.error,
        })
    }

    pub async fn submit_match(&mut self, job_id: &str) -> Result<f64, WorkflowError> {
        let job_id = job_id.trim();

        if job_id.is_empty() {
            return Err(self.fail(WorkflowError::validation(MISSING_JOB_ID)));
        }

        let Some(resume_text) = self.session.resume_text() else {
            return Err(self.fail(WorkflowError::validation(MISSING_RESUME_TEXT)));
        };

        let request = MatchRequest {
            job_id: job_id.to_string(),
            resume_text: resume_text.to_string(),
        };

        match self.api.match_resume(&request).await {
            Ok(MatchOutcome::Score(score)) => {
                info!("Job {} matched with score {}", job_id, score);
                self.result_area = Some(format_match_score(score));
                Ok(score)
            }
            Ok(MatchOutcome::Rejected(err)) => Err(self.fail(WorkflowError::Application(err))),
            Err(e) => {
                error!("Error matching resume: {:#}", e);
                Err(self.fail(WorkflowError::transport(MATCH_FAILED, e)))
            }
        }
    }

    pub async fn list_jobs(&self) -> Result<Vec<JobListing>, WorkflowError> {
        self.api.list_jobs().await.map_err(|e| {
            error!("Error loading job listings: {:#}", e);
            self.fail(WorkflowError::transport(LIST_JOBS_FAILED, e))
        })
    }

    pub async fn schedule_interview(
        &mut self,
        candidate_email: &str,
        candidate_name: &str,
    ) -> Result<String, WorkflowError> {
        let candidate_email = candidate_email.trim();
        if candidate_email.is_empty() {
            return Err(self.fail(WorkflowError::validation(MISSING_CANDIDATE_EMAIL)));
        }

        let invite = InterviewInvite {
            candidate_email: candidate_email.to_string(),
            candidate_name: candidate_name.trim().to_string(),
        };

        match self.api.schedule_interview(&invite).await {
            Ok(response) => self.report(response),
            Err(e) => {
                error!("Error scheduling interview: {:#}", e);
                Err(self.fail(WorkflowError::transport(INTERVIEW_FAILED, e)))
            }
        }
    }
}
