// src/router.rs
//! Landing page and job-upload view with client-side navigation

use std::fmt;
use std::sync::Arc;

use tracing::{error, info};

use crate::core::BackendApi;
use crate::error::WorkflowError;
use crate::notify::{Notification, Notifier};
use crate::types::JobSubmission;
use crate::workflow::JOB_UPLOAD_FAILED;

pub const REQUIRED_FIELD: &str = "Please fill out this field.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Home,
    UploadJob,
}

impl Route {
    pub fn path(&self) -> &'static str {
        match self {
            Route::Home => "/",
            Route::UploadJob => "/upload-job",
        }
    }

    pub fn resolve(path: &str) -> Option<Self> {
        match path.trim() {
            "/" | "" => Some(Route::Home),
            "/upload-job" => Some(Route::UploadJob),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HomeView {
    pub title: &'static str,
    pub tagline: &'static str,
    pub call_to_action: &'static str,
    pub target: Route,
}

impl fmt::Display for HomeView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.title)?;
        writeln!(f, "{}", self.tagline)?;
        write!(f, "[{}] -> {}", self.call_to_action, self.target.path())
    }
}

pub struct RouterApp {
    api: Arc<dyn BackendApi>,
    notifier: Arc<dyn Notifier>,
    current: Route,
}

impl RouterApp {
    pub fn new(api: Arc<dyn BackendApi>, notifier: Arc<dyn Notifier>) -> Self {
        Self {
            api,
            notifier,
            current: Route::Home,
        }
    }

    pub fn current_route(&self) -> Route {
        self.current
    }

    /// Switch views; unknown paths leave the current view in place
    pub fn navigate(&mut self, path: &str) -> Option<Route> {
        let route = Route::resolve(path)?;
        self.current = route;
        Some(route)
    }

    pub fn render_home(&self) -> HomeView {
        HomeView {
            title: "AI Job Screening System",
            tagline: "Upload job descriptions and resumes to find the best match.",
            call_to_action: "Get Started",
            target: Route::UploadJob,
        }
    }

    /// Submit the job-upload form. Every outcome ends in a toast.
    pub async fn submit_job(
        &self,
        job_title: &str,
        description: &str,
    ) -> Result<String, WorkflowError> {
        if job_title.is_empty() || description.is_empty() {
            self.notifier.notify(Notification::toast_error(REQUIRED_FIELD));
            return Err(WorkflowError::validation(REQUIRED_FIELD));
        }

        let job = JobSubmission::new(job_title, description);
        match self.api.upload_job(&job).await {
            Ok(response) => match (response.message, response.error) {
                (Some(message), _) => {
                    info!("Job uploaded: {}", message);
                    self.notifier
                        .notify(Notification::toast_success(message.clone()));
                    Ok(message)
                }
                (None, Some(err)) => {
                    self.notifier.notify(Notification::toast_error(err.clone()));
                    Err(WorkflowError::Application(err))
                }
                (None, None) => {
                    self.notifier.notify(Notification::toast_success(""));
                    Ok(String::new())
                }
            },
            Err(e) => {
                error!("Error uploading job: {:#}", e);
                self.notifier
                    .notify(Notification::toast_error(JOB_UPLOAD_FAILED));
                Err(WorkflowError::transport(JOB_UPLOAD_FAILED, e))
            }
        }
    }
}
