mod common;

use std::sync::Arc;

use common::{message, Call, FakeBackend};
use job_screening::notify::{MemoryNotifier, Notification};
use job_screening::router::REQUIRED_FIELD;
use job_screening::types::{JobSubmission, MessageResponse};
use job_screening::workflow::JOB_UPLOAD_FAILED;
use job_screening::{Route, RouterApp, WorkflowError};

fn router(backend: &Arc<FakeBackend>) -> (RouterApp, MemoryNotifier) {
    let notifier = MemoryNotifier::new();
    let app = RouterApp::new(backend.clone(), Arc::new(notifier.clone()));
    (app, notifier)
}

#[test]
fn home_links_to_upload_view() {
    let backend = Arc::new(FakeBackend::default());
    let (mut app, _) = router(&backend);

    let view = app.render_home();
    assert_eq!(view.title, "AI Job Screening System");
    assert_eq!(app.current_route(), Route::Home);

    assert_eq!(app.navigate(view.target.path()), Some(Route::UploadJob));
    assert_eq!(app.current_route(), Route::UploadJob);
    assert!(backend.calls().is_empty());
}

#[test]
fn unknown_path_keeps_current_view() {
    let backend = Arc::new(FakeBackend::default());
    let (mut app, _) = router(&backend);

    app.navigate("/upload-job");
    assert_eq!(app.navigate("/nowhere"), None);
    assert_eq!(app.current_route(), Route::UploadJob);
}

#[tokio::test]
async fn submit_job_toasts_server_message() {
    let backend = Arc::new(FakeBackend {
        job_response: message("Job uploaded successfully"),
        ..Default::default()
    });
    let (mut app, notifier) = router(&backend);
    app.navigate("/upload-job");

    app.submit_job("Data Analyst", "SQL and dashboards")
        .await
        .unwrap();

    assert_eq!(
        backend.calls(),
        vec![Call::UploadJob(JobSubmission::new(
            "Data Analyst",
            "SQL and dashboards"
        ))]
    );
    assert_eq!(
        notifier.notifications(),
        vec![Notification::toast_success("Job uploaded successfully")]
    );
    assert_eq!(app.current_route(), Route::UploadJob);
}

#[tokio::test]
async fn submit_job_toasts_server_error() {
    let backend = Arc::new(FakeBackend {
        job_response: MessageResponse {
            message: None,
            error: Some("Job listings are required".to_string()),
        },
        ..Default::default()
    });
    let (app, notifier) = router(&backend);

    let err = app.submit_job("Title", "Body").await.unwrap_err();

    assert!(matches!(err, WorkflowError::Application(_)));
    assert_eq!(
        notifier.last(),
        Some(Notification::toast_error("Job listings are required"))
    );
}

#[tokio::test]
async fn required_fields_block_the_request() {
    let backend = Arc::new(FakeBackend::default());
    let (app, notifier) = router(&backend);

    app.submit_job("", "Body").await.unwrap_err();

    assert!(backend.calls().is_empty());
    assert_eq!(notifier.last(), Some(Notification::toast_error(REQUIRED_FIELD)));
}

#[tokio::test]
async fn transport_failure_toasts_and_keeps_route() {
    let backend = Arc::new(FakeBackend::offline());
    let (mut app, notifier) = router(&backend);
    app.navigate("/upload-job");

    let err = app.submit_job("Title", "Body").await.unwrap_err();

    assert!(matches!(err, WorkflowError::Transport { .. }));
    assert_eq!(notifier.last(), Some(Notification::toast_error(JOB_UPLOAD_FAILED)));
    assert_eq!(app.current_route(), Route::UploadJob);
}
