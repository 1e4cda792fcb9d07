//! Client for the AI job screening backend.
//!
//! Two surfaces share one typed backend client ([`core::BackendApi`]):
//! [`router::RouterApp`] (landing page + job upload view, toasts) and
//! [`workflow::WorkflowController`] (job, resume and match forms, alerts).

pub mod cli;
pub mod core;
pub mod error;
pub mod notify;
pub mod router;
pub mod session;
pub mod shell;
pub mod types;
pub mod workflow;

pub use crate::core::{ApiClient, BackendApi, ClientConfig};
pub use error::WorkflowError;
pub use router::{Route, RouterApp};
pub use session::SessionStore;
pub use workflow::WorkflowController;
