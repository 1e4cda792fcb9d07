// src/core/mod.rs
//! Backend access and client configuration

pub mod backend;
pub mod config_manager;
pub mod service_client;

pub use backend::BackendApi;
pub use config_manager::{ClientConfig, ConfigOverrides};
pub use service_client::ApiClient;
