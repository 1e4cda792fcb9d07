// src/cli.rs
use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;

use crate::core::{ApiClient, BackendApi, ClientConfig, ConfigOverrides};
use crate::notify::{ConsoleNotifier, Notifier};
use crate::router::RouterApp;
use crate::shell::Shell;
use crate::workflow::WorkflowController;

#[derive(Parser)]
#[command(name = "jobscreen")]
#[command(about = "Client for the AI job screening backend")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Backend base URL (default http://127.0.0.1:5000)
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    /// YAML config file (default ./jobscreen.yaml when present)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Request timeout in seconds; unset means no timeout
    #[arg(long, global = true)]
    pub timeout: Option<u64>,

    /// Write JSON logs to this file instead of stderr
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Show the landing page
    Home,
    /// Submit the upload-job view form
    PostJob {
        #[arg(long)]
        title: String,
        #[arg(long)]
        description: String,
    },
    /// Upload a job description through the workflow form
    UploadJob {
        #[arg(long)]
        title: String,
        #[arg(long)]
        description: String,
    },
    /// Upload a resume file
    UploadResume { file: Option<PathBuf> },
    /// List stored job listings
    ListJobs,
    /// Send an interview invitation
    Invite {
        #[arg(long)]
        email: String,
        #[arg(long, default_value = "")]
        name: String,
    },
    /// Interactive session: upload a resume, then match it against jobs
    Session,
}

impl Cli {
    pub fn config_overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            api_url: self.api_url.clone(),
            timeout_seconds: self.timeout,
            config_path: self.config.clone(),
        }
    }
}

/// Failures already reached the user through the notifier, so they do not
/// turn into a process error here.
pub async fn handle_command(cli: Cli) -> Result<()> {
    let config = ClientConfig::load(&cli.config_overrides())?;
    let api: Arc<dyn BackendApi> = Arc::new(ApiClient::new(&config)?);
    let notifier: Arc<dyn Notifier> = Arc::new(ConsoleNotifier);

    let router = RouterApp::new(api.clone(), notifier.clone());
    let mut workflow = WorkflowController::new(api, notifier);

    match cli.command {
        Command::Home => {
            println!("{}", router.render_home());
        }
        Command::PostJob { title, description } => {
            let _ = router.submit_job(&title, &description).await;
        }
        Command::UploadJob { title, description } => {
            let _ = workflow.submit_job(&title, &description).await;
        }
        Command::UploadResume { file } => {
            if workflow.submit_resume(file.as_deref()).await.is_ok() {
                if let Some(text) = workflow.session().resume_text() {
                    println!("Extracted {} characters of resume text", text.len());
                }
            }
        }
        Command::ListJobs => {
            if let Ok(listings) = workflow.list_jobs().await {
                if listings.is_empty() {
                    println!("No job listings found.");
                } else {
                    println!("{:<5} {:<30} {}", "ID", "Title", "Description");
                    println!("{}", "-".repeat(80));
                    for job in listings {
                        println!("{:<5} {:<30} {}", job.id, job.title, summarize(&job.description));
                    }
                }
            }
        }
        Command::Invite { email, name } => {
            let _ = workflow.schedule_interview(&email, &name).await;
        }
        Command::Session => {
            info!("Starting interactive session");
            let stdin = tokio::io::BufReader::new(tokio::io::stdin());
            let mut shell = Shell::new(stdin, tokio::io::stdout(), router, workflow);
            shell.run().await?;
        }
    }

    Ok(())
}

fn summarize(text: &str) -> String {
    const MAX: usize = 40;
    let single_line = text.split_whitespace().collect::<Vec<_>>().join(" ");
    if single_line.chars().count() > MAX {
        format!("{}…", single_line.chars().take(MAX).collect::<String>())
    } else {
        single_line
    }
}
