// src/shell.rs
//! Interactive session: both surfaces driven from one line-oriented loop.
//! Session state (cached resume text, result area) lives until `quit` or EOF.

use anyhow::{Context, Result};
use std::path::PathBuf;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tracing::debug;

use crate::router::{Route, RouterApp};
use crate::workflow::WorkflowController;

const HELP: &str = "\
Commands:
  job                      upload a job description (prompts for title and description)
  resume <path>            upload a resume file
  match <job_id>           score the uploaded resume against a job
  jobs                     list stored job listings
  invite <email> [name]    send an interview invitation
  result                   show the match result area
  home                     show the landing page
  goto <path>              navigate to / or /upload-job
  post-job                 submit the upload-job view form
  help                     show this help
  quit                     end the session";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellCommand {
    Job,
    Resume(Option<PathBuf>),
    Match(String),
    Jobs,
    Invite { email: String, name: String },
    Result,
    Home,
    Goto(String),
    PostJob,
    Help,
    Quit,
    Empty,
    Unknown(String),
}

pub fn parse_line(line: &str) -> ShellCommand {
    let line = line.trim();
    let (head, rest) = match line.split_once(char::is_whitespace) {
        Some((head, rest)) => (head, rest.trim()),
        None => (line, ""),
    };

    match head {
        "" => ShellCommand::Empty,
        "job" => ShellCommand::Job,
        "resume" if rest.is_empty() => ShellCommand::Resume(None),
        "resume" => ShellCommand::Resume(Some(PathBuf::from(rest))),
        "match" => ShellCommand::Match(rest.to_string()),
        "jobs" => ShellCommand::Jobs,
        "invite" => {
            let (email, name) = rest.split_once(char::is_whitespace).unwrap_or((rest, ""));
            ShellCommand::Invite {
                email: email.to_string(),
                name: name.trim().to_string(),
            }
        }
        "result" => ShellCommand::Result,
        "home" => ShellCommand::Home,
        "goto" => ShellCommand::Goto(rest.to_string()),
        "post-job" => ShellCommand::PostJob,
        "help" | "?" => ShellCommand::Help,
        "quit" | "exit" => ShellCommand::Quit,
        other => ShellCommand::Unknown(other.to_string()),
    }
}

pub struct Shell<R, W> {
    input: R,
    output: W,
    router: RouterApp,
    workflow: WorkflowController,
}

impl<R, W> Shell<R, W>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    pub fn new(input: R, output: W, router: RouterApp, workflow: WorkflowController) -> Self {
        Self {
            input,
            output,
            router,
            workflow,
        }
    }

    pub fn workflow(&self) -> &WorkflowController {
        &self.workflow
    }

    pub fn router(&self) -> &RouterApp {
        &self.router
    }

    async fn write_line(&mut self, text: &str) -> Result<()> {
        self.output
            .write_all(format!("{}\n", text).as_bytes())
            .await
            .context("Failed to write to output")?;
        self.output.flush().await.context("Failed to flush output")
    }

    /// `None` on end of input
    async fn read_line(&mut self) -> Result<Option<String>> {
        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .await
            .context("Failed to read input")?;
        Ok((read > 0).then_some(line))
    }

    async fn prompt(&mut self, label: &str) -> Result<Option<String>> {
        self.output
            .write_all(label.as_bytes())
            .await
            .context("Failed to write to output")?;
        self.output.flush().await.context("Failed to flush output")?;
        Ok(self
            .read_line()
            .await?
            .map(|line| line.trim_end_matches(['\r', '\n']).to_string()))
    }

    async fn prompt_job_fields(&mut self) -> Result<Option<(String, String)>> {
        let Some(title) = self.prompt("Job Title: ").await? else {
            return Ok(None);
        };
        let Some(description) = self.prompt("Job Description: ").await? else {
            return Ok(None);
        };
        Ok(Some((title, description)))
    }

    /// Run until `quit` or end of input
    pub async fn run(&mut self) -> Result<()> {
        self.write_line("Job screening session. Type `help` for commands.")
            .await?;

        while let Some(line) = self.prompt("> ").await? {
            let command = parse_line(&line);
            debug!("Shell command: {:?}", command);

            if !self.dispatch(command).await? {
                break;
            }
        }
        Ok(())
    }

    /// Returns `false` when the session should end.
    /// Workflow failures are already surfaced by the notifier and never end the session.
    pub async fn dispatch(&mut self, command: ShellCommand) -> Result<bool> {
        match command {
            ShellCommand::Empty => {}
            ShellCommand::Job => {
                if let Some((title, description)) = self.prompt_job_fields().await? {
                    let _ = self.workflow.submit_job(&title, &description).await;
                }
            }
            ShellCommand::Resume(path) => {
                let _ = self.workflow.submit_resume(path.as_deref()).await;
            }
            ShellCommand::Match(job_id) => {
                if self.workflow.submit_match(&job_id).await.is_ok() {
                    self.show_result().await?;
                }
            }
            ShellCommand::Jobs => {
                if let Ok(listings) = self.workflow.list_jobs().await {
                    if listings.is_empty() {
                        self.write_line("No job listings found.").await?;
                    }
                    for job in listings {
                        self.write_line(&format!("{:<5} {}", job.id, job.title))
                            .await?;
                    }
                }
            }
            ShellCommand::Invite { email, name } => {
                let _ = self.workflow.schedule_interview(&email, &name).await;
            }
            ShellCommand::Result => self.show_result().await?,
            ShellCommand::Home => {
                let view = self.router.render_home().to_string();
                self.write_line(&view).await?;
            }
            ShellCommand::Goto(path) => match self.router.navigate(&path) {
                Some(route) => self.write_line(&format!("Now at {}", route.path())).await?,
                None => self.write_line(&format!("No route for {}", path)).await?,
            },
            ShellCommand::PostJob => {
                if self.router.current_route() != Route::UploadJob {
                    self.router.navigate(Route::UploadJob.path());
                }
                if let Some((title, description)) = self.prompt_job_fields().await? {
                    let _ = self.router.submit_job(&title, &description).await;
                }
            }
            ShellCommand::Help => self.write_line(HELP).await?,
            ShellCommand::Quit => return Ok(false),
            ShellCommand::Unknown(name) => {
                self.write_line(&format!("Unknown command: {}. Type `help`.", name))
                    .await?
            }
        }
        Ok(true)
    }

    async fn show_result(&mut self) -> Result<()> {
        let text = self
            .workflow
            .result_area()
            .unwrap_or("No match result yet.")
            .to_string();
        self.write_line(&text).await
    }
}
