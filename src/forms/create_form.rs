//! "Create Issue" form

use super::dialog::FormIo;
use super::worker::{FormOutcome, FormRequest, Worker, is_http_failure};
use std::io;

pub const WINDOW_TITLE: &str = "Create Issue";
pub const MISSING_INPUT_MESSAGE: &str = "All fields must be filled.";
pub const HTTP_FAILURE_MESSAGE: &str = "Failed to create the issue. Check your input.";

/// Field values of the create form
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CreateForm {
    pub owner: String,
    pub repo: String,
    pub title: String,
    pub body: String,
}

impl CreateForm {
    pub fn to_request(&self) -> Result<FormRequest, &'static str> {
        let fields = [&self.owner, &self.repo, &self.title, &self.body];
        if fields.iter().any(|field| field.is_empty()) {
            return Err(MISSING_INPUT_MESSAGE);
        }

        Ok(FormRequest::CreateIssue {
            owner: self.owner.clone(),
            repo: self.repo.clone(),
            title: self.title.clone(),
            body: self.body.clone(),
        })
    }
}

pub fn run_create_form<I: FormIo>(io: &mut I, worker: &Worker) -> io::Result<()> {
    io.show_status(WINDOW_TITLE)?;

    let Some(owner) = io.prompt("Owner")? else {
        return Ok(());
    };
    let Some(repo) = io.prompt("Repository")? else {
        return Ok(());
    };
    let Some(title) = io.prompt("Title")? else {
        return Ok(());
    };
    let Some(body) = io.prompt_multiline("Body")? else {
        return Ok(());
    };

    let form = CreateForm {
        owner,
        repo,
        title,
        body,
    };
    let request = match form.to_request() {
        Ok(request) => request,
        Err(message) => return io.show_error("Error", message),
    };

    io.show_status("Creating issue...")?;
    match worker.submit(request).wait() {
        FormOutcome::IssueCreated(issue) => {
            io.show_info("Success", &format!("Issue created: {}", issue.url()))
        }
        FormOutcome::Failed(error) if is_http_failure(&error) => {
            io.show_error("Error", HTTP_FAILURE_MESSAGE)
        }
        FormOutcome::Failed(error) => io.show_error("Error", &format!("{error:#}")),
        FormOutcome::IssuesSaved { .. } | FormOutcome::NoIssues { .. } => Ok(()),
    }
}
