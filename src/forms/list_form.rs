//! "List Issues" form: retrieve issues and save them to a JSON file

use super::dialog::FormIo;
use super::worker::{FormOutcome, FormRequest, Worker, is_http_failure};
use std::io;
use std::path::PathBuf;

pub const WINDOW_TITLE: &str = "List Issues";
pub const MISSING_INPUT_MESSAGE: &str =
    "Please provide all required inputs: Owner, Repository, and Output File.";
pub const HTTP_FAILURE_MESSAGE: &str = "Failed to retrieve issues. Check the repository details.";

/// Field values of the list form
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListForm {
    pub owner: String,
    pub repo: String,
    pub output_file: String,
}

impl ListForm {
    /// Turn the fields into a request, or the validation message to show
    pub fn to_request(&self) -> Result<FormRequest, &'static str> {
        if self.owner.is_empty() || self.repo.is_empty() || self.output_file.is_empty() {
            return Err(MISSING_INPUT_MESSAGE);
        }

        Ok(FormRequest::ListIssues {
            owner: self.owner.clone(),
            repo: self.repo.clone(),
            output: PathBuf::from(&self.output_file),
        })
    }
}

/// Collect the fields, submit them and show the result
pub fn run_list_form<I: FormIo>(io: &mut I, worker: &Worker) -> io::Result<()> {
    io.show_status(WINDOW_TITLE)?;

    let Some(owner) = io.prompt("Owner")? else {
        return Ok(());
    };
    let Some(repo) = io.prompt("Repository")? else {
        return Ok(());
    };
    let Some(output_file) = io.prompt("Output File")? else {
        return Ok(());
    };

    let form = ListForm {
        owner,
        repo,
        output_file,
    };
    let request = match form.to_request() {
        Ok(request) => request,
        Err(message) => return io.show_error("Error", message),
    };

    io.show_status("Retrieving issues...")?;
    match worker.submit(request).wait() {
        FormOutcome::IssuesSaved { path, .. } => io.show_info(
            "Success",
            &format!("Issues successfully saved to {}", path.display()),
        ),
        FormOutcome::NoIssues { owner, repo } => {
            io.show_info("Info", &format!("No issues found in {owner}/{repo}"))
        }
        FormOutcome::Failed(error) if is_http_failure(&error) => {
            io.show_error("Error", HTTP_FAILURE_MESSAGE)
        }
        FormOutcome::Failed(error) => io.show_error("Error", &format!("{error:#}")),
        FormOutcome::IssueCreated(_) => Ok(()),
    }
}
