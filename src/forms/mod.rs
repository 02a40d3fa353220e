//! Form-based interface
//!
//! Launched when no subcommand is given. A main menu opens one of two modal
//! forms; each form collects its fields, validates them, hands the request to
//! a [`Worker`] and shows the outcome as a blocking dialog.
//!
//! - [`dialog`]: field prompts and dialogs ([`FormIo`], [`TerminalIo`])
//! - [`list_form`]: retrieve issues and save them to a file
//! - [`create_form`]: submit a new issue
//! - [`worker`]: off-thread execution of submissions

pub mod create_form;
pub mod dialog;
pub mod list_form;
pub mod worker;

pub use create_form::{CreateForm, run_create_form};
pub use dialog::{FormIo, TerminalIo};
pub use list_form::{ListForm, run_list_form};
pub use worker::{FormOutcome, FormRequest, PendingOutcome, Worker};

use std::io;

pub const APP_TITLE: &str = "GHCLI";
pub const MENU_PROMPT: &str = "[1] List Issues  [2] Create Issue  [q] Quit";

/// Run the main menu until the user quits or input ends
pub fn run_forms<I: FormIo>(io: &mut I, worker: &Worker) -> io::Result<()> {
    loop {
        io.show_status(APP_TITLE)?;
        let Some(choice) = io.prompt(MENU_PROMPT)? else {
            return Ok(());
        };

        match choice.to_lowercase().as_str() {
            "" => continue,
            "1" | "list" => run_list_form(io, worker)?,
            "2" | "create" => run_create_form(io, worker)?,
            "q" | "quit" => return Ok(()),
            other => io.show_error("Error", &format!("Unknown choice '{other}'"))?,
        }
    }
}
