//! Command implementations for the CLI surface

pub mod base;
pub mod create;
pub mod list;
pub mod validators;

pub use base::{Command, CommandContext};
pub use create::CreateCommand;
pub use list::ListCommand;
